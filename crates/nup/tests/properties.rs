//! Property tests for the update state machine.

use nup::{SliceUpdate, Update};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Record {
    #[serde(default, skip_serializing_if = "Update::is_noop")]
    value: Update<i64>,
    #[serde(default, skip_serializing_if = "Update::is_noop")]
    text: Update<String>,
    #[serde(default, skip_serializing_if = "SliceUpdate::is_noop")]
    list: SliceUpdate<i64>,
}

fn update_strategy<T: Clone + std::fmt::Debug + 'static>(
    value: impl Strategy<Value = T> + 'static,
) -> impl Strategy<Value = Update<T>> {
    prop_oneof![
        Just(Update::Noop),
        Just(Update::Remove),
        value.prop_map(Update::Set),
    ]
}

fn slice_update_strategy() -> impl Strategy<Value = SliceUpdate<i64>> {
    prop_oneof![
        Just(SliceUpdate::Noop),
        Just(SliceUpdate::Remove),
        prop::collection::vec(any::<i64>(), 0..6).prop_map(SliceUpdate::Set),
    ]
}

proptest! {
    #[test]
    fn apply_semantics(x in any::<i64>(), v in any::<i64>()) {
        prop_assert_eq!(Update::<i64>::noop().apply(x), x);
        prop_assert_eq!(Update::<i64>::remove().apply(x), 0);
        prop_assert_eq!(Update::set(v).apply(x), v);
    }

    #[test]
    fn diff_preserves_effect(u in update_strategy(-3i64..3), x in -3i64..3) {
        let effect = u.apply(x);
        prop_assert_eq!(u.clone().diff(&x).apply(x), effect);
    }

    #[test]
    fn diff_collapses_no_effect(u in update_strategy(-3i64..3), x in -3i64..3) {
        if u.apply(x) == x {
            prop_assert_eq!(u.diff(&x), Update::noop());
        } else {
            prop_assert_eq!(u.clone().diff(&x), u);
        }
    }

    #[test]
    fn diff_option_preserves_effect(
        u in update_strategy(-2i64..2),
        x in prop::option::of(-2i64..2),
    ) {
        let effect = u.apply_option(x);
        prop_assert_eq!(u.clone().diff_option(x.as_ref()).apply_option(x), effect);
    }

    #[test]
    fn slice_diff_preserves_effect(
        u in slice_update_strategy(),
        x in prop::collection::vec(any::<i64>(), 0..3),
    ) {
        let effect = u.apply(x.clone());
        let diffed = u.clone().diff(&x);
        prop_assert_eq!(diffed.apply(x.clone()), effect.clone());
        if effect == x {
            prop_assert_eq!(diffed, SliceUpdate::noop());
        }
    }

    #[test]
    fn serde_round_trip(
        value in update_strategy(any::<i64>()),
        text in update_strategy(".*"),
        list in slice_update_strategy(),
    ) {
        let record = Record { value, text, list };
        let encoded = serde_json::to_vec(&record).unwrap();
        let decoded: Record = serde_json::from_slice(&encoded).unwrap();
        prop_assert_eq!(decoded, record);
    }

    #[test]
    fn is_set_to_matches_equality(u in update_strategy(0i64..4), x in 0i64..4) {
        prop_assert_eq!(u.is_set_to(&x), u == Update::set(x));
    }
}
