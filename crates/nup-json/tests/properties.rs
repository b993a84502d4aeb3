//! Property tests for the structure encoder.

use nup::{SliceUpdate, Update};
use nup_json::{marshal_record, serialize_record, unmarshal_json, Field, Record};
use proptest::prelude::*;
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct Item {
    label: Update<String>,
    weight: Update<i64>,
}

impl Record for Item {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::update("Label", &self.label).tag("label"),
            Field::update("Weight", &self.weight).tag("weight,omitempty"),
        ]
    }
}

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_record(self, serializer)
    }
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct Order {
    id: i64,
    note: Update<String>,
    tags: SliceUpdate<String>,
    primary: Item,
    items: Vec<Item>,
}

impl Record for Order {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::value("ID", &self.id).tag("id,omitempty"),
            Field::update("Note", &self.note).tag("note"),
            Field::update("Tags", &self.tags).tag("tags"),
            Field::record("Primary", &self.primary).tag("primary"),
            Field::value("Items", &self.items).tag("items,omitempty"),
        ]
    }
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

fn slice_update_strategy() -> impl Strategy<Value = SliceUpdate<String>> {
    prop_oneof![
        Just(SliceUpdate::Noop),
        Just(SliceUpdate::Remove),
        prop::collection::vec("[a-z]{0,4}", 0..4).prop_map(SliceUpdate::Set),
    ]
}

fn item_strategy() -> impl Strategy<Value = Item> {
    (update_strategy(".*"), update_strategy(any::<i64>()))
        .prop_map(|(label, weight)| Item { label, weight })
}

fn order_strategy() -> impl Strategy<Value = Order> {
    (
        any::<i64>(),
        update_strategy(".*"),
        slice_update_strategy(),
        item_strategy(),
        prop::collection::vec(item_strategy(), 0..4),
    )
        .prop_map(|(id, note, tags, primary, items)| Order {
            id,
            note,
            tags,
            primary,
            items,
        })
}

proptest! {
    #[test]
    fn marshal_then_unmarshal_round_trips(order in order_strategy()) {
        let data = marshal_record(&order).unwrap();
        let decoded: Order = unmarshal_json(&data).unwrap();
        prop_assert_eq!(decoded, order);
    }

    #[test]
    fn noop_updates_never_reach_the_wire(item in item_strategy()) {
        let data = marshal_record(&item).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&data).unwrap();
        let object = value.as_object().unwrap();
        prop_assert_eq!(object.contains_key("label"), item.label.is_change());
        prop_assert_eq!(object.contains_key("weight"), item.weight.is_change());
    }

    #[test]
    fn record_field_and_serialize_agree(item in item_strategy()) {
        let direct = marshal_record(&item).unwrap();
        let through_serde = serde_json::to_vec(&item).unwrap();
        prop_assert_eq!(direct, through_serde);
    }
}
