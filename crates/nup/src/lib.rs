//! nup ("nullable update") - tri-state updates to record fields.
//!
//! Partial-update payloads are usually JSON objects where each key is an
//! update to one field: a value replaces the field, `null` clears it, and an
//! absent key leaves it alone. `Option<T>` cannot tell "absent" from "null",
//! so it cannot carry these payloads faithfully. [`Update`] and
//! [`SliceUpdate`] can: each is a no-op, a removal, or a set.
//!
//! # Serde
//!
//! Both types serialize and deserialize like `Option<T>`. Record fields of
//! these types must be defaulted so a missing key decodes as a no-op, and
//! no-ops must be skipped when serializing:
//!
//! ```ignore
//! #[derive(Serialize, Deserialize, Default)]
//! struct PersonUpdate {
//!     #[serde(default, skip_serializing_if = "Update::is_noop")]
//!     name: Update<String>,
//!     #[serde(default, skip_serializing_if = "SliceUpdate::is_noop")]
//!     tags: SliceUpdate<String>,
//! }
//! ```
//!
//! Without `#[serde(default)]` a missing key is handed to the type as `null`
//! and decodes as a removal.
//!
//! For encoding records without serde attributes see the `nup-json` crate.

mod error;
mod operation;
mod slice_update;
mod update;

pub use error::NupError;
pub use operation::Operation;
pub use slice_update::SliceUpdate;
pub use update::Update;
