//! Free-form record attributes.
//!
//! Users, presets and shapes accept attributes beyond their typed fields
//! (map shapes carry arbitrary geometry, for example). Those land in an
//! [`Attributes`] map that is flattened into the record on the wire.

use serde_json::{Map, Value};

/// Untyped attributes carried alongside a record's typed fields
pub type Attributes = Map<String, Value>;

/// Keys owned by the collection that a payload may never set
const RESERVED_KEYS: &[&str] = &["id"];

/// Shallow-merge `patch` into `target`, dropping reserved keys.
pub fn merge_attributes(target: &mut Attributes, patch: Attributes) {
    for (key, value) in patch {
        if RESERVED_KEYS.contains(&key.as_str()) {
            continue;
        }
        target.insert(key, value);
    }
}
