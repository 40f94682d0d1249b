//! Typed record attributes that still accept whatever the client sends.
//!
//! A record field is `Option<FieldValue<T>>`:
//! - `None` means the key was absent and is left untouched on update.
//! - `Some(FieldValue::Known(_))` is a value of the attribute's usual type.
//! - `Some(FieldValue::Raw(_))` is any other JSON value, `null` included.
//!   It is stored and echoed back verbatim.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue<T> {
    Known(T),
    Raw(Value),
}

impl<T> FieldValue<T> {
    pub fn known(&self) -> Option<&T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Raw(Value::Null))
    }
}

impl<T> From<T> for FieldValue<T> {
    fn from(value: T) -> Self {
        Self::Known(value)
    }
}

impl FieldValue<String> {
    pub fn as_str(&self) -> Option<&str> {
        self.known().map(String::as_str)
    }
}

/// Deserialize a present key, keeping an explicit `null` as
/// `Some(FieldValue::Raw(Value::Null))` instead of collapsing it to `None`.
/// Pair with `#[serde(default)]` so an absent key stays `None`.
pub fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<FieldValue<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    FieldValue::<T>::deserialize(deserializer).map(Some)
}

/// Replace `target` when the patch carries the key, `null` included.
pub fn merge_field<T>(target: &mut Option<FieldValue<T>>, patch: Option<FieldValue<T>>) {
    if patch.is_some() {
        *target = patch;
    }
}
