//! ERP wire-format helpers
//!
//! The ERP's record API encodes "no value" as the boolean `false` rather
//! than `null`, and many-to-one references as a `[id, display_name]` pair.

use serde::{Deserialize, Deserializer, Serialize};

/// Many-to-one reference as returned by the ERP: `[id, display_name]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Many2One(pub i64, pub String);

impl Many2One {
    pub fn id(&self) -> i64 {
        self.0
    }

    pub fn display_name(&self) -> &str {
        &self.1
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ValueOrFlag<T> {
    Value(T),
    Flag(bool),
}

/// Deserialize a field that may be a value, `false` or `null`
///
/// Use with `#[serde(default, deserialize_with = "or_false")]` on an
/// `Option<T>` field.
pub fn or_false<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<ValueOrFlag<T>>::deserialize(deserializer)? {
        Some(ValueOrFlag::Value(value)) => Ok(Some(value)),
        Some(ValueOrFlag::Flag(_)) | None => Ok(None),
    }
}
