//! Ordered attribute map

use serde::ser::{Serialize, SerializeMap, Serializer};

use chat_bridge_core::AttributeValue;

/// Ordered `label -> [values]` mapping produced by aggregation
///
/// Labels are unique and values within a label are unique. Iteration and
/// serialization follow display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: Vec<(String, Vec<String>)>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries must already be unique and in display order
    pub(crate) fn from_ordered(entries: Vec<(String, Vec<String>)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Values for a label
    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, values)| values.as_slice())
    }

    /// Labels in display order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(label, values)| (label.as_str(), values.as_slice()))
    }

    /// Flatten back into attribute pairs, in display order
    pub fn to_values(&self) -> Vec<AttributeValue> {
        self.iter()
            .flat_map(|(label, values)| {
                values
                    .iter()
                    .map(move |value| AttributeValue::new(label, value.as_str()))
            })
            .collect()
    }
}

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, values) in &self.entries {
            map.serialize_entry(label, values)?;
        }
        map.end()
    }
}
