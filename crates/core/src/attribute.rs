//! Catalog attribute tuples

use serde::{Deserialize, Serialize};

use crate::erp::or_false;

/// One `(attribute, value)` pair attached to a product template
///
/// Either side may be missing in ERP payloads; such pairs are dropped during
/// aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValue {
    /// Attribute label (e.g. "Color")
    #[serde(default, deserialize_with = "or_false")]
    pub attribute_name: Option<String>,
    /// Attribute value (e.g. "Red")
    #[serde(default, deserialize_with = "or_false")]
    pub value_name: Option<String>,
}

impl AttributeValue {
    pub fn new(attribute_name: impl Into<String>, value_name: impl Into<String>) -> Self {
        Self {
            attribute_name: Some(attribute_name.into()),
            value_name: Some(value_name.into()),
        }
    }

    /// Label, if present and not blank
    pub fn label(&self) -> Option<&str> {
        non_blank(self.attribute_name.as_deref())
    }

    /// Value, if present and not blank
    pub fn value(&self) -> Option<&str> {
        non_blank(self.value_name.as_deref())
    }

    /// Both sides present and not blank
    pub fn is_complete(&self) -> bool {
        self.label().is_some() && self.value().is_some()
    }
}

impl<A: Into<String>, V: Into<String>> From<(A, V)> for AttributeValue {
    fn from((attribute_name, value_name): (A, V)) -> Self {
        Self::new(attribute_name, value_name)
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

/// Attribute pair tagged with the product template it belongs to
///
/// Flat row shape used when attribute lines are exported in bulk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateAttribute {
    pub template_id: i64,
    #[serde(flatten)]
    pub value: AttributeValue,
}
