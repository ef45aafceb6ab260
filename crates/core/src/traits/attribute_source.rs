//! Attribute source trait

use async_trait::async_trait;
use std::collections::HashMap;

use crate::{AttributeValue, SourceError, TemplateAttribute};

/// Supplies raw attribute pairs for a product template
#[async_trait]
pub trait AttributeSource: Send + Sync {
    async fn attribute_values(&self, template_id: i64) -> Result<Vec<AttributeValue>, SourceError>;
}

/// Attribute source backed by a map held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryAttributeSource {
    values: HashMap<i64, Vec<AttributeValue>>,
}

impl InMemoryAttributeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from flat export rows, keeping row order per template
    pub fn from_rows(rows: impl IntoIterator<Item = TemplateAttribute>) -> Self {
        let mut source = Self::new();
        for row in rows {
            source.insert(row.template_id, row.value);
        }
        source
    }

    pub fn insert(&mut self, template_id: i64, value: AttributeValue) {
        self.values.entry(template_id).or_default().push(value);
    }

    pub fn template_count(&self) -> usize {
        self.values.len()
    }
}

#[async_trait]
impl AttributeSource for InMemoryAttributeSource {
    async fn attribute_values(&self, template_id: i64) -> Result<Vec<AttributeValue>, SourceError> {
        Ok(self.values.get(&template_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_from_rows_groups_by_template() {
        let rows = vec![
            TemplateAttribute {
                template_id: 1,
                value: AttributeValue::new("Color", "Rojo"),
            },
            TemplateAttribute {
                template_id: 2,
                value: AttributeValue::new("Talla", "M"),
            },
            TemplateAttribute {
                template_id: 1,
                value: AttributeValue::new("Color", "Azul"),
            },
        ];
        let source = InMemoryAttributeSource::from_rows(rows);
        assert_eq!(source.template_count(), 2);

        let values = source.attribute_values(1).await.unwrap();
        assert_eq!(
            values,
            vec![
                AttributeValue::new("Color", "Rojo"),
                AttributeValue::new("Color", "Azul")
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_template_is_empty() {
        let source = InMemoryAttributeSource::new();
        assert!(source.attribute_values(99).await.unwrap().is_empty());
    }
}
