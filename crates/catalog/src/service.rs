//! Catalog service over an injected attribute source

use std::collections::HashMap;
use std::sync::Arc;

use chat_bridge_core::AttributeSource;
use chat_bridge_text_processing::{AttributeAggregator, AttributeMap};

use crate::{CatalogResponse, Product, ProductRecord};

/// Attaches aggregated attributes to shaped products
///
/// Attribute source failures are logged and produce an empty attribute map
/// for the affected template; shaping never fails.
#[derive(Clone)]
pub struct CatalogService {
    attributes: Arc<dyn AttributeSource>,
    aggregator: AttributeAggregator,
}

impl CatalogService {
    pub fn new(attributes: Arc<dyn AttributeSource>, aggregator: AttributeAggregator) -> Self {
        Self {
            attributes,
            aggregator,
        }
    }

    /// Aggregated attributes for one product template
    pub async fn attributes_for(&self, template_id: i64) -> AttributeMap {
        match self.attributes.attribute_values(template_id).await {
            Ok(values) => self.aggregator.aggregate(&values),
            Err(e) => {
                tracing::warn!(
                    template_id,
                    error = %e,
                    "Attribute source failed, returning no attributes"
                );
                AttributeMap::new()
            },
        }
    }

    /// Shape ERP records into the catalog response
    ///
    /// Each template is looked up once even when several variants share it.
    pub async fn shape(&self, records: Vec<ProductRecord>) -> CatalogResponse {
        let mut by_template: HashMap<i64, AttributeMap> = HashMap::new();
        let mut products = Vec::with_capacity(records.len());

        for record in records {
            let mut product = Product::from(record);
            if let Some(template_id) = product.template_id {
                let attributes = match by_template.get(&template_id) {
                    Some(cached) => cached.clone(),
                    None => {
                        let fetched = self.attributes_for(template_id).await;
                        by_template.insert(template_id, fetched.clone());
                        fetched
                    },
                };
                product.attributes = attributes;
            }
            products.push(product);
        }

        tracing::debug!(
            products = products.len(),
            templates = by_template.len(),
            "Shaped catalog"
        );
        CatalogResponse { products }
    }
}
