//! ERP product records and their shaped form

use serde::{Deserialize, Serialize};

use chat_bridge_core::erp::or_false;
use chat_bridge_core::Many2One;
use chat_bridge_text_processing::AttributeMap;

/// Product variant as returned by the ERP's `search_read`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    /// Internal reference (SKU)
    #[serde(default, deserialize_with = "or_false")]
    pub default_code: Option<String>,
    #[serde(default, deserialize_with = "or_false")]
    pub qty_available: Option<f64>,
    #[serde(default, deserialize_with = "or_false")]
    pub list_price: Option<f64>,
    /// Owning product template
    #[serde(default, deserialize_with = "or_false")]
    pub product_tmpl_id: Option<Many2One>,
    #[serde(default, deserialize_with = "or_false")]
    pub categ_id: Option<Many2One>,
    #[serde(default, deserialize_with = "or_false")]
    pub barcode: Option<String>,
}

/// Product as presented to the chatbot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub sku: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<f64>,
    /// Template display name
    pub template: Option<String>,
    /// Category display name
    pub category: Option<String>,
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "AttributeMap::is_empty")]
    pub attributes: AttributeMap,
    #[serde(skip)]
    pub template_id: Option<i64>,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            sku: record.default_code,
            price: record.list_price,
            stock: record.qty_available,
            template_id: record.product_tmpl_id.as_ref().map(Many2One::id),
            template: record.product_tmpl_id.map(|t| t.1),
            category: record.categ_id.map(|c| c.1),
            barcode: record.barcode,
            attributes: AttributeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_full_record() {
        let record: ProductRecord = serde_json::from_str(
            r#"{
                "id": 42,
                "name": "Polo Edron (M, Azul)",
                "default_code": "POLO-M-AZ",
                "qty_available": 17.0,
                "list_price": 89.9,
                "product_tmpl_id": [7, "Polo Edron"],
                "categ_id": [3, "Uniformes / Polos"],
                "barcode": "7501234567890"
            }"#,
        )
        .unwrap();

        let product = Product::from(record);
        assert_eq!(product.id, 42);
        assert_eq!(product.sku.as_deref(), Some("POLO-M-AZ"));
        assert_eq!(product.price, Some(89.9));
        assert_eq!(product.stock, Some(17.0));
        assert_eq!(product.template.as_deref(), Some("Polo Edron"));
        assert_eq!(product.template_id, Some(7));
        assert_eq!(product.category.as_deref(), Some("Uniformes / Polos"));
        assert_eq!(product.barcode.as_deref(), Some("7501234567890"));
    }

    #[test]
    fn test_false_fields_become_absent() {
        let record: ProductRecord = serde_json::from_str(
            r#"{
                "id": 5,
                "name": "Servicio de bordado",
                "default_code": false,
                "qty_available": 0.0,
                "list_price": 15.0,
                "product_tmpl_id": false,
                "categ_id": false,
                "barcode": false
            }"#,
        )
        .unwrap();

        let product = Product::from(record);
        assert_eq!(product.sku, None);
        assert_eq!(product.template, None);
        assert_eq!(product.template_id, None);
        assert_eq!(product.category, None);
        assert_eq!(product.barcode, None);
        assert_eq!(product.stock, Some(0.0));
    }

    #[test]
    fn test_serialized_shape() {
        let record: ProductRecord =
            serde_json::from_str(r#"{"id": 1, "name": "Falda", "categ_id": [2, "Uniformes"]}"#)
                .unwrap();
        let json = serde_json::to_value(Product::from(record)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Falda",
                "sku": null,
                "price": null,
                "stock": null,
                "template": null,
                "category": "Uniformes",
                "barcode": null
            })
        );
    }
}
