//! End-to-end shaping from raw ERP payloads to response JSON

use std::sync::Arc;

use chat_bridge_catalog::{CatalogService, ProductRecord, RouteResponse};
use chat_bridge_core::{
    InMemoryAttributeSource, InMemoryRuleSource, IntentRule, TemplateAttribute, TenantId,
};
use chat_bridge_text_processing::{AttributeAggregator, IntentRouter};

const PRODUCTS: &str = r#"[
    {
        "id": 11,
        "name": "Camisa Edron (10)",
        "default_code": "CAM-10",
        "qty_available": 4.0,
        "list_price": 45.5,
        "product_tmpl_id": [3, "Camisa Edron"],
        "categ_id": [1, "Uniformes"],
        "barcode": false
    },
    {
        "id": 12,
        "name": "Chompa Edron",
        "default_code": false,
        "qty_available": 0.0,
        "list_price": 120.0,
        "product_tmpl_id": [4, "Chompa Edron"],
        "categ_id": false,
        "barcode": "7790001112223"
    }
]"#;

const ATTRIBUTE_ROWS: &str = r#"[
    {"template_id": 3, "attribute_name": "Manga", "value_name": "Corta"},
    {"template_id": 3, "attribute_name": "Talla", "value_name": "10"},
    {"template_id": 3, "attribute_name": "Talla", "value_name": "12"},
    {"template_id": 3, "attribute_name": "Talla", "value_name": "10"},
    {"template_id": 3, "attribute_name": "Color", "value_name": false},
    {"template_id": 3, "attribute_name": "Cuello", "value_name": "Redondo"}
]"#;

#[tokio::test]
async fn test_erp_payload_to_catalog_json() {
    let records: Vec<ProductRecord> = serde_json::from_str(PRODUCTS).unwrap();
    let rows: Vec<TemplateAttribute> = serde_json::from_str(ATTRIBUTE_ROWS).unwrap();

    let service = CatalogService::new(
        Arc::new(InMemoryAttributeSource::from_rows(rows)),
        AttributeAggregator::new(vec!["Talla".into(), "Color".into()]),
    );
    let response = service.shape(records).await;

    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(
        json,
        concat!(
            r#"{"productos":["#,
            r#"{"id":11,"name":"Camisa Edron (10)","sku":"CAM-10","price":45.5,"stock":4.0,"#,
            r#""template":"Camisa Edron","category":"Uniformes","barcode":null,"#,
            r#""attributes":{"Talla":["10","12"],"Cuello":["Redondo"],"Manga":["Corta"]}},"#,
            r#"{"id":12,"name":"Chompa Edron","sku":null,"price":120.0,"stock":0.0,"#,
            r#""template":"Chompa Edron","category":null,"barcode":"7790001112223"}"#,
            r#"]}"#
        )
    );
}

#[tokio::test]
async fn test_route_response_contract() {
    let router = IntentRouter::new(Arc::new(InMemoryRuleSource::new(vec![
        IntentRule::new("order_status")
            .with_scope("edron")
            .with_patterns(["pedido"])
            .with_priority(5),
        IntentRule::new("greeting")
            .with_patterns(["hola"])
            .with_priority(10),
    ])));
    let tenant = TenantId::from("edron");

    let found = RouteResponse::from(router.route("quiero saber mi pedido", Some(&tenant)).await);
    assert_eq!(
        serde_json::to_value(&found).unwrap(),
        serde_json::json!({
            "found": true,
            "intent": "order_status",
            "scope": "edron",
            "matched_pattern": "pedido"
        })
    );

    let empty = RouteResponse::from(router.route("", Some(&tenant)).await);
    assert!(!empty.found);
}
