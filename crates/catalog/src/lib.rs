//! Catalog shaping for the chat bridge
//!
//! Turns raw ERP product records into chat-friendly products with their
//! aggregated attributes, and defines the JSON shapes returned to the
//! chatbot platform.

pub mod product;
pub mod response;
pub mod service;

pub use product::{Product, ProductRecord};
pub use response::{CatalogResponse, RouteResponse};
pub use service::CatalogService;
