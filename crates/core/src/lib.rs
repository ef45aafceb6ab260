//! Core types and traits for the chat bridge
//!
//! This crate defines the value types that flow between the ERP adapters and
//! the routing/catalog logic, plus the source traits adapters implement:
//!
//! - **Intent rules**: `IntentRule`, `MatchResult`, `TenantId`
//! - **Catalog attributes**: `AttributeValue`, `TemplateAttribute`
//! - **ERP wire helpers**: many-to-one references and `false`-as-absent fields
//! - **Sources**: `RuleSource`, `AttributeSource` and in-memory implementations

pub mod attribute;
pub mod erp;
pub mod error;
pub mod intent;
pub mod traits;

pub use attribute::{AttributeValue, TemplateAttribute};
pub use erp::Many2One;
pub use error::SourceError;
pub use intent::{IntentRule, MatchResult, TenantId};
pub use traits::{AttributeSource, InMemoryAttributeSource, InMemoryRuleSource, RuleSource};
