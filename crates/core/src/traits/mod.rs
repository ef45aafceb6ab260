//! Source traits for external record stores
//!
//! Routing and catalog shaping never talk to the ERP directly. Adapters
//! implement these traits and are injected at construction time:
//!
//! ```text
//! RuleSource:      tenant -> candidate IntentRules
//! AttributeSource: template id -> AttributeValues
//! ```
//!
//! In-memory implementations are provided for tests and for callers that
//! already hold the data.

mod attribute_source;
mod rule_source;

pub use attribute_source::{AttributeSource, InMemoryAttributeSource};
pub use rule_source::{InMemoryRuleSource, RuleSource};
