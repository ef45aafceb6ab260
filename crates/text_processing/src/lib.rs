//! Text Processing for the Chat Bridge
//!
//! This crate holds the decision logic behind the bridge:
//! - **Normalization**: case and diacritic folding for comparisons
//! - **Intent Routing**: first-hit keyword matching over priority-ordered rules
//! - **Attribute Aggregation**: grouping, dedup and display ordering of
//!   catalog attributes
//!
//! # Example
//!
//! ```
//! use chat_bridge_core::{IntentRule, TenantId};
//! use chat_bridge_text_processing::match_intent;
//!
//! let rules = vec![IntentRule::new("order_status")
//!     .with_scope("edron")
//!     .with_patterns(["pedido"])];
//! let tenant = TenantId::from("edron");
//!
//! let result = match_intent("¿Dónde está mi PEDIDO?", Some(&tenant), &rules).unwrap();
//! assert_eq!(result.intent, "order_status");
//! ```

pub mod attributes;
pub mod intent;
pub mod normalize;

pub use attributes::{aggregate, AttributeAggregator, AttributeMap};
pub use intent::{match_intent, IntentRouter};
pub use normalize::normalize;
