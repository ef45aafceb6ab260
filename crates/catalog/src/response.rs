//! Response contracts returned to the chatbot platform

use serde::Serialize;

use chat_bridge_core::MatchResult;

use crate::Product;

/// Result of routing an utterance
///
/// Every field is always present; the optional ones are `null` when nothing
/// matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteResponse {
    pub found: bool,
    pub intent: Option<String>,
    pub scope: Option<String>,
    pub matched_pattern: Option<String>,
}

impl RouteResponse {
    pub fn not_found() -> Self {
        Self {
            found: false,
            intent: None,
            scope: None,
            matched_pattern: None,
        }
    }
}

impl From<Option<MatchResult>> for RouteResponse {
    fn from(result: Option<MatchResult>) -> Self {
        match result {
            Some(m) => Self {
                found: true,
                intent: Some(m.intent),
                scope: m.scope.map(|s| s.as_str().to_string()),
                matched_pattern: Some(m.matched_pattern),
            },
            None => Self::not_found(),
        }
    }
}

/// Catalog listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogResponse {
    #[serde(rename = "productos")]
    pub products: Vec<Product>,
}
