//! Intent Routing
//!
//! Routes a free-text utterance to the first keyword rule that matches it.
//! Rules are config-driven; nothing here knows about particular intents.
//!
//! # Matching
//!
//! - Only rules whose scope is global or equal to the request tenant are
//!   considered.
//! - Rules are checked by priority, highest first. Equal priorities keep
//!   their declared order.
//! - Patterns within a rule are checked in declared order.
//! - A pattern matches when its normalized form is a substring of the
//!   normalized utterance. The first match wins; there is no scoring.
//!
//! # Example
//!
//! ```
//! use chat_bridge_core::{IntentRule, TenantId};
//! use chat_bridge_text_processing::intent::match_intent;
//!
//! let rules = vec![
//!     IntentRule::new("order_status").with_scope("edron").with_patterns(["pedido"]).with_priority(5),
//!     IntentRule::new("greeting").with_patterns(["hola"]).with_priority(10),
//! ];
//! let tenant = TenantId::from("edron");
//!
//! let result = match_intent("quiero saber mi pedido", Some(&tenant), &rules).unwrap();
//! assert_eq!(result.intent, "order_status");
//! assert_eq!(result.matched_pattern, "pedido");
//! ```

mod router;

pub use router::IntentRouter;

use chat_bridge_core::{IntentRule, MatchResult, TenantId};

use crate::normalize::normalize;

/// Match an utterance against candidate rules
///
/// Returns `None` for a blank utterance or when no pattern matches. Rules
/// without patterns, and patterns that are blank after normalization, are
/// skipped.
pub fn match_intent(
    utterance: &str,
    tenant: Option<&TenantId>,
    rules: &[IntentRule],
) -> Option<MatchResult> {
    if utterance.trim().is_empty() {
        tracing::debug!("Empty utterance, nothing to analyze");
        return None;
    }

    let text = normalize(utterance);

    let mut candidates: Vec<&IntentRule> =
        rules.iter().filter(|rule| rule.applies_to(tenant)).collect();
    // sort_by is stable: equal priorities keep declared order
    candidates.sort_by(|a, b| b.priority.cmp(&a.priority));

    for rule in candidates {
        if rule.patterns.is_empty() {
            tracing::trace!(category = %rule.category, "Skipping rule without patterns");
            continue;
        }

        for pattern in &rule.patterns {
            let needle = normalize(pattern);
            if needle.trim().is_empty() {
                tracing::trace!(category = %rule.category, "Skipping blank pattern");
                continue;
            }

            if text.contains(&needle) {
                tracing::debug!(
                    intent = %rule.category,
                    pattern = %pattern,
                    priority = rule.priority,
                    "Intent matched"
                );
                return Some(MatchResult {
                    intent: rule.category.clone(),
                    scope: rule.scope.clone(),
                    matched_pattern: pattern.clone(),
                });
            }
        }
    }

    tracing::debug!(candidates = rules.len(), "No intent matched");
    None
}
