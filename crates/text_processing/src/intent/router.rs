//! Intent router over an injected rule source

use std::sync::Arc;

use chat_bridge_core::{MatchResult, RuleSource, TenantId};

use super::match_intent;

/// Fetches candidate rules and runs the matcher
///
/// Source failures are logged and treated as an empty candidate list, so
/// routing degrades to "no match" instead of failing.
#[derive(Clone)]
pub struct IntentRouter {
    source: Arc<dyn RuleSource>,
}

impl IntentRouter {
    pub fn new(source: Arc<dyn RuleSource>) -> Self {
        Self { source }
    }

    /// Route an utterance for an optional tenant
    pub async fn route(&self, utterance: &str, tenant: Option<&TenantId>) -> Option<MatchResult> {
        if utterance.trim().is_empty() {
            tracing::debug!("Empty utterance, skipping rule lookup");
            return None;
        }

        let rules = match self.source.candidate_rules(tenant).await {
            Ok(rules) => rules,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    tenant = ?tenant,
                    "Rule source failed, routing without candidates"
                );
                Vec::new()
            },
        };

        match_intent(utterance, tenant, &rules)
    }
}
