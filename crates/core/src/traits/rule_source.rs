//! Rule source trait

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::{IntentRule, SourceError, TenantId};

/// Supplies candidate intent rules for a request
#[async_trait]
pub trait RuleSource: Send + Sync {
    /// Rules that may apply to `tenant`
    ///
    /// Implementations may pre-filter by scope but are not required to; the
    /// matcher re-applies the scope check.
    async fn candidate_rules(
        &self,
        tenant: Option<&TenantId>,
    ) -> Result<Vec<IntentRule>, SourceError>;
}

/// Rule source backed by a vector held in memory
#[derive(Debug, Default)]
pub struct InMemoryRuleSource {
    rules: RwLock<Vec<IntentRule>>,
}

impl InMemoryRuleSource {
    pub fn new(rules: Vec<IntentRule>) -> Self {
        Self {
            rules: RwLock::new(rules),
        }
    }

    /// Replace all rules
    pub fn set_rules(&self, rules: Vec<IntentRule>) {
        *self.rules.write() = rules;
    }

    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }
}

#[async_trait]
impl RuleSource for InMemoryRuleSource {
    async fn candidate_rules(
        &self,
        tenant: Option<&TenantId>,
    ) -> Result<Vec<IntentRule>, SourceError> {
        Ok(self
            .rules
            .read()
            .iter()
            .filter(|rule| rule.applies_to(tenant))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<IntentRule> {
        vec![
            IntentRule::new("order_status").with_scope("edron"),
            IntentRule::new("greeting"),
            IntentRule::new("uniforms").with_scope("other"),
        ]
    }

    #[tokio::test]
    async fn test_prefilters_by_scope() {
        let source = InMemoryRuleSource::new(rules());
        let tenant = TenantId::from("edron");

        let candidates = source.candidate_rules(Some(&tenant)).await.unwrap();
        let names: Vec<&str> = candidates.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, vec!["order_status", "greeting"]);

        let global_only = source.candidate_rules(None).await.unwrap();
        assert_eq!(global_only.len(), 1);
        assert_eq!(global_only[0].category, "greeting");
    }

    #[tokio::test]
    async fn test_set_rules_replaces() {
        let source = InMemoryRuleSource::new(rules());
        assert_eq!(source.len(), 3);

        source.set_rules(vec![]);
        assert!(source.is_empty());
        assert!(source.candidate_rules(None).await.unwrap().is_empty());
    }
}
