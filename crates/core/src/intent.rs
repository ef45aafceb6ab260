//! Intent rule types
//!
//! Rules are keyword triggers grouped under an intent category. A rule is
//! either scoped to a single tenant or global (no scope).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tenant identifier (a school, a storefront, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TenantId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TenantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Keyword rule mapping trigger phrases to an intent category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRule {
    /// Owning tenant; `None` applies to every tenant
    #[serde(default)]
    pub scope: Option<TenantId>,
    /// Intent label reported on match (e.g. "order_status")
    pub category: String,
    /// Trigger phrases, checked in declared order
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Higher values are checked first
    #[serde(default)]
    pub priority: i32,
}

impl IntentRule {
    /// Create a global rule with no patterns and priority 0
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            scope: None,
            category: category.into(),
            patterns: Vec::new(),
            priority: 0,
        }
    }

    pub fn with_scope(mut self, tenant: impl Into<TenantId>) -> Self {
        self.scope = Some(tenant.into());
        self
    }

    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether this rule is a candidate for a request from `tenant`
    ///
    /// Global rules apply to everyone, including requests without a tenant.
    /// Scoped rules only apply to their own tenant.
    pub fn applies_to(&self, tenant: Option<&TenantId>) -> bool {
        match &self.scope {
            None => true,
            Some(scope) => tenant == Some(scope),
        }
    }

    pub fn is_global(&self) -> bool {
        self.scope.is_none()
    }
}

/// Outcome of a successful intent match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Category of the matched rule
    pub intent: String,
    /// Scope of the matched rule
    pub scope: Option<TenantId>,
    /// Trigger phrase that matched, as declared on the rule
    pub matched_pattern: String,
}
