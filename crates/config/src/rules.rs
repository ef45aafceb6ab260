//! Intent Rules Configuration
//!
//! Keyword rules are loaded from a YAML file instead of being hardcoded:
//!
//! ```yaml
//! rules:
//!   - scope: edron
//!     category: order_status
//!     patterns: ["pedido", "orden"]
//!     priority: 5
//!   - category: greeting        # no scope: applies to every tenant
//!     patterns: ["hola"]
//!     priority: 10
//! ```
//!
//! [`FileRuleStore`] caches the parsed rules and serves them as a
//! [`RuleSource`]; call [`FileRuleStore::reload`] to pick up edits.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use chat_bridge_core::{IntentRule, RuleSource, SourceError, TenantId};

/// Errors when loading a rules file
#[derive(Error, Debug)]
pub enum RulesConfigError {
    #[error("Rules file not found at {0}: {1}")]
    FileNotFound(String, String),

    #[error("Failed to parse rules file: {0}")]
    ParseError(String),
}

impl From<RulesConfigError> for SourceError {
    fn from(err: RulesConfigError) -> Self {
        match err {
            RulesConfigError::FileNotFound(..) => SourceError::Unavailable(err.to_string()),
            RulesConfigError::ParseError(..) => SourceError::InvalidData(err.to_string()),
        }
    }
}

/// Rules file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub rules: Vec<IntentRule>,
}

impl RulesConfig {
    /// Load from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RulesConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            RulesConfigError::FileNotFound(path.as_ref().display().to_string(), e.to_string())
        })?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, RulesConfigError> {
        serde_yaml::from_str(content).map_err(|e| RulesConfigError::ParseError(e.to_string()))
    }

    /// Categories of rules that can never match (no non-blank pattern)
    pub fn unmatchable_rules(&self) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|rule| rule.patterns.iter().all(|p| p.trim().is_empty()))
            .map(|rule| rule.category.as_str())
            .collect()
    }

    /// Distinct tenant scopes referenced by the rules
    pub fn tenants(&self) -> Vec<&TenantId> {
        let mut tenants: Vec<&TenantId> =
            self.rules.iter().filter_map(|rule| rule.scope.as_ref()).collect();
        tenants.sort();
        tenants.dedup();
        tenants
    }
}

/// Rule source backed by a YAML file, cached in memory
///
/// Reads hit the cache. [`reload`](Self::reload) re-reads the file and
/// swaps the cache; if the file is missing or invalid the previous rules
/// stay in place.
#[derive(Debug)]
pub struct FileRuleStore {
    path: PathBuf,
    rules: RwLock<Vec<IntentRule>>,
}

impl FileRuleStore {
    /// Open a rules file; the initial load must succeed
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RulesConfigError> {
        let path = path.into();
        let config = RulesConfig::load(&path)?;
        log_loaded(&path, &config);

        Ok(Self {
            path,
            rules: RwLock::new(config.rules),
        })
    }

    /// Re-read the rules file, returning the number of rules now loaded
    pub fn reload(&self) -> Result<usize, RulesConfigError> {
        let config = match RulesConfig::load(&self.path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Rules reload failed, keeping previous rules"
                );
                return Err(e);
            },
        };
        log_loaded(&self.path, &config);

        let count = config.rules.len();
        *self.rules.write() = config.rules;
        Ok(count)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }
}

fn log_loaded(path: &Path, config: &RulesConfig) {
    let unmatchable = config.unmatchable_rules();
    if !unmatchable.is_empty() {
        tracing::warn!(
            path = %path.display(),
            categories = ?unmatchable,
            "Rules without usable patterns will never match"
        );
    }
    tracing::info!(
        path = %path.display(),
        rules = config.rules.len(),
        tenants = config.tenants().len(),
        "Loaded intent rules"
    );
}

#[async_trait]
impl RuleSource for FileRuleStore {
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
