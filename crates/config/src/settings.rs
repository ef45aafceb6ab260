//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::ConfigError;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if strict validation should be applied
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Logging configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Intent routing configuration
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Catalog shaping configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_observability()?;
        self.validate_routing()?;
        self.validate_catalog()?;
        Ok(())
    }

    fn validate_observability(&self) -> Result<(), ConfigError> {
        let level = self.observability.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!(
                    "'{}' is not one of {}",
                    self.observability.log_level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }
        Ok(())
    }

    fn validate_routing(&self) -> Result<(), ConfigError> {
        if self.routing.rules_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "routing.rules_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if let Some(tenant) = &self.routing.default_tenant {
            if tenant.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "routing.default_tenant".to_string(),
                    message: "must not be blank when set".to_string(),
                });
            }
        }
        Ok(())
    }

    fn validate_catalog(&self) -> Result<(), ConfigError> {
        let order = &self.catalog.preferred_attribute_order;

        if order.iter().any(|label| label.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "catalog.preferred_attribute_order".to_string(),
                message: "labels must not be blank".to_string(),
            });
        }

        let mut seen = HashSet::new();
        let duplicates: Vec<&str> = order
            .iter()
            .filter(|label| !seen.insert(label.as_str()))
            .map(|label| label.as_str())
            .collect();

        if !duplicates.is_empty() {
            if self.environment.is_strict() {
                return Err(ConfigError::InvalidValue {
                    field: "catalog.preferred_attribute_order".to_string(),
                    message: format!("duplicate labels: {}", duplicates.join(", ")),
                });
            }
            tracing::warn!(
                duplicates = ?duplicates,
                "Duplicate preferred attribute labels, later entries are ignored"
            );
        }

        Ok(())
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Intent routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Path to the intent rules YAML file
    #[serde(default = "default_rules_path")]
    pub rules_path: String,

    /// Tenant used when a request carries none
    #[serde(default)]
    pub default_tenant: Option<String>,
}

fn default_rules_path() -> String {
    "config/intents.yaml".to_string()
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            rules_path: default_rules_path(),
            default_tenant: None,
        }
    }
}

/// Catalog shaping configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Attribute labels shown first, in this order
    #[serde(default = "default_preferred_attribute_order")]
    pub preferred_attribute_order: Vec<String>,
}

fn default_preferred_attribute_order() -> Vec<String> {
    vec!["Talla".to_string(), "Color".to_string()]
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            preferred_attribute_order: default_preferred_attribute_order(),
        }
    }
}

/// Load settings from `config/` and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (CHAT_BRIDGE__ prefix)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new("config"), env)
}

/// Load settings from an explicit config directory
pub fn load_settings_from(config_dir: &Path, env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    // Load default config
    let default_path = config_dir.join("default");
    builder = builder.add_source(File::with_name(&default_path.to_string_lossy()).required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        let env_path = config_dir.join(env_name);
        builder = builder.add_source(File::with_name(&env_path.to_string_lossy()).required(false));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix("CHAT_BRIDGE")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    // Validate
    settings.validate()?;

    Ok(settings)
}
