//! Configuration management for the chat bridge
//!
//! Supports loading configuration from:
//! - YAML/TOML files (`config/default.*`, `config/{env}.*`)
//! - Environment variables (`CHAT_BRIDGE__` prefix, `__` as separator)
//!
//! Intent rules live in their own YAML file (see [`rules`]) and can be
//! reloaded at runtime through [`FileRuleStore`].

pub mod rules;
pub mod settings;

pub use rules::{FileRuleStore, RulesConfig, RulesConfigError};
pub use settings::{
    load_settings, load_settings_from, CatalogConfig, ObservabilityConfig, RoutingConfig,
    RuntimeEnvironment, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(path) => ConfigError::FileNotFound(path),
            other => ConfigError::ParseError(other.to_string()),
        }
    }
}
