//! Chat Bridge CLI Entry Point
//!
//! Runs intent routing and catalog shaping against local files, using the
//! same configuration as the bridge service. JSON results go to stdout,
//! logs to stderr.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use chat_bridge_catalog::{CatalogService, ProductRecord, RouteResponse};
use chat_bridge_config::{load_settings, FileRuleStore, Settings};
use chat_bridge_core::{AttributeValue, InMemoryAttributeSource, TemplateAttribute, TenantId};
use chat_bridge_text_processing::{AttributeAggregator, IntentRouter};

#[derive(Parser)]
#[command(name = "chat-bridge")]
#[command(about = "Intent routing and catalog shaping for the ERP chat bridge", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Route an utterance to an intent
    Route {
        /// Text to analyze
        utterance: String,

        /// Tenant scope (defaults to routing.default_tenant)
        #[arg(long)]
        tenant: Option<String>,

        /// Rules file (defaults to routing.rules_path)
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Aggregate attribute pairs from a JSON array
    Attributes {
        /// File with `[{"attribute_name": .., "value_name": ..}]`
        #[arg(long)]
        input: PathBuf,
    },

    /// Shape ERP product records into the catalog response
    Catalog {
        /// File with the ERP `search_read` result
        #[arg(long)]
        products: PathBuf,

        /// File with `[{"template_id": .., "attribute_name": .., "value_name": ..}]`
        #[arg(long)]
        attributes: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Priority: env vars > config/{env}.yaml > config/default.yaml > defaults
    let env = std::env::var("CHAT_BRIDGE_ENV").ok();
    let settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        },
    };

    init_tracing(&settings);
    tracing::debug!(
        environment = ?settings.environment,
        config_path = env.as_deref().unwrap_or("default"),
        "Configuration loaded"
    );

    let output = run(cli.command, &settings).await?;
    println!("{}", output);
    Ok(())
}

async fn run(command: Commands, settings: &Settings) -> anyhow::Result<String> {
    let value = match command {
        Commands::Route {
            utterance,
            tenant,
            rules,
        } => {
            let rules_path = rules.unwrap_or_else(|| PathBuf::from(&settings.routing.rules_path));
            let tenant = tenant
                .or_else(|| settings.routing.default_tenant.clone())
                .map(TenantId::from);
            let response = route(&utterance, tenant.as_ref(), &rules_path).await?;
            serde_json::to_value(response)?
        },
        Commands::Attributes { input } => {
            let values: Vec<AttributeValue> = read_json(&input)?;
            let aggregator =
                AttributeAggregator::new(settings.catalog.preferred_attribute_order.clone());
            serde_json::to_value(aggregator.aggregate(&values))?
        },
        Commands::Catalog {
            products,
            attributes,
        } => {
            let records: Vec<ProductRecord> = read_json(&products)?;
            let rows: Vec<TemplateAttribute> = match attributes {
                Some(path) => read_json(&path)?,
                None => Vec::new(),
            };
            let service = CatalogService::new(
                Arc::new(InMemoryAttributeSource::from_rows(rows)),
                AttributeAggregator::new(settings.catalog.preferred_attribute_order.clone()),
            );
            serde_json::to_value(service.shape(records).await)?
        },
    };

    Ok(serde_json::to_string_pretty(&value)?)
}

async fn route(
    utterance: &str,
    tenant: Option<&TenantId>,
    rules_path: &Path,
) -> anyhow::Result<RouteResponse> {
    let store = FileRuleStore::open(rules_path)
        .with_context(|| format!("loading rules from {}", rules_path.display()))?;
    let router = IntentRouter::new(Arc::new(store));

    Ok(RouteResponse::from(router.route(utterance, tenant).await))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Initialize console tracing on stderr
fn init_tracing(settings: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &settings.observability.log_level;
        format!("chat_bridge={}", level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if settings.observability.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    subscriber.with(fmt_layer).init();
}
