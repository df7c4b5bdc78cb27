mod cli;
mod repl;

use std::path::Path;
use std::sync::Arc;

use prepbot_chat::{ConversationStore, HttpGateway, StoreSettings};
use prepbot_common::{ConfigError, PrepbotError};
use prepbot_config::PrepbotConfig;
use tracing_subscriber::EnvFilter;

fn load_config(args: &cli::Args) -> Result<PrepbotConfig, ConfigError> {
    match args.config {
        Some(ref path) => prepbot_config::load_config_from(Path::new(path)),
        None => prepbot_config::load_config(),
    }
}

/// Command-line flags win over the config file.
fn apply_overrides(config: &mut PrepbotConfig, args: &cli::Args) {
    if let Some(ref url) = args.base_url {
        config.gateway.base_url = url.clone();
    }
    if let Some(ref email) = args.email {
        config.identity.email = Some(email.clone());
    }
}

fn init_logging(directive: &str) {
    // Logs go to stderr so they don't interleave with the transcript.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "prepbot=info".parse().unwrap()),
            ),
        )
        .init();
}

fn build_gateway(config: &PrepbotConfig) -> prepbot_common::Result<HttpGateway> {
    HttpGateway::from_config(config).map_err(|e| PrepbotError::Chat(e.to_string()))
}

async fn run(config: PrepbotConfig) -> prepbot_common::Result<()> {
    let gateway = build_gateway(&config)?;
    tracing::info!(url = %gateway.settings().ask_url(), "Chat backend configured");

    let store = Arc::new(ConversationStore::new(
        Arc::new(gateway),
        StoreSettings::from(&config.chat),
    ));
    tracing::info!(session = %store.session_id(), "Conversation ready");

    repl::run(store).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // Load config before logging so its level can apply
    let loaded = load_config(&args);
    let directive = args.log_level.clone().unwrap_or_else(|| match loaded {
        Ok(ref config) => config.logging.level.directive().to_string(),
        Err(_) => "prepbot=info".to_string(),
    });
    init_logging(&directive);

    tracing::info!("prepbot v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        PrepbotConfig::default()
    });
    apply_overrides(&mut config, &args);

    if let Err(e) = run(config).await {
        tracing::error!("prepbot failed: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
