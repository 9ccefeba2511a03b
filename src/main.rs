//! Subscription service entry point
//!
//! Reads configuration from `SUBSCRIPTION_CONFIG` or
//! `~/.config/subscription-service/config.toml`. For command-line
//! overrides use the `subscription-server` binary from the `cli` crate.

use std::path::PathBuf;

use tracing::{error, info};

use subscription_service::config::{default_config_path, AppConfig};
use subscription_service::server::{init_tracing, ServerHandle, ServerOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::var("SUBSCRIPTION_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_config_path());

    let config = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let cfg = AppConfig::default();
            init_tracing(&cfg);
            error!("Failed to load config: {}. Using defaults.", e);
            cfg
        }
    };

    let handle = ServerHandle::start(ServerOptions {
        config,
        ..ServerOptions::default()
    })
    .await?;
    handle.install_signal_handler();

    info!("Press Ctrl+C to shut down gracefully.");
    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
