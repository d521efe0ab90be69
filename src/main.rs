//! Kaskady Server - Main entry point
//!
//! Serves the Kaskady hotel website and its booking, contact and newsletter API.

use anyhow::{Context, Result};
use kaskady_server::notify::{LogNotifier, MailApiClient, MailApiNotifier, Notifier};
use kaskady_server::server::{build_router, run_server, AppState};
use kaskady_server::store::{AsyncJsonStore, JsonFileStore};
use kaskady_server::{Config, Metrics};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let metrics = Metrics::new();

    // Initialize the record store
    let store = AsyncJsonStore::new(JsonFileStore::new(&config.data_dir, metrics.clone()));
    store
        .init()
        .await
        .with_context(|| format!("Failed to prepare data directory {:?}", config.data_dir))?;
    info!("Data directory: {}", config.data_dir.display());

    let notifier: Arc<dyn Notifier> = match MailApiClient::from_config(&config, metrics.clone()) {
        Some(client) => {
            info!("Sending mail through {}", client.url());
            Arc::new(MailApiNotifier::new(client))
        }
        None => {
            warn!("MAIL_API_URL not set, e-mails will only be logged");
            Arc::new(LogNotifier::new())
        }
    };

    let state = AppState::with_store(store, notifier, metrics);
    let router = build_router(state, &config.static_dir);

    info!("Serving static files from {}", config.static_dir.display());
    run_server(router, config.port).await
}
