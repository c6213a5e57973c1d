mod config;
mod errors;
mod models;
mod routes;
mod service;
mod store;

use chrono::Utc;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::service::history_service::HistoryService;
use crate::store::fixture_store::FixtureStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chat_widget=debug,tower_http=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env().inspect_err(|e| {
        if e.is_config() {
            error!("Invalid server configuration: {e}");
        }
    })?;

    // ── History fixture ───────────────────────────────────────────────────────
    let store = match &config.fixture_path {
        Some(path) => FixtureStore::load(path)?,
        None => FixtureStore::synthetic(config.fixture_size, Utc::now()),
    };
    info!(
        "Serving {} messages in pages of {}",
        store.len(),
        config.page_size
    );

    let app = routes::router(HistoryService::new(store, config.page_size));

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}/assignment/chat?page=0");

    axum::serve(listener, app).await?;
    Ok(())
}
