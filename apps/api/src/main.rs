mod config;
mod db;
mod errors;
mod models;
mod results;
mod routes;
mod scoring;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::results::{InMemoryResultStore, PgResultStore, ResultStore};
use crate::routes::build_router;
use crate::scoring::word_bank::WORD_BANK;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SSB API v{}", env!("CARGO_PKG_VERSION"));
    info!("WAT word bank loaded ({} words)", WORD_BANK.len());

    // Pick the result store
    let result_store: Arc<dyn ResultStore> = match &config.database_url {
        Some(url) => Arc::new(PgResultStore::new(create_pool(url).await?)),
        None => {
            warn!("DATABASE_URL not set; WAT results will be kept in memory only");
            Arc::new(InMemoryResultStore::new())
        }
    };

    let state = AppState { result_store };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the deployed frontend

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
