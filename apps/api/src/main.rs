mod config;
mod errors;
mod letter;
mod models;
mod quality;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::quality::{PatternLibrary, PatternOverrides, QualityWeights};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting LOI API v{}", env!("CARGO_PKG_VERSION"));

    let patterns = load_patterns(&config)?;
    info!(
        generic_phrases = patterns.generic_phrases().len(),
        indicators = patterns.indicators().len(),
        "Pattern library ready"
    );

    let state = AppState {
        config: config.clone(),
        patterns: Arc::new(patterns),
        weights: QualityWeights::default(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client's domain is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Built-in tables, plus `PATTERNS_FILE` when set.
fn load_patterns(config: &Config) -> Result<PatternLibrary> {
    let library = PatternLibrary::default();
    let Some(path) = &config.patterns_file else {
        return Ok(library);
    };

    let overrides = PatternOverrides::from_file(path)?;
    info!("Merging pattern overrides from {}", path.display());
    library
        .with_overrides(overrides)
        .context("PATTERNS_FILE contains an invalid pattern")
}
