mod catalog;
mod config;
mod errors;
mod models;
mod recommendation;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::recommendation::{ContextRelevanceScorer, RelevanceScorer, Recommender};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting trainrec API v{}", env!("CARGO_PKG_VERSION"));

    // Catalog is loaded once and never mutated afterwards
    let catalog = load_catalog(&config)?;
    info!(
        "Catalog ready: {} trainings, {} competencies mapped",
        catalog.trainings().len(),
        catalog.competency_count()
    );

    let scorer: Arc<dyn RelevanceScorer> = Arc::new(ContextRelevanceScorer);
    info!("Relevance scorer: {}", scorer.backend());

    let state = AppState {
        recommender: Recommender::new(Arc::new(catalog), scorer),
        config: config.clone(),
    };

    // TODO: restrict CORS origins once the assessment form is served from a fixed host
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_catalog(config: &Config) -> Result<Catalog> {
    match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => {
            info!("CATALOG_PATH not set, using built-in catalog");
            catalog::builtin().context("Built-in catalog is invalid")
        }
    }
}
