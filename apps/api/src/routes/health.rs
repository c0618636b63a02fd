use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and the catalog in use.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let catalog_source = state
        .config
        .catalog_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "builtin".to_string());

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "trainrec-api",
        "catalog": {
            "source": catalog_source,
            "trainings": state.recommender.catalog().trainings().len()
        }
    }))
}
