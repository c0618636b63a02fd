pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommendation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recommendation API
        .route(
            "/api/v1/recommendations",
            post(handlers::handle_recommend),
        )
        .route(
            "/api/v1/recommendations/report",
            post(handlers::handle_report),
        )
        .route(
            "/api/v1/assessments/priority-areas",
            post(handlers::handle_priority_areas),
        )
        // Catalog API
        .route(
            "/api/v1/catalog/overview",
            get(handlers::handle_catalog_overview),
        )
        .route(
            "/api/v1/catalog/trainings/:id",
            get(handlers::handle_get_training),
        )
        // Sample assessments
        .route("/api/v1/samples", get(handlers::handle_list_samples))
        .route("/api/v1/samples/:name", get(handlers::handle_get_sample))
        .with_state(state)
}
