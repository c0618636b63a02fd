use crate::config::Config;
use crate::recommendation::Recommender;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Engine over the read-only catalog; shared across requests without locking.
    pub recommender: Recommender,
    pub config: Config,
}
