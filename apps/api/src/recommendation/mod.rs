// Recommendation engine
// Gap analysis → context filter → training resolution → relevance scoring → assembly.
// Pure and synchronous; handlers call it directly without spawn_blocking.

pub mod assembler;
pub mod context_filter;
pub mod gap_analysis;
pub mod handlers;
pub mod keywords;
pub mod relevance;
pub mod report;
pub mod resolver;
pub mod samples;

pub use assembler::{RecommendationResponse, Recommender};
pub use relevance::{ContextRelevanceScorer, RelevanceScorer};
