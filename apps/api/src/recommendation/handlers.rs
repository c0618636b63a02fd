//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue},
    Json,
};
use serde::Serialize;

use crate::catalog::{overview, CatalogOverview};
use crate::errors::AppError;
use crate::models::assessment::AssessmentInput;
use crate::models::training::TrainingRecord;
use crate::recommendation::gap_analysis::{merged_scores, priority_areas_with_levels, PriorityArea};
use crate::recommendation::report::{file_name, render_markdown};
use crate::recommendation::samples::{sample, SAMPLE_NAMES};
use crate::recommendation::RecommendationResponse;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PriorityAreasResponse {
    pub employee_id: String,
    pub priority_areas: Vec<PriorityArea>,
}

#[derive(Debug, Serialize)]
pub struct SampleListResponse {
    pub samples: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations
///
/// Always 200: engine faults come back inside the response's `error` field.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(assessment): Json<AssessmentInput>,
) -> Json<RecommendationResponse> {
    Json(state.recommender.recommend(&assessment))
}

/// POST /api/v1/recommendations/report
///
/// Same pipeline as `handle_recommend`, rendered as a downloadable markdown report.
pub async fn handle_report(
    State(state): State<AppState>,
    Json(assessment): Json<AssessmentInput>,
) -> Result<(HeaderMap, String), AppError> {
    let response = state.recommender.recommend(&assessment);

    let disposition = format!("attachment; filename=\"{}\"", file_name(&response));
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/markdown; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition).map_err(|e| AppError::Internal(e.into()))?,
    );

    Ok((headers, render_markdown(&response)))
}

/// POST /api/v1/assessments/priority-areas
///
/// The five weakest competencies with priority level and timeline.
pub async fn handle_priority_areas(
    Json(assessment): Json<AssessmentInput>,
) -> Result<Json<PriorityAreasResponse>, AppError> {
    if merged_scores(&assessment).is_empty() {
        return Err(AppError::Validation(
            "at least one competency score is required".to_string(),
        ));
    }

    Ok(Json(PriorityAreasResponse {
        priority_areas: priority_areas_with_levels(&assessment),
        employee_id: assessment.employee_id,
    }))
}

/// GET /api/v1/catalog/overview
pub async fn handle_catalog_overview(State(state): State<AppState>) -> Json<CatalogOverview> {
    Json(overview(state.recommender.catalog()))
}

/// GET /api/v1/catalog/trainings/:id
pub async fn handle_get_training(
    State(state): State<AppState>,
    Path(training_id): Path<String>,
) -> Result<Json<TrainingRecord>, AppError> {
    state
        .recommender
        .catalog()
        .training(&training_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Training {training_id} not found")))
}

/// GET /api/v1/samples
pub async fn handle_list_samples() -> Json<SampleListResponse> {
    Json(SampleListResponse {
        samples: SAMPLE_NAMES.iter().map(|s| s.to_string()).collect(),
    })
}

/// GET /api/v1/samples/:name
pub async fn handle_get_sample(
    Path(name): Path<String>,
) -> Result<Json<AssessmentInput>, AppError> {
    sample(&name)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Sample {name} not found")))
}
