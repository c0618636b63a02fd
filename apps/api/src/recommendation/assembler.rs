//! Recommendation Assembler — runs gap analysis, filtering, resolution and scoring,
//! then ranks, truncates and formats the final response.
//!
//! `Recommender::recommend` is the single fault boundary: any `EngineError`
//! raised below it comes back as an error-shaped `RecommendationResponse`.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::models::assessment::AssessmentInput;
use crate::models::training::TrainingRecord;
use crate::recommendation::context_filter::{filter_by_context, EmployeeContext};
use crate::recommendation::gap_analysis::{
    identify_priority_areas, merged_scores, priority_level, timeline,
};
use crate::recommendation::relevance::RelevanceScorer;
use crate::recommendation::resolver::resolve;

/// Upper bound on recommendations in a response.
pub const MAX_RECOMMENDATIONS: usize = 3;

const MAX_SCORE: f64 = 5.0;
const MAX_IMPROVEMENT: f64 = 2.0;

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("Competency {competency} has a non-finite score")]
    NonFiniteScore { competency: String },

    #[error("Summary {field} overflowed")]
    SummaryOverflow { field: &'static str },
}

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// One (gap, school) candidate before ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub competency_gap: String,
    pub current_score: f64,
    pub training: TrainingRecord,
    pub relevance_score: f64,
    pub priority_level: u8,
    pub expected_improvement: f64,
    pub timeline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormattedRecommendation {
    /// Rank within the response, starting at 1.
    pub priority: usize,
    pub competency_gap: String,
    pub current_score: f64,
    pub target_score: f64,
    pub recommended_training: TrainingRecord,
    pub relevance_score: f64,
    pub expected_improvement: f64,
    pub timeline: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DevelopmentPath {
    pub critical: Vec<String>,
    pub high_priority: Vec<String>,
    pub medium_priority: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub total_recommendations: usize,
    pub total_estimated_cost: u64,
    pub total_estimated_duration: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResponse {
    pub employee_id: String,
    pub assessment_date: String,
    pub recommendations: Vec<FormattedRecommendation>,
    pub development_path: DevelopmentPath,
    pub summary: Summary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecommendationResponse {
    /// Well-formed response for a failed assembly: no recommendations, zeroed summary.
    pub fn failed(employee_id: &str, date: NaiveDate, error: &EngineError) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            assessment_date: format_date(date),
            recommendations: Vec::new(),
            development_path: DevelopmentPath::default(),
            summary: Summary::default(),
            error: Some(error.to_string()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Recommender
// ────────────────────────────────────────────────────────────────────────────

/// Stateless engine over a shared, read-only catalog. Cheap to clone.
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    scorer: Arc<dyn RelevanceScorer>,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>, scorer: Arc<dyn RelevanceScorer>) -> Self {
        Self { catalog, scorer }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn recommend(&self, assessment: &AssessmentInput) -> RecommendationResponse {
        self.recommend_on(assessment, Local::now().date_naive())
    }

    /// Same as `recommend` with an explicit assessment date.
    pub fn recommend_on(
        &self,
        assessment: &AssessmentInput,
        date: NaiveDate,
    ) -> RecommendationResponse {
        match self.try_recommend(assessment, date) {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    "Recommendation failed for employee {}: {e}",
                    assessment.employee_id
                );
                RecommendationResponse::failed(&assessment.employee_id, date, &e)
            }
        }
    }

    fn try_recommend(
        &self,
        assessment: &AssessmentInput,
        date: NaiveDate,
    ) -> Result<RecommendationResponse, EngineError> {
        validate_scores(assessment)?;
        let candidates = self.collect_candidates(assessment);
        let top = rank_recommendations(candidates);
        let response = build_response(&assessment.employee_id, date, top)?;

        info!(
            "Generated {} recommendations for employee {} (scorer: {})",
            response.summary.total_recommendations,
            response.employee_id,
            self.scorer.backend()
        );
        Ok(response)
    }

    /// One candidate per (priority gap, filtered school), in gap order.
    pub fn collect_candidates(&self, assessment: &AssessmentInput) -> Vec<Recommendation> {
        let context = EmployeeContext {
            position: &assessment.current_position,
            division: &assessment.division,
            experience: assessment.experience(),
        };

        let mut candidates = Vec::new();
        for gap in identify_priority_areas(assessment) {
            let Some(schools) = self.catalog.schools_for(&gap.competency) else {
                debug!("No training mapped for {}, skipping", gap.competency);
                continue;
            };

            let filtered = filter_by_context(schools, context, &self.catalog);
            debug!(
                "{} ({}): {} of {} schools after context filter",
                gap.competency,
                gap.score,
                filtered.len(),
                schools.len()
            );

            let level = priority_level(gap.score);
            for school in &filtered {
                let training = resolve(school, &self.catalog).into_owned();
                let relevance_score = self.scorer.score(gap.score, &training, assessment);
                candidates.push(Recommendation {
                    competency_gap: gap.competency.clone(),
                    current_score: gap.score,
                    training,
                    relevance_score,
                    priority_level: level,
                    expected_improvement: (MAX_SCORE - gap.score).min(MAX_IMPROVEMENT),
                    timeline: timeline(level).to_string(),
                });
            }
        }
        candidates
    }
}

fn validate_scores(assessment: &AssessmentInput) -> Result<(), EngineError> {
    match merged_scores(assessment)
        .into_iter()
        .find(|gap| !gap.score.is_finite())
    {
        Some(gap) => Err(EngineError::NonFiniteScore {
            competency: gap.competency,
        }),
        None => Ok(()),
    }
}

/// Most urgent first, then most relevant; keeps the top `MAX_RECOMMENDATIONS`.
/// Stable, so exact ties keep collection order.
pub fn rank_recommendations(mut candidates: Vec<Recommendation>) -> Vec<Recommendation> {
    candidates.sort_by(|a, b| {
        a.priority_level
            .cmp(&b.priority_level)
            .then_with(|| b.relevance_score.total_cmp(&a.relevance_score))
    });
    candidates.truncate(MAX_RECOMMENDATIONS);
    candidates
}

pub fn build_response(
    employee_id: &str,
    date: NaiveDate,
    top: Vec<Recommendation>,
) -> Result<RecommendationResponse, EngineError> {
    let mut total_cost: u64 = 0;
    let mut total_duration: u64 = 0;
    for rec in &top {
        total_cost = total_cost
            .checked_add(rec.training.cost)
            .ok_or(EngineError::SummaryOverflow { field: "total_estimated_cost" })?;
        total_duration = total_duration
            .checked_add(u64::from(rec.training.duration_days))
            .ok_or(EngineError::SummaryOverflow {
                field: "total_estimated_duration",
            })?;
    }

    let mut development_path = DevelopmentPath::default();
    let mut recommendations = Vec::with_capacity(top.len());
    let total_recommendations = top.len();

    for (idx, rec) in top.into_iter().enumerate() {
        match rec.priority_level {
            1 => development_path.critical.push(rec.competency_gap.clone()),
            2 => development_path.high_priority.push(rec.competency_gap.clone()),
            _ => development_path.medium_priority.push(rec.competency_gap.clone()),
        }

        recommendations.push(FormattedRecommendation {
            priority: idx + 1,
            target_score: (rec.current_score + rec.expected_improvement).min(MAX_SCORE),
            relevance_score: round2(rec.relevance_score),
            competency_gap: rec.competency_gap,
            current_score: rec.current_score,
            recommended_training: rec.training,
            expected_improvement: rec.expected_improvement,
            timeline: rec.timeline,
        });
    }

    Ok(RecommendationResponse {
        employee_id: employee_id.to_string(),
        assessment_date: format_date(date),
        recommendations,
        development_path,
        summary: Summary {
            total_recommendations,
            total_estimated_cost: total_cost,
            total_estimated_duration: total_duration,
        },
        error: None,
    })
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
