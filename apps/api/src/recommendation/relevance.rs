//! Relevance Scoring — pluggable, trait-based scorer for a (gap, training, employee) triple.
//!
//! Default: `ContextRelevanceScorer` (gap size × contextual multipliers).
//! `Recommender` holds an `Arc<dyn RelevanceScorer>`, chosen at startup.

use crate::models::assessment::{AssessmentInput, ExperienceLevel};
use crate::models::training::TrainingRecord;
use crate::recommendation::keywords::{
    is_advanced_training, is_management_training, is_managerial_position,
};

pub const MIN_RELEVANCE: f64 = 0.1;
pub const MAX_RELEVANCE: f64 = 10.0;

const POSITION_MULTIPLIER: f64 = 1.5;
const DIVISION_MULTIPLIER: f64 = 1.3;
const EXPERIENCE_MULTIPLIER: f64 = 1.2;

/// Implement this to swap the scoring backend without touching the assembler.
pub trait RelevanceScorer: Send + Sync {
    /// Fit of `training` for a competency currently scored `current_score`.
    /// Implementations return a value in `[MIN_RELEVANCE, MAX_RELEVANCE]`.
    fn score(
        &self,
        current_score: f64,
        training: &TrainingRecord,
        assessment: &AssessmentInput,
    ) -> f64;

    /// Backend label, for logs.
    fn backend(&self) -> &'static str;
}

/// Scores by gap size, multiplied by independent position, division and
/// experience fit factors. No normalisation against the best achievable score.
pub struct ContextRelevanceScorer;

impl RelevanceScorer for ContextRelevanceScorer {
    fn score(
        &self,
        current_score: f64,
        training: &TrainingRecord,
        assessment: &AssessmentInput,
    ) -> f64 {
        let base = 5.0 - current_score;
        let raw = base
            * position_multiplier(training, assessment)
            * division_multiplier(training, assessment)
            * experience_multiplier(training, assessment.experience());
        raw.clamp(MIN_RELEVANCE, MAX_RELEVANCE)
    }

    fn backend(&self) -> &'static str {
        "context"
    }
}

fn position_multiplier(training: &TrainingRecord, assessment: &AssessmentInput) -> f64 {
    if is_managerial_position(&assessment.current_position)
        && is_management_training(&training.training_name)
    {
        POSITION_MULTIPLIER
    } else {
        1.0
    }
}

fn division_multiplier(training: &TrainingRecord, assessment: &AssessmentInput) -> f64 {
    let target = training.target_division.to_lowercase();
    if target == "all" || target == assessment.division.to_lowercase() {
        DIVISION_MULTIPLIER
    } else {
        1.0
    }
}

fn experience_multiplier(training: &TrainingRecord, experience: ExperienceLevel) -> f64 {
    let advanced = is_advanced_training(&training.training_name);
    match experience {
        ExperienceLevel::Junior if !advanced => EXPERIENCE_MULTIPLIER,
        ExperienceLevel::Senior if advanced => EXPERIENCE_MULTIPLIER,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::make_training;

    fn employee(position: &str, division: &str, experience: &str) -> AssessmentInput {
        AssessmentInput {
            employee_id: "EMP001".to_string(),
            current_position: position.to_string(),
            division: division.to_string(),
            experience_level: experience.to_string(),
            core_competency_scores: Default::default(),
            managerial_competency_scores: Default::default(),
            leadership_competency_scores: Default::default(),
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_base_only_when_no_multiplier_applies() {
        let training = make_training("T", "Risk Assessment & Control Systems", "Audit", "audit");
        let score = ContextRelevanceScorer.score(3.0, &training, &employee("Staff", "it", "mid"));
        assert!(approx(score, 2.0), "got {score}");
    }

    #[test]
    fn test_all_multipliers_compose() {
        let training = make_training(
            "T",
            "Digital Transformation & Technology Leadership",
            "Teknologi Informasi",
            "it",
        );
        let score = ContextRelevanceScorer.score(1.2, &training, &employee("Manager", "IT", "senior"));
        assert!(approx(score, 3.8 * 1.5 * 1.3 * 1.2), "got {score}");
    }

    #[test]
    fn test_division_wildcard_all() {
        let training = make_training("T", "Plain Course", "Umum", "ALL");
        let score = ContextRelevanceScorer.score(4.0, &training, &employee("Staff", "legal", "mid"));
        assert!(approx(score, 1.3), "got {score}");
    }

    #[test]
    fn test_junior_rewarded_for_non_advanced() {
        let basic = make_training("T", "Procurement Operations", "Pengadaan", "x");
        let advanced = make_training("U", "Advanced Procurement", "Pengadaan", "x");
        let junior = employee("Staff", "hr", "junior");
        assert!(approx(ContextRelevanceScorer.score(3.0, &basic, &junior), 2.4));
        assert!(approx(ContextRelevanceScorer.score(3.0, &advanced, &junior), 2.0));
    }

    #[test]
    fn test_senior_rewarded_for_advanced() {
        let advanced = make_training("U", "Executive Program", "Umum", "x");
        let senior = employee("Staff", "hr", "Senior (7+ years)");
        assert!(approx(ContextRelevanceScorer.score(3.0, &advanced, &senior), 2.4));
    }

    #[test]
    fn test_manager_needs_management_training() {
        let plain = make_training("T", "Information Systems", "Teknologi Informasi", "x");
        let score = ContextRelevanceScorer.score(3.0, &plain, &employee("Manager", "hr", "mid"));
        assert!(approx(score, 2.0));
    }

    #[test]
    fn test_score_clamped_low_at_full_marks() {
        let training = make_training("T", "Any", "Any", "x");
        let score = ContextRelevanceScorer.score(5.0, &training, &employee("Staff", "hr", "mid"));
        assert_eq!(score, MIN_RELEVANCE);
    }

    #[test]
    fn test_score_clamped_high_for_out_of_range_input() {
        let training = make_training("T", "Executive Leadership", "Strategi SDM", "ALL");
        let score = ContextRelevanceScorer.score(-10.0, &training, &employee("Manager", "hr", "senior"));
        assert_eq!(score, MAX_RELEVANCE);
    }

    #[test]
    fn test_backend_label() {
        assert_eq!(ContextRelevanceScorer.backend(), "context");
    }
}
