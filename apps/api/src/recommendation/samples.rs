//! Built-in sample assessments for demos and smoke tests.

use crate::models::assessment::{AssessmentInput, ScoreGroup};

pub const SAMPLE_NAMES: &[&str] = &["plantation_manager", "finance_staff", "it_supervisor"];

fn scores(pairs: &[(&str, f64)]) -> ScoreGroup {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

pub fn sample(name: &str) -> Option<AssessmentInput> {
    let (position, division, experience, core, managerial, leadership): (
        &str,
        &str,
        &str,
        [(&str, f64); 6],
        [(&str, f64); 7],
        [(&str, f64); 4],
    ) = match name {
        "plantation_manager" => (
            "Manager",
            "plantation",
            "senior",
            [
                ("information_seeking", 1.5),
                ("resilience", 3.2),
                ("achievement_orientation", 2.1),
                ("concern_for_order", 3.8),
                ("organizational_commitment", 2.8),
                ("ethical_oriented", 3.5),
            ],
            [
                ("building_collaborative_relationship", 2.5),
                ("business_savvy", 1.8),
                ("customer_focus", 3.1),
                ("strategic_orientation", 2.0),
                ("sustainability_mindset", 3.4),
                ("execution_focused", 3.0),
                ("digital_literate", 1.9),
            ],
            [
                ("creativity_innovation", 2.3),
                ("transformational_leadership", 2.7),
                ("nurturing_empowering_people", 3.1),
                ("managing_equality_diversity", 2.9),
            ],
        ),
        "finance_staff" => (
            "Staff",
            "finance",
            "junior",
            [
                ("information_seeking", 2.8),
                ("resilience", 2.1),
                ("achievement_orientation", 1.9),
                ("concern_for_order", 1.5),
                ("organizational_commitment", 3.2),
                ("ethical_oriented", 1.8),
            ],
            [
                ("building_collaborative_relationship", 3.0),
                ("business_savvy", 1.7),
                ("customer_focus", 2.9),
                ("strategic_orientation", 2.5),
                ("sustainability_mindset", 3.1),
                ("execution_focused", 2.8),
                ("digital_literate", 2.2),
            ],
            [
                ("creativity_innovation", 2.6),
                ("transformational_leadership", 3.0),
                ("nurturing_empowering_people", 2.8),
                ("managing_equality_diversity", 3.1),
            ],
        ),
        "it_supervisor" => (
            "Supervisor",
            "it",
            "mid",
            [
                ("information_seeking", 4.2),
                ("resilience", 3.5),
                ("achievement_orientation", 1.8),
                ("concern_for_order", 3.0),
                ("organizational_commitment", 2.1),
                ("ethical_oriented", 3.8),
            ],
            [
                ("building_collaborative_relationship", 1.9),
                ("business_savvy", 2.8),
                ("customer_focus", 3.2),
                ("strategic_orientation", 1.6),
                ("sustainability_mindset", 3.0),
                ("execution_focused", 3.4),
                ("digital_literate", 4.1),
            ],
            [
                ("creativity_innovation", 1.7),
                ("transformational_leadership", 2.2),
                ("nurturing_empowering_people", 1.5),
                ("managing_equality_diversity", 2.8),
            ],
        ),
        _ => return None,
    };

    Some(AssessmentInput {
        employee_id: format!("SAMPLE-{}", name.to_uppercase()),
        current_position: position.to_string(),
        division: division.to_string(),
        experience_level: experience.to_string(),
        core_competency_scores: scores(&core),
        managerial_competency_scores: scores(&managerial),
        leadership_competency_scores: scores(&leadership),
    })
}
