use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Competency key → self/assessed score, expected in [1.0, 5.0].
pub type ScoreGroup = BTreeMap<String, f64>;

/// Experience band of the employee. Derived from the free-text
/// `experience_level` field, so UI labels such as "Senior (7+ years)" are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
}

impl ExperienceLevel {
    /// Reads the first alphanumeric word case-insensitively, so "Junior-level"
    /// and "senior/lead" are recognised. Unknown values fall back to `Mid`,
    /// which carries no experience-specific rule.
    pub fn parse(raw: &str) -> Self {
        let first = raw
            .split(|c: char| !c.is_alphanumeric())
            .find(|word| !word.is_empty())
            .unwrap_or_default()
            .to_lowercase();
        match first.as_str() {
            "junior" => ExperienceLevel::Junior,
            "senior" => ExperienceLevel::Senior,
            _ => ExperienceLevel::Mid,
        }
    }
}

fn unknown_employee() -> String {
    "Unknown".to_string()
}

/// A single employee's competency assessment, as supplied by the form layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentInput {
    #[serde(default = "unknown_employee")]
    pub employee_id: String,
    #[serde(default)]
    pub current_position: String,
    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub core_competency_scores: ScoreGroup,
    #[serde(default)]
    pub managerial_competency_scores: ScoreGroup,
    #[serde(default)]
    pub leadership_competency_scores: ScoreGroup,
}

impl AssessmentInput {
    pub fn experience(&self) -> ExperienceLevel {
        ExperienceLevel::parse(&self.experience_level)
    }

    /// Score groups in merge order, paired with the key prefix each one carries.
    pub fn score_groups(&self) -> [(&'static str, &ScoreGroup); 3] {
        [
            ("core_", &self.core_competency_scores),
            ("managerial_", &self.managerial_competency_scores),
            ("leadership_", &self.leadership_competency_scores),
        ]
    }
}
