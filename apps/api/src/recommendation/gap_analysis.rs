//! Gap Analyzer — flattens the three score groups and picks the weakest areas.

use serde::{Deserialize, Serialize};

use crate::models::assessment::AssessmentInput;

/// Number of priority areas carried into recommendation.
pub const PRIORITY_AREA_LIMIT: usize = 5;

/// A prefixed competency key with its current score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompetencyGap {
    pub competency: String,
    pub score: f64,
}

/// A priority area annotated for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriorityArea {
    pub competency: String,
    pub score: f64,
    pub priority_level: u8,
    pub label: String,
    pub timeline: String,
}

/// All scores as one flat list of prefixed keys, in merge order:
/// core, then managerial, then leadership; lexical key order within a group.
pub fn merged_scores(assessment: &AssessmentInput) -> Vec<CompetencyGap> {
    assessment
        .score_groups()
        .into_iter()
        .flat_map(|(prefix, group)| {
            group.iter().map(move |(key, &score)| CompetencyGap {
                competency: format!("{prefix}{key}"),
                score,
            })
        })
        .collect()
}

/// Lowest-scoring competencies first, at most `PRIORITY_AREA_LIMIT`.
///
/// The sort is stable over `merged_scores`, so equal scores keep merge order.
pub fn identify_priority_areas(assessment: &AssessmentInput) -> Vec<CompetencyGap> {
    let mut all = merged_scores(assessment);
    all.sort_by(|a, b| a.score.total_cmp(&b.score));
    all.truncate(PRIORITY_AREA_LIMIT);
    all
}

/// 1 = critical, 2 = high, 3 = medium, 4 = low. Band edges belong to the higher band.
pub fn priority_level(score: f64) -> u8 {
    if score < 2.0 {
        1
    } else if score < 3.0 {
        2
    } else if score < 3.5 {
        3
    } else {
        4
    }
}

pub fn timeline(priority_level: u8) -> &'static str {
    match priority_level {
        1 => "Immediate (within 1 month)",
        2 => "High Priority (within 3 months)",
        3 => "Medium Priority (within 6 months)",
        4 => "Low Priority (within 12 months)",
        _ => "To be scheduled",
    }
}

pub fn priority_label(priority_level: u8) -> &'static str {
    match priority_level {
        1 => "Critical",
        2 => "High",
        3 => "Medium",
        _ => "Low",
    }
}

pub fn priority_areas_with_levels(assessment: &AssessmentInput) -> Vec<PriorityArea> {
    identify_priority_areas(assessment)
        .into_iter()
        .map(|gap| {
            let level = priority_level(gap.score);
            PriorityArea {
                competency: gap.competency,
                score: gap.score,
                priority_level: level,
                label: priority_label(level).to_string(),
                timeline: timeline(level).to_string(),
            }
        })
        .collect()
}
