//! Keyword sets behind the filtering and scoring rules.
//!
//! Matching is lower-cased substring containment. This is best-effort fuzzy
//! classification of free-text names, not an exact taxonomy.

/// Position text marking a managerial employee.
pub const MANAGERIAL_POSITION_MARKERS: &[&str] = &["manager", "supervisor"];

/// Schools added to the candidate set for managerial employees.
pub const MANAGEMENT_SCHOOL_KEYWORDS: &[&str] =
    &["strategic", "leadership", "management", "manajemen", "transformasi"];

/// Schools removed from the candidate set for junior employees.
pub const JUNIOR_EXCLUDED_SCHOOL_KEYWORDS: &[&str] =
    &["advanced", "strategic", "transformasi", "executive"];

/// Schools added to the candidate set for senior employees.
pub const SENIOR_SCHOOL_KEYWORDS: &[&str] = &["strategic", "leadership", "transformasi"];

/// Training names that count as management training when scoring.
pub const MANAGEMENT_TRAINING_KEYWORDS: &[&str] = &[
    "strategi",
    "leadership",
    "management",
    "manajemen",
    "strategic",
    "executive",
];

/// Training names that count as advanced training when scoring.
pub const ADVANCED_TRAINING_KEYWORDS: &[&str] =
    &["advanced", "strategic", "transformasi", "leadership", "executive"];

/// True if `text` contains any keyword, ignoring case.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|kw| lower.contains(kw))
}

pub fn is_managerial_position(position: &str) -> bool {
    contains_any(position, MANAGERIAL_POSITION_MARKERS)
}

pub fn is_management_training(training_name: &str) -> bool {
    contains_any(training_name, MANAGEMENT_TRAINING_KEYWORDS)
}

pub fn is_advanced_training(training_name: &str) -> bool {
    contains_any(training_name, ADVANCED_TRAINING_KEYWORDS)
}
