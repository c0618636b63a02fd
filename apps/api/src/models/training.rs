use serde::{Deserialize, Serialize};

/// A training program in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainingRecord {
    pub training_id: String,
    pub training_name: String,
    /// School / category the program belongs to, e.g. "Teknologi Informasi".
    pub school: String,
    /// `ALL` matches every division.
    pub target_division: String,
    pub target_level: String,
    pub duration_days: u32,
    /// Smallest currency unit (Rupiah).
    pub cost: u64,
    pub job_family: String,
    pub learning_objectives: Vec<String>,
}
