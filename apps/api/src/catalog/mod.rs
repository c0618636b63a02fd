//! Catalog Store — the immutable competency → school, division → school-fragment,
//! and training-id → record tables the recommendation engine reads from.
//!
//! Built once at startup (from `CATALOG_PATH` or the built-in defaults) and shared
//! read-only behind an `Arc`. Nothing mutates a `Catalog` after construction.

pub mod defaults;
pub mod overview;

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::models::training::TrainingRecord;

pub use defaults::builtin;
pub use overview::{overview, CatalogOverview};

/// Competency key → ordered candidate school names.
pub type CompetencyTrainingMap = HashMap<String, Vec<String>>;

/// Division key → school-name fragments matched by substring.
pub type DivisionMap = HashMap<String, Vec<String>>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Training id must not be empty (training '{0}')")]
    EmptyTrainingId(String),

    #[error("Duplicate training id: {0}")]
    DuplicateTrainingId(String),

    #[error("Training {0} has a zero-day duration")]
    ZeroDuration(String),
}

/// On-disk shape of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    competency_training_mapping: CompetencyTrainingMap,
    #[serde(default)]
    division_mapping: DivisionMap,
    #[serde(default)]
    trainings: Vec<TrainingRecord>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    competency_training_mapping: CompetencyTrainingMap,
    division_mapping: DivisionMap,
    /// Authored order. Resolver scans in this order.
    trainings: Vec<TrainingRecord>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(
        competency_training_mapping: CompetencyTrainingMap,
        division_mapping: DivisionMap,
        trainings: Vec<TrainingRecord>,
    ) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(trainings.len());
        for (idx, training) in trainings.iter().enumerate() {
            if training.training_id.trim().is_empty() {
                return Err(CatalogError::EmptyTrainingId(training.training_name.clone()));
            }
            if training.duration_days == 0 {
                return Err(CatalogError::ZeroDuration(training.training_id.clone()));
            }
            if by_id.insert(training.training_id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateTrainingId(training.training_id.clone()));
            }
        }

        let division_mapping = division_mapping
            .into_iter()
            .map(|(division, fragments)| (division.to_lowercase(), fragments))
            .collect();

        Ok(Self {
            competency_training_mapping,
            division_mapping,
            trainings,
            by_id,
        })
    }

    /// A catalog with no mappings and no trainings.
    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            competency_training_mapping: HashMap::new(),
            division_mapping: HashMap::new(),
            trainings: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(text)?;
        Self::new(
            file.competency_training_mapping,
            file.division_mapping,
            file.trainings,
        )
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&text)?;
        info!(
            "Loaded catalog from {}: {} trainings, {} competencies, {} divisions",
            path.display(),
            catalog.trainings.len(),
            catalog.competency_count(),
            catalog.division_count()
        );
        Ok(catalog)
    }

    /// Candidate schools mapped to a prefixed competency key, if any.
    pub fn schools_for(&self, competency: &str) -> Option<&[String]> {
        self.competency_training_mapping
            .get(competency)
            .map(Vec::as_slice)
    }

    /// School-name fragments for a division (case-insensitive lookup).
    pub fn division_fragments(&self, division: &str) -> Option<&[String]> {
        self.division_mapping
            .get(&division.to_lowercase())
            .map(Vec::as_slice)
    }

    pub fn training(&self, training_id: &str) -> Option<&TrainingRecord> {
        self.by_id.get(training_id).map(|&idx| &self.trainings[idx])
    }

    pub fn trainings(&self) -> &[TrainingRecord] {
        &self.trainings
    }

    pub fn competency_count(&self) -> usize {
        self.competency_training_mapping.len()
    }

    pub fn division_count(&self) -> usize {
        self.division_mapping.len()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::make_training;
    use super::*;
    use std::io::Write;

    const SMALL_CATALOG: &str = r#"{
        "competency_training_mapping": {
            "core_resilience": ["SDM", "Program Keahlian Khusus"]
        },
        "division_mapping": {
            "HR": ["SDM"]
        },
        "trainings": [
            {
                "training_id": "HR-1",
                "training_name": "Strategic Human Resource Management",
                "school": "SDM",
                "target_division": "hr",
                "target_level": "Manager",
                "duration_days": 5,
                "cost": 7000000,
                "job_family": "SDM",
                "learning_objectives": ["Strategic HR planning", "Talent management"]
            }
        ]
    }"#;

    #[test]
    fn test_from_json_str_builds_lookups() {
        let catalog = Catalog::from_json_str(SMALL_CATALOG).unwrap();
        assert_eq!(catalog.trainings().len(), 1);
        assert_eq!(
            catalog.schools_for("core_resilience").unwrap(),
            ["SDM".to_string(), "Program Keahlian Khusus".to_string()]
        );
        assert_eq!(catalog.training("HR-1").unwrap().duration_days, 5);
        assert!(catalog.training("HR-2").is_none());
    }

    #[test]
    fn test_division_lookup_is_case_insensitive() {
        let catalog = Catalog::from_json_str(SMALL_CATALOG).unwrap();
        assert!(catalog.division_fragments("hr").is_some());
        assert!(catalog.division_fragments("Hr").is_some());
        assert!(catalog.division_fragments("finance").is_none());
    }

    #[test]
    fn test_duplicate_training_id_rejected() {
        let trainings = vec![
            make_training("X-1", "One", "SDM", "hr"),
            make_training("X-1", "Two", "SDM", "hr"),
        ];
        let err = Catalog::new(HashMap::new(), HashMap::new(), trainings).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateTrainingId(id) if id == "X-1"));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut training = make_training("X-1", "One", "SDM", "hr");
        training.duration_days = 0;
        let err = Catalog::new(HashMap::new(), HashMap::new(), vec![training]).unwrap_err();
        assert!(matches!(err, CatalogError::ZeroDuration(_)));
    }

    #[test]
    fn test_empty_training_id_rejected() {
        let training = make_training("  ", "Nameless", "SDM", "hr");
        let err = Catalog::new(HashMap::new(), HashMap::new(), vec![training]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyTrainingId(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Catalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_from_json_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL_CATALOG.as_bytes()).unwrap();
        let catalog = Catalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.competency_count(), 1);
        assert_eq!(catalog.division_count(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::from_json_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_empty_catalog_has_nothing() {
        let catalog = Catalog::empty();
        assert!(catalog.trainings().is_empty());
        assert!(catalog.schools_for("core_resilience").is_none());
    }
}
