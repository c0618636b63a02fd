//! Training Resolver — maps a school name to a concrete training record.
//!
//! Three tiers: whole-name match, then any-word match, then a synthesized
//! placeholder. Resolution never fails.

use std::borrow::Cow;

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::training::TrainingRecord;

const FALLBACK_DURATION_DAYS: u32 = 3;
const FALLBACK_COST: u64 = 5_000_000;

pub fn resolve<'a>(school_name: &str, catalog: &'a Catalog) -> Cow<'a, TrainingRecord> {
    let needle = school_name.to_lowercase();

    if let Some(found) = catalog
        .trainings()
        .iter()
        .find(|t| t.school.to_lowercase().contains(&needle))
    {
        return Cow::Borrowed(found);
    }

    let words: Vec<&str> = needle.split_whitespace().collect();
    if let Some(found) = catalog.trainings().iter().find(|t| {
        let school = t.school.to_lowercase();
        words.iter().any(|word| school.contains(word))
    }) {
        debug!(
            "School '{school_name}' resolved by partial match to {}",
            found.training_id
        );
        return Cow::Borrowed(found);
    }

    debug!("School '{school_name}' not in catalog, using generic program");
    Cow::Owned(generic_training(school_name))
}

/// Placeholder record for a school the catalog does not cover. Not added to the catalog.
pub fn generic_training(school_name: &str) -> TrainingRecord {
    TrainingRecord {
        training_id: format!("GENERIC_{}", school_name.replace(' ', "_").to_uppercase()),
        training_name: format!("Training Program for {school_name}"),
        school: school_name.to_string(),
        target_division: "general".to_string(),
        target_level: "ALL".to_string(),
        duration_days: FALLBACK_DURATION_DAYS,
        cost: FALLBACK_COST,
        job_family: "General".to_string(),
        learning_objectives: vec![
            "Competency development".to_string(),
            "Skill enhancement".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;

    #[test]
    fn test_exact_match_returns_first_in_catalog_order() {
        let catalog = builtin().unwrap();
        let record = resolve("Teknologi Informasi", &catalog);
        assert_eq!(record.training_id, "IT-2024-501");
        assert!(matches!(record, Cow::Borrowed(_)));
    }

    #[test]
    fn test_exact_match_is_substring_of_school() {
        let catalog = builtin().unwrap();
        let record = resolve("Financial Management for Leader", &catalog);
        assert_eq!(record.training_id, "FN-2024-301");
    }

    #[test]
    fn test_exact_match_ignores_case() {
        let catalog = builtin().unwrap();
        assert_eq!(resolve("hukum", &catalog).training_id, "LG-2024-801");
    }

    #[test]
    fn test_partial_match_on_any_word() {
        let catalog = builtin().unwrap();
        // misspelled school: "strategi" matches "Transformasi Strategis" first
        let record = resolve("Strategi Transfrormasi", &catalog);
        assert_eq!(record.training_id, "ST-2024-901");
    }

    #[test]
    fn test_unknown_school_yields_generic_record() {
        let empty = Catalog::empty();
        let record = resolve("Nonexistent School XYZ", &empty);
        assert_eq!(record.training_id, "GENERIC_NONEXISTENT_SCHOOL_XYZ");
        assert_eq!(record.training_name, "Training Program for Nonexistent School XYZ");
        assert_eq!(record.school, "Nonexistent School XYZ");
        assert_eq!(record.duration_days, 3);
        assert_eq!(record.cost, 5_000_000);
        assert_eq!(record.learning_objectives.len(), 2);
        assert_eq!(record.job_family, "General");
    }

    #[test]
    fn test_unknown_school_against_full_catalog() {
        let catalog = builtin().unwrap();
        let record = resolve("Nonexistent School XYZ", &catalog);
        assert_eq!(record.training_id, "GENERIC_NONEXISTENT_SCHOOL_XYZ");
    }

    #[test]
    fn test_resolution_never_leaves_empty_id() {
        let empty = Catalog::empty();
        for name in ["A", "Operasional Tanaman Karet (On Farm)", "x y z"] {
            assert!(!resolve(name, &empty).training_id.is_empty());
        }
    }

    #[test]
    fn test_karet_falls_back_to_word_match() {
        let catalog = builtin().unwrap();
        // no rubber program; "operasional" hits the first plantation operations school
        let record = resolve("Operasional Tanaman Karet (On Farm)", &catalog);
        assert_eq!(record.training_id, "PL-2024-P0153");
    }
}
