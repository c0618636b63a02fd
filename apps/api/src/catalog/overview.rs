use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Catalog;

/// Coverage statistics for the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogOverview {
    pub total_programs: usize,
    pub divisions_covered: usize,
    pub competencies_mapped: usize,
    pub average_cost: f64,
    pub programs_by_division: BTreeMap<String, usize>,
}

pub fn overview(catalog: &Catalog) -> CatalogOverview {
    let trainings = catalog.trainings();

    let mut programs_by_division: BTreeMap<String, usize> = BTreeMap::new();
    for training in trainings {
        *programs_by_division
            .entry(training.target_division.clone())
            .or_insert(0) += 1;
    }

    let average_cost = if trainings.is_empty() {
        0.0
    } else {
        trainings.iter().map(|t| t.cost as f64).sum::<f64>() / trainings.len() as f64
    };

    CatalogOverview {
        total_programs: trainings.len(),
        divisions_covered: programs_by_division.len(),
        competencies_mapped: catalog.competency_count(),
        average_cost,
        programs_by_division,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;
    use crate::catalog::test_support::make_training;
    use std::collections::HashMap;

    #[test]
    fn test_empty_catalog_overview_is_zeroed() {
        let report = overview(&Catalog::empty());
        assert_eq!(report.total_programs, 0);
        assert_eq!(report.divisions_covered, 0);
        assert_eq!(report.average_cost, 0.0);
    }

    #[test]
    fn test_average_cost_and_division_counts() {
        let mut cheap = make_training("A", "A", "SDM", "hr");
        cheap.cost = 4_000_000;
        let mut pricey = make_training("B", "B", "SDM", "hr");
        pricey.cost = 8_000_000;
        let other = make_training("C", "C", "Hukum", "legal");
        let catalog = Catalog::new(HashMap::new(), HashMap::new(), vec![cheap, pricey, other]).unwrap();

        let report = overview(&catalog);
        assert_eq!(report.total_programs, 3);
        assert_eq!(report.divisions_covered, 2);
        assert_eq!(report.programs_by_division["hr"], 2);
        assert!((report.average_cost - 6_000_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_builtin_overview_counts_all_division_wildcard() {
        let report = overview(&builtin().unwrap());
        assert_eq!(report.total_programs, 19);
        assert_eq!(report.divisions_covered, 11);
        assert_eq!(report.competencies_mapped, 17);
        assert_eq!(report.programs_by_division["ALL"], 1);
    }
}
