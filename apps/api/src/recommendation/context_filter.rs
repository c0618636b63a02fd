//! Context Filter — adjusts a competency's candidate schools to the employee.
//!
//! Filtering is additive: the managerial, division and senior rules each union
//! matches from the original candidate list into the accumulated set. The
//! junior rule is the single subtractive pass and runs after the managerial
//! and division unions. Reordering these steps changes the output.

use crate::catalog::Catalog;
use crate::models::assessment::ExperienceLevel;
use crate::recommendation::keywords::{
    contains_any, is_managerial_position, JUNIOR_EXCLUDED_SCHOOL_KEYWORDS,
    MANAGEMENT_SCHOOL_KEYWORDS, SENIOR_SCHOOL_KEYWORDS,
};

/// Employee attributes the filter and scorer look at.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeContext<'a> {
    pub position: &'a str,
    pub division: &'a str,
    pub experience: ExperienceLevel,
}

/// Returns the distinct schools to consider, in first-seen order.
pub fn filter_by_context(
    candidates: &[String],
    context: EmployeeContext<'_>,
    catalog: &Catalog,
) -> Vec<String> {
    let mut filtered: Vec<&String> = candidates.iter().collect();

    if is_managerial_position(context.position) {
        filtered.extend(
            candidates
                .iter()
                .filter(|school| contains_any(school, MANAGEMENT_SCHOOL_KEYWORDS)),
        );
    }

    if let Some(fragments) = catalog.division_fragments(context.division) {
        let fragments: Vec<String> = fragments.iter().map(|f| f.to_lowercase()).collect();
        filtered.extend(candidates.iter().filter(|school| {
            let school = school.to_lowercase();
            fragments.iter().any(|fragment| school.contains(fragment.as_str()))
        }));
    }

    match context.experience {
        ExperienceLevel::Junior => {
            filtered.retain(|school| !contains_any(school, JUNIOR_EXCLUDED_SCHOOL_KEYWORDS));
        }
        ExperienceLevel::Senior => {
            filtered.extend(
                candidates
                    .iter()
                    .filter(|school| contains_any(school, SENIOR_SCHOOL_KEYWORDS)),
            );
        }
        ExperienceLevel::Mid => {}
    }

    let mut distinct: Vec<String> = Vec::with_capacity(filtered.len());
    for school in filtered {
        if !distinct.contains(school) {
            distinct.push(school.clone());
        }
    }
    distinct
}
