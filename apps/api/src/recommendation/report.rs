//! Markdown export of a recommendation response.

use std::fmt::Write;

use crate::recommendation::assembler::RecommendationResponse;

/// "core_information_seeking" → "Core Information Seeking".
pub fn competency_label(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Rupiah amount with thousands separators, e.g. "Rp 7,500,000".
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("Rp {grouped}")
}

/// Download name for the report. Characters outside `[A-Za-z0-9_-]` become `_`.
pub fn file_name(response: &RecommendationResponse) -> String {
    let id: String = response
        .employee_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("training_report_{id}.md")
}

pub fn render_markdown(response: &RecommendationResponse) -> String {
    let mut out = String::new();
    // fmt::Write for String never returns Err
    if write_report(&mut out, response).is_err() {
        tracing::warn!(employee_id = %response.employee_id, "report rendering stopped early");
    }
    out
}

fn write_report(out: &mut String, response: &RecommendationResponse) -> std::fmt::Result {
    writeln!(out, "# Training Recommendation Report\n")?;
    writeln!(out, "**Employee ID:** {}", response.employee_id)?;
    writeln!(out, "**Assessment Date:** {}", response.assessment_date)?;
    writeln!(
        out,
        "**Total Investment:** {}",
        format_rupiah(response.summary.total_estimated_cost)
    )?;
    writeln!(
        out,
        "**Total Duration:** {} days\n",
        response.summary.total_estimated_duration
    )?;

    if let Some(error) = &response.error {
        writeln!(out, "**Error:** {error}\n")?;
    }

    writeln!(out, "## Recommendations\n")?;
    if response.recommendations.is_empty() {
        writeln!(out, "No recommendations.\n")?;
    }

    for rec in &response.recommendations {
        let training = &rec.recommended_training;
        writeln!(out, "### {}. {}", rec.priority, training.training_name)?;
        writeln!(out, "- **School:** {}", training.school)?;
        writeln!(out, "- **Gap:** {}", competency_label(&rec.competency_gap))?;
        writeln!(
            out,
            "- **Current Score:** {:.1}/5 → **Target:** {:.1}/5",
            rec.current_score, rec.target_score
        )?;
        writeln!(out, "- **Relevance:** {:.2}/10", rec.relevance_score)?;
        writeln!(out, "- **Duration:** {} days", training.duration_days)?;
        writeln!(out, "- **Cost:** {}", format_rupiah(training.cost))?;
        writeln!(out, "- **Timeline:** {}", rec.timeline)?;
        if !training.learning_objectives.is_empty() {
            writeln!(out, "- **Learning Objectives:**")?;
            for (idx, objective) in training.learning_objectives.iter().enumerate() {
                writeln!(out, "  {}. {objective}", idx + 1)?;
            }
        }
        writeln!(out)?;
    }

    let path = &response.development_path;
    writeln!(out, "## Development Path\n")?;
    for (title, gaps) in [
        ("Critical Priority", &path.critical),
        ("High Priority", &path.high_priority),
        ("Medium Priority", &path.medium_priority),
    ] {
        writeln!(out, "### {title}")?;
        if gaps.is_empty() {
            writeln!(out, "- None")?;
        }
        for gap in gaps {
            writeln!(out, "- {}", competency_label(gap))?;
        }
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::make_training;
    use crate::recommendation::assembler::{
        DevelopmentPath, FormattedRecommendation, Summary,
    };

    fn response() -> RecommendationResponse {
        RecommendationResponse {
            employee_id: "EMP042".to_string(),
            assessment_date: "2024-06-01".to_string(),
            recommendations: vec![FormattedRecommendation {
                priority: 1,
                competency_gap: "core_information_seeking".to_string(),
                current_score: 1.5,
                target_score: 3.5,
                recommended_training: make_training(
                    "IT-2024-502",
                    "Information Systems & Data Analytics",
                    "Teknologi Informasi",
                    "it",
                ),
                relevance_score: 6.63,
                expected_improvement: 2.0,
                timeline: "Immediate (within 1 month)".to_string(),
            }],
            development_path: DevelopmentPath {
                critical: vec!["core_information_seeking".to_string()],
                ..Default::default()
            },
            summary: Summary {
                total_recommendations: 1,
                total_estimated_cost: 6_000_000,
                total_estimated_duration: 4,
            },
            error: None,
        }
    }

    #[test]
    fn test_format_rupiah_groups_thousands() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(999), "Rp 999");
        assert_eq!(format_rupiah(1_000), "Rp 1,000");
        assert_eq!(format_rupiah(15_000_000), "Rp 15,000,000");
        assert_eq!(format_rupiah(123_456_789), "Rp 123,456,789");
    }

    #[test]
    fn test_competency_label_title_cases() {
        assert_eq!(competency_label("core_information_seeking"), "Core Information Seeking");
        assert_eq!(competency_label("leadership_creativity_innovation"), "Leadership Creativity Innovation");
    }

    #[test]
    fn test_report_contains_headline_figures() {
        let report = render_markdown(&response());
        assert!(report.starts_with("# Training Recommendation Report"));
        assert!(report.contains("**Employee ID:** EMP042"));
        assert!(report.contains("**Total Investment:** Rp 6,000,000"));
        assert!(report.contains("**Total Duration:** 4 days"));
        assert!(report.contains("### 1. Information Systems & Data Analytics"));
        assert!(report.contains("1.5/5 → **Target:** 3.5/5"));
        assert!(report.contains("  1. First objective"));
    }

    #[test]
    fn test_write_report_appends_to_buffer() {
        let mut out = String::from("<!-- exported -->\n");
        assert!(write_report(&mut out, &response()).is_ok());
        assert!(out.starts_with("<!-- exported -->\n# Training Recommendation Report"));
        assert_eq!(&out["<!-- exported -->\n".len()..], render_markdown(&response()).as_str());
        assert!(out.ends_with("### Medium Priority\n- None\n\n"));
    }

    #[test]
    fn test_report_lists_development_path() {
        let report = render_markdown(&response());
        let critical = report.find("### Critical Priority").unwrap();
        let high = report.find("### High Priority").unwrap();
        assert!(report[critical..high].contains("- Core Information Seeking"));
        assert!(report[high..].contains("- None"));
    }

    #[test]
    fn test_report_surfaces_error() {
        let mut failed = response();
        failed.recommendations.clear();
        failed.error = Some("Competency core_x has a non-finite score".to_string());
        let report = render_markdown(&failed);
        assert!(report.contains("**Error:** Competency core_x"));
        assert!(report.contains("No recommendations."));
    }

    #[test]
    fn test_file_name_uses_employee_id() {
        assert_eq!(file_name(&response()), "training_report_EMP042.md");
    }

    #[test]
    fn test_file_name_sanitizes_employee_id() {
        let mut odd = response();
        odd.employee_id = "EMP \"42\"/x".to_string();
        assert_eq!(file_name(&odd), "training_report_EMP__42__x.md");
    }
}
