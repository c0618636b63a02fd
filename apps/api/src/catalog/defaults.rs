//! Built-in catalog used when no `CATALOG_PATH` is configured.

use std::collections::HashMap;

use super::{Catalog, CatalogError, CompetencyTrainingMap, DivisionMap};
use crate::models::training::TrainingRecord;

const COMPETENCY_TRAININGS: &[(&str, &[&str])] = &[
    ("core_information_seeking", &["Teknologi Informasi", "Strategi SDM"]),
    ("core_resilience", &["SDM", "Program Keahlian Khusus"]),
    ("core_achievement_orientation", &["Strategi SDM", "Financial Management for Leader"]),
    ("core_concern_for_order", &["Audit Internal & Manajemen Risiko", "Akuntansi & Keuangan"]),
    ("core_organizational_commitment", &["SDM", "Strategi SDM"]),
    ("core_ethical_oriented", &["Hukum", "Audit Internal dan Manajemen Risiko"]),
    ("managerial_building_collaborative_relationship", &["SDM", "Strategi Pemasaran"]),
    ("managerial_business_savvy", &["Agribusiness Productivity Institute", "Strategi SDM"]),
    ("managerial_customer_focus", &["Strategi Pemasaran", "Agribusiness Productivity Institute"]),
    ("managerial_strategic_orientation", &["Transformasi Strategis", "Strategi Transfrormasi"]),
    (
        "managerial_sustainability_mindset",
        &["Operasional Tanaman Tebu (On Farm)", "Operasional Tanaman Sawit (On Farm)"],
    ),
    (
        "managerial_execution_focused",
        &["Operasional Pabrik Kelapa Sawit (Off Farm)", "Operasional Tanaman Karet (On Farm)"],
    ),
    ("managerial_digital_literate", &["Teknologi Informasi", "Transformasi Strategis"]),
    ("leadership_creativity_innovation", &["Transformasi Strategis", "Strategi Transfrormasi"]),
    ("leadership_transformational_leadership", &["SDM", "Strategi SDM"]),
    ("leadership_nurturing_empowering_people", &["SDM", "Program Keahlian Khusus"]),
    ("leadership_managing_equality_diversity", &["SDM", "Hukum"]),
];

const DIVISION_SCHOOLS: &[(&str, &[&str])] = &[
    ("plantation", &["Operasional Tanaman", "Agribusiness Productivity Institute"]),
    ("factory", &["Operasional Pabrik"]),
    ("finance", &["Akuntansi & Keuangan", "Financial Management"]),
    ("hr", &["SDM", "Strategi SDM"]),
    ("it", &["Teknologi Informasi"]),
    ("procurement", &["Pengadaan"]),
    ("audit", &["Audit Internal"]),
    ("legal", &["Hukum"]),
    ("strategy", &["Transformasi Strategis", "Strategi"]),
    ("marketing", &["Strategi Pemasaran"]),
];

#[allow(clippy::too_many_arguments)]
fn program(
    training_id: &str,
    training_name: &str,
    school: &str,
    target_division: &str,
    target_level: &str,
    duration_days: u32,
    cost: u64,
    job_family: &str,
    learning_objectives: &[&str],
) -> TrainingRecord {
    TrainingRecord {
        training_id: training_id.to_string(),
        training_name: training_name.to_string(),
        school: school.to_string(),
        target_division: target_division.to_string(),
        target_level: target_level.to_string(),
        duration_days,
        cost,
        job_family: job_family.to_string(),
        learning_objectives: learning_objectives.iter().map(|o| o.to_string()).collect(),
    }
}

fn programs() -> Vec<TrainingRecord> {
    vec![
        // Plantation
        program(
            "PL-2024-418",
            "PENDEKATAN LOGIKA MENGIDENTIFIKASI ANOMALI PRODUKSI",
            "Agribusiness Productivity Institute",
            "plantation",
            "ALL",
            3,
            6_000_000,
            "Tanaman",
            &[
                "Integrasi geospike dan lingkungan di perkebunan",
                "Seasonal effect di tanaman sawit",
                "Prinsip dasar pemahaman data produksi",
                "Metode identifikasi anomali di perkebunan",
            ],
        ),
        program(
            "PL-2024-P0153",
            "Budidaya Tanaman Tebu - Persiapan Lahan & Kultivasi",
            "Operasional Tanaman Tebu (On Farm)",
            "plantation",
            "Operasional",
            5,
            5_000_000,
            "Tanaman",
            &[
                "Teknik dasar kultivasi tebu",
                "Manajemen pengairan dan irigasi",
                "Pengendalian OPT tebu",
                "Sustainable farming practices",
            ],
        ),
        program(
            "PL-2024-P0154",
            "Operasional Tanaman Sawit - Advanced Plantation Management",
            "Operasional Tanaman Sawit (On Farm)",
            "plantation",
            "Manager",
            4,
            7_500_000,
            "Tanaman",
            &[
                "Advanced plantation management techniques",
                "Yield optimization strategies",
                "Team leadership in plantation operations",
                "Environmental sustainability practices",
            ],
        ),
        // Factory
        program(
            "FC-2024-201",
            "Operasional Pabrik Kelapa Sawit - Process Optimization",
            "Operasional Pabrik Kelapa Sawit (Off Farm)",
            "factory",
            "ALL",
            6,
            8_000_000,
            "Pabrik",
            &[
                "Advanced palm oil processing techniques",
                "Quality control and assurance",
                "Equipment maintenance and optimization",
                "Safety protocols and procedures",
            ],
        ),
        program(
            "FC-2024-202",
            "Manufacturing Excellence & Lean Production",
            "Operasional Pabrik Kelapa Sawit (Off Farm)",
            "factory",
            "Supervisor",
            4,
            6_500_000,
            "Pabrik",
            &[
                "Lean manufacturing principles",
                "Continuous improvement methodologies",
                "Team leadership in manufacturing",
                "Waste reduction techniques",
            ],
        ),
        // Finance
        program(
            "FN-2024-301",
            "Financial Management for Leaders",
            "Financial Management for Leader (Jakarta)",
            "finance",
            "Manager",
            5,
            9_000_000,
            "Keuangan",
            &[
                "Strategic financial planning",
                "Investment analysis and decision making",
                "Financial risk management",
                "Budget planning and control",
                "Leadership in finance function",
            ],
        ),
        program(
            "FN-2024-302",
            "Advanced Accounting & Financial Reporting",
            "Akuntansi & Keuangan",
            "finance",
            "ALL",
            4,
            5_500_000,
            "Keuangan",
            &[
                "Advanced accounting principles",
                "Financial reporting standards",
                "Digital accounting systems",
                "Compliance and regulatory requirements",
            ],
        ),
        // HR
        program(
            "HR-2024-401",
            "Strategic Human Resource Management",
            "SDM",
            "hr",
            "Manager",
            5,
            7_000_000,
            "SDM",
            &[
                "Strategic HR planning and execution",
                "Talent management and development",
                "Employee engagement strategies",
                "Performance management systems",
                "Diversity and inclusion practices",
            ],
        ),
        program(
            "HR-2024-402",
            "Employee Development & Training Design",
            "Program Keahlian Khusus",
            "hr",
            "ALL",
            4,
            5_000_000,
            "SDM",
            &[
                "Training needs analysis",
                "Learning program design",
                "Adult learning principles",
                "Training evaluation methods",
            ],
        ),
        // IT
        program(
            "IT-2024-501",
            "Digital Transformation & Technology Leadership",
            "Teknologi Informasi",
            "it",
            "Manager",
            6,
            10_000_000,
            "IT",
            &[
                "Digital transformation strategies",
                "IT governance and management",
                "Emerging technology evaluation",
                "Cybersecurity leadership",
                "Innovation management in IT",
            ],
        ),
        program(
            "IT-2024-502",
            "Information Systems & Data Analytics",
            "Teknologi Informasi",
            "it",
            "ALL",
            5,
            7_500_000,
            "IT",
            &[
                "Database design and management",
                "Data analytics and visualization",
                "Business intelligence systems",
                "System integration techniques",
            ],
        ),
        // Procurement
        program(
            "PR-2024-601",
            "Strategic Procurement & Supply Chain Management",
            "Pengadaan",
            "procurement",
            "Manager",
            5,
            8_000_000,
            "Pengadaan",
            &[
                "Strategic sourcing methodologies",
                "Supplier relationship management",
                "Contract negotiation and management",
                "Supply chain optimization",
                "Risk management in procurement",
            ],
        ),
        program(
            "PR-2024-602",
            "Procurement Operations & Vendor Management",
            "Pengadaan",
            "procurement",
            "ALL",
            4,
            5_500_000,
            "Pengadaan",
            &[
                "Procurement processes and procedures",
                "Vendor evaluation and selection",
                "Cost analysis and budgeting",
                "Compliance and ethics in procurement",
            ],
        ),
        // Audit
        program(
            "AD-2024-701",
            "Internal Audit & Risk Management Leadership",
            "Audit Internal & Manajemen Risiko",
            "audit",
            "Manager",
            6,
            9_500_000,
            "Audit",
            &[
                "Advanced internal auditing techniques",
                "Enterprise risk management",
                "Audit leadership and team management",
                "Regulatory compliance frameworks",
                "Fraud detection and prevention",
            ],
        ),
        program(
            "AD-2024-702",
            "Risk Assessment & Control Systems",
            "Audit Internal dan Manajemen Risiko",
            "audit",
            "ALL",
            4,
            6_000_000,
            "Audit",
            &[
                "Risk identification and assessment",
                "Internal control evaluation",
                "Audit documentation and reporting",
                "Technology-assisted audit techniques",
            ],
        ),
        // Legal
        program(
            "LG-2024-801",
            "Corporate Law & Regulatory Compliance",
            "Hukum",
            "legal",
            "ALL",
            5,
            7_500_000,
            "Hukum",
            &[
                "Corporate governance principles",
                "Regulatory compliance management",
                "Contract law and negotiations",
                "Employment law and regulations",
                "Business ethics and compliance",
            ],
        ),
        // Strategy & transformation
        program(
            "ST-2024-901",
            "Strategic Transformation & Change Management",
            "Transformasi Strategis",
            "strategy",
            "Manager",
            7,
            12_000_000,
            "Strategi",
            &[
                "Strategic planning and execution",
                "Change management methodologies",
                "Digital transformation strategies",
                "Innovation management",
                "Organizational development",
            ],
        ),
        program(
            "ST-2024-902",
            "Marketing Strategy & Customer Excellence",
            "Strategi Pemasaran",
            "marketing",
            "ALL",
            4,
            6_500_000,
            "Pemasaran",
            &[
                "Market analysis and segmentation",
                "Customer relationship management",
                "Brand management and positioning",
                "Digital marketing strategies",
            ],
        ),
        // General management
        program(
            "GM-2024-001",
            "Executive Leadership Development Program",
            "Strategi SDM",
            "ALL",
            "Senior Manager",
            10,
            15_000_000,
            "Umum",
            &[
                "Executive leadership skills",
                "Strategic thinking and planning",
                "Organizational transformation",
                "High-performance team building",
                "Stakeholder management",
                "Innovation and change leadership",
            ],
        ),
    ]
}

fn to_map(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(key, schools)| {
            (
                key.to_string(),
                schools.iter().map(|s| s.to_string()).collect(),
            )
        })
        .collect()
}

/// The default catalog: 19 programs across 11 target divisions.
pub fn builtin() -> Result<Catalog, CatalogError> {
    let competencies: CompetencyTrainingMap = to_map(COMPETENCY_TRAININGS);
    let divisions: DivisionMap = to_map(DIVISION_SCHOOLS);
    Catalog::new(competencies, divisions, programs())
}
