// SPDX-License-Identifier: PMPL-1.0-or-later

//! Data-quality checks run before a catalog is accepted.

use crate::types::Project;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// One defect found in catalog data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("project #{index} has an empty id")]
    EmptyId { index: usize },

    #[error("duplicate project id '{id}'")]
    DuplicateId { id: String },

    #[error("project '{id}': required field '{field}' is empty")]
    EmptyField { id: String, field: &'static str },

    #[error("project '{id}': {field} '{value}' is not a YYYY-MM period")]
    MalformedPeriod {
        id: String,
        field: &'static str,
        value: String,
    },

    #[error("project '{id}': endPeriod {end} precedes startPeriod {start}")]
    PeriodOutOfOrder {
        id: String,
        start: String,
        end: String,
    },
}

fn period_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$").expect("static period regex"))
}

pub fn is_well_formed_period(value: &str) -> bool {
    period_pattern().is_match(value)
}

/// Check every record and return all issues, in catalog order.
pub fn validate(projects: &[Project]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for (index, project) in projects.iter().enumerate() {
        let id = project.id.trim();
        if id.is_empty() {
            issues.push(ValidationIssue::EmptyId { index });
        } else if !seen.insert(id) {
            issues.push(ValidationIssue::DuplicateId { id: id.to_string() });
        }

        for (field, value) in [
            ("title", &project.title),
            ("summary", &project.summary),
            ("body", &project.body),
        ] {
            if value.trim().is_empty() {
                issues.push(ValidationIssue::EmptyField {
                    id: project.id.clone(),
                    field,
                });
            }
        }

        let mut periods_ok = true;
        for (field, value) in [
            ("startPeriod", &project.start_period),
            ("endPeriod", &project.end_period),
        ] {
            if !is_well_formed_period(value) {
                periods_ok = false;
                issues.push(ValidationIssue::MalformedPeriod {
                    id: project.id.clone(),
                    field,
                    value: value.clone(),
                });
            }
        }

        // YYYY-MM compares chronologically as a string
        if periods_ok && project.end_period < project.start_period {
            issues.push(ValidationIssue::PeriodOutOfOrder {
                id: project.id.clone(),
                start: project.start_period.clone(),
                end: project.end_period.clone(),
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn project(id: &str, start: &str, end: &str) -> Project {
        Project {
            id: id.to_string(),
            title: "t".to_string(),
            title_alt: None,
            summary: "s".to_string(),
            summary_alt: None,
            body: "b".to_string(),
            body_alt: None,
            start_period: start.to_string(),
            end_period: end.to_string(),
            technologies: vec!["Rust".to_string()],
            category: Category::Web,
            external_url: None,
            video_url: None,
            case_study_url: None,
            embed_url: None,
            embed_fallback_url: None,
        }
    }

    #[test]
    fn clean_data_has_no_issues() {
        let data = vec![project("a", "2025-01", "2025-03"), project("b", "2025-02", "2025-02")];
        assert!(validate(&data).is_empty());
    }

    #[test]
    fn period_shape() {
        assert!(is_well_formed_period("2025-09"));
        assert!(!is_well_formed_period("2025-9"));
        assert!(!is_well_formed_period("2025-00"));
        assert!(!is_well_formed_period("2025-13"));
        assert!(!is_well_formed_period("09/2025"));
        assert!(!is_well_formed_period(" 2025-09"));
    }

    #[test]
    fn reports_duplicates_and_bad_periods() {
        let data = vec![
            project("a", "2025-01", "2025-02"),
            project("a", "2025-05", "2025-04"),
            project("c", "2025-1", "2025-02"),
        ];
        let issues = validate(&data);
        assert_eq!(
            issues,
            vec![
                ValidationIssue::DuplicateId { id: "a".to_string() },
                ValidationIssue::PeriodOutOfOrder {
                    id: "a".to_string(),
                    start: "2025-05".to_string(),
                    end: "2025-04".to_string(),
                },
                ValidationIssue::MalformedPeriod {
                    id: "c".to_string(),
                    field: "startPeriod",
                    value: "2025-1".to_string(),
                },
            ]
        );
    }

    #[test]
    fn reports_empty_required_text() {
        let mut p = project("x", "2025-01", "2025-01");
        p.summary = "  ".to_string();
        let mut unnamed = project("", "2025-01", "2025-01");
        unnamed.title = String::new();
        let issues = validate(&[p, unnamed]);
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[1], ValidationIssue::EmptyId { index: 1 });
        assert!(issues[0].to_string().contains("'summary'"));
    }
}
