//! Lint reports.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::result::CheckResult;
use super::rule::Severity;
use super::score::{score, severity_counts, Grade};

/// The outcome of linting one document. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Document path, relative to the repository root.
    pub file: String,
    pub score: u8,
    pub grade: Grade,
    pub total_issues: usize,
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    pub timestamp: DateTime<Utc>,
    pub results: Vec<CheckResult>,
}

impl Report {
    /// Build a report, computing score and counts from `results`.
    pub fn new(file: impl Into<String>, results: Vec<CheckResult>) -> Self {
        let score = score(&results);
        let (errors, warnings, infos) = severity_counts(&results);
        Self {
            file: file.into(),
            score,
            grade: Grade::from_score(score),
            total_issues: errors + warnings + infos,
            errors,
            warnings,
            infos,
            timestamp: Utc::now(),
            results,
        }
    }

    /// Whether any issue has at least `severity`.
    pub fn has_issues_at_least(&self, severity: Severity) -> bool {
        self.results
            .iter()
            .flat_map(|r| &r.issues)
            .any(|issue| issue.severity >= severity)
    }
}

/// The outcome of linting every document in a repository.
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceReport {
    /// Score over every document's results plus the cross-document result.
    pub score: u8,
    pub grade: Grade,
    pub documents: Vec<Report>,
    pub cross_document: CheckResult,
}

impl WorkspaceReport {
    pub fn new(documents: Vec<Report>, cross_document: CheckResult) -> Self {
        let all: Vec<CheckResult> = documents
            .iter()
            .flat_map(|d| d.results.iter().cloned())
            .chain(std::iter::once(cross_document.clone()))
            .collect();
        let score = score(&all);
        Self {
            score,
            grade: Grade::from_score(score),
            documents,
            cross_document,
        }
    }

    /// A workspace holding exactly one document.
    pub fn single(report: Report) -> Self {
        Self::new(vec![report], CheckResult::new(super::cross::CROSS_DOCUMENT_CHECKER))
    }

    /// Whether any document or the cross-document check has at least `severity`.
    pub fn has_issues_at_least(&self, severity: Severity) -> bool {
        self.documents
            .iter()
            .any(|d| d.has_issues_at_least(severity))
            || self
                .cross_document
                .issues
                .iter()
                .any(|issue| issue.severity >= severity)
    }
}
