//! Per-checker results.

use serde::Serialize;

use super::issue::Issue;
use super::rule::Severity;
use crate::config::{Config, RuleLevel};

/// Output of one checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Checker name.
    pub checker: String,
    /// Issues in discovery order.
    pub issues: Vec<Issue>,
    pub passed: usize,
    pub failed: usize,
    /// Findings evaluated but not emitted because a reporting cap was hit.
    #[serde(skip_serializing_if = "is_zero")]
    pub suppressed: usize,
}

fn is_zero(v: &usize) -> bool {
    *v == 0
}

impl CheckResult {
    /// Create an empty result for a checker.
    pub fn new(checker: impl Into<String>) -> Self {
        Self {
            checker: checker.into(),
            issues: Vec::new(),
            passed: 0,
            failed: 0,
            suppressed: 0,
        }
    }

    /// Record a passing check.
    pub fn pass(&mut self) {
        self.passed += 1;
    }

    /// Record a failing check and its issue.
    pub fn fail(&mut self, issue: Issue) {
        self.failed += 1;
        self.issues.push(issue);
    }

    /// Total checks evaluated.
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Number of issues with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    /// Apply configured rule levels: re-grade issues, and turn `off` rules
    /// into passes.
    pub fn apply_overrides(mut self, config: &Config) -> Self {
        if config.rules.is_empty() {
            return self;
        }

        let mut kept = Vec::with_capacity(self.issues.len());
        for mut issue in self.issues.drain(..) {
            match config.rule_level(issue.rule.as_str()) {
                Some(RuleLevel::Off) => {
                    self.failed = self.failed.saturating_sub(1);
                    self.passed += 1;
                }
                Some(level) => {
                    if let Some(severity) = level.severity() {
                        issue.severity = severity;
                    }
                    kept.push(issue);
                }
                None => kept.push(issue),
            }
        }
        self.issues = kept;
        self
    }
}
