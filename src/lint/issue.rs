//! Findings produced by checkers.
//!
//! This module provides the [`Issue`] type: one concrete problem with a
//! severity, a message, and optional location, context and suggestion.

use serde::Serialize;

use super::rule::{RuleId, Severity};
use crate::extract::ParsedDocument;

/// One finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// The rule that produced this issue.
    pub rule: RuleId,
    /// Severity of this issue.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// 1-based line in the document, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Verbatim source line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Remediation text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Issue {
    /// Create a new issue.
    pub fn new(rule: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule: RuleId::new(rule),
            severity,
            message: message.into(),
            line: None,
            context: None,
            suggestion: None,
        }
    }

    /// Attach a 1-based line number.
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Attach the verbatim source line.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach a line and its text from `doc`. `None` leaves the issue unlocated.
    pub fn located(mut self, doc: &ParsedDocument, line: Option<usize>) -> Self {
        if let Some(line) = line {
            self.line = Some(line);
            self.context = doc.line_text(line).map(str::to_string);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract;

    #[test]
    fn issue_creation() {
        let issue = Issue::new("missing-path", Severity::Error, "Path is gone");

        assert_eq!(issue.rule, RuleId::new("missing-path"));
        assert_eq!(issue.severity, Severity::Error);
        assert_eq!(issue.message, "Path is gone");
        assert!(issue.line.is_none());
        assert!(issue.context.is_none());
        assert!(issue.suggestion.is_none());
    }

    #[test]
    fn issue_builder_pattern() {
        let issue = Issue::new("missing-script", Severity::Warn, "No such script")
            .with_line(4)
            .with_context("npm run nope")
            .with_suggestion("Available scripts: build");

        assert_eq!(issue.line, Some(4));
        assert_eq!(issue.context.as_deref(), Some("npm run nope"));
        assert_eq!(issue.suggestion.as_deref(), Some("Available scripts: build"));
    }

    #[test]
    fn located_copies_verbatim_line_text() {
        let doc = extract("# Title\n   see `./src/a`  \n");
        let issue = Issue::new("missing-path", Severity::Error, "gone").located(&doc, Some(2));

        assert_eq!(issue.line, Some(2));
        assert_eq!(issue.context.as_deref(), Some("   see `./src/a`  "));
    }

    #[test]
    fn located_without_line_is_noop() {
        let doc = extract("text");
        let issue = Issue::new("too-short", Severity::Warn, "short").located(&doc, None);
        assert!(issue.line.is_none());
        assert!(issue.context.is_none());
    }

    #[test]
    fn serializes_without_empty_optionals() {
        let issue = Issue::new("too-long", Severity::Info, "long");
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["rule"], "too-long");
        assert_eq!(json["severity"], "info");
        assert!(json.get("line").is_none());
        assert!(json.get("suggestion").is_none());
    }
}
