//! Human-readable output formatter.
//!
//! Formats reports for terminal display with optional color support.

use super::LintFormatter;
use crate::lint::{CheckResult, Issue, Report, Severity, WorkspaceReport};
use crate::ui::theme::CtxlintTheme;
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    theme: CtxlintTheme,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self {
            theme: CtxlintTheme::for_colors(use_color),
        }
    }

    fn write_issue<W: Write>(
        &self,
        writer: &mut W,
        issue: &Issue,
        file: Option<&str>,
    ) -> std::io::Result<()> {
        // Header line: error[rule-id]: message
        writeln!(
            writer,
            "{}: {}",
            self.theme
                .severity(issue.severity)
                .apply_to(format!("{}[{}]", issue.severity, issue.rule)),
            issue.message
        )?;

        if let Some(file) = file {
            let location = match issue.line {
                Some(line) => format!("{}:{}", file, line),
                None => file.to_string(),
            };
            writeln!(writer, "  {} {}", self.theme.location.apply_to("-->"), location)?;
        }

        if let Some(ref context) = issue.context {
            writeln!(writer, "   {} {}", self.theme.location.apply_to("|"), context)?;
        }

        if let Some(ref suggestion) = issue.suggestion {
            writeln!(writer, "   = {} {}", self.theme.hint.apply_to("help:"), suggestion)?;
        }

        writeln!(writer)
    }

    fn write_suppressed<W: Write>(
        &self,
        writer: &mut W,
        result: &CheckResult,
    ) -> std::io::Result<()> {
        if result.suppressed > 0 {
            writeln!(
                writer,
                "{}",
                self.theme.dim.apply_to(format!(
                    "... {} more {} finding(s) suppressed",
                    result.suppressed, result.checker
                ))
            )?;
            writeln!(writer)?;
        }
        Ok(())
    }

    fn write_document<W: Write>(&self, writer: &mut W, report: &Report) -> std::io::Result<()> {
        writeln!(
            writer,
            "{}  score {}",
            self.theme.format_header(&report.file),
            self.theme
                .grade(report.grade)
                .apply_to(format!("{} ({})", report.score, report.grade))
        )?;
        writeln!(writer)?;

        for result in &report.results {
            for issue in &result.issues {
                self.write_issue(writer, issue, Some(&report.file))?;
            }
            self.write_suppressed(writer, result)?;
        }

        if report.total_issues == 0 {
            writeln!(writer, "{}", self.theme.format_success("No issues found"))?;
        } else {
            writeln!(
                writer,
                "Found {} error(s), {} warning(s) and {} info(s)",
                report.errors, report.warnings, report.infos
            )?;
        }
        writeln!(writer)
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &WorkspaceReport, writer: &mut W) -> std::io::Result<()> {
        for document in &report.documents {
            self.write_document(writer, document)?;
        }

        if report.documents.len() < 2 {
            return Ok(());
        }

        let cross = &report.cross_document;
        writeln!(writer, "{}", self.theme.format_header("Cross-document consistency"))?;
        writeln!(writer)?;
        for issue in &cross.issues {
            self.write_issue(writer, issue, None)?;
        }
        self.write_suppressed(writer, cross)?;
        if cross.issues.is_empty() {
            writeln!(writer, "{}", self.theme.format_success("Documents agree"))?;
            writeln!(writer)?;
        }

        let errors = cross.count(Severity::Error)
            + report.documents.iter().map(|d| d.errors).sum::<usize>();
        writeln!(
            writer,
            "Workspace score {} across {} documents ({} error(s))",
            self.theme
                .grade(report.grade)
                .apply_to(format!("{} ({})", report.score, report.grade)),
            report.documents.len(),
            errors
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::CheckResult;

    fn format(report: &WorkspaceReport) -> String {
        let mut output = Vec::new();
        HumanFormatter::new(false).format(report, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn single(issues: Vec<Issue>) -> WorkspaceReport {
        let mut result = CheckResult::new("filesystem");
        for issue in issues {
            result.fail(issue);
        }
        WorkspaceReport::single(Report::new("CLAUDE.md", vec![result]))
    }

    #[test]
    fn formats_issue_block() {
        let output = format(&single(vec![Issue::new(
            "missing-path",
            Severity::Error,
            "Referenced path `./src/x` does not exist",
        )
        .with_line(3)
        .with_context("See `./src/x`.")
        .with_suggestion("Update the path")]));

        assert!(output.contains("error[missing-path]: Referenced path"));
        assert!(output.contains("--> CLAUDE.md:3"));
        assert!(output.contains("| See `./src/x`."));
        assert!(output.contains("= help: Update the path"));
        assert!(output.contains("Found 1 error(s), 0 warning(s) and 0 info(s)"));
    }

    #[test]
    fn formats_unlocated_issue() {
        let output = format(&single(vec![Issue::new(
            "no-test-script",
            Severity::Warn,
            "No test script",
        )]));

        assert!(output.contains("warn[no-test-script]"));
        assert!(output.contains("--> CLAUDE.md\n"));
    }

    #[test]
    fn clean_document() {
        let output = format(&single(vec![]));

        assert!(output.contains("CLAUDE.md  score 100 (A)"));
        assert!(output.contains("No issues found"));
        assert!(!output.contains("Cross-document"));
    }

    #[test]
    fn workspace_includes_cross_document_section() {
        let mut cross = CheckResult::new("cross-document");
        cross.fail(Issue::new(
            "package-manager-conflict",
            Severity::Error,
            "Documents disagree on the package manager: CLAUDE.md → pnpm, AGENTS.md → npm",
        ));
        cross.suppressed = 2;
        let workspace = WorkspaceReport::new(
            vec![
                Report::new("CLAUDE.md", vec![]),
                Report::new("AGENTS.md", vec![]),
            ],
            cross,
        );

        let output = format(&workspace);

        assert!(output.contains("Cross-document consistency"));
        assert!(output.contains("error[package-manager-conflict]"));
        assert!(output.contains("2 more cross-document finding(s) suppressed"));
        assert!(output.contains("across 2 documents (1 error(s))"));
    }
}
