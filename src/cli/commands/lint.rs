//! Lint command implementation.
//!
//! The `ctxlint lint` command checks context documents against the
//! repository and renders a report.

use std::path::{Path, PathBuf};

use crate::cli::args::LintArgs;
use crate::discovery::{discover_first, discover_required, ContextDocument};
use crate::error::Result;
use crate::lint::{
    HumanFormatter, JsonFormatter, LintFormatter, Linter, OutputFormat, Severity, WorkspaceReport,
};
use crate::ui::{should_use_colors, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The lint command implementation.
pub struct LintCommand {
    project_root: PathBuf,
    args: LintArgs,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(project_root: &Path, args: LintArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &LintArgs {
        &self.args
    }

    fn documents(&self) -> Result<Vec<ContextDocument>> {
        if let Some(ref file) = self.args.file {
            return Ok(vec![ContextDocument::from_path(&self.project_root, file)]);
        }
        if self.args.all {
            return discover_required(&self.project_root);
        }
        Ok(vec![discover_first(&self.project_root)?])
    }

    /// Format the report using the requested formatter.
    fn format_output(&self, report: &WorkspaceReport) -> Result<String> {
        let mut output = Vec::new();

        match self.args.format {
            OutputFormat::Json => JsonFormatter::new().format(report, &mut output)?,
            OutputFormat::Human => {
                HumanFormatter::new(should_use_colors()).format(report, &mut output)?
            }
        }

        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    /// Why the report fails the run, if it does.
    fn failure_reason(&self, report: &WorkspaceReport, fail_under: Option<u8>) -> Option<String> {
        if report.has_issues_at_least(Severity::Error) {
            return Some("error-severity issues found".to_string());
        }
        if self.args.strict && report.has_issues_at_least(Severity::Warn) {
            return Some("warnings found in strict mode".to_string());
        }
        match fail_under {
            Some(threshold) if report.score < threshold => Some(format!(
                "score {} is below the threshold of {}",
                report.score, threshold
            )),
            _ => None,
        }
    }
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let linter = Linter::new(&self.project_root);
        let documents = self.documents()?;

        let report = linter.lint_documents(&documents)?;
        ui.output(&self.format_output(&report)?);

        let fail_under = self.args.fail_under.or(linter.config().fail_under);
        match self.failure_reason(&report, fail_under) {
            Some(reason) => {
                tracing::debug!("Lint failed: {}", reason);
                if self.args.format == OutputFormat::Human {
                    ui.error(&format!("Lint failed: {}", reason));
                }
                Ok(CommandResult::failure(1))
            }
            None => Ok(CommandResult::success()),
        }
    }
}
