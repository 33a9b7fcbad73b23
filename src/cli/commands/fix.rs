//! Fix command implementation.
//!
//! The `ctxlint fix` command lints one document, walks its findings with the
//! user and writes the accepted edits back in a single atomic replacement.

use std::path::{Path, PathBuf};

use crate::cli::args::FixArgs;
use crate::discovery::{discover_first, ContextDocument};
use crate::error::Result;
use crate::fix::{write_atomic, AnswerSource, FixSession, PromptAnswers, ScriptedAnswers};
use crate::lint::Linter;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The fix command implementation.
pub struct FixCommand {
    project_root: PathBuf,
    args: FixArgs,
}

impl FixCommand {
    /// Create a new fix command.
    pub fn new(project_root: &Path, args: FixArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &FixArgs {
        &self.args
    }

    fn document(&self) -> Result<ContextDocument> {
        match self.args.file {
            Some(ref file) => Ok(ContextDocument::from_path(&self.project_root, file)),
            None => discover_first(&self.project_root),
        }
    }

    fn answer_source(&self) -> Box<dyn AnswerSource> {
        match self.args.answers {
            Some(ref answers) => Box::new(ScriptedAnswers::new(answers.iter().cloned())),
            None => Box::new(PromptAnswers::new()),
        }
    }
}

impl Command for FixCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let linter = Linter::new(&self.project_root);
        let document = self.document()?;
        let linted = linter.lint_document(&document)?;

        if linted.report.total_issues == 0 {
            ui.success(&format!("No issues to fix in {}", document.label));
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!(
            "{} issue(s) in {} (score {})",
            linted.report.total_issues, document.label, linted.report.score
        ));

        let mut answers = self.answer_source();
        let plan = FixSession::new(&linted.parsed).run(
            &linted.report.results,
            ui,
            answers.as_mut(),
        )?;

        if plan.is_empty() {
            ui.message(&format!(
                "No fixes accepted; {} left unchanged",
                document.label
            ));
            return Ok(CommandResult::success());
        }

        let content = plan.apply(&linted.parsed.raw_content);
        if self.args.dry_run {
            ui.output(&content);
            ui.message(&format!(
                "Dry run: {} edit(s) not written to {}",
                plan.len(),
                document.label
            ));
            return Ok(CommandResult::success());
        }

        write_atomic(&document.path, &content)?;
        ui.success(&format!(
            "Applied {} edit(s) to {}",
            plan.len(),
            document.label
        ));
        Ok(CommandResult::success())
    }
}
