//! Init command implementation.
//!
//! The `ctxlint init` command scaffolds a context document from the
//! project manifest.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::discovery::ContextDocument;
use crate::error::Result;
use crate::fix::write_atomic;
use crate::manifest::ProjectManifest;
use crate::templates::scaffold;
use crate::ui::{Prompt, PromptType, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Document created when `--name` is not given.
pub const DEFAULT_DOCUMENT: &str = "CLAUDE.md";

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project_root: &Path, args: InitArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn target(&self) -> ContextDocument {
        let name = self
            .args
            .name
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCUMENT));
        ContextDocument::from_path(&self.project_root, &name)
    }

    /// Whether an existing document may be replaced.
    fn may_overwrite(&self, ui: &mut dyn UserInterface, label: &str) -> Result<bool> {
        if self.args.force {
            return Ok(true);
        }
        if !ui.is_interactive() {
            return Ok(false);
        }

        let prompt = Prompt::new(
            "overwrite",
            format!("{} already exists. Overwrite it?", label),
            PromptType::Confirm,
        )
        .with_default("no");
        Ok(ui.prompt(&prompt)?.as_bool().unwrap_or(false))
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let target = self.target();

        if target.path.exists() && !self.may_overwrite(ui, &target.label)? {
            ui.warning(&format!(
                "{} already exists. Use --force to overwrite.",
                target.label
            ));
            return Ok(CommandResult::failure(1));
        }

        let manifest = ProjectManifest::load(&self.project_root);
        if !manifest.exists() {
            ui.warning("No package.json found; the document will need manual editing.");
        }
        let content = scaffold(&self.project_root, &manifest);

        if let Some(parent) = target.path.parent() {
            fs::create_dir_all(parent)?;
        }
        write_atomic(&target.path, &content)?;

        ui.success(&format!("Created {}", target.label));
        ui.message("\nNext steps:");
        ui.message(&format!("  1. Review {} and describe the project", target.label));
        ui.message("  2. Run `ctxlint lint` to check it against the repository");

        Ok(CommandResult::success())
    }
}
