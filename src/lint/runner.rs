//! Lint orchestration.
//!
//! A [`Linter`] loads configuration and manifest facts once per repository,
//! then runs extraction, every registered checker, severity overrides and
//! scoring for each document. Documents are linted in parallel; the
//! cross-document check runs after all of them complete.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use super::checker::CheckContext;
use super::cross::{check_cross, LabeledDocument};
use super::registry::CheckerRegistry;
use super::report::{Report, WorkspaceReport};
use crate::config::{load_config, Config};
use crate::discovery::ContextDocument;
use crate::error::{CtxlintError, Result};
use crate::extract::{extract, ParsedDocument};
use crate::manifest::ProjectManifest;

/// One linted document.
#[derive(Debug, Clone)]
pub struct LintedDocument {
    pub document: ContextDocument,
    pub parsed: ParsedDocument,
    pub report: Report,
}

/// Runs lint passes against one repository.
pub struct Linter {
    root: PathBuf,
    config: Config,
    manifest: ProjectManifest,
    registry: CheckerRegistry,
}

impl Linter {
    /// Create a linter for `root`, loading its configuration and manifest.
    pub fn new(root: &Path) -> Self {
        Self::with_config(root, load_config(root))
    }

    /// Create a linter with an explicit configuration.
    pub fn with_config(root: &Path, config: Config) -> Self {
        Self {
            root: root.to_path_buf(),
            manifest: ProjectManifest::load(root),
            config,
            registry: CheckerRegistry::with_builtins(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn manifest(&self) -> &ProjectManifest {
        &self.manifest
    }

    /// Lint text that is already in memory.
    pub fn lint_text(&self, label: &str, text: &str) -> (ParsedDocument, Report) {
        let parsed = extract(text);
        let ctx = CheckContext::new(&self.root, &self.config, &self.manifest);

        let results = self
            .registry
            .run_all(&parsed, &ctx)
            .into_iter()
            .map(|result| result.apply_overrides(&self.config))
            .collect();

        let report = Report::new(label, results);
        debug!(
            "Linted {}: score {} with {} issue(s)",
            label, report.score, report.total_issues
        );
        (parsed, report)
    }

    /// Read and lint one document.
    pub fn lint_document(&self, document: &ContextDocument) -> Result<LintedDocument> {
        let text =
            fs::read_to_string(&document.path).map_err(|e| CtxlintError::DocumentRead {
                path: document.path.clone(),
                message: e.to_string(),
            })?;

        let (parsed, report) = self.lint_text(&document.label, &text);
        Ok(LintedDocument {
            document: document.clone(),
            parsed,
            report,
        })
    }

    /// Lint several documents concurrently, then check them against each other.
    pub fn lint_documents(&self, documents: &[ContextDocument]) -> Result<WorkspaceReport> {
        let linted = documents
            .par_iter()
            .map(|document| self.lint_document(document))
            .collect::<Result<Vec<_>>>()?;

        let labeled: Vec<LabeledDocument<'_>> = linted
            .iter()
            .map(|l| LabeledDocument::new(&l.document.label, &l.parsed))
            .collect();
        let cross = check_cross(&labeled).apply_overrides(&self.config);
        debug!(
            "Cross-document check over {} document(s): {} issue(s)",
            linted.len(),
            cross.issues.len()
        );

        let reports = linted.into_iter().map(|l| l.report).collect();
        Ok(WorkspaceReport::new(reports, cross))
    }
}
