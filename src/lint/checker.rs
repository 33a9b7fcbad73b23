//! Checker definitions.
//!
//! A [`Checker`] is one independent validator. It reads a
//! [`ParsedDocument`] plus repository ground truth from a [`CheckContext`]
//! and always returns a [`CheckResult`], even when nothing applies.

use std::path::Path;

use super::result::CheckResult;
use crate::config::Config;
use crate::extract::ParsedDocument;
use crate::manifest::ProjectManifest;

/// Ground truth shared by every checker in one lint pass.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    /// Repository root.
    pub root: &'a Path,
    /// Loaded (or default) configuration.
    pub config: &'a Config,
    /// Root manifest plus workspace packages.
    pub manifest: &'a ProjectManifest,
}

impl<'a> CheckContext<'a> {
    /// Create a context.
    pub fn new(root: &'a Path, config: &'a Config, manifest: &'a ProjectManifest) -> Self {
        Self {
            root,
            config,
            manifest,
        }
    }
}

/// A stateless validator.
pub trait Checker: Send + Sync {
    /// Stable checker name, reported in [`CheckResult::checker`].
    fn name(&self) -> &'static str;

    /// Description of what this checker verifies.
    fn description(&self) -> &'static str;

    /// Check the document. Must not panic on missing or malformed ground truth.
    fn check(&self, doc: &ParsedDocument, ctx: &CheckContext<'_>) -> CheckResult;
}
