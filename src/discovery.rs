//! Context document discovery.
//!
//! Candidate file names are matched case-insensitively against the real
//! directory entries, so `claude.md` is found as `CLAUDE.md` on every
//! filesystem and reported under its on-disk spelling.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CtxlintError, Result};

/// Recognized context documents, in priority order.
pub const CANDIDATES: &[&str] = &[
    "CLAUDE.md",
    "AGENTS.md",
    "CLAUDE.local.md",
    ".claude/CLAUDE.md",
    "GEMINI.md",
    ".cursorrules",
    ".github/copilot-instructions.md",
    ".windsurfrules",
];

/// A discovered context document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextDocument {
    /// Absolute or root-joined path.
    pub path: PathBuf,
    /// Path relative to the repository root, `/`-separated.
    pub label: String,
}

impl ContextDocument {
    /// A document given explicitly by the user.
    pub fn from_path(root: &Path, file: &Path) -> Self {
        let path = if file.is_absolute() {
            file.to_path_buf()
        } else {
            root.join(file)
        };
        let label = path
            .strip_prefix(root)
            .unwrap_or(file)
            .to_string_lossy()
            .replace('\\', "/");
        Self { path, label }
    }
}

/// Every recognized document under `root`, in priority order.
pub fn discover_all(root: &Path) -> Vec<ContextDocument> {
    let mut seen = BTreeSet::new();
    let mut found = Vec::new();

    for candidate in CANDIDATES {
        let Some(label) = resolve_case_insensitive(root, candidate) else {
            continue;
        };
        if !seen.insert(label.to_lowercase()) {
            tracing::debug!("Skipping duplicate context document {}", label);
            continue;
        }
        found.push(ContextDocument {
            path: root.join(&label),
            label,
        });
    }

    tracing::debug!(
        "Discovered {} context document(s) under {}",
        found.len(),
        root.display()
    );
    found
}

/// The highest-priority document under `root`.
pub fn discover_first(root: &Path) -> Result<ContextDocument> {
    discover_all(root)
        .into_iter()
        .next()
        .ok_or_else(|| CtxlintError::NoContextDocument {
            root: root.to_path_buf(),
        })
}

/// Like [`discover_all`], but fails when nothing is found.
pub fn discover_required(root: &Path) -> Result<Vec<ContextDocument>> {
    let found = discover_all(root);
    if found.is_empty() {
        return Err(CtxlintError::NoContextDocument {
            root: root.to_path_buf(),
        });
    }
    Ok(found)
}

/// Walk `candidate` one component at a time, matching each against the
/// directory's entries ignoring ASCII case. Returns the on-disk relative path.
fn resolve_case_insensitive(root: &Path, candidate: &str) -> Option<String> {
    let mut current = root.to_path_buf();
    let mut parts = Vec::new();

    for component in candidate.split('/') {
        let mut names: Vec<String> = fs::read_dir(&current)
            .ok()?
            .flatten()
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.eq_ignore_ascii_case(component))
            .collect();
        names.sort();

        let name = match names.iter().position(|n| n == component) {
            Some(exact) => names.swap_remove(exact),
            None => names.into_iter().next()?,
        };
        current.push(&name);
        parts.push(name);
    }

    current.is_file().then(|| parts.join("/"))
}
