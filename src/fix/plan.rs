//! Accepted edits and their application.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CtxlintError, Result};

/// Edits accepted during one remediation session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixPlan {
    /// 1-based line numbers to delete.
    pub removals: BTreeSet<usize>,
    /// Section texts to append, in acceptance order.
    pub sections: Vec<String>,
}

impl FixPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nothing was accepted.
    pub fn is_empty(&self) -> bool {
        self.removals.is_empty() && self.sections.is_empty()
    }

    /// Number of distinct edits.
    pub fn len(&self) -> usize {
        self.removals.len() + self.sections.len()
    }

    /// Produce the edited document.
    ///
    /// Lines are removed from the highest number down, then sections are
    /// appended, each separated from the preceding text by a blank line.
    /// The document's own line terminator is kept for every line.
    pub fn apply(&self, content: &str) -> String {
        let eol = line_terminator(content);
        let mut lines: Vec<&str> = content.lines().collect();
        for &line in self.removals.iter().rev() {
            if (1..=lines.len()).contains(&line) {
                lines.remove(line - 1);
            }
        }

        let mut out = lines.join(eol);
        if !out.is_empty() && content.ends_with('\n') {
            out.push_str(eol);
        }

        for section in &self.sections {
            if !out.is_empty() {
                if !out.ends_with('\n') {
                    out.push_str(eol);
                }
                out.push_str(eol);
            }
            let body: Vec<&str> = section.trim_end().lines().collect();
            out.push_str(&body.join(eol));
            out.push_str(eol);
        }

        out
    }
}

/// `\r\n` when the document uses it, `\n` otherwise.
fn line_terminator(content: &str) -> &'static str {
    if content.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".ctxlint.tmp");
    path.with_file_name(name)
}

/// Replace `path` with `content` in a single rename.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let temp = temp_path(path);
    let failed = |e: std::io::Error| CtxlintError::WriteFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    fs::write(&temp, content).map_err(failed)?;
    if let Err(e) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(failed(e));
    }

    tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
