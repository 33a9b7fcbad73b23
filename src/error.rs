//! Error types for ctxlint operations.
//!
//! This module defines [`CtxlintError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Findings are never errors: every validator problem is an [`Issue`](crate::lint::Issue)
//! - Malformed manifests and configuration degrade to defaults and never surface here
//! - `CtxlintError` covers boundary failures (no document, unreadable target,
//!   failed remediation write) plus wrapped I/O and `anyhow` errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ctxlint operations.
#[derive(Debug, Error)]
pub enum CtxlintError {
    /// No recognized context document exists under the repository root.
    #[error("No context document found in {}", root.display())]
    NoContextDocument { root: PathBuf },

    /// The target document could not be read (e.g. it vanished after discovery).
    #[error("Failed to read {}: {message}", path.display())]
    DocumentRead { path: PathBuf, message: String },

    /// The remediation session could not write its result.
    #[error("Failed to write {}: {message}", path.display())]
    WriteFailed { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CtxlintError {
    /// Whether this error is a fatal boundary condition (exit status 2).
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::NoContextDocument { .. } | Self::DocumentRead { .. }
        )
    }

    /// Remediation hint shown alongside the error, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NoContextDocument { .. } => {
                Some("Create one with `ctxlint init`, or pass --file <PATH>.")
            }
            Self::DocumentRead { .. } => Some("Check that the file still exists and is readable."),
            Self::WriteFailed { .. } => Some("The document was left unchanged."),
            _ => None,
        }
    }
}

/// Result type alias for ctxlint operations.
pub type Result<T> = std::result::Result<T, CtxlintError>;
