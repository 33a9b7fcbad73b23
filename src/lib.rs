//! ctxlint - freshness linter for agent context documents.
//!
//! Context documents (`CLAUDE.md`, `AGENTS.md`, `.cursorrules`, ...) tell
//! coding agents how a repository is laid out and which commands to run.
//! ctxlint extracts the claims such a document makes, checks each one against
//! the repository, scores the result, and can walk the findings
//! interactively to fix them.
//!
//! # Modules
//!
//! - [`extract`] - Turns document text into sections and mentioned facts
//! - [`lint`] - Checkers, cross-document consistency, scoring and reports
//! - [`fix`] - Interactive remediation with deferred atomic writes
//! - [`discovery`] - Locating context documents in a repository
//! - [`manifest`] - Reading `package.json` and workspace packages
//! - [`detection`] - Package-manager and framework families
//! - [`config`] - Sidecar configuration loading and schema
//! - [`templates`] - Section templates and the `init` scaffold
//! - [`ui`] - Prompts and terminal output
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use ctxlint::lint::{Linter, Grade};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let linter = Linter::new(temp.path());
//! let (_, report) = linter.lint_text("CLAUDE.md", "# Notes\n\nSee `./src/missing.ts`.\n");
//!
//! assert!(report.errors >= 1);
//! assert!(report.grade > Grade::A);
//! ```
//!
//! For end-to-end runs of the binary, see the integration tests.

pub mod cli;
pub mod config;
pub mod detection;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod fix;
pub mod lint;
pub mod manifest;
pub mod templates;
pub mod ui;

pub use error::{CtxlintError, Result};
