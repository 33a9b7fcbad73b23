//! Lint output formatters.
//!
//! This module provides formatters for reports in different formats
//! (human-readable, JSON). Both are pure functions of the report.

pub mod human;
pub mod json;

use crate::lint::WorkspaceReport;
use std::io::Write;

/// Output format for lint results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting lint output.
pub trait LintFormatter {
    /// Format a report to the given writer.
    fn format<W: Write>(&self, report: &WorkspaceReport, writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
