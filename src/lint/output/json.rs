//! JSON output formatter.
//!
//! A single-document workspace is written as its [`Report`](crate::lint::Report)
//! so the common case stays flat; several documents are written as the full
//! [`WorkspaceReport`].

use super::LintFormatter;
use crate::lint::WorkspaceReport;
use std::io::Write;

/// Formats lint output as JSON.
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &WorkspaceReport, writer: &mut W) -> std::io::Result<()> {
        let written = match report.documents.as_slice() {
            [only] if report.cross_document.issues.is_empty() => {
                serde_json::to_writer_pretty(&mut *writer, only)
            }
            _ => serde_json::to_writer_pretty(&mut *writer, report),
        };
        written.map_err(std::io::Error::other)?;

        writeln!(writer)
    }
}
