//! Schema command implementation.
//!
//! The `ctxlint schema` command prints the JSON Schema of the sidecar
//! configuration file, for editor integration.

use crate::config::config_schema;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
#[derive(Debug, Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = serde_json::to_string_pretty(&config_schema()).map_err(anyhow::Error::from)?;
        ui.output(&format!("{}\n", schema));
        Ok(CommandResult::success())
    }
}
