//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::lint::OutputFormat;

/// ctxlint - keep agent context documents in sync with the repository.
#[derive(Debug, Parser)]
#[command(name = "ctxlint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check context documents against the repository (default)
    Lint(LintArgs),

    /// Walk through findings and apply accepted fixes
    Fix(FixArgs),

    /// Scaffold a context document from the project manifest
    Init(InitArgs),

    /// Print the JSON Schema of the configuration file
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `lint` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LintArgs {
    /// Lint this document instead of the discovered one
    #[arg(short, long, conflicts_with = "all")]
    pub file: Option<PathBuf>,

    /// Lint every discovered document and check them against each other
    #[arg(long)]
    pub all: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Treat warnings as failures
    #[arg(long)]
    pub strict: bool,

    /// Fail when the score is below this value
    #[arg(long, value_name = "SCORE", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub fail_under: Option<u8>,
}

/// Arguments for the `fix` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FixArgs {
    /// Fix this document instead of the discovered one
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Pre-supplied decisions, consumed in order (e.g. y,n,q)
    #[arg(long, value_delimiter = ',', value_name = "LIST")]
    pub answers: Option<Vec<String>>,

    /// Print the resulting document instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// File to create, relative to the project root
    #[arg(long, value_name = "FILE")]
    pub name: Option<PathBuf>,

    /// Overwrite an existing document
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
