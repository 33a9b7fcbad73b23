//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Running `ctxlint` without a
//! subcommand is the same as `ctxlint lint`.

pub mod completions;
pub mod dispatcher;
pub mod fix;
pub mod init;
pub mod lint;
pub mod schema;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
