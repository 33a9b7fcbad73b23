//! Configuration loading for ctxlint.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use ctxlint::config::{load_config, Config};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! // No sidecar file: defaults.
//! assert_eq!(load_config(temp.path()), Config::default());
//! ```
//!
//! # Configuration File Locations
//!
//! ctxlint reads the first existing file of:
//! 1. `.ctxlintrc.json`
//! 2. `ctxlint.config.json`

pub mod loader;
pub mod schema;

pub use loader::{config_schema, find_config_file, load_config, parse_config, CONFIG_FILE_NAMES};
pub use schema::{Config, RuleLevel};
