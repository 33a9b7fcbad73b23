//! Context document linting.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Checkers** - Independent validators ([`Checker`] trait)
//! - **Registry** - The ordered set of checkers for a pass ([`CheckerRegistry`])
//! - **Issues** - Findings with severity and suggestions ([`Issue`])
//! - **Cross-document checks** - Agreement between several documents ([`check_cross`])
//! - **Scoring** - A 0-100 freshness score and letter grade ([`score`], [`Grade`])
//! - **Runner** - Orchestrates extraction, checking and scoring ([`Linter`])
//!
//! # Example
//!
//! ```
//! use ctxlint::lint::{score, CheckResult, Issue, Severity};
//!
//! let mut result = CheckResult::new("filesystem");
//! result.pass();
//! result.pass();
//! result.fail(Issue::new("missing-path", Severity::Error, "gone"));
//!
//! // 2 of 3 checks passed, minus 15 for the error
//! assert_eq!(score(&[result]), 52);
//! ```

pub mod checker;
pub mod checkers;
pub mod cross;
pub mod issue;
pub mod output;
pub mod registry;
pub mod report;
pub mod result;
pub mod rule;
pub mod runner;
pub mod score;

pub use checker::{CheckContext, Checker};
pub use cross::{check_cross, LabeledDocument, MAX_ONE_SIDED_PATH_ISSUES};
pub use issue::Issue;
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use registry::CheckerRegistry;
pub use report::{Report, WorkspaceReport};
pub use result::CheckResult;
pub use rule::{RuleId, Severity};
pub use runner::{LintedDocument, Linter};
pub use score::{score, Grade};
