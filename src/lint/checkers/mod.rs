//! Built-in checkers.
//!
//! Each checker lives in its own module and is registered, in a fixed order,
//! by [`CheckerRegistry::with_builtins`](super::CheckerRegistry::with_builtins).

mod dependencies;
mod filesystem;
mod frameworks;
mod scripts;
mod structure;

pub use dependencies::{DependenciesChecker, DEPRECATED_PACKAGES, GENERIC_NAMES};
pub use filesystem::{FilesystemChecker, CONVENTIONAL_DIRS};
pub use frameworks::{FrameworksChecker, StalePattern, STALE_PATTERNS};
pub use scripts::{ScriptsChecker, CANONICAL_TEST_SCRIPTS};
pub use structure::{RecommendedSection, StructureChecker, RECOMMENDED_SECTIONS};
