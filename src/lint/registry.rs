//! Checker registry.
//!
//! The [`CheckerRegistry`] holds the checkers for a lint pass. Order is
//! significant: results are reported in registration order.

use super::checker::{CheckContext, Checker};
use super::checkers::{
    DependenciesChecker, FilesystemChecker, FrameworksChecker, ScriptsChecker, StructureChecker,
};
use super::result::CheckResult;
use crate::extract::ParsedDocument;

/// Ordered collection of checkers.
pub struct CheckerRegistry {
    checkers: Vec<Box<dyn Checker>>,
}

impl CheckerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            checkers: Vec::new(),
        }
    }

    /// Create a registry with the five built-in checkers.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(FilesystemChecker));
        registry.register(Box::new(ScriptsChecker));
        registry.register(Box::new(DependenciesChecker));
        registry.register(Box::new(FrameworksChecker));
        registry.register(Box::new(StructureChecker));
        registry
    }

    /// Append a checker.
    pub fn register(&mut self, checker: Box<dyn Checker>) {
        self.checkers.push(checker);
    }

    /// Get a checker by name.
    pub fn get(&self, name: &str) -> Option<&dyn Checker> {
        self.checkers
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// Iterate over checkers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Checker> {
        self.checkers.iter().map(|c| c.as_ref())
    }

    /// Run every checker against one document, in order.
    pub fn run_all(&self, doc: &ParsedDocument, ctx: &CheckContext<'_>) -> Vec<CheckResult> {
        self.iter().map(|checker| checker.check(doc, ctx)).collect()
    }

    /// Get the number of registered checkers.
    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }
}

impl Default for CheckerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::extract::extract;
    use crate::manifest::ProjectManifest;
    use std::path::Path;

    #[test]
    fn builtins_are_ordered() {
        let registry = CheckerRegistry::with_builtins();
        let names: Vec<_> = registry.iter().map(|c| c.name()).collect();

        assert_eq!(
            names,
            vec!["filesystem", "scripts", "dependencies", "frameworks", "structure"]
        );
    }

    #[test]
    fn get_by_name() {
        let registry = CheckerRegistry::with_builtins();
        assert!(registry.get("scripts").is_some());
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn empty_registry() {
        let registry = CheckerRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn run_all_returns_one_result_per_checker() {
        let registry = CheckerRegistry::with_builtins();
        let config = Config::default();
        let manifest = ProjectManifest::absent();
        let ctx = CheckContext::new(Path::new("."), &config, &manifest);

        let results = registry.run_all(&extract("# Empty"), &ctx);

        assert_eq!(results.len(), 5);
        assert_eq!(results[0].checker, "filesystem");
        assert_eq!(results[4].checker, "structure");
    }
}
