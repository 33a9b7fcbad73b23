//! Dependency validation.
//!
//! Dependencies the document names must be installed, and installed packages
//! with well-known successors are flagged whether or not the document
//! mentions them.

use std::collections::BTreeSet;

use crate::extract::ParsedDocument;
use crate::lint::{CheckContext, CheckResult, Checker, Issue, Severity};

/// Names that describe tooling or languages rather than installable packages.
pub const GENERIC_NAMES: &[&str] = &[
    "node",
    "nodejs",
    "npm",
    "yarn",
    "pnpm",
    "bun",
    "deno",
    "javascript",
    "typescript",
    "html",
    "css",
    "git",
    "github",
];

/// Installed package → recommended replacement.
pub const DEPRECATED_PACKAGES: &[(&str, &str)] = &[
    ("moment", "date-fns or dayjs"),
    ("request", "native fetch, undici or axios"),
    ("request-promise", "native fetch"),
    ("node-sass", "sass (Dart Sass)"),
    ("tslint", "eslint with typescript-eslint"),
    ("enzyme", "@testing-library/react"),
    ("react-scripts", "Vite or a framework CLI"),
    ("babel-eslint", "@babel/eslint-parser"),
    ("left-pad", "String.prototype.padStart"),
];

/// Checks mentioned dependencies against the root manifest.
pub struct DependenciesChecker;

impl DependenciesChecker {
    fn is_installed(installed: &BTreeSet<String>, name: &str) -> bool {
        installed.contains(name)
            || installed.contains(&format!("@types/{}", name))
            || installed.iter().any(|dep| dep.contains(name))
    }
}

impl Checker for DependenciesChecker {
    fn name(&self) -> &'static str {
        "dependencies"
    }

    fn description(&self) -> &'static str {
        "Ensures referenced dependencies are installed and not deprecated"
    }

    fn check(&self, doc: &ParsedDocument, ctx: &CheckContext<'_>) -> CheckResult {
        let mut result = CheckResult::new(self.name());
        if !ctx.manifest.exists() {
            return result;
        }

        let installed = ctx.manifest.root_dependencies();

        for name in &doc.mentioned_dependencies {
            if GENERIC_NAMES.contains(&name.as_str()) {
                continue;
            }
            if Self::is_installed(&installed, name) {
                result.pass();
                continue;
            }
            result.fail(
                Issue::new(
                    "missing-dependency",
                    Severity::Warn,
                    format!("Dependency `{}` is mentioned but not installed", name),
                )
                .with_suggestion(format!(
                    "Install `{}` or remove the reference if the project moved away from it",
                    name
                ))
                .located(doc, doc.find_package_line(name)),
            );
        }

        for (package, replacement) in DEPRECATED_PACKAGES {
            if !installed.contains(*package) {
                continue;
            }
            // Only a line that names the package may be offered for removal.
            let line = doc
                .mentioned_dependencies
                .contains(*package)
                .then(|| doc.find_package_line(package))
                .flatten();
            result.fail(
                Issue::new(
                    "deprecated-dependency",
                    Severity::Info,
                    format!("Installed package `{}` is deprecated", package),
                )
                .with_suggestion(format!("Consider migrating to {}", replacement))
                .located(doc, line),
            );
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::extract::extract;
    use crate::manifest::ProjectManifest;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn run(root: &Path, text: &str) -> CheckResult {
        let config = Config::default();
        let manifest = ProjectManifest::load(root);
        let ctx = CheckContext::new(root, &config, &manifest);
        DependenciesChecker.check(&extract(text), &ctx)
    }

    fn write_manifest(root: &Path, content: &str) {
        fs::write(root.join("package.json"), content).unwrap();
    }

    #[test]
    fn no_manifest_means_no_applicable_checks() {
        let temp = TempDir::new().unwrap();
        let result = run(temp.path(), "Built with React and moment@2.29.0.");

        assert!(result.issues.is_empty());
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn installed_dependencies_pass() {
        let temp = TempDir::new().unwrap();
        write_manifest(
            temp.path(),
            r#"{ "dependencies": { "react": "^18" }, "devDependencies": { "vitest": "^1" } }"#,
        );

        let result = run(temp.path(), "Uses React, tested with Vitest.");

        assert!(result.issues.is_empty());
        assert_eq!(result.passed, 2);
    }

    #[test]
    fn type_packages_and_substrings_count_as_installed() {
        let temp = TempDir::new().unwrap();
        write_manifest(
            temp.path(),
            r#"{ "devDependencies": { "@types/express": "^4", "@prisma/client": "^5" } }"#,
        );

        let result = run(temp.path(), "An Express API using Prisma.");

        assert!(result.issues.is_empty());
    }

    #[test]
    fn missing_dependency_is_located_case_insensitively() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), r#"{ "dependencies": { "react": "^18" } }"#);

        let result = run(temp.path(), "# Stack\nState lives in Redux.");

        assert_eq!(result.issues.len(), 1);
        let issue = &result.issues[0];
        assert_eq!(issue.rule, "missing-dependency");
        assert_eq!(issue.severity, Severity::Warn);
        assert_eq!(issue.line, Some(2));
    }

    #[test]
    fn generic_names_are_ignored() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), r#"{ "dependencies": {} }"#);

        let result = run(temp.path(), "Written in TypeScript.");

        assert!(result.issues.is_empty());
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn deprecated_packages_are_flagged_even_when_unmentioned() {
        let temp = TempDir::new().unwrap();
        write_manifest(
            temp.path(),
            r#"{ "dependencies": { "moment": "^2", "request": "^2" } }"#,
        );

        let result = run(temp.path(), "Nothing about dates here.");

        let rules: Vec<_> = result.issues.iter().map(|i| i.rule.as_str()).collect();
        assert_eq!(rules, vec!["deprecated-dependency", "deprecated-dependency"]);
        assert!(result.issues.iter().all(|i| i.severity == Severity::Info));
        assert!(result.issues.iter().all(|i| i.line.is_none()));
        assert!(result.issues[0]
            .suggestion
            .as_deref()
            .unwrap()
            .starts_with("Consider migrating to"));
    }

    #[test]
    fn deprecated_package_is_not_pinned_to_unrelated_prose() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), r#"{ "dependencies": { "moment": "^2", "request": "^2" } }"#);

        let result = run(
            temp.path(),
            "# Project\nAt the moment we only ship the web app.\nOpen a pull request first.",
        );

        assert_eq!(result.issues.len(), 2);
        assert!(result.issues.iter().all(|i| i.line.is_none()));
        assert!(result.issues.iter().all(|i| i.context.is_none()));
    }

    #[test]
    fn deprecated_package_is_located_where_it_is_pinned() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), r#"{ "dependencies": { "moment": "^2" } }"#);

        let result = run(
            temp.path(),
            "# Project\nAt the moment dates are formatted with `moment@2.29.4`.\n\nDates use moment@2.29.4 too.",
        );

        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].line, Some(2));
    }
}
