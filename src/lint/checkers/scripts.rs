//! Script command validation.
//!
//! Script names the document tells readers to run must exist in the root
//! manifest or one of its workspace packages.

use std::collections::BTreeSet;

use crate::extract::ParsedDocument;
use crate::lint::{CheckContext, CheckResult, Checker, Issue, Severity};

/// Script names that count as "the project has a test command".
pub const CANONICAL_TEST_SCRIPTS: &[&str] = &["test", "test:unit", "test:ci", "test:all"];

/// Number of available scripts listed in a suggestion.
const SUGGESTED_SCRIPTS: usize = 5;

const RUNNERS: &[&str] = &["yarn", "pnpm", "bun", "npm"];

/// Checks mentioned scripts against manifest script tables.
pub struct ScriptsChecker;

impl ScriptsChecker {
    fn find_script_line(doc: &ParsedDocument, script: &str) -> Option<usize> {
        doc.find_line(&format!("run {}", script)).or_else(|| {
            RUNNERS
                .iter()
                .find_map(|runner| doc.find_line(&format!("{} {}", runner, script)))
        })
    }

    fn available_suggestion(available: &BTreeSet<String>) -> String {
        if available.is_empty() {
            return "No scripts are defined in package.json".to_string();
        }
        let names: Vec<&str> = available
            .iter()
            .take(SUGGESTED_SCRIPTS)
            .map(String::as_str)
            .collect();
        format!("Available scripts: {}", names.join(", "))
    }
}

impl Checker for ScriptsChecker {
    fn name(&self) -> &'static str {
        "scripts"
    }

    fn description(&self) -> &'static str {
        "Ensures referenced scripts are defined in the project manifest"
    }

    fn check(&self, doc: &ParsedDocument, ctx: &CheckContext<'_>) -> CheckResult {
        let mut result = CheckResult::new(self.name());
        if !ctx.manifest.exists() {
            return result;
        }

        let available = ctx.manifest.all_scripts();

        for script in &doc.mentioned_scripts {
            if available.contains(script) {
                result.pass();
                continue;
            }
            result.fail(
                Issue::new(
                    "missing-script",
                    Severity::Warn,
                    format!("Script `{}` is not defined in package.json", script),
                )
                .with_suggestion(Self::available_suggestion(&available))
                .located(doc, Self::find_script_line(doc, script)),
            );
        }

        if CANONICAL_TEST_SCRIPTS
            .iter()
            .any(|name| available.contains(*name))
        {
            result.pass();
        } else {
            result.fail(
                Issue::new(
                    "no-test-script",
                    Severity::Warn,
                    "No test script is defined in package.json",
                )
                .with_suggestion("Add a \"test\" script so agents can verify their changes"),
            );
        }

        result
    }
}
