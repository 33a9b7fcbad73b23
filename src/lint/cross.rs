//! Cross-document consistency.
//!
//! When a repository carries several context documents they should agree on
//! the package manager, on the concrete commands for common script roles,
//! and broadly on which deep paths matter.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::issue::Issue;
use super::result::CheckResult;
use super::rule::Severity;
use crate::detection::PackageManager;
use crate::extract::ParsedDocument;

/// Name reported in [`CheckResult::checker`].
pub const CROSS_DOCUMENT_CHECKER: &str = "cross-document";

/// One-sided path issues emitted across all documents. Further findings are
/// counted in [`CheckResult::suppressed`].
pub const MAX_ONE_SIDED_PATH_ISSUES: usize = 5;

/// Minimum path depth for the one-sided path check.
const MIN_PATH_SEGMENTS: usize = 3;

/// A parsed document and its label (path relative to the repository root).
#[derive(Debug, Clone, Copy)]
pub struct LabeledDocument<'a> {
    pub label: &'a str,
    pub doc: &'a ParsedDocument,
}

impl<'a> LabeledDocument<'a> {
    pub fn new(label: &'a str, doc: &'a ParsedDocument) -> Self {
        Self { label, doc }
    }
}

static SCRIPT_ROLES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("test", r"(?i)\b(?:test|spec|e2e)"),
        ("build", r"(?i)\b(?:build|compile|bundle)"),
        ("lint", r"(?i)\blint"),
        ("dev", r"(?i)^(?:dev|start|serve)\b"),
    ]
    .into_iter()
    .map(|(role, pattern)| (role, Regex::new(pattern).unwrap()))
    .collect()
});

/// Check a set of documents against each other.
///
/// Returns an empty result when fewer than two documents are given.
pub fn check_cross(documents: &[LabeledDocument<'_>]) -> CheckResult {
    let mut result = CheckResult::new(CROSS_DOCUMENT_CHECKER);
    if documents.len() < 2 {
        return result;
    }

    check_package_managers(&mut result, documents);
    check_script_roles(&mut result, documents);
    check_one_sided_paths(&mut result, documents);

    result
}

fn check_package_managers(result: &mut CheckResult, documents: &[LabeledDocument<'_>]) {
    let detected: Vec<(&str, PackageManager)> = documents
        .iter()
        .filter_map(|d| PackageManager::detect_in_text(&d.doc.raw_content).map(|pm| (d.label, pm)))
        .collect();
    if detected.len() < 2 {
        return;
    }

    let families: BTreeSet<PackageManager> = detected.iter().map(|(_, pm)| *pm).collect();
    if families.len() == 1 {
        result.pass();
        return;
    }

    let listing: Vec<String> = detected
        .iter()
        .map(|(label, pm)| format!("{} → {}", label, pm))
        .collect();
    result.fail(
        Issue::new(
            "package-manager-conflict",
            Severity::Error,
            format!(
                "Documents disagree on the package manager: {}",
                listing.join(", ")
            ),
        )
        .with_suggestion("Use the same package manager in every context document"),
    );
}

fn check_script_roles(result: &mut CheckResult, documents: &[LabeledDocument<'_>]) {
    for (role, re) in SCRIPT_ROLES.iter() {
        let per_document: Vec<(&str, BTreeSet<&str>)> = documents
            .iter()
            .map(|d| {
                let scripts: BTreeSet<&str> = d
                    .doc
                    .mentioned_scripts
                    .iter()
                    .map(String::as_str)
                    .filter(|s| re.is_match(s))
                    .collect();
                (d.label, scripts)
            })
            .filter(|(_, scripts)| !scripts.is_empty())
            .collect();

        if per_document.len() < 2 {
            continue;
        }

        let first = &per_document[0].1;
        if per_document.iter().all(|(_, scripts)| scripts == first) {
            result.pass();
            continue;
        }

        let listing: Vec<String> = per_document
            .iter()
            .map(|(label, scripts)| {
                let names: Vec<&str> = scripts.iter().copied().collect();
                format!("{} → {}", label, names.join(", "))
            })
            .collect();
        result.fail(
            Issue::new(
                "script-conflict",
                Severity::Warn,
                format!(
                    "Documents name different {} commands: {}",
                    role,
                    listing.join("; ")
                ),
            )
            .with_suggestion(format!("Align the {} command across documents", role)),
        );
    }
}

fn normalize_path(path: &str) -> &str {
    path.trim_start_matches("./")
        .trim_start_matches('/')
        .trim_end_matches('/')
}

fn segment_count(path: &str) -> usize {
    path.split('/').filter(|s| !s.is_empty()).count()
}

/// Same path, or one is an ancestor directory of the other.
fn is_related(a: &str, b: &str) -> bool {
    a == b || is_ancestor(a, b) || is_ancestor(b, a)
}

fn is_ancestor(ancestor: &str, path: &str) -> bool {
    path.strip_prefix(ancestor)
        .is_some_and(|rest| rest.starts_with('/'))
}

fn check_one_sided_paths(result: &mut CheckResult, documents: &[LabeledDocument<'_>]) {
    let normalized: Vec<BTreeSet<&str>> = documents
        .iter()
        .map(|d| {
            d.doc
                .mentioned_paths
                .iter()
                .map(|p| normalize_path(p))
                .filter(|p| !p.is_empty())
                .collect()
        })
        .collect();

    let mut emitted = 0;
    for (index, document) in documents.iter().enumerate() {
        for path in &normalized[index] {
            if segment_count(path) < MIN_PATH_SEGMENTS {
                continue;
            }

            let documented_elsewhere = normalized
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != index)
                .any(|(_, paths)| paths.iter().any(|p| is_related(path, p)));

            if documented_elsewhere {
                result.pass();
                continue;
            }

            if emitted < MAX_ONE_SIDED_PATH_ISSUES {
                emitted += 1;
                result.fail(
                    Issue::new(
                        "undocumented-elsewhere",
                        Severity::Info,
                        format!("`{}` is only documented in {}", path, document.label),
                    )
                    .with_suggestion(
                        "Mention the path in the other documents or drop it if it is obsolete",
                    ),
                );
            } else {
                result.suppressed += 1;
            }
        }
    }

    if result.suppressed > 0 {
        tracing::debug!(
            "Suppressed {} one-sided path finding(s) beyond the cap",
            result.suppressed
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract;

    fn cross(docs: &[(&str, &str)]) -> CheckResult {
        let parsed: Vec<(String, ParsedDocument)> = docs
            .iter()
            .map(|(label, text)| (label.to_string(), extract(text)))
            .collect();
        let labeled: Vec<LabeledDocument<'_>> = parsed
            .iter()
            .map(|(label, doc)| LabeledDocument::new(label, doc))
            .collect();
        check_cross(&labeled)
    }

    fn rules(result: &CheckResult) -> Vec<&str> {
        result.issues.iter().map(|i| i.rule.as_str()).collect()
    }

    #[test]
    fn single_document_is_a_no_op() {
        let result = cross(&[("CLAUDE.md", "Run `pnpm install`.")]);

        assert!(result.issues.is_empty());
        assert_eq!(result.total(), 0);
        assert_eq!(result.checker, "cross-document");
    }

    #[test]
    fn package_manager_conflict_names_both_documents() {
        let result = cross(&[
            ("CLAUDE.md", "Install with `pnpm install`."),
            ("AGENTS.md", "Install with `npm install`."),
        ]);

        assert_eq!(rules(&result), vec!["package-manager-conflict"]);
        let issue = &result.issues[0];
        assert_eq!(issue.severity, Severity::Error);
        assert!(issue.message.contains("CLAUDE.md → pnpm"));
        assert!(issue.message.contains("AGENTS.md → npm"));
    }

    #[test]
    fn agreeing_package_managers_pass() {
        let result = cross(&[
            ("CLAUDE.md", "`yarn install`"),
            ("AGENTS.md", "`yarn build`"),
        ]);

        assert!(result.issues.is_empty());
        assert_eq!(result.passed, 1);
    }

    #[test]
    fn script_role_conflict() {
        let result = cross(&[
            ("CLAUDE.md", "Run `pnpm test:unit` and `pnpm dev`."),
            ("AGENTS.md", "Run `pnpm test` and `pnpm dev`."),
        ]);

        assert_eq!(rules(&result), vec!["script-conflict"]);
        assert!(result.issues[0].message.contains("test commands"));
        // package manager agreement plus the dev role
        assert_eq!(result.passed, 2);
    }

    #[test]
    fn one_sided_deep_paths_are_reported() {
        let result = cross(&[
            ("CLAUDE.md", "See `./src/server/routes/api.ts` and `./src/ui`."),
            ("AGENTS.md", "Nothing about paths."),
        ]);

        assert_eq!(rules(&result), vec!["undocumented-elsewhere"]);
        assert!(result.issues[0].message.contains("CLAUDE.md"));
        assert_eq!(result.issues[0].severity, Severity::Info);
    }

    #[test]
    fn ancestor_paths_count_as_documented() {
        let result = cross(&[
            ("CLAUDE.md", "See `./src/server/routes/api.ts`."),
            ("AGENTS.md", "Routes live in `src/server/routes/`."),
        ]);

        assert!(result.issues.is_empty());
        assert_eq!(result.passed, 2);
    }

    #[test]
    fn one_sided_paths_are_capped_and_counted() {
        let many: String = (0..8)
            .map(|i| format!("`./pkg/mod{}/file.ts`\n", i))
            .collect();
        let result = cross(&[("CLAUDE.md", many.as_str()), ("AGENTS.md", "none")]);

        assert_eq!(result.issues.len(), MAX_ONE_SIDED_PATH_ISSUES);
        assert_eq!(result.suppressed, 3);
        assert_eq!(result.failed, MAX_ONE_SIDED_PATH_ISSUES);
    }
}
