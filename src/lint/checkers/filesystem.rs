//! Filesystem reference validation.
//!
//! Every path the document mentions must exist under the repository root.
//! URLs, template variables and configured ignore substrings are skipped.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::extract::ParsedDocument;
use crate::lint::{CheckContext, CheckResult, Checker, Issue, Severity};

/// Top-level directory names that documents commonly reference.
pub const CONVENTIONAL_DIRS: &[&str] = &["src", "lib", "dist", "build", "packages", "apps"];

static CONVENTIONAL_DIR_REFS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    CONVENTIONAL_DIRS
        .iter()
        .map(|dir| {
            let pattern = format!(r#"(?:^|[\s`'"(*])(?:\./)?{}/"#, regex::escape(dir));
            (*dir, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Trailing `:line` or `:line:column` of an editor-style location.
static RE_LOCATION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\d+(?::\d+)?$").unwrap());

/// Checks that mentioned paths exist on disk.
pub struct FilesystemChecker;

impl FilesystemChecker {
    fn is_checkable(path: &str) -> bool {
        !(path.contains("://")
            || path.starts_with("http")
            || path.starts_with('~')
            || path.contains(['$', '{', '<', '*']))
    }

    fn exists(root: &Path, path: &str) -> bool {
        let path = RE_LOCATION_SUFFIX.replace(path, "");
        let path = path.as_ref();
        if path.starts_with('/') {
            return Path::new(path).exists() || root.join(path.trim_start_matches('/')).exists();
        }
        root.join(path.trim_start_matches("./")).exists()
    }

    fn first_segment(path: &str) -> &str {
        path.trim_start_matches("./")
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or_default()
    }
}

impl Checker for FilesystemChecker {
    fn name(&self) -> &'static str {
        "filesystem"
    }

    fn description(&self) -> &'static str {
        "Ensures every referenced path exists in the repository"
    }

    fn check(&self, doc: &ParsedDocument, ctx: &CheckContext<'_>) -> CheckResult {
        let mut result = CheckResult::new(self.name());
        let mut reported_roots: BTreeSet<&str> = BTreeSet::new();

        for path in &doc.mentioned_paths {
            if !Self::is_checkable(path) || ctx.config.is_ignored_path(path) {
                continue;
            }
            if Self::exists(ctx.root, path) {
                result.pass();
                continue;
            }

            reported_roots.insert(Self::first_segment(path));
            result.fail(
                Issue::new(
                    "missing-path",
                    Severity::Error,
                    format!("Referenced path `{}` does not exist", path),
                )
                .with_suggestion("Update the path or remove the stale reference")
                .located(doc, doc.find_line(path)),
            );
        }

        for (dir, re) in CONVENTIONAL_DIR_REFS.iter() {
            let Some(line) = doc.find_line_matching(re) else {
                continue;
            };
            if ctx.root.join(dir).is_dir() {
                result.pass();
                continue;
            }
            if reported_roots.contains(dir) {
                continue;
            }
            result.fail(
                Issue::new(
                    "missing-directory",
                    Severity::Warn,
                    format!("Directory `{}/` is referenced but does not exist", dir),
                )
                .with_suggestion(format!(
                    "Remove references to `{}/` or describe the current layout",
                    dir
                ))
                .located(doc, Some(line)),
            );
        }

        result
    }
}
