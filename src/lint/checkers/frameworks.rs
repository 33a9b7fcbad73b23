//! Framework staleness detection.
//!
//! Each row of [`STALE_PATTERNS`] is one known-superseded idiom for one
//! framework family. Only families detected for the project are checked.
//! Two family-independent checks look for old Node.js and npm versions.

use std::sync::LazyLock;

use regex::Regex;

use crate::detection::detect_frameworks;
use crate::extract::ParsedDocument;
use crate::lint::{CheckContext, CheckResult, Checker, Issue, Severity};

/// One superseded idiom.
#[derive(Debug)]
pub struct StalePattern {
    pub family: &'static str,
    pub pattern: &'static str,
    pub rule: &'static str,
    pub severity: Severity,
    pub message: &'static str,
    pub suggestion: &'static str,
}

macro_rules! stale {
    ($family:expr, $rule:expr, $pattern:expr, $message:expr, $suggestion:expr) => {
        StalePattern {
            family: $family,
            pattern: $pattern,
            rule: $rule,
            severity: Severity::Warn,
            message: $message,
            suggestion: $suggestion,
        }
    };
}

pub const STALE_PATTERNS: &[StalePattern] = &[
    // React
    stale!(
        "react",
        "legacy-lifecycle",
        r"\b(?:UNSAFE_)?component(?:WillMount|WillReceiveProps|WillUpdate)\b",
        "Legacy React lifecycle methods are referenced",
        "Describe effects with hooks such as useEffect"
    ),
    stale!(
        "react",
        "legacy-render-api",
        r"\bReactDOM\.(?:render|hydrate)\b",
        "ReactDOM.render was replaced by the root API in React 18",
        "Use createRoot from react-dom/client"
    ),
    stale!(
        "react",
        "legacy-create-class",
        r"\b(?:React\.)?createClass\b",
        "createClass components are no longer supported",
        "Use function components"
    ),
    stale!(
        "react",
        "legacy-string-refs",
        r"\bthis\.refs\.",
        "String refs are deprecated",
        "Use useRef or createRef"
    ),
    // Next.js
    stale!(
        "next",
        "removed-next-export",
        r"\bnext\s+export\b",
        "`next export` was removed in Next.js 14",
        "Set `output: 'export'` in next.config.js"
    ),
    stale!(
        "next",
        "legacy-next-font",
        r"@next/font\b",
        "@next/font was folded into Next.js",
        "Import from next/font instead"
    ),
    stale!(
        "next",
        "legacy-get-initial-props",
        r"\bgetInitialProps\b",
        "getInitialProps is a legacy data-fetching API",
        "Use server components or getServerSideProps"
    ),
    // Vue
    stale!(
        "vue",
        "vue2-instance",
        r"\bnew\s+Vue\s*\(",
        "`new Vue()` is the Vue 2 application API",
        "Use createApp from Vue 3"
    ),
    stale!(
        "vue",
        "vue2-global-api",
        r"\bVue\.(?:component|use|mixin|directive|filter)\s*\(",
        "Global Vue 2 API calls are referenced",
        "Register plugins and components on the app instance"
    ),
    stale!(
        "vue",
        "legacy-vuex",
        r"(?i)\bvuex\b",
        "Vuex is in maintenance mode",
        "Use Pinia for state management"
    ),
    // Angular
    stale!(
        "angular",
        "angular-entry-components",
        r"\bentryComponents\b",
        "entryComponents has been unnecessary since Ivy",
        "Remove entryComponents references"
    ),
    stale!(
        "angular",
        "angular-prod-flag",
        r"\bng\s+build\s+--prod\b",
        "`ng build --prod` was removed",
        "Use `ng build --configuration production`"
    ),
    stale!(
        "angular",
        "angular-view-engine",
        r"(?i)\bview\s*engine\b|\benableIvy\b",
        "View Engine was removed in Angular 13",
        "Remove View Engine guidance"
    ),
    // Svelte
    stale!(
        "svelte",
        "svelte-event-dispatcher",
        r"\bcreateEventDispatcher\b",
        "createEventDispatcher is deprecated in Svelte 5",
        "Pass callback props instead"
    ),
    stale!(
        "svelte",
        "svelte-reactive-statement",
        r"(?m)^\s*\$:\s",
        "`$:` reactive statements are replaced by runes in Svelte 5",
        "Use $derived or $effect"
    ),
    // Express
    stale!(
        "express",
        "express-body-parser",
        r"\bbody-parser\b|\bbodyParser\.(?:json|urlencoded)\b",
        "body-parser is built into Express",
        "Use express.json() and express.urlencoded()"
    ),
    stale!(
        "express",
        "express-app-del",
        r"\bapp\.del\s*\(",
        "app.del() was removed in Express 5",
        "Use app.delete()"
    ),
];

static STALE_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    STALE_PATTERNS
        .iter()
        .map(|p| Regex::new(p.pattern).unwrap())
        .collect()
});

/// Oldest Node.js major considered current.
pub const MIN_NODE_MAJOR: u32 = 18;

/// Oldest npm major considered current.
pub const MIN_NPM_MAJOR: u32 = 7;

static RE_NODE_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bnode(?:\.?js)?\s*(?:version\s*)?(?:>=?\s*)?v?(\d{1,2})(?:\.\d+){0,2}\b")
        .unwrap()
});

static RE_NPM_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bnpm\s*(?:version\s*)?(?:>=?\s*)?v?(\d{1,2})(?:\.\d+){0,2}\b").unwrap()
});

/// Checks documents for superseded framework idioms.
pub struct FrameworksChecker;

impl FrameworksChecker {
    /// First 1-based line referencing a major version below `min`.
    fn outdated_version_line(doc: &ParsedDocument, re: &Regex, min: u32) -> Option<usize> {
        doc.lines
            .iter()
            .position(|line| {
                re.captures_iter(line).any(|caps| {
                    caps[1]
                        .parse::<u32>()
                        .map(|major| major < min)
                        .unwrap_or(false)
                })
            })
            .map(|i| i + 1)
    }

    fn check_version(
        result: &mut CheckResult,
        doc: &ParsedDocument,
        re: &Regex,
        min: u32,
        rule: &str,
        tool: &str,
    ) {
        match Self::outdated_version_line(doc, re, min) {
            Some(line) => result.fail(
                Issue::new(
                    rule,
                    Severity::Warn,
                    format!("References an outdated {} version", tool),
                )
                .with_suggestion(format!("Document {} {} or newer", tool, min))
                .located(doc, Some(line)),
            ),
            None => result.pass(),
        }
    }
}

impl Checker for FrameworksChecker {
    fn name(&self) -> &'static str {
        "frameworks"
    }

    fn description(&self) -> &'static str {
        "Flags superseded framework APIs and outdated runtime versions"
    }

    fn check(&self, doc: &ParsedDocument, ctx: &CheckContext<'_>) -> CheckResult {
        let mut result = CheckResult::new(self.name());
        let families = detect_frameworks(ctx.manifest, doc);

        for (stale, re) in STALE_PATTERNS.iter().zip(STALE_REGEXES.iter()) {
            if !families.contains(stale.family) {
                continue;
            }
            match doc.find_line_matching(re) {
                Some(line) => result.fail(
                    Issue::new(stale.rule, stale.severity, stale.message)
                        .with_suggestion(stale.suggestion)
                        .located(doc, Some(line)),
                ),
                None => result.pass(),
            }
        }

        Self::check_version(
            &mut result,
            doc,
            &RE_NODE_VERSION,
            MIN_NODE_MAJOR,
            "outdated-node-version",
            "Node.js",
        );
        Self::check_version(
            &mut result,
            doc,
            &RE_NPM_VERSION,
            MIN_NPM_MAJOR,
            "outdated-npm-version",
            "npm",
        );

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
        FrameworksChecker.check(&extract(text), &ctx)
    }

    fn rules(result: &CheckResult) -> Vec<&str> {
        result.issues.iter().map(|i| i.rule.as_str()).collect()
    }

    #[test]
    fn patterns_compile() {
        assert_eq!(STALE_REGEXES.len(), STALE_PATTERNS.len());
    }

    #[test]
    fn stale_react_patterns_from_manifest_family() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{ "dependencies": { "react": "^18", "react-dom": "^18" } }"#,
        )
        .unwrap();

        let result = run(
            temp.path(),
            "# Entry\nMount with `ReactDOM.render(<App />, root)`.",
        );

        assert_eq!(rules(&result), vec!["legacy-render-api"]);
        assert_eq!(result.issues[0].line, Some(2));
        // remaining react patterns plus both version checks
        assert_eq!(result.passed, 3 + 2);
    }

    #[test]
    fn families_not_installed_are_not_checked() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{ "dependencies": { "express": "^4" } }"#,
        )
        .unwrap();

        let result = run(temp.path(), "Legacy note: `new Vue({ el: '#app' })`.");

        assert!(result.issues.is_empty());
    }

    #[test]
    fn fingerprints_are_used_without_manifest() {
        let temp = TempDir::new().unwrap();

        let result = run(
            temp.path(),
            "This Vue app boots with `new Vue({ render })` and uses Vuex.",
        );

        let found = rules(&result);
        assert!(found.contains(&"vue2-instance"));
        assert!(found.contains(&"legacy-vuex"));
    }

    #[test]
    fn outdated_node_and_npm_versions() {
        let temp = TempDir::new().unwrap();

        let result = run(temp.path(), "Requires Node 16.\nUse npm 6 or later.");

        assert_eq!(rules(&result), vec!["outdated-node-version", "outdated-npm-version"]);
        assert_eq!(result.issues[0].line, Some(1));
        assert_eq!(result.issues[1].line, Some(2));
    }

    #[test]
    fn current_versions_pass() {
        let temp = TempDir::new().unwrap();

        let result = run(temp.path(), "Requires Node.js v20.11 and npm 10.");

        assert!(result.issues.is_empty());
        assert_eq!(result.passed, 2);
    }
}
