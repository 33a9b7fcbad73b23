//! Pattern tables used by the extractor.
//!
//! Every table here is plain data: adding a recognized shape means adding a
//! row, not a branch.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        pub(crate) static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

// --- Sections ---

lazy_regex!(RE_HEADING, r"^(#{1,3})\s+(.*\S)\s*$");

// --- Paths ---

lazy_regex!(RE_BACKTICK_PATH, r"`((?:\.{1,2})?/[^`\s]+)`");
lazy_regex!(RE_BOLD_PATH, r"\*\*([\w@.\-]+(?:/[\w@.\-]*)+)\*\*");
lazy_regex!(
    RE_PREPOSITION_PATH,
    r"(?i)\b(?:in|at|under|inside|from)\s+`([^`\s]+)`"
);
lazy_regex!(
    RE_LABELED_PATH,
    r"(?i)\b(?:directory|dir|file|folder|path)\s*:\s*`?([\w@./\-]+)`?"
);

/// Path patterns applied to every line; capture group 1 is the candidate.
pub(crate) static PATH_PATTERNS: [&LazyLock<Regex>; 4] = [
    &RE_BACKTICK_PATH,
    &RE_BOLD_PATH,
    &RE_PREPOSITION_PATH,
    &RE_LABELED_PATH,
];

/// Phrases that turn a path mention into a statement about its absence.
pub const NEGATION_PHRASES: &[&str] = &[
    "no longer",
    "removed",
    "deprecated",
    "not exist",
    "doesn't exist",
    "does not exist",
];

/// Characters stripped from the end of every extracted token.
pub const TRAILING_PUNCTUATION: &[char] = &[',', ';', ':', '.'];

// --- Scripts ---

lazy_regex!(
    RE_RUN_SCRIPT,
    r"\b(?:npm|pnpm|yarn|bun)\s+run\s+([A-Za-z0-9][\w:.\-]*)"
);
lazy_regex!(
    RE_CODE_SPAN_SCRIPT,
    r"`(?:\$\s*)?(?:pnpm|yarn|bun)\s+([A-Za-z][\w:.\-]*)"
);
lazy_regex!(
    RE_LINE_START_SCRIPT,
    r"(?m)^\s*(?:[-*]\s+)?(?:\$\s*)?(?:pnpm|yarn|bun)\s+([A-Za-z][\w:.\-]*)"
);
lazy_regex!(RE_NPM_SHORTCUT, r"\bnpm\s+(test|start|stop|restart)\b");

/// Words after an explicit `run` that are still not script names.
pub const RUN_EXCLUDED: &[&str] = &["install", "init"];

/// Script patterns paired with the names each must ignore; capture group 1
/// is the script name.
pub(crate) static SCRIPT_PATTERNS: [(&LazyLock<Regex>, &[&str]); 4] = [
    (&RE_RUN_SCRIPT, RUN_EXCLUDED),
    (&RE_CODE_SPAN_SCRIPT, RESERVED_VERBS),
    (&RE_LINE_START_SCRIPT, RESERVED_VERBS),
    (&RE_NPM_SHORTCUT, RUN_EXCLUDED),
];

/// Runner subcommands that are not script names when the runner is invoked
/// without `run`.
pub const RESERVED_VERBS: &[&str] = &[
    "install", "init", "add", "remove", "run", "exec", "dlx", "x", "create", "upgrade", "up",
    "update", "i", "ci", "why", "link", "unlink", "publish", "pack", "audit", "outdated", "info",
    "config", "global", "cache", "login", "logout", "version", "help", "set", "workspace",
    "workspaces", "import", "rebuild", "store", "patch", "list", "ls",
];

// --- Dependencies ---

lazy_regex!(
    RE_VERSIONED_DEPENDENCY,
    r#"(?i)(?:^|[\s`'"(])((?:@[a-z0-9][\w.\-]*/)?[a-z0-9][\w.\-]*)@[\^~]?(?:\d[\w.\-]*|latest|next)"#
);
lazy_regex!(
    RE_KNOWN_DEPENDENCY,
    r"(?i)\b(react|vue|angular|svelte|next\.js|nuxt|express|fastify|nestjs|jest|vitest|mocha|cypress|playwright|prisma|drizzle|typescript|tailwindcss|tailwind|webpack|vite|eslint|prettier|redux|zustand|graphql|mongoose|sequelize|storybook|lodash|axios)\b"
);

/// Spelling in prose → package name.
pub const DEPENDENCY_ALIASES: &[(&str, &str)] = &[("next.js", "next"), ("tailwind", "tailwindcss")];

// --- Framework fingerprints ---

/// Per-family fingerprints tested against the whole document.
pub const FRAMEWORK_FINGERPRINTS: &[(&str, &[&str])] = &[
    (
        "react",
        &[
            r"\bReact\b",
            r"\buse(?:State|Effect|Context|Reducer|Memo)\b",
            r"\.jsx\b",
        ],
    ),
    (
        "next",
        &[
            r"(?i)\bnext\.js\b",
            r"\bnext/(?:router|navigation|image|link|font)\b",
            r"\bgetServerSideProps\b",
        ],
    ),
    ("vue", &[r"\bVue(?:\.js)?\b", r"\.vue\b", r"\bdefineComponent\b"]),
    ("angular", &[r"\bAngular\b", r"@angular/", r"\bNgModule\b"]),
    ("svelte", &[r"(?i)\bsvelte(?:kit)?\b"]),
    (
        "express",
        &[r"\bExpress(?:\.js)?\b", r"\bexpress\(\)", r"\bapp\.(?:get|post|use)\("],
    ),
];

pub(crate) static FRAMEWORK_REGEXES: LazyLock<Vec<(&'static str, Vec<Regex>)>> =
    LazyLock::new(|| {
        FRAMEWORK_FINGERPRINTS
            .iter()
            .map(|(family, patterns)| {
                let compiled = patterns.iter().map(|p| Regex::new(p).unwrap()).collect();
                (*family, compiled)
            })
            .collect()
    });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_matches_one_to_three_levels() {
        assert!(RE_HEADING.is_match("# Title"));
        assert!(RE_HEADING.is_match("### Deep"));
        assert!(!RE_HEADING.is_match("#### Too deep"));
        assert!(!RE_HEADING.is_match("#NoSpace"));
    }

    #[test]
    fn fingerprints_compile() {
        assert_eq!(FRAMEWORK_REGEXES.len(), FRAMEWORK_FINGERPRINTS.len());
    }

    #[test]
    fn versioned_dependency_ignores_emails() {
        assert!(!RE_VERSIONED_DEPENDENCY.is_match("mail me at dev@example.com"));
        assert!(RE_VERSIONED_DEPENDENCY.is_match("install react@18.2.0"));
    }
}
