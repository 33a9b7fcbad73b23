//! Document structure and quality checks.

use std::sync::LazyLock;

use regex::Regex;

use crate::extract::ParsedDocument;
use crate::lint::{CheckContext, CheckResult, Checker, Issue, Severity};

/// A section every context document should have.
#[derive(Debug)]
pub struct RecommendedSection {
    pub rule: &'static str,
    pub name: &'static str,
    /// Matched case-insensitively against section titles.
    pub keywords: &'static [&'static str],
    /// Commands in the body that cover the section without a heading.
    pub content_pattern: &'static str,
    pub severity: Severity,
}

pub const RECOMMENDED_SECTIONS: &[RecommendedSection] = &[
    RecommendedSection {
        rule: "missing-setup-section",
        name: "setup",
        keywords: &[
            "setup",
            "install",
            "getting started",
            "quick start",
            "quickstart",
            "development",
        ],
        content_pattern: r"(?i)\b(?:npm|pnpm|yarn|bun)\s+(?:install|i|ci)\b",
        severity: Severity::Warn,
    },
    RecommendedSection {
        rule: "missing-test-section",
        name: "testing",
        keywords: &["test"],
        content_pattern: r"(?i)\b(?:npm|pnpm|yarn|bun)\s+(?:run\s+)?test\b",
        severity: Severity::Warn,
    },
    RecommendedSection {
        rule: "missing-build-section",
        name: "build",
        keywords: &["build", "deploy", "compile", "release"],
        content_pattern: r"(?i)\b(?:npm|pnpm|yarn|bun)\s+(?:run\s+)?build\b",
        severity: Severity::Info,
    },
];

static RECOMMENDED_CONTENT: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    RECOMMENDED_SECTIONS
        .iter()
        .map(|s| Regex::new(s.content_pattern).unwrap())
        .collect()
});

/// Minimum trimmed length, in characters.
pub const MIN_CONTENT_CHARS: usize = 100;
/// Maximum length, in characters.
pub const MAX_CONTENT_CHARS: usize = 15_000;
/// Unresolved markers tolerated before reporting.
pub const MAX_TODO_MARKERS: usize = 3;
/// Years before this are considered outdated.
pub const CURRENT_YEAR_FLOOR: u32 = 2024;

static RE_TODO_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:TODO|FIXME|XXX|HACK)\b").unwrap());
static RE_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b((?:19|20)\d{2})\b").unwrap());

/// Checks sections and overall document quality.
pub struct StructureChecker;

impl StructureChecker {
    fn check_recommended(result: &mut CheckResult, doc: &ParsedDocument) {
        for (section, content) in RECOMMENDED_SECTIONS.iter().zip(RECOMMENDED_CONTENT.iter()) {
            let present = section.keywords.iter().any(|k| doc.has_section_titled(k))
                || content.is_match(&doc.raw_content);
            if present {
                result.pass();
                continue;
            }
            result.fail(
                Issue::new(
                    section.rule,
                    section.severity,
                    format!("No {} section found", section.name),
                )
                .with_suggestion(format!(
                    "Add a \"{}\" section describing the commands agents should run",
                    title_case(section.name)
                )),
            );
        }
    }

    fn check_required(result: &mut CheckResult, doc: &ParsedDocument, ctx: &CheckContext<'_>) {
        let severity = ctx
            .config
            .severity_for("missing-required-section", Severity::Warn);
        for name in &ctx.config.required_sections {
            if doc.has_section_titled(name) {
                result.pass();
                continue;
            }
            result.fail(
                Issue::new(
                    "missing-required-section",
                    severity,
                    format!("Required section \"{}\" is missing", name),
                )
                .with_suggestion(format!("Add a \"## {}\" heading", name)),
            );
        }
    }

    fn check_length(result: &mut CheckResult, doc: &ParsedDocument) {
        let chars = doc.raw_content.trim().chars().count();

        if chars < MIN_CONTENT_CHARS {
            result.fail(
                Issue::new(
                    "too-short",
                    Severity::Warn,
                    format!("Document is only {} characters long", chars),
                )
                .with_suggestion("Describe setup, layout and conventions in more detail"),
            );
        } else {
            result.pass();
        }

        if chars > MAX_CONTENT_CHARS {
            result.fail(
                Issue::new(
                    "too-long",
                    Severity::Info,
                    format!("Document is {} characters long", chars),
                )
                .with_suggestion("Split rarely needed detail into linked documents"),
            );
        } else {
            result.pass();
        }
    }

    fn check_todos(result: &mut CheckResult, doc: &ParsedDocument) {
        let count = RE_TODO_MARKER.find_iter(&doc.raw_content).count();
        if count > MAX_TODO_MARKERS {
            result.fail(
                Issue::new(
                    "unresolved-todos",
                    Severity::Info,
                    format!("Document contains {} unresolved TODO markers", count),
                )
                .with_suggestion("Resolve or remove TODO, FIXME, XXX and HACK notes")
                .located(doc, doc.find_line_matching(&RE_TODO_MARKER)),
            );
        } else {
            result.pass();
        }
    }

    fn check_years(result: &mut CheckResult, doc: &ParsedDocument) {
        let first_old = doc.lines.iter().enumerate().find_map(|(i, line)| {
            RE_YEAR
                .captures_iter(line)
                .filter_map(|caps| caps[1].parse::<u32>().ok())
                .find(|year| *year < CURRENT_YEAR_FLOOR)
                .map(|year| (i + 1, year))
        });

        match first_old {
            Some((line, year)) => result.fail(
                Issue::new(
                    "outdated-year",
                    Severity::Info,
                    format!("References the year {}", year),
                )
                .with_suggestion("Check whether the surrounding information is still current")
                .located(doc, Some(line)),
            ),
            None => result.pass(),
        }
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Checker for StructureChecker {
    fn name(&self) -> &'static str {
        "structure"
    }

    fn description(&self) -> &'static str {
        "Checks recommended sections, required sections and content quality"
    }

    fn check(&self, doc: &ParsedDocument, ctx: &CheckContext<'_>) -> CheckResult {
        let mut result = CheckResult::new(self.name());

        Self::check_recommended(&mut result, doc);
        Self::check_required(&mut result, doc, ctx);
        Self::check_length(&mut result, doc);
        Self::check_todos(&mut result, doc);
        Self::check_years(&mut result, doc);

        result
    }
}
