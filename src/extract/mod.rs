//! Text-to-facts extraction.
//!
//! [`extract`] turns the raw text of a context document into a
//! [`ParsedDocument`]: its lines, its heading-delimited sections, and the
//! sets of paths, scripts, dependencies and framework families it mentions.
//!
//! Extraction is pure pattern matching. It never fails; a document with no
//! recognizable facts simply yields empty sets.
//!
//! # Example
//!
//! ```
//! use ctxlint::extract::extract;
//!
//! let doc = extract("# Setup\nRun `npm run dev` and edit `./src/app.ts`.\n");
//! assert!(doc.mentioned_scripts.contains("dev"));
//! assert!(doc.mentioned_paths.contains("./src/app.ts"));
//! assert_eq!(doc.sections[0].title, "Setup");
//! ```

pub mod patterns;

use std::collections::BTreeSet;

use regex::Regex;
use serde::Serialize;

use patterns::{
    DEPENDENCY_ALIASES, FRAMEWORK_REGEXES, NEGATION_PHRASES, PATH_PATTERNS, RE_HEADING,
    RE_KNOWN_DEPENDENCY, RE_VERSIONED_DEPENDENCY, SCRIPT_PATTERNS, TRAILING_PUNCTUATION,
};

/// A heading-delimited range of lines.
///
/// `start_line` is the heading line itself; both bounds are 0-based and inclusive.
/// Text before the first heading forms an untitled level-0 section, so the
/// sections of a non-empty document cover every line exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub level: u8,
    pub start_line: usize,
    pub end_line: usize,
}

/// Immutable snapshot of one context document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Full text as read.
    pub raw_content: String,
    /// Lines in order; index `i` is line `i + 1` for humans.
    pub lines: Vec<String>,
    /// Sections in document order.
    pub sections: Vec<Section>,
    pub mentioned_paths: BTreeSet<String>,
    pub mentioned_scripts: BTreeSet<String>,
    pub mentioned_dependencies: BTreeSet<String>,
    pub mentioned_frameworks: BTreeSet<String>,
}

impl ParsedDocument {
    /// First 1-based line containing `needle`.
    pub fn find_line(&self, needle: &str) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        self.lines
            .iter()
            .position(|line| line.contains(needle))
            .map(|i| i + 1)
    }

    /// First 1-based line naming the package `name` as a whole token,
    /// ignoring case. A line where it is pinned (`name@`) or closes a code
    /// span wins over a bare prose mention.
    pub fn find_package_line(&self, name: &str) -> Option<usize> {
        if name.is_empty() {
            return None;
        }
        let name = regex::escape(name);
        let pinned = Regex::new(&format!(r"(?i)(?:^|[^\w@/.\-]){}[@`]", name)).ok()?;
        let word = Regex::new(&format!(r"(?i)(?:^|[^\w@/.\-]){}(?:$|[^\w/\-])", name)).ok()?;
        self.find_line_matching(&pinned)
            .or_else(|| self.find_line_matching(&word))
    }

    /// First 1-based line matched by `re`.
    pub fn find_line_matching(&self, re: &Regex) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| re.is_match(line))
            .map(|i| i + 1)
    }

    /// Text of a 1-based line.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        line.checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .map(String::as_str)
    }

    /// Whether any section title contains `keyword` (case-insensitive).
    pub fn has_section_titled(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.sections
            .iter()
            .any(|s| s.title.to_lowercase().contains(&keyword))
    }
}

/// Extract facts from raw document text.
pub fn extract(text: &str) -> ParsedDocument {
    let lines: Vec<String> = text.lines().map(str::to_string).collect();

    ParsedDocument {
        raw_content: text.to_string(),
        sections: parse_sections(&lines),
        mentioned_paths: extract_paths(&lines),
        mentioned_scripts: extract_scripts(text),
        mentioned_dependencies: extract_dependencies(text),
        mentioned_frameworks: extract_frameworks(text),
        lines,
    }
}

/// Single forward scan over heading lines.
fn parse_sections(lines: &[String]) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let Some(caps) = RE_HEADING.captures(line) else {
            if i == 0 {
                sections.push(Section {
                    title: String::new(),
                    level: 0,
                    start_line: 0,
                    end_line: 0,
                });
            }
            continue;
        };
        if let Some(prev) = sections.last_mut() {
            prev.end_line = i - 1;
        }
        sections.push(Section {
            title: caps[2].trim().to_string(),
            level: caps[1].len() as u8,
            start_line: i,
            end_line: i,
        });
    }

    if let Some(last) = sections.last_mut() {
        last.end_line = lines.len() - 1;
    }

    sections
}

fn strip_trailing_punctuation(token: &str) -> &str {
    token.trim_end_matches(TRAILING_PUNCTUATION)
}

fn is_negated(line: &str) -> bool {
    let lower = line.to_lowercase();
    NEGATION_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

fn looks_like_path(candidate: &str) -> bool {
    candidate.contains('/') || candidate.starts_with("./")
}

fn extract_paths(lines: &[String]) -> BTreeSet<String> {
    let mut paths = BTreeSet::new();

    for line in lines {
        if is_negated(line) {
            continue;
        }
        for re in PATH_PATTERNS {
            for caps in re.captures_iter(line) {
                let candidate = strip_trailing_punctuation(&caps[1]);
                if !candidate.is_empty() && looks_like_path(candidate) {
                    paths.insert(candidate.to_string());
                }
            }
        }
    }

    paths
}

fn extract_scripts(text: &str) -> BTreeSet<String> {
    let mut scripts = BTreeSet::new();

    for (re, excluded) in SCRIPT_PATTERNS {
        for caps in re.captures_iter(text) {
            let name = strip_trailing_punctuation(&caps[1]);
            if name.is_empty() || excluded.contains(&name) {
                continue;
            }
            scripts.insert(name.to_string());
        }
    }

    scripts
}

fn extract_dependencies(text: &str) -> BTreeSet<String> {
    let mut deps = BTreeSet::new();

    for caps in RE_VERSIONED_DEPENDENCY.captures_iter(text) {
        let name = strip_trailing_punctuation(&caps[1]).to_lowercase();
        if !name.is_empty() {
            deps.insert(name);
        }
    }

    for caps in RE_KNOWN_DEPENDENCY.captures_iter(text) {
        let spelled = caps[1].to_lowercase();
        let name = DEPENDENCY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == spelled)
            .map(|(_, name)| name.to_string())
            .unwrap_or(spelled);
        deps.insert(name);
    }

    deps
}

fn extract_frameworks(text: &str) -> BTreeSet<String> {
    FRAMEWORK_REGEXES
        .iter()
        .filter(|(_, patterns)| patterns.iter().any(|re| re.is_match(text)))
        .map(|(family, _)| family.to_string())
        .collect()
}
