//! Package manager detection.
//!
//! The lint checks recognize families from invocation phrases in document
//! text, since they care about which tool a document *tells* readers to use.
//! Scaffolding a new document instead looks at the lockfiles on disk.

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// A JavaScript package manager family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Pnpm,
    Yarn,
    Bun,
    Npm,
}

impl PackageManager {
    /// All families in detection order.
    pub const ALL: [PackageManager; 4] = [
        PackageManager::Pnpm,
        PackageManager::Yarn,
        PackageManager::Bun,
        PackageManager::Npm,
    ];

    /// Executable name.
    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
            PackageManager::Npm => "npm",
        }
    }

    fn pattern(&self) -> &'static Regex {
        let index = match self {
            PackageManager::Pnpm => 0,
            PackageManager::Yarn => 1,
            PackageManager::Bun => 2,
            PackageManager::Npm => 3,
        };
        &INVOCATION_PATTERNS[index]
    }

    /// Whether `text` contains an invocation of this family.
    pub fn is_invoked_in(&self, text: &str) -> bool {
        self.pattern().is_match(text)
    }

    /// First family, in [`PackageManager::ALL`] order, invoked in `text`.
    pub fn detect_in_text(text: &str) -> Option<PackageManager> {
        Self::ALL.into_iter().find(|pm| pm.is_invoked_in(text))
    }

    /// Family owning the first lockfile found in `project_root`.
    pub fn detect_from_lockfiles(project_root: &Path) -> Option<PackageManager> {
        LOCKFILES
            .iter()
            .find(|(file, _)| project_root.join(file).exists())
            .map(|(_, pm)| *pm)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const LOCKFILES: &[(&str, PackageManager)] = &[
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("bun.lockb", PackageManager::Bun),
    ("bun.lock", PackageManager::Bun),
    ("package-lock.json", PackageManager::Npm),
];

// An invocation is the executable followed by a subcommand, either at the
// start of a line (shell blocks, list items) or opening a code span.
static INVOCATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    PackageManager::ALL
        .iter()
        .map(|pm| {
            let pattern = format!(
                r"(?m)(?:^\s*(?:[-*>]\s+)?|`)(?:\$\s*)?{}\s+[a-z]",
                pm.name()
            );
            Regex::new(&pattern).unwrap()
        })
        .collect()
});
