//! Project manifest reader.
//!
//! Reads `package.json` at the repository root plus the sub-packages its
//! `workspaces` field declares. Every failure mode (missing file, malformed
//! JSON, unreadable workspace) degrades to "no facts"; nothing here returns
//! an error.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

/// Manifest file name.
pub const MANIFEST_FILE: &str = "package.json";

/// Upper bound on workspace packages read per project.
pub const MAX_WORKSPACE_PACKAGES: usize = 20;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawPackageJson {
    name: Option<String>,
    scripts: BTreeMap<String, Value>,
    dependencies: BTreeMap<String, Value>,
    dev_dependencies: BTreeMap<String, Value>,
    peer_dependencies: BTreeMap<String, Value>,
    workspaces: Option<RawWorkspaces>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawWorkspaces {
    List(Vec<String>),
    Object {
        #[serde(default)]
        packages: Vec<String>,
    },
}

/// One parsed `package.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageManifest {
    /// Directory containing the manifest.
    pub dir: PathBuf,
    pub name: Option<String>,
    /// Script name → command.
    pub scripts: BTreeMap<String, String>,
    pub dependencies: BTreeSet<String>,
    pub dev_dependencies: BTreeSet<String>,
    pub peer_dependencies: BTreeSet<String>,
    /// Declared workspace patterns.
    pub workspaces: Vec<String>,
}

impl PackageManifest {
    /// Read the manifest in `dir`. `None` if absent or malformed.
    pub fn read(dir: &Path) -> Option<Self> {
        let path = dir.join(MANIFEST_FILE);
        let content = fs::read_to_string(&path).ok()?;
        Self::parse(dir, &content)
    }

    /// Parse manifest text belonging to `dir`.
    pub fn parse(dir: &Path, content: &str) -> Option<Self> {
        let raw: RawPackageJson = match serde_json::from_str(content) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!("Ignoring malformed {}: {}", dir.join(MANIFEST_FILE).display(), e);
                return None;
            }
        };

        let workspaces = match raw.workspaces {
            Some(RawWorkspaces::List(list)) => list,
            Some(RawWorkspaces::Object { packages }) => packages,
            None => Vec::new(),
        };

        Some(Self {
            dir: dir.to_path_buf(),
            name: raw.name,
            scripts: raw
                .scripts
                .into_iter()
                .map(|(name, cmd)| {
                    let cmd = cmd.as_str().map(str::to_string).unwrap_or_default();
                    (name, cmd)
                })
                .collect(),
            dependencies: raw.dependencies.into_keys().collect(),
            dev_dependencies: raw.dev_dependencies.into_keys().collect(),
            peer_dependencies: raw.peer_dependencies.into_keys().collect(),
            workspaces,
        })
    }

    /// Union of all three dependency tables.
    pub fn all_dependencies(&self) -> BTreeSet<String> {
        self.dependencies
            .iter()
            .chain(&self.dev_dependencies)
            .chain(&self.peer_dependencies)
            .cloned()
            .collect()
    }
}

/// The root manifest and its workspace packages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectManifest {
    pub root: Option<PackageManifest>,
    pub packages: Vec<PackageManifest>,
}

impl ProjectManifest {
    /// A project without any manifest.
    pub fn absent() -> Self {
        Self::default()
    }

    /// Load the root manifest and up to [`MAX_WORKSPACE_PACKAGES`] sub-packages.
    pub fn load(project_root: &Path) -> Self {
        let Some(root) = PackageManifest::read(project_root) else {
            return Self::absent();
        };

        let packages = workspace_dirs(project_root, &root.workspaces)
            .into_iter()
            .filter_map(|dir| PackageManifest::read(&dir))
            .collect::<Vec<_>>();

        tracing::debug!(
            "Loaded manifest with {} scripts and {} workspace package(s)",
            root.scripts.len(),
            packages.len()
        );

        Self {
            root: Some(root),
            packages,
        }
    }

    /// Whether a root manifest was found.
    pub fn exists(&self) -> bool {
        self.root.is_some()
    }

    /// Union of script names across the root and every workspace package.
    pub fn all_scripts(&self) -> BTreeSet<String> {
        self.root
            .iter()
            .chain(&self.packages)
            .flat_map(|m| m.scripts.keys().cloned())
            .collect()
    }

    /// Union of the root manifest's dependency tables.
    pub fn root_dependencies(&self) -> BTreeSet<String> {
        self.root
            .as_ref()
            .map(PackageManifest::all_dependencies)
            .unwrap_or_default()
    }
}

/// Expand workspace patterns into package directories, capped.
fn workspace_dirs(project_root: &Path, patterns: &[String]) -> Vec<PathBuf> {
    let mut dirs: BTreeSet<PathBuf> = BTreeSet::new();

    for pattern in patterns {
        if pattern.starts_with('!') {
            continue;
        }
        let full = project_root.join(pattern.trim_start_matches("./"));
        let Ok(entries) = glob::glob(&full.to_string_lossy()) else {
            tracing::debug!("Invalid workspace pattern: {}", pattern);
            continue;
        };
        for dir in entries.flatten() {
            if dir.join(MANIFEST_FILE).is_file() {
                dirs.insert(dir);
            }
        }
    }

    dirs.into_iter().take(MAX_WORKSPACE_PACKAGES).collect()
}
