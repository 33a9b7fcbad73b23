//! Framework family detection.

use std::collections::BTreeSet;

use crate::extract::ParsedDocument;
use crate::manifest::ProjectManifest;

/// Framework family → packages whose presence identifies it.
pub const FRAMEWORK_PACKAGES: &[(&str, &[&str])] = &[
    ("react", &["react"]),
    ("next", &["next"]),
    ("vue", &["vue"]),
    ("angular", &["@angular/core"]),
    ("svelte", &["svelte", "@sveltejs/kit"]),
    ("express", &["express"]),
];

/// Families installed according to the root manifest.
pub fn frameworks_from_manifest(manifest: &ProjectManifest) -> BTreeSet<String> {
    let installed = manifest.root_dependencies();
    FRAMEWORK_PACKAGES
        .iter()
        .filter(|(_, packages)| packages.iter().any(|p| installed.contains(*p)))
        .map(|(family, _)| family.to_string())
        .collect()
}

/// Families to check a document against.
///
/// With a manifest the installed families are authoritative. Without one,
/// the families fingerprinted in the document itself are used.
pub fn detect_frameworks(manifest: &ProjectManifest, doc: &ParsedDocument) -> BTreeSet<String> {
    if manifest.exists() {
        frameworks_from_manifest(manifest)
    } else {
        doc.mentioned_frameworks.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn families_come_from_dependencies() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{ "dependencies": { "@angular/core": "^17", "express": "^4" } }"#,
        )
        .unwrap();
        let manifest = ProjectManifest::load(temp.path());

        let families = detect_frameworks(&manifest, &extract("Uses React hooks."));

        assert_eq!(
            families.into_iter().collect::<Vec<_>>(),
            vec!["angular", "express"]
        );
    }

    #[test]
    fn falls_back_to_fingerprints_without_manifest() {
        let doc = extract("Components are `.vue` single-file components.");
        let families = detect_frameworks(&ProjectManifest::absent(), &doc);

        assert!(families.contains("vue"));
    }
}
