//! Document templates.
//!
//! Section templates back the `AddSection` remediation for the recommended
//! sections, and [`scaffold`] renders a fresh context document for
//! `ctxlint init` from what the project manifest declares.

use std::path::Path;

use crate::detection::PackageManager;
use crate::lint::checkers::CONVENTIONAL_DIRS;
use crate::manifest::ProjectManifest;

/// Scripts promoted to their own section when the manifest declares them.
const TEST_SCRIPTS: &[&str] = &["test", "test:unit", "vitest", "jest"];
const BUILD_SCRIPTS: &[&str] = &["build", "compile"];

/// Rules that have a section template.
pub const SECTION_RULES: &[&str] = &[
    "missing-setup-section",
    "missing-test-section",
    "missing-build-section",
];

/// Markdown for the section a `missing-*-section` rule asks for.
///
/// Returns `None` for rules without a template.
pub fn section_template(rule: &str, pm: PackageManager) -> Option<String> {
    let section = match rule {
        "missing-setup-section" => format!(
            "## Setup\n\nInstall dependencies before running anything else:\n\n```bash\n{} install\n```\n",
            pm
        ),
        "missing-test-section" => format!(
            "## Testing\n\nRun the test suite before committing:\n\n```bash\n{}\n```\n",
            run_command(pm, "test")
        ),
        "missing-build-section" => format!(
            "## Build\n\nProduce a production build with:\n\n```bash\n{}\n```\n",
            run_command(pm, "build")
        ),
        _ => return None,
    };
    Some(section)
}

/// Invocation of a manifest script.
pub fn run_command(pm: PackageManager, script: &str) -> String {
    format!("{} run {}", pm, script)
}

/// Render a starter context document for the project at `project_root`.
pub fn scaffold(project_root: &Path, manifest: &ProjectManifest) -> String {
    let pm = PackageManager::detect_from_lockfiles(project_root).unwrap_or(PackageManager::Npm);
    let name = manifest
        .root
        .as_ref()
        .and_then(|root| root.name.clone())
        .or_else(|| {
            project_root
                .file_name()
                .and_then(|n| n.to_str())
                .map(String::from)
        })
        .unwrap_or_else(|| "Project".to_string());
    let scripts = manifest.all_scripts();

    let mut out = format!(
        "# {}\n\n## Overview\n\nGuidance for coding agents working in this repository. \
         Keep it in sync with `package.json` and re-run `ctxlint` after editing.\n\n",
        name
    );

    out.push_str(&format!(
        "## Setup\n\nInstall dependencies:\n\n```bash\n{} install\n```\n\n",
        pm
    ));

    out.push_str("## Testing\n\n");
    match TEST_SCRIPTS.iter().find(|s| scripts.contains(**s)) {
        Some(script) => out.push_str(&format!(
            "Run the test suite before committing:\n\n```bash\n{}\n```\n\n",
            run_command(pm, script)
        )),
        None => out.push_str(
            "No test script is declared yet. Add one to `package.json` and document it here.\n\n",
        ),
    }

    if let Some(script) = BUILD_SCRIPTS.iter().find(|s| scripts.contains(**s)) {
        out.push_str(&format!(
            "## Build\n\n```bash\n{}\n```\n\n",
            run_command(pm, script)
        ));
    }

    if !scripts.is_empty() {
        out.push_str("## Scripts\n\n");
        for script in &scripts {
            out.push_str(&format!("- `{}`\n", run_command(pm, script)));
        }
        out.push('\n');
    }

    let dirs: Vec<&str> = CONVENTIONAL_DIRS
        .iter()
        .copied()
        .filter(|dir| project_root.join(dir).is_dir())
        .collect();
    if !dirs.is_empty() {
        out.push_str("## Project Structure\n\n");
        for dir in dirs {
            out.push_str(&format!("- `./{}/`\n", dir));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn section_templates_exist_for_recommended_sections() {
        for rule in SECTION_RULES {
            let section = section_template(rule, PackageManager::Pnpm).unwrap();
            assert!(section.starts_with("## "));
        }
        assert!(section_template("missing-path", PackageManager::Npm).is_none());
    }

    #[test]
    fn section_templates_use_the_package_manager() {
        let setup = section_template("missing-setup-section", PackageManager::Yarn).unwrap();
        assert!(setup.contains("yarn install"));

        let test = section_template("missing-test-section", PackageManager::Bun).unwrap();
        assert!(test.contains("bun run test"));
    }

    #[test]
    fn scaffold_lists_scripts_and_existing_dirs() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{"name": "shop", "scripts": {"test": "vitest", "build": "vite build", "lint": "eslint ."}}"#,
        )
        .unwrap();
        fs::write(temp.path().join("pnpm-lock.yaml"), "").unwrap();
        fs::create_dir(temp.path().join("src")).unwrap();

        let manifest = ProjectManifest::load(temp.path());
        let doc = scaffold(temp.path(), &manifest);

        assert!(doc.starts_with("# shop\n"));
        assert!(doc.contains("pnpm install"));
        assert!(doc.contains("pnpm run test"));
        assert!(doc.contains("## Build"));
        assert!(doc.contains("- `pnpm run lint`"));
        assert!(doc.contains("`./src/`"));
        assert!(!doc.contains("`./lib/`"));

        let parsed = extract(&doc);
        assert!(parsed.mentioned_scripts.contains("lint"));
    }

    #[test]
    fn scaffold_without_manifest() {
        let temp = TempDir::new().unwrap();

        let doc = scaffold(temp.path(), &ProjectManifest::absent());

        assert!(doc.contains("npm install"));
        assert!(doc.contains("No test script is declared yet"));
        assert!(!doc.contains("## Scripts"));
        assert!(doc.len() > 100);
    }
}
