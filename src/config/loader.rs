//! Configuration file discovery and loading.
//!
//! The sidecar is optional. A missing file and a malformed file both yield
//! [`Config::default()`]; the latter is logged so users can spot typos.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;

/// Recognized sidecar names, first existing wins.
pub const CONFIG_FILE_NAMES: &[&str] = &[".ctxlintrc.json", "ctxlint.config.json"];

/// Find the sidecar configuration file under `project_root`.
pub fn find_config_file(project_root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

/// Parse configuration text. Returns `None` when the JSON is malformed.
pub fn parse_config(content: &str) -> Option<Config> {
    match serde_json::from_str::<Config>(content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::debug!("Config parse error: {}", e);
            None
        }
    }
}

/// Load configuration for a project, degrading to defaults.
pub fn load_config(project_root: &Path) -> Config {
    let Some(path) = find_config_file(project_root) else {
        tracing::debug!("No config file under {}", project_root.display());
        return Config::default();
    };

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Ignoring unreadable config {}: {}", path.display(), e);
            return Config::default();
        }
    };

    parse_config(&content).unwrap_or_else(|| {
        tracing::warn!("Ignoring malformed config {}", path.display());
        Config::default()
    })
}

/// JSON Schema of the configuration file.
pub fn config_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(Config);
    serde_json::to_value(&schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleLevel;
    use tempfile::TempDir;

    #[test]
    fn missing_config_yields_default() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_config(temp.path()), Config::default());
        assert!(find_config_file(temp.path()).is_none());
    }

    #[test]
    fn loads_primary_config_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".ctxlintrc.json"),
            r#"{ "rules": { "too-short": "off" } }"#,
        )
        .unwrap();

        let config = load_config(temp.path());
        assert_eq!(config.rule_level("too-short"), Some(RuleLevel::Off));
    }

    #[test]
    fn primary_name_wins_over_alternative() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".ctxlintrc.json"), r#"{ "fail_under": 80 }"#).unwrap();
        fs::write(temp.path().join("ctxlint.config.json"), r#"{ "fail_under": 10 }"#).unwrap();

        assert_eq!(load_config(temp.path()).fail_under, Some(80));
    }

    #[test]
    fn alternative_name_is_found() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("ctxlint.config.json"),
            r#"{ "ignore_paths": ["tmp/"] }"#,
        )
        .unwrap();

        assert_eq!(load_config(temp.path()).ignore_paths, vec!["tmp/"]);
    }

    #[test]
    fn malformed_config_yields_default() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".ctxlintrc.json"), "{ not json").unwrap();

        assert_eq!(load_config(temp.path()), Config::default());
    }

    #[test]
    fn wrong_types_yield_default() {
        assert!(parse_config(r#"{ "required_sections": "Architecture" }"#).is_none());
    }

    #[test]
    fn schema_describes_config_keys() {
        let schema = config_schema();
        let text = schema.to_string();
        assert!(text.contains("required_sections"));
        assert!(text.contains("ignore_paths"));
    }
}
