//! Configuration schema definitions.
//!
//! The sidecar file is plain JSON; every key is optional.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lint::Severity;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Per-rule severity overrides, keyed by rule id.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, RuleLevel>,

    /// Section names that must appear as a heading.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required_sections: Vec<String>,

    /// Path substrings excluded from the filesystem check.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignore_paths: Vec<String>,

    /// Minimum acceptable freshness score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_under: Option<u8>,
}

/// Severity override for a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Error,
    Warn,
    Info,
    /// Drop the rule's issues entirely.
    Off,
}

impl RuleLevel {
    /// The severity this level maps to, or `None` for `off`.
    pub fn severity(self) -> Option<Severity> {
        match self {
            RuleLevel::Error => Some(Severity::Error),
            RuleLevel::Warn => Some(Severity::Warn),
            RuleLevel::Info => Some(Severity::Info),
            RuleLevel::Off => None,
        }
    }
}

impl Config {
    /// Configured level for a rule, if any.
    pub fn rule_level(&self, rule: &str) -> Option<RuleLevel> {
        self.rules.get(rule).copied()
    }

    /// Severity for a rule, falling back to `default` when unset.
    ///
    /// A rule set to `off` keeps its default here; it is removed later
    /// when overrides are applied to the check result.
    pub fn severity_for(&self, rule: &str, default: Severity) -> Severity {
        self.rule_level(rule)
            .and_then(RuleLevel::severity)
            .unwrap_or(default)
    }

    /// Whether a mentioned path matches an ignore substring.
    pub fn is_ignored_path(&self, path: &str) -> bool {
        self.ignore_paths
            .iter()
            .any(|needle| !needle.is_empty() && path.contains(needle.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_empty() {
        let config = Config::default();
        assert!(config.rules.is_empty());
        assert!(config.required_sections.is_empty());
        assert!(config.ignore_paths.is_empty());
        assert!(config.fail_under.is_none());
    }

    #[test]
    fn parses_full_config() {
        let json = r#"{
            "rules": { "missing-path": "warn", "outdated-year": "off" },
            "required_sections": ["Architecture"],
            "ignore_paths": ["generated/"],
            "fail_under": 70
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.rule_level("missing-path"), Some(RuleLevel::Warn));
        assert_eq!(config.rule_level("outdated-year"), Some(RuleLevel::Off));
        assert_eq!(config.required_sections, vec!["Architecture"]);
        assert_eq!(config.fail_under, Some(70));
    }

    #[test]
    fn severity_for_falls_back_to_default() {
        let mut config = Config::default();
        config.rules.insert("too-short".into(), RuleLevel::Error);
        config.rules.insert("too-long".into(), RuleLevel::Off);

        assert_eq!(config.severity_for("too-short", Severity::Warn), Severity::Error);
        assert_eq!(config.severity_for("too-long", Severity::Info), Severity::Info);
        assert_eq!(config.severity_for("other", Severity::Warn), Severity::Warn);
    }

    #[test]
    fn ignore_paths_match_substrings() {
        let config = Config {
            ignore_paths: vec!["generated/".into(), String::new()],
            ..Default::default()
        };
        assert!(config.is_ignored_path("./src/generated/types.ts"));
        assert!(!config.is_ignored_path("./src/app.ts"));
    }

    #[test]
    fn rule_level_maps_to_severity() {
        assert_eq!(RuleLevel::Warn.severity(), Some(Severity::Warn));
        assert_eq!(RuleLevel::Off.severity(), None);
    }
}
