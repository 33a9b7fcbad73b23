//! Rule identifiers and severities.
//!
//! - [`RuleId`] - Stable identifier carried by every [`Issue`](super::Issue)
//! - [`Severity`] - Severity level for issues (Info, Warn, Error)

use serde::{Deserialize, Serialize};

/// Stable identifier for a finding kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for RuleId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Severity level for issues.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational, low penalty.
    Info,
    /// Should be addressed.
    Warn,
    /// The document asserts something false.
    Error,
}

impl Severity {
    /// Score penalty applied per issue of this severity.
    pub fn penalty(self) -> u32 {
        match self {
            Severity::Error => 15,
            Severity::Warn => 7,
            Severity::Info => 2,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warn => write!(f, "warn"),
            Severity::Error => write!(f, "error"),
        }
    }
}
