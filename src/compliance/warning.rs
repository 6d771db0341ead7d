//! Defines the warning produced when a regulation rule fires.
use serde::{Deserialize, Serialize};

/// How a regulation finding affects compliance.
///
/// Ordered so that `max()` over warnings yields the most serious one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Advice for the inspector; never affects `is_compliant`.
    Advisory,
    /// A breach of the regulations; the circuit is non-compliant.
    Critical,
}

/// One triggered regulation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceWarning {
    /// Stable identifier of the rule that fired, e.g. `rcd.socket.rating`.
    pub rule_id: String,
    pub severity: Severity,
    pub message: String,
    pub regulation_reference: String,
}

impl ComplianceWarning {
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}
