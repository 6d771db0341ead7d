//! The outcome of one compliance check.
use super::warning::{ComplianceWarning, Severity};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Warnings in rule declaration order. Most circuits trigger none or one.
pub type Warnings = SmallVec<[ComplianceWarning; 4]>;

/// The compliance summary for one circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    /// Only advisory warnings.
    Advisory,
    /// At least one critical warning.
    NonCompliant,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResult {
    /// True iff no warning is critical.
    pub is_compliant: bool,
    pub warnings: Warnings,
}

impl ComplianceResult {
    pub fn from_warnings(warnings: Warnings) -> Self {
        let is_compliant = !warnings.iter().any(ComplianceWarning::is_critical);
        Self { is_compliant, warnings }
    }

    pub fn compliant() -> Self {
        Self::from_warnings(Warnings::new())
    }

    pub fn status(&self) -> ComplianceStatus {
        match self.warnings.iter().map(|w| w.severity).max() {
            None => ComplianceStatus::Compliant,
            Some(Severity::Advisory) => ComplianceStatus::Advisory,
            Some(Severity::Critical) => ComplianceStatus::NonCompliant,
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.warnings.iter().filter(|w| w.severity == severity).count()
    }

    pub fn has_critical(&self) -> bool {
        !self.is_compliant
    }

    pub fn rule_ids(&self) -> impl Iterator<Item = &str> {
        self.warnings.iter().map(|w| w.rule_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn warning(id: &str, severity: Severity) -> ComplianceWarning {
        ComplianceWarning {
            rule_id: id.into(),
            severity,
            message: "m".into(),
            regulation_reference: "r".into(),
        }
    }

    #[test]
    fn test_advisory_never_breaks_compliance() {
        let result = ComplianceResult::from_warnings(smallvec![
            warning("a", Severity::Advisory),
            warning("b", Severity::Advisory),
        ]);
        assert!(result.is_compliant);
        assert_eq!(result.status(), ComplianceStatus::Advisory);
        assert_eq!(result.count(Severity::Advisory), 2);
    }

    #[test]
    fn test_one_critical_is_enough() {
        let result = ComplianceResult::from_warnings(smallvec![
            warning("a", Severity::Advisory),
            warning("b", Severity::Critical),
        ]);
        assert!(!result.is_compliant);
        assert_eq!(result.status(), ComplianceStatus::NonCompliant);
        assert_eq!(result.rule_ids().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_serialised_shape() {
        let result = ComplianceResult::from_warnings(smallvec![warning("rcd.socket.rating", Severity::Critical)]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isCompliant"], false);
        assert_eq!(json["warnings"][0]["ruleId"], "rcd.socket.rating");
        assert_eq!(json["warnings"][0]["severity"], "critical");
        assert_eq!(json["warnings"][0]["regulationReference"], "r");
        assert_eq!(ComplianceResult::compliant().status(), ComplianceStatus::Compliant);
    }
}
