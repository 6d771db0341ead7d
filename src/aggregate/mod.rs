//! The single shared reduction from both engines' outputs to one status.
//!
//! Field verdicts (ok/warning/error) and compliance severities
//! (advisory/critical) stay separate vocabularies; this is the only place
//! they meet.

use crate::compliance::{ComplianceResult, Severity};
use crate::validation::{ValidationResult, VerdictKind};
use serde::{Deserialize, Serialize};

/// The overall status of one circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    /// Nothing was tested and nothing was flagged.
    Incomplete,
    Ok,
    Warning,
    Error,
}

/// How a record with no verdicts and no warnings aggregates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UntestedPolicy {
    /// Report `Incomplete`, so an untested circuit never reads as a pass.
    #[default]
    Incomplete,
    /// Report `Ok`.
    TreatAsOk,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationPolicy {
    pub untested: UntestedPolicy,
}

/// Derives the overall status.
///
/// Precedence: any validation `error`, then any `critical` warning, give
/// `Error`; any validation `warning` or `advisory` warning gives `Warning`;
/// otherwise `Ok`, or `Incomplete` for an untested record under the
/// default policy.
pub fn overall_status(
    validation: &ValidationResult,
    compliance: &ComplianceResult,
    policy: &AggregationPolicy,
) -> OverallStatus {
    let worst_verdict = validation.worst();
    let worst_warning = compliance.warnings.iter().map(|w| w.severity).max();

    if worst_verdict == Some(VerdictKind::Error) || worst_warning == Some(Severity::Critical) {
        return OverallStatus::Error;
    }
    if worst_verdict == Some(VerdictKind::Warning) || worst_warning == Some(Severity::Advisory) {
        return OverallStatus::Warning;
    }
    match (validation.is_empty(), policy.untested) {
        (true, UntestedPolicy::Incomplete) => OverallStatus::Incomplete,
        _ => OverallStatus::Ok,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::ComplianceWarning;
    use crate::record::MeasurementField;
    use crate::validation::Verdict;
    use rstest::rstest;
    use smallvec::smallvec;

    fn validation(kinds: &[(MeasurementField, VerdictKind)]) -> ValidationResult {
        let mut result = ValidationResult::new();
        for &(field, kind) in kinds {
            let verdict = match kind {
                VerdictKind::Ok => Verdict::ok("ok"),
                VerdictKind::Warning => Verdict::warning("warning"),
                VerdictKind::Error => Verdict::error("error"),
            };
            result.insert(verdict.at(field));
        }
        result
    }

    fn compliance(severity: Option<Severity>) -> ComplianceResult {
        match severity {
            None => ComplianceResult::compliant(),
            Some(severity) => ComplianceResult::from_warnings(smallvec![ComplianceWarning {
                rule_id: "rule".into(),
                severity,
                message: "m".into(),
                regulation_reference: "r".into(),
            }]),
        }
    }

    const ZS: MeasurementField = MeasurementField::Zs;

    #[rstest]
    #[case(&[(ZS, VerdictKind::Error)], None, OverallStatus::Error)]
    #[case(&[(ZS, VerdictKind::Error)], Some(Severity::Advisory), OverallStatus::Error)]
    #[case(&[(ZS, VerdictKind::Ok)], Some(Severity::Critical), OverallStatus::Error)]
    #[case(&[(ZS, VerdictKind::Warning)], None, OverallStatus::Warning)]
    #[case(&[(ZS, VerdictKind::Ok)], Some(Severity::Advisory), OverallStatus::Warning)]
    #[case(&[(ZS, VerdictKind::Ok)], None, OverallStatus::Ok)]
    #[case(&[], Some(Severity::Critical), OverallStatus::Error)]
    #[case(&[], Some(Severity::Advisory), OverallStatus::Warning)]
    #[case(&[], None, OverallStatus::Incomplete)]
    fn test_precedence(
        #[case] verdicts: &[(MeasurementField, VerdictKind)],
        #[case] warning: Option<Severity>,
        #[case] expected: OverallStatus,
    ) {
        let status = overall_status(&validation(verdicts), &compliance(warning), &AggregationPolicy::default());
        assert_eq!(status, expected);
    }

    #[test]
    fn test_untested_can_be_treated_as_ok() {
        let policy = AggregationPolicy { untested: UntestedPolicy::TreatAsOk };
        assert_eq!(overall_status(&validation(&[]), &compliance(None), &policy), OverallStatus::Ok);
    }

    #[test]
    fn test_policy_deserialises_with_default() {
        let policy: AggregationPolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(policy.untested, UntestedPolicy::Incomplete);
        let policy: AggregationPolicy = serde_json::from_str(r#"{"untested":"treat_as_ok"}"#).unwrap();
        assert_eq!(policy.untested, UntestedPolicy::TreatAsOk);
    }
}
