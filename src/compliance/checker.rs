//! The regulation compliance checker: runs the ordered rule list against
//! one record.
use super::result::{ComplianceResult, Warnings};
use super::rule::RegulationRule;
use super::rules::{afdd, cable, rcd};
use super::warning::{ComplianceWarning, Severity};
use crate::record::CircuitRecord;
use crate::thresholds::ThresholdTable;
use std::sync::Arc;
use tracing::trace;

/// Declaration order is the order warnings appear in a `ComplianceResult`.
const REGULATION_RULES: &[RegulationRule] = &[
    RegulationRule {
        id: "rcd.special_location.missing",
        severity: Severity::Critical,
        evaluate: rcd::check_special_location_missing,
    },
    RegulationRule {
        id: "rcd.special_location.rating",
        severity: Severity::Critical,
        evaluate: rcd::check_special_location_rating,
    },
    RegulationRule {
        id: "rcd.socket.rating",
        severity: Severity::Critical,
        evaluate: rcd::check_socket_rating,
    },
    RegulationRule {
        id: "rcd.socket.missing",
        severity: Severity::Advisory,
        evaluate: rcd::check_socket_missing,
    },
    RegulationRule {
        id: "afdd.high_risk.not_tested",
        severity: Severity::Advisory,
        evaluate: afdd::check_afdd_high_risk,
    },
    RegulationRule {
        id: "cable.device_coordination",
        severity: Severity::Advisory,
        evaluate: cable::check_device_coordination,
    },
    RegulationRule {
        id: "rcd.type_ac.socket",
        severity: Severity::Advisory,
        evaluate: rcd::check_type_ac_socket,
    },
];

/// Evaluates named wiring regulations against a circuit's configuration.
///
/// Independent of the field validator: it never looks at whether a
/// measurement passed, only at what the record says was installed and where.
#[derive(Debug, Clone)]
pub struct RegulationComplianceChecker {
    thresholds: Arc<ThresholdTable>,
}

impl RegulationComplianceChecker {
    pub fn new(thresholds: Arc<ThresholdTable>) -> Self {
        Self { thresholds }
    }

    /// The ids of every rule, in evaluation order.
    pub fn rule_ids() -> impl Iterator<Item = &'static str> {
        REGULATION_RULES.iter().map(|r| r.id)
    }

    /// Runs every rule. Total and deterministic; a rule that lacks data
    /// abstains and never affects the others.
    pub fn check(&self, record: &CircuitRecord) -> ComplianceResult {
        let table = self.thresholds.as_ref();
        let warnings: Warnings = REGULATION_RULES
            .iter()
            .filter_map(|rule| {
                let finding = (rule.evaluate)(record, table)?;
                trace!(circuit = %record.id, rule = rule.id, severity = ?rule.severity, "regulation rule fired");
                Some(ComplianceWarning {
                    rule_id: rule.id.to_string(),
                    severity: rule.severity,
                    message: finding.message,
                    regulation_reference: finding.regulation_reference.to_string(),
                })
            })
            .collect();
        ComplianceResult::from_warnings(warnings)
    }
}
