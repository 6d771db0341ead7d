//! Runs both engines and the aggregation for one circuit or a whole schedule.
use crate::aggregate::{overall_status, AggregationPolicy, OverallStatus};
use crate::compliance::{ComplianceResult, RegulationComplianceChecker};
use crate::record::CircuitRecord;
use crate::thresholds::ThresholdTable;
use crate::validation::{FieldValidator, ValidationResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Everything known about one circuit after assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitAssessment {
    pub id: String,
    pub validation: ValidationResult,
    pub compliance: ComplianceResult,
    pub status: OverallStatus,
}

/// Both engines sharing one threshold table, plus the aggregation policy.
#[derive(Debug, Clone)]
pub struct CircuitAssessor {
    validator: FieldValidator,
    checker: RegulationComplianceChecker,
    policy: AggregationPolicy,
}

impl Default for CircuitAssessor {
    fn default() -> Self {
        Self::new(Arc::new(ThresholdTable::default()))
    }
}

impl CircuitAssessor {
    pub fn new(thresholds: Arc<ThresholdTable>) -> Self {
        Self {
            validator: FieldValidator::new(Arc::clone(&thresholds)),
            checker: RegulationComplianceChecker::new(thresholds),
            policy: AggregationPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: AggregationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn validator(&self) -> &FieldValidator {
        &self.validator
    }

    pub fn checker(&self) -> &RegulationComplianceChecker {
        &self.checker
    }

    pub fn policy(&self) -> &AggregationPolicy {
        &self.policy
    }

    pub fn assess(&self, record: &CircuitRecord) -> CircuitAssessment {
        let validation = self.validator.validate(record);
        let compliance = self.checker.check(record);
        let status = overall_status(&validation, &compliance, &self.policy);
        CircuitAssessment { id: record.id.clone(), validation, compliance, status }
    }

    /// Assesses every record in parallel. Output order matches input order.
    pub fn assess_schedule(&self, records: &[CircuitRecord]) -> Vec<CircuitAssessment> {
        records.par_iter().map(|r| self.assess(r)).collect()
    }
}
