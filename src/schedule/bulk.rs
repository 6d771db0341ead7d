//! A schedule of circuits and the bulk "apply to all" edit.
use super::assessor::{CircuitAssessment, CircuitAssessor};
use crate::record::{CircuitRecord, MeasurementField};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The circuits of one distribution board, in schedule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    pub records: Vec<CircuitRecord>,
}

impl Schedule {
    pub fn new(records: Vec<CircuitRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CircuitRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn assess(&self, assessor: &CircuitAssessor) -> Vec<CircuitAssessment> {
        assessor.assess_schedule(&self.records)
    }

    /// Copies one raw value into `field` on every circuit, then re-assesses
    /// every circuit so no result from before the edit survives.
    ///
    /// A blank value clears the field.
    pub fn bulk_update(
        &mut self,
        field: MeasurementField,
        value: &str,
        assessor: &CircuitAssessor,
    ) -> Vec<CircuitAssessment> {
        let value = value.trim();
        let new_value = (!value.is_empty()).then(|| value.to_string());
        for record in &mut self.records {
            *field.slot_mut(record) = new_value.clone();
        }
        debug!(field = %field, circuits = self.records.len(), "bulk update applied");
        self.assess(assessor)
    }
}
