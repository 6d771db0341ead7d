//! The field validator: runs every measurement rule against one record.
use super::readings::Readings;
use super::result::ValidationResult;
use super::rules::{continuity, insulation, numeric, outcome, rcd, ring, zs};
use super::verdict::FieldVerdict;
use crate::record::{CircuitRecord, MeasurementField};
use crate::thresholds::ThresholdTable;
use std::sync::Arc;

/// Judges each measurement on a record against the threshold table.
///
/// Rules are independent of each other: every rule runs on every call, each
/// either abstains or judges one field, and when two rules judge the same
/// field the more severe verdict is kept. Fields no rule judges are absent
/// from the result, which is how "untested" is represented.
#[derive(Debug, Clone)]
pub struct FieldValidator {
    thresholds: Arc<ThresholdTable>,
}

impl FieldValidator {
    pub fn new(thresholds: Arc<ThresholdTable>) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }

    /// Validates one record. Total: never fails, whatever the record holds.
    pub fn validate(&self, record: &CircuitRecord) -> ValidationResult {
        let table = self.thresholds.as_ref();
        let readings = Readings::parse(record);
        let mut result = ValidationResult::new();

        for verdict in numeric::validate_numeric(&readings) {
            result.insert(verdict);
        }

        let verdicts: [Option<FieldVerdict>; 10] = [
            zs::validate_zs(record, &readings, table),
            insulation::validate_insulation(MeasurementField::InsulationLiveNeutral, record, &readings, table),
            insulation::validate_insulation(MeasurementField::InsulationLiveEarth, record, &readings, table),
            ring::validate_ring_ends(record, &readings, table),
            ring::validate_ring_r1r2(record, &readings, table),
            continuity::validate_r1r2_against_zs(&readings),
            outcome::validate_polarity(record),
            outcome::validate_functional_test(MeasurementField::RcdTestButton, record),
            outcome::validate_functional_test(MeasurementField::AfddTest, record),
            rcd::validate_rcd_trip_time(record, &readings, table),
        ];
        for verdict in verdicts.into_iter().flatten() {
            result.insert(verdict);
        }

        result
    }
}
