use crate::aggregate::{AggregationPolicy, UntestedPolicy};
use crate::display::report;
use crate::record::{CircuitRecord, MeasurementField};
use crate::schedule::{CircuitAssessor, Schedule};
use crate::thresholds::ThresholdTable;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use serde::Serialize;
use std::sync::Arc;

fn decode_record(json: &str) -> PyResult<CircuitRecord> {
    CircuitRecord::from_json(json).map_err(|e| PyValueError::new_err(e.to_string()))
}

fn encode<T: Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// JSON in, JSON out facade over both engines.
#[pyclass(name = "_Assessor")]
#[derive(Debug, Clone, Default)]
pub struct PyAssessor {
    inner: CircuitAssessor,
}

#[pymethods]
impl PyAssessor {
    /// `thresholds_json` overrides the built-in BS 7671 tables;
    /// `treat_untested_as_ok` reports untested circuits as ok rather than incomplete.
    #[new]
    #[pyo3(signature = (thresholds_json=None, treat_untested_as_ok=false))]
    pub fn new(thresholds_json: Option<&str>, treat_untested_as_ok: bool) -> PyResult<Self> {
        let table = match thresholds_json {
            Some(json) => ThresholdTable::from_json_str(json).map_err(|e| PyValueError::new_err(e.to_string()))?,
            None => ThresholdTable::bs7671(),
        };
        let untested = if treat_untested_as_ok { UntestedPolicy::TreatAsOk } else { UntestedPolicy::Incomplete };
        let inner = CircuitAssessor::new(Arc::new(table)).with_policy(AggregationPolicy { untested });
        Ok(Self { inner })
    }

    pub fn validate_json(&self, record_json: &str) -> PyResult<String> {
        let record = decode_record(record_json)?;
        encode(&self.inner.validator().validate(&record))
    }

    pub fn check_json(&self, record_json: &str) -> PyResult<String> {
        let record = decode_record(record_json)?;
        encode(&self.inner.checker().check(&record))
    }

    pub fn assess_json(&self, record_json: &str) -> PyResult<String> {
        let record = decode_record(record_json)?;
        encode(&self.inner.assess(&record))
    }

    pub fn assess_schedule_json(&self, records_json: &str) -> PyResult<String> {
        let schedule: Schedule =
            serde_json::from_str(records_json).map_err(|e| PyValueError::new_err(e.to_string()))?;
        encode(&schedule.assess(&self.inner))
    }

    /// Applies one raw value to `field` on every record and returns the
    /// updated records and their fresh assessments as `[records, assessments]`.
    pub fn bulk_update_json(&self, records_json: &str, field: &str, value: &str) -> PyResult<String> {
        let mut schedule: Schedule =
            serde_json::from_str(records_json).map_err(|e| PyValueError::new_err(e.to_string()))?;
        let field: MeasurementField = field.parse().map_err(PyValueError::new_err)?;
        let assessments = schedule.bulk_update(field, value, &self.inner);
        encode(&(&schedule, &assessments))
    }

    pub fn report(&self, record_json: &str) -> PyResult<String> {
        let record = decode_record(record_json)?;
        let assessment = self.inner.assess(&record);
        Ok(report::format_report(&record, &assessment))
    }

    pub fn rule_ids(&self) -> Vec<&'static str> {
        crate::compliance::RegulationComplianceChecker::rule_ids().collect()
    }
}
