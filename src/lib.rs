//! BS 7671 test-result validation and regulation compliance for electrical
//! installation schedules.
//!
//! Two independent, pure engines share one threshold table:
//! [`FieldValidator`] judges each recorded measurement, and
//! [`RegulationComplianceChecker`] evaluates named wiring regulations
//! against the circuit's configuration. [`overall_status`] is the one place
//! their outputs are combined.

pub mod aggregate;
pub mod compliance;
pub mod display;
pub mod record;
pub mod schedule;
pub mod thresholds;
pub mod validation;

#[cfg(feature = "python")]
mod bindings {
    pub mod python;
}

pub use aggregate::{overall_status, AggregationPolicy, OverallStatus, UntestedPolicy};
pub use compliance::{ComplianceResult, ComplianceWarning, RegulationComplianceChecker, Severity};
pub use record::{CircuitRecord, MeasurementField, RecordError};
pub use schedule::{CircuitAssessment, CircuitAssessor, Schedule};
pub use thresholds::{ThresholdError, ThresholdTable};
pub use validation::{FieldValidator, ValidationResult, Verdict, VerdictKind};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Defines the `_core` Python module.
#[cfg(feature = "python")]
#[pymodule]
fn _core(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<bindings::python::PyAssessor>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
