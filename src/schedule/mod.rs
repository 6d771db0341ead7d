//! Whole-circuit and whole-schedule assessment.
pub mod assessor;
pub mod bulk;

pub use assessor::{CircuitAssessment, CircuitAssessor};
pub use bulk::Schedule;
