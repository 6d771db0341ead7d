//! The circuit record consumed by both engines, and the parsers that turn
//! its raw grid strings into typed values.
pub mod classify;
pub mod field;
pub mod reading;
pub mod types;

// Re-export key types for convenient access
pub use classify::{
    CircuitFunction, DeviceCurve, DisconnectionTime, FuseType, LocationClass, PhaseType, PremisesType, RcdClass,
};
pub use field::{FieldKind, MeasurementField};
pub use reading::{Bound, Measured, Reading};
pub use types::{CircuitRecord, RecordError};
