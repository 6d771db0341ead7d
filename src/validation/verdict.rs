//! Defines the per-field verdict produced by the field validator.
use crate::record::MeasurementField;
use serde::{Deserialize, Serialize};

/// The severity of a field verdict.
///
/// Ordered so that `max()` over verdicts yields the worst one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictKind {
    Ok,
    Warning,
    Error,
}

/// A verdict on one measurement field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    #[serde(rename = "type")]
    pub kind: VerdictKind,
    pub message: String,
}

impl Verdict {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { kind: VerdictKind::Ok, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { kind: VerdictKind::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: VerdictKind::Error, message: message.into() }
    }

    pub fn at(self, field: MeasurementField) -> FieldVerdict {
        FieldVerdict { field, verdict: self }
    }
}

/// A verdict attached to the field it judges; what every rule returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldVerdict {
    pub field: MeasurementField,
    pub verdict: Verdict,
}
