//! Validation rule for entries that are not numbers.

use crate::record::{MeasurementField, Reading};
use crate::validation::readings::Readings;
use crate::validation::verdict::{FieldVerdict, Verdict};

/// "The Typo Rule": any numeric column holding something that is not a
/// number gets an error, so `1.5k` is never silently read as `1.5`.
pub(crate) fn validate_numeric(readings: &Readings) -> Vec<FieldVerdict> {
    readings
        .iter()
        .filter(|(_, reading)| *reading == Reading::Invalid)
        .map(|&(field, _)| invalid(field))
        .collect()
}

fn invalid(field: MeasurementField) -> FieldVerdict {
    Verdict::error("invalid numeric value").at(field)
}
