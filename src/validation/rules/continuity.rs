//! Validation rule for the protective conductor continuity reading.

use crate::record::{Bound, MeasurementField};
use crate::validation::readings::Readings;
use crate::validation::verdict::{FieldVerdict, Verdict};

/// "The Part Cannot Exceed The Whole Rule": R1+R2 is one component of the
/// earth fault loop, so a recorded R1+R2 above the measured Zs means one of
/// the two readings is wrong.
pub(crate) fn validate_r1r2_against_zs(readings: &Readings) -> Option<FieldVerdict> {
    let r1r2 = readings.measured(MeasurementField::R1r2)?;
    let zs = readings.measured(MeasurementField::Zs)?;
    if r1r2.bound != Bound::Exact || zs.bound != Bound::Exact {
        return None;
    }

    let verdict = if r1r2.value > zs.value {
        Verdict::warning(format!(
            "R1+R2 {} Ω exceeds measured Zs {} Ω, verify readings",
            r1r2.value, zs.value
        ))
    } else {
        Verdict::ok(format!("R1+R2 {} Ω consistent with Zs {} Ω", r1r2.value, zs.value))
    };
    Some(verdict.at(MeasurementField::R1r2))
}
