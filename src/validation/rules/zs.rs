//! Validation rule for earth fault loop impedance.

use crate::record::{Bound, CircuitRecord, MeasurementField};
use crate::thresholds::ThresholdTable;
use crate::validation::readings::Readings;
use crate::validation::verdict::{FieldVerdict, Verdict};
use tracing::debug;

const EPSILON: f64 = 1e-9;

/// "The Disconnection Rule": measured Zs must not exceed the maximum for the
/// protective device, or the device will not trip in the required time.
///
/// A reading exactly at the limit passes. Readings from the warning ratio up
/// to (but excluding) the limit are flagged as close to the maximum. With no
/// limit available there is no verdict at all.
pub(crate) fn validate_zs(
    record: &CircuitRecord,
    readings: &Readings,
    table: &ThresholdTable,
) -> Option<FieldVerdict> {
    let measured = readings.measured(MeasurementField::Zs)?;
    let max = max_zs_for(record, table)?;
    let zs = measured.value;

    let verdict = if zs > max + EPSILON && measured.bound == Bound::AtMost {
        Verdict::warning(format!(
            "Zs recorded as under-range (<{:.2} Ω); cannot confirm it is within {:.2} Ω",
            zs, max
        ))
    } else if zs > max + EPSILON {
        Verdict::error(format!("Zs {:.2} Ω exceeds maximum permitted {:.2} Ω", zs, max))
    } else if measured.bound == Bound::AtLeast {
        Verdict::warning(format!(
            "Zs recorded as over-range (>{:.2} Ω); cannot confirm it is within {:.2} Ω",
            zs, max
        ))
    } else if (zs - max).abs() <= EPSILON {
        Verdict::ok(format!("Zs {:.2} Ω at maximum permitted {:.2} Ω", zs, max))
    } else if zs >= table.zs_warning_ratio * max - EPSILON {
        Verdict::warning(format!(
            "Zs {:.2} Ω is close to maximum permitted {:.2} Ω",
            zs, max
        ))
    } else {
        Verdict::ok(format!("Zs {:.2} Ω within maximum permitted {:.2} Ω", zs, max))
    };
    Some(verdict.at(MeasurementField::Zs))
}

/// The table limit for the record's device (fuse tables when the device
/// standard names a fuse, breaker curves otherwise), falling back to a
/// maximum Zs recorded on the schedule when the table has no entry.
pub(crate) fn max_zs_for(record: &CircuitRecord, table: &ThresholdTable) -> Option<f64> {
    let fuse = record.fuse_type();
    let curve = record.device_curve();
    let rating = record.device_rating();
    let time = record.disconnection_time();

    let from_table = match (fuse, curve, rating, time) {
        (Some(f), _, Some(r), Some(t)) => table.fuse_max_zs(f, r, t),
        (None, Some(c), Some(r), Some(t)) => table.max_zs(c, r, t),
        _ => None,
    };
    if from_table.is_some() {
        return from_table;
    }

    let recorded = record.recorded_max_zs();
    if recorded.is_none() {
        debug!(
            circuit = %record.id,
            fuse = ?fuse,
            curve = ?curve,
            rating = ?rating,
            "no maximum Zs for protective device; Zs not assessed"
        );
    }
    recorded
}
