//! Validation rule for RCD operating time at rated residual current.

use crate::record::{Bound, CircuitRecord, MeasurementField};
use crate::thresholds::ThresholdTable;
use crate::validation::readings::Readings;
use crate::validation::verdict::{FieldVerdict, Verdict};

/// "The Trip Time Rule": at 1 x IΔn the RCD must operate within the maximum
/// time for its class (300 ms general, 500 ms selective by default).
pub(crate) fn validate_rcd_trip_time(
    record: &CircuitRecord,
    readings: &Readings,
    table: &ThresholdTable,
) -> Option<FieldVerdict> {
    let measured = readings.measured(MeasurementField::RcdOneX)?;
    let max = table.rcd_max_trip_ms(record.rcd_class())?;
    let ms = measured.value;

    let too_slow = ms > max || (measured.bound == Bound::AtLeast && ms >= max);
    let verdict = if too_slow && measured.bound == Bound::AtMost {
        Verdict::warning(format!(
            "RCD operating time recorded as <{} ms; cannot confirm it is within {} ms",
            ms, max
        ))
    } else if too_slow {
        Verdict::error(format!("RCD operating time {} ms exceeds maximum {} ms", ms, max))
    } else {
        Verdict::ok(format!("RCD operated in {} ms (maximum {} ms)", ms, max))
    };
    Some(verdict.at(MeasurementField::RcdOneX))
}
