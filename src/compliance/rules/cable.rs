//! Regulation rule for cable and protective device coordination.

use crate::compliance::rule::Finding;
use crate::record::CircuitRecord;
use crate::thresholds::ThresholdTable;
use tracing::debug;

/// "The Weakest Link Rule": the device rating must not exceed the cable's
/// current-carrying capacity for its installation method. A ring final
/// carries current along two legs, so it is judged against twice the
/// capacity.
///
/// Only flags implausible combinations; it is not a cable-sizing
/// calculation and never asserts compliance.
pub(crate) fn check_device_coordination(record: &CircuitRecord, table: &ThresholdTable) -> Option<Finding> {
    let size = record.live_size_mm2()?;
    let rating = record.device_rating()?;
    let method = record.reference_method_code()?;
    let Some(capacity) = table.cable_capacity(size, &method) else {
        debug!(circuit = %record.id, size, method = %method, "no cable capacity for size and reference method");
        return None;
    };

    let (effective, reference) = if record.is_ring_final() {
        (capacity * 2.0, "BS 7671 Regulation 433.1.204")
    } else {
        (capacity, "BS 7671 Regulation 433.1.1")
    };
    if f64::from(rating) <= effective {
        return None;
    }
    Some(Finding::new(
        format!(
            "{} mm² cable (method {}) carries {} A, below the {} A protective device; verify cable sizing",
            size, method, effective, rating
        ),
        reference,
    ))
}
