//! Regulation rules for residual current protection.

use crate::compliance::rule::Finding;
use crate::record::{CircuitRecord, LocationClass};
use crate::thresholds::ThresholdTable;

/// Rated residual operating current for additional protection.
const ADDITIONAL_PROTECTION_MA: f64 = 30.0;
const SOCKET_RATING_LIMIT: u32 = 32;
const REG_411_3_3: &str = "BS 7671 Regulation 411.3.3";

pub(crate) const SPECIAL_LOCATION_MESSAGE: &str =
    "RCD protection required in this location per BS 7671 Section 701/702.";

/// A socket-outlet circuit rated up to 32 A. Unknown function or rating is
/// not a socket circuit for any rule.
pub(crate) fn is_socket_final(record: &CircuitRecord) -> bool {
    let sockets = record.circuit_function().map_or(false, |f| f.supplies_sockets());
    sockets && record.device_rating().map_or(false, |a| a <= SOCKET_RATING_LIMIT)
}

fn special_location(record: &CircuitRecord) -> Option<LocationClass> {
    record.location_class().filter(LocationClass::requires_rcd)
}

fn location_name(location: LocationClass) -> &'static str {
    match location {
        LocationClass::Bathroom => "bathroom",
        LocationClass::Outdoor => "outdoor",
        LocationClass::SwimmingPool => "swimming pool",
        LocationClass::Kitchen => "kitchen",
        LocationClass::General => "general",
    }
}

/// "The Wet Location Rule": bathrooms, pools and outdoor circuits must have
/// an RCD recorded.
pub(crate) fn check_special_location_missing(
    record: &CircuitRecord,
    _table: &ThresholdTable,
) -> Option<Finding> {
    let location = special_location(record)?;
    if record.has_rcd() {
        return None;
    }
    Some(Finding::new(SPECIAL_LOCATION_MESSAGE, location.regulation_reference()))
}

/// An RCD in a special location must be rated at 30 mA or less.
pub(crate) fn check_special_location_rating(
    record: &CircuitRecord,
    _table: &ThresholdTable,
) -> Option<Finding> {
    let location = special_location(record)?;
    if !record.has_rcd() {
        return None;
    }
    let ma = record.rcd_rating_ma()?;
    (ma > ADDITIONAL_PROTECTION_MA).then(|| {
        Finding::new(
            format!(
                "RCD rated {} mA in a {} location; additional protection requires 30 mA or less",
                ma,
                location_name(location)
            ),
            location.regulation_reference(),
        )
    })
}

/// "The Socket Rule": socket circuits up to 32 A need 30 mA additional
/// protection. Special locations are left to the location rules, and a
/// rating without a device standard is reported as a missing RCD instead.
pub(crate) fn check_socket_rating(record: &CircuitRecord, _table: &ThresholdTable) -> Option<Finding> {
    if !is_socket_final(record) || special_location(record).is_some() || !record.has_rcd() {
        return None;
    }
    let ma = record.rcd_rating_ma()?;
    (ma > ADDITIONAL_PROTECTION_MA).then(|| {
        Finding::new(
            format!(
                "RCD rated {} mA on a socket circuit; socket-outlets up to 32 A require 30 mA or less",
                ma
            ),
            REG_411_3_3,
        )
    })
}

/// Socket circuit with no RCD recorded. Advisory: installations predating
/// the requirement are coded on inspection, not failed.
pub(crate) fn check_socket_missing(record: &CircuitRecord, _table: &ThresholdTable) -> Option<Finding> {
    if !is_socket_final(record) || special_location(record).is_some() || record.has_rcd() {
        return None;
    }
    Some(Finding::new(
        "No RCD recorded for socket-outlet circuit; additional protection by a 30 mA RCD is required",
        REG_411_3_3,
    ))
}

/// Type AC devices on socket circuits may be blinded by DC leakage from
/// modern equipment.
pub(crate) fn check_type_ac_socket(record: &CircuitRecord, _table: &ThresholdTable) -> Option<Finding> {
    if !is_socket_final(record) || !record.has_rcd() || !record.rcd_is_type_ac() {
        return None;
    }
    Some(Finding::new(
        "Type AC RCD protecting socket-outlets; consider Type A or better",
        "BS 7671 Regulation 531.3.3",
    ))
}
