//! Regulation rule for arc fault detection devices.

use super::rcd::is_socket_final;
use crate::compliance::rule::Finding;
use crate::record::reading::is_not_applicable;
use crate::record::{CircuitRecord, PhaseType, PremisesType};
use crate::thresholds::ThresholdTable;

fn premises_name(premises: PremisesType) -> &'static str {
    match premises {
        PremisesType::HouseInMultipleOccupation => "an HMO",
        PremisesType::CareHome => "a care home",
        PremisesType::StudentAccommodation => "purpose-built student accommodation",
        PremisesType::HighRiseResidential => "a high-rise residential building",
        PremisesType::Domestic => "a dwelling",
        PremisesType::Commercial => "commercial premises",
    }
}

/// "The Higher Risk Premises Rule": single-phase socket circuits up to 32 A
/// in HMOs, care homes, student blocks and high-rise residential buildings
/// should have AFDD protection. Advisory only; the requirement depends on
/// installation date and scope.
///
/// An unstated phase counts as single-phase.
pub(crate) fn check_afdd_high_risk(record: &CircuitRecord, _table: &ThresholdTable) -> Option<Finding> {
    let premises = record.premises().filter(PremisesType::is_afdd_high_risk)?;
    if !is_socket_final(record) || record.phase() == Some(PhaseType::ThreePhase) {
        return None;
    }
    let tested = record
        .afdd_test
        .as_deref()
        .map(str::trim)
        .map_or(false, |t| !t.is_empty() && !is_not_applicable(t));
    if tested {
        return None;
    }
    Some(Finding::new(
        format!(
            "AFDD protection recommended for socket circuits in {}; no AFDD test recorded",
            premises_name(premises)
        ),
        "BS 7671 Regulation 421.1.7",
    ))
}
