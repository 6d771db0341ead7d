//! Validation rule for insulation resistance.

use crate::record::{Bound, CircuitRecord, MeasurementField};
use crate::thresholds::ThresholdTable;
use crate::validation::readings::Readings;
use crate::validation::verdict::{FieldVerdict, Verdict};
use tracing::debug;

/// "The Megger Rule": insulation resistance must meet the minimum for the
/// test voltage, and readings within the marginal factor of that minimum
/// are flagged for a retest.
pub(crate) fn validate_insulation(
    field: MeasurementField,
    record: &CircuitRecord,
    readings: &Readings,
    table: &ThresholdTable,
) -> Option<FieldVerdict> {
    let measured = readings.measured(field)?;
    let volts = test_voltage(record, table)?;
    let Some(min) = table.min_insulation(volts) else {
        debug!(circuit = %record.id, volts, "no minimum insulation resistance for test voltage");
        return None;
    };
    let megohms = measured.value;
    let marginal = min * table.insulation_marginal_factor;

    let verdict = if megohms < min {
        Verdict::error(format!(
            "Insulation resistance {} MΩ below minimum {} MΩ at {} V",
            megohms, min, volts
        ))
    } else if measured.bound == Bound::AtMost {
        Verdict::warning(format!(
            "Insulation resistance recorded as under-range (<{} MΩ); cannot confirm it meets {} MΩ",
            megohms, min
        ))
    } else if megohms < marginal && measured.bound != Bound::AtLeast {
        Verdict::warning(format!(
            "Insulation resistance {} MΩ is marginal (below {} MΩ), recommend retest",
            megohms, marginal
        ))
    } else {
        Verdict::ok(format!("Insulation resistance {} MΩ meets minimum {} MΩ", megohms, min))
    };
    Some(verdict.at(field))
}

/// The stated test voltage; the table default when the column is blank.
/// An entry that is present but unreadable gives `None`.
fn test_voltage(record: &CircuitRecord, table: &ThresholdTable) -> Option<u32> {
    match record.insulation_test_voltage.as_deref().map(str::trim) {
        None | Some("") => Some(table.default_test_voltage),
        Some(_) => record.insulation_test_volts(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::verdict::VerdictKind;
    use rstest::rstest;

    fn kind_of(live_earth: &str, voltage: Option<&str>) -> Option<VerdictKind> {
        let record = CircuitRecord {
            id: "c1".into(),
            insulation_live_earth: Some(live_earth.into()),
            insulation_test_voltage: voltage.map(Into::into),
            ..Default::default()
        };
        let table = ThresholdTable::bs7671();
        validate_insulation(MeasurementField::InsulationLiveEarth, &record, &Readings::parse(&record), &table)
            .map(|v| v.verdict.kind)
    }

    #[rstest]
    #[case("0.5", Some("500"), Some(VerdictKind::Error))]
    #[case("0.99", Some("500V"), Some(VerdictKind::Error))]
    #[case("1.0", Some("500"), Some(VerdictKind::Warning))]
    #[case("1.9", None, Some(VerdictKind::Warning))]
    #[case("2.0", None, Some(VerdictKind::Ok))]
    #[case(">200", Some("500"), Some(VerdictKind::Ok))]
    #[case(">1.5", Some("500"), Some(VerdictKind::Ok))]
    #[case("<2", Some("500"), Some(VerdictKind::Warning))]
    #[case("0.6", Some("250"), Some(VerdictKind::Warning))]
    #[case("0.4", Some("250"), Some(VerdictKind::Error))]
    #[case("50", Some("750"), None)]
    #[case("50", Some("N/A"), None)]
    #[case("", Some("500"), None)]
    fn test_insulation_thresholds(
        #[case] live_earth: &str,
        #[case] voltage: Option<&str>,
        #[case] expected: Option<VerdictKind>,
    ) {
        assert_eq!(kind_of(live_earth, voltage), expected);
    }

    #[test]
    fn test_synthetic_table_is_the_source_of_truth() {
        let mut table = ThresholdTable::bs7671();
        table.min_insulation.iter_mut().for_each(|e| e.min_megohms = 2.0);
        let record = CircuitRecord {
            id: "c1".into(),
            insulation_live_neutral: Some("1.5".into()),
            ..Default::default()
        };
        let v = validate_insulation(
            MeasurementField::InsulationLiveNeutral,
            &record,
            &Readings::parse(&record),
            &table,
        )
        .unwrap();
        assert_eq!(v.verdict.kind, VerdictKind::Error);
    }
}
