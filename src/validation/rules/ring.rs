//! Validation rules for ring final circuit continuity.

use crate::record::{CircuitRecord, MeasurementField};
use crate::thresholds::ThresholdTable;
use crate::validation::readings::Readings;
use crate::validation::verdict::{FieldVerdict, Verdict};

const INCONSISTENT: &str = "ring continuity values inconsistent, verify readings";

/// "The Matching Ends Rule": on a ring final, the end-to-end line (r1) and
/// neutral (rn) resistances should agree. The verdict lands on `ringRn`.
///
/// A mismatch is only a warning: a wiring fault and a transcription error
/// look the same from the numbers alone. Readings recorded as `<x` or `>x`
/// cannot be compared and give no verdict.
pub(crate) fn validate_ring_ends(
    record: &CircuitRecord,
    readings: &Readings,
    table: &ThresholdTable,
) -> Option<FieldVerdict> {
    if !record.is_ring_final() {
        return None;
    }
    let r1 = readings.exact(MeasurementField::RingR1)?;
    let rn = readings.exact(MeasurementField::RingRn)?;

    let verdict = if within_tolerance(r1, rn, r1.max(rn), table) {
        Verdict::ok(format!("Ring ends r1 {} Ω and rn {} Ω agree", r1, rn))
    } else {
        Verdict::warning(format!("{} (r1 {} Ω, rn {} Ω)", INCONSISTENT, r1, rn))
    };
    Some(verdict.at(MeasurementField::RingRn))
}

/// "The Quarter Rule": on a ring final, R1+R2 measured at each point should
/// be about a quarter of the sum of the end-to-end r1 and r2. The verdict
/// lands on `r1r2`.
pub(crate) fn validate_ring_r1r2(
    record: &CircuitRecord,
    readings: &Readings,
    table: &ThresholdTable,
) -> Option<FieldVerdict> {
    if !record.is_ring_final() {
        return None;
    }
    let r1 = readings.exact(MeasurementField::RingR1)?;
    let r2 = readings.exact(MeasurementField::RingR2)?;
    let r1r2 = readings.exact(MeasurementField::R1r2)?;
    let expected = (r1 + r2) / 4.0;

    let verdict = if within_tolerance(r1r2, expected, expected, table) {
        Verdict::ok(format!("R1+R2 {} Ω matches (r1 + r2) / 4 = {:.3} Ω", r1r2, expected))
    } else {
        Verdict::warning(format!(
            "{} (R1+R2 {} Ω, expected {:.3} Ω from (r1 + r2) / 4)",
            INCONSISTENT, r1r2, expected
        ))
    };
    Some(verdict.at(MeasurementField::R1r2))
}

fn within_tolerance(a: f64, b: f64, reference: f64, table: &ThresholdTable) -> bool {
    let allowed = (reference * table.ring_tolerance).max(table.ring_resolution_ohms);
    (a - b).abs() <= allowed + 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::verdict::VerdictKind;
    use rstest::rstest;

    fn ring(r1: &str, rn: &str, r2: &str, r1r2: &str) -> CircuitRecord {
        CircuitRecord {
            id: "c1".into(),
            circuit_type: Some("Ring Final".into()),
            ring_r1: Some(r1.into()),
            ring_rn: Some(rn.into()),
            ring_r2: Some(r2.into()),
            r1r2: Some(r1r2.into()),
            ..Default::default()
        }
    }

    fn run(record: &CircuitRecord) -> (Option<VerdictKind>, Option<VerdictKind>) {
        let table = ThresholdTable::bs7671();
        let readings = Readings::parse(record);
        (
            validate_ring_ends(record, &readings, &table).map(|v| v.verdict.kind),
            validate_ring_r1r2(record, &readings, &table).map(|v| v.verdict.kind),
        )
    }

    #[rstest]
    // (0.50 + 0.80) / 4 = 0.325
    #[case("0.50", "0.50", "0.80", "0.33", VerdictKind::Ok, VerdictKind::Ok)]
    #[case("0.50", "0.54", "0.80", "0.35", VerdictKind::Ok, VerdictKind::Ok)]
    #[case("0.50", "0.60", "0.80", "0.33", VerdictKind::Warning, VerdictKind::Ok)]
    #[case("0.50", "0.50", "0.80", "0.40", VerdictKind::Ok, VerdictKind::Warning)]
    #[case("0.50", "0.50", "0.80", "0.29", VerdictKind::Ok, VerdictKind::Warning)]
    fn test_ring_tolerance(
        #[case] r1: &str,
        #[case] rn: &str,
        #[case] r2: &str,
        #[case] r1r2: &str,
        #[case] ends: VerdictKind,
        #[case] quarter: VerdictKind,
    ) {
        assert_eq!(run(&ring(r1, rn, r2, r1r2)), (Some(ends), Some(quarter)));
    }

    #[test]
    fn test_resolution_floor_absorbs_tiny_values() {
        // 0.02 vs 0.03 is 33 % apart but within one digit of instrument resolution.
        let (ends, _) = run(&ring("0.02", "0.03", "0.05", "0.02"));
        assert_eq!(ends, Some(VerdictKind::Ok));
    }

    #[test]
    fn test_not_a_ring_or_incomplete_abstains() {
        let mut radial = ring("0.50", "0.90", "0.80", "0.10");
        radial.circuit_type = Some("Radial".into());
        assert_eq!(run(&radial), (None, None));

        let partial = ring("0.50", "", "0.80", "");
        assert_eq!(run(&partial), (None, None));

        let not_applicable = ring("N/A", "N/A", "N/A", "0.30");
        assert_eq!(run(&not_applicable), (None, None));

        let under_range = ring("<0.05", "0.50", "0.80", "0.33");
        assert_eq!(run(&under_range), (None, None));

        let over_range = ring("0.50", "0.50", "0.80", ">2");
        assert_eq!(run(&over_range), (Some(VerdictKind::Ok), None));
    }
}
