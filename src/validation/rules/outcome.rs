//! Validation rules for tick-box columns: polarity, the RCD test button and
//! the AFDD test.

use crate::record::reading::is_not_applicable;
use crate::record::{CircuitRecord, MeasurementField};
use crate::validation::verdict::{FieldVerdict, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Blank,
    NotApplicable,
    Pass,
    Fail,
    Unrecognised,
}

pub(crate) fn parse_outcome(raw: Option<&str>) -> Outcome {
    let text = match raw.map(str::trim) {
        None | Some("") => return Outcome::Blank,
        Some(t) => t,
    };
    if is_not_applicable(text) {
        return Outcome::NotApplicable;
    }
    match text.to_lowercase().as_str() {
        "pass" | "passed" | "correct" | "ok" | "yes" | "y" | "sat" | "satisfactory" | "✓" | "✔" => {
            Outcome::Pass
        }
        "fail" | "failed" | "incorrect" | "no" | "n" | "x" | "unsat" | "unsatisfactory" | "✗" | "✘" => {
            Outcome::Fail
        }
        _ => Outcome::Unrecognised,
    }
}

/// "The Reversed Conductor Rule": incorrect polarity is always an error,
/// whatever else the record says.
pub(crate) fn validate_polarity(record: &CircuitRecord) -> Option<FieldVerdict> {
    let field = MeasurementField::Polarity;
    let verdict = match parse_outcome(field.raw(record)) {
        Outcome::Blank | Outcome::NotApplicable => return None,
        Outcome::Pass => Verdict::ok("Polarity correct"),
        Outcome::Fail => Verdict::error("Incorrect polarity"),
        Outcome::Unrecognised => {
            Verdict::warning("Unrecognised polarity entry, expected Correct, Incorrect or N/A")
        }
    };
    Some(verdict.at(field))
}

/// Functional test of a device: pass is ok, fail is an error.
pub(crate) fn validate_functional_test(
    field: MeasurementField,
    record: &CircuitRecord,
) -> Option<FieldVerdict> {
    let label = match field {
        MeasurementField::RcdTestButton => "RCD test button",
        MeasurementField::AfddTest => "AFDD test",
        _ => return None,
    };
    let verdict = match parse_outcome(field.raw(record)) {
        Outcome::Blank | Outcome::NotApplicable => return None,
        Outcome::Pass => Verdict::ok(format!("{} passed", label)),
        Outcome::Fail => Verdict::error(format!("{} failed", label)),
        Outcome::Unrecognised => {
            Verdict::warning(format!("Unrecognised {} entry, expected Pass, Fail or N/A", label))
        }
    };
    Some(verdict.at(field))
}
