use crate::aggregate::OverallStatus;
use crate::compliance::Severity;
use crate::record::CircuitRecord;
use crate::schedule::CircuitAssessment;
use crate::validation::VerdictKind;
use std::fmt::Write;

/// Plain-text summary of one assessed circuit, for logs and the Python facade.
pub fn format_report(record: &CircuitRecord, assessment: &CircuitAssessment) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "CIRCUIT REPORT for '{}' ({}): {}",
        record.label(),
        assessment.id,
        status_label(assessment.status)
    );
    let _ = writeln!(out, "--------------------------------------------------");

    let _ = writeln!(out, "Measurements:");
    if assessment.validation.is_empty() {
        let _ = writeln!(out, "  (none assessed)");
    }
    for (field, verdict) in assessment.validation.iter() {
        let raw = field.raw(record).unwrap_or("");
        let _ = writeln!(
            out,
            "  {:<22} {:<10} {:<8} {}",
            field.name(),
            raw,
            kind_label(verdict.kind),
            verdict.message
        );
    }

    let _ = writeln!(out, "Regulations:");
    if assessment.compliance.warnings.is_empty() {
        let _ = writeln!(out, "  (no warnings)");
    }
    for warning in &assessment.compliance.warnings {
        let severity = match warning.severity {
            Severity::Critical => "CRITICAL",
            Severity::Advisory => "ADVISORY",
        };
        let _ = writeln!(out, "  [{}] {}: {}", severity, warning.rule_id, warning.message);
        let _ = writeln!(out, "      -> {}", warning.regulation_reference);
    }
    out
}

fn status_label(status: OverallStatus) -> &'static str {
    match status {
        OverallStatus::Incomplete => "INCOMPLETE",
        OverallStatus::Ok => "OK",
        OverallStatus::Warning => "WARNING",
        OverallStatus::Error => "ERROR",
    }
}

fn kind_label(kind: VerdictKind) -> &'static str {
    match kind {
        VerdictKind::Ok => "ok",
        VerdictKind::Warning => "WARNING",
        VerdictKind::Error => "ERROR",
    }
}
