//! The map of field verdicts returned by one validation run.
use super::verdict::{FieldVerdict, Verdict, VerdictKind};
use crate::record::MeasurementField;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Verdicts keyed by measurement field.
///
/// A field with no entry was not assessed, usually because it is untested.
/// That is different from an `ok` entry and callers must not treat it as a pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult {
    verdicts: BTreeMap<MeasurementField, Verdict>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a verdict. When a field is judged twice the more severe
    /// verdict stays; on a tie the first one stays.
    pub fn insert(&mut self, entry: FieldVerdict) {
        let FieldVerdict { field, verdict } = entry;
        match self.verdicts.get(&field) {
            Some(existing) if existing.kind >= verdict.kind => {}
            _ => {
                self.verdicts.insert(field, verdict);
            }
        }
    }

    pub fn get(&self, field: MeasurementField) -> Option<&Verdict> {
        self.verdicts.get(&field)
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// Verdicts in field declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (MeasurementField, &Verdict)> {
        self.verdicts.iter().map(|(f, v)| (*f, v))
    }

    /// The most severe verdict kind, or `None` when nothing was assessed.
    pub fn worst(&self) -> Option<VerdictKind> {
        self.verdicts.values().map(|v| v.kind).max()
    }

    pub fn has_errors(&self) -> bool {
        self.worst() == Some(VerdictKind::Error)
    }

    pub fn count(&self, kind: VerdictKind) -> usize {
        self.verdicts.values().filter(|v| v.kind == kind).count()
    }
}
