//! Every numeric column of one record, parsed once per validation run.
use crate::record::{Bound, CircuitRecord, Measured, MeasurementField, Reading};

pub(crate) struct Readings {
    parsed: Vec<(MeasurementField, Reading)>,
}

impl Readings {
    pub(crate) fn parse(record: &CircuitRecord) -> Self {
        let parsed = MeasurementField::ALL
            .iter()
            .filter(|f| f.is_numeric())
            .map(|&f| (f, Reading::parse(f.raw(record), f.kind())))
            .collect();
        Self { parsed }
    }

    pub(crate) fn get(&self, field: MeasurementField) -> Reading {
        self.parsed
            .iter()
            .find(|(f, _)| *f == field)
            .map_or(Reading::Untested, |(_, r)| *r)
    }

    pub(crate) fn measured(&self, field: MeasurementField) -> Option<Measured> {
        match self.get(field) {
            Reading::Value(m) => Some(m),
            _ => None,
        }
    }

    /// The value only when it was recorded without a `>`/`<` bound.
    pub(crate) fn exact(&self, field: MeasurementField) -> Option<f64> {
        self.measured(field).filter(|m| m.bound == Bound::Exact).map(|m| m.value)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &(MeasurementField, Reading)> {
        self.parsed.iter()
    }
}
