//! Keys of the measurement fields that carry a validation rule.
use super::types::CircuitRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A measurement column of the schedule.
///
/// The declaration order is the order verdicts appear in a `ValidationResult`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeasurementField {
    RingR1,
    RingRn,
    RingR2,
    R1r2,
    InsulationLiveNeutral,
    InsulationLiveEarth,
    Zs,
    Polarity,
    RcdOneX,
    RcdTestButton,
    AfddTest,
}

/// What kind of entry a field expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Ohms: continuity, R1+R2 and Zs.
    Resistance,
    /// Megohms.
    Insulation,
    /// Milliseconds.
    TripTime,
    /// A pass/fail or correct/incorrect tick.
    Outcome,
}

impl MeasurementField {
    pub const ALL: [MeasurementField; 11] = [
        Self::RingR1,
        Self::RingRn,
        Self::RingR2,
        Self::R1r2,
        Self::InsulationLiveNeutral,
        Self::InsulationLiveEarth,
        Self::Zs,
        Self::Polarity,
        Self::RcdOneX,
        Self::RcdTestButton,
        Self::AfddTest,
    ];

    /// The camelCase column name used by the grid.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RingR1 => "ringR1",
            Self::RingRn => "ringRn",
            Self::RingR2 => "ringR2",
            Self::R1r2 => "r1r2",
            Self::InsulationLiveNeutral => "insulationLiveNeutral",
            Self::InsulationLiveEarth => "insulationLiveEarth",
            Self::Zs => "zs",
            Self::Polarity => "polarity",
            Self::RcdOneX => "rcdOneX",
            Self::RcdTestButton => "rcdTestButton",
            Self::AfddTest => "afddTest",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::RingR1 | Self::RingRn | Self::RingR2 | Self::R1r2 | Self::Zs => FieldKind::Resistance,
            Self::InsulationLiveNeutral | Self::InsulationLiveEarth => FieldKind::Insulation,
            Self::RcdOneX => FieldKind::TripTime,
            Self::Polarity | Self::RcdTestButton | Self::AfddTest => FieldKind::Outcome,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.kind() != FieldKind::Outcome
    }

    /// Reads this field's raw value from a record.
    pub fn raw<'r>(&self, record: &'r CircuitRecord) -> Option<&'r str> {
        let value = match self {
            Self::RingR1 => &record.ring_r1,
            Self::RingRn => &record.ring_rn,
            Self::RingR2 => &record.ring_r2,
            Self::R1r2 => &record.r1r2,
            Self::InsulationLiveNeutral => &record.insulation_live_neutral,
            Self::InsulationLiveEarth => &record.insulation_live_earth,
            Self::Zs => &record.zs,
            Self::Polarity => &record.polarity,
            Self::RcdOneX => &record.rcd_one_x,
            Self::RcdTestButton => &record.rcd_test_button,
            Self::AfddTest => &record.afdd_test,
        };
        value.as_deref()
    }

    /// Mutable access used by bulk updates.
    pub fn slot_mut<'r>(&self, record: &'r mut CircuitRecord) -> &'r mut Option<String> {
        match self {
            Self::RingR1 => &mut record.ring_r1,
            Self::RingRn => &mut record.ring_rn,
            Self::RingR2 => &mut record.ring_r2,
            Self::R1r2 => &mut record.r1r2,
            Self::InsulationLiveNeutral => &mut record.insulation_live_neutral,
            Self::InsulationLiveEarth => &mut record.insulation_live_earth,
            Self::Zs => &mut record.zs,
            Self::Polarity => &mut record.polarity,
            Self::RcdOneX => &mut record.rcd_one_x,
            Self::RcdTestButton => &mut record.rcd_test_button,
            Self::AfddTest => &mut record.afdd_test,
        }
    }
}

impl fmt::Display for MeasurementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MeasurementField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown measurement field '{}'", s))
    }
}
