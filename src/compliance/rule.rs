//! The shape shared by every regulation rule.
use crate::record::CircuitRecord;
use crate::thresholds::ThresholdTable;
use super::warning::Severity;

/// What a rule reports when it fires. The checker adds the rule id and
/// severity from the rule's declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Finding {
    pub message: String,
    pub regulation_reference: &'static str,
}

impl Finding {
    pub(crate) fn new(message: impl Into<String>, regulation_reference: &'static str) -> Self {
        Self { message: message.into(), regulation_reference }
    }
}

/// A named regulation check. `evaluate` returns `None` both when the
/// circuit complies and when the record lacks the data to decide.
#[derive(Clone, Copy)]
pub(crate) struct RegulationRule {
    pub id: &'static str,
    pub severity: Severity,
    pub evaluate: fn(&CircuitRecord, &ThresholdTable) -> Option<Finding>,
}

impl std::fmt::Debug for RegulationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegulationRule")
            .field("id", &self.id)
            .field("severity", &self.severity)
            .finish()
    }
}
