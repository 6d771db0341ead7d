//! Defines `CircuitRecord`, one row of a schedule of test results.
//!
//! Every field is the raw string typed into the grid. Nothing is parsed at
//! deserialisation time, so any JSON object decodes into a record and the
//! engines decide later what each value means.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The failure raised when a record cannot be decoded from JSON.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Record decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One circuit's configuration and measured test values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CircuitRecord {
    // --- Identity ---
    pub id: String,
    pub circuit_number: Option<String>,
    pub circuit_designation: Option<String>,
    pub circuit_description: Option<String>,
    pub circuit_type: Option<String>,

    // --- Configuration ---
    pub phase_type: Option<String>,
    pub type_of_wiring: Option<String>,
    pub reference_method: Option<String>,
    pub points_served: Option<String>,
    pub live_size: Option<String>,
    pub cpc_size: Option<String>,
    pub bs_standard: Option<String>,
    pub protective_device_type: Option<String>,
    #[serde(alias = "deviceType", alias = "curve")]
    pub protective_device_curve: Option<String>,
    pub protective_device_rating: Option<String>,
    /// Combined device code as shown on the schedule, e.g. `B32`.
    pub protective_device: Option<String>,
    /// Maximum Zs as recorded on the schedule, usually manufacturer data.
    pub max_zs: Option<String>,
    pub disconnection_time: Option<String>,
    pub rcd_bs_standard: Option<String>,
    pub rcd_type: Option<String>,
    /// Rated residual operating current in mA.
    pub rcd_rating: Option<String>,
    #[serde(alias = "locationType", alias = "locationClassification")]
    pub location: Option<String>,
    pub premises_type: Option<String>,

    // --- Measurements ---
    pub ring_r1: Option<String>,
    pub ring_rn: Option<String>,
    pub ring_r2: Option<String>,
    pub r1r2: Option<String>,
    pub insulation_test_voltage: Option<String>,
    pub insulation_live_neutral: Option<String>,
    pub insulation_live_earth: Option<String>,
    pub insulation_neutral_earth: Option<String>,
    pub zs: Option<String>,
    pub polarity: Option<String>,
    pub rcd_one_x: Option<String>,
    pub rcd_half_x: Option<String>,
    pub rcd_five_x: Option<String>,
    pub rcd_test_button: Option<String>,
    pub afdd_test: Option<String>,

    pub notes: Option<String>,
}

impl CircuitRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Default::default() }
    }

    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The label used in reports: designation, then number, then id.
    pub fn label(&self) -> &str {
        fn present(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|s| !s.trim().is_empty())
        }
        present(&self.circuit_designation)
            .or_else(|| present(&self.circuit_number))
            .unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_grid_json_with_aliases() {
        let json = r#"{
            "id": "c1",
            "circuitDesignation": "C1",
            "deviceType": "B",
            "protectiveDeviceRating": "32",
            "ringR1": "0.26",
            "r1r2": "0.31",
            "rcdOneX": "18",
            "locationType": "bathroom",
            "someUnknownColumn": "ignored"
        }"#;
        let record = CircuitRecord::from_json(json).unwrap();
        assert_eq!(record.protective_device_curve.as_deref(), Some("B"));
        assert_eq!(record.ring_r1.as_deref(), Some("0.26"));
        assert_eq!(record.rcd_one_x.as_deref(), Some("18"));
        assert_eq!(record.location.as_deref(), Some("bathroom"));
        assert_eq!(record.zs, None);
    }

    #[test]
    fn test_decode_error_is_reported() {
        let err = CircuitRecord::from_json("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("Record decode error"));
    }

    #[test]
    fn test_label_fallbacks() {
        let mut record = CircuitRecord::new("uuid-1");
        assert_eq!(record.label(), "uuid-1");
        record.circuit_number = Some("4".into());
        assert_eq!(record.label(), "4");
        record.circuit_designation = Some("C4".into());
        assert_eq!(record.label(), "C4");
        record.circuit_designation = Some("  ".into());
        assert_eq!(record.label(), "4");
    }
}
