//! The immutable threshold table injected into both engines.
//!
//! The serialised form is a flat list of entries per table so that a
//! deploy-time override is a plain JSON document. Lookup indexes are not
//! serialised; they are rebuilt whenever a table is constructed or loaded.

use super::error::ThresholdError;
use crate::record::{DeviceCurve, DisconnectionTime, FuseType, RcdClass};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxZsEntry {
    pub curve: DeviceCurve,
    pub rating: u32,
    pub disconnection: DisconnectionTime,
    /// The tabulated limit at conductor operating temperature.
    pub tabulated_ohms: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuseZsEntry {
    pub fuse: FuseType,
    pub rating: u32,
    pub disconnection: DisconnectionTime,
    pub tabulated_ohms: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsulationEntry {
    pub test_voltage: u32,
    pub min_megohms: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RcdTripEntry {
    pub class: RcdClass,
    pub max_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableCapacityEntry {
    pub size_mm2: f64,
    pub method: String,
    pub amps: f64,
}

type MaxZsKey = (DeviceCurve, u32, DisconnectionTime);
type FuseZsKey = (FuseType, u32, DisconnectionTime);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdTable {
    pub max_zs: Vec<MaxZsEntry>,
    /// Fuse limits; optional in an override file.
    #[serde(default)]
    pub fuse_max_zs: Vec<FuseZsEntry>,
    pub min_insulation: Vec<InsulationEntry>,
    pub rcd_max_trip: Vec<RcdTripEntry>,
    pub cable_capacity: Vec<CableCapacityEntry>,

    /// Multiplier from tabulated Zs to the maximum measured (ambient) Zs.
    #[serde(default = "default_zs_derating")]
    pub zs_derating: f64,
    /// Fraction of the maximum Zs above which a reading is flagged.
    #[serde(default = "default_zs_warning_ratio")]
    pub zs_warning_ratio: f64,
    /// Readings below this multiple of the minimum are marginal.
    #[serde(default = "default_insulation_marginal_factor")]
    pub insulation_marginal_factor: f64,
    /// Voltage assumed when the schedule leaves the test voltage blank.
    #[serde(default = "default_test_voltage")]
    pub default_test_voltage: u32,
    /// Relative tolerance for ring continuity comparisons.
    #[serde(default = "default_ring_tolerance")]
    pub ring_tolerance: f64,
    /// Instrument resolution; differences at or below this never count as a mismatch.
    #[serde(default = "default_ring_resolution")]
    pub ring_resolution_ohms: f64,

    #[serde(skip)]
    max_zs_index: HashMap<MaxZsKey, f64>,
    #[serde(skip)]
    fuse_zs_index: HashMap<FuseZsKey, f64>,
}

fn default_zs_derating() -> f64 { 0.8 }
fn default_zs_warning_ratio() -> f64 { 0.8 }
fn default_insulation_marginal_factor() -> f64 { 2.0 }
fn default_test_voltage() -> u32 { 500 }
fn default_ring_tolerance() -> f64 { 0.10 }
fn default_ring_resolution() -> f64 { 0.01 }

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::bs7671()
    }
}

impl ThresholdTable {
    /// The built-in BS 7671 tables.
    pub fn bs7671() -> Self {
        super::defaults::bs7671()
    }

    /// Builds a table from entry lists with default tunables.
    pub fn from_parts(
        max_zs: Vec<MaxZsEntry>,
        fuse_max_zs: Vec<FuseZsEntry>,
        min_insulation: Vec<InsulationEntry>,
        rcd_max_trip: Vec<RcdTripEntry>,
        cable_capacity: Vec<CableCapacityEntry>,
    ) -> Self {
        let mut table = Self {
            max_zs,
            fuse_max_zs,
            min_insulation,
            rcd_max_trip,
            cable_capacity,
            zs_derating: default_zs_derating(),
            zs_warning_ratio: default_zs_warning_ratio(),
            insulation_marginal_factor: default_insulation_marginal_factor(),
            default_test_voltage: default_test_voltage(),
            ring_tolerance: default_ring_tolerance(),
            ring_resolution_ohms: default_ring_resolution(),
            max_zs_index: HashMap::new(),
            fuse_zs_index: HashMap::new(),
        };
        table.rebuild_index();
        table
    }

    pub fn from_json_str(json: &str) -> Result<Self, ThresholdError> {
        let mut table: Self = serde_json::from_str(json)?;
        table.rebuild_index();
        table.validate()?;
        Ok(table)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ThresholdError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> Result<String, ThresholdError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rebuilds the lookup index after deserialisation or edits.
    pub fn rebuild_index(&mut self) {
        self.max_zs_index = self
            .max_zs
            .iter()
            .map(|e| ((e.curve, e.rating, e.disconnection), e.tabulated_ohms))
            .collect();
        self.fuse_zs_index = self
            .fuse_max_zs
            .iter()
            .map(|e| ((e.fuse, e.rating, e.disconnection), e.tabulated_ohms))
            .collect();
    }

    /// Checks every limit and tunable is usable.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        if let Some(e) = self.max_zs.iter().find(|e| !(e.tabulated_ohms > 0.0) || e.rating == 0) {
            return Err(ThresholdError::invalid(format!(
                "max Zs for {:?}{} must be positive, got {}",
                e.curve, e.rating, e.tabulated_ohms
            )));
        }
        if let Some(e) = self.fuse_max_zs.iter().find(|e| !(e.tabulated_ohms > 0.0) || e.rating == 0) {
            return Err(ThresholdError::invalid(format!(
                "max Zs for {:?} {} A must be positive, got {}",
                e.fuse, e.rating, e.tabulated_ohms
            )));
        }
        if let Some(e) = self.min_insulation.iter().find(|e| !(e.min_megohms > 0.0)) {
            return Err(ThresholdError::invalid(format!(
                "minimum insulation resistance at {} V must be positive",
                e.test_voltage
            )));
        }
        if self.rcd_max_trip.iter().any(|e| !(e.max_ms > 0.0)) {
            return Err(ThresholdError::invalid("RCD operating times must be positive"));
        }
        if self.cable_capacity.iter().any(|e| !(e.amps > 0.0) || !(e.size_mm2 > 0.0)) {
            return Err(ThresholdError::invalid("cable capacities must be positive"));
        }
        if !(self.zs_derating > 0.0 && self.zs_derating <= 1.0) {
            return Err(ThresholdError::invalid("zs_derating must be in (0, 1]"));
        }
        if !(self.zs_warning_ratio > 0.0 && self.zs_warning_ratio <= 1.0) {
            return Err(ThresholdError::invalid("zs_warning_ratio must be in (0, 1]"));
        }
        if !(self.insulation_marginal_factor >= 1.0) {
            return Err(ThresholdError::invalid("insulation_marginal_factor must be at least 1"));
        }
        if !(self.ring_tolerance >= 0.0 && self.ring_tolerance < 1.0) {
            return Err(ThresholdError::invalid("ring_tolerance must be in [0, 1)"));
        }
        if !(self.ring_resolution_ohms >= 0.0) {
            return Err(ThresholdError::invalid("ring_resolution_ohms must not be negative"));
        }
        if self.min_insulation(self.default_test_voltage).is_none() {
            return Err(ThresholdError::invalid(format!(
                "default test voltage {} V has no insulation entry",
                self.default_test_voltage
            )));
        }
        Ok(())
    }

    /// Maximum measured Zs in ohms, rounded down to 0.01 Ω.
    pub fn max_zs(&self, curve: DeviceCurve, rating: u32, time: DisconnectionTime) -> Option<f64> {
        let tabulated = self.max_zs_index.get(&(curve, rating, time))?;
        Some(self.derate(*tabulated))
    }

    /// Maximum measured Zs for a fuse, derated and rounded like `max_zs`.
    pub fn fuse_max_zs(&self, fuse: FuseType, rating: u32, time: DisconnectionTime) -> Option<f64> {
        let tabulated = self.fuse_zs_index.get(&(fuse, rating, time))?;
        Some(self.derate(*tabulated))
    }

    fn derate(&self, tabulated: f64) -> f64 {
        ((tabulated * self.zs_derating * 100.0) + 1e-9).floor() / 100.0
    }

    pub fn min_insulation(&self, test_voltage: u32) -> Option<f64> {
        self.min_insulation
            .iter()
            .find(|e| e.test_voltage == test_voltage)
            .map(|e| e.min_megohms)
    }

    pub fn rcd_max_trip_ms(&self, class: RcdClass) -> Option<f64> {
        self.rcd_max_trip.iter().find(|e| e.class == class).map(|e| e.max_ms)
    }

    pub fn cable_capacity(&self, size_mm2: f64, method: &str) -> Option<f64> {
        self.cable_capacity
            .iter()
            .find(|e| (e.size_mm2 - size_mm2).abs() < 1e-6 && e.method.eq_ignore_ascii_case(method))
            .map(|e| e.amps)
    }
}
