//! Typed views over a record's free-text configuration columns.
//!
//! Each accessor returns `None` when the column is blank, `N/A`, or not
//! recognised. Rules treat `None` as "insufficient data" and abstain.

use super::reading::{is_not_applicable, leading_number};
use super::types::CircuitRecord;
use serde::{Deserialize, Serialize};

/// Tripping characteristic of a circuit breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeviceCurve {
    B,
    C,
    D,
}

/// Fuse families with their own maximum Zs tables (BS 7671 Tables 41.2 and 41.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuseType {
    /// BS 88-2 fuse systems E and G.
    Bs88Part2,
    /// BS 88-3 fuse system C; supersedes BS 1361.
    Bs88Part3,
    /// BS 3036 semi-enclosed (rewireable).
    Bs3036,
    /// BS 1362 plug-top and fused connection unit fuses.
    Bs1362,
}

/// Maximum disconnection time class (BS 7671 Table 41.1 and 411.3.2.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisconnectionTime {
    /// 0.4 s, final circuits.
    Fast,
    /// 5 s, distribution circuits and larger final circuits.
    Slow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseType {
    SinglePhase,
    ThreePhase,
}

/// Location classes with a bearing on mandatory RCD protection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationClass {
    Bathroom,
    Outdoor,
    SwimmingPool,
    Kitchen,
    General,
}

impl LocationClass {
    /// Part 7 special locations and outdoor circuits, where RCD protection
    /// is mandatory.
    pub fn requires_rcd(&self) -> bool {
        matches!(self, Self::Bathroom | Self::Outdoor | Self::SwimmingPool)
    }

    pub fn regulation_reference(&self) -> &'static str {
        match self {
            Self::Bathroom => "BS 7671 Section 701 (701.411.3.3)",
            Self::SwimmingPool => "BS 7671 Section 702 (702.411.3.3)",
            Self::Outdoor => "BS 7671 Regulation 411.3.3",
            Self::Kitchen | Self::General => "BS 7671 Regulation 411.3.3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PremisesType {
    HouseInMultipleOccupation,
    CareHome,
    StudentAccommodation,
    HighRiseResidential,
    Domestic,
    Commercial,
}

impl PremisesType {
    /// Premises listed in BS 7671 421.1.7 for arc fault detection.
    pub fn is_afdd_high_risk(&self) -> bool {
        matches!(
            self,
            Self::HouseInMultipleOccupation
                | Self::CareHome
                | Self::StudentAccommodation
                | Self::HighRiseResidential
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircuitFunction {
    RingFinal,
    RadialSocket,
    Lighting,
    Cooker,
    Shower,
    ImmersionHeater,
    Distribution,
}

impl CircuitFunction {
    pub fn supplies_sockets(&self) -> bool {
        matches!(self, Self::RingFinal | Self::RadialSocket)
    }
}

/// RCD class for operating-time limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RcdClass {
    General,
    /// Selective / time-delayed.
    Selective,
}

fn text(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty() && !is_not_applicable(t))
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

impl CircuitRecord {
    pub fn device_curve(&self) -> Option<DeviceCurve> {
        let from_curve = text(&self.protective_device_curve).and_then(parse_curve);
        from_curve.or_else(|| {
            text(&self.protective_device)
                .and_then(|code| code.chars().next())
                .and_then(|c| parse_curve(&c.to_string()))
        })
    }

    /// The fuse family, from the device standard or type columns. `None`
    /// for circuit-breakers and anything unrecognised.
    pub fn fuse_type(&self) -> Option<FuseType> {
        [&self.bs_standard, &self.protective_device_type]
            .into_iter()
            .filter_map(text)
            .find_map(parse_fuse)
    }

    /// Rated current in amps.
    pub fn device_rating(&self) -> Option<u32> {
        leading_number(self.protective_device_rating.as_deref())
            .or_else(|| {
                // `B32` style codes carry the rating after the curve letter.
                text(&self.protective_device).and_then(|code| leading_number(code.get(1..)))
            })
            .filter(|a| *a > 0.0 && a.fract() == 0.0)
            .map(|a| a as u32)
    }

    pub fn disconnection_time(&self) -> Option<DisconnectionTime> {
        if let Some(secs) = leading_number(self.disconnection_time.as_deref()) {
            return Some(if secs <= 0.4 { DisconnectionTime::Fast } else { DisconnectionTime::Slow });
        }
        let rating = self.device_rating()?;
        let function = self.circuit_function();
        if function == Some(CircuitFunction::Distribution) {
            return Some(DisconnectionTime::Slow);
        }
        let sockets = function.map_or(false, |f| f.supplies_sockets());
        if rating <= 32 || (sockets && rating <= 63) {
            Some(DisconnectionTime::Fast)
        } else {
            Some(DisconnectionTime::Slow)
        }
    }

    pub fn phase(&self) -> Option<PhaseType> {
        let t = text(&self.phase_type)?.to_lowercase();
        let tokens: Vec<&str> = t.split(|c: char| !c.is_alphanumeric()).collect();
        let has = |words: &[&str]| tokens.iter().any(|w| words.contains(w));
        if has(&["three", "3p", "3ph", "tp", "tpn"]) {
            Some(PhaseType::ThreePhase)
        } else if has(&["single", "1p", "1ph", "sp", "spn"]) {
            Some(PhaseType::SinglePhase)
        } else {
            None
        }
    }

    /// Explicit location first, then keywords in the circuit description.
    pub fn location_class(&self) -> Option<LocationClass> {
        if let Some(explicit) = text(&self.location) {
            return parse_location(explicit);
        }
        let description = text(&self.circuit_description)?.to_lowercase();
        if contains_any(&description, &["bathroom", "en-suite", "ensuite", "shower room", "wet room"]) {
            Some(LocationClass::Bathroom)
        } else if contains_any(&description, &["swimming", "pool"]) {
            Some(LocationClass::SwimmingPool)
        } else if contains_any(&description, &["outdoor", "outside", "garden", "external"]) {
            Some(LocationClass::Outdoor)
        } else {
            None
        }
    }

    pub fn premises(&self) -> Option<PremisesType> {
        let t = text(&self.premises_type)?.to_lowercase();
        let premises = if t == "hmo" || t.contains("multiple occupation") {
            PremisesType::HouseInMultipleOccupation
        } else if t.contains("care") {
            PremisesType::CareHome
        } else if t.contains("student") || t == "pbsa" {
            PremisesType::StudentAccommodation
        } else if t.contains("high-rise") || t.contains("high rise") || t.contains("tower") {
            PremisesType::HighRiseResidential
        } else if t.contains("domestic") || t.contains("dwelling") {
            PremisesType::Domestic
        } else if t.contains("commercial") || t.contains("office") || t.contains("retail") {
            PremisesType::Commercial
        } else {
            return None;
        };
        Some(premises)
    }

    /// Keyword match over the circuit type, wiring type and description.
    pub fn circuit_function(&self) -> Option<CircuitFunction> {
        let haystack = [&self.circuit_type, &self.type_of_wiring, &self.circuit_description]
            .into_iter()
            .filter_map(text)
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        if haystack.is_empty() {
            return None;
        }
        let words: Vec<&str> = haystack.split(|c: char| !c.is_alphanumeric()).collect();
        let function = if words.iter().any(|w| *w == "ring" || *w == "rfc") {
            CircuitFunction::RingFinal
        } else if words.iter().any(|w| w.starts_with("socket")) || haystack.contains("s/o") {
            CircuitFunction::RadialSocket
        } else if haystack.contains("light") {
            CircuitFunction::Lighting
        } else if contains_any(&haystack, &["cooker", "oven", "hob"]) {
            CircuitFunction::Cooker
        } else if haystack.contains("shower") {
            CircuitFunction::Shower
        } else if haystack.contains("immersion") {
            CircuitFunction::ImmersionHeater
        } else if contains_any(&haystack, &["sub-main", "submain", "distribution", "sub main"]) {
            CircuitFunction::Distribution
        } else {
            return None;
        };
        Some(function)
    }

    pub fn is_ring_final(&self) -> bool {
        self.circuit_function() == Some(CircuitFunction::RingFinal)
    }

    /// An RCD counts as recorded only when both its rating and its standard are.
    pub fn has_rcd(&self) -> bool {
        text(&self.rcd_rating).is_some() && text(&self.rcd_bs_standard).is_some()
    }

    /// Rated residual operating current in mA.
    pub fn rcd_rating_ma(&self) -> Option<f64> {
        leading_number(self.rcd_rating.as_deref())
    }

    pub fn rcd_class(&self) -> RcdClass {
        let selective = text(&self.rcd_type).map_or(false, |t| {
            let t = t.to_lowercase();
            t.contains("type s") || t == "s" || t.contains("selective") || t.contains("delay")
        });
        if selective { RcdClass::Selective } else { RcdClass::General }
    }

    /// True for a Type AC residual current device.
    pub fn rcd_is_type_ac(&self) -> bool {
        text(&self.rcd_type).map_or(false, |t| {
            let t = t.to_lowercase().replace("type", "");
            t.trim() == "ac"
        })
    }

    /// Live conductor cross-sectional area in mm².
    pub fn live_size_mm2(&self) -> Option<f64> {
        leading_number(self.live_size.as_deref()).filter(|s| *s > 0.0)
    }

    /// Installation reference method code, upper-cased (`A1`, `C`, `100`).
    pub fn reference_method_code(&self) -> Option<String> {
        text(&self.reference_method).map(|m| {
            m.split(|c: char| c.is_whitespace() || c == '-')
                .next()
                .unwrap_or(m)
                .to_uppercase()
        })
    }

    /// Insulation test voltage in volts.
    pub fn insulation_test_volts(&self) -> Option<u32> {
        leading_number(self.insulation_test_voltage.as_deref())
            .filter(|v| *v > 0.0 && v.fract() == 0.0)
            .map(|v| v as u32)
    }

    pub fn recorded_max_zs(&self) -> Option<f64> {
        leading_number(self.max_zs.as_deref()).filter(|v| *v > 0.0)
    }
}

fn parse_curve(s: &str) -> Option<DeviceCurve> {
    let t = s.trim().to_uppercase();
    let t = t.strip_prefix("TYPE").unwrap_or(&t).trim();
    match t {
        "B" => Some(DeviceCurve::B),
        "C" => Some(DeviceCurve::C),
        "D" => Some(DeviceCurve::D),
        _ => None,
    }
}

fn parse_fuse(s: &str) -> Option<FuseType> {
    let t: String = s.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect();
    if t.contains("3036") || t.contains("rewireable") {
        Some(FuseType::Bs3036)
    } else if t.contains("1361") || t.contains("88-3") || t.contains("88part3") {
        Some(FuseType::Bs88Part3)
    } else if t.contains("1362") {
        Some(FuseType::Bs1362)
    } else if t.contains("bs88") || t.contains("60269") {
        Some(FuseType::Bs88Part2)
    } else {
        None
    }
}

fn parse_location(s: &str) -> Option<LocationClass> {
    let t = s.to_lowercase();
    if contains_any(&t, &["bath", "shower room", "en-suite", "ensuite", "wet room"]) {
        Some(LocationClass::Bathroom)
    } else if contains_any(&t, &["pool", "swimming"]) {
        Some(LocationClass::SwimmingPool)
    } else if contains_any(&t, &["outdoor", "outside", "garden", "external"]) {
        Some(LocationClass::Outdoor)
    } else if t.contains("kitchen") {
        Some(LocationClass::Kitchen)
    } else if contains_any(&t, &["general", "indoor", "internal", "domestic"]) {
        Some(LocationClass::General)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record() -> CircuitRecord {
        CircuitRecord::new("c1")
    }

    #[rstest]
    #[case(Some("B"), None, Some(DeviceCurve::B))]
    #[case(Some("Type C"), None, Some(DeviceCurve::C))]
    #[case(None, Some("D16"), Some(DeviceCurve::D))]
    #[case(Some("N/A"), Some("B32"), Some(DeviceCurve::B))]
    #[case(Some("K"), None, None)]
    #[case(None, None, None)]
    fn test_device_curve(
        #[case] curve: Option<&str>,
        #[case] code: Option<&str>,
        #[case] expected: Option<DeviceCurve>,
    ) {
        let mut r = record();
        r.protective_device_curve = curve.map(Into::into);
        r.protective_device = code.map(Into::into);
        assert_eq!(r.device_curve(), expected);
    }

    #[test]
    fn test_device_rating_sources() {
        let mut r = record();
        r.protective_device_rating = Some("32A".into());
        assert_eq!(r.device_rating(), Some(32));

        let mut r = record();
        r.protective_device = Some("C16".into());
        assert_eq!(r.device_rating(), Some(16));

        let mut r = record();
        r.protective_device_rating = Some("6.5".into());
        assert_eq!(r.device_rating(), None);
    }

    #[test]
    fn test_disconnection_time_derivation() {
        let mut r = record();
        r.protective_device_rating = Some("40".into());
        assert_eq!(r.disconnection_time(), Some(DisconnectionTime::Slow));

        r.circuit_type = Some("Radial sockets".into());
        assert_eq!(r.disconnection_time(), Some(DisconnectionTime::Fast));

        r.disconnection_time = Some("5s".into());
        assert_eq!(r.disconnection_time(), Some(DisconnectionTime::Slow));

        let mut r = record();
        r.circuit_type = Some("Sub-main to garage".into());
        r.protective_device_rating = Some("32".into());
        assert_eq!(r.disconnection_time(), Some(DisconnectionTime::Slow));

        assert_eq!(record().disconnection_time(), None);
    }

    #[test]
    fn test_location_explicit_wins_over_description() {
        let mut r = record();
        r.circuit_description = Some("Bathroom lighting".into());
        assert_eq!(r.location_class(), Some(LocationClass::Bathroom));

        r.location = Some("kitchen".into());
        assert_eq!(r.location_class(), Some(LocationClass::Kitchen));

        let mut r = record();
        r.circuit_description = Some("Garden sockets".into());
        assert_eq!(r.location_class(), Some(LocationClass::Outdoor));

        assert_eq!(record().location_class(), None);
    }

    #[rstest]
    #[case("Ring Final", Some(CircuitFunction::RingFinal))]
    #[case("Radial - Sockets", Some(CircuitFunction::RadialSocket))]
    #[case("Lighting", Some(CircuitFunction::Lighting))]
    #[case("Cooker Circuit", Some(CircuitFunction::Cooker))]
    #[case("Sub-main to garage", Some(CircuitFunction::Distribution))]
    #[case("Spare", None)]
    #[case("Rewiring - spare way", None)]
    fn test_circuit_function(#[case] circuit_type: &str, #[case] expected: Option<CircuitFunction>) {
        let mut r = record();
        r.circuit_type = Some(circuit_type.into());
        assert_eq!(r.circuit_function(), expected);
    }

    #[test]
    fn test_rcd_presence_needs_rating_and_standard() {
        let mut r = record();
        r.rcd_rating = Some("30mA".into());
        assert!(!r.has_rcd());
        r.rcd_bs_standard = Some("N/A".into());
        assert!(!r.has_rcd());
        r.rcd_bs_standard = Some("BS EN 61008-1".into());
        assert!(r.has_rcd());
        assert_eq!(r.rcd_rating_ma(), Some(30.0));
    }

    #[test]
    fn test_rcd_type_classification() {
        let mut r = record();
        assert_eq!(r.rcd_class(), RcdClass::General);
        r.rcd_type = Some("Type S".into());
        assert_eq!(r.rcd_class(), RcdClass::Selective);
        r.rcd_type = Some("Type AC".into());
        assert!(r.rcd_is_type_ac());
        r.rcd_type = Some("Type A".into());
        assert!(!r.rcd_is_type_ac());
    }

    #[test]
    fn test_premises_and_phase() {
        let mut r = record();
        r.premises_type = Some("HMO".into());
        assert_eq!(r.premises(), Some(PremisesType::HouseInMultipleOccupation));
        assert!(PremisesType::CareHome.is_afdd_high_risk());
        assert!(!PremisesType::Domestic.is_afdd_high_risk());

        r.phase_type = Some("Three-phase".into());
        assert_eq!(r.phase(), Some(PhaseType::ThreePhase));
        r.phase_type = Some("single-phase".into());
        assert_eq!(r.phase(), Some(PhaseType::SinglePhase));
    }

    #[rstest]
    #[case("230V single-phase", Some(PhaseType::SinglePhase))]
    #[case("400V 3ph", Some(PhaseType::ThreePhase))]
    #[case("TPN", Some(PhaseType::ThreePhase))]
    #[case("SP", Some(PhaseType::SinglePhase))]
    #[case("230V", None)]
    fn test_phase_matches_whole_tokens(#[case] phase: &str, #[case] expected: Option<PhaseType>) {
        let mut r = record();
        r.phase_type = Some(phase.into());
        assert_eq!(r.phase(), expected);
    }

    #[rstest]
    #[case(Some("BS 88-2"), None, Some(FuseType::Bs88Part2))]
    #[case(Some("BS EN 60269-2"), None, Some(FuseType::Bs88Part2))]
    #[case(Some("BS 1361"), None, Some(FuseType::Bs88Part3))]
    #[case(Some("BS 88-3"), None, Some(FuseType::Bs88Part3))]
    #[case(None, Some("BS3036 rewireable"), Some(FuseType::Bs3036))]
    #[case(Some("BS EN 60898"), Some("MCB"), None)]
    #[case(Some("BS EN 61009"), Some("RCBO"), None)]
    #[case(None, None, None)]
    fn test_fuse_type(
        #[case] standard: Option<&str>,
        #[case] device_type: Option<&str>,
        #[case] expected: Option<FuseType>,
    ) {
        let mut r = record();
        r.bs_standard = standard.map(Into::into);
        r.protective_device_type = device_type.map(Into::into);
        assert_eq!(r.fuse_type(), expected);
    }
}
