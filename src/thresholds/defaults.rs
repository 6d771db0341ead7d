//! Built-in BS 7671:2018+A2 data.

use super::table::{CableCapacityEntry, FuseZsEntry, InsulationEntry, MaxZsEntry, RcdTripEntry, ThresholdTable};
use crate::record::{DeviceCurve, DisconnectionTime, FuseType, RcdClass};

const RATINGS: [u32; 12] = [6, 10, 16, 20, 25, 32, 40, 50, 63, 80, 100, 125];

// Table 41.3, Cmin = 0.95, circuit-breakers to BS EN 60898 and RCBOs to BS EN 61009.
const TYPE_B: [f64; 12] = [7.28, 4.37, 2.73, 2.19, 1.75, 1.37, 1.09, 0.87, 0.69, 0.55, 0.44, 0.35];
const TYPE_C: [f64; 12] = [3.64, 2.19, 1.37, 1.09, 0.87, 0.68, 0.55, 0.44, 0.35, 0.27, 0.22, 0.17];
const TYPE_D_FAST: [f64; 12] = [1.82, 1.09, 0.68, 0.55, 0.44, 0.34, 0.27, 0.22, 0.17, 0.14, 0.11, 0.09];
// Table 41.4: type D at 5 s trips at 10 x In, the same limits as type C at 0.4 s.
const TYPE_D_SLOW: [f64; 12] = TYPE_C;

// Tables 41.2 (0.4 s) and 41.4 (5 s), Cmin = 0.95, as (rating, ohms).
const BS88_2_FAST: &[(u32, f64)] = &[(2, 33.1), (4, 15.6), (6, 8.52), (10, 5.11), (16, 2.7), (20, 1.77), (25, 1.44), (32, 1.04)];
const BS88_2_SLOW: &[(u32, f64)] = &[
    (2, 44.0), (4, 21.0), (6, 13.5), (10, 7.8), (16, 4.62), (20, 3.33), (25, 2.45), (32, 1.91),
    (40, 1.42), (50, 1.09), (63, 0.81), (80, 0.62), (100, 0.45), (125, 0.37), (160, 0.29), (200, 0.2),
];
// BS 88-3 ratings, plus the 15, 30 and 60 A sizes of the BS 1361 fuses it replaced.
const BS88_3_FAST: &[(u32, f64)] = &[(5, 9.95), (15, 3.28), (16, 2.42), (20, 1.68), (30, 1.15), (32, 0.99)];
const BS88_3_SLOW: &[(u32, f64)] = &[
    (5, 16.4), (15, 5.04), (16, 3.9), (20, 3.2), (30, 1.8), (32, 1.6), (45, 1.0), (60, 0.73), (63, 0.78),
    (80, 0.6), (100, 0.46),
];
const BS3036_FAST: &[(u32, f64)] = &[(5, 9.1), (15, 2.43), (20, 1.68), (30, 1.04)];
const BS3036_SLOW: &[(u32, f64)] = &[(5, 17.1), (15, 5.22), (20, 3.88), (30, 2.43), (45, 1.2), (60, 0.87), (100, 0.44)];
const BS1362_FAST: &[(u32, f64)] = &[(3, 16.4), (13, 2.42)];
const BS1362_SLOW: &[(u32, f64)] = &[(3, 23.9), (13, 3.8)];

/// Twin-and-earth (6242Y, 70 °C) current-carrying capacity in amps.
const TWIN_AND_EARTH: &[(f64, [(&str, f64); 6])] = &[
    (1.0, [("A1", 11.0), ("A2", 13.0), ("B1", 13.0), ("B2", 16.0), ("C", 20.0), ("E", 22.0)]),
    (1.5, [("A1", 14.0), ("A2", 16.0), ("B1", 17.0), ("B2", 20.0), ("C", 26.0), ("E", 29.0)]),
    (2.5, [("A1", 18.0), ("A2", 21.0), ("B1", 23.0), ("B2", 27.0), ("C", 36.0), ("E", 39.0)]),
    (4.0, [("A1", 24.0), ("A2", 28.0), ("B1", 30.0), ("B2", 36.0), ("C", 49.0), ("E", 53.0)]),
    (6.0, [("A1", 31.0), ("A2", 36.0), ("B1", 38.0), ("B2", 46.0), ("C", 62.0), ("E", 69.0)]),
    (10.0, [("A1", 42.0), ("A2", 50.0), ("B1", 52.0), ("B2", 63.0), ("C", 85.0), ("E", 94.0)]),
];

pub(super) fn bs7671() -> ThresholdTable {
    let mut max_zs = Vec::new();
    let curves = [
        (DeviceCurve::B, DisconnectionTime::Fast, &TYPE_B),
        (DeviceCurve::B, DisconnectionTime::Slow, &TYPE_B),
        (DeviceCurve::C, DisconnectionTime::Fast, &TYPE_C),
        (DeviceCurve::C, DisconnectionTime::Slow, &TYPE_C),
        (DeviceCurve::D, DisconnectionTime::Fast, &TYPE_D_FAST),
        (DeviceCurve::D, DisconnectionTime::Slow, &TYPE_D_SLOW),
    ];
    for (curve, disconnection, limits) in curves {
        for (&rating, &tabulated_ohms) in RATINGS.iter().zip(limits.iter()) {
            max_zs.push(MaxZsEntry { curve, rating, disconnection, tabulated_ohms });
        }
    }

    let fuses = [
        (FuseType::Bs88Part2, DisconnectionTime::Fast, BS88_2_FAST),
        (FuseType::Bs88Part2, DisconnectionTime::Slow, BS88_2_SLOW),
        (FuseType::Bs88Part3, DisconnectionTime::Fast, BS88_3_FAST),
        (FuseType::Bs88Part3, DisconnectionTime::Slow, BS88_3_SLOW),
        (FuseType::Bs3036, DisconnectionTime::Fast, BS3036_FAST),
        (FuseType::Bs3036, DisconnectionTime::Slow, BS3036_SLOW),
        (FuseType::Bs1362, DisconnectionTime::Fast, BS1362_FAST),
        (FuseType::Bs1362, DisconnectionTime::Slow, BS1362_SLOW),
    ];
    let fuse_max_zs = fuses
        .iter()
        .flat_map(|&(fuse, disconnection, limits)| {
            limits.iter().map(move |&(rating, tabulated_ohms)| FuseZsEntry {
                fuse,
                rating,
                disconnection,
                tabulated_ohms,
            })
        })
        .collect();

    // Table 64.
    let min_insulation = vec![
        InsulationEntry { test_voltage: 250, min_megohms: 0.5 },
        InsulationEntry { test_voltage: 500, min_megohms: 1.0 },
        InsulationEntry { test_voltage: 1000, min_megohms: 1.0 },
    ];

    let rcd_max_trip = vec![
        RcdTripEntry { class: RcdClass::General, max_ms: 300.0 },
        RcdTripEntry { class: RcdClass::Selective, max_ms: 500.0 },
    ];

    let cable_capacity = TWIN_AND_EARTH
        .iter()
        .flat_map(|(size, methods)| {
            methods.iter().map(move |&(method, amps)| CableCapacityEntry {
                size_mm2: *size,
                method: method.to_string(),
                amps,
            })
        })
        .collect();

    ThresholdTable::from_parts(max_zs, fuse_max_zs, min_insulation, rcd_max_trip, cable_capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_curve_has_every_rating() {
        let table = bs7671();
        for curve in [DeviceCurve::B, DeviceCurve::C, DeviceCurve::D] {
            for time in [DisconnectionTime::Fast, DisconnectionTime::Slow] {
                for rating in RATINGS {
                    assert!(table.max_zs(curve, rating, time).is_some(), "{:?} {} {:?}", curve, rating, time);
                }
            }
        }
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_fuse_limits_relax_with_time() {
        let table = bs7671();
        for fuse in [FuseType::Bs88Part2, FuseType::Bs88Part3, FuseType::Bs3036, FuseType::Bs1362] {
            for e in table.fuse_max_zs.iter().filter(|e| e.fuse == fuse && e.disconnection == DisconnectionTime::Fast) {
                let slow = table.fuse_max_zs(fuse, e.rating, DisconnectionTime::Slow);
                assert!(slow.is_some(), "{:?} {} has no 5 s limit", fuse, e.rating);
                assert!(slow > table.fuse_max_zs(fuse, e.rating, DisconnectionTime::Fast));
            }
        }
    }

    #[test]
    fn test_type_d_slow_is_more_permissive() {
        let table = bs7671();
        let fast = table.max_zs(DeviceCurve::D, 32, DisconnectionTime::Fast).unwrap();
        let slow = table.max_zs(DeviceCurve::D, 32, DisconnectionTime::Slow).unwrap();
        assert!(slow > fast);
    }
}
