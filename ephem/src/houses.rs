//! House sizes and derived angles.

use crate::angle;
use crate::records::{AngleRecord, HouseLongitudes, HouseRecord, Houses};
use crate::types::{AngleId, HouseId};

/// Label the twelve cusps and size each house as the forward distance to the
/// next cusp. House 12 closes the circle back to house 1, so the sizes add up
/// to 360°.
pub fn house_records(cusps: &[f64; 12]) -> [HouseRecord; 12] {
    std::array::from_fn(|i| HouseRecord {
        id: HouseId::ALL[i],
        lon: cusps[i],
        size: angle::distance(cusps[i], cusps[(i + 1) % 12]),
    })
}

/// Asc, MC, Desc, IC. Desc and IC sit opposite Asc and MC.
pub fn angle_longitudes(asc: f64, mc: f64) -> [f64; 4] {
    [asc, mc, angle::opposite(asc), angle::opposite(mc)]
}

pub fn angle_records(asc: f64, mc: f64) -> [AngleRecord; 4] {
    let lons = angle_longitudes(asc, mc);
    std::array::from_fn(|i| AngleRecord {
        id: AngleId::ALL[i],
        lon: lons[i],
    })
}

pub(crate) fn build_houses(cusps: &[f64; 12], asc: f64, mc: f64) -> Houses {
    Houses {
        houses: house_records(cusps),
        angles: angle_records(asc, mc),
    }
}

pub(crate) fn build_longitudes(cusps: &[f64; 12], asc: f64, mc: f64) -> HouseLongitudes {
    HouseLongitudes {
        cusps: *cusps,
        angles: angle_longitudes(asc, mc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn whole_sign(start: f64) -> [f64; 12] {
        std::array::from_fn(|i| angle::norm(start + 30.0 * i as f64))
    }

    #[test]
    fn test_whole_sign_sizes_are_exact() {
        let houses = house_records(&whole_sign(270.0));
        for house in &houses {
            assert_eq!(house.size, 30.0);
        }
        assert_eq!(houses[0].id, HouseId::House1);
        assert_eq!(houses[11].id, HouseId::House12);
    }

    #[test]
    fn test_sizes_cross_zero() {
        let cusps = [
            350.0, 20.0, 48.0, 80.0, 110.0, 145.0, 170.0, 200.0, 228.0, 260.0, 290.0, 325.0,
        ];
        let houses = house_records(&cusps);
        assert_eq!(houses[0].size, 30.0);
        assert_eq!(houses[11].size, 25.0);
        let total: f64 = houses.iter().map(|h| h.size).sum();
        assert!((total - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_angles_order_and_opposition() {
        let angles = angle_records(200.0, 290.0);
        let ids: Vec<AngleId> = angles.iter().map(|a| a.id).collect();
        let expected = [AngleId::Asc, AngleId::Mc, AngleId::Desc, AngleId::Ic];
        assert_eq!(ids, expected);
        assert_eq!(angles[2].lon, 20.0);
        assert_eq!(angles[3].lon, 110.0);
    }

    #[test]
    fn test_longitudes_keep_cusps() {
        let cusps = whole_sign(0.0);
        let lons = build_longitudes(&cusps, 12.0, 275.0);
        assert_eq!(lons.cusps, cusps);
        assert_eq!(lons.angles, [12.0, 275.0, 192.0, 95.0]);
    }

    fn quadrant_cusps() -> impl Strategy<Value = [f64; 12]> {
        // increasing offsets from a random start, like a real quadrant system
        let spans = prop::array::uniform12(5.0f64..45.0);
        (0.0f64..360.0, spans).prop_map(|(start, spans)| {
            let scale = 360.0 / spans.iter().sum::<f64>();
            let mut acc = start;
            std::array::from_fn(|i| {
                let lon = angle::norm(acc);
                acc += spans[i] * scale;
                lon
            })
        })
    }

    proptest! {
        #[test]
        fn prop_house_sizes_sum_to_circle(cusps in quadrant_cusps()) {
            let houses = house_records(&cusps);
            let total: f64 = houses.iter().map(|h| h.size).sum();
            prop_assert!((total - 360.0).abs() < 1e-9);
            prop_assert!(houses.iter().all(|h| h.size >= 0.0 && h.size < 360.0));
        }

        #[test]
        fn prop_desc_and_ic_are_opposite(asc in 0.0f64..360.0, mc in 0.0f64..360.0) {
            let lons = angle_longitudes(asc, mc);
            prop_assert_eq!(lons[2], angle::norm(asc + 180.0));
            prop_assert_eq!(lons[3], angle::norm(mc + 180.0));
            prop_assert!((0.0..360.0).contains(&lons[2]));
            prop_assert!((0.0..360.0).contains(&lons[3]));
        }
    }
}
