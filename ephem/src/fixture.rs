//! In-memory ephemeris engine for tests and development.
//!
//! [`FixtureEngine`] answers from canned data instead of ephemeris files and
//! records every call it receives, so callers can check exactly what the
//! adapter sent to the engine.
//!
//! Houses not registered explicitly are generated from the configured
//! Ascendant and Midheaven: whole-sign for `W`, equal houses for `A`/`E`,
//! and quadrant trisection for everything else.

use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};

use crate::angle;
use crate::engine::{
    Atmosphere, EphemerisEngine, GeoPosition, RawEclipse, RawHouses, RawPosition, RawStar,
};
use crate::error::{Error, Result};

const NO_ECLIPSE: &str = "no eclipse found";

/// One call received by a [`FixtureEngine`]
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    CalcUt {
        jd_ut: f64,
        body: i32,
        flags: i32,
    },
    RiseTrans {
        jd_ut: f64,
        body: i32,
        flags: i32,
        rsmi: i32,
        geopos: GeoPosition,
        atmosphere: Atmosphere,
    },
    HousesEx {
        jd_ut: f64,
        flags: i32,
        lat: f64,
        lon: f64,
        hsys: u8,
    },
    FixstarUt {
        star: String,
        jd_ut: f64,
        flags: i32,
    },
    FixstarMag {
        star: String,
    },
    SolEclipseWhenGlob {
        jd_ut: f64,
        backward: bool,
    },
    LunEclipseWhen {
        jd_ut: f64,
        backward: bool,
    },
}

#[derive(Debug, Clone)]
struct FixtureStar {
    xx: [f64; 6],
    mag: f64,
    catalog_name: String,
}

#[derive(Debug)]
pub struct FixtureEngine {
    positions: HashMap<i32, [f64; 6]>,
    houses: HashMap<u8, RawHouses>,
    ascendant: f64,
    midheaven: f64,
    stars: HashMap<String, FixtureStar>,
    solar_eclipses: Vec<RawEclipse>,
    lunar_eclipses: Vec<RawEclipse>,
    rise_offset: f64,
    set_offset: f64,
    circumpolar: HashSet<i32>,
    calls: Mutex<Vec<EngineCall>>,
}

impl Default for FixtureEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureEngine {
    /// Empty fixture: Ascendant 100°, MC 10°, rises 0.25 d and sets 0.75 d
    /// after the search start.
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
            houses: HashMap::new(),
            ascendant: 100.0,
            midheaven: 10.0,
            stars: HashMap::new(),
            solar_eclipses: Vec::new(),
            lunar_eclipses: Vec::new(),
            rise_offset: 0.25,
            set_offset: 0.75,
            circumpolar: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Register the raw `calc_ut` output for a body code
    pub fn with_position(mut self, body: i32, xx: [f64; 6]) -> Self {
        self.positions.insert(body, xx);
        self
    }

    /// Set the angles used to generate houses
    pub fn with_angles(mut self, ascendant: f64, midheaven: f64) -> Self {
        self.ascendant = angle::norm(ascendant);
        self.midheaven = angle::norm(midheaven);
        self
    }

    /// Register explicit house output for one house system code
    pub fn with_houses(mut self, hsys: u8, cusps: [f64; 12], ascmc: [f64; 10]) -> Self {
        self.houses.insert(hsys, RawHouses { cusps, ascmc });
        self
    }

    pub fn with_star(mut self, name: &str, lon: f64, lat: f64, mag: f64) -> Self {
        self.stars.insert(
            name.to_string(),
            FixtureStar {
                xx: [lon, lat, 1.0e6, 0.0, 0.0, 0.0],
                mag,
                catalog_name: name.to_string(),
            },
        );
        self
    }

    pub fn with_solar_eclipse(mut self, kind: i32, tret: [f64; 10]) -> Self {
        insert_by_maximum(&mut self.solar_eclipses, RawEclipse { kind, tret });
        self
    }

    pub fn with_lunar_eclipse(mut self, kind: i32, tret: [f64; 10]) -> Self {
        insert_by_maximum(&mut self.lunar_eclipses, RawEclipse { kind, tret });
        self
    }

    /// Offsets in days from the search start to the reported rise and set
    pub fn with_transit_offsets(mut self, rise: f64, set: f64) -> Self {
        self.rise_offset = rise;
        self.set_offset = set;
        self
    }

    /// Make transit searches for this body fail as circumpolar
    pub fn with_circumpolar(mut self, body: i32) -> Self {
        self.circumpolar.insert(body);
        self
    }

    /// Every call received so far, oldest first
    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().clone()
    }

    /// Number of recorded calls matching `pred`
    pub fn count_calls<F>(&self, pred: F) -> usize
    where
        F: Fn(&EngineCall) -> bool,
    {
        self.calls.lock().iter().filter(|c| pred(c)).count()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    fn record(&self, call: EngineCall) {
        self.calls.lock().push(call);
    }

    fn star(&self, routine: &'static str, star: &str) -> Result<&FixtureStar> {
        let missing = || Error::engine(routine, -1, format!("star {} not found", star));
        self.stars.get(star).ok_or_else(missing)
    }

    fn generated_cusps(&self, hsys: u8) -> [f64; 12] {
        let asc = self.ascendant;
        match hsys {
            b'W' => {
                let start = (asc / 30.0).floor() * 30.0;
                std::array::from_fn(|i| angle::norm(start + 30.0 * i as f64))
            }
            b'A' | b'E' => std::array::from_fn(|i| angle::norm(asc + 30.0 * i as f64)),
            _ => {
                // houses 1, 4, 7, 10 sit on Asc, IC, Desc, MC
                let anchors = [
                    asc,
                    angle::opposite(self.midheaven),
                    angle::opposite(asc),
                    self.midheaven,
                ];
                std::array::from_fn(|i| {
                    let (q, k) = (i / 3, i % 3);
                    let from = anchors[q];
                    let step = angle::distance(from, anchors[(q + 1) % 4]) / 3.0;
                    angle::norm(from + step * k as f64)
                })
            }
        }
    }

    fn search(eclipses: &[RawEclipse], jd_ut: f64, backward: bool) -> Option<RawEclipse> {
        if backward {
            eclipses.iter().rev().find(|e| e.tret[0] < jd_ut).copied()
        } else {
            eclipses.iter().find(|e| e.tret[0] >= jd_ut).copied()
        }
    }
}

fn insert_by_maximum(eclipses: &mut Vec<RawEclipse>, eclipse: RawEclipse) {
    eclipses.push(eclipse);
    eclipses.sort_by(|a, b| a.tret[0].total_cmp(&b.tret[0]));
}

impl EphemerisEngine for FixtureEngine {
    fn calc_ut(&self, jd_ut: f64, body: i32, flags: i32) -> Result<RawPosition> {
        self.record(EngineCall::CalcUt { jd_ut, body, flags });
        let Some(xx) = self.positions.get(&body) else {
            let msg = format!("illegal planet number {}.", body);
            return Err(Error::engine("swe_calc_ut", -1, msg));
        };
        Ok(RawPosition { xx: *xx, flags })
    }

    fn rise_trans(
        &self,
        jd_ut: f64,
        body: i32,
        flags: i32,
        rsmi: i32,
        geopos: GeoPosition,
        atmosphere: Atmosphere,
    ) -> Result<f64> {
        self.record(EngineCall::RiseTrans {
            jd_ut,
            body,
            flags,
            rsmi,
            geopos,
            atmosphere,
        });
        if self.circumpolar.contains(&body) {
            return Err(Error::engine("swe_rise_trans", -2, ""));
        }
        let offset = if rsmi & 1 != 0 {
            self.rise_offset
        } else {
            self.set_offset
        };
        Ok(jd_ut + offset)
    }

    fn houses_ex(
        &self,
        jd_ut: f64,
        flags: i32,
        geolat: f64,
        geolon: f64,
        hsys: u8,
    ) -> Result<RawHouses> {
        self.record(EngineCall::HousesEx {
            jd_ut,
            flags,
            lat: geolat,
            lon: geolon,
            hsys,
        });
        if let Some(houses) = self.houses.get(&hsys) {
            return Ok(*houses);
        }
        let mut ascmc = [0.0; 10];
        ascmc[0] = self.ascendant;
        ascmc[1] = self.midheaven;
        Ok(RawHouses {
            cusps: self.generated_cusps(hsys),
            ascmc,
        })
    }

    fn fixstar_ut(&self, star: &str, jd_ut: f64, flags: i32) -> Result<RawStar> {
        self.record(EngineCall::FixstarUt {
            star: star.to_string(),
            jd_ut,
            flags,
        });
        let entry = self.star("swe_fixstar2_ut", star)?;
        Ok(RawStar {
            xx: entry.xx,
            catalog_name: entry.catalog_name.clone(),
            flags,
        })
    }

    fn fixstar_mag(&self, star: &str) -> Result<f64> {
        self.record(EngineCall::FixstarMag {
            star: star.to_string(),
        });
        Ok(self.star("swe_fixstar2_mag", star)?.mag)
    }

    fn sol_eclipse_when_glob(
        &self,
        jd_ut: f64,
        _flags: i32,
        _kind: i32,
        backward: bool,
    ) -> Result<RawEclipse> {
        self.record(EngineCall::SolEclipseWhenGlob { jd_ut, backward });
        let found = Self::search(&self.solar_eclipses, jd_ut, backward);
        let routine = "swe_sol_eclipse_when_glob";
        found.ok_or_else(|| Error::engine(routine, -1, NO_ECLIPSE))
    }

    fn lun_eclipse_when(
        &self,
        jd_ut: f64,
        _flags: i32,
        _kind: i32,
        backward: bool,
    ) -> Result<RawEclipse> {
        self.record(EngineCall::LunEclipseWhen { jd_ut, backward });
        let found = Self::search(&self.lunar_eclipses, jd_ut, backward);
        found.ok_or_else(|| Error::engine("swe_lun_eclipse_when", -1, NO_ECLIPSE))
    }

    fn version(&self) -> String {
        "fixture".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_whole_sign() {
        let engine = FixtureEngine::new().with_angles(100.0, 10.0);
        let houses = engine.houses_ex(2451545.0, 0, 51.5, 0.0, b'W').unwrap();
        assert_eq!(houses.cusps[0], 90.0);
        assert_eq!(houses.cusps[11], 60.0);
        assert_eq!(houses.ascmc[0], 100.0);
    }

    #[test]
    fn test_generated_quadrants_hit_angles() {
        let engine = FixtureEngine::new().with_angles(100.0, 10.0);
        let houses = engine.houses_ex(2451545.0, 0, 51.5, 0.0, b'P').unwrap();
        assert_eq!(houses.cusps[0], 100.0);
        assert_eq!(houses.cusps[3], 190.0);
        assert_eq!(houses.cusps[6], 280.0);
        assert_eq!(houses.cusps[9], 10.0);
    }

    #[test]
    fn test_eclipse_search_direction() {
        let mut a = [0.0; 10];
        a[0] = 100.0;
        let mut b = [0.0; 10];
        b[0] = 200.0;
        let engine = FixtureEngine::new()
            .with_solar_eclipse(4, b)
            .with_solar_eclipse(4, a);

        let before = engine.sol_eclipse_when_glob(150.0, 2, 0, true).unwrap();
        let after = engine.sol_eclipse_when_glob(150.0, 2, 0, false).unwrap();
        assert_eq!(before.tret[0], 100.0);
        assert_eq!(after.tret[0], 200.0);

        // backward is strictly before, forward is at-or-after
        assert!(engine.sol_eclipse_when_glob(100.0, 2, 0, true).is_err());
        let same = engine.sol_eclipse_when_glob(200.0, 2, 0, false).unwrap();
        assert_eq!(same.tret[0], 200.0);
    }

    #[test]
    fn test_calls_are_recorded() {
        let engine = FixtureEngine::new().with_position(0, [280.0, 0.0, 0.98, 1.02, 0.0, 0.0]);
        engine.calc_ut(2451545.0, 0, 256).unwrap();
        assert!(engine.calc_ut(2451545.0, 99, 0).is_err());

        assert_eq!(
            engine.calls()[0],
            EngineCall::CalcUt {
                jd_ut: 2451545.0,
                body: 0,
                flags: 256
            }
        );
        let calc_calls = engine.count_calls(|c| matches!(c, EngineCall::CalcUt { .. }));
        assert_eq!(calc_calls, 2);
        engine.clear_calls();
        assert!(engine.calls().is_empty());
    }
}
