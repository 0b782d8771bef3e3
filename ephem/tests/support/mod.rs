//! Shared fixtures for the adapter integration tests.

#![allow(dead_code)]

use natal_ephem::{Ephemeris, FixtureEngine};

/// J2000.0 epoch
pub const J2000: f64 = 2451545.0;

/// Greenwich
pub const LAT: f64 = 51.4769;
pub const LON: f64 = -0.0005;

/// Raw `calc_ut` output for the Sun at J2000 (ecliptic, with speeds)
pub const SUN_J2000: [f64; 6] = [
    280.368_920,
    0.000_227,
    0.983_328,
    1.019_432,
    0.000_004,
    -0.000_001,
];

/// Raw `calc_ut` output for the Moon at J2000
pub const MOON_J2000: [f64; 6] = [
    223.323_754,
    5.170_840,
    0.002_690,
    12.021_183,
    -0.636_227,
    0.000_013,
];

/// Total solar eclipse of 2001-06-21 (maximum and phase contacts)
pub const SOLAR_2001: f64 = 2452082.003_9;

/// Total lunar eclipse of 2000-07-16
pub const LUNAR_2000: f64 = 2451741.652_7;

/// Build an eclipse `tret` array from its maximum, with phases spread
/// around it.
pub fn tret_around(maximum: f64) -> [f64; 10] {
    let mut tret = [0.0; 10];
    tret[0] = maximum;
    tret[1] = maximum + 0.01;
    tret[2] = maximum - 0.10;
    tret[3] = maximum + 0.10;
    tret[4] = maximum - 0.05;
    tret[5] = maximum + 0.05;
    tret[6] = maximum - 0.08;
    tret[7] = maximum + 0.08;
    tret
}

/// A fixture engine with Sun, Moon, two stars and one eclipse of each kind
pub fn populated_engine() -> FixtureEngine {
    FixtureEngine::new()
        .with_position(0, SUN_J2000)
        .with_position(1, MOON_J2000)
        .with_star("Regulus", 149.829_6, 0.465_3, 1.40)
        .with_star("Spica", 203.841_1, -2.054_2, 0.97)
        .with_solar_eclipse(4, tret_around(SOLAR_2001))
        .with_lunar_eclipse(4, tret_around(LUNAR_2000))
}

pub fn ephemeris() -> Ephemeris<FixtureEngine> {
    Ephemeris::from_engine(populated_engine())
}
