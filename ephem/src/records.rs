//! Labeled records returned by the ephemeris queries.
//!
//! Records are built fresh for each call from the engine's positional output
//! and never change afterwards.

use serde::{Deserialize, Serialize};

use crate::types::{AngleId, Body, HouseId};

/// Position of a body at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub id: Body,
    /// Ecliptic longitude in degrees
    pub lon: f64,
    /// Ecliptic latitude in degrees
    pub lat: f64,
    /// Degrees per day
    pub lon_speed: f64,
    /// Degrees per day
    pub lat_speed: f64,
    /// Flags the engine actually used
    pub flags: i32,
}

impl BodyPosition {
    /// Reshape the engine's `[lon, lat, dist, lon_speed, lat_speed, dist_speed]`.
    /// Distance and its speed are dropped.
    pub fn from_engine(id: Body, xx: &[f64; 6], flags: i32) -> Self {
        Self {
            id,
            lon: xx[0],
            lat: xx[1],
            lon_speed: xx[3],
            lat_speed: xx[4],
            flags,
        }
    }
}

/// One house: its cusp and its span up to the next cusp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseRecord {
    pub id: HouseId,
    pub lon: f64,
    pub size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleRecord {
    pub id: AngleId,
    pub lon: f64,
}

/// Houses and angles from one house query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Houses {
    pub houses: [HouseRecord; 12],
    /// Asc, MC, Desc, IC
    pub angles: [AngleRecord; 4],
}

impl Houses {
    pub fn house(&self, id: HouseId) -> &HouseRecord {
        &self.houses[id as usize]
    }

    pub fn angle(&self, id: AngleId) -> &AngleRecord {
        &self.angles[id as usize]
    }
}

/// Raw longitudes from one house query, without labels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseLongitudes {
    pub cusps: [f64; 12],
    /// Asc, MC, Desc, IC
    pub angles: [f64; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedStarRecord {
    /// Star name as requested by the caller
    pub id: String,
    /// Visual magnitude
    pub mag: f64,
    pub lon: f64,
    pub lat: f64,
}

/// Phase instants of a global solar eclipse, as Julian days (UT).
///
/// Phases the eclipse does not have are reported by the engine as `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarEclipse {
    pub maximum: f64,
    pub begin: f64,
    pub end: f64,
    pub totality_begin: f64,
    pub totality_end: f64,
    pub center_line_begin: f64,
    pub center_line_end: f64,
}

impl SolarEclipse {
    /// Relabel the engine's `tret` array. Index 1 (local noon) is skipped.
    pub fn from_tret(tret: &[f64; 10]) -> Self {
        Self {
            maximum: tret[0],
            begin: tret[2],
            end: tret[3],
            totality_begin: tret[4],
            totality_end: tret[5],
            center_line_begin: tret[6],
            center_line_end: tret[7],
        }
    }
}

/// Phase instants of a lunar eclipse, as Julian days (UT)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LunarEclipse {
    pub maximum: f64,
    pub partial_begin: f64,
    pub partial_end: f64,
    pub totality_begin: f64,
    pub totality_end: f64,
    pub penumbral_begin: f64,
    pub penumbral_end: f64,
}

impl LunarEclipse {
    pub fn from_tret(tret: &[f64; 10]) -> Self {
        Self {
            maximum: tret[0],
            partial_begin: tret[2],
            partial_end: tret[3],
            totality_begin: tret[4],
            totality_end: tret[5],
            penumbral_begin: tret[6],
            penumbral_end: tret[7],
        }
    }
}
