//! The seam between the adapter and an ephemeris engine.
//!
//! [`EphemerisEngine`] mirrors the engine routines one to one: it takes engine
//! codes and returns the engine's raw arrays. Labeling and reshaping happen in
//! the adapter, never here.

use crate::error::Result;

/// Raw `[lon, lat, dist, lon_speed, lat_speed, dist_speed]` plus the flags the
/// engine actually used
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPosition {
    pub xx: [f64; 6],
    pub flags: i32,
}

/// Raw house output: cusps 1 to 12 and the `ascmc` array
/// (`[0]` Ascendant, `[1]` MC, the rest engine extras)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawHouses {
    pub cusps: [f64; 12],
    pub ascmc: [f64; 10],
}

/// Raw fixed star output
#[derive(Debug, Clone, PartialEq)]
pub struct RawStar {
    pub xx: [f64; 6],
    /// Name as resolved by the star catalog
    pub catalog_name: String,
    pub flags: i32,
}

/// Raw global eclipse output: the eclipse type mask and the `tret` array
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawEclipse {
    pub kind: i32,
    pub tret: [f64; 10],
}

/// Geographic observer position for transit searches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    /// Degrees, east positive
    pub lon: f64,
    /// Degrees, north positive
    pub lat: f64,
    /// Meters above sea level
    pub height: f64,
}

/// Atmospheric refinements for transit searches. All zero means standard
/// atmosphere and true horizon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Atmosphere {
    /// Pressure in hPa
    pub pressure: f64,
    /// Temperature in °C
    pub temperature: f64,
}

/// Engine routines used by the adapter.
///
/// Implementations must pass engine failures through without rewording them.
/// Every method blocks until the engine returns.
pub trait EphemerisEngine {
    /// Body position at a UT Julian day
    fn calc_ut(&self, jd_ut: f64, body: i32, flags: i32) -> Result<RawPosition>;

    /// Julian day of the next rise (`rsmi = 1`) or set (`rsmi = 2`) from `jd_ut`
    fn rise_trans(
        &self,
        jd_ut: f64,
        body: i32,
        flags: i32,
        rsmi: i32,
        geopos: GeoPosition,
        atmosphere: Atmosphere,
    ) -> Result<f64>;

    /// House cusps and angles; `cusps` in the result start at house 1
    fn houses_ex(
        &self,
        jd_ut: f64,
        flags: i32,
        geolat: f64,
        geolon: f64,
        hsys: u8,
    ) -> Result<RawHouses>;

    /// Fixed star position at a UT Julian day
    fn fixstar_ut(&self, star: &str, jd_ut: f64, flags: i32) -> Result<RawStar>;

    /// Fixed star visual magnitude
    fn fixstar_mag(&self, star: &str) -> Result<f64>;

    /// Global solar eclipse search. `backward` searches strictly before `jd_ut`.
    fn sol_eclipse_when_glob(
        &self,
        jd_ut: f64,
        flags: i32,
        kind: i32,
        backward: bool,
    ) -> Result<RawEclipse>;

    /// Lunar eclipse search. `backward` searches strictly before `jd_ut`.
    fn lun_eclipse_when(
        &self,
        jd_ut: f64,
        flags: i32,
        kind: i32,
        backward: bool,
    ) -> Result<RawEclipse>;

    /// Engine version string
    fn version(&self) -> String;
}
