//! # natal-ephem
//!
//! Astrology-facing adapter over the Swiss Ephemeris engine.
//!
//! This crate translates chart-layer symbols (bodies, house systems, fixed
//! star names) into engine codes, makes one engine call per value, and
//! reshapes the engine's positional output into labeled records.
//!
//! ## Features
//!
//! - Body positions and longitudes
//! - Next rise/set of a body at a location
//! - Houses with sizes, and the four chart angles
//! - Fixed star positions and magnitudes
//! - Global solar and lunar eclipse searches
//!
//! ## Engines
//!
//! Queries go through the [`EphemerisEngine`] trait. The `swisseph` feature
//! enables [`SwissEphemeris`], linked against `libswe`. The default
//! `fixture-engine` feature provides [`FixtureEngine`], an in-memory engine
//! answering from canned data.
//!
//! ## Example
//!
//! ```rust,ignore
//! use natal_ephem::{Body, CalcFlags, Ephemeris, EphemerisConfig, HouseSystem};
//!
//! let config = EphemerisConfig::from_file("ephemeris.toml")?;
//! let eph = Ephemeris::swisseph(&config)?;
//!
//! let moon = eph.body_position("Moon".parse::<Body>()?, 2451545.0, CalcFlags::SPEED)?;
//! let chart = eph.houses(2451545.0, 51.5, -0.12, HouseSystem::WholeSign, CalcFlags::NONE)?;
//! println!("Moon at {:.2}, Asc at {:.2}", moon.lon, chart.angles[0].lon);
//! ```

#[macro_use]
mod macros;

pub mod angle;
mod cache;
mod config;
mod context;
mod engine;
mod error;
pub mod houses;
mod records;
mod types;

#[cfg(feature = "fixture-engine")]
mod fixture;
#[cfg(feature = "swisseph")]
mod swisseph;

pub use cache::MagnitudeCache;
pub use config::{CacheSettings, EngineSettings, EphemerisConfig};
pub use context::Ephemeris;
pub use engine::{
    Atmosphere, EphemerisEngine, GeoPosition, RawEclipse, RawHouses, RawPosition, RawStar,
};
pub use error::{Error, Result};
pub use records::*;
pub use types::*;

#[cfg(feature = "fixture-engine")]
pub use fixture::{EngineCall, FixtureEngine};
#[cfg(feature = "swisseph")]
pub use swisseph::SwissEphemeris;

/// Version of the linked Swiss Ephemeris library
#[cfg(feature = "swisseph")]
pub fn swisseph_version() -> String {
    let mut buf = [0 as std::os::raw::c_char; sweph_sys::AS_MAXCH];
    unsafe {
        sweph_sys::swe_version(buf.as_mut_ptr());
        std::ffi::CStr::from_ptr(buf.as_ptr())
            .to_string_lossy()
            .into_owned()
    }
}
