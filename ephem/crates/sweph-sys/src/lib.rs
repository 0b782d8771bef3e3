//! # sweph-sys
//!
//! Low-level FFI bindings to the Swiss Ephemeris C library (`libswe`).
//!
//! This crate provides raw, unsafe bindings to the C API. For a safe API built
//! around an explicit ephemeris context, use the `natal-ephem` crate instead.
//!
//! ## Safety
//!
//! All functions in this crate are unsafe. Users must ensure:
//! - Output buffers have at least the sizes documented on each function
//! - Strings are null-terminated
//! - Error buffers (`serr`) hold at least [`AS_MAXCH`] bytes
//! - Calls are serialized: the engine keeps process-wide state (ephemeris path,
//!   sidereal mode, open file handles) and is not thread-safe
//!
//! ## Example
//!
//! ```rust,ignore
//! use sweph_sys::*;
//! use std::os::raw::c_char;
//!
//! let mut xx = [0.0f64; 6];
//! let mut serr = [0 as c_char; AS_MAXCH];
//! let (xp, sp) = (xx.as_mut_ptr(), serr.as_mut_ptr());
//! let flags = unsafe { swe_calc_ut(2451545.0, SE_SUN, SEFLG_SWIEPH, xp, sp) };
//! assert!(flags >= 0);
//! ```

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

use std::os::raw::{c_char, c_double, c_int};

pub type int32 = i32;

// ============================================================================
// Return codes and buffer sizes
// ============================================================================

pub const OK: int32 = 0;
pub const ERR: int32 = -1;

/// Size of the error message buffer expected by every `serr` argument
pub const AS_MAXCH: usize = 256;

/// Size of the in/out star name buffer used by the fixed star routines
pub const SE_MAX_STNAME: usize = 256;

// ============================================================================
// Body numbers
// ============================================================================

pub const SE_SUN: int32 = 0;
pub const SE_MOON: int32 = 1;
pub const SE_MERCURY: int32 = 2;
pub const SE_VENUS: int32 = 3;
pub const SE_MARS: int32 = 4;
pub const SE_JUPITER: int32 = 5;
pub const SE_SATURN: int32 = 6;
pub const SE_URANUS: int32 = 7;
pub const SE_NEPTUNE: int32 = 8;
pub const SE_PLUTO: int32 = 9;
pub const SE_MEAN_NODE: int32 = 10;
pub const SE_TRUE_NODE: int32 = 11;
pub const SE_MEAN_APOG: int32 = 12;
pub const SE_OSCU_APOG: int32 = 13;
pub const SE_EARTH: int32 = 14;
pub const SE_CHIRON: int32 = 15;
pub const SE_PHOLUS: int32 = 16;
pub const SE_CERES: int32 = 17;
pub const SE_PALLAS: int32 = 18;
pub const SE_JUNO: int32 = 19;
pub const SE_VESTA: int32 = 20;

// ============================================================================
// Calculation flags
// ============================================================================

pub const SEFLG_JPLEPH: int32 = 1;
pub const SEFLG_SWIEPH: int32 = 2;
pub const SEFLG_MOSEPH: int32 = 4;
pub const SEFLG_HELCTR: int32 = 8;
pub const SEFLG_TRUEPOS: int32 = 16;
pub const SEFLG_J2000: int32 = 32;
pub const SEFLG_NONUT: int32 = 64;
pub const SEFLG_SPEED3: int32 = 128;
pub const SEFLG_SPEED: int32 = 256;
pub const SEFLG_NOGDEFL: int32 = 512;
pub const SEFLG_NOABERR: int32 = 1024;
pub const SEFLG_EQUATORIAL: int32 = 2 * 1024;
pub const SEFLG_XYZ: int32 = 4 * 1024;
pub const SEFLG_RADIANS: int32 = 8 * 1024;
pub const SEFLG_BARYCTR: int32 = 16 * 1024;
pub const SEFLG_TOPOCTR: int32 = 32 * 1024;
pub const SEFLG_SIDEREAL: int32 = 64 * 1024;

// ============================================================================
// Sidereal modes (ayanamsas)
// ============================================================================

pub const SE_SIDM_FAGAN_BRADLEY: int32 = 0;
pub const SE_SIDM_LAHIRI: int32 = 1;
pub const SE_SIDM_DELUCE: int32 = 2;
pub const SE_SIDM_RAMAN: int32 = 3;
pub const SE_SIDM_USHASHASHI: int32 = 4;
pub const SE_SIDM_KRISHNAMURTI: int32 = 5;
pub const SE_SIDM_DJWHAL_KHUL: int32 = 6;
pub const SE_SIDM_YUKTESHWAR: int32 = 7;
pub const SE_SIDM_JN_BHASIN: int32 = 8;

// ============================================================================
// Rise / set selectors
// ============================================================================

pub const SE_CALC_RISE: int32 = 1;
pub const SE_CALC_SET: int32 = 2;
pub const SE_CALC_MTRANSIT: int32 = 4;
pub const SE_CALC_ITRANSIT: int32 = 8;

// ============================================================================
// Eclipse type masks
// ============================================================================

pub const SE_ECL_CENTRAL: int32 = 1;
pub const SE_ECL_NONCENTRAL: int32 = 2;
pub const SE_ECL_TOTAL: int32 = 4;
pub const SE_ECL_ANNULAR: int32 = 8;
pub const SE_ECL_PARTIAL: int32 = 16;
pub const SE_ECL_ANNULAR_TOTAL: int32 = 32;
pub const SE_ECL_PENUMBRAL: int32 = 64;

// ============================================================================
// FFI Function Declarations
// ============================================================================

extern "C" {
    // Configuration
    pub fn swe_set_ephe_path(path: *const c_char);
    pub fn swe_set_sid_mode(sid_mode: int32, t0: c_double, ayan_t0: c_double);
    pub fn swe_close();

    /// Writes the version string into `s` (at least [`AS_MAXCH`] bytes) and returns `s`.
    pub fn swe_version(s: *mut c_char) -> *mut c_char;

    /// `xx` must hold 6 doubles: lon, lat, distance, lon speed, lat speed, distance speed.
    /// Returns the flags actually used, or [`ERR`].
    pub fn swe_calc_ut(
        tjd_ut: c_double,
        ipl: int32,
        iflag: int32,
        xx: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    /// `geopos` holds lon, lat, height. Only `tret[0]` is written.
    /// Returns [`OK`], [`ERR`], or -2 when the body never rises or sets.
    pub fn swe_rise_trans(
        tjd_ut: c_double,
        ipl: int32,
        starname: *mut c_char,
        epheflag: int32,
        rsmi: int32,
        geopos: *mut c_double,
        atpress: c_double,
        attemp: c_double,
        tret: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    /// `cusps` must hold 13 doubles (index 0 unused), `ascmc` 10 doubles.
    pub fn swe_houses_ex(
        tjd_ut: c_double,
        iflag: int32,
        geolat: c_double,
        geolon: c_double,
        hsys: c_int,
        cusps: *mut c_double,
        ascmc: *mut c_double,
    ) -> c_int;

    /// `star` is an in/out buffer of [`SE_MAX_STNAME`] bytes; the engine writes back
    /// the catalog name. `xx` must hold 6 doubles.
    pub fn swe_fixstar2_ut(
        star: *mut c_char,
        tjd_ut: c_double,
        iflag: int32,
        xx: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    /// Looks up the visual magnitude. Re-reads the star catalog on every call.
    pub fn swe_fixstar2_mag(star: *mut c_char, mag: *mut c_double, serr: *mut c_char) -> int32;

    /// `tret` must hold 10 doubles. Returns the eclipse type mask or [`ERR`].
    pub fn swe_sol_eclipse_when_glob(
        tjd_start: c_double,
        ifl: int32,
        ifltype: int32,
        tret: *mut c_double,
        backward: int32,
        serr: *mut c_char,
    ) -> int32;

    /// `tret` must hold 10 doubles. Returns the eclipse type mask or [`ERR`].
    pub fn swe_lun_eclipse_when(
        tjd_start: c_double,
        ifl: int32,
        ifltype: int32,
        tret: *mut c_double,
        backward: int32,
        serr: *mut c_char,
    ) -> int32;
}
