//! Native engine backed by the Swiss Ephemeris C library.
//!
//! The C library keeps its ephemeris path, sidereal mode and open files in
//! process-wide state and is not thread-safe. Every call made through a
//! [`SwissEphemeris`] therefore takes one global lock, and re-applies this
//! instance's settings first if another instance (or nobody) applied
//! different ones last. Each instance sees its own path on every call.

use parking_lot::Mutex;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::path::{Path, PathBuf};
use std::ptr;
use sweph_sys as ffi;

use crate::config::EngineSettings;
use crate::engine::{
    Atmosphere, EphemerisEngine, GeoPosition, RawEclipse, RawHouses, RawPosition, RawStar,
};
use crate::error::{Error, Result};
use crate::types::SiderealMode;

#[derive(Debug, Clone, PartialEq)]
struct Applied {
    path: Option<CString>,
    sidereal_mode: i32,
}

/// Settings currently applied inside the C library, `None` after close
static ENGINE: Mutex<Option<Applied>> = parking_lot::const_mutex(None);

/// Swiss Ephemeris engine bound to one ephemeris path
#[derive(Debug)]
pub struct SwissEphemeris {
    path: Option<PathBuf>,
    settings: Applied,
}

impl SwissEphemeris {
    /// Create an engine reading ephemeris files from `path`, or from the
    /// library's default search path when `None`.
    pub fn new(path: Option<&Path>, sidereal_mode: Option<SiderealMode>) -> Result<Self> {
        let c_path = path.map(path_to_cstring).transpose()?;
        Ok(Self {
            path: path.map(Path::to_path_buf),
            settings: Applied {
                path: c_path,
                sidereal_mode: sidereal_mode
                    .map(|m| m.code())
                    .unwrap_or(ffi::SE_SIDM_FAGAN_BRADLEY),
            },
        })
    }

    pub fn from_settings(settings: &EngineSettings) -> Result<Self> {
        Self::new(settings.path.as_deref(), settings.sidereal_mode)
    }

    /// Ephemeris path this engine applies
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Run `f` while holding the engine lock, with this instance's settings applied.
    fn locked<T>(&self, f: impl FnOnce() -> T) -> T {
        let mut applied = ENGINE.lock();
        if applied.as_ref() != Some(&self.settings) {
            self.apply();
            *applied = Some(self.settings.clone());
        }
        f()
    }

    fn apply(&self) {
        let path_ptr = self
            .settings
            .path
            .as_ref()
            .map(|p| p.as_ptr())
            .unwrap_or(ptr::null());
        log::info!(
            "applying ephemeris path {:?}, sidereal mode {}",
            self.path,
            self.settings.sidereal_mode
        );
        unsafe {
            ffi::swe_set_ephe_path(path_ptr);
            ffi::swe_set_sid_mode(self.settings.sidereal_mode, 0.0, 0.0);
        }
    }
}

impl Drop for SwissEphemeris {
    fn drop(&mut self) {
        let mut applied = ENGINE.lock();
        if applied.as_ref() == Some(&self.settings) {
            unsafe {
                ffi::swe_close();
            }
            *applied = None;
        }
    }
}

type ErrBuf = [c_char; ffi::AS_MAXCH];

fn err_buf() -> ErrBuf {
    [0; ffi::AS_MAXCH]
}

fn message(buf: &ErrBuf) -> String {
    // zero-initialized and written by the engine with a terminator
    unsafe { CStr::from_ptr(buf.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}

fn path_to_cstring(path: &Path) -> Result<CString> {
    let Some(s) = path.to_str() else {
        let msg = format!("Path is not valid UTF-8: {}", path.display());
        return Err(Error::InvalidInput(msg));
    };
    CString::new(s).map_err(|_| Error::InvalidInput("Path contains null bytes".into()))
}

fn star_buf(star: &str) -> Result<[c_char; ffi::SE_MAX_STNAME]> {
    let Ok(c_star) = CString::new(star) else {
        return Err(Error::InvalidInput("Star name contains null bytes".into()));
    };
    let bytes = c_star.as_bytes_with_nul();
    if bytes.len() > ffi::SE_MAX_STNAME {
        return Err(Error::InvalidInput(format!("Star name too long: {}", star)));
    }
    let mut buf = [0 as c_char; ffi::SE_MAX_STNAME];
    for (dst, src) in buf.iter_mut().zip(bytes) {
        *dst = *src as c_char;
    }
    Ok(buf)
}

impl EphemerisEngine for SwissEphemeris {
    fn calc_ut(&self, jd_ut: f64, body: i32, flags: i32) -> Result<RawPosition> {
        let mut xx = [0.0; 6];
        let mut serr = err_buf();

        let ret = self.locked(|| unsafe {
            ffi::swe_calc_ut(jd_ut, body, flags, xx.as_mut_ptr(), serr.as_mut_ptr())
        });

        if ret < 0 {
            return Err(Error::engine("swe_calc_ut", ret, message(&serr)));
        }
        let note = message(&serr);
        if !note.is_empty() {
            log::debug!("swe_calc_ut: {}", note);
        }
        Ok(RawPosition { xx, flags: ret })
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
        let mut geo = [geopos.lon, geopos.lat, geopos.height];
        let mut tret = [0.0; 10];
        let mut serr = err_buf();

        let ret = self.locked(|| unsafe {
            ffi::swe_rise_trans(
                jd_ut,
                body,
                ptr::null_mut(),
                flags,
                rsmi,
                geo.as_mut_ptr(),
                atmosphere.pressure,
                atmosphere.temperature,
                tret.as_mut_ptr(),
                serr.as_mut_ptr(),
            )
        });

        // -2 means the body stays above or below the horizon
        if ret < 0 {
            return Err(Error::engine("swe_rise_trans", ret, message(&serr)));
        }
        Ok(tret[0])
    }

    fn houses_ex(
        &self,
        jd_ut: f64,
        flags: i32,
        geolat: f64,
        geolon: f64,
        hsys: u8,
    ) -> Result<RawHouses> {
        let mut cusps = [0.0; 13];
        let mut ascmc = [0.0; 10];

        let ret = self.locked(|| unsafe {
            ffi::swe_houses_ex(
                jd_ut,
                flags,
                geolat,
                geolon,
                hsys as i32,
                cusps.as_mut_ptr(),
                ascmc.as_mut_ptr(),
            )
        });

        if ret < 0 {
            return Err(Error::engine(
                "swe_houses_ex",
                ret,
                format!("house system '{}' failed at lat {}", hsys as char, geolat),
            ));
        }
        let mut out = [0.0; 12];
        out.copy_from_slice(&cusps[1..13]);
        Ok(RawHouses { cusps: out, ascmc })
    }

    fn fixstar_ut(&self, star: &str, jd_ut: f64, flags: i32) -> Result<RawStar> {
        let mut name = star_buf(star)?;
        let mut xx = [0.0; 6];
        let mut serr = err_buf();

        let ret = self.locked(|| unsafe {
            ffi::swe_fixstar2_ut(
                name.as_mut_ptr(),
                jd_ut,
                flags,
                xx.as_mut_ptr(),
                serr.as_mut_ptr(),
            )
        });

        if ret < 0 {
            return Err(Error::engine("swe_fixstar2_ut", ret, message(&serr)));
        }
        let catalog_name = unsafe { CStr::from_ptr(name.as_ptr()) }
            .to_string_lossy()
            .into_owned();
        Ok(RawStar {
            xx,
            catalog_name,
            flags: ret,
        })
    }

    fn fixstar_mag(&self, star: &str) -> Result<f64> {
        let mut name = star_buf(star)?;
        let mut mag = 0.0;
        let mut serr = err_buf();

        let ret = self.locked(|| unsafe {
            ffi::swe_fixstar2_mag(name.as_mut_ptr(), &mut mag, serr.as_mut_ptr())
        });

        if ret < 0 {
            return Err(Error::engine("swe_fixstar2_mag", ret, message(&serr)));
        }
        Ok(mag)
    }

    fn sol_eclipse_when_glob(
        &self,
        jd_ut: f64,
        flags: i32,
        kind: i32,
        backward: bool,
    ) -> Result<RawEclipse> {
        let mut tret = [0.0; 10];
        let mut serr = err_buf();

        let ret = self.locked(|| unsafe {
            ffi::swe_sol_eclipse_when_glob(
                jd_ut,
                flags,
                kind,
                tret.as_mut_ptr(),
                backward as i32,
                serr.as_mut_ptr(),
            )
        });

        if ret < 0 {
            let msg = message(&serr);
            return Err(Error::engine("swe_sol_eclipse_when_glob", ret, msg));
        }
        Ok(RawEclipse { kind: ret, tret })
    }

    fn lun_eclipse_when(
        &self,
        jd_ut: f64,
        flags: i32,
        kind: i32,
        backward: bool,
    ) -> Result<RawEclipse> {
        let mut tret = [0.0; 10];
        let mut serr = err_buf();

        let ret = self.locked(|| unsafe {
            ffi::swe_lun_eclipse_when(
                jd_ut,
                flags,
                kind,
                tret.as_mut_ptr(),
                backward as i32,
                serr.as_mut_ptr(),
            )
        });

        if ret < 0 {
            return Err(Error::engine("swe_lun_eclipse_when", ret, message(&serr)));
        }
        Ok(RawEclipse { kind: ret, tret })
    }

    fn version(&self) -> String {
        crate::swisseph_version()
    }
}
