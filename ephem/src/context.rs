//! Ephemeris context - the adapter between chart symbols and the engine

use crate::cache::MagnitudeCache;
use crate::config::EphemerisConfig;
use crate::engine::{Atmosphere, EphemerisEngine, GeoPosition, RawHouses};
use crate::error::Result;
use crate::houses;
use crate::records::{
    BodyPosition, FixedStarRecord, HouseLongitudes, Houses, LunarEclipse, SolarEclipse,
};
use crate::types::{Body, CalcFlags, HouseSystem, TransitEvent};

/// Any eclipse type
const ANY_ECLIPSE: i32 = 0;

const ECLIPSE_FLAGS: CalcFlags = CalcFlags::SWIEPH;

/// Fixed star positions always use the engine defaults
const STAR_FLAGS: CalcFlags = CalcFlags::NONE;

/// Ephemeris context
///
/// Owns the engine handle and the optional star magnitude cache. Every query
/// translates symbols to engine codes, makes exactly one engine call per
/// value it needs, and reshapes the raw output into a labeled record.
///
/// # Example
///
/// ```rust,ignore
/// use natal_ephem::{Body, CalcFlags, Ephemeris, EphemerisConfig, HouseSystem};
///
/// let eph = Ephemeris::swisseph(&EphemerisConfig::with_path("/usr/share/sweph"))?;
///
/// let sun = eph.body_position(Body::Sun, 2451545.0, CalcFlags::SPEED)?;
/// let chart = eph.houses(2451545.0, 38.72, -9.14, HouseSystem::Placidus, CalcFlags::NONE)?;
/// ```
pub struct Ephemeris<E> {
    engine: E,
    magnitudes: Option<MagnitudeCache>,
}

impl<E: EphemerisEngine> Ephemeris<E> {
    /// Create a context around `engine`, enabling the caches `config` asks for
    pub fn new(engine: E, config: &EphemerisConfig) -> Self {
        Self {
            engine,
            magnitudes: config.cache.star_magnitudes.then(MagnitudeCache::new),
        }
    }

    /// Create a context with no caching
    pub fn from_engine(engine: E) -> Self {
        Self {
            engine,
            magnitudes: None,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Star magnitude cache, when enabled
    pub fn magnitude_cache(&self) -> Option<&MagnitudeCache> {
        self.magnitudes.as_ref()
    }

    pub fn engine_version(&self) -> String {
        self.engine.version()
    }

    // === Bodies === //

    /// Position of `body` at UT Julian day `jd`.
    ///
    /// Speeds are only filled in when `flags` includes [`CalcFlags::SPEED`].
    pub fn body_position(&self, body: Body, jd: f64, flags: CalcFlags) -> Result<BodyPosition> {
        log::debug!("body_position {} (code {}) jd={}", body, body.code(), jd);
        let raw = self.engine.calc_ut(jd, body.code(), flags.bits())?;
        Ok(BodyPosition::from_engine(body, &raw.xx, raw.flags))
    }

    /// Ecliptic longitude of `body` only
    pub fn body_longitude(&self, body: Body, jd: f64, flags: CalcFlags) -> Result<f64> {
        log::debug!("body_longitude {} (code {}) jd={}", body, body.code(), jd);
        let raw = self.engine.calc_ut(jd, body.code(), flags.bits())?;
        Ok(raw.xx[0])
    }

    /// Positions of several bodies at the same instant, in input order.
    /// Stops at the first failure.
    pub fn body_positions(
        &self,
        bodies: &[Body],
        jd: f64,
        flags: CalcFlags,
    ) -> Result<Vec<BodyPosition>> {
        bodies
            .iter()
            .map(|body| self.body_position(*body, jd, flags))
            .collect()
    }

    // === Transits === //

    /// Julian day of the next rise or set of `body` after `jd`, seen from
    /// (`lat`, `lon`) with standard atmosphere and true horizon.
    ///
    /// Circumpolar bodies surface the engine's failure unchanged.
    pub fn next_transit(
        &self,
        body: Body,
        jd: f64,
        lat: f64,
        lon: f64,
        event: TransitEvent,
    ) -> Result<f64> {
        log::debug!("rise_trans {} {} jd={}", body, event, jd);
        let geopos = GeoPosition {
            lon,
            lat,
            height: 0.0,
        };
        self.engine.rise_trans(
            jd,
            body.code(),
            CalcFlags::SWIEPH.bits(),
            event.code(),
            geopos,
            Atmosphere::default(),
        )
    }

    pub fn next_sunrise(&self, jd: f64, lat: f64, lon: f64) -> Result<f64> {
        self.next_transit(Body::Sun, jd, lat, lon, TransitEvent::Rise)
    }

    pub fn next_sunset(&self, jd: f64, lat: f64, lon: f64) -> Result<f64> {
        self.next_transit(Body::Sun, jd, lat, lon, TransitEvent::Set)
    }

    /// Sunrise found by searching forward from one day before `jd`
    pub fn last_sunrise(&self, jd: f64, lat: f64, lon: f64) -> Result<f64> {
        self.next_sunrise(jd - 1.0, lat, lon)
    }

    /// Sunset found by searching forward from one day before `jd`
    pub fn last_sunset(&self, jd: f64, lat: f64, lon: f64) -> Result<f64> {
        self.next_sunset(jd - 1.0, lat, lon)
    }

    // === Houses and angles === //

    /// The twelve houses with sizes, and the four angles (Asc, MC, Desc, IC)
    pub fn houses(
        &self,
        jd: f64,
        lat: f64,
        lon: f64,
        hsys: HouseSystem,
        flags: CalcFlags,
    ) -> Result<Houses> {
        let raw = self.raw_houses(jd, lat, lon, hsys, flags)?;
        let (asc, mc) = (raw.ascmc[0], raw.ascmc[1]);
        Ok(houses::build_houses(&raw.cusps, asc, mc))
    }

    /// Cusp and angle longitudes without labels or sizes
    pub fn house_longitudes(
        &self,
        jd: f64,
        lat: f64,
        lon: f64,
        hsys: HouseSystem,
        flags: CalcFlags,
    ) -> Result<HouseLongitudes> {
        let raw = self.raw_houses(jd, lat, lon, hsys, flags)?;
        let (asc, mc) = (raw.ascmc[0], raw.ascmc[1]);
        Ok(houses::build_longitudes(&raw.cusps, asc, mc))
    }

    fn raw_houses(
        &self,
        jd: f64,
        lat: f64,
        lon: f64,
        hsys: HouseSystem,
        flags: CalcFlags,
    ) -> Result<RawHouses> {
        let code = hsys.code();
        log::debug!("houses_ex {} ('{}') jd={}", hsys, code as char, jd);
        self.engine.houses_ex(jd, flags.bits(), lat, lon, code)
    }

    // === Fixed stars === //

    /// Position and magnitude of a fixed star.
    ///
    /// `flags` is not forwarded: the star position is always computed with
    /// default engine flags. The magnitude lookup is the slowest engine
    /// call; enable the magnitude cache in [`EphemerisConfig`] to avoid
    /// repeating it.
    pub fn fixed_star(&self, star: &str, jd: f64, flags: CalcFlags) -> Result<FixedStarRecord> {
        log::debug!("fixstar_ut {} jd={}, ignoring {:?}", star, jd, flags);
        let raw = self.engine.fixstar_ut(star, jd, STAR_FLAGS.bits())?;

        let lookup = || self.engine.fixstar_mag(star);
        let mag = match &self.magnitudes {
            Some(cache) => cache.get_or_try_insert_with(star, lookup)?,
            None => lookup()?,
        };
        Ok(FixedStarRecord {
            id: star.to_string(),
            mag,
            lon: raw.xx[0],
            lat: raw.xx[1],
        })
    }

    /// Several fixed stars at the same instant, in input order.
    /// Stops at the first failure.
    pub fn fixed_stars(
        &self,
        stars: &[&str],
        jd: f64,
        flags: CalcFlags,
    ) -> Result<Vec<FixedStarRecord>> {
        stars
            .iter()
            .map(|star| self.fixed_star(star, jd, flags))
            .collect()
    }

    // === Eclipses === //

    /// Previous (`backward`, strictly before `jd`) or next (at or after `jd`)
    /// global solar eclipse
    pub fn solar_eclipse_global(&self, jd: f64, backward: bool) -> Result<SolarEclipse> {
        log::debug!("sol_eclipse_when_glob jd={} backward={}", jd, backward);
        let engine = &self.engine;
        let flags = ECLIPSE_FLAGS.bits();
        let raw = engine.sol_eclipse_when_glob(jd, flags, ANY_ECLIPSE, backward)?;
        Ok(SolarEclipse::from_tret(&raw.tret))
    }

    /// Previous (`backward`, strictly before `jd`) or next (at or after `jd`)
    /// lunar eclipse
    pub fn lunar_eclipse_global(&self, jd: f64, backward: bool) -> Result<LunarEclipse> {
        log::debug!("lun_eclipse_when jd={} backward={}", jd, backward);
        let engine = &self.engine;
        let flags = ECLIPSE_FLAGS.bits();
        let raw = engine.lun_eclipse_when(jd, flags, ANY_ECLIPSE, backward)?;
        Ok(LunarEclipse::from_tret(&raw.tret))
    }

    /// Julian day of maximum of the previous global solar eclipse
    pub fn prev_solar_eclipse(&self, jd: f64) -> Result<f64> {
        Ok(self.solar_eclipse_global(jd, true)?.maximum)
    }

    /// Julian day of maximum of the next global solar eclipse
    pub fn next_solar_eclipse(&self, jd: f64) -> Result<f64> {
        Ok(self.solar_eclipse_global(jd, false)?.maximum)
    }

    pub fn prev_lunar_eclipse(&self, jd: f64) -> Result<f64> {
        Ok(self.lunar_eclipse_global(jd, true)?.maximum)
    }

    pub fn next_lunar_eclipse(&self, jd: f64) -> Result<f64> {
        Ok(self.lunar_eclipse_global(jd, false)?.maximum)
    }
}

#[cfg(feature = "swisseph")]
impl Ephemeris<crate::swisseph::SwissEphemeris> {
    /// Context over the native engine, using the path and sidereal mode
    /// from `config`
    pub fn swisseph(config: &EphemerisConfig) -> Result<Self> {
        let engine = crate::swisseph::SwissEphemeris::from_settings(&config.ephemeris)?;
        Ok(Self::new(engine, config))
    }
}
