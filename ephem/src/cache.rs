//! Optional memoization of fixed star magnitudes.
//!
//! The engine re-reads its star catalog for every magnitude lookup, which
//! makes it the slowest query by far. Magnitudes do not depend on time, so
//! they can be cached by star name for the lifetime of an
//! [`Ephemeris`](crate::Ephemeris).

use parking_lot::Mutex;
use std::collections::HashMap;

use crate::error::Result;

#[derive(Debug, Default)]
pub struct MagnitudeCache {
    entries: Mutex<HashMap<String, f64>>,
}

impl MagnitudeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached magnitude of `star`, or run `lookup` and cache its
    /// result. Failed lookups are not cached.
    pub fn get_or_try_insert_with<F>(&self, star: &str, lookup: F) -> Result<f64>
    where
        F: FnOnce() -> Result<f64>,
    {
        if let Some(mag) = self.get(star) {
            log::debug!("star magnitude cache hit: {}", star);
            return Ok(mag);
        }

        // the lock is not held across the engine call
        let mag = lookup()?;
        self.entries.lock().insert(star.to_string(), mag);
        Ok(mag)
    }

    pub fn get(&self, star: &str) -> Option<f64> {
        self.entries.lock().get(star).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}
