//! Ephemeris configuration file support.
//!
//! This module reads the adapter settings from a TOML file:
//!
//! ```toml
//! [ephemeris]
//! path = "/usr/share/sweph"
//! sidereal_mode = "lahiri"
//!
//! [cache]
//! star_magnitudes = true
//! ```
//!
//! Nothing here reads environment variables; the caller decides which file
//! (if any) to load.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::SiderealMode;

/// Adapter configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EphemerisConfig {
    #[serde(default)]
    pub ephemeris: EngineSettings,
    #[serde(default)]
    pub cache: CacheSettings,
}

/// Engine-wide settings applied before engine calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Directory holding the ephemeris data files. The engine's built-in
    /// search path is used when absent.
    pub path: Option<PathBuf>,
    /// Ayanamsa for sidereal calculations.
    pub sidereal_mode: Option<SiderealMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Memoize fixed star magnitudes by star name.
    #[serde(default)]
    pub star_magnitudes: bool,
}

impl EphemerisConfig {
    /// Configuration with only the ephemeris path set.
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            ephemeris: EngineSettings {
                path: Some(path.into()),
                sidereal_mode: None,
            },
            cache: CacheSettings::default(),
        }
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(EphemerisConfig)` if successful
    /// * `Err(Error::Config)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `ephemeris.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self> {
        let search_paths = [
            PathBuf::from("ephemeris.toml"),
            PathBuf::from("config/ephemeris.toml"),
            PathBuf::from("../ephemeris.toml"),
        ];

        for path in &search_paths {
            if path.exists() {
                log::info!("loading ephemeris config from {}", path.display());
                return Self::from_file(path);
            }
        }

        Err(Error::Config(
            "No ephemeris.toml found in standard locations".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[ephemeris]
path = "/usr/share/sweph"
sidereal_mode = "lahiri"

[cache]
star_magnitudes = true
"#;

        let config = EphemerisConfig::from_toml_str(toml).unwrap();
        assert_eq!(
            config.ephemeris.path,
            Some(PathBuf::from("/usr/share/sweph"))
        );
        assert_eq!(config.ephemeris.sidereal_mode, Some(SiderealMode::Lahiri));
        assert!(config.cache.star_magnitudes);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = EphemerisConfig::from_toml_str("").unwrap();
        assert_eq!(config, EphemerisConfig::default());
        assert!(config.ephemeris.path.is_none());
        assert!(!config.cache.star_magnitudes);
    }

    #[test]
    fn test_unknown_sidereal_mode_is_rejected() {
        let toml = "[ephemeris]\nsidereal_mode = \"tropical\"\n";
        let err = EphemerisConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ephemeris]\npath = \"/data/ephe\"").unwrap();

        let config = EphemerisConfig::from_file(file.path()).unwrap();
        assert_eq!(config, EphemerisConfig::with_path("/data/ephe"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = EphemerisConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
