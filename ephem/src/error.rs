//! Error types for natal-ephem

use thiserror::Error;

/// Result type for natal-ephem operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when querying the ephemeris
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Body symbol with no engine code
    #[error("Unknown body: {0}")]
    UnknownBody(String),

    /// House system symbol with no engine code
    #[error("Unknown house system: {0}")]
    UnknownHouseSystem(String),

    /// Transit direction other than RISE or SET (strict parsing only)
    #[error("Unknown transit flag: {0}")]
    UnknownTransitFlag(String),

    /// Input the engine cannot accept (e.g. interior NUL bytes)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Failure reported by the ephemeris engine, message passed through as-is
    #[error("{routine} failed ({code}): {message}")]
    Engine {
        routine: &'static str,
        code: i32,
        message: String,
    },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build an engine error from the routine name, its return code and error text
    pub(crate) fn engine(routine: &'static str, code: i32, message: impl Into<String>) -> Self {
        Error::Engine {
            routine,
            code,
            message: message.into(),
        }
    }

    /// Whether this error was raised by the engine rather than by translation
    pub fn is_engine(&self) -> bool {
        matches!(self, Error::Engine { .. })
    }
}
