//! Error types.

use core::fmt;

/// Registry errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// No curve is registered under this name or object identifier.
    UnknownCurve(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownCurve(name) => write!(f, "no configuration for curve {name}"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
