//! Error types.

use core::fmt;

/// Curve arithmetic errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Unrecognized leading byte, wrong remaining length, or a compressed
    /// x-coordinate with no matching y-coordinate on the curve.
    InvalidPointEncoding,

    /// A field element which has to be inverted is not invertible.
    Arithmetic,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPointEncoding => f.write_str("invalid point encoding"),
            Error::Arithmetic => f.write_str("field element is not invertible"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ntheory::Error> for Error {
    fn from(err: ntheory::Error) -> Error {
        match err {
            ntheory::Error::Arithmetic => Error::Arithmetic,
            // a coordinate wider than the point size cannot be encoded
            ntheory::Error::Encoding { .. } => Error::InvalidPointEncoding,
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
