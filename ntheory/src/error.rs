//! Error types.

use core::fmt;

/// Number theory errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The value has no inverse modulo the given modulus, or the modulus is
    /// zero.
    Arithmetic,

    /// Encoding an integer into `limit` bytes would drop significant bits.
    Encoding {
        /// Number of bytes needed to hold the integer.
        required: usize,

        /// Number of bytes requested by the caller.
        limit: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Arithmetic => f.write_str("value is not invertible for the given modulus"),
            Error::Encoding { required, limit } => write!(
                f,
                "integer needs {required} bytes but only {limit} were requested"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
