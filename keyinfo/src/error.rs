//! Error types.

use core::fmt;
use der::asn1::ObjectIdentifier;

/// Key decoding errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// DER decoding or encoding failed.
    Der(der::Error),

    /// The curve is not in the registry, or no curve was given at all.
    UnknownCurve(String),

    /// The public point is not a valid SEC1 encoding for its curve.
    InvalidPointEncoding,

    /// A value that has to be inverted is not invertible.
    Arithmetic,

    /// An integer does not fit the requested number of bytes.
    Encoding,

    /// The subject public key algorithm is not analyzed.
    UnsupportedAlgorithm(ObjectIdentifier),

    /// Explicit curve parameters use an unsupported field type or basis.
    UnsupportedField(ObjectIdentifier),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Der(err) => write!(f, "DER error: {err}"),
            Error::UnknownCurve(name) => write!(f, "no configuration for curve {name}"),
            Error::InvalidPointEncoding => f.write_str("invalid point encoding"),
            Error::Arithmetic => f.write_str("value is not invertible"),
            Error::Encoding => f.write_str("integer too large for its encoding"),
            Error::UnsupportedAlgorithm(oid) => write!(f, "unsupported key algorithm {oid}"),
            Error::UnsupportedField(oid) => write!(f, "unsupported field type {oid}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Der(err) => Some(err),
            _ => None,
        }
    }
}

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Error {
        Error::Der(err)
    }
}

impl From<named_curves::Error> for Error {
    fn from(err: named_curves::Error) -> Error {
        match err {
            named_curves::Error::UnknownCurve(name) => Error::UnknownCurve(name),
        }
    }
}

impl From<weierstrass::Error> for Error {
    fn from(err: weierstrass::Error) -> Error {
        match err {
            weierstrass::Error::InvalidPointEncoding => Error::InvalidPointEncoding,
            weierstrass::Error::Arithmetic => Error::Arithmetic,
        }
    }
}

impl From<ntheory::Error> for Error {
    fn from(err: ntheory::Error) -> Error {
        match err {
            ntheory::Error::Arithmetic => Error::Arithmetic,
            ntheory::Error::Encoding { .. } => Error::Encoding,
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
