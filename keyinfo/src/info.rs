//! Uniform analysis record of a public key.

use crate::DsaParameters;
use num_bigint::BigUint;
use weierstrass::AffinePoint;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Size and kind specific parameters of a public key.
///
/// With the `serde` feature the record serializes with a `type` tag of
/// `RSA`, `DSA` or `EC` next to `bits`, and `pub`/`p`/`q`/`g` or
/// `name`/`point` depending on the kind. Integers are written as decimal
/// strings and byte strings as lowercase hex.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum KeyInfo {
    /// RSA key.
    #[cfg_attr(feature = "serde", serde(rename = "RSA"))]
    Rsa {
        /// Modulus size.
        bits: usize,

        /// Modulus `n`.
        #[cfg_attr(feature = "serde", serde(serialize_with = "decimal"))]
        modulus: BigUint,

        /// Public exponent `e`.
        #[cfg_attr(feature = "serde", serde(serialize_with = "decimal"))]
        exponent: BigUint,
    },

    /// DSA key.
    #[cfg_attr(feature = "serde", serde(rename = "DSA"))]
    Dsa {
        /// Size of the public value.
        bits: usize,

        /// DER encoding of the public value.
        #[cfg_attr(feature = "serde", serde(serialize_with = "hex::serialize"))]
        data: Vec<u8>,

        /// Public value `y`.
        #[cfg_attr(feature = "serde", serde(rename = "pub", serialize_with = "decimal"))]
        public: BigUint,

        /// Domain parameters, when the certificate carries them.
        #[cfg_attr(feature = "serde", serde(flatten))]
        parameters: Option<DsaParameters>,
    },

    /// Elliptic curve key.
    #[cfg_attr(feature = "serde", serde(rename = "EC"))]
    Ec {
        /// Field size of the curve.
        bits: usize,

        /// Curve name.
        name: String,

        /// Public point.
        point: AffinePoint,
    },
}

impl KeyInfo {
    /// Algorithm name: `RSA`, `DSA` or `EC`.
    pub fn kind(&self) -> &'static str {
        match self {
            KeyInfo::Rsa { .. } => "RSA",
            KeyInfo::Dsa { .. } => "DSA",
            KeyInfo::Ec { .. } => "EC",
        }
    }

    /// Key size in bits.
    pub fn bits(&self) -> usize {
        match *self {
            KeyInfo::Rsa { bits, .. } | KeyInfo::Dsa { bits, .. } | KeyInfo::Ec { bits, .. } => {
                bits
            }
        }
    }
}

/// Write `n` as a decimal string.
#[cfg(feature = "serde")]
pub(crate) fn decimal<S>(n: &BigUint, serializer: S) -> core::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&n.to_str_radix(10))
}
