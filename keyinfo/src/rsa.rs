//! RSA public keys.

use crate::{KeyInfo, Result, asn1};
use der::Decode;
use num_bigint::BigUint;

/// RSA public key `(n, e)`.
///
/// Only the sizes are analyzed; the integers are kept for reporting.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RsaPublicKey {
    modulus: BigUint,
    exponent: BigUint,
}

impl RsaPublicKey {
    /// Key with modulus `n` and public exponent `e`.
    pub fn new(modulus: BigUint, exponent: BigUint) -> Self {
        Self { modulus, exponent }
    }

    /// Decode a DER encoded `RSAPublicKey`.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let key = asn1::RsaPublicKey::from_der(bytes)?;

        Ok(Self::new(
            ntheory::bytes_to_int(key.modulus.as_bytes()),
            ntheory::bytes_to_int(key.public_exponent.as_bytes()),
        ))
    }

    /// Modulus `n`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Public exponent `e`.
    pub fn exponent(&self) -> &BigUint {
        &self.exponent
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> usize {
        ntheory::bit_length(&self.modulus)
    }

    /// Analysis record of this key.
    pub fn info(&self) -> KeyInfo {
        KeyInfo::Rsa {
            bits: self.bits(),
            modulus: self.modulus.clone(),
            exponent: self.exponent.clone(),
        }
    }
}
