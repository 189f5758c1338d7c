//! DSA public keys.

use crate::{KeyInfo, Result, asn1::DssParms};
use der::{Decode, Encode, asn1::Uint};
use num_bigint::BigUint;

#[cfg(feature = "serde")]
use serde::Serialize;

static ZERO: BigUint = BigUint::ZERO;

/// DSA domain parameters `(p, q, g)`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DsaParameters {
    /// Prime modulus.
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::info::decimal"))]
    pub p: BigUint,

    /// Prime divisor of `p - 1`.
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::info::decimal"))]
    pub q: BigUint,

    /// Generator of the order `q` subgroup.
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::info::decimal"))]
    pub g: BigUint,
}

impl DsaParameters {
    /// Decode DER encoded `Dss-Parms`.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let params = DssParms::from_der(bytes)?;

        Ok(Self {
            p: ntheory::bytes_to_int(params.p.as_bytes()),
            q: ntheory::bytes_to_int(params.q.as_bytes()),
            g: ntheory::bytes_to_int(params.g.as_bytes()),
        })
    }
}

/// DSA public key `y`, optionally with its domain parameters.
///
/// Certificates may leave the parameters out and inherit them from the
/// issuer, in which case [`DsaPublicKey::p`], [`DsaPublicKey::q`] and
/// [`DsaPublicKey::g`] all return zero.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DsaPublicKey {
    value: BigUint,
    data: Vec<u8>,
    parameters: Option<DsaParameters>,
}

impl DsaPublicKey {
    /// Key with public value `y` and no parameters.
    pub fn new(value: BigUint) -> Result<Self> {
        let data = Uint::new(&value.to_bytes_be())?.to_der()?;
        Ok(Self {
            value,
            data,
            parameters: None,
        })
    }

    /// Decode the DER `INTEGER` carried in a subject public key.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let value = Uint::from_der(bytes)?;
        Ok(Self {
            value: ntheory::bytes_to_int(value.as_bytes()),
            data: bytes.to_vec(),
            parameters: None,
        })
    }

    /// Attach DER encoded `Dss-Parms`.
    pub fn set_parameters(&mut self, der: &[u8]) -> Result<()> {
        self.parameters = Some(DsaParameters::from_der(der)?);
        Ok(())
    }

    /// Public value `y`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// DER encoding of the public value.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Attached domain parameters.
    pub fn parameters(&self) -> Option<&DsaParameters> {
        self.parameters.as_ref()
    }

    /// Bit length of the public value.
    pub fn bits(&self) -> usize {
        ntheory::bit_length(&self.value)
    }

    /// Prime modulus `p`, or zero.
    pub fn p(&self) -> &BigUint {
        self.parameters.as_ref().map_or(&ZERO, |params| &params.p)
    }

    /// Subgroup order `q`, or zero.
    pub fn q(&self) -> &BigUint {
        self.parameters.as_ref().map_or(&ZERO, |params| &params.q)
    }

    /// Generator `g`, or zero.
    pub fn g(&self) -> &BigUint {
        self.parameters.as_ref().map_or(&ZERO, |params| &params.g)
    }

    /// Analysis record of this key.
    pub fn info(&self) -> KeyInfo {
        KeyInfo::Dsa {
            bits: self.bits(),
            data: self.data.clone(),
            public: self.value.clone(),
            parameters: self.parameters.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use num_traits::Zero;

    #[test]
    fn without_parameters() {
        let key = DsaPublicKey::from_der(&hex!("02021234")).unwrap();
        assert_eq!(key.value(), &BigUint::from(0x1234u32));
        assert_eq!(key.bits(), 13);
        assert_eq!(key.data(), hex!("02021234"));
        assert!(key.p().is_zero());
        assert!(key.q().is_zero());
        assert!(key.g().is_zero());
        assert!(key.parameters().is_none());
    }

    #[test]
    fn with_parameters() {
        // p = 23, q = 11, g = 4, y = 4^3 mod 23
        let mut key = DsaPublicKey::new(BigUint::from(18u32)).unwrap();
        key.set_parameters(&hex!("300902011702010b020104")).unwrap();

        assert_eq!(key.p(), &BigUint::from(23u32));
        assert_eq!(key.q(), &BigUint::from(11u32));
        assert_eq!(key.g(), &BigUint::from(4u32));
        assert_eq!(key.bits(), 5);
        assert_eq!(key.data(), hex!("020112"));
    }

    #[test]
    fn bad_parameters_are_not_attached() {
        let mut key = DsaPublicKey::new(BigUint::from(8u32)).unwrap();
        assert!(key.set_parameters(&hex!("300602011702010b")).is_err());
        assert!(key.parameters().is_none());
    }
}
