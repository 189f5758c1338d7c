//! Elliptic curve public keys with named or explicit domain parameters.

use crate::{
    Error, KeyInfo, Result,
    asn1::{
        CharacteristicTwo, CurveCoefficients, EcParameters, Pentanomial, SpecifiedEcDomain,
        decode_any,
    },
    oids,
};
use der::asn1::{ObjectIdentifier, Uint};
use named_curves::DomainParameters;
use num_bigint::BigUint;
use std::borrow::Cow;
use weierstrass::{AffinePoint, BinaryCurve, BinaryField, Curve, PrimeCurve};

/// Name given to explicit parameters which match no registered curve.
const EXPLICIT: &str = "explicit";

/// Miller-Rabin rounds used to vet an explicit prime modulus.
const PRIMALITY_ROUNDS: usize = 32;

/// Largest explicit field accepted, in bits.
const MAX_FIELD_BITS: usize = 1024;

/// Elliptic curve public key: a point on a curve.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EcPublicKey {
    params: Cow<'static, DomainParameters>,
    point: AffinePoint,
}

impl EcPublicKey {
    /// Decode the SEC1 point `key` on the curve described by `params`.
    pub fn new(params: Cow<'static, DomainParameters>, key: &[u8]) -> Result<Self> {
        let point = params.decode_point(key)?;
        Ok(Self { params, point })
    }

    /// Key on the registered curve identified by `oid`.
    pub fn from_named_curve(oid: &ObjectIdentifier, key: &[u8]) -> Result<Self> {
        log::debug!(
            "parsing {} ({oid}) named curve",
            named_curves::friendly_name(oid)
        );

        let params = named_curves::lookup_oid(oid)?;
        Self::new(Cow::Borrowed(params), key)
    }

    /// Key on the curve given by RFC 3279 `EcpkParameters`.
    pub fn from_parameters(params: &EcParameters, key: &[u8]) -> Result<Self> {
        match params {
            EcParameters::NamedCurve(oid) => Self::from_named_curve(oid, key),
            EcParameters::SpecifiedCurve(domain) => Self::new(explicit_parameters(domain)?, key),
            EcParameters::ImplicitlyCa(_) => Err(Error::UnknownCurve("implicitlyCA".to_owned())),
        }
    }

    /// Curve name: the registered name, or `explicit`.
    pub fn name(&self) -> &str {
        self.params.name()
    }

    /// Domain parameters of the curve.
    pub fn params(&self) -> &DomainParameters {
        &self.params
    }

    /// The public point.
    pub fn point(&self) -> &AffinePoint {
        &self.point
    }

    /// Bit size of the curve's field.
    pub fn bits(&self) -> usize {
        self.params.field_bits()
    }

    /// Does the point lie on the curve?
    pub fn is_on_curve(&self) -> bool {
        self.params.curve().is_on_curve(&self.point)
    }

    /// Analysis record of this key.
    pub fn info(&self) -> KeyInfo {
        KeyInfo::Ec {
            bits: self.bits(),
            name: self.name().to_owned(),
            point: self.point.clone(),
        }
    }
}

/// Turn `specifiedCurve` parameters into domain parameters, preferring the
/// registered curve they spell out.
fn explicit_parameters(domain: &SpecifiedEcDomain) -> Result<Cow<'static, DomainParameters>> {
    let field_type = domain.field_id.field_type;
    let curve = if field_type == oids::PRIME_FIELD {
        let p = uint(&decode_any::<Uint>(&domain.field_id.parameters)?);
        if ntheory::bit_length(&p) > MAX_FIELD_BITS
            || !ntheory::is_probably_prime(&p, PRIMALITY_ROUNDS)
        {
            return Err(Error::UnsupportedField(field_type));
        }
        let (a, b) = coefficients(&domain.curve, ntheory::bit_length(&p), field_type)?;
        Curve::Prime(PrimeCurve::new(p, a, b))
    } else if field_type == oids::CHARACTERISTIC_TWO_FIELD {
        let field = binary_field(&decode_any(&domain.field_id.parameters)?)?;
        let (a, b) = coefficients(&domain.curve, field.degree() as usize, field_type)?;
        Curve::Binary(BinaryCurve::new(field, a, b))
    } else {
        return Err(Error::UnsupportedField(field_type));
    };

    let cofactor = domain
        .cofactor
        .as_ref()
        .map_or_else(|| BigUint::from(1u32), uint);

    let explicit = DomainParameters::new(
        EXPLICIT,
        curve,
        domain.base.as_bytes().to_vec(),
        uint(&domain.order),
        cofactor,
    );
    let generator = explicit.generator_point()?;

    match named_curves::find_matching(explicit.curve(), &generator) {
        Some(named) if named.same_group(&explicit) => Ok(Cow::Borrowed(named)),
        _ => Ok(Cow::Owned(explicit)),
    }
}

/// Coefficients `a` and `b` as elements of a `bits` wide field.
///
/// Longer encodings than the field's byte size are rejected.
fn coefficients(
    curve: &CurveCoefficients,
    bits: usize,
    field_type: ObjectIdentifier,
) -> Result<(BigUint, BigUint)> {
    let (a, b) = (curve.a.as_bytes(), curve.b.as_bytes());
    let len = bits.div_ceil(8);
    if a.len() > len || b.len() > len {
        return Err(Error::UnsupportedField(field_type));
    }

    Ok((ntheory::bytes_to_int(a), ntheory::bytes_to_int(b)))
}

/// Binary field of trinomial or pentanomial basis parameters.
fn binary_field(params: &CharacteristicTwo) -> Result<BinaryField> {
    let lower = if params.basis == oids::TP_BASIS {
        vec![decode_any::<u32>(&params.parameters)?]
    } else if params.basis == oids::PP_BASIS {
        let Pentanomial { k1, k2, k3 } = decode_any(&params.parameters)?;
        vec![k3, k2, k1]
    } else {
        return Err(Error::UnsupportedField(params.basis));
    };

    let m = params.m;
    if m < 2 || m as usize > MAX_FIELD_BITS || lower.iter().any(|&k| k == 0 || k >= m) {
        return Err(Error::UnsupportedField(oids::CHARACTERISTIC_TWO_FIELD));
    }

    Ok(BinaryField::new(m, &lower))
}

fn uint(value: &Uint) -> BigUint {
    ntheory::bytes_to_int(value.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use der::{Any, Decode, asn1::OctetString};
    use hex_literal::hex;

    #[test]
    fn unknown_named_curve() {
        let oid = ObjectIdentifier::new_unwrap("1.3.132.0.99");
        assert_eq!(
            EcPublicKey::from_named_curve(&oid, &[0]),
            Err(Error::UnknownCurve("1.3.132.0.99".to_owned()))
        );
    }

    #[test]
    fn implicit_curve() {
        assert_eq!(
            EcPublicKey::from_parameters(&EcParameters::ImplicitlyCa(der::asn1::Null), &[0]),
            Err(Error::UnknownCurve("implicitlyCA".to_owned()))
        );
    }

    #[test]
    fn identity_key() {
        let oid = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");
        let key = EcPublicKey::from_named_curve(&oid, &[0]).unwrap();
        assert_eq!(key.name(), "secp256r1");
        assert_eq!(key.bits(), 256);
        assert!(key.point().is_identity());
        assert!(key.is_on_curve());
    }

    #[test]
    fn coefficient_lengths() {
        let curve = CurveCoefficients {
            a: OctetString::new(hex!("0002")).unwrap(),
            b: OctetString::new(hex!("02")).unwrap(),
            seed: None,
        };
        assert_eq!(
            coefficients(&curve, 5, oids::PRIME_FIELD),
            Err(Error::UnsupportedField(oids::PRIME_FIELD))
        );
        assert_eq!(
            coefficients(&curve, 9, oids::PRIME_FIELD),
            Ok((BigUint::from(2u32), BigUint::from(2u32)))
        );
    }

    #[test]
    fn trinomial_basis() {
        // m = 113, x^113 + x^9 + 1
        let params = CharacteristicTwo {
            m: 113,
            basis: oids::TP_BASIS,
            parameters: Any::from_der(&hex!("020109")).unwrap(),
        };
        assert_eq!(binary_field(&params).unwrap(), BinaryField::new(113, &[9]));
    }

    #[test]
    fn unsupported_bases() {
        let gaussian = CharacteristicTwo {
            m: 113,
            basis: oids::GN_BASIS,
            parameters: Any::from_der(&hex!("0500")).unwrap(),
        };
        assert_eq!(
            binary_field(&gaussian),
            Err(Error::UnsupportedField(oids::GN_BASIS))
        );

        let degenerate = CharacteristicTwo {
            m: 9,
            basis: oids::TP_BASIS,
            parameters: Any::from_der(&hex!("020109")).unwrap(),
        };
        assert_eq!(
            binary_field(&degenerate),
            Err(Error::UnsupportedField(oids::CHARACTERISTIC_TWO_FIELD))
        );
    }
}
