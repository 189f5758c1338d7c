//! ASN.1 schemas of the certificate structures carrying key material.
//!
//! Field layouts follow RFC 5280 (`SubjectPublicKeyInfo`, extensions),
//! RFC 3279 (`Dss-Parms`, `ECParameters`) and RFC 8017 (`RSAPublicKey`).

use der::{
    Any, Choice, Decode, Encode, Sequence,
    asn1::{BitString, Null, ObjectIdentifier, OctetString, Uint},
};

/// RFC 5280 `SubjectPublicKeyInfo`
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct SubjectPublicKeyInfo {
    /// Key algorithm and its parameters.
    pub algorithm: AlgorithmIdentifier,

    /// Algorithm specific encoding of the key.
    pub subject_public_key: BitString,
}

/// RFC 5280 `AlgorithmIdentifier`
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct AlgorithmIdentifier {
    /// Algorithm OID.
    pub algorithm: ObjectIdentifier,

    /// Algorithm specific parameters.
    pub parameters: Option<Any>,
}

/// RFC 8017 `RSAPublicKey`
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct RsaPublicKey {
    /// `n`
    pub modulus: Uint,

    /// `e`
    pub public_exponent: Uint,
}

/// RFC 3279 `Dss-Parms`
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct DssParms {
    /// Prime modulus.
    pub p: Uint,

    /// Prime divisor of `p - 1`.
    pub q: Uint,

    /// Generator of the order `q` subgroup.
    pub g: Uint,
}

/// RFC 3279 `EcpkParameters`
#[derive(Clone, Debug, Eq, PartialEq, Choice)]
pub enum EcParameters {
    /// Curve given by its object identifier.
    NamedCurve(ObjectIdentifier),

    /// Curve spelled out in full.
    SpecifiedCurve(SpecifiedEcDomain),

    /// Curve inherited from the issuer.
    ImplicitlyCa(Null),
}

/// ANSI X9.62 `SpecifiedECDomain`
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct SpecifiedEcDomain {
    /// `ecdpVer1` and up.
    pub version: u64,

    /// Underlying field.
    pub field_id: FieldId,

    /// Curve coefficients.
    pub curve: CurveCoefficients,

    /// SEC1 encoding of the base point.
    pub base: OctetString,

    /// Order of the base point.
    pub order: Uint,

    /// Cofactor, `1` when absent.
    pub cofactor: Option<Uint>,

    /// Hash used to generate the curve.
    pub hash: Option<AlgorithmIdentifier>,
}

/// ANSI X9.62 `FieldID`
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct FieldId {
    /// `prime-field` or `characteristic-two-field`.
    pub field_type: ObjectIdentifier,

    /// `Prime-p` INTEGER or a [`CharacteristicTwo`] sequence.
    pub parameters: Any,
}

/// ANSI X9.62 `Curve`
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct CurveCoefficients {
    /// Field element `a`.
    pub a: OctetString,

    /// Field element `b`.
    pub b: OctetString,

    /// Seed the coefficients were derived from.
    pub seed: Option<BitString>,
}

/// ANSI X9.62 `Characteristic-two`
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct CharacteristicTwo {
    /// Extension degree.
    pub m: u32,

    /// `gnBasis`, `tpBasis` or `ppBasis`.
    pub basis: ObjectIdentifier,

    /// `NULL`, the trinomial exponent, or a [`Pentanomial`].
    pub parameters: Any,
}

/// ANSI X9.62 `Pentanomial`
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct Pentanomial {
    /// Lowest middle exponent.
    pub k1: u32,

    /// Middle exponent.
    pub k2: u32,

    /// Highest middle exponent.
    pub k3: u32,
}

/// RFC 5280 `BasicConstraints`
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct BasicConstraints {
    /// `cA`, `FALSE` when absent.
    pub ca: Option<bool>,

    /// Maximum number of intermediate certificates below this one.
    pub path_len_constraint: Option<u32>,
}

/// RFC 5280 `AuthorityKeyIdentifier`
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct AuthorityKeyIdentifier {
    /// `keyIdentifier [0] IMPLICIT`
    #[asn1(context_specific = "0", tag_mode = "IMPLICIT", optional = "true")]
    pub key_identifier: Option<OctetString>,

    /// `authorityCertIssuer [1] IMPLICIT GeneralNames`, names left undecoded.
    #[asn1(context_specific = "1", tag_mode = "IMPLICIT", optional = "true")]
    pub authority_cert_issuer: Option<Vec<Any>>,

    /// `authorityCertSerialNumber [2] IMPLICIT`
    #[asn1(context_specific = "2", tag_mode = "IMPLICIT", optional = "true")]
    pub authority_cert_serial_number: Option<Uint>,
}

/// Decode an open type as the schema `T`.
pub(crate) fn decode_any<T>(any: &Any) -> der::Result<T>
where
    T: for<'a> Decode<'a, Error = der::Error>,
{
    T::from_der(&any.to_der()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn named_curve_parameters() {
        let params = EcParameters::from_der(&hex!("06082a8648ce3d030107")).unwrap();
        assert_eq!(
            params,
            EcParameters::NamedCurve(ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7"))
        );
    }

    #[test]
    fn implicit_parameters() {
        let params = EcParameters::from_der(&hex!("0500")).unwrap();
        assert_eq!(params, EcParameters::ImplicitlyCa(Null));
    }

    #[test]
    fn open_types() {
        let pentanomial = Any::from_der(&hex!("3009020103020106020107")).unwrap();
        assert_eq!(
            decode_any::<Pentanomial>(&pentanomial).unwrap(),
            Pentanomial { k1: 3, k2: 6, k3: 7 }
        );
        assert!(decode_any::<u32>(&pentanomial).is_err());
    }

    #[test]
    fn implicitly_tagged_fields() {
        let aki = AuthorityKeyIdentifier::from_der(&hex!(
            "30128004deadbeefa1058203612e628203010001"
        ))
        .unwrap();
        assert_eq!(
            aki.key_identifier.unwrap().as_bytes(),
            hex!("deadbeef")
        );
        assert_eq!(aki.authority_cert_issuer.unwrap().len(), 1);
        assert_eq!(
            aki.authority_cert_serial_number.unwrap().as_bytes(),
            hex!("010001")
        );

        // universal OCTET STRING where [0] is expected
        assert!(AuthorityKeyIdentifier::from_der(&hex!("30060404deadbeef")).is_err());
    }

    #[test]
    fn basic_constraints_defaults() {
        let constraints = BasicConstraints::from_der(&hex!("3000")).unwrap();
        assert_eq!(constraints.ca, None);
        assert_eq!(constraints.path_len_constraint, None);
    }
}
