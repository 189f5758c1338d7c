//! Elliptic curve domain parameters.

use der::asn1::ObjectIdentifier;
use std::borrow::Cow;
use weierstrass::{AffinePoint, BigUint, Curve};

/// Field, coefficients, base point, order and cofactor of a curve, plus the
/// metadata needed to analyze keys on it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DomainParameters {
    pub(crate) name: Cow<'static, str>,
    pub(crate) oid: Option<ObjectIdentifier>,
    pub(crate) curve: Curve,
    pub(crate) generator: Vec<u8>,
    pub(crate) order: BigUint,
    pub(crate) cofactor: BigUint,
    pub(crate) strength: usize,
    pub(crate) point_size: usize,
}

impl DomainParameters {
    /// Domain parameters which are not in the registry, e.g. explicit
    /// parameters taken from a certificate.
    ///
    /// The coordinate size is derived from the field size and the security
    /// strength is estimated as half the bit size of `order`.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        curve: Curve,
        generator: Vec<u8>,
        order: BigUint,
        cofactor: BigUint,
    ) -> Self {
        let point_size = curve.field_bits().div_ceil(8);
        let strength = ntheory::bit_length(&order) / 2;

        Self {
            name: name.into(),
            oid: None,
            curve,
            generator,
            order,
            cofactor,
            strength,
            point_size,
        }
    }

    /// Canonical curve name, e.g. `secp256r1`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Object identifier of a named curve.
    pub fn oid(&self) -> Option<&ObjectIdentifier> {
        self.oid.as_ref()
    }

    /// Curve equation and field.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// SEC1 encoding of the base point `G`.
    pub fn generator(&self) -> &[u8] {
        &self.generator
    }

    /// Decoded base point `G`.
    pub fn generator_point(&self) -> weierstrass::Result<AffinePoint> {
        self.decode_point(&self.generator)
    }

    /// Order `n` of the base point.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Cofactor `h`.
    pub fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }

    /// Bit size of the underlying field.
    pub fn field_bits(&self) -> usize {
        self.curve.field_bits()
    }

    /// Approximate security strength in bits.
    pub fn strength(&self) -> usize {
        self.strength
    }

    /// Byte length of one encoded coordinate.
    pub fn point_size(&self) -> usize {
        self.point_size
    }

    /// Decode a SEC1 point on this curve.
    pub fn decode_point(&self, bytes: &[u8]) -> weierstrass::Result<AffinePoint> {
        self.curve.decode_point(bytes, self.point_size)
    }

    /// SEC1 encoding of `point` on this curve.
    pub fn encode_point(
        &self,
        point: &AffinePoint,
        compress: bool,
    ) -> weierstrass::Result<Vec<u8>> {
        self.curve.encode_point(point, self.point_size, compress)
    }

    /// Do both parameter sets describe the same group?
    ///
    /// Names and base point encodings may differ.
    pub fn same_group(&self, other: &DomainParameters) -> bool {
        self.curve == other.curve
            && self.order == other.order
            && self.cofactor == other.cofactor
            && match (self.generator_point(), other.generator_point()) {
                (Ok(g1), Ok(g2)) => g1 == g2,
                _ => false,
            }
    }
}
