//! Curve equations over prime and binary fields.

use crate::{AffinePoint, BinaryField, Result, field::PrimeField};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

/// Elliptic curve over either kind of finite field.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Curve {
    /// `y^2 = x^3 + ax + b` over `GF(p)`.
    Prime(PrimeCurve),

    /// `y^2 + xy = x^3 + ax^2 + b` over `GF(2^m)`.
    Binary(BinaryCurve),
}

impl Curve {
    /// Bit size of the underlying field.
    pub fn field_bits(&self) -> usize {
        match self {
            Curve::Prime(curve) => ntheory::bit_length(&curve.p),
            Curve::Binary(curve) => curve.field.degree() as usize,
        }
    }

    /// Does `point` satisfy the curve equation?
    ///
    /// The identity is always on the curve. Coordinates must be reduced
    /// field elements.
    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        match self {
            Curve::Prime(curve) => curve.is_on_curve(point),
            Curve::Binary(curve) => curve.is_on_curve(point),
        }
    }

    /// The prime field curve, if this is one.
    pub fn as_prime(&self) -> Option<&PrimeCurve> {
        match self {
            Curve::Prime(curve) => Some(curve),
            Curve::Binary(_) => None,
        }
    }
}

impl From<PrimeCurve> for Curve {
    fn from(curve: PrimeCurve) -> Curve {
        Curve::Prime(curve)
    }
}

impl From<BinaryCurve> for Curve {
    fn from(curve: BinaryCurve) -> Curve {
        Curve::Binary(curve)
    }
}

/// Short Weierstrass curve `y^2 = x^3 + ax + b (mod p)`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PrimeCurve {
    p: BigUint,
    a: BigUint,
    b: BigUint,
}

impl PrimeCurve {
    /// Curve with field modulus `p` and coefficients `a`, `b`.
    ///
    /// Coefficients are reduced modulo `p`.
    pub fn new(p: BigUint, a: BigUint, b: BigUint) -> Self {
        let a = a % &p;
        let b = b % &p;
        Self { p, a, b }
    }

    /// Curve through `(x, y)` with field modulus `p` and coefficient `a`.
    pub fn from_point(p: BigUint, a: BigUint, x: &BigUint, y: &BigUint) -> Self {
        let b = Self::derive_b(&p, &a, x, y);
        Self::new(p, a, b)
    }

    /// Coefficient `b = y^2 - x^3 - ax (mod p)` of the curve with modulus `p`
    /// and coefficient `a` passing through `(x, y)`.
    pub fn derive_b(p: &BigUint, a: &BigUint, x: &BigUint, y: &BigUint) -> BigUint {
        let f = PrimeField::new(p);
        let rhs = f.weierstrass_rhs(a, &BigUint::zero(), x);
        f.sub(&f.square(y), &rhs)
    }

    /// Field modulus.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Coefficient `a`.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b`.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    pub(crate) fn field(&self) -> PrimeField<'_> {
        PrimeField::new(&self.p)
    }

    /// Does `point` satisfy `y^2 = x^3 + ax + b (mod p)`?
    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        let Some((x, y)) = point.coordinates() else {
            return true;
        };

        if x >= &self.p || y >= &self.p {
            return false;
        }

        let f = self.field();
        f.square(y) == f.weierstrass_rhs(&self.a, &self.b, x)
    }

    /// `-point`, i.e. `(x, p - y)`.
    pub fn negate(&self, point: &AffinePoint) -> AffinePoint {
        match point {
            AffinePoint::Identity => AffinePoint::Identity,
            AffinePoint::Point { x, y } => AffinePoint::new(x.clone(), self.field().neg(y)),
        }
    }

    /// `p1 + p2` by the chord-and-tangent rule.
    ///
    /// Fails with [`Error::Arithmetic`](crate::Error::Arithmetic) only if
    /// `p` is not prime.
    pub fn add(&self, p1: &AffinePoint, p2: &AffinePoint) -> Result<AffinePoint> {
        let (x1, y1, x2, y2) = match (p1, p2) {
            (AffinePoint::Identity, _) => return Ok(p2.clone()),
            (_, AffinePoint::Identity) => return Ok(p1.clone()),
            (AffinePoint::Point { x: x1, y: y1 }, AffinePoint::Point { x: x2, y: y2 }) => {
                (x1, y1, x2, y2)
            }
        };

        let f = self.field();
        let slope = if f.reduce(x1) != f.reduce(x2) {
            // secant through both points
            f.mul(&f.sub(y2, y1), &f.invert(&f.sub(x2, x1))?)
        } else if !f.add(y1, y2).is_zero() {
            // tangent at p1
            let numerator = f.add(&f.scale(3, &f.square(x1)), &self.a);
            f.mul(&numerator, &f.invert(&f.scale(2, y1))?)
        } else {
            return Ok(AffinePoint::Identity);
        };

        let x3 = f.sub(&f.sub(&f.square(&slope), x1), x2);
        let y3 = f.sub(&f.mul(&slope, &f.sub(x1, &x3)), y1);
        Ok(AffinePoint::new(x3, y3))
    }

    /// `2 * point`.
    pub fn double(&self, point: &AffinePoint) -> Result<AffinePoint> {
        self.add(point, point)
    }

    /// Parity of `y` selects between the two roots of a compressed point.
    pub(crate) fn recover_y(&self, x: &BigUint, odd: bool) -> Option<BigUint> {
        let f = self.field();
        let alpha = f.weierstrass_rhs(&self.a, &self.b, x);
        let beta = ntheory::sqrt_mod(&alpha, &self.p)?;

        let y = if beta.is_odd() == odd { beta } else { f.neg(&beta) };
        (y.is_odd() == odd).then_some(y)
    }
}

/// Curve `y^2 + xy = x^3 + ax^2 + b` over `GF(2^m)`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct BinaryCurve {
    field: BinaryField,
    a: BigUint,
    b: BigUint,
}

impl BinaryCurve {
    /// Curve over `field` with coefficients `a`, `b`.
    pub fn new(field: BinaryField, a: BigUint, b: BigUint) -> Self {
        let a = field.reduce(&a);
        let b = field.reduce(&b);
        Self { field, a, b }
    }

    /// Underlying binary field.
    pub fn field(&self) -> &BinaryField {
        &self.field
    }

    /// Coefficient `a`.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b`.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Does `point` satisfy `y^2 + xy = x^3 + ax^2 + b`?
    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        let Some((x, y)) = point.coordinates() else {
            return true;
        };

        let f = &self.field;
        if !f.contains(x) || !f.contains(y) {
            return false;
        }

        let x2 = f.square(x);
        let lhs = f.add(&f.square(y), &f.mul(x, y));
        let rhs = f.add(&f.add(&f.mul(&x2, x), &f.mul(&self.a, &x2)), &self.b);
        lhs == rhs
    }

    /// Recover `y` from `x` and the low bit of `y / x`.
    ///
    /// Returns `None` if no point with this `x` exists. Only odd extension
    /// degrees are supported.
    pub(crate) fn recover_y(&self, x: &BigUint, y_bit: bool) -> Option<BigUint> {
        let f = &self.field;
        if f.degree() % 2 == 0 || !f.contains(x) {
            return None;
        }

        if x.is_zero() {
            return Some(f.sqrt(&self.b));
        }

        // substituting y = xz gives z^2 + z = x + a + b/x^2
        let x_inv = f.invert(x).ok()?;
        let beta = f.add(&f.add(x, &self.a), &f.mul(&self.b, &f.square(&x_inv)));
        let mut z = f.half_trace(&beta);
        if f.add(&f.square(&z), &z) != beta {
            return None;
        }

        if z.bit(0) != y_bit {
            z.set_bit(0, y_bit);
        }

        Some(f.mul(x, &z))
    }

    /// Low bit of `y / x` as used by compressed encodings; `0` when `x = 0`.
    pub(crate) fn compression_bit(&self, x: &BigUint, y: &BigUint) -> bool {
        match self.field.invert(x) {
            Ok(x_inv) => self.field.mul(y, &x_inv).bit(0),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uint(n: u32) -> BigUint {
        BigUint::from(n)
    }

    /// y^2 = x^3 + 2x + 2 over GF(17), of order 19 with generator (5, 1).
    fn toy() -> PrimeCurve {
        PrimeCurve::new(uint(17), uint(2), uint(2))
    }

    fn g() -> AffinePoint {
        AffinePoint::new(uint(5), uint(1))
    }

    #[test]
    fn toy_curve_points() {
        let curve = toy();
        assert!(curve.is_on_curve(&g()));
        assert!(!curve.is_on_curve(&AffinePoint::new(uint(5), uint(2))));
        assert!(!curve.is_on_curve(&AffinePoint::new(uint(22), uint(1))));
        assert!(curve.is_on_curve(&AffinePoint::Identity));
    }

    #[test]
    fn toy_curve_add() {
        let curve = toy();
        assert_eq!(curve.double(&g()).unwrap(), AffinePoint::new(uint(6), uint(3)));
        assert_eq!(
            curve.add(&g(), &AffinePoint::new(uint(6), uint(3))).unwrap(),
            AffinePoint::new(uint(10), uint(6))
        );
        assert_eq!(curve.add(&g(), &curve.negate(&g())).unwrap(), AffinePoint::Identity);
        assert_eq!(curve.add(&AffinePoint::Identity, &g()).unwrap(), g());
        assert_eq!(curve.add(&g(), &AffinePoint::Identity).unwrap(), g());
    }

    #[test]
    fn toy_curve_order() {
        let curve = toy();
        let mut acc = g();
        for _ in 1..18 {
            acc = curve.add(&acc, &g()).unwrap();
            assert!(curve.is_on_curve(&acc));
        }
        // 18G = -G
        assert_eq!(acc, curve.negate(&g()));
        assert_eq!(curve.add(&acc, &g()).unwrap(), AffinePoint::Identity);
    }

    #[test]
    fn derive_b_from_generator() {
        assert_eq!(PrimeCurve::derive_b(&uint(17), &uint(2), &uint(5), &uint(1)), uint(2));
        assert_eq!(PrimeCurve::from_point(uint(17), uint(2), &uint(5), &uint(1)), toy());
    }

    #[test]
    fn negate_identity() {
        assert_eq!(toy().negate(&AffinePoint::Identity), AffinePoint::Identity);
    }

    #[test]
    fn recover_toy_y() {
        let curve = toy();
        assert_eq!(curve.recover_y(&uint(5), true), Some(uint(1)));
        assert_eq!(curve.recover_y(&uint(5), false), Some(uint(16)));
        // 4^3 + 8 + 2 = 74 = 6 (mod 17) is not a square
        assert_eq!(curve.recover_y(&uint(4), false), None);
    }

    #[test]
    fn field_bits() {
        assert_eq!(Curve::from(toy()).field_bits(), 5);
        let binary = BinaryCurve::new(BinaryField::new(163, &[7, 6, 3]), uint(1), uint(1));
        assert_eq!(Curve::from(binary).field_bits(), 163);
    }
}
