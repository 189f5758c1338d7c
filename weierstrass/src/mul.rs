//! Scalar multiplication.

use crate::{AffinePoint, LookupTable, PrimeCurve, ProjectivePoint, Result};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

/// Non-adjacent form of `k`, most significant digit first.
///
/// Every digit is `-1`, `0` or `1`, no two adjacent digits are non-zero and
/// `sum d_i 2^i = k`. Zero expands to no digits at all.
pub fn naf(k: &BigUint) -> Vec<i8> {
    let mut k = k.clone();
    let mut digits = Vec::with_capacity(k.bits() as usize + 1);

    while !k.is_zero() {
        let digit = if k.is_odd() {
            // 1 if k = 1 (mod 4), -1 if k = 3 (mod 4)
            if k.bit(1) {
                k += 1u32;
                -1
            } else {
                k -= 1u32;
                1
            }
        } else {
            0
        };

        digits.push(digit);
        k >>= 1u32;
    }

    digits.reverse();
    digits
}

impl PrimeCurve {
    /// `k * point`, in Jacobian coordinates.
    pub fn mul_projective(&self, point: &ProjectivePoint, k: &BigUint) -> ProjectivePoint {
        let negated = self.negate_projective(point);
        let mut acc = ProjectivePoint::identity();

        for digit in naf(k) {
            acc = self.double_projective(&acc);
            match digit {
                1 => acc = self.add_projective(&acc, point),
                -1 => acc = self.add_projective(&acc, &negated),
                _ => {}
            }
        }

        acc
    }

    /// `k * point`.
    pub fn mul(&self, point: &AffinePoint, k: &BigUint) -> Result<AffinePoint> {
        self.to_affine(&self.mul_projective(&point.to_projective(), k))
    }

    /// `k1 * p + k2 * q` with a single shared doubling chain.
    pub fn lincomb(
        &self,
        p: &AffinePoint,
        k1: &BigUint,
        q: &AffinePoint,
        k2: &BigUint,
    ) -> Result<AffinePoint> {
        let table = LookupTable::new(self, &p.to_projective(), &q.to_projective());

        let mut digits1 = naf(k1);
        let mut digits2 = naf(k2);
        let len = digits1.len().max(digits2.len());
        pad_front(&mut digits1, len);
        pad_front(&mut digits2, len);

        let mut acc = ProjectivePoint::identity();
        for (&d1, &d2) in digits1.iter().zip(&digits2) {
            acc = self.double_projective(&acc);
            if d1 != 0 || d2 != 0 {
                acc = self.add_projective(&acc, table.select(d1, d2));
            }
        }

        self.to_affine(&acc)
    }
}

fn pad_front(digits: &mut Vec<i8>, len: usize) {
    let missing = len - digits.len();
    digits.splice(0..0, core::iter::repeat_n(0, missing));
}
