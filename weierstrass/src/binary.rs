//! Arithmetic in binary extension fields `GF(2^m)` with a polynomial basis.
//!
//! Elements are polynomials over `GF(2)` packed into integers: bit `i` is the
//! coefficient of `t^i`.

use crate::{Error, Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Binary field `GF(2^m)` defined by an irreducible trinomial or pentanomial.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct BinaryField {
    /// Exponents of the reduction polynomial, highest first, ending in `0`.
    terms: Vec<u32>,

    /// The reduction polynomial itself.
    modulus: BigUint,
}

impl BinaryField {
    /// Field defined by `f(t) = t^m + t^k1 + ... + 1`.
    ///
    /// `lower` lists the exponents below `m` in any order; the constant term
    /// is always present and may be omitted.
    pub fn new(m: u32, lower: &[u32]) -> Self {
        let mut terms = Vec::with_capacity(lower.len() + 2);
        terms.push(m);
        terms.extend(lower.iter().copied().filter(|&k| k != 0 && k < m));
        terms[1..].sort_unstable_by(|a, b| b.cmp(a));
        terms.dedup();
        terms.push(0);

        let mut modulus = BigUint::zero();
        for &k in &terms {
            modulus.set_bit(u64::from(k), true);
        }

        Self { terms, modulus }
    }

    /// Extension degree `m`.
    pub fn degree(&self) -> u32 {
        self.terms[0]
    }

    /// Exponents of the reduction polynomial, highest first.
    pub fn terms(&self) -> &[u32] {
        &self.terms
    }

    /// Is `a` a reduced element of this field?
    pub fn contains(&self, a: &BigUint) -> bool {
        a.bits() <= u64::from(self.degree())
    }

    /// Reduce an arbitrary polynomial modulo `f(t)`.
    pub fn reduce(&self, a: &BigUint) -> BigUint {
        let m = u64::from(self.degree());
        let mut r = a.clone();

        while r.bits() > m {
            let shift = r.bits() - 1 - m;
            r ^= &self.modulus << shift;
        }

        r
    }

    /// `a + b`, which is also `a - b`.
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a ^ b
    }

    /// `a * b mod f(t)`.
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let mut product = BigUint::zero();

        for i in 0..b.bits() {
            if b.bit(i) {
                product ^= a << i;
            }
        }

        self.reduce(&product)
    }

    /// `a^2 mod f(t)`.
    pub fn square(&self, a: &BigUint) -> BigUint {
        // squaring spreads bit i to bit 2i
        let mut spread = BigUint::zero();

        for i in 0..a.bits() {
            if a.bit(i) {
                spread.set_bit(2 * i, true);
            }
        }

        self.reduce(&spread)
    }

    /// `a^-1` computed as `a^(2^m - 2)`.
    pub fn invert(&self, a: &BigUint) -> Result<BigUint> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Err(Error::Arithmetic);
        }

        let mut power = a;
        let mut result = BigUint::one();

        for _ in 1..self.degree() {
            power = self.square(&power);
            result = self.mul(&result, &power);
        }

        Ok(result)
    }

    /// Unique square root `a^(2^(m-1))`.
    pub fn sqrt(&self, a: &BigUint) -> BigUint {
        let mut root = self.reduce(a);

        for _ in 1..self.degree() {
            root = self.square(&root);
        }

        root
    }

    /// Half-trace `sum a^(2^(2i))` for `i = 0..=(m-1)/2`.
    ///
    /// For odd `m`, `z = half_trace(b)` solves `z^2 + z = b` whenever the
    /// equation has a solution.
    pub fn half_trace(&self, a: &BigUint) -> BigUint {
        let mut power = self.reduce(a);
        let mut result = power.clone();

        for _ in 0..(self.degree() - 1) / 2 {
            power = self.square(&self.square(&power));
            result ^= &power;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::BinaryField;
    use num_bigint::BigUint;

    fn uint(n: u32) -> BigUint {
        BigUint::from(n)
    }

    /// GF(2^4) with t^4 + t + 1.
    fn gf16() -> BinaryField {
        BinaryField::new(4, &[1, 0])
    }

    /// GF(2^5) with t^5 + t^2 + 1.
    fn gf32() -> BinaryField {
        BinaryField::new(5, &[2])
    }

    #[test]
    fn polynomial_terms() {
        let field = BinaryField::new(163, &[3, 7, 6]);
        assert_eq!(field.degree(), 163);
        assert_eq!(field.terms(), &[163, 7, 6, 3, 0]);
    }

    #[test]
    fn multiplication() {
        let field = gf16();
        // (t^3 + 1) * (t^2 + t) = t^5 + t^4 + t^2 + t = t + 1 (mod t^4 + t + 1)
        assert_eq!(field.mul(&uint(0b1001), &uint(0b0110)), uint(0b0011));
        assert_eq!(field.square(&uint(0b1001)), field.mul(&uint(0b1001), &uint(0b1001)));
    }

    #[test]
    fn inverses() {
        let field = gf32();
        for a in 1..32u32 {
            let inv = field.invert(&uint(a)).unwrap();
            assert_eq!(field.mul(&uint(a), &inv), uint(1));
        }
        assert!(field.invert(&uint(0)).is_err());
        assert!(field.invert(&uint(0b100101)).is_err());
    }

    #[test]
    fn square_roots() {
        let field = gf32();
        for a in 0..32u32 {
            let root = field.sqrt(&uint(a));
            assert_eq!(field.square(&root), uint(a));
        }
    }

    #[test]
    fn half_trace_solves_quadratic() {
        let field = gf32();
        let mut solvable = 0;
        for beta in 0..32u32 {
            let z = field.half_trace(&uint(beta));
            if field.add(&field.square(&z), &z) == uint(beta) {
                solvable += 1;
            }
        }
        // exactly the elements of trace zero
        assert_eq!(solvable, 16);
    }
}
