//! Prime field arithmetic modulo a runtime modulus.

use crate::Result;
use num_bigint::BigUint;
use num_traits::Zero;

/// Arithmetic in `GF(p)` on reduced representatives in `[0, p)`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PrimeField<'a> {
    p: &'a BigUint,
}

impl<'a> PrimeField<'a> {
    pub(crate) fn new(p: &'a BigUint) -> Self {
        Self { p }
    }

    pub(crate) fn reduce(&self, a: &BigUint) -> BigUint {
        a % self.p
    }

    pub(crate) fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % self.p
    }

    pub(crate) fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let b = b % self.p;
        (a + self.p - b) % self.p
    }

    pub(crate) fn neg(&self, a: &BigUint) -> BigUint {
        let a = a % self.p;
        if a.is_zero() { a } else { self.p - a }
    }

    pub(crate) fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % self.p
    }

    pub(crate) fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// `k * a` for a small constant `k`.
    pub(crate) fn scale(&self, k: u32, a: &BigUint) -> BigUint {
        (a * k) % self.p
    }

    pub(crate) fn invert(&self, a: &BigUint) -> Result<BigUint> {
        Ok(ntheory::mod_inverse(a, self.p)?)
    }

    /// `x^3 + a*x + b`, the right-hand side of the curve equation.
    pub(crate) fn weierstrass_rhs(&self, a: &BigUint, b: &BigUint, x: &BigUint) -> BigUint {
        let x2 = self.square(x);
        let x3 = self.mul(&x2, x);
        self.add(&self.add(&x3, &self.mul(a, x)), b)
    }
}
