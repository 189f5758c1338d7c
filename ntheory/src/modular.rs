//! Modular inverse and modular exponentiation.

use crate::{Error, Result};
use core::mem;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};
use std::sync::LazyLock;

/// Backend selected once per process by [`Backend::detect`].
static BACKEND: LazyLock<Backend> = LazyLock::new(Backend::select);

/// Implementation used for modular exponentiation.
///
/// Both backends produce identical results; they differ only in speed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Backend {
    /// Left-to-right square-and-multiply over plain big integers.
    Portable,

    /// `num-bigint`'s Montgomery multiplication based `modpow`.
    Native,
}

impl Backend {
    /// The backend used by [`mod_pow`], chosen on first use.
    pub fn detect() -> Self {
        *BACKEND
    }

    fn select() -> Self {
        if cfg!(feature = "accelerated") {
            Backend::Native
        } else {
            log::warn!("accelerated modular exponentiation disabled, calculations may be slower");
            Backend::Portable
        }
    }

    /// Compute `base^exponent mod modulus` with this backend.
    ///
    /// Fails with [`Error::Arithmetic`] if `modulus` is zero.
    pub fn mod_pow(self, base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint> {
        if modulus.is_zero() {
            return Err(Error::Arithmetic);
        }

        Ok(match self {
            Backend::Portable => square_and_multiply(base, exponent, modulus),
            Backend::Native => base.modpow(exponent, modulus),
        })
    }
}

fn square_and_multiply(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    let mut result = BigUint::one() % modulus;

    for i in (0..exponent.bits()).rev() {
        result = (&result * &result) % modulus;
        if exponent.bit(i) {
            result = (result * base) % modulus;
        }
    }

    result
}

/// Compute `a^-1 mod n` with the extended Euclidean algorithm.
///
/// The result is normalized into `[0, n)`. Fails with [`Error::Arithmetic`]
/// when `gcd(a, n) != 1` or `n` is zero.
pub fn mod_inverse(a: &BigUint, n: &BigUint) -> Result<BigUint> {
    if n.is_zero() {
        return Err(Error::Arithmetic);
    }

    let modulus = BigInt::from(n.clone());
    let mut old_r = BigInt::from(a % n);
    let mut r = modulus.clone();
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = mem::replace(&mut r, next_r);
        let next_s = &old_s - &q * &s;
        old_s = mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return Err(Error::Arithmetic);
    }

    old_s.mod_floor(&modulus).to_biguint().ok_or(Error::Arithmetic)
}

/// Compute `base^exponent mod modulus`.
///
/// A negative exponent yields the inverse of `base^|exponent|`, which fails
/// with [`Error::Arithmetic`] when `base` is not invertible.
pub fn mod_pow(base: &BigUint, exponent: &BigInt, modulus: &BigUint) -> Result<BigUint> {
    let power = Backend::detect().mod_pow(base, exponent.magnitude(), modulus)?;

    match exponent.sign() {
        Sign::Minus => mod_inverse(&power, modulus),
        Sign::NoSign | Sign::Plus => Ok(power),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uint(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn inverse_small() {
        assert_eq!(mod_inverse(&uint(3), &uint(11)).unwrap(), uint(4));
        assert_eq!(mod_inverse(&uint(10), &uint(17)).unwrap(), uint(12));
        assert_eq!(mod_inverse(&uint(1), &uint(2)).unwrap(), uint(1));
    }

    #[test]
    fn inverse_of_larger_value_is_reduced() {
        assert_eq!(mod_inverse(&uint(14), &uint(11)).unwrap(), uint(4));
    }

    #[test]
    fn inverse_not_coprime() {
        assert_eq!(mod_inverse(&uint(6), &uint(9)), Err(Error::Arithmetic));
        assert_eq!(mod_inverse(&uint(0), &uint(7)), Err(Error::Arithmetic));
        assert_eq!(mod_inverse(&uint(3), &uint(0)), Err(Error::Arithmetic));
    }

    #[test]
    fn pow_positive() {
        assert_eq!(mod_pow(&uint(4), &BigInt::from(13), &uint(497)).unwrap(), uint(445));
        assert_eq!(mod_pow(&uint(7), &BigInt::from(0), &uint(13)).unwrap(), uint(1));
        assert_eq!(mod_pow(&uint(7), &BigInt::from(5), &uint(1)).unwrap(), uint(0));
    }

    #[test]
    fn pow_negative() {
        // 3^2 = 9 and 9 * 5 = 45 = 1 (mod 11)
        assert_eq!(mod_pow(&uint(3), &BigInt::from(-2), &uint(11)).unwrap(), uint(5));
        assert_eq!(
            mod_pow(&uint(3), &BigInt::from(-1), &uint(9)),
            Err(Error::Arithmetic)
        );
    }

    #[test]
    fn pow_zero_modulus() {
        assert_eq!(
            mod_pow(&uint(3), &BigInt::from(2), &uint(0)),
            Err(Error::Arithmetic)
        );
    }

    #[test]
    fn backends_agree() {
        let base = uint(0xdead_beef);
        let exponent = uint(0x1234_5678_9abc);
        let modulus = uint(0xffff_fffb);

        assert_eq!(
            Backend::Portable.mod_pow(&base, &exponent, &modulus).unwrap(),
            Backend::Native.mod_pow(&base, &exponent, &modulus).unwrap()
        );
    }

    #[test]
    fn default_backend() {
        assert_eq!(Backend::detect() == Backend::Native, cfg!(feature = "accelerated"));
    }
}
