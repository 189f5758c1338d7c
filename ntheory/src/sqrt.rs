//! Modular square roots, adapted from <https://eprint.iacr.org/2012/685.pdf>.

use crate::Backend;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Square root algorithms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Algorithm {
    /// Atkin's algorithm for `p ≡ 5 (mod 8)`.
    Atkin,

    /// Shanks algorithm for `p ≡ 3 (mod 4)`.
    Shanks,

    /// Tonelli-Shanks algorithm for any odd prime.
    TonelliShanks,
}

impl Algorithm {
    /// Determine the best algorithm to use with a particular modulus.
    fn for_modulus(p: &BigUint) -> Self {
        let low = p.iter_u32_digits().next().unwrap_or(0);
        if low % 4 == 3 {
            Self::Shanks
        } else if low % 8 == 5 {
            Self::Atkin
        } else {
            Self::TonelliShanks
        }
    }
}

/// Jacobi symbol `(a / n)` for odd `n`.
///
/// Returns `0` when `gcd(a, n) != 1`, otherwise `1` or `-1`. For prime `n`
/// this is the Legendre symbol: `1` iff `a` is a non-zero quadratic residue.
///
/// # Panics
///
/// Panics if `n` is even.
pub fn jacobi(a: &BigUint, n: &BigUint) -> i8 {
    assert!(n.is_odd(), "Jacobi symbol is only defined for odd n");

    let mut a = a % n;
    let mut n = n.clone();
    let mut result = 1i8;

    while !a.is_zero() {
        let twos = a.trailing_zeros().unwrap_or(0);
        a >>= twos;

        let n_mod_8 = n.iter_u32_digits().next().unwrap_or(0) % 8;
        if twos % 2 == 1 && (n_mod_8 == 3 || n_mod_8 == 5) {
            result = -result;
        }

        core::mem::swap(&mut a, &mut n);

        let a_mod_4 = a.iter_u32_digits().next().unwrap_or(0) % 4;
        let n_mod_4 = n.iter_u32_digits().next().unwrap_or(0) % 4;
        if a_mod_4 == 3 && n_mod_4 == 3 {
            result = -result;
        }

        a %= &n;
    }

    if n.is_one() { result } else { 0 }
}

/// Square root of `a` modulo the odd prime `p`.
///
/// Returns `None` if `a` is not a quadratic residue. For `p = 2` the square
/// root is `a mod 2`. Of the two roots `r` and `p - r` either may be
/// returned; callers select one by parity.
pub fn sqrt_mod(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    if p < &BigUint::from(2u32) {
        return None;
    }

    let a = a % p;
    if p == &BigUint::from(2u32) || a.is_zero() {
        return Some(a);
    }

    if jacobi(&a, p) != 1 {
        return None;
    }

    let root = match Algorithm::for_modulus(p) {
        Algorithm::Shanks => sqrt_shanks(&a, p)?,
        Algorithm::Atkin => sqrt_atkin(&a, p)?,
        Algorithm::TonelliShanks => sqrt_tonelli_shanks(&a, p)?,
    };

    ((&root * &root) % p == a).then_some(root)
}

/// For `p ≡ 3 (mod 4)`, sqrt can be computed with only one exponentiation as
/// `a^((p + 1) / 4) (mod p)`.
fn sqrt_shanks(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let exponent = (p + 1u32) >> 2u32;
    Backend::detect().mod_pow(a, &exponent, p).ok()
}

/// Atkin's algorithm for `p ≡ 5 (mod 8)`.
fn sqrt_atkin(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let backend = Backend::detect();
    let two_a = (a << 1u32) % p;
    let t = backend.mod_pow(&two_a, &((p - 5u32) >> 3u32), p).ok()?;
    let i = (&two_a * &t * &t) % p;
    let i_minus_one = (i + p - 1u32) % p;
    Some((a * t * i_minus_one) % p)
}

/// Tonelli-Shanks algorithm works for every odd prime.
fn sqrt_tonelli_shanks(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let backend = Backend::detect();
    let p_minus_one = p - 1u32;
    let s = p_minus_one.trailing_zeros()?;
    let q = &p_minus_one >> s;

    let mut z = BigUint::from(2u32);
    while jacobi(&z, p) != -1 {
        z += 1u32;
    }

    let mut m = s;
    let mut c = backend.mod_pow(&z, &q, p).ok()?;
    let mut t = backend.mod_pow(a, &q, p).ok()?;
    let mut r = backend.mod_pow(a, &((&q + 1u32) >> 1u32), p).ok()?;

    while !t.is_one() {
        let mut i = 0;
        let mut t2i = t.clone();
        while !t2i.is_one() {
            t2i = (&t2i * &t2i) % p;
            i += 1;
            if i == m {
                return None;
            }
        }

        let mut b = c;
        for _ in 0..(m - i - 1) {
            b = (&b * &b) % p;
        }

        m = i;
        c = (&b * &b) % p;
        t = (t * &c) % p;
        r = (r * b) % p;
    }

    Some(r)
}
