//! Probabilistic primality testing and random prime generation.

use crate::{Backend, byte_length};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand_core::{OsRng, RngCore, TryRngCore};

/// Primes below 100, used for trial division ahead of Miller-Rabin.
const SMALL_PRIMES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// Miller-Rabin probabilistic primality test with `rounds` random bases drawn
/// from the operating system RNG.
///
/// A composite survives with probability at most `4^-rounds`. Every integer
/// with a prime factor below 100 is classified exactly.
pub fn is_probably_prime(n: &BigUint, rounds: usize) -> bool {
    is_probably_prime_with_rng(n, rounds, &mut OsRng.unwrap_err())
}

/// [`is_probably_prime`] with a caller supplied RNG for the witnesses.
pub fn is_probably_prime_with_rng<R: RngCore + ?Sized>(
    n: &BigUint,
    rounds: usize,
    rng: &mut R,
) -> bool {
    if let Some(verdict) = trial_division(n) {
        return verdict;
    }

    let n_minus_one = n - 1u32;
    // n is odd and above 100 here
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;
    let backend = Backend::detect();

    'witness: for _ in 0..rounds {
        let a = random_below(&(n - 3u32), rng) + 2u32;
        let Ok(mut x) = backend.mod_pow(&a, &d, n) else {
            return false;
        };

        if x.is_one() || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

/// Settle primality by trial division when `n` is small or has a small factor.
fn trial_division(n: &BigUint) -> Option<bool> {
    if n < &BigUint::from(2u32) {
        return Some(false);
    }

    for p in SMALL_PRIMES {
        let p = BigUint::from(p);
        if n == &p {
            return Some(true);
        }
        if n.is_multiple_of(&p) {
            return Some(false);
        }
    }

    // no factor below 100 means every n below 100^2 is prime
    (n < &BigUint::from(10_000u32)).then_some(true)
}

/// Uniform-ish integer in `[0, bound)`; `bound` must be non-zero.
fn random_below<R: RngCore + ?Sized>(bound: &BigUint, rng: &mut R) -> BigUint {
    let mut bytes = vec![0u8; byte_length(bound) + 8];
    rng.fill_bytes(&mut bytes);
    BigUint::from_bytes_be(&bytes) % bound
}

/// Generate a random probable prime of exactly `byte_size` bytes using the
/// operating system RNG.
///
/// The two most significant bits are set, so the product of two such primes
/// is exactly `2 * byte_size` bytes long.
///
/// # Panics
///
/// Panics if `byte_size` is zero.
pub fn generate_prime(byte_size: usize, rounds: usize) -> BigUint {
    generate_prime_with_rng(byte_size, rounds, &mut OsRng.unwrap_err())
}

/// [`generate_prime`] with a caller supplied RNG.
///
/// # Panics
///
/// Panics if `byte_size` is zero.
pub fn generate_prime_with_rng<R: RngCore + ?Sized>(
    byte_size: usize,
    rounds: usize,
    rng: &mut R,
) -> BigUint {
    assert!(byte_size > 0, "prime size must be at least one byte");

    let mut bytes = vec![0u8; byte_size];
    let mut attempts = 0u64;

    loop {
        rng.fill_bytes(&mut bytes);
        bytes[0] |= 0xc0;
        bytes[byte_size - 1] |= 0x01;

        let candidate = BigUint::from_bytes_be(&bytes);
        attempts += 1;

        if is_probably_prime_with_rng(&candidate, rounds, rng) {
            log::trace!("found {byte_size}-byte prime after {attempts} candidates");
            return candidate;
        }
    }
}

/// Largest probable prime strictly below `n`, or `None` if there is none.
pub fn prime_below(n: &BigUint, rounds: usize) -> Option<BigUint> {
    if n <= &BigUint::from(2u32) {
        return None;
    }

    let mut candidate = n - 1u32;
    if candidate > BigUint::from(2u32) && candidate.is_even() {
        candidate -= 1u32;
    }

    while !candidate.is_zero() {
        if is_probably_prime(&candidate, rounds) {
            return Some(candidate);
        }
        if candidate == BigUint::from(3u32) {
            candidate = BigUint::from(2u32);
        } else {
            candidate -= 2u32;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uint(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn small_values() {
        assert!(!is_probably_prime(&uint(0), 10));
        assert!(!is_probably_prime(&uint(1), 10));
        assert!(is_probably_prime(&uint(2), 10));
        assert!(is_probably_prime(&uint(3), 10));
        assert!(!is_probably_prime(&uint(4), 10));
        assert!(is_probably_prime(&uint(97), 10));
        assert!(!is_probably_prime(&uint(91), 10));
        assert!(is_probably_prime(&uint(9973), 10));
    }

    #[test]
    fn carmichael_numbers() {
        for n in [561u64, 1105, 1729, 2465, 2821, 6601, 8911, 41041, 825265] {
            assert!(!is_probably_prime(&uint(n), 20), "{n}");
        }
    }

    #[test]
    fn strong_pseudoprime_base_two() {
        // 3215031751 = 151 * 751 * 28351 fools bases 2, 3, 5 and 7
        assert!(!is_probably_prime(&uint(3_215_031_751), 40));
    }

    #[test]
    fn mersenne_primes() {
        let m127 = (BigUint::one() << 127usize) - 1u32;
        assert!(is_probably_prime(&m127, 20));

        let m128 = (BigUint::one() << 128usize) - 1u32;
        assert!(!is_probably_prime(&m128, 20));
    }

    #[test]
    fn zero_rounds_still_trial_divides() {
        assert!(!is_probably_prime(&uint(91), 0));
        assert!(is_probably_prime(&uint(101), 0));
    }

    #[test]
    fn generated_prime_shape() {
        for size in [1usize, 8, 32] {
            let p = generate_prime(size, 20);
            assert_eq!(byte_length(&p), size);
            assert!(p.bit(size as u64 * 8 - 1));
            assert!(p.bit(size as u64 * 8 - 2));
            assert!(p.is_odd());
            assert!(is_probably_prime(&p, 20));
        }
    }

    #[test]
    #[should_panic]
    fn generate_zero_bytes() {
        generate_prime(0, 10);
    }

    #[test]
    fn largest_prime_below() {
        assert_eq!(prime_below(&uint(100), 10), Some(uint(97)));
        assert_eq!(prime_below(&uint(97), 10), Some(uint(89)));
        assert_eq!(prime_below(&uint(4), 10), Some(uint(3)));
        assert_eq!(prime_below(&uint(3), 10), Some(uint(2)));
        assert_eq!(prime_below(&uint(2), 10), None);
        assert_eq!(prime_below(&uint(0), 10), None);
    }
}
