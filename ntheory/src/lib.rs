#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

mod bytes;
mod error;
mod modular;
mod prime;
mod sqrt;

pub use crate::{
    bytes::{bit_length, byte_length, bytes_to_int, int_to_bytes},
    error::{Error, Result},
    modular::{Backend, mod_inverse, mod_pow},
    prime::{
        generate_prime, generate_prime_with_rng, is_probably_prime, is_probably_prime_with_rng,
        prime_below,
    },
    sqrt::{jacobi, sqrt_mod},
};
pub use num_bigint::{self, BigInt, BigUint};
pub use rand_core;
