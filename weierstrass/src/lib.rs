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

//! ## Usage
//!
//! ```
//! use weierstrass::{AffinePoint, BigUint, PrimeCurve};
//!
//! // y^2 = x^3 + 2x + 2 over GF(17)
//! let curve = PrimeCurve::new(17u32.into(), 2u32.into(), 2u32.into());
//! let g = AffinePoint::new(BigUint::from(5u32), BigUint::from(1u32));
//!
//! let p = curve.mul(&g, &BigUint::from(7u32))?;
//! assert!(curve.is_on_curve(&p));
//! assert_eq!(curve.mul(&g, &BigUint::from(19u32))?, AffinePoint::Identity);
//! # Ok::<(), weierstrass::Error>(())
//! ```

mod affine;
mod binary;
mod curve;
mod error;
mod field;
mod lookup_table;
mod mul;
mod projective;
mod sec1;

pub use crate::{
    affine::AffinePoint,
    binary::BinaryField,
    curve::{BinaryCurve, Curve, PrimeCurve},
    error::{Error, Result},
    lookup_table::LookupTable,
    mul::naf,
    projective::ProjectivePoint,
};
pub use ntheory::{self, BigInt, BigUint};
