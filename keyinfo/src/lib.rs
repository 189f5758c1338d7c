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
//! use hex_literal::hex;
//! use keyinfo::{KeyInfo, PublicKeyMaterial};
//!
//! // secp256r1 key with the curve's base point as public point
//! let spki = hex!(
//!     "3059301306072a8648ce3d020106082a8648ce3d03010703420004"
//!     "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
//!     "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"
//! );
//!
//! let key = PublicKeyMaterial::from_spki_der(&spki)?;
//! let KeyInfo::Ec { bits, name, .. } = key.info() else {
//!     unreachable!("id-ecPublicKey decodes to an EC key");
//! };
//! assert_eq!(bits, 256);
//! assert_eq!(name, "secp256r1");
//! # Ok::<(), keyinfo::Error>(())
//! ```

pub mod asn1;
pub mod oids;

mod dsa;
mod ec;
mod error;
mod extension;
mod info;
mod public_key;
mod rsa;

pub use crate::{
    dsa::{DsaParameters, DsaPublicKey},
    ec::EcPublicKey,
    error::{Error, Result},
    extension::{Extension, KeyPurpose, KeyUsage, parse_extension},
    info::KeyInfo,
    public_key::PublicKeyMaterial,
    rsa::RsaPublicKey,
};
pub use der;
pub use named_curves;
