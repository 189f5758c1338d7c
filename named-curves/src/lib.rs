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
//! let params = named_curves::lookup("prime256v1")?;
//! assert_eq!(params.name(), "secp256r1");
//!
//! let g = params.generator_point().expect("generator is well-formed");
//! assert!(params.curve().is_on_curve(&g));
//! # Ok::<(), named_curves::Error>(())
//! ```

mod domain;
mod error;
mod registry;
mod table;

pub use crate::{
    domain::DomainParameters,
    error::{Error, Result},
    registry::{find_matching, friendly_name, iter, lookup, lookup_oid},
};
pub use der::asn1::ObjectIdentifier;
pub use weierstrass;
