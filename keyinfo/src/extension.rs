//! Post-decode interpretation of the X.509 extensions relevant to key usage.

use crate::{
    Result,
    asn1::{AuthorityKeyIdentifier, BasicConstraints},
    oids,
};
use der::{
    Any, Decode,
    asn1::{BitString, ObjectIdentifier, OctetString},
};
use num_bigint::BigUint;
use std::fmt;

/// Bits of the `keyUsage` extension, in bit string order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum KeyUsage {
    /// `digitalSignature (0)`
    DigitalSignature,
    /// `nonRepudiation (1)`, a.k.a. `contentCommitment`
    NonRepudiation,
    /// `keyEncipherment (2)`
    KeyEncipherment,
    /// `dataEncipherment (3)`
    DataEncipherment,
    /// `keyAgreement (4)`
    KeyAgreement,
    /// `keyCertSign (5)`
    KeyCertSign,
    /// `cRLSign (6)`
    CrlSign,
    /// `encipherOnly (7)`
    EncipherOnly,
    /// `decipherOnly (8)`
    DecipherOnly,
}

impl KeyUsage {
    const ALL: [KeyUsage; 9] = [
        KeyUsage::DigitalSignature,
        KeyUsage::NonRepudiation,
        KeyUsage::KeyEncipherment,
        KeyUsage::DataEncipherment,
        KeyUsage::KeyAgreement,
        KeyUsage::KeyCertSign,
        KeyUsage::CrlSign,
        KeyUsage::EncipherOnly,
        KeyUsage::DecipherOnly,
    ];

    /// ASN.1 name of the bit.
    pub fn name(self) -> &'static str {
        match self {
            KeyUsage::DigitalSignature => "digitalSignature",
            KeyUsage::NonRepudiation => "nonRepudiation",
            KeyUsage::KeyEncipherment => "keyEncipherment",
            KeyUsage::DataEncipherment => "dataEncipherment",
            KeyUsage::KeyAgreement => "keyAgreement",
            KeyUsage::KeyCertSign => "keyCertSign",
            KeyUsage::CrlSign => "cRLSign",
            KeyUsage::EncipherOnly => "encipherOnly",
            KeyUsage::DecipherOnly => "decipherOnly",
        }
    }

    /// Usages whose bits are set in `bits`.
    fn from_bit_string(bits: &BitString) -> Vec<KeyUsage> {
        let bytes = bits.raw_bytes();
        let len = (bytes.len() * 8).saturating_sub(usize::from(bits.unused_bits()));

        KeyUsage::ALL
            .into_iter()
            .enumerate()
            .filter(|&(i, _)| i < len && bytes[i / 8] & (0x80 >> (i % 8)) != 0)
            .map(|(_, usage)| usage)
            .collect()
    }
}

impl fmt::Display for KeyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Extended key usage purpose.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct KeyPurpose(pub ObjectIdentifier);

impl KeyPurpose {
    /// Purpose name, e.g. `serverAuth`.
    pub fn name(&self) -> Option<&'static str> {
        oids::key_purpose_name(&self.0)
    }
}

impl fmt::Display for KeyPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Decoded extension value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Extension {
    /// `keyUsage`
    KeyUsage(Vec<KeyUsage>),

    /// `extKeyUsage`
    ExtKeyUsage(Vec<KeyPurpose>),

    /// `basicConstraints`
    BasicConstraints {
        /// May the key sign certificates?
        ca: bool,

        /// Maximum number of intermediate certificates below this one.
        path_len: Option<u32>,
    },

    /// `subjectKeyIdentifier`, lowercase hex.
    SubjectKeyIdentifier(String),

    /// `authorityKeyIdentifier`
    AuthorityKeyIdentifier {
        /// Issuer's `subjectKeyIdentifier`, lowercase hex.
        key_id: Option<String>,

        /// Undecoded `GeneralName`s of the issuer's issuer.
        issuer: Vec<Any>,

        /// Serial number of the issuer's certificate.
        serial: Option<BigUint>,
    },

    /// Any other extension, kept as its raw value.
    Unrecognized {
        /// Extension OID.
        oid: ObjectIdentifier,

        /// DER encoded extension value.
        value: Vec<u8>,
    },
}

/// Interpret the DER encoded value of the extension identified by `oid`.
pub fn parse_extension(oid: &ObjectIdentifier, der: &[u8]) -> Result<Extension> {
    let extension = if *oid == oids::KEY_USAGE {
        Extension::KeyUsage(KeyUsage::from_bit_string(&BitString::from_der(der)?))
    } else if *oid == oids::EXT_KEY_USAGE {
        let purposes = Vec::<ObjectIdentifier>::from_der(der)?;
        Extension::ExtKeyUsage(purposes.into_iter().map(KeyPurpose).collect())
    } else if *oid == oids::BASIC_CONSTRAINTS {
        let constraints = BasicConstraints::from_der(der)?;
        Extension::BasicConstraints {
            ca: constraints.ca.unwrap_or(false),
            path_len: constraints.path_len_constraint,
        }
    } else if *oid == oids::SUBJECT_KEY_IDENTIFIER {
        let id = OctetString::from_der(der)?;
        Extension::SubjectKeyIdentifier(hex::encode(id.as_bytes()))
    } else if *oid == oids::AUTHORITY_KEY_IDENTIFIER {
        let aki = AuthorityKeyIdentifier::from_der(der)?;
        Extension::AuthorityKeyIdentifier {
            key_id: aki.key_identifier.map(|id| hex::encode(id.as_bytes())),
            issuer: aki.authority_cert_issuer.unwrap_or_default(),
            serial: aki
                .authority_cert_serial_number
                .map(|serial| ntheory::bytes_to_int(serial.as_bytes())),
        }
    } else {
        log::trace!("leaving extension {oid} undecoded");
        Extension::Unrecognized {
            oid: *oid,
            value: der.to_vec(),
        }
    };

    Ok(extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn key_usage_bits() {
        let bits = BitString::from_der(&hex!("03020186")).unwrap();
        assert_eq!(
            KeyUsage::from_bit_string(&bits),
            [KeyUsage::DigitalSignature, KeyUsage::KeyCertSign, KeyUsage::CrlSign]
        );

        let decipher_only = BitString::from_der(&hex!("0303070080")).unwrap();
        assert_eq!(
            KeyUsage::from_bit_string(&decipher_only),
            [KeyUsage::DecipherOnly]
        );
    }

    #[test]
    fn purpose_display() {
        let known = KeyPurpose(ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.3.1"));
        assert_eq!(known.to_string(), "serverAuth");

        let unknown = KeyPurpose(ObjectIdentifier::new_unwrap("1.2.3.4"));
        assert_eq!(unknown.name(), None);
        assert_eq!(unknown.to_string(), "1.2.3.4");
    }
}
