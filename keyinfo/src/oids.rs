//! Object identifiers recognized by the decoder.

use der::asn1::ObjectIdentifier;

/// `rsaEncryption` (RFC 8017)
pub const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// `id-dsa` (RFC 3279)
pub const ID_DSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10040.4.1");

/// `id-ecPublicKey` (RFC 5480)
pub const ID_EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

/// `prime-field` (ANSI X9.62)
pub const PRIME_FIELD: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.1.1");

/// `characteristic-two-field` (ANSI X9.62)
pub const CHARACTERISTIC_TWO_FIELD: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.10045.1.2");

/// `gnBasis`
pub const GN_BASIS: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.1.2.3.1");

/// `tpBasis`
pub const TP_BASIS: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.1.2.3.2");

/// `ppBasis`
pub const PP_BASIS: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.1.2.3.3");

/// `ecdsa-with-SHA1` (RFC 5480)
pub const ECDSA_WITH_SHA1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.4.1");

/// `ecdsa-with-SHA224` (RFC 5758)
pub const ECDSA_WITH_SHA224: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.1");

/// `ecdsa-with-SHA256` (RFC 5758)
pub const ECDSA_WITH_SHA256: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.2");

/// `ecdsa-with-SHA384` (RFC 5758)
pub const ECDSA_WITH_SHA384: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.3");

/// `ecdsa-with-SHA512` (RFC 5758)
pub const ECDSA_WITH_SHA512: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.4");

/// `id-ce-subjectKeyIdentifier`
pub const SUBJECT_KEY_IDENTIFIER: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.14");

/// `id-ce-keyUsage`
pub const KEY_USAGE: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.15");

/// `id-ce-basicConstraints`
pub const BASIC_CONSTRAINTS: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.19");

/// `id-ce-authorityKeyIdentifier`
pub const AUTHORITY_KEY_IDENTIFIER: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("2.5.29.35");

/// `id-ce-extKeyUsage`
pub const EXT_KEY_USAGE: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.37");

const SIGNATURE_ALGORITHMS: &[(ObjectIdentifier, &str)] = &[
    (ECDSA_WITH_SHA1, "ecdsa-with-SHA1"),
    (ECDSA_WITH_SHA224, "ecdsa-with-SHA224"),
    (ECDSA_WITH_SHA256, "ecdsa-with-SHA256"),
    (ECDSA_WITH_SHA384, "ecdsa-with-SHA384"),
    (ECDSA_WITH_SHA512, "ecdsa-with-SHA512"),
];

const KEY_PURPOSES: &[(ObjectIdentifier, &str)] = &[
    (ObjectIdentifier::new_unwrap("2.5.29.37.0"), "anyExtendedKeyUsage"),
    (ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.3.1"), "serverAuth"),
    (ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.3.2"), "clientAuth"),
    (ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.3.3"), "codeSigning"),
    (ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.3.4"), "emailProtection"),
    (ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.3.8"), "timeStamping"),
    (ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.3.9"), "OCSPSigning"),
    (ObjectIdentifier::new_unwrap("1.3.6.1.4.1.311.10.3.3"), "msSGC"),
    (ObjectIdentifier::new_unwrap("2.16.840.1.113730.4.1"), "nsSGC"),
];

fn find(
    table: &[(ObjectIdentifier, &'static str)],
    oid: &ObjectIdentifier,
) -> Option<&'static str> {
    table
        .iter()
        .find(|(known, _)| known == oid)
        .map(|&(_, name)| name)
}

/// Name of an ECDSA signature algorithm.
pub fn signature_algorithm_name(oid: &ObjectIdentifier) -> Option<&'static str> {
    find(SIGNATURE_ALGORITHMS, oid)
}

/// Name of an extended key usage purpose.
pub fn key_purpose_name(oid: &ObjectIdentifier) -> Option<&'static str> {
    find(KEY_PURPOSES, oid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_names() {
        assert_eq!(signature_algorithm_name(&ECDSA_WITH_SHA256), Some("ecdsa-with-SHA256"));
        assert_eq!(signature_algorithm_name(&ECDSA_WITH_SHA1), Some("ecdsa-with-SHA1"));
        assert_eq!(signature_algorithm_name(&RSA_ENCRYPTION), None);
    }

    #[test]
    fn purpose_names() {
        let server_auth = ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.3.1");
        assert_eq!(key_purpose_name(&server_auth), Some("serverAuth"));
        assert_eq!(key_purpose_name(&KEY_USAGE), None);
    }
}
