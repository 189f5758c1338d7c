//! Subject public keys of any supported algorithm.

use crate::{
    DsaPublicKey, EcPublicKey, Error, KeyInfo, Result, RsaPublicKey,
    asn1::{EcParameters, SubjectPublicKeyInfo, decode_any},
    oids,
};
use der::{Decode, Encode, Tag, Tagged};

/// Public key decoded from a certificate's `SubjectPublicKeyInfo`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PublicKeyMaterial {
    /// `rsaEncryption`
    Rsa(RsaPublicKey),

    /// `id-dsa`
    Dsa(DsaPublicKey),

    /// `id-ecPublicKey`
    Ec(EcPublicKey),
}

impl PublicKeyMaterial {
    /// Decode a DER encoded `SubjectPublicKeyInfo`.
    pub fn from_spki_der(bytes: &[u8]) -> Result<Self> {
        Self::from_spki(&SubjectPublicKeyInfo::from_der(bytes)?)
    }

    /// Decode the key carried by `spki`.
    pub fn from_spki(spki: &SubjectPublicKeyInfo) -> Result<Self> {
        let algorithm = spki.algorithm.algorithm;
        let parameters = spki
            .algorithm
            .parameters
            .as_ref()
            .filter(|params| params.tag() != Tag::Null);
        let key = spki.subject_public_key.raw_bytes();

        if algorithm == oids::RSA_ENCRYPTION {
            Ok(PublicKeyMaterial::Rsa(RsaPublicKey::from_der(key)?))
        } else if algorithm == oids::ID_DSA {
            let mut dsa = DsaPublicKey::from_der(key)?;
            if let Some(params) = parameters {
                dsa.set_parameters(&params.to_der()?)?;
            }
            Ok(PublicKeyMaterial::Dsa(dsa))
        } else if algorithm == oids::ID_EC_PUBLIC_KEY {
            let params = match spki.algorithm.parameters.as_ref() {
                Some(params) => decode_any::<EcParameters>(params)?,
                None => return Err(Error::UnknownCurve("implicitlyCA".to_owned())),
            };
            Ok(PublicKeyMaterial::Ec(EcPublicKey::from_parameters(&params, key)?))
        } else {
            Err(Error::UnsupportedAlgorithm(algorithm))
        }
    }

    /// Analysis record of this key.
    pub fn info(&self) -> KeyInfo {
        match self {
            PublicKeyMaterial::Rsa(key) => key.info(),
            PublicKeyMaterial::Dsa(key) => key.info(),
            PublicKeyMaterial::Ec(key) => key.info(),
        }
    }

    /// Key size in bits.
    pub fn bits(&self) -> usize {
        match self {
            PublicKeyMaterial::Rsa(key) => key.bits(),
            PublicKeyMaterial::Dsa(key) => key.bits(),
            PublicKeyMaterial::Ec(key) => key.bits(),
        }
    }
}

impl From<RsaPublicKey> for PublicKeyMaterial {
    fn from(key: RsaPublicKey) -> PublicKeyMaterial {
        PublicKeyMaterial::Rsa(key)
    }
}

impl From<DsaPublicKey> for PublicKeyMaterial {
    fn from(key: DsaPublicKey) -> PublicKeyMaterial {
        PublicKeyMaterial::Dsa(key)
    }
}

impl From<EcPublicKey> for PublicKeyMaterial {
    fn from(key: EcPublicKey) -> PublicKeyMaterial {
        PublicKeyMaterial::Ec(key)
    }
}

impl TryFrom<&[u8]> for PublicKeyMaterial {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_spki_der(bytes)
    }
}
