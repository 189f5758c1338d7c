//! Big-endian conversions between byte strings and integers.

use crate::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;

/// Interpret `bytes` as a big-endian unsigned integer.
///
/// An empty slice decodes as zero.
pub fn bytes_to_int(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Encode `n` as big-endian bytes.
///
/// With `min_len = None` the output is the minimal encoding (empty for zero).
/// Otherwise the output is left-padded with zeros to `min_len` bytes; a
/// `min_len` shorter than the minimal encoding is rejected since it would
/// drop significant bits.
pub fn int_to_bytes(n: &BigUint, min_len: Option<usize>) -> Result<Vec<u8>> {
    let required = byte_length(n);
    let limit = min_len.unwrap_or(required);

    if limit < required {
        return Err(Error::Encoding { required, limit });
    }

    let mut out = vec![0u8; limit];
    if !n.is_zero() {
        out[limit - required..].copy_from_slice(&n.to_bytes_be());
    }
    Ok(out)
}

/// Number of significant bits in `n`; `0` for `n = 0`.
pub fn bit_length(n: &BigUint) -> usize {
    n.bits() as usize
}

/// Number of bytes needed to hold `n`, i.e. `ceil(bit_length(n) / 8)`.
pub fn byte_length(n: &BigUint) -> usize {
    bit_length(n).div_ceil(8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn decode_big_endian() {
        assert_eq!(bytes_to_int(&hex!("422a")), BigUint::from(16938u32));
        assert_eq!(bytes_to_int(&[]), BigUint::zero());
        assert_eq!(bytes_to_int(&hex!("0000ff")), BigUint::from(255u32));
    }

    #[test]
    fn encode_minimal() {
        let n = BigUint::from(16938u32);
        assert_eq!(int_to_bytes(&n, None).unwrap(), hex!("422a"));
        assert!(int_to_bytes(&BigUint::zero(), None).unwrap().is_empty());
    }

    #[test]
    fn encode_padded() {
        let n = BigUint::from(16938u32);
        assert_eq!(int_to_bytes(&n, Some(4)).unwrap(), hex!("0000422a"));
        assert_eq!(int_to_bytes(&BigUint::zero(), Some(2)).unwrap(), hex!("0000"));
    }

    #[test]
    fn encode_truncation_rejected() {
        let n = BigUint::from(16938u32);
        assert_eq!(
            int_to_bytes(&n, Some(1)),
            Err(Error::Encoding {
                required: 2,
                limit: 1
            })
        );
    }

    #[test]
    fn lengths() {
        assert_eq!(bit_length(&BigUint::zero()), 0);
        assert_eq!(byte_length(&BigUint::zero()), 0);
        assert_eq!(bit_length(&BigUint::from(1u32)), 1);
        assert_eq!(bit_length(&BigUint::from(255u32)), 8);
        assert_eq!(byte_length(&BigUint::from(255u32)), 1);
        assert_eq!(bit_length(&BigUint::from(256u32)), 9);
        assert_eq!(byte_length(&BigUint::from(256u32)), 2);

        let p521 = (BigUint::from(1u32) << 521usize) - 1u32;
        assert_eq!(bit_length(&p521), 521);
        assert_eq!(byte_length(&p521), 66);
    }
}
