//! SEC1 elliptic curve point encoding.

use crate::{AffinePoint, Curve, Error, Result};
use num_bigint::BigUint;
use num_integer::Integer;

/// Tag of the encoded point at infinity.
const TAG_IDENTITY: u8 = 0x00;

/// Tag of a compressed point with even `y` (or even `y / x` on binary curves).
const TAG_COMPRESSED_EVEN: u8 = 0x02;

/// Tag of a compressed point with odd `y` (or odd `y / x` on binary curves).
const TAG_COMPRESSED_ODD: u8 = 0x03;

/// Tag of an uncompressed point.
const TAG_UNCOMPRESSED: u8 = 0x04;

impl Curve {
    /// Decode a SEC1 encoded point whose coordinates are `point_size` bytes.
    ///
    /// Compressed points have their `y`-coordinate recovered from the curve
    /// equation. Uncompressed points are returned as is; use
    /// [`Curve::is_on_curve`] to validate them.
    pub fn decode_point(&self, bytes: &[u8], point_size: usize) -> Result<AffinePoint> {
        let (&tag, body) = bytes.split_first().ok_or(Error::InvalidPointEncoding)?;

        match tag {
            TAG_IDENTITY if body.is_empty() => Ok(AffinePoint::Identity),
            TAG_COMPRESSED_EVEN | TAG_COMPRESSED_ODD => {
                log::debug!(
                    "parsing compressed point of {} bytes with size {point_size}",
                    body.len()
                );
                if body.len() != point_size {
                    return Err(Error::InvalidPointEncoding);
                }

                let x = BigUint::from_bytes_be(body);
                let y = self
                    .recover_y(&x, tag == TAG_COMPRESSED_ODD)
                    .ok_or(Error::InvalidPointEncoding)?;
                Ok(AffinePoint::new(x, y))
            }
            TAG_UNCOMPRESSED => {
                log::debug!(
                    "parsing uncompressed point of {} bytes with size {point_size}",
                    body.len()
                );
                if body.len() != 2 * point_size {
                    return Err(Error::InvalidPointEncoding);
                }

                let (x, y) = body.split_at(point_size);
                Ok(AffinePoint::new(
                    BigUint::from_bytes_be(x),
                    BigUint::from_bytes_be(y),
                ))
            }
            _ => Err(Error::InvalidPointEncoding),
        }
    }

    /// Encode `point` with `point_size` byte coordinates.
    ///
    /// The identity encodes as the single byte `0x00`.
    pub fn encode_point(
        &self,
        point: &AffinePoint,
        point_size: usize,
        compress: bool,
    ) -> Result<Vec<u8>> {
        let Some((x, y)) = point.coordinates() else {
            return Ok(vec![TAG_IDENTITY]);
        };

        let mut out = Vec::with_capacity(1 + 2 * point_size);

        if compress {
            let odd = match self {
                Curve::Prime(_) => y.is_odd(),
                Curve::Binary(curve) => curve.compression_bit(x, y),
            };
            out.push(if odd { TAG_COMPRESSED_ODD } else { TAG_COMPRESSED_EVEN });
            out.extend(ntheory::int_to_bytes(x, Some(point_size))?);
        } else {
            out.push(TAG_UNCOMPRESSED);
            out.extend(ntheory::int_to_bytes(x, Some(point_size))?);
            out.extend(ntheory::int_to_bytes(y, Some(point_size))?);
        }

        Ok(out)
    }

    fn recover_y(&self, x: &BigUint, odd: bool) -> Option<BigUint> {
        match self {
            Curve::Prime(curve) if x < curve.p() => curve.recover_y(x, odd),
            Curve::Prime(_) => None,
            Curve::Binary(curve) => curve.recover_y(x, odd),
        }
    }
}
