//! Affine curve points.

use crate::ProjectivePoint;
use num_bigint::BigUint;

#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Point on a Weierstrass curve in affine coordinates.
///
/// With the `serde` feature a finite point serializes as `{x, y}` with both
/// coordinates as decimal strings, and the identity as `null`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum AffinePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    Identity,

    /// Finite point `(x, y)`.
    Point {
        /// x-coordinate
        x: BigUint,

        /// y-coordinate
        y: BigUint,
    },
}

impl AffinePoint {
    /// Finite point with the given coordinates.
    ///
    /// The point is not checked against any curve; see
    /// [`Curve::is_on_curve`](crate::Curve::is_on_curve).
    pub fn new(x: BigUint, y: BigUint) -> Self {
        AffinePoint::Point { x, y }
    }

    /// Is this point the identity?
    pub fn is_identity(&self) -> bool {
        matches!(self, AffinePoint::Identity)
    }

    /// Affine coordinates, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            AffinePoint::Identity => None,
            AffinePoint::Point { x, y } => Some((x, y)),
        }
    }

    /// x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates().map(|(x, _)| x)
    }

    /// y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&BigUint> {
        self.coordinates().map(|(_, y)| y)
    }

    /// Jacobian representation of this point with `z = 1`.
    pub fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint::from(self)
    }
}

impl From<(BigUint, BigUint)> for AffinePoint {
    fn from((x, y): (BigUint, BigUint)) -> AffinePoint {
        AffinePoint::new(x, y)
    }
}

#[cfg(feature = "serde")]
impl Serialize for AffinePoint {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AffinePoint::Identity => serializer.serialize_none(),
            AffinePoint::Point { x, y } => {
                let mut state = serializer.serialize_struct("AffinePoint", 2)?;
                state.serialize_field("x", x.to_str_radix(10).as_str())?;
                state.serialize_field("y", y.to_str_radix(10).as_str())?;
                state.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AffinePoint;
    use num_bigint::BigUint;

    #[test]
    fn accessors() {
        let point = AffinePoint::new(BigUint::from(3u32), BigUint::from(5u32));
        assert!(!point.is_identity());
        assert_eq!(point.x(), Some(&BigUint::from(3u32)));
        assert_eq!(point.y(), Some(&BigUint::from(5u32)));

        assert!(AffinePoint::Identity.is_identity());
        assert_eq!(AffinePoint::Identity.coordinates(), None);
    }

    #[test]
    fn identity_to_projective() {
        assert!(AffinePoint::Identity.to_projective().is_identity());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize_coordinates() {
        let point = AffinePoint::new(BigUint::from(3u32), BigUint::from(5u32));
        assert_eq!(
            serde_json::to_string(&point).unwrap(),
            r#"{"x":"3","y":"5"}"#
        );
        assert_eq!(
            serde_json::to_string(&AffinePoint::Identity).unwrap(),
            "null"
        );
    }
}
