//! Jacobian curve points.

use crate::{AffinePoint, PrimeCurve, Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Point on a prime field curve in Jacobian coordinates.
///
/// Represents the affine point `(x / z^2, y / z^3)`. The powers `z^2` and
/// `z^3` are cached since every addition needs them.
#[derive(Clone, Debug)]
pub struct ProjectivePoint {
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
    pub(crate) z: BigUint,
    pub(crate) zz: BigUint,
    pub(crate) zzz: BigUint,
}

impl ProjectivePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity() -> Self {
        Self {
            x: BigUint::one(),
            y: BigUint::one(),
            z: BigUint::zero(),
            zz: BigUint::zero(),
            zzz: BigUint::zero(),
        }
    }

    /// Is this point the identity?
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    fn from_jacobian(x: BigUint, y: BigUint, z: BigUint, curve: &PrimeCurve) -> Self {
        let f = curve.field();
        let zz = f.square(&z);
        let zzz = f.mul(&zz, &z);
        Self { x, y, z, zz, zzz }
    }
}

impl From<&AffinePoint> for ProjectivePoint {
    fn from(point: &AffinePoint) -> ProjectivePoint {
        match point {
            AffinePoint::Identity => ProjectivePoint::identity(),
            AffinePoint::Point { x, y } => ProjectivePoint {
                x: x.clone(),
                y: y.clone(),
                z: BigUint::one(),
                zz: BigUint::one(),
                zzz: BigUint::one(),
            },
        }
    }
}

impl PrimeCurve {
    /// Convert a Jacobian point back to affine coordinates.
    ///
    /// Fails with [`Error::Arithmetic`](crate::Error::Arithmetic) if `z` is
    /// not invertible, which cannot happen for a prime modulus.
    pub fn to_affine(&self, point: &ProjectivePoint) -> Result<AffinePoint> {
        if point.is_identity() {
            return Ok(AffinePoint::Identity);
        }

        let f = self.field();
        let z_inv = f.invert(&point.z)?;
        let zz_inv = f.square(&z_inv);
        let zzz_inv = f.mul(&zz_inv, &z_inv);

        Ok(AffinePoint::new(
            f.mul(&point.x, &zz_inv),
            f.mul(&point.y, &zzz_inv),
        ))
    }

    /// `-point` in Jacobian coordinates.
    pub fn negate_projective(&self, point: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint {
            y: self.field().neg(&point.y),
            ..point.clone()
        }
    }

    /// `2 * point` in Jacobian coordinates.
    pub fn double_projective(&self, point: &ProjectivePoint) -> ProjectivePoint {
        if point.is_identity() || point.y.is_zero() {
            return ProjectivePoint::identity();
        }

        let f = self.field();
        let yy = f.square(&point.y);

        // s = 4xy^2, m = 3x^2 + az^4
        let s = f.scale(4, &f.mul(&point.x, &yy));
        let m = f.add(
            &f.scale(3, &f.square(&point.x)),
            &f.mul(self.a(), &f.square(&point.zz)),
        );

        let x3 = f.sub(&f.square(&m), &f.scale(2, &s));
        let y3 = f.sub(&f.mul(&m, &f.sub(&s, &x3)), &f.scale(8, &f.square(&yy)));
        let z3 = f.scale(2, &f.mul(&point.y, &point.z));

        ProjectivePoint::from_jacobian(x3, y3, z3, self)
    }

    /// `a + b` in Jacobian coordinates.
    pub fn add_projective(&self, a: &ProjectivePoint, b: &ProjectivePoint) -> ProjectivePoint {
        if a.is_identity() {
            return b.clone();
        }
        if b.is_identity() {
            return a.clone();
        }

        let f = self.field();
        let u1 = f.mul(&a.x, &b.zz);
        let u2 = f.mul(&b.x, &a.zz);
        let s1 = f.mul(&a.y, &b.zzz);
        let s2 = f.mul(&b.y, &a.zzz);

        if u1 == u2 {
            return if s1 == s2 {
                self.double_projective(a)
            } else {
                ProjectivePoint::identity()
            };
        }

        let h = f.sub(&u2, &u1);
        let r = f.sub(&s2, &s1);
        let hh = f.square(&h);
        let hhh = f.mul(&hh, &h);
        let v = f.mul(&u1, &hh);

        let x3 = f.sub(&f.sub(&f.square(&r), &hhh), &f.scale(2, &v));
        let y3 = f.sub(&f.mul(&r, &f.sub(&v, &x3)), &f.mul(&s1, &hhh));
        let z3 = f.mul(&f.mul(&a.z, &b.z), &h);

        ProjectivePoint::from_jacobian(x3, y3, z3, self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{AffinePoint, PrimeCurve, ProjectivePoint};
    use num_bigint::BigUint;

    fn uint(n: u32) -> BigUint {
        BigUint::from(n)
    }

    fn toy() -> PrimeCurve {
        PrimeCurve::new(uint(17), uint(2), uint(2))
    }

    #[test]
    fn affine_round_trip() {
        let curve = toy();
        let g = AffinePoint::new(uint(5), uint(1));
        assert_eq!(curve.to_affine(&g.to_projective()).unwrap(), g);
        assert_eq!(
            curve.to_affine(&ProjectivePoint::identity()).unwrap(),
            AffinePoint::Identity
        );
    }

    #[test]
    fn matches_affine_law() {
        let curve = toy();
        let g = AffinePoint::new(uint(5), uint(1));

        let mut affine = g.clone();
        let mut projective = g.to_projective();

        for _ in 0..25 {
            let doubled = curve.double_projective(&projective);
            assert_eq!(curve.to_affine(&doubled).unwrap(), curve.double(&affine).unwrap());

            affine = curve.add(&affine, &g).unwrap();
            projective = curve.add_projective(&projective, &g.to_projective());
            assert_eq!(curve.to_affine(&projective).unwrap(), affine);
        }
    }

    #[test]
    fn inverse_sums_to_identity() {
        let curve = toy();
        let p = curve.double_projective(&AffinePoint::new(uint(5), uint(1)).to_projective());
        let sum = curve.add_projective(&p, &curve.negate_projective(&p));
        assert!(sum.is_identity());
    }
}
