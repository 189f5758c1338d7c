use crate::{PrimeCurve, ProjectivePoint};

/// Internal constant for the number of entries in a [`LookupTable`].
const LUT_SIZE: usize = 9;

/// Lookup table containing precomputed values `d1 * p + d2 * q` for every
/// pair of signed digits `d1, d2` in `{-1, 0, 1}`.
#[derive(Clone, Debug)]
pub struct LookupTable {
    points: [ProjectivePoint; LUT_SIZE],
}

impl LookupTable {
    /// Compute a new lookup table from the given points.
    pub fn new(curve: &PrimeCurve, p: &ProjectivePoint, q: &ProjectivePoint) -> Self {
        let neg_p = curve.negate_projective(p);
        let neg_q = curve.negate_projective(q);
        let identity = ProjectivePoint::identity();

        let points = core::array::from_fn(|i| {
            let d1 = match i / 3 {
                0 => &neg_p,
                1 => &identity,
                _ => p,
            };
            let d2 = match i % 3 {
                0 => &neg_q,
                1 => &identity,
                _ => q,
            };
            curve.add_projective(d1, d2)
        });

        Self { points }
    }

    /// Given -1 <= d1, d2 <= 1, returns d1 * p + d2 * q.
    pub fn select(&self, d1: i8, d2: i8) -> &ProjectivePoint {
        debug_assert!((-1..=1).contains(&d1) && (-1..=1).contains(&d2));
        &self.points[index(d1) * 3 + index(d2)]
    }
}

fn index(digit: i8) -> usize {
    (digit.clamp(-1, 1) + 1) as usize
}

#[cfg(test)]
mod tests {
    use super::LookupTable;
    use crate::{AffinePoint, PrimeCurve};
    use num_bigint::BigUint;

    #[test]
    fn entries() {
        let curve = PrimeCurve::new(17u32.into(), 2u32.into(), 2u32.into());
        let g = AffinePoint::new(BigUint::from(5u32), BigUint::from(1u32));
        let h = AffinePoint::new(BigUint::from(6u32), BigUint::from(3u32));
        let table = LookupTable::new(&curve, &g.to_projective(), &h.to_projective());

        assert!(table.select(0, 0).is_identity());
        assert_eq!(curve.to_affine(table.select(1, 0)).unwrap(), g);
        assert_eq!(curve.to_affine(table.select(0, 1)).unwrap(), h);
        assert_eq!(curve.to_affine(table.select(-1, 0)).unwrap(), curve.negate(&g));
        // h = 2g
        assert_eq!(
            curve.to_affine(table.select(1, 1)).unwrap(),
            AffinePoint::new(BigUint::from(10u32), BigUint::from(6u32))
        );
        assert_eq!(curve.to_affine(table.select(-1, 1)).unwrap(), g);
        assert_eq!(curve.to_affine(table.select(1, -1)).unwrap(), curve.negate(&g));
    }
}
