//! Arithmetic tests against secp256r1 known answers.

use hex_literal::hex;
use proptest::{prelude::any, prop_assert, prop_assert_eq, prop_compose, proptest};
use weierstrass::{AffinePoint, BigUint, Curve, Error, PrimeCurve};

const P: [u8; 32] = hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");
const A: [u8; 32] = hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc");
const B: [u8; 32] = hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");
const N: [u8; 32] = hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");

const G: [u8; 65] = hex!(
    "04"
    "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
    "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"
);

/// `[k] G` for small and random `k`.
const MUL_TEST_VECTORS: &[([u8; 32], [u8; 32], [u8; 32])] = &[
    (
        hex!("0000000000000000000000000000000000000000000000000000000000000002"),
        hex!("7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978"),
        hex!("07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1"),
    ),
    (
        hex!("0000000000000000000000000000000000000000000000000000000000000003"),
        hex!("5ecbe4d1a6330a44c8f7ef951d4bf165e6c6b721efada985fb41661bc6e7fd6c"),
        hex!("8734640c4998ff7e374b06ce1a64a2ecd82ab036384fb83d9a79b127a27d5032"),
    ),
    (
        hex!("519b423d715f8b581f4fa8ee59f4771a5b44c8130b4e3eacca54a56dda72b464"),
        hex!("1ccbe91c075fc7f4f033bfa248db8fccd3565de94bbfb12f3c59ff46c271bf83"),
        hex!("ce4014c68811f9a21a1fdb2c0e6113e06db7ca93b7404e78dc7ccd5ca89a4ca9"),
    ),
    (
        hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632550"),
        hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        hex!("b01cbd1c01e58065711814b583f061e9d431cca994cea1313449bf97c840ae0a"),
    ),
];

fn uint(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

fn curve() -> PrimeCurve {
    PrimeCurve::new(uint(&P), uint(&A), uint(&B))
}

fn generator() -> AffinePoint {
    Curve::from(curve()).decode_point(&G, 32).unwrap()
}

#[test]
fn generator_is_on_curve() {
    let curve = curve();
    let g = generator();
    assert!(curve.is_on_curve(&g));
    assert_eq!(
        PrimeCurve::derive_b(curve.p(), curve.a(), g.x().unwrap(), g.y().unwrap()),
        uint(&B)
    );
}

#[test]
fn uncompressed_round_trip() {
    let curve = Curve::from(curve());
    let g = generator();
    assert_eq!(curve.encode_point(&g, 32, false).unwrap(), G);

    let compressed = curve.encode_point(&g, 32, true).unwrap();
    assert_eq!(compressed[0], 0x03);
    assert_eq!(curve.decode_point(&compressed, 32).unwrap(), g);
}

#[test]
fn short_buffer() {
    let curve = Curve::from(curve());
    assert_eq!(curve.decode_point(&G[..64], 32), Err(Error::InvalidPointEncoding));
    assert_eq!(curve.decode_point(&G[..33], 32), Err(Error::InvalidPointEncoding));

    let mut unsupported = G;
    unsupported[0] = 0x05;
    assert_eq!(curve.decode_point(&unsupported, 32), Err(Error::InvalidPointEncoding));
}

#[test]
fn multiplication_vectors() {
    let curve = curve();
    let g = generator();

    for (k, x, y) in MUL_TEST_VECTORS {
        let expected = AffinePoint::new(uint(x), uint(y));
        assert_eq!(curve.mul(&g, &uint(k)).unwrap(), expected);
    }
}

#[test]
fn multiplication_by_order() {
    let curve = curve();
    assert_eq!(curve.mul(&generator(), &uint(&N)).unwrap(), AffinePoint::Identity);
}

#[test]
fn add_vectors() {
    let curve = curve();
    let g = generator();
    let two_g = curve.add(&g, &g).unwrap();
    let three_g = curve.add(&two_g, &g).unwrap();

    assert_eq!(two_g, AffinePoint::new(uint(&MUL_TEST_VECTORS[0].1), uint(&MUL_TEST_VECTORS[0].2)));
    assert_eq!(
        three_g,
        AffinePoint::new(uint(&MUL_TEST_VECTORS[1].1), uint(&MUL_TEST_VECTORS[1].2))
    );
}

prop_compose! {
    fn scalar()(bytes in any::<[u8; 32]>()) -> BigUint {
        uint(&bytes) % uint(&N)
    }
}

prop_compose! {
    fn point()(k in scalar()) -> AffinePoint {
        curve().mul(&generator(), &k).unwrap()
    }
}

proptest! {
    #![proptest_config(proptest::prelude::ProptestConfig::with_cases(16))]

    #[test]
    fn multiples_are_on_curve(p in point()) {
        prop_assert!(curve().is_on_curve(&p));
    }

    #[test]
    fn add_negation_is_identity(p in point()) {
        let curve = curve();
        prop_assert_eq!(curve.add(&p, &curve.negate(&p)).unwrap(), AffinePoint::Identity);
    }

    #[test]
    fn mul_by_zero_and_one(p in point()) {
        let curve = curve();
        prop_assert_eq!(curve.mul(&p, &BigUint::from(0u32)).unwrap(), AffinePoint::Identity);
        prop_assert_eq!(curve.mul(&p, &BigUint::from(1u32)).unwrap(), p);
    }

    #[test]
    fn lincomb_matches_mul(p in point(), q in point(), k1 in any::<u64>(), k2 in any::<u64>()) {
        let curve = curve();
        let (k1, k2) = (BigUint::from(k1), BigUint::from(k2));
        let expected = curve
            .add(&curve.mul(&p, &k1).unwrap(), &curve.mul(&q, &k2).unwrap())
            .unwrap();
        prop_assert_eq!(curve.lincomb(&p, &k1, &q, &k2).unwrap(), expected);
    }

    #[test]
    fn compressed_round_trip(p in point()) {
        let curve = Curve::from(curve());
        let encoded = curve.encode_point(&p, 32, true).unwrap();
        prop_assert_eq!(curve.decode_point(&encoded, 32).unwrap(), p);
    }
}
