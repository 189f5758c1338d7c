#![no_main]
// Decodes SEC1 points on every registered curve and checks the group law on
// the ones that land on a prime curve.
use libfuzzer_sys::fuzz_target;
use named_curves::DomainParameters;
use weierstrass::{AffinePoint, BigUint, PrimeCurve};

fn test_group(curve: &PrimeCurve, p: &AffinePoint, k: &BigUint) {
    let neg = curve.negate(p);
    assert_eq!(curve.add(p, &neg).unwrap(), AffinePoint::Identity);

    let double = curve.double(p).unwrap();
    assert_eq!(double, curve.add(p, p).unwrap());

    // k * P + P == (k + 1) * P
    let kp = curve.mul(p, k).unwrap();
    let k1p = curve.mul(p, &(k + 1u32)).unwrap();
    assert_eq!(curve.add(&kp, p).unwrap(), k1p);
    assert_eq!(curve.lincomb(p, k, p, &BigUint::from(1u32)).unwrap(), k1p);
}

fn test_encoding(params: &DomainParameters, p: &AffinePoint) {
    let uncompressed = params.encode_point(p, false).unwrap();
    assert_eq!(&params.decode_point(&uncompressed).unwrap(), p);

    if params.curve().as_prime().is_some() {
        let compressed = params.encode_point(p, true).unwrap();
        assert_eq!(&params.decode_point(&compressed).unwrap(), p);
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }

    let curves: Vec<_> = named_curves::iter().collect();
    let params = curves[usize::from(data[0]) % curves.len()];
    let k = BigUint::from_bytes_be(&data[1..9]);

    let Ok(point) = params.decode_point(&data[9..]) else {
        return;
    };
    if !params.curve().is_on_curve(&point) {
        return;
    }

    test_encoding(params, &point);

    if let Some(curve) = params.curve().as_prime() {
        test_group(curve, &point, &k);
    }
});
