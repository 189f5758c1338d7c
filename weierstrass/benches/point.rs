//! secp256r1 point arithmetic benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use hex_literal::hex;
use weierstrass::{AffinePoint, BigUint, Curve, PrimeCurve};

fn curve() -> PrimeCurve {
    PrimeCurve::new(
        BigUint::from_bytes_be(&hex!(
            "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"
        )),
        BigUint::from_bytes_be(&hex!(
            "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"
        )),
        BigUint::from_bytes_be(&hex!(
            "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"
        )),
    )
}

fn generator() -> AffinePoint {
    AffinePoint::new(
        BigUint::from_bytes_be(&hex!(
            "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
        )),
        BigUint::from_bytes_be(&hex!(
            "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"
        )),
    )
}

fn test_scalar_x() -> BigUint {
    BigUint::from_bytes_be(&hex!(
        "519b423d715f8b581f4fa8ee59f4771a5b44c8130b4e3eacca54a56dda72b464"
    ))
}

fn test_scalar_y() -> BigUint {
    BigUint::from_bytes_be(&hex!(
        "0f56db78ca460b055c500064824bed999a25aaf48ebb519ac201537b85479813"
    ))
}

fn bench_point_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let curve = curve();
    let p = generator();
    let k = test_scalar_x();
    group.bench_function("point-scalar mul", |b| b.iter(|| curve.mul(&p, &k)));
}

fn bench_lincomb<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let curve = curve();
    let p = generator();
    let q = curve.double(&p).expect("doubling succeeds");
    let (k1, k2) = (test_scalar_x(), test_scalar_y());
    group.bench_function("lincomb", |b| b.iter(|| curve.lincomb(&p, &k1, &q, &k2)));
}

fn bench_decompress<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let curve = Curve::from(curve());
    let encoded = curve
        .encode_point(&generator(), 32, true)
        .expect("generator encodes");
    group.bench_function("decompress", |b| b.iter(|| curve.decode_point(&encoded, 32)));
}

fn bench_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("point operations");
    bench_point_mul(&mut group);
    bench_lincomb(&mut group);
    bench_decompress(&mut group);
    group.finish();
}

criterion_group!(benches, bench_point);
criterion_main!(benches);
