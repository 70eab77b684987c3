//! Field arithmetic benchmarks over the secp256k1 base field prime

use core::hint::black_box;
use criterion::{Criterion, criterion_group, criterion_main, measurement::Measurement};
use num_bigint::{BigInt, BigUint};
use primefield::FieldElement;

fn prime() -> BigUint {
    (BigUint::from(1u32) << 256) - (BigUint::from(1u32) << 32) - BigUint::from(977u32)
}

fn test_field_element_x() -> FieldElement {
    FieldElement::from_bytes_be(
        &[
            0xbb, 0x48, 0x8a, 0xef, 0x41, 0x6a, 0x41, 0xd7, 0x68, 0x0d, 0x1c, 0xf0, 0x1d, 0x70,
            0xf5, 0x9b, 0x60, 0xd7, 0xf5, 0xf7, 0x7e, 0x30, 0xe7, 0x8b, 0x8b, 0xf9, 0xd2, 0xd8,
            0x82, 0xf1, 0x56, 0xa6,
        ],
        prime(),
    )
    .unwrap()
}

fn test_field_element_y() -> FieldElement {
    FieldElement::from_bytes_be(
        &[
            0x67, 0xe2, 0xf6, 0x80, 0x71, 0xed, 0x82, 0x81, 0xe8, 0xae, 0xd6, 0xbc, 0xf1, 0xc5,
            0x20, 0x7c, 0x5e, 0x63, 0x37, 0x22, 0xd9, 0x20, 0xaf, 0xd6, 0xae, 0x22, 0xd0, 0x6e,
            0xeb, 0x80, 0x35, 0xe3,
        ],
        prime(),
    )
    .unwrap()
}

fn bench_mul<M: Measurement>(group: &mut criterion::BenchmarkGroup<'_, M>) {
    let x = test_field_element_x();
    let y = test_field_element_y();
    group.bench_function("mul", |b| b.iter(|| black_box(&x).mul(black_box(&y))));
}

fn bench_div<M: Measurement>(group: &mut criterion::BenchmarkGroup<'_, M>) {
    let x = test_field_element_x();
    let y = test_field_element_y();
    group.bench_function("div", |b| b.iter(|| black_box(&x).div(black_box(&y))));
}

fn bench_pow<M: Measurement>(group: &mut criterion::BenchmarkGroup<'_, M>) {
    let x = test_field_element_x();
    let e = BigInt::from(-3);
    group.bench_function("pow", |b| b.iter(|| black_box(&x).pow(black_box(&e))));
}

fn bench_field_element(c: &mut Criterion) {
    let mut group = c.benchmark_group("field element operations");
    bench_mul(&mut group);
    bench_div(&mut group);
    bench_pow(&mut group);
    group.finish();
}

criterion_group!(benches, bench_field_element);
criterion_main!(benches);
