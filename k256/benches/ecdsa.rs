//! secp256k1 ECDSA benchmarks

use core::hint::black_box;
use criterion::{Criterion, criterion_group, criterion_main};
use hex_literal::hex;
use k256::ecdsa::{Signature, SigningKey};

fn test_signing_key() -> SigningKey {
    SigningKey::from_bytes(&hex!(
        "bb488aef416a41d7680d1cf01d70f59b60d7f5f77e30e78b8bf9d2d882f156a6"
    ))
    .unwrap()
}

const TEST_PREHASH: [u8; 32] =
    hex!("e33580eb6ed022aed6af20d92237635e7c20c5f1bcd6aee88182ed7180f6e267");

fn bench_ecdsa(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa");

    let d = test_signing_key();
    let z = TEST_PREHASH;

    group.bench_function("try_sign_prehashed", |b| {
        b.iter(|| {
            let _: Signature = black_box(&d).try_sign_prehashed(&black_box(z)).unwrap();
        })
    });

    let q = d.verifying_key().clone();
    let s: Signature = d.try_sign_prehashed(&z).unwrap();

    group.bench_function("verify_prehashed", |b| {
        b.iter(|| {
            black_box(&q)
                .verify_prehashed(&black_box(z), black_box(&s))
                .unwrap()
        })
    });

    group.bench_function("to_der/from_der", |b| {
        b.iter(|| Signature::from_der(black_box(&s).to_der().as_bytes()).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_ecdsa);
criterion_main!(benches);
