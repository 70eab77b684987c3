//! Affine arithmetic tests.

use hex_literal::hex;
use k256::{AffinePoint, Scalar, Secp256k1, num_bigint::BigUint};
use proptest::prelude::*;

/// `k·G` in compressed SEC1 form.
const MUL_BY_GENERATOR: &[(u64, [u8; 33])] = &[
    (
        1,
        hex!("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
    ),
    (
        2,
        hex!("02c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"),
    ),
    (
        5000,
        hex!("02ffe558e388852f0120e46af2d1b370f85854a8eb0841811ece0e3e03d282d57c"),
    ),
    (
        0xdeadbeef12345,
        hex!("03d90cd625ee87dd38656dd95cf79f65f60f7273b67d3096e68bd81e4f5342691f"),
    ),
];

#[test]
fn mul_by_generator_vectors() {
    for (k, expected) in MUL_BY_GENERATOR {
        let point = AffinePoint::mul_by_generator(&Scalar::from(*k)).unwrap();
        assert_eq!(point.to_sec1_bytes(true), expected);
    }
}

#[test]
fn uncompressed_vector() {
    let point = AffinePoint::mul_by_generator(&Scalar::from(5000u64)).unwrap();
    assert_eq!(
        point.to_sec1_bytes(false),
        hex!(
            "04ffe558e388852f0120e46af2d1b370f85854a8eb0841811ece0e3e03d282d57c
             315dc72890a4f10a1481c031b03b351b0dc79901ca18a00cf009dbdb157a1d10"
        )
    );
}

#[test]
fn order_times_generator_is_identity() {
    // Bypass the modular reduction of `AffinePoint::mul`.
    let g = AffinePoint::generator();
    assert!(g.as_ref().mul(Secp256k1::order()).unwrap().is_identity());
}

#[test]
fn order_minus_one_times_generator_is_negation() {
    let g = AffinePoint::generator();
    let n_minus_one = Secp256k1::order() - 1u32;
    assert_eq!(g.mul(&n_minus_one).unwrap(), g.neg());
}

#[test]
fn mul_reduces_modulo_order() {
    let g = AffinePoint::generator();
    let k = Secp256k1::order() + 2u32;
    assert_eq!(g.mul(&k).unwrap(), g.double().unwrap());
}

#[test]
fn identity_laws() {
    let g = AffinePoint::generator();
    let identity = AffinePoint::identity();
    assert_eq!(g.add(&identity).unwrap(), g);
    assert_eq!(identity.add(&g).unwrap(), g);
    assert!(g.add(&g.neg()).unwrap().is_identity());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn sec1_round_trip(k in 1u64.., compress in any::<bool>()) {
        let point = AffinePoint::mul_by_generator(&Scalar::from(k)).unwrap();
        let bytes = point.to_sec1_bytes(compress);
        prop_assert_eq!(bytes.len(), if compress { 33 } else { 65 });
        prop_assert_eq!(AffinePoint::from_sec1_bytes(&bytes).unwrap(), point);
    }

    #[test]
    fn mul_distributes(a in any::<u64>(), b in any::<u64>()) {
        let g = AffinePoint::generator();
        let lhs = g.mul(&(BigUint::from(a) + b)).unwrap();
        let rhs = g.mul(&a.into()).unwrap().add(&g.mul(&b.into()).unwrap()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }
}
