#![no_main]
use k256::{FieldElement, Scalar};
use libfuzzer_sys::fuzz_target;

fn test_scalar(s1: Scalar, s2: Scalar, s3: Scalar) {
    // Associativity
    assert_eq!(&s1 + &(&s2 + &s3), &(&s1 + &s2) + &s3);
    assert_eq!(&s1 * &(&s2 * &s3), &(&s1 * &s2) * &s3);

    // Commutativity
    assert_eq!(&s1 + &s2, &s2 + &s1);
    assert_eq!(&s1 * &s2, &s2 * &s1);

    // Identity
    assert_eq!(&s1 + &Scalar::zero(), s1);
    assert_eq!(&s1 * &Scalar::one(), s1);
    assert_eq!(&s1 - &s1, Scalar::zero());

    // Distributivity
    assert_eq!(&s1 * &(&s2 + &s3), &(&s1 * &s2) + &(&s1 * &s3));

    // Inverse
    assert_eq!(&s1 + &(-&s1), Scalar::zero());
    match s1.invert() {
        Some(inv) => assert_eq!(&s1 * &inv, Scalar::one()),
        None => assert!(s1.is_zero()),
    }

    // High/low halves
    if !s1.is_zero() {
        assert_ne!(s1.is_high(), (-&s1).is_high());
    }
}

fn test_field(fe: FieldElement) {
    let square = fe.square();
    let root = square.sqrt().expect("squares have square roots");
    assert_eq!(root.square(), square);

    if let Some(inv) = fe.invert() {
        assert_eq!(&fe * &inv, FieldElement::one());
    }

    assert_eq!(FieldElement::from_bytes(&fe.to_bytes()), Some(fe));
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 96 {
        return;
    }

    let s1 = Scalar::from_bytes_reduced(&data[0..32]);
    let s2 = Scalar::from_bytes(data[32..64].try_into().unwrap()).unwrap_or_else(Scalar::one);
    let s3 = Scalar::from_bytes_reduced(&data[64..]);

    test_scalar(s1, s2, s3);

    if let Some(fe) = FieldElement::from_bytes(data[0..32].try_into().unwrap()) {
        test_field(fe);
    }
});
