#![no_main]
use k256::{AffinePoint, Scalar};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(point) = AffinePoint::from_sec1_bytes(data) else {
        return;
    };

    // Whatever decodes re-encodes and decodes to the same point.
    for compress in [true, false] {
        let encoded = point.to_sec1_bytes(compress);
        assert_eq!(AffinePoint::from_sec1_bytes(&encoded).unwrap(), point);
    }

    // Group laws on the decoded point.
    assert!(point.add(&point.neg()).unwrap().is_identity());
    assert_eq!(point.double().unwrap(), point.add(&point).unwrap());

    let k = Scalar::from_bytes_reduced(data);
    let sum = point.mul_scalar(&k).unwrap().add(&point).unwrap();
    assert_eq!(sum, point.mul_scalar(&(&k + &Scalar::one())).unwrap());
});
