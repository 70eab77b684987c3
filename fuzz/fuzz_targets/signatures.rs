#![no_main]
use k256::{
    AffinePoint,
    ecdsa::{Signature, der},
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(sig) = der::Signature::from_bytes(data) {
        assert_eq!(sig.as_bytes(), data);

        if let Ok(parsed) = Signature::try_from(sig) {
            // Verification of arbitrary signatures must not fail hard.
            let _ = AffinePoint::generator().verify_prehashed(&data[..data.len().min(32)], &parsed);

            let reencoded = parsed.to_der();
            assert_eq!(Signature::from_der(reencoded.as_bytes()).unwrap(), parsed);
        }
    }

    if let Ok(bytes) = <&[u8; Signature::BYTE_SIZE]>::try_from(data) {
        let sig = Signature::from_bytes(bytes);
        assert_eq!(Signature::from_der(sig.to_der().as_bytes()).unwrap(), sig);
    }
});
