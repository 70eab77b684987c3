//! ECDSA verification: check signatures against a public point.

use super::{Signature, der, hash_to_scalar};
use crate::{AffinePoint, Result, Scalar};
use sha2::{Digest, Sha256};
use signature::{Verifier, hazmat::PrehashVerifier};

impl AffinePoint {
    /// Verify `signature` over a message hash, treating `self` as the
    /// public key.
    ///
    /// Returns `Ok(false)` for a well-formed but invalid signature,
    /// including `r` or `s` outside `[1, n)`.
    pub fn verify_prehashed(&self, hashed_msg: &[u8], signature: &Signature) -> Result<bool> {
        let (r, s) = match (
            Scalar::from_uint(signature.r().clone()),
            Scalar::from_uint(signature.s().clone()),
        ) {
            (Some(r), Some(s)) if !r.is_zero() && !s.is_zero() => (r, s),
            _ => return Ok(false),
        };

        let z = hash_to_scalar(hashed_msg);
        let s_inv = match s.invert() {
            Some(s_inv) => s_inv,
            None => return Ok(false),
        };

        let u1 = &z * &s_inv;
        let u2 = &r * &s_inv;

        let total = AffinePoint::mul_by_generator(&u1)?.add(&self.mul_scalar(&u2)?)?;

        Ok(match total.x() {
            Some(x) => Scalar::from_uint_reduced(x.to_uint()) == r,
            None => false,
        })
    }
}

impl PrehashVerifier<Signature> for AffinePoint {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> signature::Result<()> {
        if self.verify_prehashed(prehash, signature)? {
            Ok(())
        } else {
            Err(signature::Error::new())
        }
    }
}

impl PrehashVerifier<der::Signature> for AffinePoint {
    fn verify_prehash(&self, prehash: &[u8], signature: &der::Signature) -> signature::Result<()> {
        let signature = Signature::try_from(signature.clone())?;
        PrehashVerifier::<Signature>::verify_prehash(self, prehash, &signature)
    }
}

/// Verify against the SHA-256 digest of `msg`.
impl Verifier<Signature> for AffinePoint {
    fn verify(&self, msg: &[u8], signature: &Signature) -> signature::Result<()> {
        self.verify_prehash(&Sha256::digest(msg), signature)
    }
}

impl Verifier<der::Signature> for AffinePoint {
    fn verify(&self, msg: &[u8], signature: &der::Signature) -> signature::Result<()> {
        self.verify_prehash(&Sha256::digest(msg), signature)
    }
}

#[cfg(test)]
mod tests {
    use crate::{AffinePoint, FieldElement, ecdsa::Signature};
    use hex_literal::hex;
    use num_bigint::BigUint;

    fn public_key() -> AffinePoint {
        AffinePoint::from_coordinates(
            FieldElement::from_bytes(&hex!(
                "04519fac3d910ca7e7138f7013706f619fa8f033e6ec6e09370ea38cee6a7574"
            ))
            .unwrap(),
            FieldElement::from_bytes(&hex!(
                "82b51eab8c27c66e26c858a079bcdf4f1ada34cec420cafc7eac1a42216fb6c4"
            ))
            .unwrap(),
        )
        .unwrap()
    }

    const Z: [u8; 32] = hex!("bc62d4b80d9e36da29c16c5d4d9f11731f36052c72401a76c23c0fb5a9b74423");
    const R: [u8; 32] = hex!("37206a0610995c58074999cb9767b87af4c4978db68c06e8e6e81d282047a7c6");
    const S: [u8; 32] = hex!("8ca63759c1157ebeaec0d03cecca119fc9a75bf8e6d0fa65c841c8e2738cdaec");

    fn signature(r: &[u8], s: &[u8]) -> Signature {
        Signature::new(BigUint::from_bytes_be(r), BigUint::from_bytes_be(s)).unwrap()
    }

    #[test]
    fn valid_signature() {
        assert!(public_key().verify_prehashed(&Z, &signature(&R, &S)).unwrap());
    }

    #[test]
    fn zero_components_are_invalid() {
        let key = public_key();
        assert!(!key.verify_prehashed(&Z, &signature(&[0], &S)).unwrap());
        assert!(!key.verify_prehashed(&Z, &signature(&R, &[0])).unwrap());
    }

    #[test]
    fn components_at_order_are_invalid() {
        let n = hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
        let key = public_key();
        assert!(!key.verify_prehashed(&Z, &signature(&n, &S)).unwrap());
        assert!(!key.verify_prehashed(&Z, &signature(&R, &n)).unwrap());
    }

    #[test]
    fn wrong_key_is_invalid() {
        let sig = signature(&R, &S);
        assert!(!AffinePoint::generator().verify_prehashed(&Z, &sig).unwrap());
    }
}
