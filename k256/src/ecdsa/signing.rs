//! ECDSA signing: generate signatures using a secret key.

use super::{Signature, der, generate_k, hash_to_scalar};
use crate::{AffinePoint, Error, FieldBytes, Result, Scalar};
use core::fmt;
use num_bigint::BigUint;
use sha2::{Digest, Sha256};
use signature::{Signer, hazmat::PrehashSigner};

/// ECDSA/secp256k1 signing key
///
/// Holds the secret scalar `d ∈ [1, n)` together with the public point
/// `d·G`, computed once at construction.
#[derive(Clone, Eq, PartialEq)]
pub struct SigningKey {
    /// Secret scalar value
    secret_scalar: Scalar,

    /// Verifying key which corresponds to this signing key.
    verifying_key: AffinePoint,
}

impl SigningKey {
    /// Create a signing key from a secret integer.
    ///
    /// Fails with [`Error::InvalidKey`] unless `1 <= secret < n`.
    pub fn new(secret: BigUint) -> Result<Self> {
        Scalar::from_uint(secret)
            .ok_or(Error::InvalidKey)
            .and_then(Self::from_scalar)
    }

    /// Create a signing key from a non-zero scalar.
    pub fn from_scalar(secret_scalar: Scalar) -> Result<Self> {
        if secret_scalar.is_zero() {
            return Err(Error::InvalidKey);
        }

        let verifying_key = AffinePoint::mul_by_generator(&secret_scalar)?;

        Ok(Self {
            secret_scalar,
            verifying_key,
        })
    }

    /// Initialize signing key from a raw scalar serialized as a 32-byte
    /// big endian slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: &FieldBytes = bytes.try_into().map_err(|_| Error::InvalidKey)?;
        Scalar::from_bytes(bytes)
            .ok_or(Error::InvalidKey)
            .and_then(Self::from_scalar)
    }

    /// Serialize this [`SigningKey`] as bytes
    pub fn to_bytes(&self) -> FieldBytes {
        self.secret_scalar.to_bytes()
    }

    /// Borrow the secret scalar.
    pub fn as_scalar(&self) -> &Scalar {
        &self.secret_scalar
    }

    /// Get the [`AffinePoint`] which corresponds to this [`SigningKey`]
    pub fn verifying_key(&self) -> &AffinePoint {
        &self.verifying_key
    }

    /// Sign a message hash.
    ///
    /// The nonce is derived with [RFC 6979] and the result is normalized to
    /// "low S" form. Fails with [`Error::DegenerateSignature`] if `r` or `s`
    /// comes out zero.
    ///
    /// [RFC 6979]: https://datatracker.ietf.org/doc/html/rfc6979
    pub fn try_sign_prehashed(&self, hashed_msg: &[u8]) -> Result<Signature> {
        let k = generate_k(&self.secret_scalar, hashed_msg);

        // Compute `x`-coordinate of affine point 𝑘×𝑮
        let big_r = AffinePoint::mul_by_generator(&k)?;
        let x = big_r.x().ok_or(Error::DegenerateSignature)?;

        // Lift `x` (element of base field) to an element of the scalar field
        let r = Scalar::from_uint_reduced(x.to_uint());
        if r.is_zero() {
            return Err(Error::DegenerateSignature);
        }

        // Reduce message hash to an element of the scalar field
        let z = hash_to_scalar(hashed_msg);

        let k_inv = k.invert().ok_or(Error::DegenerateSignature)?;

        // Compute `s` as a signature over `r` and `z`
        let s = &(&z + &(&r * &self.secret_scalar)) * &k_inv;
        if s.is_zero() {
            return Err(Error::DegenerateSignature);
        }

        let signature = Signature::from_scalars(&r, &s);
        Ok(signature.normalize_s().unwrap_or(signature))
    }
}

impl PrehashSigner<Signature> for SigningKey {
    fn sign_prehash(&self, prehash: &[u8]) -> signature::Result<Signature> {
        Ok(self.try_sign_prehashed(prehash)?)
    }
}

impl PrehashSigner<der::Signature> for SigningKey {
    fn sign_prehash(&self, prehash: &[u8]) -> signature::Result<der::Signature> {
        Ok(self.try_sign_prehashed(prehash)?.to_der())
    }
}

/// Sign the SHA-256 digest of `msg`.
impl Signer<Signature> for SigningKey {
    fn try_sign(&self, msg: &[u8]) -> signature::Result<Signature> {
        PrehashSigner::<Signature>::sign_prehash(self, &Sha256::digest(msg))
    }
}

impl Signer<der::Signature> for SigningKey {
    fn try_sign(&self, msg: &[u8]) -> signature::Result<der::Signature> {
        PrehashSigner::<der::Signature>::sign_prehash(self, &Sha256::digest(msg))
    }
}

impl TryFrom<&[u8]> for SigningKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}
