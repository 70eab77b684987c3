//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! This module contains support for computing and verifying ECDSA signatures
//! with deterministic nonces ([RFC 6979]) and DER serialization.
//!
//! [RFC 6979]: https://datatracker.ietf.org/doc/html/rfc6979
//!
//! ## Signing/Verification Example
//!
//! ```
//! use k256::{
//!     ecdsa::{SigningKey, Signature, signature::Signer, signature::Verifier},
//!     AffinePoint,
//! };
//!
//! // Signing
//! let signing_key = SigningKey::from_bytes(&[0x42; 32])?;
//! let message = b"ECDSA proves knowledge of a secret number in the context of a single message";
//!
//! // Signatures are deterministic: signing twice yields the same bytes.
//! let signature: Signature = signing_key.sign(message);
//! let again: Signature = signing_key.sign(message);
//! assert_eq!(signature, again);
//!
//! // Verification
//! let verifying_key: &AffinePoint = signing_key.verifying_key();
//! assert!(verifying_key.verify(message, &signature).is_ok());
//!
//! // DER
//! let der = signature.to_der();
//! assert_eq!(Signature::from_der(der.as_bytes())?, signature);
//! # Ok::<(), k256::Error>(())
//! ```

pub mod der;

mod rfc6979;
mod signing;
mod verifying;

pub use self::{rfc6979::generate_k, signing::SigningKey};
pub use signature;

use crate::{Error, FieldBytes, Result, Scalar, Secp256k1, arithmetic::uint_to_bytes};
use core::fmt;
use num_bigint::BigUint;

/// ECDSA/secp256k1 verification key: a public point.
pub type VerifyingKey = crate::AffinePoint;

/// ECDSA/secp256k1 signature: the integer pair `(r, s)`.
///
/// Both components are below `2^256`. Signatures produced by
/// [`SigningKey`] are in the "low S" form, which verification does not
/// require.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Size of the fixed-width `r ‖ s` encoding.
    pub const BYTE_SIZE: usize = 64;

    /// Create a signature from its components.
    ///
    /// Fails with [`Error::MalformedSignature`] if either does not fit in
    /// 32 bytes.
    pub fn new(r: BigUint, s: BigUint) -> Result<Self> {
        if r.bits() > 256 || s.bits() > 256 {
            return Err(Error::MalformedSignature);
        }

        Ok(Self { r, s })
    }

    /// Create a signature from two scalars.
    pub fn from_scalars(r: &Scalar, s: &Scalar) -> Self {
        Self {
            r: r.to_uint().clone(),
            s: s.to_uint().clone(),
        }
    }

    /// Parse the fixed-width `r ‖ s` encoding.
    pub fn from_bytes(bytes: &[u8; Self::BYTE_SIZE]) -> Self {
        let (r, s) = bytes.split_at(32);
        Self {
            r: BigUint::from_bytes_be(r),
            s: BigUint::from_bytes_be(s),
        }
    }

    /// Serialize as fixed-width `r ‖ s`.
    pub fn to_bytes(&self) -> [u8; Self::BYTE_SIZE] {
        let mut out = [0u8; Self::BYTE_SIZE];
        out[..32].copy_from_slice(&self.r_bytes());
        out[32..].copy_from_slice(&self.s_bytes());
        out
    }

    /// Parse a DER-encoded signature.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        der::Signature::from_bytes(bytes)?.try_into()
    }

    /// Serialize this signature as DER.
    pub fn to_der(&self) -> der::Signature {
        der::Signature::from_components(&self.r.to_bytes_be(), &self.s.to_bytes_be())
    }

    /// The `r` component.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Big endian `r`, left padded to 32 bytes.
    pub fn r_bytes(&self) -> FieldBytes {
        uint_to_bytes(&self.r)
    }

    /// Big endian `s`, left padded to 32 bytes.
    pub fn s_bytes(&self) -> FieldBytes {
        uint_to_bytes(&self.s)
    }

    /// Normalize signature into "low S" form as described in
    /// [BIP 0062: Dealing with Malleability][1].
    ///
    /// Returns `None` if `s` is already low (or not a valid scalar).
    ///
    /// [1]: https://github.com/bitcoin/bips/blob/master/bip-0062.mediawiki
    pub fn normalize_s(&self) -> Option<Self> {
        let s = Scalar::from_uint(self.s.clone())?;

        if s.is_high() {
            Some(Self {
                r: self.r.clone(),
                s: (-s).to_uint().clone(),
            })
        } else {
            None
        }
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ecdsa::Signature<Secp256k1>(")?;

        for byte in self.to_bytes() {
            write!(f, "{byte:02X}")?;
        }

        write!(f, ")")
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes = bytes.try_into().map_err(|_| Error::MalformedSignature)?;
        Ok(Self::from_bytes(bytes))
    }
}

/// Convert the leftmost bits of a hash to an integer, as in
/// [RFC 6979 § 2.3.2][1].
///
/// Hashes longer than the group order are truncated to its bit length;
/// shorter hashes are used as-is.
///
/// [1]: https://datatracker.ietf.org/doc/html/rfc6979#section-2.3.2
pub fn bits2int(hash: &[u8]) -> BigUint {
    let order_bits = Secp256k1::order().bits();
    let hash_bits = hash.len() as u64 * 8;
    let value = BigUint::from_bytes_be(hash);

    if hash_bits > order_bits {
        value >> (hash_bits - order_bits)
    } else {
        value
    }
}

/// Reduce a message hash to the scalar `z` used by signing and verification.
pub(crate) fn hash_to_scalar(hash: &[u8]) -> Scalar {
    Scalar::from_uint_reduced(&bits2int(hash))
}
