//! A pure-Rust implementation of group operations on secp256k1.

pub(crate) mod affine;
pub(crate) mod field;
pub(crate) mod scalar;

pub use self::{affine::AffinePoint, field::FieldElement, scalar::Scalar};

use num_bigint::BigUint;

/// Size of a serialized field element or scalar in bytes.
pub const FIELD_BYTES: usize = 32;

/// Serialized field element or scalar.
pub type FieldBytes = [u8; FIELD_BYTES];

/// Big endian encoding of a value below `2^256`, left padded with zeros.
pub(crate) fn uint_to_bytes(value: &BigUint) -> FieldBytes {
    let bytes = value.to_bytes_be();
    debug_assert!(bytes.len() <= FIELD_BYTES);

    let mut out = [0u8; FIELD_BYTES];
    out[FIELD_BYTES - bytes.len()..].copy_from_slice(&bytes);
    out
}
