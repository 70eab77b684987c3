//! ASN.1 DER encoding for ECDSA/secp256k1 signatures.
//!
//! ```text
//! 0x30 <len> 0x02 <r-len> r 0x02 <s-len> s
//! ```
//!
//! Integers are minimal big endian, with a `0x00` pad byte when the high
//! bit would otherwise mark them negative. Only short-form lengths occur
//! for secp256k1, so long-form lengths are rejected.

use crate::{Error, Result};
use alloc::vec::Vec;
use core::{fmt, ops::Range};
use num_bigint::BigUint;

/// ASN.1 `SEQUENCE` tag.
const SEQUENCE_TAG: u8 = 0x30;

/// ASN.1 `INTEGER` tag.
const INTEGER_TAG: u8 = 0x02;

/// Largest integer payload: a 32-byte value plus the sign pad.
const MAX_INTEGER_LEN: usize = 33;

/// ASN.1 DER-encoded ECDSA/secp256k1 signature.
#[derive(Clone, Eq, PartialEq)]
pub struct Signature {
    /// ASN.1 DER-encoded signature data
    bytes: Vec<u8>,

    /// Range of the `r` value within the signature
    r_range: Range<usize>,

    /// Range of the `s` value within the signature
    s_range: Range<usize>,
}

#[allow(clippy::len_without_is_empty)]
impl Signature {
    /// Parse signature from DER-encoded bytes.
    ///
    /// The outer length must cover exactly the rest of the input, both
    /// fields must be `INTEGER`s, and nothing may follow `s`.
    pub fn from_bytes(input: &[u8]) -> Result<Self> {
        let (tag, len) = match input {
            [tag, len, ..] => (*tag, *len as usize),
            _ => return Err(Error::MalformedSignature),
        };

        if tag != SEQUENCE_TAG || len >= 0x80 || len + 2 != input.len() {
            return Err(Error::MalformedSignature);
        }

        let r_range = integer_range(input, 2)?;
        let s_range = integer_range(input, r_range.end)?;

        if s_range.end != input.len() {
            return Err(Error::MalformedSignature);
        }

        Ok(Self {
            bytes: input.to_vec(),
            r_range,
            s_range,
        })
    }

    /// Create an ASN.1 DER encoded signature from big endian `r` and `s`
    /// scalar components.
    pub(crate) fn from_components(r: &[u8], s: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(2 + 2 * (2 + MAX_INTEGER_LEN));
        bytes.extend_from_slice(&[SEQUENCE_TAG, 0]);

        let r_range = push_integer(&mut bytes, r);
        let s_range = push_integer(&mut bytes, s);

        // At most 2 * 35 bytes, so the short form always fits.
        bytes[1] = (bytes.len() - 2) as u8;

        Self {
            bytes,
            r_range,
            s_range,
        }
    }

    /// Borrow this signature as a byte slice
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Serialize this signature as a vector
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Get the length of the signature in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Get the `r` component of the signature (as encoded, including any pad byte)
    pub fn r(&self) -> &[u8] {
        &self.bytes[self.r_range.clone()]
    }

    /// Get the `s` component of the signature (as encoded, including any pad byte)
    pub fn s(&self) -> &[u8] {
        &self.bytes[self.s_range.clone()]
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ecdsa::der::Signature<Secp256k1>(")?;

        for &byte in self.as_ref() {
            write!(f, "{byte:02X}")?;
        }

        write!(f, ")")
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(input: &[u8]) -> Result<Self> {
        Self::from_bytes(input)
    }
}

impl From<super::Signature> for Signature {
    fn from(sig: super::Signature) -> Signature {
        sig.to_der()
    }
}

impl From<&super::Signature> for Signature {
    fn from(sig: &super::Signature) -> Signature {
        sig.to_der()
    }
}

impl TryFrom<Signature> for super::Signature {
    type Error = Error;

    fn try_from(sig: Signature) -> Result<super::Signature> {
        super::Signature::new(BigUint::from_bytes_be(sig.r()), BigUint::from_bytes_be(sig.s()))
    }
}

/// Locate the payload of the `INTEGER` whose tag is at `offset`.
fn integer_range(input: &[u8], offset: usize) -> Result<Range<usize>> {
    let (tag, len) = match input.get(offset..offset + 2) {
        Some([tag, len]) => (*tag, *len as usize),
        _ => return Err(Error::MalformedSignature),
    };

    if tag != INTEGER_TAG || len == 0 || len > MAX_INTEGER_LEN {
        return Err(Error::MalformedSignature);
    }

    let start = offset + 2;
    let end = start + len;

    if end > input.len() {
        return Err(Error::MalformedSignature);
    }

    Ok(start..end)
}

/// Append `value` as a DER `INTEGER`, returning the payload range.
fn push_integer(out: &mut Vec<u8>, value: &[u8]) -> Range<usize> {
    let first = value.iter().position(|&b| b != 0).unwrap_or(value.len().saturating_sub(1));
    let value = if value.is_empty() { &[0u8][..] } else { &value[first..] };
    let pad = value[0] & 0x80 != 0;

    out.push(INTEGER_TAG);
    out.push((value.len() + pad as usize) as u8);

    let start = out.len();
    if pad {
        out.push(0);
    }
    out.extend_from_slice(value);

    start..out.len()
}
