//! Field arithmetic modulo p = 2^256 - 2^32 - 977

use super::{FieldBytes, uint_to_bytes};
use crate::{Secp256k1, params};
use core::ops::{Add, Mul, Neg, Sub};
use num_bigint::{BigInt, BigUint};

/// An element in the finite field modulo p = 2^256 - 2^32 - 977.
///
/// A [`primefield::FieldElement`] whose prime is fixed, so arithmetic
/// between two elements cannot fail and is exposed through the standard
/// operator traits.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FieldElement(pub(crate) primefield::FieldElement);

impl FieldElement {
    /// Returns the zero element.
    pub fn zero() -> Self {
        Self(params().field_zero.clone())
    }

    /// Returns the multiplicative identity.
    pub fn one() -> Self {
        Self::from_uint_reduced(&BigUint::from(1u8))
    }

    /// Attempts to parse the given byte array as an SEC1-encoded field element.
    ///
    /// Returns `None` if the byte array does not contain a big-endian integer in
    /// the range `[0, p)`.
    pub fn from_bytes(bytes: &FieldBytes) -> Option<Self> {
        let value = BigUint::from_bytes_be(bytes);

        if &value < Secp256k1::field_modulus() {
            Some(Self::from_uint_reduced(&value))
        } else {
            None
        }
    }

    /// Reduce an arbitrary integer modulo `p`.
    pub fn from_uint_reduced(value: &BigUint) -> Self {
        Self(params().field_zero.reduce(value))
    }

    /// Returns the SEC1 encoding of this field element.
    pub fn to_bytes(&self) -> FieldBytes {
        uint_to_bytes(self.0.value())
    }

    /// Canonical integer value in `[0, p)`.
    pub fn to_uint(&self) -> &BigUint {
        self.0.value()
    }

    /// Determine if this element is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Determine if this element is odd in its canonical form.
    pub fn is_odd(&self) -> bool {
        self.0.is_odd()
    }

    /// Returns self * self.
    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Returns `self^exponent`; negative exponents invert.
    pub fn pow(&self, exponent: &BigInt) -> Self {
        Self(self.0.pow(exponent))
    }

    /// Returns the multiplicative inverse of self, if self is non-zero.
    pub fn invert(&self) -> Option<Self> {
        self.0.invert().ok().map(Self)
    }

    /// Returns the square root of self mod p, or `None` if no square root exists.
    pub fn sqrt(&self) -> Option<Self> {
        // p ≡ 3 (mod 4): a^((p+1)/4) squares back to `a` exactly when `a` is a
        // quadratic residue. For a non-residue it yields a root of `-a`.
        let exponent = (Secp256k1::field_modulus() + 1u32) >> 2u32;
        let root = self.pow(&BigInt::from(exponent));

        if root.square() == *self {
            Some(root)
        } else {
            None
        }
    }
}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &FieldElement) -> FieldElement {
        FieldElement(self.0.reduce(&(self.0.value() + rhs.0.value())))
    }
}

impl Add<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &FieldElement) -> FieldElement {
        &self + rhs
    }
}

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: &FieldElement) -> FieldElement {
        self + &(-rhs)
    }
}

impl Sub<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: &FieldElement) -> FieldElement {
        &self - rhs
    }
}

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &FieldElement) -> FieldElement {
        FieldElement(self.0.reduce(&(self.0.value() * rhs.0.value())))
    }
}

impl Mul<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &FieldElement) -> FieldElement {
        &self * rhs
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement(self.0.neg())
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -&self
    }
}
