//! Scalar field arithmetic modulo n = 115792089237316195423570985008687907852837564279074904382605163141518161494337

use super::{FieldBytes, uint_to_bytes};
use crate::{Secp256k1, params};
use core::ops::{Add, Mul, Neg, Sub};
use num_bigint::BigUint;

/// Scalars are elements in the finite field modulo n.
///
/// Scalars are used as secret keys, nonces and signature components. They
/// are variable time and rely on `BigUint`, so secret scalars should be
/// handled with care.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Scalar(primefield::FieldElement);

impl Scalar {
    /// Returns the zero scalar.
    pub fn zero() -> Self {
        Self(params().scalar_zero.clone())
    }

    /// Returns the multiplicative identity.
    pub fn one() -> Self {
        Self::from_uint_reduced(&BigUint::from(1u8))
    }

    /// Attempts to parse the given byte array as a scalar.
    ///
    /// Returns `None` unless the big-endian integer is in the range `[0, n)`.
    pub fn from_bytes(bytes: &FieldBytes) -> Option<Self> {
        Self::from_uint(BigUint::from_bytes_be(bytes))
    }

    /// Returns `Some` if `value < n`.
    pub fn from_uint(value: BigUint) -> Option<Self> {
        if &value < Secp256k1::order() {
            Some(Self::from_uint_reduced(&value))
        } else {
            None
        }
    }

    /// Parses a big-endian integer of any length, reducing it modulo n.
    pub fn from_bytes_reduced(bytes: &[u8]) -> Self {
        Self::from_uint_reduced(&BigUint::from_bytes_be(bytes))
    }

    /// Reduce an arbitrary integer modulo n.
    pub fn from_uint_reduced(value: &BigUint) -> Self {
        Self(params().scalar_zero.reduce(value))
    }

    /// Returns the big-endian encoding of this scalar.
    pub fn to_bytes(&self) -> FieldBytes {
        uint_to_bytes(self.0.value())
    }

    /// Canonical integer value in `[0, n)`.
    pub fn to_uint(&self) -> &BigUint {
        self.0.value()
    }

    /// Determine if this scalar is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Is this scalar greater than n / 2?
    pub fn is_high(&self) -> bool {
        self.to_uint() > &(Secp256k1::order() >> 1u32)
    }

    /// Returns the multiplicative inverse `self^(n-2)`, if self is non-zero.
    pub fn invert(&self) -> Option<Self> {
        self.0.invert().ok().map(Self)
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self::from_uint_reduced(&BigUint::from(value))
    }
}

impl Add<&Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, rhs: &Scalar) -> Scalar {
        Scalar(self.0.reduce(&(self.0.value() + rhs.0.value())))
    }
}

impl Sub<&Scalar> for &Scalar {
    type Output = Scalar;

    fn sub(self, rhs: &Scalar) -> Scalar {
        self + &(-rhs)
    }
}

impl Mul<&Scalar> for &Scalar {
    type Output = Scalar;

    fn mul(self, rhs: &Scalar) -> Scalar {
        Scalar(self.0.reduce(&(self.0.value() * rhs.0.value())))
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Scalar(self.0.neg())
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        -&self
    }
}
