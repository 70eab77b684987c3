//! Field elements.

use crate::{Error, Result};
use alloc::vec::Vec;
use core::fmt;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Element of the prime field `GF(p)`.
///
/// The value is always kept in the canonical range `[0, p)`. Elements are
/// immutable: every operation returns a new element.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FieldElement {
    value: BigUint,
    prime: BigUint,
}

impl FieldElement {
    /// Create a new field element.
    ///
    /// Fails with [`Error::OutOfRange`] unless `value < prime`. A prime below
    /// two does not define a field and is rejected the same way.
    pub fn new(value: BigUint, prime: BigUint) -> Result<Self> {
        if prime < BigUint::from(2u8) || value >= prime {
            return Err(Error::OutOfRange);
        }

        Ok(Self { value, prime })
    }

    /// Parse a big endian integer as an element of the field with the given prime.
    pub fn from_bytes_be(bytes: &[u8], prime: BigUint) -> Result<Self> {
        Self::new(BigUint::from_bytes_be(bytes), prime)
    }

    /// Returns the zero element (additive identity) of the field.
    pub fn zero(prime: BigUint) -> Result<Self> {
        Self::new(BigUint::zero(), prime)
    }

    /// Returns the multiplicative identity of the field.
    pub fn one(prime: BigUint) -> Result<Self> {
        Self::new(BigUint::one(), prime)
    }

    /// Canonical value in `[0, p)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Prime modulus of the field this element belongs to.
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// Element of the same field as `self` holding `value mod p`.
    pub fn reduce(&self, value: &BigUint) -> Self {
        self.with_value(value % &self.prime)
    }

    /// Big endian encoding of the value, left padded to the byte length of the prime.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let len = self.prime.bits().div_ceil(8) as usize;
        let bytes = self.value.to_bytes_be();
        let mut out = Vec::with_capacity(len);
        out.resize(len.saturating_sub(bytes.len()), 0);
        out.extend_from_slice(&bytes);
        out
    }

    /// Determine if this element is zero.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Determine if the canonical value is odd.
    pub fn is_odd(&self) -> bool {
        self.value.bit(0)
    }

    /// Returns `self + rhs mod p`.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.with_value((&self.value + &rhs.value) % &self.prime))
    }

    /// Returns `self - rhs mod p`.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        // Adding `p` first keeps the intermediate non-negative.
        Ok(self.with_value((&self.value + &self.prime - &rhs.value) % &self.prime))
    }

    /// Returns `self * rhs mod p`.
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.with_value((&self.value * &rhs.value) % &self.prime))
    }

    /// Returns `self * self mod p`.
    pub fn square(&self) -> Self {
        self.with_value((&self.value * &self.value) % &self.prime)
    }

    /// Returns `-self mod p`.
    #[allow(clippy::should_implement_trait)]
    pub fn neg(&self) -> Self {
        self.with_value((&self.prime - &self.value) % &self.prime)
    }

    /// Returns `self^exponent mod p`.
    ///
    /// The exponent is first reduced modulo `p - 1` (Fermat's little
    /// theorem), which also maps negative exponents onto `[0, p - 1)`.
    ///
    /// **This operation is variable time with respect to the exponent.**
    pub fn pow(&self, exponent: &BigInt) -> Self {
        let order = BigInt::from(&self.prime - 1u32);
        let (_, exponent) = exponent.mod_floor(&order).into_parts();
        self.with_value(self.value.modpow(&exponent, &self.prime))
    }

    /// Returns `self / rhs mod p`, computed as `self * rhs^(p - 2)`.
    ///
    /// Division by zero is not rejected: `0^(p - 2)` is zero, so the
    /// quotient is the zero element. Use [`FieldElement::checked_div`] when
    /// a zero divisor must be reported.
    #[allow(clippy::should_implement_trait)]
    pub fn div(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        self.mul(&rhs.fermat_inverse())
    }

    /// Returns `self / rhs mod p`, failing with [`Error::NotInvertible`]
    /// when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        self.mul(&rhs.invert()?)
    }

    /// Returns the multiplicative inverse of `self`, if `self` is non-zero.
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::NotInvertible);
        }

        Ok(self.fermat_inverse())
    }

    // a^p ≡ a (mod p), so a^(p - 2) * a ≡ 1 for every non-zero a.
    fn fermat_inverse(&self) -> Self {
        let exponent = &self.prime - 2u32;
        self.with_value(self.value.modpow(&exponent, &self.prime))
    }

    fn check_field(&self, rhs: &Self) -> Result<()> {
        if self.prime != rhs.prime {
            return Err(Error::FieldMismatch);
        }

        Ok(())
    }

    fn with_value(&self, value: BigUint) -> Self {
        debug_assert!(value < self.prime);
        Self {
            value,
            prime: self.prime.clone(),
        }
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement_{}({})", self.prime, self.value)
    }
}

impl fmt::LowerHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes_be() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
