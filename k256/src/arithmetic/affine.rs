//! Affine points

use super::{FieldElement, Scalar};
use crate::{Error, Result, Secp256k1, params};
use alloc::vec::Vec;
use num_bigint::BigUint;

/// SEC1 tag for the point at infinity.
const TAG_IDENTITY: u8 = 0x00;

/// SEC1 tag for a compressed point with even y.
const TAG_COMPRESSED_EVEN: u8 = 0x02;

/// SEC1 tag for a compressed point with odd y.
const TAG_COMPRESSED_ODD: u8 = 0x03;

/// SEC1 tag for an uncompressed point.
const TAG_UNCOMPRESSED: u8 = 0x04;

/// secp256k1 curve point expressed in affine coordinates.
///
/// A [`weierstrass::AffinePoint`] pinned to `a = 0`, `b = 7` over the
/// secp256k1 base field. Scalar multiplication reduces the scalar modulo
/// the group order first.
///
/// Public keys are points, so this type also carries ECDSA verification
/// (see [`AffinePoint::verify_prehashed`]).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AffinePoint(weierstrass::AffinePoint);

impl AffinePoint {
    /// Additive identity of the group: the point at infinity.
    pub fn identity() -> Self {
        Self(params().g.to_identity())
    }

    /// Base point of secp256k1.
    ///
    /// ```text
    /// Gₓ = 79be667e f9dcbbac 55a06295 ce870b07 029bfcdb 2dce28d9 59f2815b 16f81798
    /// Gᵧ = 483ada77 26a3c465 5da4fbfc 0e1108a8 fd17b448 a6855419 9c47d08f fb10d4b8
    /// ```
    pub fn generator() -> Self {
        Self(params().g.clone())
    }

    /// Create a point from affine coordinates, checking the curve equation.
    pub fn from_coordinates(x: FieldElement, y: FieldElement) -> Result<Self> {
        let params = params();
        let point = weierstrass::AffinePoint::new(x.0, y.0, params.a.clone(), params.b.clone())?;
        Ok(Self(point))
    }

    /// Recover the point with the given x-coordinate and y parity.
    ///
    /// Fails with [`weierstrass::Error::NotOnCurve`] when `x³ + 7` has no
    /// square root.
    pub fn decompress(x: &FieldElement, y_is_odd: bool) -> Result<Self> {
        let alpha = &(&x.square() * x) + &FieldElement::from_uint_reduced(&Secp256k1::EQUATION_B.into());
        let beta = alpha
            .sqrt()
            .ok_or(Error::Curve(weierstrass::Error::NotOnCurve))?;

        let y = if beta.is_odd() == y_is_odd { beta } else { -beta };
        Self::from_coordinates(x.clone(), y)
    }

    /// Is this point the identity point?
    pub fn is_identity(&self) -> bool {
        self.0.is_identity()
    }

    /// Affine x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<FieldElement> {
        self.0.x().cloned().map(FieldElement)
    }

    /// Affine y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<FieldElement> {
        self.0.y().cloned().map(FieldElement)
    }

    /// Point addition.
    pub fn add(&self, other: &Self) -> Result<Self> {
        Ok(Self(self.0.add(&other.0)?))
    }

    /// Point doubling.
    pub fn double(&self) -> Result<Self> {
        Ok(Self(self.0.double()?))
    }

    /// Point negation.
    pub fn neg(&self) -> Self {
        Self(self.0.neg())
    }

    /// Multiply by an arbitrary integer, reduced modulo the group order.
    pub fn mul(&self, k: &BigUint) -> Result<Self> {
        self.mul_scalar(&Scalar::from_uint_reduced(k))
    }

    /// Multiply by a scalar.
    pub fn mul_scalar(&self, k: &Scalar) -> Result<Self> {
        Ok(Self(self.0.mul(k.to_uint())?))
    }

    /// Multiply the generator by a scalar.
    pub fn mul_by_generator(k: &Scalar) -> Result<Self> {
        Self::generator().mul_scalar(k)
    }

    /// Decode a point from its SEC1 encoding.
    ///
    /// Accepts the identity (`0x00`), compressed (`0x02`/`0x03` ‖ x) and
    /// uncompressed (`0x04` ‖ x ‖ y) forms. Coordinates must be below the
    /// field modulus.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes {
            [TAG_IDENTITY] => Ok(Self::identity()),
            [TAG_UNCOMPRESSED, coords @ ..] if coords.len() == 64 => {
                let (x, y) = coords.split_at(32);
                Self::from_coordinates(decode_coordinate(x)?, decode_coordinate(y)?)
            }
            [tag @ (TAG_COMPRESSED_EVEN | TAG_COMPRESSED_ODD), x @ ..] if x.len() == 32 => {
                Self::decompress(&decode_coordinate(x)?, *tag == TAG_COMPRESSED_ODD)
            }
            _ => Err(Error::InvalidEncoding),
        }
    }

    /// Serialize this point using the SEC1 encoding.
    ///
    /// The identity encodes as the single byte `0x00`.
    pub fn to_sec1_bytes(&self, compress: bool) -> Vec<u8> {
        let (x, y) = match (self.x(), self.y()) {
            (Some(x), Some(y)) => (x, y),
            _ => return alloc::vec![TAG_IDENTITY],
        };

        let mut out = Vec::with_capacity(if compress { 33 } else { 65 });

        if compress {
            out.push(if y.is_odd() {
                TAG_COMPRESSED_ODD
            } else {
                TAG_COMPRESSED_EVEN
            });
            out.extend_from_slice(&x.to_bytes());
        } else {
            out.push(TAG_UNCOMPRESSED);
            out.extend_from_slice(&x.to_bytes());
            out.extend_from_slice(&y.to_bytes());
        }

        out
    }
}

impl AsRef<weierstrass::AffinePoint> for AffinePoint {
    fn as_ref(&self) -> &weierstrass::AffinePoint {
        &self.0
    }
}

impl TryFrom<&[u8]> for AffinePoint {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_sec1_bytes(bytes)
    }
}

fn decode_coordinate(bytes: &[u8]) -> Result<FieldElement> {
    let bytes = bytes.try_into().map_err(|_| Error::InvalidEncoding)?;
    FieldElement::from_bytes(bytes).ok_or(Error::InvalidEncoding)
}
