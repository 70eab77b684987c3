//! Affine curve points.

use crate::{Error, Result};
use core::fmt;
use num_bigint::BigUint;
use num_traits::Zero;
use primefield::FieldElement;

/// Point on the short Weierstrass curve `y² = x³ + ax + b`.
///
/// The point at infinity has no coordinates and acts as the identity of the
/// group. Two points are equal when their coordinates and their curve
/// coefficients are equal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AffinePoint {
    /// `None` for the point at infinity.
    xy: Option<(FieldElement, FieldElement)>,
    a: FieldElement,
    b: FieldElement,
}

impl AffinePoint {
    /// Create a point from its coordinates, checking the curve equation.
    pub fn new(x: FieldElement, y: FieldElement, a: FieldElement, b: FieldElement) -> Result<Self> {
        check_coefficients(&a, &b)?;

        // x³ + ax + b
        let rhs = x.square().mul(&x)?.add(&a.mul(&x)?)?.add(&b)?;

        if !y.square().sub(&rhs)?.is_zero() {
            return Err(Error::NotOnCurve);
        }

        Ok(Self {
            xy: Some((x, y)),
            a,
            b,
        })
    }

    /// Create a point without checking the curve equation.
    ///
    /// Intended for well-known constants such as a curve's base point. The
    /// caller is responsible for `(x, y)` lying on the curve and all four
    /// elements sharing one field.
    pub fn new_unchecked(x: FieldElement, y: FieldElement, a: FieldElement, b: FieldElement) -> Self {
        debug_assert!(Self::new(x.clone(), y.clone(), a.clone(), b.clone()).is_ok());

        Self {
            xy: Some((x, y)),
            a,
            b,
        }
    }

    /// The point at infinity on the curve with coefficients `a` and `b`.
    pub fn identity(a: FieldElement, b: FieldElement) -> Result<Self> {
        check_coefficients(&a, &b)?;
        Ok(Self { xy: None, a, b })
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.xy.is_none()
    }

    /// Affine x-coordinate, or `None` for the point at infinity.
    pub fn x(&self) -> Option<&FieldElement> {
        self.xy.as_ref().map(|(x, _)| x)
    }

    /// Affine y-coordinate, or `None` for the point at infinity.
    pub fn y(&self) -> Option<&FieldElement> {
        self.xy.as_ref().map(|(_, y)| y)
    }

    /// Curve coefficient `a`.
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// Curve coefficient `b`.
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Add two points on the same curve.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        if self.a != rhs.a || self.b != rhs.b {
            return Err(Error::CurveMismatch);
        }

        let (x1, y1) = match &self.xy {
            Some(xy) => xy,
            None => return Ok(rhs.clone()),
        };

        let (x2, y2) = match &rhs.xy {
            Some(xy) => xy,
            None => return Ok(self.clone()),
        };

        // P + (-P), and doubling a point with a vertical tangent
        if x1 == x2 && (y1 != y2 || y1.is_zero()) {
            return Ok(self.to_identity());
        }

        let slope = if x1 != x2 {
            y2.sub(y1)?.div(&x2.sub(x1)?)?
        } else {
            // (3x² + a) / 2y
            let xx = x1.square();
            xx.add(&xx)?.add(&xx)?.add(&self.a)?.div(&y1.add(y1)?)?
        };

        let x3 = slope.square().sub(x1)?.sub(x2)?;
        let y3 = slope.mul(&x1.sub(&x3)?)?.sub(y1)?;

        Ok(Self {
            xy: Some((x3, y3)),
            a: self.a.clone(),
            b: self.b.clone(),
        })
    }

    /// Double this point.
    pub fn double(&self) -> Result<Self> {
        self.add(self)
    }

    /// Negate this point, mapping `(x, y)` to `(x, -y)`.
    pub fn neg(&self) -> Self {
        Self {
            xy: self.xy.as_ref().map(|(x, y)| (x.clone(), y.neg())),
            a: self.a.clone(),
            b: self.b.clone(),
        }
    }

    /// Multiply this point by a non-negative integer.
    ///
    /// Variable-time double-and-add, scanning `scalar` from its least
    /// significant bit.
    pub fn mul(&self, scalar: &BigUint) -> Result<Self> {
        let mut k = scalar.clone();
        let mut current = self.clone();
        let mut result = self.to_identity();

        while !k.is_zero() {
            if k.bit(0) {
                result = result.add(&current)?;
            }

            current = current.double()?;
            k >>= 1u32;
        }

        Ok(result)
    }

    /// Point at infinity on the same curve as `self`.
    pub fn to_identity(&self) -> Self {
        Self {
            xy: None,
            a: self.a.clone(),
            b: self.b.clone(),
        }
    }
}

impl fmt::Display for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.xy {
            Some((x, y)) => write!(
                f,
                "Point({},{})_{}_{} FieldElement({})",
                x.value(),
                y.value(),
                self.a.value(),
                self.b.value(),
                x.prime()
            ),
            None => f.write_str("Point(infinity)"),
        }
    }
}

/// Ensure the curve coefficients belong to the same field.
fn check_coefficients(a: &FieldElement, b: &FieldElement) -> Result<()> {
    if a.prime() != b.prime() {
        return Err(primefield::Error::FieldMismatch.into());
    }

    Ok(())
}
