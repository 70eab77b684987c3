#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

//! Group law for short Weierstrass curves in affine coordinates.
//!
//! Points live on `y² = x³ + ax + b` over a [`primefield::FieldElement`]
//! field. The curve is identified by its `a` and `b` coefficients; points
//! on different curves cannot be combined.
//!
//! These are the textbook chord-and-tangent formulas with one field
//! inversion per addition. They are not constant time.

#[cfg(test)]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod affine;
mod error;

pub use crate::{
    affine::AffinePoint,
    error::{Error, Result},
};
pub use primefield::{self, FieldElement};
