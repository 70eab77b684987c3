#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

//! Prime field arithmetic over arbitrary-precision residues.
//!
//! A [`FieldElement`] carries its own prime, so elements of different
//! fields can coexist; combining them is an error rather than a panic.
//!
//! ## Usage
//!
//! ```
//! use primefield::{FieldElement, num_bigint::BigUint};
//!
//! let prime = BigUint::from(19u32);
//! let a = FieldElement::new(BigUint::from(7u32), prime.clone())?;
//! let b = FieldElement::new(BigUint::from(15u32), prime)?;
//!
//! assert_eq!(a.add(&b)?.value(), &BigUint::from(3u32));
//! # Ok::<(), primefield::Error>(())
//! ```

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod element;
mod error;

pub use crate::{
    element::FieldElement,
    error::{Error, Result},
};
pub use num_bigint;
