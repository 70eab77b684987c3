#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo_small.png")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

//! secp256k1 elliptic curve
//!
//! Field, scalar and point types for the curve `y² = x³ + 7` used by
//! Bitcoin, built on the generic [`primefield`] and [`weierstrass`]
//! crates, together with SEC1 point encoding and ECDSA.
//!
//! ## Usage
//!
//! ```
//! use k256::ecdsa::{Signature, SigningKey};
//! use hex_literal::hex;
//!
//! let signing_key = SigningKey::from_bytes(&hex!(
//!     "ebb2c082fd7727890a28ac82f6bdf97bad8de9f5d7c9028692de1a255cad3e0f"
//! ))?;
//!
//! let prehash = hex!("4b688df40bcedbe641ddb16ff0a1842d9c67ea1c3bf63f3e0471baa664531d1a");
//! let signature: Signature = signing_key.try_sign_prehashed(&prehash)?;
//!
//! assert!(signing_key.verifying_key().verify_prehashed(&prehash, &signature)?);
//! # Ok::<(), k256::Error>(())
//! ```
//!
//! ## ⚠️ Security Warning
//!
//! Scalar multiplication is a variable-time double-and-add over
//! arbitrary-precision integers. Do not use this crate where an attacker
//! can measure signing time.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod arithmetic;
pub mod ecdsa;
mod error;

#[cfg(feature = "test-vectors")]
pub mod test_vectors;

pub use crate::{
    arithmetic::{AffinePoint, FieldBytes, FieldElement, Scalar},
    error::{Error, Result},
};
pub use {num_bigint, primefield, signature, weierstrass};

use alloc::boxed::Box;
use hex_literal::hex;
use num_bigint::BigUint;
use once_cell::race::OnceBox;

/// Field modulus `p = 2^256 - 2^32 - 977`.
const FIELD_MODULUS: [u8; 32] =
    hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");

/// Order of the group generated by `G`.
const ORDER: [u8; 32] = hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");

/// Affine x-coordinate of the generator.
const GENERATOR_X: [u8; 32] =
    hex!("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");

/// Affine y-coordinate of the generator.
const GENERATOR_Y: [u8; 32] =
    hex!("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8");

/// secp256k1 elliptic curve.
///
/// Specified in Certicom's SECG in SEC 2: Recommended Elliptic Curve Domain Parameters:
///
/// <https://www.secg.org/sec2-v2.pdf>
///
/// The curve's equation is `y² = x³ + 7` over a ~256-bit prime field.
///
/// It's primarily notable for its use in Bitcoin and other cryptocurrencies.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Secp256k1;

impl Secp256k1 {
    /// Curve coefficient `a`.
    pub const EQUATION_A: u32 = 0;

    /// Curve coefficient `b`.
    pub const EQUATION_B: u32 = 7;

    /// Field modulus `p`.
    pub fn field_modulus() -> &'static BigUint {
        &params().p
    }

    /// Order `n` of the generator.
    pub fn order() -> &'static BigUint {
        &params().n
    }

    /// Generator point `G`.
    pub fn generator() -> AffinePoint {
        AffinePoint::generator()
    }
}

/// Process-wide curve constants.
pub(crate) struct CurveParams {
    pub(crate) p: BigUint,
    pub(crate) n: BigUint,
    /// Zero element of the base field, used as a template for reductions.
    pub(crate) field_zero: primefield::FieldElement,
    /// Zero element of the scalar field.
    pub(crate) scalar_zero: primefield::FieldElement,
    pub(crate) a: primefield::FieldElement,
    pub(crate) b: primefield::FieldElement,
    pub(crate) g: weierstrass::AffinePoint,
}

static PARAMS: OnceBox<CurveParams> = OnceBox::new();

/// Curve constants, initialized on first use.
pub(crate) fn params() -> &'static CurveParams {
    PARAMS.get_or_init(|| Box::new(CurveParams::init()))
}

impl CurveParams {
    fn init() -> Self {
        let p = BigUint::from_bytes_be(&FIELD_MODULUS);
        let n = BigUint::from_bytes_be(&ORDER);

        let field_zero = primefield::FieldElement::zero(p.clone()).expect("modulus is prime");
        let scalar_zero = primefield::FieldElement::zero(n.clone()).expect("order is prime");

        let element = |value: BigUint| field_zero.reduce(&value);
        let a = element(Secp256k1::EQUATION_A.into());
        let b = element(Secp256k1::EQUATION_B.into());
        let g = weierstrass::AffinePoint::new_unchecked(
            element(BigUint::from_bytes_be(&GENERATOR_X)),
            element(BigUint::from_bytes_be(&GENERATOR_Y)),
            a.clone(),
            b.clone(),
        );

        Self {
            p,
            n,
            field_zero,
            scalar_zero,
            a,
            b,
            g,
        }
    }
}
