#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo_small.png")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

//! BIP32 hierarchical deterministic keys
//!
//! Derives a tree of secp256k1 keys from a single seed as described in
//! [BIP32], using the [`k256`] crate for the curve arithmetic.
//!
//! ## Usage
//!
//! ```
//! use bip32::{DerivationPath, ExtendedKey};
//! use hex_literal::hex;
//!
//! let seed = hex!("000102030405060708090a0b0c0d0e0f");
//! let root = ExtendedKey::new_master(&seed)?;
//! assert_eq!(
//!     root.to_string(),
//!     "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi"
//! );
//!
//! let path: DerivationPath = "m/0'/1".parse()?;
//! let child = root.derive_path(&path)?;
//! let xpub = child.to_public()?;
//! assert_eq!(xpub.to_string().parse::<ExtendedKey>()?, xpub);
//! # Ok::<(), bip32::Error>(())
//! ```
//!
//! [BIP32]: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;
mod extended_key;
mod hash;
mod path;
mod version;

pub use crate::{
    error::{Error, Result},
    extended_key::{ExtendedKey, SEED_SIZE, generate_seed},
    hash::{hash160, hash256},
    path::{ChildNumber, DerivationPath},
    version::{Network, Version},
};
pub use k256;

/// Chain code: extension of the key with 256 bits of entropy.
pub type ChainCode = [u8; KEY_SIZE];

/// Depth of a key in the derivation tree.
pub type Depth = u8;

/// First four bytes of the HASH160 of a public key.
pub type KeyFingerprint = [u8; 4];

/// Size of a private key scalar and of a chain code.
pub const KEY_SIZE: usize = 32;

/// Size of a serialized extended key without its checksum.
pub const PAYLOAD_SIZE: usize = 78;

/// Size of a serialized extended key including the 4-byte checksum.
pub const SERIALIZED_SIZE: usize = PAYLOAD_SIZE + 4;
