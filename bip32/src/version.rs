//! Extended key version prefixes.

use crate::{Error, Result};
use core::fmt;

/// Network an extended key belongs to.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Network {
    /// Bitcoin mainnet (`xprv`/`xpub`).
    #[default]
    Mainnet,

    /// Bitcoin testnet (`tprv`/`tpub`).
    Testnet,
}

/// 4-byte version prefix of a serialized extended key.
///
/// Determines both the network and whether the key field holds a private
/// scalar or a public point, and with it the leading characters of the
/// Base58Check string.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Version {
    /// Mainnet private key, `0x0488ADE4`.
    XPrv,

    /// Mainnet public key, `0x0488B21E`.
    XPub,

    /// Testnet private key, `0x04358394`.
    TPrv,

    /// Testnet public key, `0x043587CF`.
    TPub,
}

impl Version {
    /// Version for a key on `network`.
    pub const fn new(network: Network, is_private: bool) -> Self {
        match (network, is_private) {
            (Network::Mainnet, true) => Version::XPrv,
            (Network::Mainnet, false) => Version::XPub,
            (Network::Testnet, true) => Version::TPrv,
            (Network::Testnet, false) => Version::TPub,
        }
    }

    /// Look up a version from its numeric value.
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            0x0488_ADE4 => Some(Version::XPrv),
            0x0488_B21E => Some(Version::XPub),
            0x0435_8394 => Some(Version::TPrv),
            0x0435_87CF => Some(Version::TPub),
            _ => None,
        }
    }

    /// Numeric value of this version.
    pub const fn to_u32(self) -> u32 {
        match self {
            Version::XPrv => 0x0488_ADE4,
            Version::XPub => 0x0488_B21E,
            Version::TPrv => 0x0435_8394,
            Version::TPub => 0x0435_87CF,
        }
    }

    /// Big endian encoding, as it appears in a serialized key.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.to_u32().to_be_bytes()
    }

    /// Parse the big endian encoding.
    pub fn from_bytes(bytes: [u8; 4]) -> Result<Self> {
        Self::from_u32(u32::from_be_bytes(bytes)).ok_or(Error::UnknownVersion)
    }

    /// Network this version belongs to.
    pub const fn network(self) -> Network {
        match self {
            Version::XPrv | Version::XPub => Network::Mainnet,
            Version::TPrv | Version::TPub => Network::Testnet,
        }
    }

    /// Does this version mark a private key?
    pub const fn is_private(self) -> bool {
        matches!(self, Version::XPrv | Version::TPrv)
    }

    /// Public counterpart of this version on the same network.
    pub const fn to_public(self) -> Self {
        Self::new(self.network(), false)
    }

    /// Four-character prefix of the Base58Check string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Version::XPrv => "xprv",
            Version::XPub => "xpub",
            Version::TPrv => "tprv",
            Version::TPub => "tpub",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
