//! Error types.

use core::fmt;

/// BIP32 errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Error from the secp256k1 layer.
    Curve(k256::Error),

    /// Derived or decoded key is zero, not below the group order, or the
    /// point at infinity.
    InvalidKey,

    /// Hardened child requested from a public-only key.
    CannotHardenPublic,

    /// Public projection requested from a key which is already public.
    AlreadyPublic,

    /// Serialized extended key has the wrong length.
    BadLength,

    /// Derivation path or child number string is malformed.
    BadPathSyntax,

    /// Serialized extended key checksum does not match its payload.
    BadChecksum,

    /// String is not valid Base58.
    Base58,

    /// Unrecognized 4-byte version prefix.
    UnknownVersion,

    /// Key is at the maximum depth and cannot have children.
    MaxDepthExceeded,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Curve(err) => write!(f, "secp256k1 error: {err}"),
            Error::InvalidKey => f.write_str("invalid extended key material"),
            Error::CannotHardenPublic => {
                f.write_str("cannot derive a hardened child from a public key")
            }
            Error::AlreadyPublic => f.write_str("key is already a public key"),
            Error::BadLength => f.write_str("serialized extended key has the wrong length"),
            Error::BadPathSyntax => f.write_str("malformed derivation path"),
            Error::BadChecksum => f.write_str("extended key checksum mismatch"),
            Error::Base58 => f.write_str("invalid Base58 encoding"),
            Error::UnknownVersion => f.write_str("unknown extended key version"),
            Error::MaxDepthExceeded => f.write_str("maximum derivation depth exceeded"),
        }
    }
}

impl From<k256::Error> for Error {
    fn from(err: k256::Error) -> Error {
        match err {
            k256::Error::InvalidKey => Error::InvalidKey,
            err => Error::Curve(err),
        }
    }
}

impl From<bs58::decode::Error> for Error {
    fn from(_: bs58::decode::Error) -> Error {
        Error::Base58
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Curve(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
