//! Extended keys: a secp256k1 key together with a chain code and its
//! position in the derivation tree.

use crate::{
    ChainCode, ChildNumber, DerivationPath, Depth, Error, KEY_SIZE, KeyFingerprint, Network,
    PAYLOAD_SIZE, Result, SERIALIZED_SIZE, Version,
    hash::{hash160, hash256, hmac_sha512},
};
use alloc::string::String;
use core::{fmt, str::FromStr};
use k256::{AffinePoint, FieldBytes, Scalar, ecdsa::SigningKey};
use rand_core::CryptoRng;
use tracing::{debug, trace};

/// HMAC key used to expand a seed into the master key.
const MASTER_KEY_HMAC: &[u8] = b"Bitcoin seed";

/// Size of a seed produced by [`generate_seed`].
pub const SEED_SIZE: usize = 64;

/// Size of the key field of a serialized extended key.
const KEY_FIELD_SIZE: usize = KEY_SIZE + 1;

/// Generate a random seed suitable for [`ExtendedKey::new_master`].
pub fn generate_seed<R: CryptoRng + ?Sized>(rng: &mut R) -> [u8; SEED_SIZE] {
    let mut seed = [0u8; SEED_SIZE];
    rng.fill_bytes(&mut seed);
    seed
}

#[derive(Clone, Eq, PartialEq)]
enum KeyMaterial {
    Private(SigningKey),
    Public(AffinePoint),
}

impl KeyMaterial {
    fn public_key(&self) -> &AffinePoint {
        match self {
            KeyMaterial::Private(signing_key) => signing_key.verifying_key(),
            KeyMaterial::Public(point) => point,
        }
    }
}

/// BIP32 extended key.
///
/// Either private (holding a [`SigningKey`]) or public (holding only the
/// point). Derivation never mutates a key; every step returns a new one.
#[derive(Clone, Eq, PartialEq)]
pub struct ExtendedKey {
    network: Network,
    depth: Depth,
    parent_fingerprint: KeyFingerprint,
    child_number: ChildNumber,
    chain_code: ChainCode,
    key: KeyMaterial,
}

impl ExtendedKey {
    /// Maximum depth of a key in the derivation tree.
    pub const MAX_DEPTH: Depth = Depth::MAX;

    /// Derive the mainnet master key from a seed.
    pub fn new_master(seed: &[u8]) -> Result<Self> {
        Self::new_master_for(Network::Mainnet, seed)
    }

    /// Derive the master key for `network` from a seed.
    ///
    /// Fails with [`Error::InvalidKey`] if the left half of
    /// `HMAC-SHA512("Bitcoin seed", seed)` is zero or not below the group
    /// order.
    pub fn new_master_for(network: Network, seed: &[u8]) -> Result<Self> {
        let (secret, chain_code) = split_i(&hmac_sha512(MASTER_KEY_HMAC, &[seed]));
        let signing_key = SigningKey::from_bytes(&secret).inspect_err(|_| {
            debug!(seed_len = seed.len(), "seed does not yield a valid master key");
        })?;

        let key = Self {
            network,
            depth: 0,
            parent_fingerprint: KeyFingerprint::default(),
            child_number: ChildNumber::default(),
            chain_code,
            key: KeyMaterial::Private(signing_key),
        };

        debug!(?network, fingerprint = ?key.fingerprint(), "derived master key");
        Ok(key)
    }

    /// Derive the child key at `child_number`.
    ///
    /// Hardened children require a private key. The derived key is private
    /// if and only if `self` is.
    pub fn child(&self, child_number: ChildNumber) -> Result<Self> {
        let public_key = self.public_key().to_sec1_bytes(true);

        let i = match (&self.key, child_number.is_hardened()) {
            (KeyMaterial::Public(_), true) => return Err(Error::CannotHardenPublic),
            (KeyMaterial::Private(signing_key), true) => hmac_sha512(
                &self.chain_code,
                &[&[0], &signing_key.to_bytes(), &child_number.to_bytes()],
            ),
            (_, false) => hmac_sha512(&self.chain_code, &[&public_key, &child_number.to_bytes()]),
        };

        let depth = self.depth.checked_add(1).ok_or(Error::MaxDepthExceeded)?;
        let (tweak, chain_code) = split_i(&i);

        // IL >= n makes the child invalid; callers move on to the next index.
        let tweak = Scalar::from_bytes(&tweak).ok_or(Error::InvalidKey)?;

        let key = match &self.key {
            KeyMaterial::Private(signing_key) => {
                KeyMaterial::Private(SigningKey::from_scalar(&tweak + signing_key.as_scalar())?)
            }
            KeyMaterial::Public(point) => {
                let child = AffinePoint::mul_by_generator(&tweak)?.add(point)?;

                if child.is_identity() {
                    return Err(Error::InvalidKey);
                }

                KeyMaterial::Public(child)
            }
        };

        trace!(
            depth,
            index = child_number.index(),
            hardened = child_number.is_hardened(),
            private = self.is_private(),
            "derived child key"
        );

        Ok(Self {
            network: self.network,
            depth,
            parent_fingerprint: fingerprint_of(&public_key),
            child_number,
            chain_code,
            key,
        })
    }

    /// Derive the descendant at `path`, applying [`ExtendedKey::child`]
    /// once per path element. The empty path returns a copy of `self`.
    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self> {
        path.iter()
            .try_fold(self.clone(), |key, &child_number| key.child(child_number))
    }

    /// Parse `path` (for example `"m/44'/0'/0'"`) and derive the key at it.
    pub fn child_from_path(&self, path: &str) -> Result<Self> {
        self.derive_path(&path.parse()?)
    }

    /// Public projection of this key: same chain code and tree position,
    /// with the private scalar dropped.
    pub fn to_public(&self) -> Result<Self> {
        match &self.key {
            KeyMaterial::Public(_) => Err(Error::AlreadyPublic),
            KeyMaterial::Private(signing_key) => Ok(Self {
                key: KeyMaterial::Public(signing_key.verifying_key().clone()),
                ..self.clone()
            }),
        }
    }

    /// Network this key belongs to.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Version prefix used when serializing this key.
    pub fn version(&self) -> Version {
        Version::new(self.network, self.is_private())
    }

    /// Depth in the derivation tree; the master key has depth 0.
    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// Fingerprint of the parent key, zero for the master key.
    pub fn parent_fingerprint(&self) -> KeyFingerprint {
        self.parent_fingerprint
    }

    /// Child number this key was derived at, zero for the master key.
    pub fn child_number(&self) -> ChildNumber {
        self.child_number
    }

    /// Chain code.
    pub fn chain_code(&self) -> &ChainCode {
        &self.chain_code
    }

    /// Does this key hold a private scalar?
    pub fn is_private(&self) -> bool {
        matches!(self.key, KeyMaterial::Private(_))
    }

    /// Public key point.
    pub fn public_key(&self) -> &AffinePoint {
        self.key.public_key()
    }

    /// Private key, if this is a private extended key.
    pub fn private_key(&self) -> Option<&SigningKey> {
        match &self.key {
            KeyMaterial::Private(signing_key) => Some(signing_key),
            KeyMaterial::Public(_) => None,
        }
    }

    /// HASH160 of the compressed public key.
    pub fn identifier(&self) -> [u8; 20] {
        hash160(&self.public_key().to_sec1_bytes(true))
    }

    /// First four bytes of [`ExtendedKey::identifier`], as recorded in the
    /// children of this key.
    pub fn fingerprint(&self) -> KeyFingerprint {
        fingerprint_of(&self.public_key().to_sec1_bytes(true))
    }

    /// Serialize as the 78-byte payload followed by its 4-byte checksum.
    pub fn to_bytes(&self) -> [u8; SERIALIZED_SIZE] {
        let mut out = [0u8; SERIALIZED_SIZE];
        out[..4].copy_from_slice(&self.version().to_bytes());
        out[4] = self.depth;
        out[5..9].copy_from_slice(&self.parent_fingerprint);
        out[9..13].copy_from_slice(&self.child_number.to_bytes());
        out[13..45].copy_from_slice(&self.chain_code);

        match &self.key {
            KeyMaterial::Private(signing_key) => out[46..78].copy_from_slice(&signing_key.to_bytes()),
            KeyMaterial::Public(point) => {
                let sec1 = point.to_sec1_bytes(true);
                out[45..45 + sec1.len()].copy_from_slice(&sec1);
            }
        }

        let checksum = hash256(&out[..PAYLOAD_SIZE]);
        out[PAYLOAD_SIZE..].copy_from_slice(&checksum[..4]);
        out
    }

    /// Parse the 82-byte serialization produced by
    /// [`ExtendedKey::to_bytes`].
    ///
    /// Checks, in order: the length ([`Error::BadLength`]), the checksum
    /// ([`Error::BadChecksum`]), the version ([`Error::UnknownVersion`]) and
    /// the key material ([`Error::InvalidKey`]).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SERIALIZED_SIZE {
            return Err(Error::BadLength);
        }

        let (payload, checksum) = bytes.split_at(PAYLOAD_SIZE);

        if hash256(payload)[..4] != *checksum {
            return Err(Error::BadChecksum);
        }

        let version = Version::from_bytes(array(&payload[..4]))?;
        let depth = payload[4];
        let parent_fingerprint = array(&payload[5..9]);
        let child_number = ChildNumber(u32::from_be_bytes(array(&payload[9..13])));
        let chain_code = array(&payload[13..45]);
        let key_field: [u8; KEY_FIELD_SIZE] = array(&payload[45..]);

        if depth == 0 && (parent_fingerprint != KeyFingerprint::default() || child_number.0 != 0) {
            return Err(Error::InvalidKey);
        }

        let key = if version.is_private() {
            let (prefix, secret) = key_field.split_at(1);

            if prefix != [0] {
                return Err(Error::InvalidKey);
            }

            KeyMaterial::Private(SigningKey::from_bytes(secret)?)
        } else {
            KeyMaterial::Public(
                AffinePoint::from_sec1_bytes(&key_field).map_err(|_| Error::InvalidKey)?,
            )
        };

        Ok(Self {
            network: version.network(),
            depth,
            parent_fingerprint,
            child_number,
            chain_code,
            key,
        })
    }
}

impl fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("version", &self.version())
            .field("depth", &self.depth)
            .field("parent_fingerprint", &self.parent_fingerprint)
            .field("child_number", &self.child_number)
            .field("public_key", self.public_key())
            .finish_non_exhaustive()
    }
}

/// Base58Check encoding of [`ExtendedKey::to_bytes`].
impl fmt::Display for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded: String = bs58::encode(self.to_bytes()).into_string();
        f.write_str(&encoded)
    }
}

impl FromStr for ExtendedKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        bs58::decode(s)
            .into_vec()
            .map_err(Error::from)
            .and_then(|bytes| Self::from_bytes(&bytes))
            .inspect_err(|err| debug!(%err, "failed to parse extended key"))
    }
}

impl TryFrom<&[u8]> for ExtendedKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

/// Split `I` into `IL` (key material) and `IR` (chain code).
fn split_i(i: &[u8; 64]) -> (FieldBytes, ChainCode) {
    let (il, ir) = i.split_at(KEY_SIZE);
    (array(il), array(ir))
}

fn fingerprint_of(public_key: &[u8]) -> KeyFingerprint {
    array(&hash160(public_key)[..4])
}

/// Copy a slice whose length is fixed by construction into an array.
fn array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}
