//! Deterministic ECDSA nonces as described in [RFC 6979 § 3.2][1],
//! instantiated with HMAC-SHA256.
//!
//! [1]: https://datatracker.ietf.org/doc/html/rfc6979#section-3.2

use super::bits2int;
use crate::{FieldBytes, Scalar, Secp256k1};
use alloc::vec::Vec;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Output size of the HMAC, in bytes.
const HASH_LEN: usize = 32;

/// Deterministically generate the ephemeral scalar `k` for signing `hash`
/// with `secret`.
///
/// `hash` is reduced exactly as it is for signing (`bits2octets`), and the
/// candidate stream is retried until it yields `1 <= k < n`.
pub fn generate_k(secret: &Scalar, hash: &[u8]) -> Scalar {
    let order = Secp256k1::order();
    let order_len = order.bits().div_ceil(8) as usize;
    let h1 = bits2octets(hash);

    let mut drbg = HmacDrbg::new(&secret.to_bytes(), &h1);
    let mut t = Vec::with_capacity(order_len);

    loop {
        t.clear();
        while t.len() < order_len {
            drbg.fill_block(&mut t);
        }

        if let Some(k) = Scalar::from_uint(bits2int(&t)) {
            if !k.is_zero() {
                return k;
            }
        }

        drbg.reseed();
    }
}

/// `bits2int(hash) mod n`, as big endian bytes.
fn bits2octets(hash: &[u8]) -> FieldBytes {
    Scalar::from_uint_reduced(&bits2int(hash)).to_bytes()
}

/// HMAC_DRBG state `(K, V)` from RFC 6979 § 3.2 steps b. through h.
struct HmacDrbg {
    k: HmacSha256,
    v: [u8; HASH_LEN],
}

impl HmacDrbg {
    /// Steps b. through g.
    fn new(secret: &[u8], h1: &[u8]) -> Self {
        let mut drbg = Self {
            k: hmac_with_key(&[0x00; HASH_LEN]),
            v: [0x01; HASH_LEN],
        };

        for prefix in [0x00, 0x01] {
            let mut k = drbg.k.clone();
            k.update(&drbg.v);
            k.update(&[prefix]);
            k.update(secret);
            k.update(h1);
            drbg.k = hmac_with_key(&k.finalize().into_bytes());
            drbg.v = drbg.mac_v();
        }

        drbg
    }

    /// `V = HMAC_K(V)`, appending the new `V` to `out`.
    fn fill_block(&mut self, out: &mut Vec<u8>) {
        self.v = self.mac_v();
        out.extend_from_slice(&self.v);
    }

    /// Step h.3: `K = HMAC_K(V || 0x00)`, `V = HMAC_K(V)`.
    fn reseed(&mut self) {
        let mut k = self.k.clone();
        k.update(&self.v);
        k.update(&[0x00]);
        self.k = hmac_with_key(&k.finalize().into_bytes());
        self.v = self.mac_v();
    }

    fn mac_v(&self) -> [u8; HASH_LEN] {
        let mut k = self.k.clone();
        k.update(&self.v);
        k.finalize().into_bytes().into()
    }
}

fn hmac_with_key(key: &[u8]) -> HmacSha256 {
    HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any size")
}
