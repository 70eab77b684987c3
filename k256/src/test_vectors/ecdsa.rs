//! ECDSA/secp256k1 test vectors

use hex_literal::hex;

/// ECDSA verification test vector.
///
/// Integers are big endian and left padded to 32 bytes.
#[derive(Clone, Copy, Debug)]
pub struct VerificationVector {
    /// Message hash.
    pub z: [u8; 32],
    /// Signature `r`.
    pub r: [u8; 32],
    /// Signature `s`.
    pub s: [u8; 32],
    /// Public key x-coordinate.
    pub q_x: [u8; 32],
    /// Public key y-coordinate.
    pub q_y: [u8; 32],
    /// Should the signature verify?
    pub valid: bool,
}

/// ECDSA/secp256k1 verification vectors.
///
/// The last entry reuses the third signature with a different hash.
pub const ECDSA_VERIFICATION_VECTORS: &[VerificationVector] = &[
    VerificationVector {
        z: hex!("bc62d4b80d9e36da29c16c5d4d9f11731f36052c72401a76c23c0fb5a9b74423"),
        r: hex!("37206a0610995c58074999cb9767b87af4c4978db68c06e8e6e81d282047a7c6"),
        s: hex!("8ca63759c1157ebeaec0d03cecca119fc9a75bf8e6d0fa65c841c8e2738cdaec"),
        q_x: hex!("04519fac3d910ca7e7138f7013706f619fa8f033e6ec6e09370ea38cee6a7574"),
        q_y: hex!("82b51eab8c27c66e26c858a079bcdf4f1ada34cec420cafc7eac1a42216fb6c4"),
        valid: true,
    },
    VerificationVector {
        z: hex!("ec208baa0fc1c19f708a9ca96fdeff3ac3f230bb4a7ba4aede4942ad003c0f60"),
        r: hex!("ac8d1c87e51d0d441be8b3dd5b05c8795b48875dffe00b7ffcfac23010d3a395"),
        s: hex!("068342ceff8935ededd102dd876ffd6ba72d6a427a3edb13d26eb0781cb423c4"),
        q_x: hex!("887387e452b8eacc4acfde10d9aaf7f6d9a0f975aabb10d006e4da568744d06c"),
        q_y: hex!("61de6d95231cd89026e286df3b6ae4a894a3378e393e93a0f45b666329a0ae34"),
        valid: true,
    },
    VerificationVector {
        z: hex!("7c076ff316692a3d7eb3c3bb0f8b1488cf72e1afcd929e29307032997a838a3d"),
        r: hex!("00eff69ef2b1bd93a66ed5219add4fb51e11a840f404876325a1e8ffe0529a2c"),
        s: hex!("c7207fee197d27c618aea621406f6bf5ef6fca38681d82b2f06fddbdce6feab6"),
        q_x: hex!("887387e452b8eacc4acfde10d9aaf7f6d9a0f975aabb10d006e4da568744d06c"),
        q_y: hex!("61de6d95231cd89026e286df3b6ae4a894a3378e393e93a0f45b666329a0ae34"),
        valid: true,
    },
    VerificationVector {
        z: hex!("9c076ff316692a3d7eb3c3bb0f8b1488cf72e1afcd929e29307032997a838a3d"),
        r: hex!("00eff69ef2b1bd93a66ed5219add4fb51e11a840f404876325a1e8ffe0529a2c"),
        s: hex!("c7207fee197d27c618aea621406f6bf5ef6fca38681d82b2f06fddbdce6feab6"),
        q_x: hex!("887387e452b8eacc4acfde10d9aaf7f6d9a0f975aabb10d006e4da568744d06c"),
        q_y: hex!("61de6d95231cd89026e286df3b6ae4a894a3378e393e93a0f45b666329a0ae34"),
        valid: false,
    },
];

/// Deterministic signing test vector: SHA-256 of `msg` signed with `d`.
#[derive(Clone, Copy, Debug)]
pub struct SigningVector {
    /// Secret scalar.
    pub d: [u8; 32],
    /// Message (hashed with SHA-256 before signing).
    pub msg: &'static [u8],
    /// Expected RFC 6979 nonce.
    pub k: [u8; 32],
    /// Expected DER signature, in "low S" form.
    pub der: &'static [u8],
}

/// ECDSA/secp256k1 deterministic signing vectors.
pub const ECDSA_SIGNING_VECTORS: &[SigningVector] = &[
    SigningVector {
        d: hex!("0000000000000000000000000000000000000000000000000000000000000001"),
        msg: b"Satoshi Nakamoto",
        k: hex!("8f8a276c19f4149656b280621e358cce24f5f52542772691ee69063b74f15d15"),
        der: &hex!(
            "3045022100934b1ea10a4b3c1757e2b0c017d0b6143ce3c9a7e6a4a49860d7a6ab210ee3d8
             02202442ce9d2b916064108014783e923ec36b49743e2ffa1c4496f01a512aafd9e5"
        ),
    },
    SigningVector {
        d: hex!("0000000000000000000000000000000000000000000000000000000000000001"),
        msg: b"All those moments will be lost in time, like tears in rain. Time to die...",
        k: hex!("38aa22d72376b4dbc472e06c3ba403ee0a394da63fc58d88686c611aba98d6b3"),
        der: &hex!(
            "30450221008600dbd41e348fe5c9465ab92d23e3db8b98b873beecd930736488696438cb6b
             0220547fe64427496db33bf66019dacbf0039c04199abb0122918601db38a72cfc21"
        ),
    },
    SigningVector {
        d: hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140"),
        msg: b"Satoshi Nakamoto",
        k: hex!("33a19b60e25fb6f4435af53a3d42d493644827367e6453928554f43e49aa6f90"),
        der: &hex!(
            "3045022100fd567d121db66e382991534ada77a6bd3106f0a1098c231e47993447cd6af2d0
             02206b39cd0eb1bc8603e159ef5c20a5c8ad685a45b06ce9bebed3f153d10d93bed5"
        ),
    },
    SigningVector {
        d: hex!("f8b8af8ce3c7cca5e300d33939540c10d45ce001b8f252bfbc57ba0342904181"),
        msg: b"Alan Turing",
        k: hex!("525a82b70e67874398067543fd84c83d30c175fdc45fdeee082fe13b1d7cfdf1"),
        der: &hex!(
            "304402207063ae83e7f62bbb171798131b4a0564b956930092b33b07b395615d9ec7e15c
             022058dfcc1e00a35e1572f366ffe34ba0fc47db1e7189759b9fb233c5b05ab388ea"
        ),
    },
];
