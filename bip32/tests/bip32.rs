//! BIP32 test vectors and derivation properties.

use bip32::{ChildNumber, DerivationPath, Error, ExtendedKey, Network};
use proptest::prelude::*;

struct TestVector {
    seed: &'static str,
    nodes: &'static [(&'static str, &'static str, &'static str)],
}

/// Test vectors from BIP32: `(path, xprv, xpub)` per node.
const TEST_VECTORS: &[TestVector] = &[
    TestVector {
        seed: "000102030405060708090a0b0c0d0e0f",
        nodes: &[
            (
                "m",
                "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi",
                "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ29ESFjqJoCu1Rupje8YtGqsefD265TMg7usUDFdp6W1EGMcet8",
            ),
            (
                "m/0h",
                "xprv9uHRZZhk6KAJC1avXpDAp4MDc3sQKNxDiPvvkX8Br5ngLNv1TxvUxt4cV1rGL5hj6KCesnDYUhd7oWgT11eZG7XnxHrnYeSvkzY7d2bhkJ7",
                "xpub68Gmy5EdvgibQVfPdqkBBCHxA5htiqg55crXYuXoQRKfDBFA1WEjWgP6LHhwBZeNK1VTsfTFUHCdrfp1bgwQ9xv5ski8PX9rL2dZXvgGDnw",
            ),
            (
                "m/0h/1",
                "xprv9wTYmMFdV23N2TdNG573QoEsfRrWKQgWeibmLntzniatZvR9BmLnvSxqu53Kw1UmYPxLgboyZQaXwTCg8MSY3H2EU4pWcQDnRnrVA1xe8fs",
                "xpub6ASuArnXKPbfEwhqN6e3mwBcDTgzisQN1wXN9BJcM47sSikHjJf3UFHKkNAWbWMiGj7Wf5uMash7SyYq527Hqck2AxYysAA7xmALppuCkwQ",
            ),
            (
                "m/0h/1/2h",
                "xprv9z4pot5VBttmtdRTWfWQmoH1taj2axGVzFqSb8C9xaxKymcFzXBDptWmT7FwuEzG3ryjH4ktypQSAewRiNMjANTtpgP4mLTj34bhnZX7UiM",
                "xpub6D4BDPcP2GT577Vvch3R8wDkScZWzQzMMUm3PWbmWvVJrZwQY4VUNgqFJPMM3No2dFDFGTsxxpG5uJh7n7epu4trkrX7x7DogT5Uv6fcLW5",
            ),
            (
                "m/0h/1/2h/2",
                "xprvA2JDeKCSNNZky6uBCviVfJSKyQ1mDYahRjijr5idH2WwLsEd4Hsb2Tyh8RfQMuPh7f7RtyzTtdrbdqqsunu5Mm3wDvUAKRHSC34sJ7in334",
                "xpub6FHa3pjLCk84BayeJxFW2SP4XRrFd1JYnxeLeU8EqN3vDfZmbqBqaGJAyiLjTAwm6ZLRQUMv1ZACTj37sR62cfN7fe5JnJ7dh8zL4fiyLHV",
            ),
            (
                "m/0h/1/2h/2/1000000000",
                "xprvA41z7zogVVwxVSgdKUHDy1SKmdb533PjDz7J6N6mV6uS3ze1ai8FHa8kmHScGpWmj4WggLyQjgPie1rFSruoUihUZREPSL39UNdE3BBDu76",
                "xpub6H1LXWLaKsWFhvm6RVpEL9P4KfRZSW7abD2ttkWP3SSQvnyA8FSVqNTEcYFgJS2UaFcxupHiYkro49S8yGasTvXEYBVPamhGW6cFJodrTHy",
            ),
        ],
    },
    TestVector {
        seed: "fffcf9f6f3f0edeae7e4e1dedbd8d5d2cfccc9c6c3c0bdbab7b4b1aeaba8a5a29f9c999693908d8a8784817e7b7875726f6c696663605d5a5754514e4b484542",
        nodes: &[
            (
                "m",
                "xprv9s21ZrQH143K31xYSDQpPDxsXRTUcvj2iNHm5NUtrGiGG5e2DtALGdso3pGz6ssrdK4PFmM8NSpSBHNqPqm55Qn3LqFtT2emdEXVYsCzC2U",
                "xpub661MyMwAqRbcFW31YEwpkMuc5THy2PSt5bDMsktWQcFF8syAmRUapSCGu8ED9W6oDMSgv6Zz8idoc4a6mr8BDzTJY47LJhkJ8UB7WEGuduB",
            ),
            (
                "m/0",
                "xprv9vHkqa6EV4sPZHYqZznhT2NPtPCjKuDKGY38FBWLvgaDx45zo9WQRUT3dKYnjwih2yJD9mkrocEZXo1ex8G81dwSM1fwqWpWkeS3v86pgKt",
                "xpub69H7F5d8KSRgmmdJg2KhpAK8SR3DjMwAdkxj3ZuxV27CprR9LgpeyGmXUbC6wb7ERfvrnKZjXoUmmDznezpbZb7ap6r1D3tgFxHmwMkQTPH",
            ),
            (
                "m/0/2147483647h",
                "xprv9wSp6B7kry3Vj9m1zSnLvN3xH8RdsPP1Mh7fAaR7aRLcQMKTR2vidYEeEg2mUCTAwCd6vnxVrcjfy2kRgVsFawNzmjuHc2YmYRmagcEPdU9",
                "xpub6ASAVgeehLbnwdqV6UKMHVzgqAG8Gr6riv3Fxxpj8ksbH9ebxaEyBLZ85ySDhKiLDBrQSARLq1uNRts8RuJiHjaDMBU4Zn9h8LZNnBC5y4a",
            ),
            (
                "m/0/2147483647h/1",
                "xprv9zFnWC6h2cLgpmSA46vutJzBcfJ8yaJGg8cX1e5StJh45BBciYTRXSd25UEPVuesF9yog62tGAQtHjXajPPdbRCHuWS6T8XA2ECKADdw4Ef",
                "xpub6DF8uhdarytz3FWdA8TvFSvvAh8dP3283MY7p2V4SeE2wyWmG5mg5EwVvmdMVCQcoNJxGoWaU9DCWh89LojfZ537wTfunKau47EL2dhHKon",
            ),
            (
                "m/0/2147483647h/1/2147483646h",
                "xprvA1RpRA33e1JQ7ifknakTFpgNXPmW2YvmhqLQYMmrj4xJXXWYpDPS3xz7iAxn8L39njGVyuoseXzU6rcxFLJ8HFsTjSyQbLYnMpCqE2VbFWc",
                "xpub6ERApfZwUNrhLCkDtcHTcxd75RbzS1ed54G1LkBUHQVHQKqhMkhgbmJbZRkrgZw4koxb5JaHWkY4ALHY2grBGRjaDMzQLcgJvLJuZZvRcEL",
            ),
            (
                "m/0/2147483647h/1/2147483646h/2",
                "xprvA2nrNbFZABcdryreWet9Ea4LvTJcGsqrMzxHx98MMrotbir7yrKCEXw7nadnHM8Dq38EGfSh6dqA9QWTyefMLEcBYJUuekgW4BYPJcr9E7j",
                "xpub6FnCn6nSzZAw5Tw7cgR9bi15UV96gLZhjDstkXXxvCLsUXBGXPdSnLFbdpq8p9HmGsApME5hQTZ3emM2rnY5agb9rXpVGyy3bdW6EEgAtqt",
            ),
        ],
    },
    // Retention of leading zeros in the private key.
    TestVector {
        seed: "4b381541583be4423346c643850da4b320e46a87ae3d2a4e6da11eba819cd4acba45d239319ac14f863b8d5ab5a0d0c64d2e8a1e7d1457df2e5a3c51c73235be",
        nodes: &[
            (
                "m",
                "xprv9s21ZrQH143K25QhxbucbDDuQ4naNntJRi4KUfWT7xo4EKsHt2QJDu7KXp1A3u7Bi1j8ph3EGsZ9Xvz9dGuVrtHHs7pXeTzjuxBrCmmhgC6",
                "xpub661MyMwAqRbcEZVB4dScxMAdx6d4nFc9nvyvH3v4gJL378CSRZiYmhRoP7mBy6gSPSCYk6SzXPTf3ND1cZAceL7SfJ1Z3GC8vBgp2epUt13",
            ),
            (
                "m/0h",
                "xprv9uPDJpEQgRQfDcW7BkF7eTya6RPxXeJCqCJGHuCJ4GiRVLzkTXBAJMu2qaMWPrS7AANYqdq6vcBcBUdJCVVFceUvJFjaPdGZ2y9WACViL4L",
                "xpub68NZiKmJWnxxS6aaHmn81bvJeTESw724CRDs6HbuccFQN9Ku14VQrADWgqbhhTHBaohPX4CjNLf9fq9MYo6oDaPPLPxSb7gwQN3ih19Zm4Y",
            ),
        ],
    },
];

fn master(seed: &str) -> ExtendedKey {
    ExtendedKey::new_master(&hex::decode(seed).unwrap()).unwrap()
}

#[test]
fn bip32_test_vectors() {
    for vector in TEST_VECTORS {
        let root = master(vector.seed);

        for &(path, xprv, xpub) in vector.nodes {
            let key = root.child_from_path(path).unwrap();
            assert_eq!(key.to_string(), xprv, "{path}");

            let public = key.to_public().unwrap();
            assert_eq!(public.to_string(), xpub, "{path}");

            assert_eq!(xprv.parse::<ExtendedKey>().unwrap(), key, "{path}");
            assert_eq!(xpub.parse::<ExtendedKey>().unwrap(), public, "{path}");
        }
    }
}

#[test]
fn public_derivation_matches_private() {
    let root = master(TEST_VECTORS[1].seed);
    let path: DerivationPath = "m/0/1/2".parse().unwrap();

    let via_private = root.derive_path(&path).unwrap().to_public().unwrap();
    let via_public = root.to_public().unwrap().derive_path(&path).unwrap();
    assert_eq!(via_private, via_public);
}

#[test]
fn public_child_of_parsed_xpub() {
    let parent: ExtendedKey = "xpub6D4BDPcP2GT577Vvch3R8wDkScZWzQzMMUm3PWbmWvVJrZwQY4VUNgqFJPMM3No2dFDFGTsxxpG5uJh7n7epu4trkrX7x7DogT5Uv6fcLW5"
        .parse()
        .unwrap();

    let child = parent.child(ChildNumber(2)).unwrap();
    assert_eq!(
        child.to_string(),
        "xpub6FHa3pjLCk84BayeJxFW2SP4XRrFd1JYnxeLeU8EqN3vDfZmbqBqaGJAyiLjTAwm6ZLRQUMv1ZACTj37sR62cfN7fe5JnJ7dh8zL4fiyLHV"
    );
    assert_eq!(child.parent_fingerprint(), parent.fingerprint());
    assert_eq!(child.depth(), parent.depth() + 1);
}

#[test]
fn path_and_child_agree() {
    let root = master(TEST_VECTORS[0].seed);
    assert_eq!(
        root.child_from_path("m/0").unwrap(),
        root.child(ChildNumber(0)).unwrap()
    );
    assert_eq!(root.child_from_path("m").unwrap(), root);
}

#[test]
fn key_accessors() {
    let root = master(TEST_VECTORS[0].seed);
    let child = root.child_from_path("m/0'").unwrap();

    assert!(child.is_private());
    assert_eq!(child.network(), Network::Mainnet);
    assert_eq!(child.child_number(), ChildNumber(0x8000_0000));
    assert_eq!(child.parent_fingerprint(), root.fingerprint());
    assert_eq!(&child.identifier()[..4], child.fingerprint());
    assert_eq!(
        child.private_key().unwrap().verifying_key(),
        child.public_key()
    );

    let public = child.to_public().unwrap();
    assert!(public.private_key().is_none());
    assert_eq!(public.public_key(), child.public_key());
    assert_eq!(public.chain_code(), child.chain_code());
}

#[test]
fn hardened_child_of_public_key() {
    let public = master(TEST_VECTORS[0].seed).to_public().unwrap();
    assert_eq!(
        public.child(ChildNumber(0x8000_0000)),
        Err(Error::CannotHardenPublic)
    );
    assert_eq!(public.child_from_path("m/1/2'"), Err(Error::CannotHardenPublic));
}

#[test]
fn public_projection_twice() {
    let public = master(TEST_VECTORS[0].seed).to_public().unwrap();
    assert_eq!(public.to_public(), Err(Error::AlreadyPublic));
}

#[test]
fn malformed_paths() {
    let root = master(TEST_VECTORS[0].seed);
    assert_eq!(root.child_from_path("0/1"), Err(Error::BadPathSyntax));
    assert_eq!(root.child_from_path("m/abc"), Err(Error::BadPathSyntax));
    assert_eq!(root.child_from_path("m/2147483648"), Err(Error::BadPathSyntax));
}

#[test]
fn malformed_strings() {
    assert_eq!("0OIl".parse::<ExtendedKey>(), Err(Error::Base58));
    assert_eq!("".parse::<ExtendedKey>(), Err(Error::BadLength));
    assert_eq!("xprv".parse::<ExtendedKey>(), Err(Error::BadLength));

    // Last character changed: same length, broken checksum.
    let mut xprv = String::from(TEST_VECTORS[0].nodes[0].1);
    xprv.pop();
    xprv.push('j');
    assert_eq!(xprv.parse::<ExtendedKey>(), Err(Error::BadChecksum));
}

/// Overwrite `bytes[offset]` and recompute the trailing checksum.
fn patch_payload(key: &ExtendedKey, offset: usize, value: u8) -> Vec<u8> {
    let mut bytes = key.to_bytes().to_vec();
    bytes[offset] = value;
    let checksum = bip32::hash256(&bytes[..bip32::PAYLOAD_SIZE]);
    bytes[bip32::PAYLOAD_SIZE..].copy_from_slice(&checksum[..4]);
    bytes
}

#[test]
fn master_key_must_be_consistent() {
    let root = master(TEST_VECTORS[0].seed);
    let public = root.to_public().unwrap();

    for key in [&root, &public] {
        // Depth 0 with a non-zero parent fingerprint.
        assert_eq!(
            ExtendedKey::from_bytes(&patch_payload(key, 5, 0x01)),
            Err(Error::InvalidKey)
        );

        // Depth 0 with a non-zero child number.
        assert_eq!(
            ExtendedKey::from_bytes(&patch_payload(key, 12, 0x01)),
            Err(Error::InvalidKey)
        );

        // The unmodified master still parses.
        assert_eq!(&ExtendedKey::from_bytes(&key.to_bytes()).unwrap(), key);
    }

    // Non-zero parent fingerprint and child number are fine below the root.
    let child = root.child_from_path("m/0h").unwrap();
    assert_eq!(child.depth(), 1);
    assert_eq!(ExtendedKey::from_bytes(&child.to_bytes()).unwrap(), child);
}

prop_compose! {
    fn derivation_path()(path in prop::collection::vec(any::<u32>(), 0..3)) -> DerivationPath {
        path.into_iter().map(ChildNumber).collect()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn serialization_round_trip(
        seed in prop::collection::vec(any::<u8>(), 16..=64),
        path in derivation_path(),
    ) {
        let key = ExtendedKey::new_master(&seed)
            .and_then(|root| root.derive_path(&path))
            .unwrap();

        prop_assert_eq!(ExtendedKey::from_bytes(&key.to_bytes()).unwrap(), key.clone());
        prop_assert_eq!(key.to_string().parse::<ExtendedKey>().unwrap(), key.clone());

        let public = key.to_public().unwrap();
        prop_assert_eq!(public.to_string().parse::<ExtendedKey>().unwrap(), public);
    }

    #[test]
    fn path_display_round_trip(path in derivation_path()) {
        prop_assert_eq!(path.to_string().parse::<DerivationPath>().unwrap(), path);
    }
}
