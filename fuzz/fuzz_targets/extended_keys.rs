#![no_main]
use bip32::ExtendedKey;
use libfuzzer_sys::fuzz_target;

fn check_round_trip(key: &ExtendedKey) {
    assert_eq!(&ExtendedKey::from_bytes(&key.to_bytes()).unwrap(), key);
    assert_eq!(&key.to_string().parse::<ExtendedKey>().unwrap(), key);
}

fuzz_target!(|data: &[u8]| {
    if let Ok(key) = ExtendedKey::from_bytes(data) {
        assert_eq!(key.to_bytes().as_slice(), data);
        check_round_trip(&key);
    }

    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(key) = s.parse::<ExtendedKey>() {
            check_round_trip(&key);
        }
    }
});
