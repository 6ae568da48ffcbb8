use polkadot_keys::services::keys::hashing::blake2_512;
use polkadot_keys::services::keys::{
    decode_ss58, derive_ed25519, derive_secp256k1, derive_sr25519, encode_ss58, is_valid_address,
    KeyError,
};

use crate::common::PICASSO_PREFIX;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Build an address from an arbitrary body, with a correct checksum.
fn address_with_body(body: &[u8]) -> String {
    let hash = blake2_512(&[&b"SS58PRE"[..], body]);
    let mut buffer = body.to_vec();
    buffer.extend_from_slice(&hash[..2]);
    bs58::encode(buffer).into_string()
}

// =============================================================================
// INTEGRATION TESTS - ROUND TRIP
// =============================================================================

#[test]
fn test_round_trip_for_every_curve() {
    let keys = vec![
        derive_ed25519("Alice").unwrap().public_key(),
        derive_sr25519(&["Alice", "stash"]).unwrap().public_key(),
        derive_secp256k1("Alice").unwrap().public_key(),
    ];

    for public_key in keys {
        for prefix in [0u16, 2, 42, PICASSO_PREFIX, 63, 64, 1284, 16383] {
            let address = encode_ss58(prefix, &public_key).unwrap();
            let (decoded_prefix, decoded_key) = decode_ss58(&address).unwrap();
            assert_eq!(decoded_prefix, prefix);
            assert_eq!(decoded_key, public_key);
        }
    }
}

#[test]
fn test_decode_reference_address() {
    let (prefix, public_key) =
        decode_ss58("5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY").unwrap();
    assert_eq!(prefix, 42);
    assert_eq!(
        hex::encode(public_key),
        "d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d"
    );
}

#[test]
fn test_validity_is_prefix_specific() {
    let address = "5wfmbM1KN4DCJeTP6jj9TqCAKKNApYNCG4zhwcweWhXZRo1j";
    assert!(is_valid_address(address, PICASSO_PREFIX));
    assert!(!is_valid_address(address, 42));
}

// =============================================================================
// INTEGRATION TESTS - CORRUPTION AND MALFORMED INPUT
// =============================================================================

#[test]
fn test_single_character_corruption_is_detected() {
    let address = derive_sr25519(&["Alice"])
        .unwrap()
        .to_ss58(PICASSO_PREFIX)
        .unwrap();
    let chars: Vec<char> = address.chars().collect();

    let mut mismatches = 0;
    for i in 0..chars.len() {
        let replacement = BASE58_ALPHABET
            .chars()
            .find(|c| *c != chars[i])
            .unwrap();
        let mut corrupted = chars.clone();
        corrupted[i] = replacement;
        let corrupted: String = corrupted.into_iter().collect();

        assert_eq!(
            decode_ss58(&corrupted),
            Err(KeyError::ChecksumMismatch),
            "position {} ('{}' -> '{}') was not rejected",
            i,
            chars[i],
            replacement
        );
        mismatches += 1;
    }

    println!("{}/{} corruptions rejected by checksum", mismatches, chars.len());
    assert_eq!(mismatches, chars.len());
}

#[test]
fn test_leading_character_corruption_is_detected() {
    let address = derive_sr25519(&["Alice"])
        .unwrap()
        .to_ss58(PICASSO_PREFIX)
        .unwrap();
    let first = address.chars().next().unwrap();

    for replacement in BASE58_ALPHABET.chars().filter(|c| *c != first) {
        let corrupted = format!("{}{}", replacement, &address[1..]);
        assert_eq!(
            decode_ss58(&corrupted),
            Err(KeyError::ChecksumMismatch),
            "leading '{}' was not rejected",
            replacement
        );
    }
}

#[test]
fn test_bad_body_length_with_valid_checksum() {
    let mut body = vec![42u8];
    body.extend_from_slice(&[7u8; 31]);
    assert_eq!(
        decode_ss58(&address_with_body(&body)),
        Err(KeyError::InvalidLength(31))
    );

    let mut body = vec![42u8];
    body.extend_from_slice(&[7u8; 34]);
    assert_eq!(
        decode_ss58(&address_with_body(&body)),
        Err(KeyError::InvalidLength(34))
    );
}

#[test]
fn test_reserved_prefix_byte_with_valid_checksum() {
    let mut body = vec![0x80u8];
    body.extend_from_slice(&[7u8; 32]);
    assert!(matches!(
        decode_ss58(&address_with_body(&body)),
        Err(KeyError::InvalidPrefix(_))
    ));
}

#[test]
fn test_non_base58_input() {
    for address in ["0OIl", "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQ0"] {
        assert!(matches!(
            decode_ss58(address),
            Err(KeyError::InvalidEncoding(_))
        ));
    }
}

#[test]
fn test_too_short_input() {
    assert_eq!(decode_ss58("1"), Err(KeyError::InvalidLength(1)));
    assert_eq!(decode_ss58(""), Err(KeyError::InvalidLength(0)));
}
