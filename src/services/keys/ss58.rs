// SS58 address codec.
//
// address = base58(prefix || public_key || checksum)
// checksum = blake2b-512("SS58PRE" || prefix || public_key)[..2]
//
// Prefixes 0..=63 take one byte. 64..=16383 take two bytes, the first with
// 0b01 in its top bits.

use super::error::{KeyError, KeyResult};
use super::hashing::blake2_512;

const CHECKSUM_PREAMBLE: &[u8] = b"SS58PRE";
const CHECKSUM_LEN: usize = 2;

/// Generic Substrate network prefix.
pub const GENERIC_SUBSTRATE_PREFIX: u16 = 42;
/// Largest prefix representable in the two-byte form.
pub const MAX_PREFIX: u16 = 0x3fff;

/// Public key sizes accepted by the codec: ed25519/sr25519 and compressed secp256k1.
pub const PUBLIC_KEY_LENGTHS: [usize; 2] = [32, 33];

pub fn encode_ss58(prefix: u16, public_key: &[u8]) -> KeyResult<String> {
    if !PUBLIC_KEY_LENGTHS.contains(&public_key.len()) {
        return Err(KeyError::InvalidPublicKeyLength(public_key.len()));
    }

    let mut buffer = encode_prefix(prefix)?;
    buffer.extend_from_slice(public_key);
    let checksum = checksum(&buffer);
    buffer.extend_from_slice(&checksum);

    Ok(bs58::encode(buffer).into_string())
}

pub fn decode_ss58(address: &str) -> KeyResult<(u16, Vec<u8>)> {
    let data = bs58::decode(address)
        .into_vec()
        .map_err(|e| KeyError::InvalidEncoding(e.to_string()))?;

    if data.len() < 1 + CHECKSUM_LEN {
        return Err(KeyError::InvalidLength(data.len()));
    }

    let (body, claimed) = data.split_at(data.len() - CHECKSUM_LEN);
    if checksum(body).as_slice() != claimed {
        return Err(KeyError::ChecksumMismatch);
    }

    let (prefix, prefix_len) = decode_prefix(body)?;
    let public_key = &body[prefix_len..];
    if !PUBLIC_KEY_LENGTHS.contains(&public_key.len()) {
        return Err(KeyError::InvalidLength(public_key.len()));
    }

    Ok((prefix, public_key.to_vec()))
}

/// Whether `address` decodes cleanly under the given network prefix.
pub fn is_valid_address(address: &str, prefix: u16) -> bool {
    matches!(decode_ss58(address), Ok((decoded, _)) if decoded == prefix)
}

fn checksum(body: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = blake2_512(&[CHECKSUM_PREAMBLE, body]);
    [hash[0], hash[1]]
}

fn encode_prefix(prefix: u16) -> KeyResult<Vec<u8>> {
    match prefix {
        0..=63 => Ok(vec![prefix as u8]),
        64..=MAX_PREFIX => {
            let first = (((prefix & 0b0000_0000_1111_1100) as u8) >> 2) | 0b0100_0000;
            let second = ((prefix >> 8) as u8) | (((prefix & 0b0000_0000_0000_0011) as u8) << 6);
            Ok(vec![first, second])
        }
        _ => Err(KeyError::InvalidPrefix(format!(
            "{} exceeds the maximum of {}",
            prefix, MAX_PREFIX
        ))),
    }
}

fn decode_prefix(body: &[u8]) -> KeyResult<(u16, usize)> {
    match body {
        [first @ 0..=63, ..] => Ok((*first as u16, 1)),
        [first @ 64..=127, second, ..] => {
            let lower = (*first << 2) | (*second >> 6);
            let upper = *second & 0b0011_1111;
            Ok(((lower as u16) | ((upper as u16) << 8), 2))
        }
        [64..=127] | [] => Err(KeyError::InvalidLength(body.len())),
        [first, ..] => Err(KeyError::InvalidPrefix(format!(
            "reserved leading byte 0x{:02x}",
            first
        ))),
    }
}
