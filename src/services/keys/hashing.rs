use blake2::digest::consts::U32;
use blake2::{Blake2b, Blake2b512, Digest};

type Blake2b256 = Blake2b<U32>;

/// BLAKE2b with a 256-bit output over the concatenation of `parts`.
pub fn blake2_256(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// BLAKE2b with a 512-bit output over the concatenation of `parts`.
pub fn blake2_512(parts: &[&[u8]]) -> [u8; 64] {
    let mut hasher = Blake2b512::new();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; 64];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// One hard derivation step in the Substrate HDKD scheme:
/// `blake2b-256(SCALE(tag) || seed || chain_code)`.
pub fn hdkd(tag: &str, seed: &[u8; 32], chain_code: &[u8; 32]) -> [u8; 32] {
    blake2_256(&[scale_encode_str(tag).as_slice(), seed, chain_code])
}

/// SCALE encoding of a string: compact length prefix followed by the UTF-8 bytes.
pub fn scale_encode_str(value: &str) -> Vec<u8> {
    let bytes = value.as_bytes();
    let mut out = compact_len(bytes.len());
    out.extend_from_slice(bytes);
    out
}

fn compact_len(len: usize) -> Vec<u8> {
    let len = len as u64;
    match len {
        0..=0x3f => vec![(len as u8) << 2],
        0x40..=0x3fff => (((len as u16) << 2) | 0b01).to_le_bytes().to_vec(),
        0x4000..=0x3fff_ffff => (((len as u32) << 2) | 0b10).to_le_bytes().to_vec(),
        _ => {
            // big-integer mode: byte count minus four in the upper six bits
            let used = 8 - (len.leading_zeros() / 8) as usize;
            let mut out = vec![(((used - 4) as u8) << 2) | 0b11];
            out.extend_from_slice(&len.to_le_bytes()[..used]);
            out
        }
    }
}
