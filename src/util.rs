use thiserror::Error;

use crate::sha1::{BLOCK_LENGTH, DIGEST_LENGTH, Digest};

pub mod io;

pub fn to_hex(bytes: &[u8]) -> String {
     bytes.iter().map(|&byte| format!("{byte:02x}")).collect::<Vec<_>>().join("")
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("hex string must have an even number of characters but has {0}")]
    OddLength(usize),
    #[error("digest must be 20 bytes but hex string encodes {0}")]
    InvalidDigestLength(usize),
    #[error("invalid hex digit {value:?} at position {pos}")]
    InvalidHexDigit { pos: usize, value: char },
}

fn hex_value(pos: usize, byte: u8) -> Result<u8, ConversionError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(ConversionError::InvalidHexDigit { pos, value: char::from(byte) }),
    }
}

/// Parses a 40 character hex string (either case) into a digest.
pub fn from_hex(text: &str) -> Result<Digest, ConversionError> {
    let text = text.trim().as_bytes();
    if text.len() % 2 != 0 {
        return Err(ConversionError::OddLength(text.len()));
    }
    if text.len() != DIGEST_LENGTH * 2 {
        return Err(ConversionError::InvalidDigestLength(text.len() / 2));
    }
    let mut digest: Digest = [0; DIGEST_LENGTH];
    for (i, pair) in text.chunks_exact(2).enumerate() {
        let high = hex_value(i * 2, pair[0])?;
        let low = hex_value(i * 2 + 1, pair[1])?;
        digest[i] = (high << 4) | low;
    }
    Ok(digest)
}

/// Size of the padded message for a `length` byte input: the smallest
/// multiple of 64 that leaves room for the `0x80` terminator and the
/// 8 byte bit count, i.e. `64 * ceil((length + 9) / 64)`.
///
/// Saturates instead of overflowing for lengths past the 2^61 - 1 bound,
/// where the result no longer describes a real buffer anyway.
pub fn padded_length(length: u64) -> u64 {
    let block = BLOCK_LENGTH as u64;
    length.saturating_add(9).div_ceil(block).saturating_mul(block)
}

pub fn pad_message(bytes: &[u8]) -> Vec<u8> {
    let n = bytes.len();
    let total = padded_length(n as u64) as usize;
    // bit count field truncates past 2^61 - 1 bytes
    let message_length: u64 = (n as u64).wrapping_mul(8);

    let mut message: Vec<u8> = Vec::with_capacity(total);
    message.extend_from_slice(bytes);
    message.push(0x80);
    message.resize(total - 8, 0);
    message.extend(message_length.to_be_bytes());
    message
}

/// Reads the 16 big-endian words of a block into the front of an `N` word
/// array, leaving the rest zeroed for the caller to expand.
pub fn to_words<const N: usize>(block: &[u8]) -> [u32; N] {
    const { assert!(N >= 16) };
    debug_assert_eq!(block.len(), BLOCK_LENGTH);

    let mut w: [u32; N] = [0; N];
    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    w
}

pub fn to_bytes(words: &[u32; 5]) -> Digest {
    let mut digest: Digest = [0; DIGEST_LENGTH];
    for (i, word) in words.iter().enumerate() {
        digest[i*4..(i+1)*4].copy_from_slice(&word.to_be_bytes());
    }
    digest
}
