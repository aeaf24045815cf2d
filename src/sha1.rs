use thiserror::Error;
use tracing::trace;

use crate::util::{pad_message, to_bytes, to_words};

pub const DIGEST_LENGTH: usize = 20;
pub const BLOCK_LENGTH: usize = 64;

pub type Digest = [u8; DIGEST_LENGTH];

const H: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];
const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    #[error("message is absent")]
    MissingMessage,
    #[error("output buffer is absent")]
    MissingOutput,
    #[error("length {length} exceeds the {available} bytes of the message")]
    LengthExceedsMessage { length: u64, available: u64 },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Sha1Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(Argument),
}

/// Numeric status of a [`digest`] call: `0` on success, `-1` otherwise.
pub fn status(result: &Result<(), Sha1Error>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(Sha1Error::InvalidArgument(_)) => -1,
    }
}

fn schedule(block: &[u8]) -> [u32; 80] {
    let mut w: [u32; 80] = to_words::<80>(block);
    for i in 16..80 {
        w[i] = (w[i-3] ^ w[i-8] ^ w[i-14] ^ w[i-16]).rotate_left(1);
    }
    w
}

fn compress(state: [u32; 5], block: &[u8]) -> [u32; 5] {
    let w = schedule(block);
    let [mut a, mut b, mut c, mut d, mut e] = state;

    for (i, &word) in w.iter().enumerate() {
        let (f, k) = match i {
            0..=19 => (d ^ (b & (c ^ d)), K[0]),
            20..=39 => (b ^ c ^ d, K[1]),
            40..=59 => ((b & c) | (d & (b | c)), K[2]),
            _ => (b ^ c ^ d, K[3]),
        };
        let temp = a.rotate_left(5)
                         .wrapping_add(f)
                         .wrapping_add(e)
                         .wrapping_add(k)
                         .wrapping_add(word);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    [
        state[0].wrapping_add(a),
        state[1].wrapping_add(b),
        state[2].wrapping_add(c),
        state[3].wrapping_add(d),
        state[4].wrapping_add(e),
    ]
}

/// SHA-1 digest of `bytes` as specified by FIPS 180-4.
///
/// One shot: the whole message is padded on the heap and folded block by
/// block from the fixed IVs. Not meant for bulk hashing.
pub fn sha1_hash(bytes: &[u8]) -> Digest {
    let message = pad_message(bytes);
    trace!(length = bytes.len(), blocks = message.len() / BLOCK_LENGTH, "hashing message");

    let state = message.chunks_exact(BLOCK_LENGTH).fold(H, compress);
    to_bytes(&state)
}

/// Writes the digest of the first `length` bytes of `message` into `output`.
///
/// Absent buffers, or a `length` longer than `message`, are rejected with
/// [`Sha1Error::InvalidArgument`] before anything is read or written, so
/// `output` keeps its previous contents on failure.
pub fn digest(message: Option<&[u8]>, length: u64, output: Option<&mut Digest>) -> Result<(), Sha1Error> {
    let message = message.ok_or(Sha1Error::InvalidArgument(Argument::MissingMessage))?;
    let output = output.ok_or(Sha1Error::InvalidArgument(Argument::MissingOutput))?;

    let available = message.len() as u64;
    if length > available {
        return Err(Sha1Error::InvalidArgument(Argument::LengthExceedsMessage { length, available }));
    }

    *output = sha1_hash(&message[..length as usize]);
    Ok(())
}
