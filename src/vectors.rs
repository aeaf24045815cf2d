use std::fmt;

use tracing::{debug, warn};

use crate::sha1::{Digest, sha1_hash};
use crate::util::to_hex;

/// A message and its published SHA-1 digest.
/// See <https://www.di-mgt.com.au/sha_testvectors.html>.
#[derive(Debug, Clone, Copy)]
pub struct TestVector {
    pub message: &'static [u8],
    pub digest: Digest,
}

pub const VECTORS: [TestVector; 6] = [
    TestVector {
        message: b"The quick brown fox jumps over the lazy dog",
        digest: [0x2f, 0xd4, 0xe1, 0xc6, 0x7a, 0x2d, 0x28, 0xfc, 0xed, 0x84,
                 0x9e, 0xe1, 0xbb, 0x76, 0xe7, 0x39, 0x1b, 0x93, 0xeb, 0x12],
    },
    TestVector {
        message: b"The quick brown fox jumps over the lazy cog",
        digest: [0xde, 0x9f, 0x2c, 0x7f, 0xd2, 0x5e, 0x1b, 0x3a, 0xfa, 0xd3,
                 0xe8, 0x5a, 0x0b, 0xd1, 0x7d, 0x9b, 0x10, 0x0d, 0xb4, 0xb3],
    },
    TestVector {
        message: b"",
        digest: [0xda, 0x39, 0xa3, 0xee, 0x5e, 0x6b, 0x4b, 0x0d, 0x32, 0x55,
                 0xbf, 0xef, 0x95, 0x60, 0x18, 0x90, 0xaf, 0xd8, 0x07, 0x09],
    },
    TestVector {
        message: b"abc",
        digest: [0xa9, 0x99, 0x3e, 0x36, 0x47, 0x06, 0x81, 0x6a, 0xba, 0x3e,
                 0x25, 0x71, 0x78, 0x50, 0xc2, 0x6c, 0x9c, 0xd0, 0xd8, 0x9d],
    },
    TestVector {
        message: b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        digest: [0x84, 0x98, 0x3e, 0x44, 0x1c, 0x3b, 0xd2, 0x6e, 0xba, 0xae,
                 0x4a, 0xa1, 0xf9, 0x51, 0x29, 0xe5, 0xe5, 0x46, 0x70, 0xf1],
    },
    TestVector {
        message: b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        digest: [0xa4, 0x9b, 0x24, 0x46, 0xa0, 0x2c, 0x64, 0x5b, 0xf4, 0x19,
                 0xf9, 0x95, 0xb6, 0x70, 0x91, 0x25, 0x3a, 0x04, 0xa2, 0x59],
    },
];

#[derive(Debug, Clone)]
pub struct VectorOutcome {
    pub index: usize,
    pub vector: TestVector,
    pub computed: Digest,
}

impl VectorOutcome {
    pub fn passed(&self) -> bool {
        self.computed == self.vector.digest
    }
}

impl fmt::Display for VectorOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "[TEST {} - {}]", self.index + 1, if self.passed() { "TRUE" } else { "FALSE" })?;
        writeln!(f, "STRING     : \"{}\"", String::from_utf8_lossy(self.vector.message))?;
        writeln!(f, "TEST VECTOR: {}", to_hex(&self.vector.digest))?;
        writeln!(f, "HASH RESULT: {}", to_hex(&self.computed))
    }
}

pub fn check(index: usize, vector: &TestVector) -> VectorOutcome {
    let outcome = VectorOutcome { index, vector: *vector, computed: sha1_hash(vector.message) };
    if outcome.passed() {
        debug!(index, "known answer matched");
    } else {
        warn!(index, expected = %to_hex(&vector.digest), computed = %to_hex(&outcome.computed), "known answer mismatch");
    }
    outcome
}

/// Runs every entry of [`VECTORS`].
pub fn self_test() -> Vec<VectorOutcome> {
    VECTORS.iter().enumerate().map(|(i, v)| check(i, v)).collect()
}
