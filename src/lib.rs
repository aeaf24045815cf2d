use std::path::Path;

mod sha1;
mod util;
pub mod vectors;

pub use crate::sha1::{Argument, BLOCK_LENGTH, DIGEST_LENGTH, Digest, Sha1Error, digest, sha1_hash, status};
pub use util::{ConversionError, from_hex, pad_message, padded_length, to_hex};
pub use util::io::{InputError, STDIN, is_stdin, read_input};

/// Reads `path` (or stdin for `-`) and hashes it off the async runtime.
pub async fn hash_file<P: AsRef<Path>>(path: P) -> Result<Digest, InputError> {
    let bytes = read_input(path).await?;
    let hash = tokio::task::spawn_blocking(move || sha1_hash(&bytes)).await?;
    Ok(hash)
}
