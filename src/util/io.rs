use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Path that stands for standard input.
pub const STDIN: &str = "-";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("unable to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("unable to read standard input: {0}")]
    Stdin(io::Error),
    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub fn is_stdin<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref() == Path::new(STDIN)
}

/// Reads a whole input into memory; `-` reads standard input to its end.
pub async fn read_input<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, InputError> {
    let path = path.as_ref();
    let bytes = if is_stdin(path) {
        let mut bytes = Vec::new();
        tokio::io::stdin().read_to_end(&mut bytes).await.map_err(InputError::Stdin)?;
        bytes
    } else {
        tokio::fs::read(path).await.map_err(|source| InputError::Read { path: path.to_path_buf(), source })?
    };
    debug!(path = %path.display(), length = bytes.len(), "read input");
    Ok(bytes)
}
