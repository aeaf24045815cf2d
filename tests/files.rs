use std::io::Write;

use compact_sha1::{InputError, hash_file, sha1_hash, to_hex};
use tempfile::{NamedTempFile, TempDir};

#[tokio::test]
async fn hashes_file_contents() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"The quick brown fox jumps over the lazy dog").unwrap();
    let hash = hash_file(file.path()).await.unwrap();
    assert_eq!(to_hex(&hash), "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12");
}

#[tokio::test]
async fn empty_file_hashes_like_empty_message() {
    let file = NamedTempFile::new().unwrap();
    assert_eq!(hash_file(file.path()).await.unwrap(), sha1_hash(b""));
}

#[tokio::test]
async fn many_files_hash_concurrently() {
    let dir = TempDir::new().unwrap();
    let mut paths = Vec::new();
    for i in 0..16usize {
        let path = dir.path().join(format!("{i}.bin"));
        std::fs::write(&path, vec![i as u8; i * 100]).unwrap();
        paths.push(path);
    }

    let tasks: Vec<_> = paths.iter().map(|p| tokio::spawn(hash_file(p.clone()))).collect();
    for (i, task) in tasks.into_iter().enumerate() {
        let hash = task.await.unwrap().unwrap();
        assert_eq!(hash, sha1_hash(&vec![i as u8; i * 100]), "file {i}");
    }
}

#[tokio::test]
async fn missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let result = hash_file(dir.path().join("nope")).await;
    assert!(matches!(result, Err(InputError::Read { .. })));
}
