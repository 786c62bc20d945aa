use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Files are streamed through the hasher in chunks of this size.
pub const HASH_CHUNK_SIZE: usize = 64 * 1024; // 64KB

/// Content identity for files. Implementations must be deterministic: the
/// same bytes always produce the same digest string.
pub trait ContentHasher: Send + Sync {
    fn hash_file(&self, path: &Path) -> io::Result<String>;
}

/// BLAKE3 over the full byte stream, rendered as lowercase hex.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl ContentHasher for Blake3Hasher {
    fn hash_file(&self, path: &Path) -> io::Result<String> {
        let mut f = File::open(path)?;
        let mut hasher = blake3::Hasher::new();
        let mut buffer = vec![0; HASH_CHUNK_SIZE];

        loop {
            let bytes_read = f.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            hasher.update(&buffer[..bytes_read]);
        }

        Ok(hasher.finalize().to_hex().to_string())
    }
}

/// Hash a file with the default hasher. Use this to record a digest before a
/// file goes missing.
pub fn hash_file(path: impl AsRef<Path>) -> io::Result<String> {
    Blake3Hasher.hash_file(path.as_ref())
}

pub fn hash_data(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Recorded digests may have been uppercased by whatever stored them.
pub fn digests_match(recorded: &str, fresh: &str) -> bool {
    recorded.trim().eq_ignore_ascii_case(fresh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_hash_matches_in_memory_digest() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("cosmic.txt");
        fs::write(&path, "an apple a day").unwrap();

        assert_eq!(hash_file(&path).unwrap(), hash_data(b"an apple a day"));
    }

    #[test]
    fn test_hash_spans_multiple_chunks() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("large.bin");
        let data: Vec<u8> = (0..(HASH_CHUNK_SIZE * 3 + 17))
            .map(|i| (i % 251) as u8)
            .collect();
        fs::write(&path, &data).unwrap();

        let digest = hash_file(&path).unwrap();
        assert_eq!(digest, hash_data(&data));
        assert_eq!(digest.len(), 64);
    }

    #[test]
    fn test_hash_distinguishes_content() {
        let tmp = tempdir().unwrap();
        let a = tmp.path().join("a.txt");
        let b = tmp.path().join("b.txt");
        fs::write(&a, "one").unwrap();
        fs::write(&b, "two").unwrap();

        assert_ne!(hash_file(&a).unwrap(), hash_file(&b).unwrap());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let tmp = tempdir().unwrap();
        let err = hash_file(tmp.path().join("gone.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_digest_comparison_ignores_case() {
        let digest = hash_data(b"x");
        assert!(digests_match(&digest.to_uppercase(), &digest));
        assert!(digests_match(&format!(" {} ", digest), &digest));
        assert!(!digests_match("deadbeef", &digest));
    }
}
