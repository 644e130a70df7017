//! BLAKE3 hashing of local rpm payloads

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use blake3::Hasher;

use crate::error::{Result, RpkgError};

/// Hash prefix recorded in staged transactions
pub const HASH_PREFIX: &str = "blake3:";

/// Calculate BLAKE3 hash of a file
pub fn hash_file(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| RpkgError::IoError {
        message: format!("{}: {}", path.display(), e),
    })?;

    let mut reader = BufReader::new(file);
    let mut hasher = Hasher::new();
    let mut buffer = [0u8; 8192];

    loop {
        let n = reader.read(&mut buffer).map_err(|e| RpkgError::IoError {
            message: format!("{}: {}", path.display(), e),
        })?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_hash_file_is_stable() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("payload.rpm");
        std::fs::write(&path, b"payload bytes").unwrap();

        let first = hash_file(&path).unwrap();
        let second = hash_file(&path).unwrap();
        assert_eq!(first, second);
        assert!(first.starts_with(HASH_PREFIX));
    }

    #[test]
    fn test_hash_file_differs_on_content() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.rpm");
        let b = temp.path().join("b.rpm");
        std::fs::write(&a, b"one").unwrap();
        std::fs::write(&b, b"two").unwrap();

        assert_ne!(hash_file(&a).unwrap(), hash_file(&b).unwrap());
    }

    #[test]
    fn test_hash_file_missing_path_errors() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.rpm");
        assert!(hash_file(&missing).is_err());
    }
}
