//! Local rpm file intake
//!
//! Resolves a user-supplied path into an installable package: the path must
//! exist and carry a parseable NEVRA file name. Remote URLs are left to the
//! transaction executor, which owns network access.

use std::path::Path;

use normpath::PathExt;

use crate::hash;
use crate::nevra::Nevra;

/// A local rpm file resolved into an installable package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalPackage {
    pub nevra: Nevra,
    pub path: String,
    /// BLAKE3 digest of the payload, recorded for the executor.
    pub checksum: String,
}

/// Resolve one intake target. `None` means the target is unmatched.
pub fn resolve(target: &str) -> Option<LocalPackage> {
    if target.contains("://") {
        return None;
    }
    let path = Path::new(target);
    let stem = path.file_name()?.to_str()?.strip_suffix(".rpm")?;
    let nevra = Nevra::parse(stem)?;
    if !path.is_file() {
        return None;
    }
    let normalized = path
        .normalize()
        .map(|p| p.into_path_buf())
        .unwrap_or_else(|_| path.to_path_buf());
    let checksum = hash::hash_file(&normalized).ok()?;
    Some(LocalPackage {
        nevra,
        path: normalized.display().to_string(),
        checksum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_valid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hello-1.0-1.x86_64.rpm");
        std::fs::write(&path, b"payload").unwrap();

        let local = resolve(path.to_str().unwrap()).unwrap();
        assert_eq!(local.nevra.name, "hello");
        assert_eq!(local.nevra.to_string(), "hello-1.0-1.x86_64");
        assert!(local.checksum.starts_with(hash::HASH_PREFIX));
    }

    #[test]
    fn test_resolve_missing_file() {
        assert!(resolve("/nonexistent/hello-1.0-1.x86_64.rpm").is_none());
    }

    #[test]
    fn test_resolve_unparseable_name() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("garbage.rpm");
        std::fs::write(&path, b"payload").unwrap();
        assert!(resolve(path.to_str().unwrap()).is_none());
    }

    #[test]
    fn test_resolve_rejects_urls() {
        assert!(resolve("https://example.com/hello-1.0-1.x86_64.rpm").is_none());
    }
}
