//! Image assets for document headers and signatures.
//!
//! Lookups never fail: a missing, unreadable or badly named asset resolves
//! to [`Asset::Absent`] and the document is rendered without it.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Outcome of an asset lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset {
    /// Raw image file bytes.
    Image(Vec<u8>),
    /// No usable asset under that name.
    Absent,
}

/// Resolves asset names to image bytes.
pub trait AssetStore: Send + Sync {
    /// Looks up `name`. Must not panic or error for unknown names.
    fn resolve(&self, name: &str) -> Asset;

    /// Looks up an optional name; `None` is always absent.
    fn resolve_optional(&self, name: Option<&str>) -> Asset {
        match name {
            Some(name) => self.resolve(name),
            None => Asset::Absent,
        }
    }
}

/// Asset store backed by a single flat directory.
#[derive(Debug, Clone)]
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    /// Creates a store reading from `root`. The directory need not exist.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The asset directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_flat_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.contains('\0')
}

impl AssetStore for FsAssetStore {
    fn resolve(&self, name: &str) -> Asset {
        let name = name.trim();
        if name.is_empty() {
            return Asset::Absent;
        }
        if !is_flat_name(name) {
            warn!(asset = %name, "Rejected asset name outside the asset directory");
            return Asset::Absent;
        }

        let path = self.root.join(name);
        match std::fs::read(&path) {
            Ok(bytes) => {
                debug!(asset = %name, size = bytes.len(), "Loaded asset");
                Asset::Image(bytes)
            }
            Err(e) => {
                warn!(asset = %name, path = %path.display(), error = %e, "Asset unavailable, rendering without it");
                Asset::Absent
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(files: &[(&str, &[u8])]) -> (tempfile::TempDir, FsAssetStore) {
        let dir = tempfile::tempdir().unwrap();
        for (name, bytes) in files {
            std::fs::write(dir.path().join(name), bytes).unwrap();
        }
        let store = FsAssetStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_resolves_existing_file() {
        let (_dir, store) = store_with(&[("logo.png", b"png-bytes")]);
        assert_eq!(store.resolve("logo.png"), Asset::Image(b"png-bytes".to_vec()));
    }

    #[test]
    fn test_missing_file_is_absent() {
        let (_dir, store) = store_with(&[]);
        assert_eq!(store.resolve("nope.png"), Asset::Absent);
    }

    #[test]
    fn test_missing_directory_is_absent() {
        let store = FsAssetStore::new("/definitely/not/here");
        assert_eq!(store.resolve("logo.png"), Asset::Absent);
    }

    #[test]
    fn test_blank_and_none_are_absent() {
        let (_dir, store) = store_with(&[("logo.png", b"x")]);
        assert_eq!(store.resolve("   "), Asset::Absent);
        assert_eq!(store.resolve_optional(None), Asset::Absent);
        assert_ne!(store.resolve_optional(Some("logo.png")), Asset::Absent);
    }

    #[test]
    fn test_paths_outside_directory_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("assets");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(dir.path().join("secret.png"), b"secret").unwrap();
        std::fs::create_dir(nested.join("sub")).unwrap();
        std::fs::write(nested.join("sub").join("deep.png"), b"deep").unwrap();

        let store = FsAssetStore::new(&nested);
        assert_eq!(store.resolve("../secret.png"), Asset::Absent);
        assert_eq!(store.resolve("sub/deep.png"), Asset::Absent);
        assert_eq!(store.resolve("sub\\deep.png"), Asset::Absent);
        assert_eq!(store.resolve(".."), Asset::Absent);
    }

    #[test]
    fn test_directory_name_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("folder")).unwrap();
        let store = FsAssetStore::new(dir.path());
        assert_eq!(store.resolve("folder"), Asset::Absent);
    }
}
