//! Per-project lockfile-hash cache
//!
//! One JSON document per project (or workspace) root, stored under the
//! root's install directory. Absence means "never synced"; a malformed
//! file costs at most one redundant install.

use crate::error::{PmError, PmResult};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Persisted freshness record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncCache {
    /// SHA-256 hex digest of the lockfile at last successful sync
    pub lockfile_hash: Option<String>,
    /// RFC 3339 timestamp of the last successful sync
    pub last_sync: Option<String>,
}

/// `<root>/<install_dir>/.cache/omnipm/cache.json`, or directly under
/// `<root>/.cache/omnipm/` for managers without a local install dir
pub fn cache_path(root: &Path, install_dir: Option<&str>) -> PathBuf {
    let base = match install_dir {
        Some(dir) => root.join(dir),
        None => root.to_path_buf(),
    };
    base.join(".cache").join("omnipm").join("cache.json")
}

/// Read the cache for a root; absent or malformed files read as empty
pub fn read_cache(root: &Path, install_dir: Option<&str>) -> SyncCache {
    let path = cache_path(root, install_dir);
    let Ok(raw) = fs::read_to_string(&path) else {
        return SyncCache::default();
    };
    match serde_json::from_str(&raw) {
        Ok(cache) => cache,
        Err(e) => {
            debug!("malformed sync cache at {}: {e}", path.display());
            SyncCache::default()
        }
    }
}

/// Persist the cache, creating parent directories as needed
pub fn write_cache(root: &Path, install_dir: Option<&str>, cache: &SyncCache) -> PmResult<()> {
    let path = cache_path(root, install_dir);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| PmError::io(format!("creating cache directory {}", parent.display()), e))?;
    }
    let raw = serde_json::to_string_pretty(cache)?;
    fs::write(&path, raw)
        .map_err(|e| PmError::io(format!("writing sync cache {}", path.display()), e))
}

/// SHA-256 hex digest of a file's content; `None` if the file is absent
pub fn hash_file(path: &Path) -> PmResult<Option<String>> {
    if !path.is_file() {
        return Ok(None);
    }
    let contents = fs::read(path)
        .map_err(|e| PmError::io(format!("reading lockfile {}", path.display()), e))?;

    let mut hasher = Sha256::new();
    hasher.update(&contents);
    Ok(Some(hex::encode(hasher.finalize())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn hash_deterministic() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.lock");
        fs::write(&path, b"test content").unwrap();

        let hash1 = hash_file(&path).unwrap().unwrap();
        let hash2 = hash_file(&path).unwrap().unwrap();
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn hash_tracks_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.lock");
        fs::write(&path, b"before").unwrap();
        let before = hash_file(&path).unwrap().unwrap();

        fs::write(&path, b"after").unwrap();
        let after = hash_file(&path).unwrap().unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn hash_missing_file() {
        let dir = TempDir::new().unwrap();
        assert_eq!(hash_file(&dir.path().join("nope.lock")).unwrap(), None);
    }

    #[test]
    fn cache_path_without_install_dir_sits_at_root() {
        let path = cache_path(Path::new("/proj"), None);
        assert_eq!(path, Path::new("/proj/.cache/omnipm/cache.json"));
    }

    #[test]
    fn read_absent_cache_is_empty() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_cache(dir.path(), Some("node_modules")), SyncCache::default());
    }

    #[test]
    fn read_malformed_cache_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = cache_path(dir.path(), Some("node_modules"));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{oops").unwrap();

        assert_eq!(read_cache(dir.path(), Some("node_modules")), SyncCache::default());
    }

    #[test]
    fn write_read_roundtrip() {
        let dir = TempDir::new().unwrap();
        let cache = SyncCache {
            lockfile_hash: Some("abc123".to_string()),
            last_sync: Some("2026-08-30T00:00:00Z".to_string()),
        };

        write_cache(dir.path(), Some("node_modules"), &cache).unwrap();
        assert_eq!(read_cache(dir.path(), Some("node_modules")), cache);

        // Stored with the documented camelCase keys
        let raw = fs::read_to_string(cache_path(dir.path(), Some("node_modules"))).unwrap();
        assert!(raw.contains("lockfileHash"));
        assert!(raw.contains("lastSync"));
    }
}
