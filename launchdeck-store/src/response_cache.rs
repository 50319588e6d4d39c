//! Disk-backed response cache.
//!
//! Entries live under one directory, one file per request key. Keys are
//! hashed to fixed-length filenames, so arbitrary request paths and bodies
//! never reach the filesystem.

use std::path::PathBuf;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use launchdeck_fetch::ResponseCache;
use ring::digest;
use tracing::warn;

use crate::persistence::{default_cache_dir, load_bytes, save_bytes};

/// A [`ResponseCache`] that persists entries across sessions.
///
/// Reads that miss (or fail) report `None`; writes that fail are logged and
/// dropped. The cache is an accelerator, never a source of truth - the
/// fresh network element of the fetch sequence always supersedes it.
#[derive(Debug, Clone)]
pub struct DiskCache {
    dir: PathBuf,
}

impl DiskCache {
    /// Creates a cache rooted at the given directory.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Creates a cache at the default per-user location.
    pub fn default_location() -> Self {
        Self::new(default_cache_dir().join("responses"))
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let digest = digest::digest(&digest::SHA256, key.as_bytes());
        let name = URL_SAFE_NO_PAD.encode(digest.as_ref());
        self.dir.join(format!("{name}.bin"))
    }
}

#[async_trait]
impl ResponseCache for DiskCache {
    async fn get(&self, key: &str) -> Option<Vec<u8>> {
        load_bytes(&self.entry_path(key)).await.ok()
    }

    async fn put(&self, key: &str, bytes: &[u8]) {
        if let Err(e) = save_bytes(&self.entry_path(key), bytes).await {
            warn!(key = %key, error = %e, "Failed to persist cache entry");
        }
    }
}
