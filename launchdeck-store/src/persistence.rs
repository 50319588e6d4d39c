//! File persistence helpers.
//!
//! Byte-level load/save for cached responses, written atomically (temp file
//! + rename) with owner-only permissions on Unix.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;

/// Returns the default cache directory.
///
/// - macOS: `~/Library/Caches/launchdeck`
/// - Linux: `~/.cache/launchdeck`
/// - Windows: `%LOCALAPPDATA%\launchdeck\cache`
pub fn default_cache_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Caches").join("launchdeck"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    #[cfg(not(target_os = "macos"))]
    {
        dirs::cache_dir()
            .map(|c| c.join("launchdeck"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Sets restrictive file permissions (0o600) on Unix systems.
#[cfg(unix)]
async fn set_restrictive_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = tokio::fs::metadata(path).await?;
    let mut perms = metadata.permissions();
    perms.set_mode(0o600);
    tokio::fs::set_permissions(path, perms).await?;
    Ok(())
}

/// No-op for non-Unix systems.
#[cfg(not(unix))]
async fn set_restrictive_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

/// Ensures a directory exists with owner-only permissions.
pub async fn ensure_dir(path: &Path) -> Result<(), StoreError> {
    if !path.exists() {
        debug!(path = %path.display(), "Creating cache directory");
        tokio::fs::create_dir_all(path).await?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = tokio::fs::metadata(path).await?;
            let mut perms = metadata.permissions();
            perms.set_mode(0o700);
            tokio::fs::set_permissions(path, perms).await?;
        }
    }
    Ok(())
}

/// Saves bytes to a file atomically (temp file + rename).
pub async fn save_bytes(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent).await?;
    }

    let temp_path = path.with_extension("tmp");
    tokio::fs::write(&temp_path, bytes).await?;
    tokio::fs::rename(&temp_path, path).await?;
    set_restrictive_permissions(path).await?;

    debug!(path = %path.display(), len = bytes.len(), "Saved cache entry");
    Ok(())
}

/// Loads bytes from a file.
pub async fn load_bytes(path: &Path) -> Result<Vec<u8>, StoreError> {
    Ok(tokio::fs::read(path).await?)
}
