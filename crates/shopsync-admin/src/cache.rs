//! Time-bounded on-disk cache for the full product listing.
//!
//! The file holds exactly the Admin API's `products` array, no wrapper.
//! Freshness is judged by the file's modification time only: a file whose
//! age is within the TTL is trusted, anything older is ignored. An empty
//! array is never trusted, so a zero-product listing always forces a refetch.
//!
//! Writes go to a temporary file in the same directory which is then renamed
//! over the target, so concurrent readers see either the old or the new
//! listing, never a partial one. Concurrent writers race; the last rename wins.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use serde_json::Value;
use shopsync_core::AppConfig;
use tempfile::NamedTempFile;

use crate::error::AdminError;

pub const DEFAULT_CACHE_FILE: &str = "all_products.json";
pub const DEFAULT_TTL: Duration = Duration::from_secs(7200);
#[cfg(unix)]
const CACHE_FILE_MODE: u32 = 0o644;

#[derive(Debug, Clone)]
pub struct ProductCache {
    path: PathBuf,
    ttl: Duration,
}

impl ProductCache {
    pub fn new(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            path: path.into(),
            ttl,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.cache_path, Duration::from_secs(config.cache_ttl_secs))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached listing if the file exists, is no older than the
    /// TTL at `now`, and holds a non-empty JSON array.
    ///
    /// Every other outcome (missing, stale, unreadable, corrupt, empty) is a
    /// miss. Corrupt files are logged; the next successful fetch replaces them.
    #[must_use]
    pub fn load_fresh(&self, now: SystemTime) -> Option<Vec<Value>> {
        let modified = std::fs::metadata(&self.path)
            .and_then(|m| m.modified())
            .ok()?;

        // A modification time in the future counts as brand new.
        let age = now.duration_since(modified).unwrap_or(Duration::ZERO);
        if age > self.ttl {
            tracing::debug!(
                path = %self.path.display(),
                age_secs = age.as_secs(),
                "product cache is stale"
            );
            return None;
        }

        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "cannot read product cache");
                return None;
            }
        };

        match serde_json::from_str::<Vec<Value>>(&contents) {
            Ok(products) if products.is_empty() => {
                tracing::debug!(path = %self.path.display(), "product cache is empty; ignoring");
                None
            }
            Ok(products) => Some(products),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "product cache is corrupt; ignoring");
                None
            }
        }
    }

    /// Replaces the cache file with `products`, atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Cache`] if the temporary file cannot be created,
    /// written, or renamed into place.
    pub fn store(&self, products: &[Value]) -> Result<(), AdminError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let tmp = NamedTempFile::new_in(dir).map_err(|e| self.cache_error(&e))?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer(&mut writer, products).map_err(|e| self.cache_error(&e))?;
            writer.flush().map_err(|e| self.cache_error(&e))?;
        }
        // Temporary files are created owner-only; the cache follows the usual
        // 0644 of a plainly written file.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(std::fs::Permissions::from_mode(CACHE_FILE_MODE))
                .map_err(|e| self.cache_error(&e))?;
        }
        tmp.as_file().sync_all().map_err(|e| self.cache_error(&e))?;
        tmp.persist(&self.path)
            .map_err(|e| self.cache_error(&e.error))?;

        tracing::info!(
            path = %self.path.display(),
            products = products.len(),
            "product cache written"
        );
        Ok(())
    }

    fn cache_error(&self, err: &dyn std::fmt::Display) -> AdminError {
        AdminError::Cache {
            path: self.path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

impl Default for ProductCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_FILE, DEFAULT_TTL)
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
