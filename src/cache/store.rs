//! On-disk cache storage.

use anyhow::{Context, Result};
use chrono::Duration;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use super::entry::CacheEntry;
use super::Cache;

/// Disk-backed cache, one JSON file per key.
pub struct FileCache {
    /// Root directory for cache.
    root: PathBuf,
}

impl FileCache {
    /// Create a new file cache rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ensure the cache directory exists.
    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create cache directory {:?}", self.root))
    }

    /// Get the path for storing an entry.
    pub fn entry_path(&self, key: &str) -> PathBuf {
        let hash = Sha256::digest(key.as_bytes());
        let hash_str = hex::encode(&hash[..16]);
        self.root.join(hash_str).with_extension("json")
    }

    /// Store a value and return the written entry.
    ///
    /// Writes go to a temporary file first and are renamed into place so a
    /// concurrent reader never sees a half-written entry.
    pub fn store(&self, key: &str, value: &str, ttl: Duration) -> Result<CacheEntry> {
        self.ensure_dir()?;

        let entry = CacheEntry::new(key, value, ttl);
        let path = self.entry_path(key);
        let tmp = path.with_extension(format!("tmp{}", std::process::id()));

        let json = serde_json::to_string_pretty(&entry)?;
        fs::write(&tmp, json).with_context(|| format!("Failed to write {:?}", tmp))?;
        fs::rename(&tmp, &path).with_context(|| format!("Failed to move {:?} into place", tmp))?;

        Ok(entry)
    }

    /// Load an entry, expired or not.
    pub fn load(&self, key: &str) -> Result<Option<CacheEntry>> {
        let path = self.entry_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)?;
        let entry: CacheEntry = serde_json::from_str(&json)
            .with_context(|| format!("Corrupt cache entry {:?}", path))?;

        Ok(Some(entry))
    }

    /// Remove a cached entry.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let path = self.entry_path(key);

        if path.exists() {
            fs::remove_file(&path)?;
            return Ok(true);
        }

        Ok(false)
    }

    /// List all cached entries, newest first.
    pub fn list(&self) -> Result<Vec<CacheEntry>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().is_some_and(|e| e == "json") {
                if let Ok(json) = fs::read_to_string(&path) {
                    if let Ok(cache_entry) = serde_json::from_str::<CacheEntry>(&json) {
                        entries.push(cache_entry);
                    }
                }
            }
        }

        entries.sort_by(|a, b| b.metadata.cached_at.cmp(&a.metadata.cached_at));
        Ok(entries)
    }

    /// Clear all cached entries.
    pub fn clear(&self) -> Result<usize> {
        let mut cleared = 0;

        for entry in self.list()? {
            match self.remove(&entry.key) {
                Ok(true) => cleared += 1,
                Ok(false) => {}
                Err(e) => tracing::debug!("Failed to remove {}: {:#}", entry.key, e),
            }
        }

        Ok(cleared)
    }

    /// Remove expired entries only.
    pub fn cleanup_expired(&self) -> Result<usize> {
        let mut removed = 0;

        for entry in self.list()? {
            if entry.is_expired() && self.remove(&entry.key)? {
                removed += 1;
            }
        }

        Ok(removed)
    }
}

impl Cache for FileCache {
    fn get(&self, key: &str) -> Option<String> {
        match self.load(key) {
            Ok(Some(entry)) if !entry.is_expired() => Some(entry.value),
            Ok(Some(_)) => {
                let _ = self.remove(key);
                None
            }
            Ok(None) => None,
            Err(e) => {
                tracing::debug!("Ignoring unreadable cache entry {}: {:#}", key, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str, ttl: Duration) {
        if let Err(e) = self.store(key, value, ttl) {
            tracing::debug!("Failed to cache {}: {:#}", key, e);
        }
    }
}
