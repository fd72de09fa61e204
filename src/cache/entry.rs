//! Cache entry and metadata types.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A cached value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Lookup key (e.g., "version_3f2a...").
    pub key: String,
    /// Cached value.
    pub value: String,
    /// Cache metadata for validation.
    pub metadata: CacheMetadata,
}

/// Metadata for cache validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheMetadata {
    /// When this entry was cached.
    pub cached_at: DateTime<Utc>,
    /// When the cached entry expires.
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Create a new cache entry.
    pub fn new(key: impl Into<String>, value: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            key: key.into(),
            value: value.into(),
            metadata: CacheMetadata {
                cached_at: now,
                expires_at: now
                    .checked_add_signed(ttl)
                    .unwrap_or(DateTime::<Utc>::MAX_UTC),
            },
        }
    }

    /// Check if the entry has expired based on TTL.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.metadata.expires_at
    }

    /// Get the age of this entry.
    pub fn age(&self) -> Duration {
        Utc::now().signed_duration_since(self.metadata.cached_at)
    }

    /// Size of the cached value in bytes.
    pub fn size_bytes(&self) -> usize {
        self.value.len()
    }
}

impl CacheMetadata {
    /// Calculate remaining TTL in seconds.
    pub fn remaining_ttl(&self) -> i64 {
        self.expires_at
            .signed_duration_since(Utc::now())
            .num_seconds()
            .max(0)
    }
}
