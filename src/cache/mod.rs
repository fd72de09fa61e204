//! Key/value caching for command output.
//!
//! The resolution pipeline only talks to the [`Cache`] trait. Two stores are
//! provided: [`MemoryCache`] for a single process and [`FileCache`], which
//! persists entries on disk so successive prompt draws in a shell session
//! can skip re-running version commands.

pub mod entry;
pub mod memory;
pub mod store;
pub mod validation;

use chrono::Duration;

pub use entry::{CacheEntry, CacheMetadata};
pub use memory::MemoryCache;
pub use store::FileCache;
pub use validation::{format_duration, parse_cache_duration, parse_ttl, CacheDuration};

/// A key/value store with per-entry expiry.
///
/// Implementations must be safe to share between segments, so both methods
/// take `&self`. Storage failures are swallowed: a cache that cannot be
/// written simply behaves like a cache miss on the next read.
pub trait Cache: Send + Sync {
    /// Look up a fresh value.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value that expires after `ttl`.
    fn set(&self, key: &str, value: &str, ttl: Duration);
}

/// Get the default cache directory.
pub fn default_cache_dir() -> std::path::PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("langver")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cache_dir_valid() {
        let path = default_cache_dir();
        assert!(path.ends_with("langver"));
    }
}
