//! Cache duration parsing and formatting.

use anyhow::{anyhow, bail, Result};
use chrono::{Duration, Utc};

/// How long a resolved version may be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheDuration {
    /// Never read from or write to the cache.
    None,
    /// Reuse entries for the given duration.
    For(Duration),
}

impl CacheDuration {
    /// The TTL to store entries with, if caching is enabled.
    pub fn ttl(&self) -> Option<Duration> {
        match self {
            CacheDuration::None => None,
            CacheDuration::For(d) => Some(*d),
        }
    }
}

/// Parse a cache duration property value.
///
/// `"none"`, `""` and zero durations disable caching; everything else is
/// handed to [`parse_ttl`].
pub fn parse_cache_duration(value: &str) -> Result<CacheDuration> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        return Ok(CacheDuration::None);
    }

    let ttl = parse_ttl(value)?;
    if ttl <= Duration::zero() {
        Ok(CacheDuration::None)
    } else {
        Ok(CacheDuration::For(ttl))
    }
}

/// Parse a TTL string like "7d", "24h", "30m".
///
/// Values too large to add to the current time are rejected.
pub fn parse_ttl(ttl: &str) -> Result<Duration> {
    let ttl = ttl.trim().to_lowercase();

    let (digits, build): (&str, fn(i64) -> Option<Duration>) =
        if let Some(days) = ttl.strip_suffix('d') {
            (days, Duration::try_days)
        } else if let Some(hours) = ttl.strip_suffix('h') {
            (hours, Duration::try_hours)
        } else if let Some(mins) = ttl.strip_suffix('m') {
            (mins, Duration::try_minutes)
        } else if let Some(secs) = ttl.strip_suffix('s') {
            (secs, Duration::try_seconds)
        } else {
            // Assume seconds if no suffix
            (ttl.as_str(), Duration::try_seconds)
        };

    let n: i64 = digits.parse()?;
    let duration = build(n).ok_or_else(|| anyhow!("duration '{}' is out of range", ttl))?;

    if Utc::now().checked_add_signed(duration).is_none() {
        bail!("duration '{}' is out of range", ttl);
    }

    Ok(duration)
}

/// Format a duration for display.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.num_seconds();

    if secs >= 86400 {
        format!("{}d", secs / 86400)
    } else if secs >= 3600 {
        format!("{}h", secs / 3600)
    } else if secs >= 60 {
        format!("{}m", secs / 60)
    } else {
        format!("{}s", secs)
    }
}
