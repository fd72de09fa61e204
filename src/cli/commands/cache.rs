//! Cache command implementation.
//!
//! Provides `langver cache list` and `langver cache clear`.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::io::Write;

use crate::cache::{format_duration, FileCache};

use super::dispatcher::{Command, CommandResult, Context};

/// Arguments for the cache command.
#[derive(Debug, Clone, Args)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheSubcommand,
}

/// Cache subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum CacheSubcommand {
    /// List cached entries.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Clear the cache.
    Clear {
        /// Only clear expired entries.
        #[arg(long)]
        expired: bool,
    },
}

/// The cache command implementation.
pub struct CacheCommand {
    context: Context,
    args: CacheArgs,
}

impl CacheCommand {
    /// Create a new cache command.
    pub fn new(context: Context, args: CacheArgs) -> Self {
        Self { context, args }
    }
}

impl Command for CacheCommand {
    fn execute(&self, out: &mut dyn Write) -> crate::error::Result<CommandResult> {
        let store = FileCache::new(&self.context.cache_dir);

        match &self.args.command {
            CacheSubcommand::List { json } => list_cache(&store, *json, out)?,
            CacheSubcommand::Clear { expired } => clear_cache(&store, *expired, out)?,
        }

        Ok(CommandResult::success())
    }
}

fn list_cache(store: &FileCache, json: bool, out: &mut dyn Write) -> Result<()> {
    let entries = store.list()?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        return Ok(());
    }

    if entries.is_empty() {
        writeln!(out, "Cache is empty")?;
        return Ok(());
    }

    writeln!(out, "{} cached entries:", entries.len())?;
    for entry in entries {
        let remaining = entry.metadata.remaining_ttl();
        let ttl = if remaining > 0 {
            format_duration(chrono::Duration::seconds(remaining))
        } else {
            "expired".to_string()
        };

        writeln!(out, "  {} {:?} [{}]", entry.key, entry.value, ttl)?;
    }

    Ok(())
}

fn clear_cache(store: &FileCache, expired_only: bool, out: &mut dyn Write) -> Result<()> {
    if expired_only {
        let removed = store.cleanup_expired()?;
        writeln!(out, "Cleared {} expired entries", removed)?;
        return Ok(());
    }

    let cleared = store.clear()?;
    writeln!(out, "Cleared {} entries", cleared)?;
    Ok(())
}
