//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::commands::cache::CacheArgs;

/// langver - Language runtime versions for your prompt.
#[derive(Debug, Parser)]
#[command(name = "langver")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .langver.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory to evaluate (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Directory for cached command output
    #[arg(long, global = true, env = "LANGVER_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate segments for the project directory (default)
    Show(ShowArgs),

    /// List configured segments
    List(ListArgs),

    /// Manage cached command output
    Cache(CacheArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Segments to evaluate (default: all configured)
    pub segments: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Include segments that are not enabled here
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
