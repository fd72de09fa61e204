//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cache::default_cache_dir;
use crate::cli::args::{Cli, Commands, ShowArgs};
use crate::error::Result;

use super::display::Theme;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing its output to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Directory segments are evaluated in.
    pub project_root: PathBuf,
    /// Explicit config file.
    pub config: Option<PathBuf>,
    /// Cache directory.
    pub cache_dir: PathBuf,
    /// Output styling.
    pub theme: Theme,
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: Context,
}

impl CommandDispatcher {
    /// Create a dispatcher from parsed arguments.
    pub fn new(cli: &Cli, project_root: PathBuf) -> Self {
        let theme = if cli.no_color {
            Theme::plain()
        } else {
            Theme::for_terminal()
        };

        Self {
            context: Context {
                project_root,
                config: cli.config.clone(),
                cache_dir: cli.cache_dir.clone().unwrap_or_else(default_cache_dir),
                theme,
            },
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.context.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// With no subcommand, `show` runs with default arguments.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Show(args)) => {
                super::show::ShowCommand::new(self.context.clone(), args.clone()).execute(out)
            }
            Some(Commands::List(args)) => {
                super::list::ListCommand::new(self.context.clone(), args.clone()).execute(out)
            }
            Some(Commands::Cache(args)) => {
                super::cache::CacheCommand::new(self.context.clone(), args.clone()).execute(out)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(out)
            }
            None => super::show::ShowCommand::new(self.context.clone(), ShowArgs::default())
                .execute(out),
        }
    }
}
