//! Command-line interface for langver.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ListArgs, ShowArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, Context};
