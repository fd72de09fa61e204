//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and shares the global flags
//! (project directory, config override, cache directory, colors) through
//! a [`Context`].

pub mod cache;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod list;
pub mod show;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, Context};
