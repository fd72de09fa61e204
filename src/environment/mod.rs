//! The environment a segment is evaluated in.
//!
//! Every filesystem probe, PATH lookup and process invocation made by the
//! resolution pipeline goes through the [`Environment`] trait. This keeps
//! the pipeline testable without spawning processes: tests use
//! [`MockEnvironment`], the CLI uses [`SystemEnvironment`].

pub mod mock;
pub mod system;

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cache::Cache;

pub use mock::MockEnvironment;
pub use system::SystemEnvironment;

/// A process invocation that failed to start or exited non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (exit code {exit_code})")]
pub struct CommandError {
    /// Human-readable description of the failure.
    pub message: String,
    /// Exit code reported by the process, or a synthetic code when it
    /// could not be started.
    pub exit_code: i32,
}

impl CommandError {
    /// Exit code used when the process could not be spawned at all.
    pub const SPAWN_FAILED: i32 = 127;

    /// Create a new command error.
    pub fn new(message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }
}

/// Filesystem, process and cache access for segment evaluation.
pub trait Environment {
    /// Whether the working directory contains a file matching `pattern`.
    fn has_files(&self, pattern: &str) -> bool;

    /// Whether the working directory contains a folder named `name`.
    fn has_folder(&self, name: &str) -> bool;

    /// Whether `dir` contains a file matching `pattern`.
    fn has_files_in_dir(&self, dir: &Path, pattern: &str) -> bool;

    /// Whether `name` resolves to an executable on the system.
    fn has_command(&self, name: &str) -> bool;

    /// Run `name` with `args` and return its trimmed output.
    fn run_command(&self, name: &str, args: &[String]) -> Result<String, CommandError>;

    /// Current working directory.
    fn pwd(&self) -> PathBuf;

    /// The user's home directory.
    fn home(&self) -> PathBuf;

    /// Read a file, `None` if it is missing or unreadable.
    fn file_content(&self, path: &Path) -> Option<String>;

    /// Look up an environment variable.
    fn env_var(&self, name: &str) -> Option<String>;

    /// The cache shared by every segment evaluated in this environment.
    fn cache(&self) -> &dyn Cache;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_error_display_includes_code() {
        let err = CommandError::new("uni exited", 200);
        let msg = err.to_string();
        assert!(msg.contains("uni exited"));
        assert!(msg.contains("200"));
    }
}
