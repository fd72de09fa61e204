//! langver - Language runtime versions for shell prompts.
//!
//! langver decides whether a prompt should show a language runtime segment
//! for the current directory and, if so, which executable and version to
//! show. Versions come from running the runtime's own version command (or
//! reading a node package manifest), are cached between prompts, and can be
//! checked against a project pin file such as `.nvmrc`.
//!
//! # Modules
//!
//! - [`segment`] - The language segment pipeline and built-in presets
//! - [`environment`] - Filesystem, process and cache access behind a trait
//! - [`cache`] - Expiring key/value stores for command output
//! - [`config`] - `.langver.yml` loading and validation
//! - [`template`] - Link template rendering
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use langver::environment::MockEnvironment;
//! use langver::segment::presets;
//!
//! let env = MockEnvironment::new()
//!     .with_files("go.mod")
//!     .with_command("go", &["version"], "go version go1.22.1 linux/amd64");
//!
//! let mut segment = presets::builtin("go").unwrap().instantiate(&env);
//! assert!(segment.enabled());
//! assert_eq!(segment.state().version.full, "1.22.1");
//! assert_eq!(segment.state().url, "https://golang.org/doc/go1.22");
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod segment;
pub mod sys;
pub mod template;

pub use error::{LangverError, Result};
