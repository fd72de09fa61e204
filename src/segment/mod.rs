//! Language segment resolution.
//!
//! A language segment decides whether a prompt should show a runtime
//! indicator for the current directory, and which executable and version to
//! show. The pipeline, leaves first:
//!
//! - [`matcher`] - project file and folder detection
//! - [`resolver`] - picks the first installed [`VersionCommand`]
//! - [`extractor`] - runs it (through the cache) and parses the version
//! - [`pin`] - reconciles against an expected version
//! - [`url`] - renders the documentation link
//! - [`language`] - the enablement gate tying it all together
//!
//! # Example
//!
//! ```
//! use langver::environment::MockEnvironment;
//! use langver::segment::{LanguageSegment, VersionCommand};
//!
//! let env = MockEnvironment::new()
//!     .with_files("*.uni")
//!     .with_command("unicorn", &["--version"], "1.3.307");
//!
//! let mut segment = LanguageSegment::new("unicorn", &env)
//!     .with_extensions(&["*.uni"])
//!     .with_commands(vec![VersionCommand::new(
//!         "unicorn",
//!         &["--version"],
//!         "(?P<version>.*)",
//!     )]);
//!
//! assert!(segment.enabled());
//! assert_eq!(segment.state().version.full, "1.3.307");
//! assert_eq!(segment.state().executable, "unicorn");
//! ```

pub mod command;
pub mod definition;
pub mod extractor;
pub mod language;
pub mod matcher;
pub mod node;
pub mod pin;
pub mod presets;
pub mod resolver;
pub mod url;

use thiserror::Error;

pub use command::{Version, VersionCommand};
pub use definition::SegmentDefinition;
pub use extractor::VersionExtractor;
pub use language::{DisplayMode, LanguageSegment, SegmentState};
pub use node::{node_package_version, NodePackageError};
pub use pin::{pin_fn, FnPin, PinCheck, PinFile, VersionPin};
pub use resolver::resolve_command;

/// Error text when no version command is installed.
pub const NO_VERSION: &str = "NO VERSION";

/// Why a version could not be resolved.
///
/// These never abort evaluation; their display text ends up in the
/// segment's `error` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// None of the candidates is installed.
    #[error("NO VERSION")]
    NoCommand,

    /// The command failed to start or exited non-zero.
    #[error("err executing {executable} with [{}]", .args.join(" "))]
    CommandFailed {
        executable: String,
        args: Vec<String>,
        exit_code: i32,
    },

    /// The command ran but its output did not yield a version.
    #[error("err parsing info from {executable} with {output}")]
    ParseFailed { executable: String, output: String },

    /// A node package manifest could not be read.
    #[error("err reading {package} package version: {source}")]
    PackageUnreadable {
        package: String,
        #[source]
        source: NodePackageError,
    },
}
