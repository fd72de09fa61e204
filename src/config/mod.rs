//! Configuration loading, parsing, and validation for langver.
//!
//! - Schema definitions in [`schema`]
//! - Segment property keys and the property map in [`properties`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use langver::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".langver.yml"), "segments:\n  - name: node\n").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.segments[0].name, "node");
//! ```

pub mod loader;
pub mod properties;
pub mod schema;
pub mod validator;

// Schema re-exports
pub use schema::{CommandConfig, LangverConfig, SegmentConfig};

// Properties re-exports
pub use properties::Properties;

// Loader re-exports
pub use loader::{
    default_config, load_config, load_config_file, parse_config, ConfigPaths, PROJECT_CONFIG,
};

// Validator re-exports
pub use validator::{validate, validate_config, ValidationError};
