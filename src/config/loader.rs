//! Configuration file discovery and loading.
//!
//! The first config found wins; files are not merged:
//! 1. `--config <path>`
//! 2. Project config (`.langver.yml`)
//! 3. User global config (`~/.config/langver/config.yml`)
//! 4. Built-in presets

use crate::config::schema::{LangverConfig, SegmentConfig};
use crate::error::{LangverError, Result};
use crate::segment::presets;
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file name.
pub const PROJECT_CONFIG: &str = ".langver.yml";

/// Candidate configuration files for a project.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// User's global config: ~/.config/langver/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .langver.yml
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: Self::find_user_global(),
            project: Self::find_project_config(project_root),
        }
    }

    fn find_user_global() -> Option<PathBuf> {
        let path = dirs::config_dir()?.join("langver").join("config.yml");
        path.exists().then_some(path)
    }

    fn find_project_config(project_root: &Path) -> Option<PathBuf> {
        let path = project_root.join(PROJECT_CONFIG);
        path.exists().then_some(path)
    }

    /// The config file that applies, if any.
    pub fn effective(&self) -> Option<&PathBuf> {
        self.project.as_ref().or(self.user_global.as_ref())
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<LangverConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LangverError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LangverError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`LangverConfig`].
///
/// `source_path` is only used for error reporting. An empty document is
/// an empty config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<LangverConfig> {
    if content.trim().is_empty() {
        return Ok(LangverConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| LangverError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// A config with one segment per built-in preset.
pub fn default_config() -> LangverConfig {
    LangverConfig {
        segments: presets::names()
            .into_iter()
            .map(|name| SegmentConfig {
                name: name.to_string(),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

/// Load config with optional path override.
///
/// An explicit `config_override` must exist. Otherwise the discovered
/// config is loaded, falling back to [`default_config`].
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<LangverConfig> {
    if let Some(path) = config_override {
        tracing::debug!("Loading config from {}", path.display());
        return load_config_file(path);
    }

    match ConfigPaths::discover(project_root).effective() {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(path)
        }
        None => {
            tracing::debug!("No config found, using built-in presets");
            Ok(default_config())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn discover_finds_project_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_CONFIG), "segments: []").unwrap();

        let paths = ConfigPaths::discover(temp.path());
        assert_eq!(paths.project, Some(temp.path().join(PROJECT_CONFIG)));
        assert_eq!(paths.effective(), paths.project.as_ref());
    }

    #[test]
    fn discover_returns_none_for_missing_project_config() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::discover(temp.path());
        assert!(paths.project.is_none());
    }

    #[test]
    fn load_config_file_parses_valid_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "segments:\n  - name: node\n").unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.segments.len(), 1);
        assert_eq!(config.segments[0].name, "node");
    }

    #[test]
    fn load_config_file_returns_not_found_error() {
        let result = load_config_file(Path::new("/nonexistent/config.yml"));
        assert!(matches!(result, Err(LangverError::ConfigNotFound { .. })));
    }

    #[test]
    fn parse_config_returns_parse_error_for_invalid_yaml() {
        let result = parse_config("segments: [", Path::new("test.yml"));
        assert!(matches!(result, Err(LangverError::ConfigParseError { .. })));
    }

    #[test]
    fn parse_config_handles_empty_file() {
        let config = parse_config("", Path::new("test.yml")).unwrap();
        assert!(config.segments.is_empty());
        assert!(config.properties.is_empty());
    }

    #[test]
    fn explicit_override_wins() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_CONFIG), "segments:\n  - name: go\n").unwrap();
        let custom = temp.path().join("custom.yml");
        fs::write(&custom, "segments:\n  - name: rust\n").unwrap();

        let config = load_config(temp.path(), Some(&custom)).unwrap();
        assert_eq!(config.segments[0].name, "rust");
    }

    #[test]
    fn project_config_is_loaded() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_CONFIG), "segments:\n  - name: go\n").unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.segments[0].name, "go");
    }

    #[test]
    fn default_config_lists_presets() {
        let config = default_config();
        let names: Vec<_> = config.segments.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, presets::names());
    }
}
