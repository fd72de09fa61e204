//! Configuration schema definitions.
//!
//! These structs map to the `.langver.yml` file format:
//!
//! ```yaml
//! properties:
//!   cache_duration: 30m
//! segments:
//!   - name: node
//!     preset: node
//!     properties:
//!       fetch_version: true
//!   - name: unicorn
//!     extensions: ["*.uni"]
//!     commands:
//!       - executable: unicorn
//!         args: ["--version"]
//!         regex: "(?P<version>.*)"
//! ```

use serde::{Deserialize, Serialize};

use super::properties::Properties;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LangverConfig {
    /// Properties applied to every segment; segment properties win.
    #[serde(skip_serializing_if = "Properties::is_empty")]
    pub properties: Properties,

    /// Segments in display order.
    pub segments: Vec<SegmentConfig>,
}

/// One language segment.
///
/// Fields left out inherit from `preset` when one is named.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentConfig {
    /// Segment name, used to select it on the command line.
    pub name: String,

    /// Built-in preset to start from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// File globs that mark a project of this language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    /// Folder names that mark a project of this language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folders: Option<Vec<String>>,

    /// Version commands in priority order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<CommandConfig>>,

    /// Segment-level default link template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_url_template: Option<String>,

    /// Pin file holding the expected version (e.g. `.nvmrc`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_file: Option<String>,

    /// Environment variables that signal an active context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_env: Option<Vec<String>>,

    /// Segment properties.
    #[serde(skip_serializing_if = "Properties::is_empty")]
    pub properties: Properties,
}

/// One version command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    /// Binary to look up on PATH.
    pub executable: String,

    /// Arguments passed to it.
    pub args: Vec<String>,

    /// Pattern with a `version` named group.
    pub regex: String,

    /// Link template used when this command produced the version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_template: Option<String>,

    /// Read the version from this node package instead of running
    /// `executable`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_package: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_segment() {
        let yaml = r#"
properties:
  cache_duration: 30m
segments:
  - name: unicorn
    extensions: ["*.uni", "*.corn"]
    folders: [".unicorn"]
    commands:
      - executable: unicorn
        args: ["--version"]
        regex: "(?P<version>.*)"
        url_template: "https://uni.org/{{ .Full }}"
    version_file: .unicorn-version
    properties:
      home_enabled: true
"#;
        let config: LangverConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.properties.get_str("cache_duration"), Some("30m"));
        let segment = &config.segments[0];
        assert_eq!(segment.name, "unicorn");
        assert_eq!(segment.extensions.as_ref().unwrap().len(), 2);
        let command = &segment.commands.as_ref().unwrap()[0];
        assert_eq!(command.args, vec!["--version"]);
        assert_eq!(
            command.url_template.as_deref(),
            Some("https://uni.org/{{ .Full }}")
        );
        assert!(segment.properties.get_bool("home_enabled", false));
    }

    #[test]
    fn preset_only_segment() {
        let yaml = "segments:\n  - name: node\n    preset: node\n";
        let config: LangverConfig = serde_yaml::from_str(yaml).unwrap();

        let segment = &config.segments[0];
        assert_eq!(segment.preset.as_deref(), Some("node"));
        assert!(segment.commands.is_none());
        assert!(segment.extensions.is_none());
    }

    #[test]
    fn empty_document_is_default() {
        let config: LangverConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.segments.is_empty());
        assert!(config.properties.is_empty());
    }
}
