//! Segment properties: a loosely typed option map.
//!
//! Properties come from YAML, so values are kept as JSON values and read
//! back through typed getters that fall back to a default when the key is
//! missing or holds the wrong type.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Skip running version commands entirely when false.
pub const FETCH_VERSION: &str = "fetch_version";
/// Allow the segment to render in the home directory.
pub const HOME_ENABLED: &str = "home_enabled";
/// Replacement for the error text when no command could produce a version.
pub const MISSING_COMMAND_TEXT: &str = "missing_command_text";
/// User override for the version link template.
pub const VERSION_URL_TEMPLATE: &str = "version_url_template";
/// `files`, `always` or `context`.
pub const DISPLAY_MODE: &str = "display_mode";
/// How long command output may be reused, e.g. `"1h"` or `"none"`.
pub const CACHE_DURATION: &str = "cache_duration";

/// Option name to value mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(HashMap<String, Value>);

impl Properties {
    /// Create an empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace a value.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Raw access.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Read a boolean, `default` if missing or not a boolean.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.0.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    /// Read a string, `None` if missing or not a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Read a string, `default` if missing or not a string.
    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.get_str(key).unwrap_or(default).to_string()
    }

    /// Combine with `base`; keys in `self` win.
    pub fn merged_over(&self, base: &Properties) -> Properties {
        let mut merged = base.clone();
        for (key, value) in &self.0 {
            merged.0.insert(key.clone(), value.clone());
        }
        merged
    }

    /// Iterate over keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_defaults_when_missing() {
        let props = Properties::new();
        assert!(props.get_bool(FETCH_VERSION, true));
        assert!(!props.get_bool(HOME_ENABLED, false));
    }

    #[test]
    fn bool_reads_value() {
        let props = Properties::new().with(FETCH_VERSION, false);
        assert!(!props.get_bool(FETCH_VERSION, true));
    }

    #[test]
    fn wrong_type_falls_back_to_default() {
        let props = Properties::new().with(HOME_ENABLED, "yes");
        assert!(!props.get_bool(HOME_ENABLED, false));
        assert_eq!(props.get_str(HOME_ENABLED), Some("yes"));
    }

    #[test]
    fn string_getters() {
        let props = Properties::new().with(MISSING_COMMAND_TEXT, "missing");
        assert_eq!(props.get_str(MISSING_COMMAND_TEXT), Some("missing"));
        assert_eq!(props.get_string(DISPLAY_MODE, "files"), "files");
    }

    #[test]
    fn merged_over_prefers_self() {
        let base = Properties::new()
            .with(FETCH_VERSION, true)
            .with(CACHE_DURATION, "1h");
        let local = Properties::new().with(FETCH_VERSION, false);

        let merged = local.merged_over(&base);
        assert!(!merged.get_bool(FETCH_VERSION, true));
        assert_eq!(merged.get_str(CACHE_DURATION), Some("1h"));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn deserializes_from_yaml() {
        let yaml = "fetch_version: false\nmissing_command_text: nope\n";
        let props: Properties = serde_yaml::from_str(yaml).unwrap();

        assert!(!props.get_bool(FETCH_VERSION, true));
        assert_eq!(props.get_str(MISSING_COMMAND_TEXT), Some("nope"));
    }
}
