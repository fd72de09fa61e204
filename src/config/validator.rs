//! Configuration validation rules.
//!
//! - Segment names must be present and unique
//! - Presets must exist
//! - Commands need an executable and a pattern with a `version` group
//! - `display_mode` and `cache_duration` properties must parse

use crate::cache::parse_cache_duration;
use crate::config::properties::{Properties, CACHE_DURATION, DISPLAY_MODE};
use crate::config::schema::{CommandConfig, LangverConfig};
use crate::error::{LangverError, Result};
use crate::segment::{presets, DisplayMode};
use regex::Regex;
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Segment name if error is segment-specific
    pub segment: Option<String>,
}

impl ValidationError {
    fn new(rule: &str, message: String, segment: Option<&str>) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            segment: segment.map(str::to_string),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// Collects every error rather than stopping at the first one.
pub fn validate_config(config: &LangverConfig) -> Vec<ValidationError> {
    let mut errors = validate_properties(&config.properties, None);
    let mut seen = HashSet::new();

    for segment in &config.segments {
        let name = segment.name.as_str();

        if name.trim().is_empty() {
            errors.push(ValidationError::new(
                "missing-name",
                "Segment is missing a name".to_string(),
                None,
            ));
        } else if !seen.insert(name) {
            errors.push(ValidationError::new(
                "duplicate-segment",
                format!("Segment '{}' is defined more than once", name),
                Some(name),
            ));
        }

        if let Some(preset) = &segment.preset {
            if presets::builtin(preset).is_none() {
                errors.push(ValidationError::new(
                    "unknown-preset",
                    format!("Segment '{}' uses unknown preset '{}'", name, preset),
                    Some(name),
                ));
            }
        }

        for command in segment.commands.iter().flatten() {
            errors.extend(validate_command(command, name));
        }

        errors.extend(validate_properties(&segment.properties, Some(name)));
    }

    errors
}

fn validate_command(command: &CommandConfig, segment: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let label = command
        .node_package
        .as_deref()
        .unwrap_or(&command.executable);

    if command.executable.trim().is_empty() && command.node_package.is_none() {
        errors.push(ValidationError::new(
            "missing-executable",
            format!("Segment '{}' has a command without an executable", segment),
            Some(segment),
        ));
    }

    match Regex::new(&command.regex) {
        Ok(re) if re.capture_names().flatten().any(|n| n == "version") => {}
        Ok(_) => errors.push(ValidationError::new(
            "missing-version-group",
            format!(
                "Segment '{}': pattern for '{}' has no 'version' group",
                segment, label
            ),
            Some(segment),
        )),
        Err(e) => errors.push(ValidationError::new(
            "invalid-pattern",
            LangverError::InvalidPattern {
                executable: label.to_string(),
                message: e.to_string(),
            }
            .to_string(),
            Some(segment),
        )),
    }

    errors
}

fn validate_properties(props: &Properties, segment: Option<&str>) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let scope = segment
        .map(|s| format!("Segment '{}'", s))
        .unwrap_or_else(|| "Global properties".to_string());

    if let Some(mode) = props.get_str(DISPLAY_MODE) {
        if let Err(e) = mode.parse::<DisplayMode>() {
            errors.push(ValidationError::new(
                "invalid-display-mode",
                format!("{}: {}", scope, e),
                segment,
            ));
        }
    }

    if let Some(duration) = props.get_str(CACHE_DURATION) {
        if let Err(e) = parse_cache_duration(duration) {
            errors.push(ValidationError::new(
                "invalid-cache-duration",
                format!("{}: {}", scope, e),
                segment,
            ));
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &LangverConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(LangverError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
