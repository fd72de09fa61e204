//! Owned segment definitions built from config and presets.

use super::command::VersionCommand;
use super::language::LanguageSegment;
use super::pin::PinFile;
use super::presets;
use crate::config::properties::Properties;
use crate::config::schema::{LangverConfig, SegmentConfig};
use crate::environment::Environment;
use crate::error::{LangverError, Result};

/// Everything needed to build a [`LanguageSegment`] for an environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentDefinition {
    pub name: String,
    pub extensions: Vec<String>,
    pub folders: Vec<String>,
    pub context_env: Vec<String>,
    pub commands: Vec<VersionCommand>,
    pub version_url_template: Option<String>,
    pub version_file: Option<String>,
    pub properties: Properties,
}

impl SegmentDefinition {
    /// Resolve a config entry against its preset and the global properties.
    ///
    /// The base is the named `preset`, or the preset sharing the segment's
    /// name when none is given. Fields set in the entry replace the base's;
    /// properties layer as preset, then global, then segment.
    ///
    /// # Errors
    ///
    /// Returns [`LangverError::UnknownSegment`] when `preset` names no
    /// built-in preset.
    pub fn from_config(config: &SegmentConfig, global: &Properties) -> Result<Self> {
        let base = match &config.preset {
            Some(preset) => {
                presets::builtin(preset).ok_or_else(|| LangverError::UnknownSegment {
                    name: preset.clone(),
                })?
            }
            None => presets::builtin(&config.name).unwrap_or_default(),
        };

        let commands = match &config.commands {
            Some(commands) => commands.iter().map(VersionCommand::from).collect(),
            None => base.commands,
        };

        Ok(Self {
            name: config.name.clone(),
            extensions: config.extensions.clone().unwrap_or(base.extensions),
            folders: config.folders.clone().unwrap_or(base.folders),
            context_env: config.context_env.clone().unwrap_or(base.context_env),
            commands,
            version_url_template: config
                .version_url_template
                .clone()
                .or(base.version_url_template),
            version_file: config.version_file.clone().or(base.version_file),
            properties: config
                .properties
                .merged_over(&global.merged_over(&base.properties)),
        })
    }

    /// Resolve every segment of a config, in order.
    ///
    /// # Errors
    ///
    /// Fails on the first segment naming an unknown preset.
    pub fn all_from_config(config: &LangverConfig) -> Result<Vec<Self>> {
        config
            .segments
            .iter()
            .map(|segment| Self::from_config(segment, &config.properties))
            .collect()
    }

    /// Build a segment evaluating against `env`.
    pub fn instantiate<'a>(&self, env: &'a dyn Environment) -> LanguageSegment<'a> {
        let extensions: Vec<&str> = self.extensions.iter().map(String::as_str).collect();
        let folders: Vec<&str> = self.folders.iter().map(String::as_str).collect();
        let context_env: Vec<&str> = self.context_env.iter().map(String::as_str).collect();

        let mut segment = LanguageSegment::new(&self.name, env)
            .with_extensions(&extensions)
            .with_folders(&folders)
            .with_context_env(&context_env)
            .with_commands(self.commands.clone())
            .with_properties(self.properties.clone());

        if let Some(template) = &self.version_url_template {
            segment = segment.with_version_url_template(template);
        }
        if let Some(file_name) = &self.version_file {
            segment = segment.with_version_pin(PinFile::new(file_name));
        }

        segment
    }
}
