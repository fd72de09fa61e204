//! List command implementation.
//!
//! `langver list` prints the configured segments and how each one is
//! detected, without running anything.

use serde::Serialize;
use std::io::Write;

use crate::cli::args::ListArgs;
use crate::config::{load_config, validate};
use crate::error::Result;
use crate::segment::SegmentDefinition;

use super::dispatcher::{Command, CommandResult, Context};

#[derive(Debug, Serialize)]
struct SegmentSummary<'a> {
    name: &'a str,
    extensions: &'a [String],
    folders: &'a [String],
    commands: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version_file: Option<&'a str>,
}

impl<'a> From<&'a SegmentDefinition> for SegmentSummary<'a> {
    fn from(definition: &'a SegmentDefinition) -> Self {
        Self {
            name: &definition.name,
            extensions: &definition.extensions,
            folders: &definition.folders,
            commands: definition
                .commands
                .iter()
                .map(|c| c.executable.as_str())
                .collect(),
            version_file: definition.version_file.as_deref(),
        }
    }
}

/// The list command implementation.
pub struct ListCommand {
    context: Context,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(context: Context, args: ListArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let config = load_config(&self.context.project_root, self.context.config.as_deref())?;
        validate(&config)?;
        let definitions = SegmentDefinition::all_from_config(&config)?;

        if self.args.json {
            let summaries: Vec<SegmentSummary> = definitions.iter().map(Into::into).collect();
            let json = serde_json::to_string_pretty(&summaries).map_err(anyhow::Error::from)?;
            writeln!(out, "{}", json)?;
            return Ok(CommandResult::success());
        }

        let theme = &self.context.theme;
        for definition in &definitions {
            let summary = SegmentSummary::from(definition);
            let mut markers = summary.extensions.to_vec();
            markers.extend(summary.folders.iter().map(|f| format!("{}/", f)));

            writeln!(
                out,
                "{} {}",
                theme.name.apply_to(summary.name),
                theme.dim.apply_to(summary.commands.join(", "))
            )?;
            writeln!(out, "  {}", markers.join(" "))?;
        }

        Ok(CommandResult::success())
    }
}
