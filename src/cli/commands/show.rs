//! Show command implementation.
//!
//! `langver show [SEGMENT...]` evaluates segments against the project
//! directory and prints what a prompt would display.

use serde::Serialize;
use std::io::Write;

use crate::cache::FileCache;
use crate::cli::args::ShowArgs;
use crate::config::{load_config, validate, LangverConfig, SegmentConfig};
use crate::environment::{Environment, SystemEnvironment};
use crate::error::{LangverError, Result};
use crate::segment::{presets, SegmentDefinition, SegmentState};

use super::dispatcher::{Command, CommandResult, Context};

/// One evaluated segment.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentReport {
    pub name: String,
    pub enabled: bool,
    #[serde(flatten)]
    pub state: SegmentState,
}

/// The show command implementation.
pub struct ShowCommand {
    context: Context,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(context: Context, args: ShowArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ShowCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let config = load_config(&self.context.project_root, self.context.config.as_deref())?;
        validate(&config)?;

        let definitions = select_definitions(&config, &self.args.segments)?;
        let env = SystemEnvironment::new(
            self.context.project_root.clone(),
            Box::new(FileCache::new(&self.context.cache_dir)),
        );

        let reports = evaluate(&env, &definitions);
        let visible: Vec<_> = reports
            .iter()
            .filter(|r| r.enabled || self.args.all)
            .collect();

        if self.args.json {
            let json = serde_json::to_string_pretty(&visible).map_err(anyhow::Error::from)?;
            writeln!(out, "{}", json)?;
            return Ok(CommandResult::success());
        }

        let theme = &self.context.theme;
        for report in visible {
            if report.enabled {
                writeln!(out, "{}", theme.format_segment(&report.name, &report.state))?;
            } else {
                writeln!(
                    out,
                    "{} {}",
                    theme.name.apply_to(&report.name),
                    theme.dim.apply_to("(disabled)")
                )?;
            }
        }

        Ok(CommandResult::success())
    }
}

/// Evaluate every definition against `env`, in order.
pub fn evaluate(env: &dyn Environment, definitions: &[SegmentDefinition]) -> Vec<SegmentReport> {
    definitions
        .iter()
        .map(|definition| {
            let mut segment = definition.instantiate(env);
            let enabled = segment.enabled();
            tracing::debug!("{}: enabled={}", definition.name, enabled);

            SegmentReport {
                name: definition.name.clone(),
                enabled,
                state: segment.state().clone(),
            }
        })
        .collect()
}

/// Pick the definitions named on the command line, or all configured ones.
///
/// Names missing from the config fall back to the built-in preset of the
/// same name.
fn select_definitions(config: &LangverConfig, names: &[String]) -> Result<Vec<SegmentDefinition>> {
    if names.is_empty() {
        return SegmentDefinition::all_from_config(config);
    }

    names
        .iter()
        .map(|name| {
            match config.segments.iter().find(|s| &s.name == name) {
                Some(segment) => SegmentDefinition::from_config(segment, &config.properties),
                None if presets::builtin(name).is_some() => SegmentDefinition::from_config(
                    &SegmentConfig {
                        name: name.clone(),
                        ..Default::default()
                    },
                    &config.properties,
                ),
                None => Err(LangverError::UnknownSegment { name: name.clone() }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;
    use crate::environment::MockEnvironment;

    #[test]
    fn selects_configured_segments_in_order() {
        let config = default_config();
        let selected =
            select_definitions(&config, &["go".to_string(), "node".to_string()]).unwrap();
        let names: Vec<_> = selected.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["go", "node"]);
    }

    #[test]
    fn unconfigured_preset_is_selectable() {
        let config = LangverConfig::default();
        let selected = select_definitions(&config, &["rust".to_string()]).unwrap();
        assert_eq!(selected[0].commands[0].executable, "rustc");
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = select_definitions(&LangverConfig::default(), &["cobol".to_string()])
            .unwrap_err();
        assert!(matches!(err, LangverError::UnknownSegment { .. }));
    }

    #[test]
    fn evaluate_reports_each_segment() {
        let env = MockEnvironment::new()
            .with_files("go.mod")
            .with_command("go", &["version"], "go version go1.22.1 linux/amd64");
        let definitions = select_definitions(
            &default_config(),
            &["go".to_string(), "rust".to_string()],
        )
        .unwrap();

        let reports = evaluate(&env, &definitions);
        assert!(reports[0].enabled);
        assert_eq!(reports[0].state.version.full, "1.22.1");
        assert_eq!(
            reports[0].state.url,
            "https://golang.org/doc/go1.22"
        );
        assert!(!reports[1].enabled);
    }

    #[test]
    fn report_json_is_flat() {
        let report = SegmentReport {
            name: "go".into(),
            enabled: true,
            state: SegmentState::default(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["name"], "go");
        assert_eq!(json["full"], "");
        assert_eq!(json["exit_code"], 0);
    }
}
