//! The language segment and its enablement gate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::command::{Version, VersionCommand};
use super::extractor::VersionExtractor;
use super::matcher::{in_context, matches_extensions, matches_folders};
use super::pin::VersionPin;
use super::resolver::resolve_command;
use super::url::{render_url, select_template};
use super::ResolveError;
use crate::cache::{parse_cache_duration, CacheDuration};
use crate::config::properties::{
    Properties, CACHE_DURATION, DISPLAY_MODE, FETCH_VERSION, HOME_ENABLED, MISSING_COMMAND_TEXT,
    VERSION_URL_TEMPLATE,
};
use crate::environment::Environment;

/// Cache duration used when the property is absent or unparsable.
pub const DEFAULT_CACHE_DURATION: &str = "1h";

/// When a segment is eligible to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Only when project files or folders are present.
    #[default]
    Files,
    /// Everywhere (outside the home directory unless allowed).
    Always,
    /// When project files are present or a context variable is set.
    Context,
}

impl DisplayMode {
    /// The property value for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Files => "files",
            DisplayMode::Always => "always",
            DisplayMode::Context => "context",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "files" => Ok(DisplayMode::Files),
            "always" => Ok(DisplayMode::Always),
            "context" => Ok(DisplayMode::Context),
            other => Err(format!(
                "unknown display mode '{}' (expected files, always or context)",
                other
            )),
        }
    }
}

/// What the rendering layer reads after evaluation.
///
/// After [`LanguageSegment::enabled`] exactly one of these holds: `error`
/// is set, `version.full` is set, or both are empty because version
/// fetching is disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SegmentState {
    #[serde(flatten)]
    pub version: Version,
    /// Command that produced the version.
    pub executable: String,
    /// Version the project pins, if a pin is configured.
    pub expected: String,
    /// The pin reports a different version.
    pub mismatch: bool,
    /// Resolution failure text.
    pub error: String,
    /// Exit code of a failed command.
    pub exit_code: i32,
    /// Documentation link.
    pub url: String,
}

/// A language runtime prompt segment.
///
/// Built fresh per prompt evaluation. The first call to [`enabled`]
/// runs the whole pipeline; later calls return the memoized answer.
///
/// [`enabled`]: LanguageSegment::enabled
pub struct LanguageSegment<'a> {
    name: String,
    env: &'a dyn Environment,
    props: Properties,
    extensions: Vec<String>,
    folders: Vec<String>,
    context_env: Vec<String>,
    commands: Vec<VersionCommand>,
    version_url_template: Option<String>,
    pin: Option<Box<dyn VersionPin + 'a>>,
    enabled: Option<bool>,
    state: SegmentState,
}

impl<'a> LanguageSegment<'a> {
    /// Create a segment with no triggers and no commands.
    pub fn new(name: &str, env: &'a dyn Environment) -> Self {
        Self {
            name: name.to_string(),
            env,
            props: Properties::new(),
            extensions: Vec::new(),
            folders: Vec::new(),
            context_env: Vec::new(),
            commands: Vec::new(),
            version_url_template: None,
            pin: None,
            enabled: None,
            state: SegmentState::default(),
        }
    }

    /// File globs that mark a project.
    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = extensions.iter().map(|e| e.to_string()).collect();
        self
    }

    /// Folder names that mark a project.
    pub fn with_folders(mut self, folders: &[&str]) -> Self {
        self.folders = folders.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Environment variables that signal an active context.
    pub fn with_context_env(mut self, variables: &[&str]) -> Self {
        self.context_env = variables.iter().map(|v| v.to_string()).collect();
        self
    }

    /// Version commands in priority order.
    pub fn with_commands(mut self, commands: Vec<VersionCommand>) -> Self {
        self.commands = commands;
        self
    }

    /// Segment-level default link template.
    pub fn with_version_url_template(mut self, template: &str) -> Self {
        self.version_url_template = Some(template.to_string());
        self
    }

    /// Expected-version source.
    pub fn with_version_pin(mut self, pin: impl VersionPin + 'a) -> Self {
        self.pin = Some(Box::new(pin));
        self
    }

    /// Segment properties.
    pub fn with_properties(mut self, props: Properties) -> Self {
        self.props = props;
        self
    }

    /// Segment name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved state. Empty until [`LanguageSegment::enabled`] runs.
    pub fn state(&self) -> &SegmentState {
        &self.state
    }

    /// Segment properties.
    pub fn properties(&self) -> &Properties {
        &self.props
    }

    /// Configured display mode, `files` when unset or invalid.
    pub fn display_mode(&self) -> DisplayMode {
        let Some(raw) = self.props.get_str(DISPLAY_MODE) else {
            return DisplayMode::default();
        };

        raw.parse().unwrap_or_else(|e| {
            tracing::debug!("{}: {}", self.name, e);
            DisplayMode::default()
        })
    }

    /// Configured cache duration, one hour when unset or invalid.
    pub fn cache_duration(&self) -> CacheDuration {
        let raw = self
            .props
            .get_string(CACHE_DURATION, DEFAULT_CACHE_DURATION);

        parse_cache_duration(&raw)
            .or_else(|e| {
                tracing::debug!("{}: bad cache_duration {:?}: {}", self.name, raw, e);
                parse_cache_duration(DEFAULT_CACHE_DURATION)
            })
            .unwrap_or(CacheDuration::None)
    }

    /// Decide whether the segment renders, resolving its version on the way.
    ///
    /// Returns true once the gate passes, whether or not a version was
    /// found; failures are reported through [`SegmentState::error`].
    pub fn enabled(&mut self) -> bool {
        if let Some(enabled) = self.enabled {
            return enabled;
        }

        let enabled = self.evaluate();
        self.enabled = Some(enabled);
        enabled
    }

    fn evaluate(&mut self) -> bool {
        if !self.props.get_bool(HOME_ENABLED, false) && self.env.pwd() == self.env.home() {
            tracing::debug!("{}: disabled in the home directory", self.name);
            return false;
        }

        let eligible = match self.display_mode() {
            DisplayMode::Always => true,
            DisplayMode::Files => self.matches_project(),
            DisplayMode::Context => {
                self.matches_project() || in_context(self.env, &self.context_env)
            }
        };

        if !eligible {
            tracing::debug!("{}: no project files", self.name);
            return false;
        }

        self.resolve_version();
        self.reconcile();
        true
    }

    fn matches_project(&self) -> bool {
        matches_extensions(self.env, &self.extensions) || matches_folders(self.env, &self.folders)
    }

    fn resolve_version(&mut self) {
        if !self.props.get_bool(FETCH_VERSION, true) {
            tracing::debug!("{}: version fetching disabled", self.name);
            return;
        }

        let Some(command) = resolve_command(self.env, &self.commands) else {
            record_error(&mut self.state, &self.props, ResolveError::NoCommand);
            return;
        };

        let extractor = VersionExtractor::new(self.env, self.cache_duration());
        match extractor.extract(command) {
            Ok(version) => {
                self.state.version = version;
                self.state.executable = command.executable.clone();

                let template = select_template(
                    self.props.get_str(VERSION_URL_TEMPLATE),
                    Some(command),
                    self.version_url_template.as_deref(),
                );
                if let Some(template) = template {
                    self.state.url = render_url(template, &self.state);
                }
            }
            Err(err) => record_error(&mut self.state, &self.props, err),
        }
    }

    fn reconcile(&mut self) {
        let Some(pin) = &self.pin else {
            return;
        };

        if let Some(check) = pin.check(self.env, &self.state.version) {
            self.state.mismatch = !check.matches;
            self.state.expected = check.expected;
        }
    }
}

fn record_error(state: &mut SegmentState, props: &Properties, err: ResolveError) {
    let custom = props
        .get_str(MISSING_COMMAND_TEXT)
        .filter(|text| !text.is_empty());

    state.error = match (&err, custom) {
        (ResolveError::NoCommand | ResolveError::CommandFailed { .. }, Some(text)) => {
            text.to_string()
        }
        _ => err.to_string(),
    };

    if let ResolveError::CommandFailed { exit_code, .. } = err {
        state.exit_code = exit_code;
    }
}
