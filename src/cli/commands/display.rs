//! Shared display helpers for segment output.

use console::Style;

use crate::segment::SegmentState;

/// Output styling.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Segment names (bold).
    pub name: Style,
    /// Resolved versions (green).
    pub version: Style,
    /// Version mismatches (orange).
    pub warning: Style,
    /// Resolution errors (red).
    pub error: Style,
    /// Secondary text (dim).
    pub dim: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// The colored theme.
    pub fn new() -> Self {
        Self {
            name: Style::new().bold(),
            version: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red(),
            dim: Style::new().dim(),
        }
    }

    /// A theme without colors.
    pub fn plain() -> Self {
        Self {
            name: Style::new(),
            version: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
        }
    }

    /// Colored when stdout is a terminal and `NO_COLOR` is unset.
    pub fn for_terminal() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// One line describing an evaluated segment.
    pub fn format_segment(&self, name: &str, state: &SegmentState) -> String {
        let mut line = format!("{}", self.name.apply_to(name));

        if !state.error.is_empty() {
            line.push_str(&format!(" {}", self.error.apply_to(&state.error)));
        } else if !state.version.full.is_empty() {
            line.push_str(&format!(" {}", self.version.apply_to(&state.version.full)));
            line.push_str(&format!(
                " {}",
                self.dim.apply_to(format!("({})", state.executable))
            ));
        }

        if state.mismatch {
            line.push_str(&format!(
                " {}",
                self.warning
                    .apply_to(format!("expected {}", state.expected))
            ));
        }

        if !state.url.is_empty() {
            line.push_str(&format!(" {}", self.dim.apply_to(&state.url)));
        }

        line
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Version;

    fn resolved() -> SegmentState {
        SegmentState {
            version: Version {
                full: "20.11.1".into(),
                ..Default::default()
            },
            executable: "node".into(),
            ..Default::default()
        }
    }

    #[test]
    fn formats_resolved_version() {
        let line = Theme::plain().format_segment("node", &resolved());
        assert_eq!(line, "node 20.11.1 (node)");
    }

    #[test]
    fn formats_error() {
        let state = SegmentState {
            error: "NO VERSION".into(),
            ..Default::default()
        };
        let line = Theme::plain().format_segment("go", &state);
        assert_eq!(line, "go NO VERSION");
    }

    #[test]
    fn formats_mismatch_and_url() {
        let state = SegmentState {
            expected: "18.0.0".into(),
            mismatch: true,
            url: "https://nodejs.org".into(),
            ..resolved()
        };
        let line = Theme::plain().format_segment("node", &state);
        assert_eq!(
            line,
            "node 20.11.1 (node) expected 18.0.0 https://nodejs.org"
        );
    }
}
