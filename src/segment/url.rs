//! Documentation link rendering.

use super::command::VersionCommand;
use super::language::SegmentState;
use crate::template::{render, TemplateContext};

/// Pick the link template: user override, then the command's own, then
/// the segment default.
pub fn select_template<'t>(
    user: Option<&'t str>,
    command: Option<&'t VersionCommand>,
    segment_default: Option<&'t str>,
) -> Option<&'t str> {
    let non_empty = |t: &&str| !t.is_empty();

    user.filter(non_empty)
        .or_else(|| {
            command
                .and_then(|c| c.url_template.as_deref())
                .filter(non_empty)
        })
        .or_else(|| segment_default.filter(non_empty))
}

/// Template fields exposed for a segment state.
pub fn template_context(state: &SegmentState) -> TemplateContext {
    let version = &state.version;
    TemplateContext::new()
        .with("Full", version.full.as_str())
        .with("Major", version.major.as_str())
        .with("Minor", version.minor.as_str())
        .with("Patch", version.patch.as_str())
        .with("Prerelease", version.prerelease.as_str())
        .with("BuildMetadata", version.build_metadata.as_str())
        .with("Executable", state.executable.as_str())
        .with("Expected", state.expected.as_str())
}

/// Render `template` for `state`; any failure yields an empty link.
pub fn render_url(template: &str, state: &SegmentState) -> String {
    match render(template, &template_context(state)) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!("Dropping version link, template {:?}: {}", template, e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Version;

    fn state() -> SegmentState {
        SegmentState {
            version: Version {
                full: "1.3.307".into(),
                major: "1".into(),
                minor: "3".into(),
                patch: "307".into(),
                ..Default::default()
            },
            executable: "corn".into(),
            ..Default::default()
        }
    }

    fn corn(template: Option<&str>) -> VersionCommand {
        let cmd = VersionCommand::new("corn", &["--version"], "(?P<version>.*)");
        match template {
            Some(t) => cmd.with_url_template(t),
            None => cmd,
        }
    }

    #[test]
    fn user_template_wins() {
        let cmd = corn(Some("https://cmd/"));
        assert_eq!(
            select_template(Some("https://user/"), Some(&cmd), Some("https://seg/")),
            Some("https://user/")
        );
    }

    #[test]
    fn command_template_beats_segment_default() {
        let cmd = corn(Some("https://cmd/"));
        assert_eq!(
            select_template(None, Some(&cmd), Some("https://seg/")),
            Some("https://cmd/")
        );
    }

    #[test]
    fn segment_default_last() {
        let cmd = corn(None);
        assert_eq!(
            select_template(None, Some(&cmd), Some("https://seg/")),
            Some("https://seg/")
        );
        assert_eq!(select_template(None, None, None), None);
    }

    #[test]
    fn renders_fields() {
        assert_eq!(
            render_url("https://custom/url/template/{{ .Major }}.{{ .Minor }}", &state()),
            "https://custom/url/template/1.3"
        );
        assert_eq!(render_url("{{ .Executable }}", &state()), "corn");
    }

    #[test]
    fn render_failure_is_empty() {
        assert_eq!(render_url("https://x/{{ .Nope }}", &state()), "");
        assert_eq!(render_url("https://x/{{ .Full", &state()), "");
    }
}
