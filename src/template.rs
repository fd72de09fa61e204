//! Field substitution for link templates.
//!
//! Templates use Go-template style field actions:
//!
//! - `{{ .Field }}` - replaced with the field's value
//! - everything outside `{{ }}` is copied verbatim
//!
//! Only plain field references are supported. Anything else inside an
//! action (pipelines, conditionals, functions) is a [`TemplateError`].
//!
//! # Example
//!
//! ```
//! use langver::template::{render, TemplateContext};
//!
//! let ctx = TemplateContext::new().with("Full", "1.3.307");
//! let url = render("https://x/{{ .Full }}", &ctx).unwrap();
//! assert_eq!(url, "https://x/1.3.307");
//! ```

use std::collections::HashMap;
use thiserror::Error;

/// Why a template could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// An `{{` without a matching `}}`.
    #[error("unterminated action starting at byte {offset}")]
    Unterminated { offset: usize },

    /// An action that is not a plain `.Field` reference.
    #[error("unsupported action: {{{{{action}}}}}")]
    Unsupported { action: String },

    /// A field that the context does not provide.
    #[error("unknown field: .{name}")]
    UnknownField { name: String },
}

/// A parsed piece of a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Field reference: {{ .Name }}
    Field(String),
}

/// Parse a template into literal and field segments.
pub fn parse(input: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut rest = input;
    let mut offset = 0;

    while let Some(start) = rest.find("{{") {
        if start > 0 {
            segments.push(Segment::Literal(rest[..start].to_string()));
        }

        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            return Err(TemplateError::Unterminated {
                offset: offset + start,
            });
        };

        let action = after_open[..end].trim();
        segments.push(Segment::Field(parse_field(action)?));

        let consumed = start + 2 + end + 2;
        offset += consumed;
        rest = &rest[consumed..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest.to_string()));
    }

    Ok(segments)
}

fn parse_field(action: &str) -> Result<String, TemplateError> {
    let unsupported = || TemplateError::Unsupported {
        action: action.to_string(),
    };

    let name = action.strip_prefix('.').ok_or_else(unsupported)?;
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(unsupported());
    }

    Ok(name.to_string())
}

/// Field values available to a template.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    fields: HashMap<String, String>,
}

impl TemplateContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field.
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace a field.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), value.into());
    }

    /// Look up a field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Render a template against a context.
///
/// # Errors
///
/// Fails on malformed actions and on fields missing from `context`.
pub fn render(input: &str, context: &TemplateContext) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(input.len());

    for segment in parse(input)? {
        match segment {
            Segment::Literal(text) => result.push_str(&text),
            Segment::Field(name) => match context.get(&name) {
                Some(value) => result.push_str(value),
                None => return Err(TemplateError::UnknownField { name }),
            },
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> TemplateContext {
        TemplateContext::new()
            .with("Full", "1.3.307")
            .with("Major", "1")
            .with("Minor", "3")
    }

    #[test]
    fn parse_literal_only() {
        let segments = parse("https://example.com").unwrap();
        assert_eq!(
            segments,
            vec![Segment::Literal("https://example.com".to_string())]
        );
    }

    #[test]
    fn parse_mixed() {
        let segments = parse("v{{ .Major }}.{{.Minor}}").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Literal("v".to_string()),
                Segment::Field("Major".to_string()),
                Segment::Literal(".".to_string()),
                Segment::Field("Minor".to_string()),
            ]
        );
    }

    #[test]
    fn render_substitutes_fields() {
        assert_eq!(
            render("https://unicor.org/doc/{{ .Full }}", &ctx()).unwrap(),
            "https://unicor.org/doc/1.3.307"
        );
        assert_eq!(
            render("https://custom/{{ .Major }}.{{ .Minor }}", &ctx()).unwrap(),
            "https://custom/1.3"
        );
    }

    #[test]
    fn render_plain_text() {
        assert_eq!(render("no actions here", &ctx()).unwrap(), "no actions here");
    }

    #[test]
    fn unterminated_action() {
        let err = render("https://x/{{ .Full", &ctx()).unwrap_err();
        assert_eq!(err, TemplateError::Unterminated { offset: 10 });
    }

    #[test]
    fn unsupported_action() {
        let err = render("{{ if .Full }}x{{ end }}", &ctx()).unwrap_err();
        assert!(matches!(err, TemplateError::Unsupported { .. }));
        assert!(err.to_string().contains("if .Full"));
    }

    #[test]
    fn unknown_field() {
        let err = render("{{ .Nope }}", &ctx()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::UnknownField {
                name: "Nope".to_string()
            }
        );
    }

    #[test]
    fn empty_field_value_renders_empty() {
        let ctx = TemplateContext::new().with("Patch", "");
        assert_eq!(render("[{{ .Patch }}]", &ctx).unwrap(), "[]");
    }
}
