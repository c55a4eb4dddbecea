//! Named-placeholder message templates.
//!
//! Templates look like `"Getting weather forecast, item count = {Count}"`.
//! `{{` and `}}` render as literal braces. A placeholder may carry an
//! alignment or format suffix (`{Count,5}`, `{Count:N0}`); the suffix is
//! accepted and ignored when rendering.

use std::fmt::{self, Display, Write as _};

use lazy_static::lazy_static;
use regex::Regex;

use super::error::TemplateError;

lazy_static! {
    /// Escaped braces, placeholders and stray braces, in that order of preference.
    static ref TOKEN_PATTERN: Regex = Regex::new(
        r"\{\{|\}\}|\{([^{}]*)\}|[{}]"
    ).unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder { name: String, raw: String },
}

/// A parsed message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    text: String,
    segments: Vec<Segment>,
}

impl MessageTemplate {
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let mut segments: Vec<Segment> = Vec::new();
        let mut literal = String::new();
        let mut last = 0;

        for caps in TOKEN_PATTERN.captures_iter(text) {
            let Some(token) = caps.get(0) else {
                continue;
            };
            literal.push_str(&text[last..token.start()]);
            last = token.end();

            match token.as_str() {
                "{{" => literal.push('{'),
                "}}" => literal.push('}'),
                "{" | "}" => {
                    return Err(TemplateError::UnbalancedBrace {
                        position: token.start(),
                    })
                }
                raw => {
                    let inner = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
                    let name = inner
                        .split([',', ':'])
                        .next()
                        .unwrap_or_default()
                        .trim();
                    if name.is_empty() {
                        return Err(TemplateError::EmptyPlaceholder {
                            position: token.start(),
                        });
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder {
                        name: name.to_string(),
                        raw: raw.to_string(),
                    });
                }
            }
        }

        literal.push_str(&text[last..]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            text: text.to_string(),
            segments,
        })
    }

    /// The template exactly as written.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Placeholder names in order of appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Placeholder { name, .. } => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Render with values looked up by placeholder name.
    ///
    /// Placeholders without a value are written back verbatim.
    pub fn render<V: Display>(&self, params: &[(&str, V)]) -> String {
        let mut out = String::with_capacity(self.text.len() + 16);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder { name, raw } => {
                    match params.iter().find(|(key, _)| *key == name.as_str()) {
                        Some((_, value)) => {
                            let _ = write!(out, "{}", value);
                        }
                        None => out.push_str(raw),
                    }
                }
            }
        }
        out
    }
}

impl Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_placeholder() {
        let t = MessageTemplate::parse("Getting weather forecast, item count = {Count}").unwrap();
        assert_eq!(t.placeholders(), vec!["Count"]);
        assert_eq!(
            t.render(&[("Count", 7)]),
            "Getting weather forecast, item count = 7"
        );
    }

    #[test]
    fn test_escaped_braces() {
        let t = MessageTemplate::parse("{{literal}} {Value}").unwrap();
        assert_eq!(t.placeholders(), vec!["Value"]);
        assert_eq!(t.render(&[("Value", "x")]), "{literal} x");
    }

    #[test]
    fn test_format_suffix_is_ignored() {
        let t = MessageTemplate::parse("n={Count:N0} w={Width,5}").unwrap();
        assert_eq!(t.placeholders(), vec!["Count", "Width"]);
        assert_eq!(t.render(&[("Count", 1), ("Width", 2)]), "n=1 w=2");
    }

    #[test]
    fn test_missing_value_renders_placeholder() {
        let t = MessageTemplate::parse("a={A} b={B:x}").unwrap();
        assert_eq!(t.render(&[("A", 1)]), "a=1 b={B:x}");
    }

    #[test]
    fn test_unbalanced_braces_rejected() {
        assert_eq!(
            MessageTemplate::parse("count = {Count"),
            Err(TemplateError::UnbalancedBrace { position: 8 })
        );
        assert_eq!(
            MessageTemplate::parse("{Count}}"),
            Err(TemplateError::UnbalancedBrace { position: 7 })
        );
    }

    #[test]
    fn test_empty_placeholder_rejected() {
        assert_eq!(
            MessageTemplate::parse("x {} y"),
            Err(TemplateError::EmptyPlaceholder { position: 2 })
        );
        assert_eq!(
            MessageTemplate::parse("{:N0}"),
            Err(TemplateError::EmptyPlaceholder { position: 0 })
        );
    }

    #[test]
    fn test_display_keeps_original_text() {
        let text = "{{x}} {Count}";
        let t = MessageTemplate::parse(text).unwrap();
        assert_eq!(t.to_string(), text);
        assert_eq!(t.as_str(), text);
    }
}
