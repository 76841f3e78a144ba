//! Minimal inline markup for bot replies.
//!
//! Bot text supports exactly two transforms: `**bold**` spans and literal
//! newlines as line breaks. Everything else is rendered as literal text.
//! Parsing produces [`Inline`] spans; escaping happens at render time, where
//! text runs pass through Leptos text nodes.

/// One span of a parsed bot reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Literal text, escaped at render time.
    Text(String),
    /// A `**bold**` span (delimiters stripped).
    Bold(String),
    /// A literal newline.
    Break,
}

/// Parse bot-reply text into inline spans.
///
/// Bold spans are matched non-greedily and never cross a line break; an
/// unpaired `**` stays literal.
#[must_use]
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            spans.push(Inline::Break);
        }
        parse_line(line, &mut spans);
    }

    spans
}

fn parse_line(line: &str, spans: &mut Vec<Inline>) {
    let mut rest = line;

    while let Some(open) = rest.find("**") {
        match rest[open + 2..].find("**") {
            Some(close) => {
                if open > 0 {
                    spans.push(Inline::Text(rest[..open].to_string()));
                }
                spans.push(Inline::Bold(rest[open + 2..open + 2 + close].to_string()));
                rest = &rest[open + 2 + close + 2..];
            }
            None => break,
        }
    }

    if !rest.is_empty() {
        spans.push(Inline::Text(rest.to_string()));
    }
}
