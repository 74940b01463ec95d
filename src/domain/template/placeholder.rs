use std::sync::OnceLock;

use regex::Regex;

/// Opening marker of a value placeholder.
pub const VALUE_OPEN: &str = "{{";
/// Opening marker of a block construct (loops, conditionals).
pub const BLOCK_OPEN: &str = "{%";

/// One piece of a templated string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text copied through unchanged.
    Literal(&'a str),
    /// A unit handed to the template engine: one `{{ ... }}` expression, or a whole
    /// string containing block markers.
    Placeholder(&'a str),
}

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Literal(text) | Token::Placeholder(text) => text,
        }
    }
}

/// Whether the string carries any template markers.
pub fn contains_template(text: &str) -> bool {
    text.contains(VALUE_OPEN) || text.contains(BLOCK_OPEN)
}

/// Split a string into literal runs and placeholders.
///
/// A string containing `{%` is a single placeholder since block constructs cannot
/// be split. Concatenating the tokens always reproduces the input.
///
/// A `{{ ... }}` expression containing `}` (a dict literal, for instance) is not
/// recognised and stays literal text.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    if text.contains(BLOCK_OPEN) {
        return vec![Token::Placeholder(text)];
    }

    let mut tokens = Vec::new();
    let mut last = 0;

    for found in placeholder_pattern().find_iter(text) {
        if found.start() > last {
            tokens.push(Token::Literal(&text[last..found.start()]));
        }
        tokens.push(Token::Placeholder(found.as_str()));
        last = found.end();
    }

    if last < text.len() {
        tokens.push(Token::Literal(&text[last..]));
    }

    tokens
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{[^}]*\}\}").expect("placeholder pattern is valid"))
}
