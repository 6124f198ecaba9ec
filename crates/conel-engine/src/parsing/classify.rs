use std::sync::OnceLock;

use regex::Regex;

/// Classification of a single input line.
///
/// This is phase 1 of parsing: each line is classified independently
/// without reference to surrounding lines. Borrowed slices point into the
/// trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty or whitespace-only; separates records.
    Blank,
    /// A `# key = value` metadata comment.
    Comment { key: &'a str, value: &'a str },
    /// Starts with `#` but is not a `key = value` comment.
    MalformedComment(&'a str),
    /// Anything else: tab-separated token columns.
    Token(&'a str),
}

/// Classifies individual lines of CoNLL-U input.
pub struct ConlluLineClassifier;

impl ConlluLineClassifier {
    /// Classifies a raw line (line terminator optional) into a [`LineClass`].
    ///
    /// Leading and trailing whitespace is stripped before anything else.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineClass::Blank;
        }

        if let Some(caps) = comment_regex().captures(trimmed) {
            let key = caps.get(1).map_or("", |m| m.as_str());
            let value = caps.get(2).map_or("", |m| m.as_str());
            return LineClass::Comment { key, value };
        }

        if trimmed.starts_with('#') {
            LineClass::MalformedComment(trimmed)
        } else {
            LineClass::Token(trimmed)
        }
    }
}

// Greedy key ending in non-whitespace: `# a = b = c` yields key `a = b`, value `c`.
fn comment_regex() -> &'static Regex {
    static COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();
    COMMENT_REGEX
        .get_or_init(|| Regex::new(r"^#\s+(.*\S)\s+=(?:\s+(.*))?$").expect("Invalid comment regex"))
}
