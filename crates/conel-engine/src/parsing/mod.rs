//! # Incremental CoNLL-U parsing
//!
//! Two-phase, line-oriented parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is stripped and
//!    classified into a `LineClass` (blank, `# key = value` comment,
//!    malformed comment, token).
//!
//! 2. **Record Construction** (`builder`): a `RecordBuilder` holds the
//!    metadata and token buffers of the open record and emits a `Record`
//!    whenever a blank line closes a non-empty block, plus once at EOF.
//!
//! `reader` ties the two together: `RecordReader` pulls one line at a time
//! from any `BufRead` source and yields records lazily.
//!
//! ## Key Invariants
//!
//! - A record with no tokens and no metadata is never emitted
//! - Runs of blank lines, including leading and trailing ones, separate
//!   records exactly like a single blank line
//! - Content is never rejected; only read failures surface as errors

pub mod builder;
pub mod classify;
pub mod reader;

#[cfg(test)]
mod tests;

use std::io::BufRead;

use conel_config::ParseOptions;

pub use builder::RecordBuilder;
pub use classify::{ConlluLineClassifier, LineClass};
pub use reader::RecordReader;

/// Lazily parses CoNLL-U records from `source`.
pub fn parse<R: BufRead>(source: R) -> RecordReader<R> {
    RecordReader::new(source)
}

/// Like [`parse`], with explicit [`ParseOptions`] such as the malformed-comment policy.
pub fn parse_with_options<R: BufRead>(source: R, options: ParseOptions) -> RecordReader<R> {
    RecordReader::with_options(source, options)
}

/// Convenience: parse in-memory text.
pub fn parse_str(text: &str) -> RecordReader<&[u8]> {
    parse_str_with_options(text, ParseOptions::default())
}

/// Like [`parse_str`], with explicit [`ParseOptions`].
pub fn parse_str_with_options(text: &str, options: ParseOptions) -> RecordReader<&[u8]> {
    RecordReader::with_options(text.as_bytes(), options)
}
