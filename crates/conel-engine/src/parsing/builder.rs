use conel_config::{MalformedComments, ParseOptions};

use super::classify::LineClass;
use crate::models::{Metadata, Record, Token};

/// Accumulates classified lines into [`Record`]s.
///
/// The builder owns the metadata and token buffers of the record currently
/// being read. A blank line or [`RecordBuilder::finish`] hands both buffers
/// over to a new record and leaves the builder empty.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    metadata: Metadata,
    tokens: Vec<Token>,
    options: ParseOptions,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Feeds one classified line, returning a record when a blank line
    /// closes a non-empty block.
    pub fn push(&mut self, line: &LineClass<'_>) -> Option<Record> {
        match *line {
            LineClass::Blank => return self.flush(),
            LineClass::Comment { key, value } => {
                self.metadata.insert(key, value);
            }
            LineClass::MalformedComment(text) => match self.options.malformed_comments {
                MalformedComments::Drop => {
                    log::debug!("Dropping comment line without `key = value`: {text:?}");
                }
                MalformedComments::Token => self.tokens.push(Token::from_line(text)),
            },
            LineClass::Token(text) => self.tokens.push(Token::from_line(text)),
        }
        None
    }

    /// EOF flush: returns the last record if anything is still buffered.
    pub fn finish(&mut self) -> Option<Record> {
        self.flush()
    }

    /// Whether any metadata or tokens are waiting to be emitted.
    pub fn has_pending(&self) -> bool {
        !self.metadata.is_empty() || !self.tokens.is_empty()
    }

    fn flush(&mut self) -> Option<Record> {
        if !self.has_pending() {
            return None;
        }
        let metadata = std::mem::take(&mut self.metadata);
        let tokens = std::mem::take(&mut self.tokens);
        log::trace!(
            "Emitting record with {} metadata entries and {} tokens",
            metadata.len(),
            tokens.len()
        );
        Some(Record::with_metadata(tokens, metadata))
    }
}
