use std::io::{self, BufRead};
use std::iter::FusedIterator;

use conel_config::ParseOptions;

use super::{builder::RecordBuilder, classify::ConlluLineClassifier};
use crate::models::Record;

/// Pull-based reader yielding one [`Record`] per blank-line-delimited block.
///
/// Each call to `next` reads lines until a record is complete or the source
/// is exhausted. Nothing beyond the current line is read ahead, so the
/// reader works on pipes and other partial input. A read failure is yielded
/// once as `Err` and ends the sequence.
///
/// The reader takes `R` by value; pass `&mut source` to keep ownership of
/// the underlying stream.
#[derive(Debug)]
pub struct RecordReader<R> {
    source: R,
    line: String,
    builder: RecordBuilder,
    done: bool,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(source: R) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    pub fn with_options(source: R, options: ParseOptions) -> Self {
        Self {
            source,
            line: String::new(),
            builder: RecordBuilder::with_options(options),
            done: false,
        }
    }

    /// Produces the next record, `Ok(None)` once the source is exhausted.
    pub fn read_record(&mut self) -> io::Result<Option<Record>> {
        if self.done {
            return Ok(None);
        }

        let classifier = ConlluLineClassifier;
        loop {
            self.line.clear();
            let read = match self.source.read_line(&mut self.line) {
                Ok(read) => read,
                Err(err) => {
                    self.done = true;
                    return Err(err);
                }
            };

            if read == 0 {
                self.done = true;
                return Ok(self.builder.finish());
            }

            if let Some(record) = self.builder.push(&classifier.classify(&self.line)) {
                return Ok(Some(record));
            }
        }
    }

    /// Returns the underlying source, discarding any buffered lines.
    pub fn into_inner(self) -> R {
        self.source
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = io::Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}

impl<R: BufRead> FusedIterator for RecordReader<R> {}
