//! Streaming reader and writer for the CoNLL-U treebank format.
//!
//! [`parse`] turns any `BufRead` source into a lazy sequence of [`Record`]s;
//! [`Record::serialize`] turns a record back into CoNLL-U text.

pub mod io;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use conel_config::{Config, MalformedComments, ParseOptions, WriteOptions};
pub use io::{
    IoError, open_file, open_file_with_options, read_file, read_file_with_options, write_file,
    write_records,
};
pub use models::{Field, Metadata, Record, RecordError, Token, UnknownField};
pub use parsing::{RecordReader, parse, parse_str, parse_str_with_options, parse_with_options};
