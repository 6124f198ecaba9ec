pub mod metadata;
pub mod record;
pub mod token;

pub use metadata::Metadata;
pub use record::{Record, RecordError};
pub use token::{FIELD_COUNT, Field, PLACEHOLDER, Token, UnknownField};
