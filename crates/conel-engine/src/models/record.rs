use std::fmt;
use std::ops::{Index, IndexMut};

use super::{Metadata, Token};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("Token index {index} out of range for record with {len} tokens")]
    IndexOutOfRange { index: usize, len: usize },
}

/// One sentence: ordered metadata plus the ordered token sequence.
///
/// The record exposes the usual sequence operations over its tokens directly,
/// so it can be used wherever a list of tokens is expected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    metadata: Metadata,
    tokens: Vec<Token>,
}

impl Record {
    /// Creates a record with fresh, empty metadata.
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self::with_metadata(tokens, Metadata::new())
    }

    pub fn with_metadata(tokens: impl IntoIterator<Item = Token>, metadata: Metadata) -> Self {
        Self {
            metadata,
            tokens: tokens.into_iter().collect(),
        }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_parts(self) -> (Metadata, Vec<Token>) {
        (self.metadata, self.tokens)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Token> {
        self.tokens.get_mut(index)
    }

    /// Like [`Record::get`], but reports an out-of-range index as an error.
    pub fn token(&self, index: usize) -> Result<&Token, RecordError> {
        let len = self.len();
        self.tokens
            .get(index)
            .ok_or(RecordError::IndexOutOfRange { index, len })
    }

    pub fn token_mut(&mut self, index: usize) -> Result<&mut Token, RecordError> {
        let len = self.len();
        self.tokens
            .get_mut(index)
            .ok_or(RecordError::IndexOutOfRange { index, len })
    }

    /// Replaces the token at `index`, returning the one it replaced.
    pub fn set(&mut self, index: usize, token: Token) -> Result<Token, RecordError> {
        let slot = self.token_mut(index)?;
        Ok(std::mem::replace(slot, token))
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Inserts before `index`; `index == len()` appends.
    pub fn insert(&mut self, index: usize, token: Token) -> Result<(), RecordError> {
        let len = self.len();
        if index > len {
            return Err(RecordError::IndexOutOfRange { index, len });
        }
        self.tokens.insert(index, token);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Token, RecordError> {
        let len = self.len();
        if index >= len {
            return Err(RecordError::IndexOutOfRange { index, len });
        }
        Ok(self.tokens.remove(index))
    }

    pub fn pop(&mut self) -> Option<Token> {
        self.tokens.pop()
    }

    /// Removes all tokens; metadata is left untouched.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn truncate(&mut self, len: usize) {
        self.tokens.truncate(len);
    }

    pub fn retain(&mut self, keep: impl FnMut(&Token) -> bool) {
        self.tokens.retain(keep);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Token> {
        self.tokens.iter_mut()
    }

    /// Renders the record as CoNLL-U text.
    ///
    /// Every metadata entry becomes `# key: value`, followed by one line per
    /// token. Lines are joined with `\n`; there is no trailing newline.
    pub fn serialize(&self) -> String {
        let mut lines = Vec::with_capacity(self.metadata.len() + self.tokens.len());
        for (key, value) in &self.metadata {
            lines.push(format!("# {key}: {value}"));
        }
        for token in &self.tokens {
            lines.push(token.to_line());
        }
        lines.join("\n")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl Index<usize> for Record {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl IndexMut<usize> for Record {
    fn index_mut(&mut self, index: usize) -> &mut Token {
        &mut self.tokens[index]
    }
}

impl Extend<Token> for Record {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        self.tokens.extend(iter);
    }
}

impl FromIterator<Token> for Record {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl IntoIterator for Record {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a mut Record {
    type Item = &'a mut Token;
    type IntoIter = std::slice::IterMut<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter_mut()
    }
}
