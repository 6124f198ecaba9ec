use std::fmt;
use std::str::FromStr;

/// Rendered in place of a column that has no value.
pub const PLACEHOLDER: &str = "_";

/// Number of canonical CoNLL-U columns.
pub const FIELD_COUNT: usize = 10;

/// One of the ten canonical CoNLL-U columns, in column order.
///
/// See <https://universaldependencies.org/format.html>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Id,
    Form,
    Lemma,
    Upos,
    Xpos,
    Feats,
    Head,
    Deprel,
    Deps,
    Misc,
}

impl Field {
    /// All columns in the order they appear on a token line.
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Id,
        Field::Form,
        Field::Lemma,
        Field::Upos,
        Field::Xpos,
        Field::Feats,
        Field::Head,
        Field::Deprel,
        Field::Deps,
        Field::Misc,
    ];

    /// Lowercase column name as used in the format documentation.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Form => "form",
            Field::Lemma => "lemma",
            Field::Upos => "upos",
            Field::Xpos => "xpos",
            Field::Feats => "feats",
            Field::Head => "head",
            Field::Deprel => "deprel",
            Field::Deps => "deps",
            Field::Misc => "misc",
        }
    }

    /// Zero-based column position.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown CoNLL-U field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// A single token line: a mapping from [`Field`] to its raw string value.
///
/// Columns missing from the source stay absent; nothing is defaulted or
/// coerced at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    values: [Option<String>; FIELD_COUNT],
}

impl Token {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zips `values` positionally against [`Field::ALL`].
    ///
    /// Values past the tenth are discarded; columns without a value stay absent.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut token = Self::new();
        for (field, value) in Field::ALL.into_iter().zip(values) {
            token.values[field.index()] = Some(value.into());
        }
        token
    }

    /// Builds a token from one tab-separated line.
    pub fn from_line(line: &str) -> Self {
        Self::from_values(line.split('\t'))
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values[field.index()].as_deref()
    }

    /// Looks a value up by column name; unknown names yield `None`.
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        name.parse::<Field>().ok().and_then(|field| self.get(field))
    }

    /// Sets a column, returning the previous value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Option<String> {
        self.values[field.index()].replace(value.into())
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.values[field.index()].take()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.values[field.index()].is_some()
    }

    /// Number of columns that carry a value.
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Present columns in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    /// All ten columns tab-separated, [`PLACEHOLDER`] for absent ones.
    pub fn to_line(&self) -> String {
        Field::ALL
            .into_iter()
            .map(|field| self.get(field).unwrap_or(PLACEHOLDER))
            .collect::<Vec<_>>()
            .join("\t")
    }
}

impl<S: Into<String>> FromIterator<(Field, S)> for Token {
    fn from_iter<I: IntoIterator<Item = (Field, S)>>(iter: I) -> Self {
        let mut token = Self::new();
        for (field, value) in iter {
            token.set(field, value);
        }
        token
    }
}
