use core::num::ParseIntError;
use core::str::FromStr;
use displaydoc::Display;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Unexpected end of input while reading {field}")]
    MissingToken { field: Field },

    #[error("Invalid {field} `{token}`: {source}")]
    InvalidInteger {
        field: Field,
        token: String,
        source: ParseIntError,
    },

    #[error("Array length must be positive")]
    EmptyArray,

    #[error("Index 0 in {field} (indices start at 1)")]
    ZeroIndex { field: Field },
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Field {
    /// array length
    Len,
    /// update count
    UpdateCount,
    /// left bound of update {0}
    Left(usize),
    /// right bound of update {0}
    Right(usize),
    /// value of update {0}
    Value(usize),
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
/// [{left}, {right}] += {value}
pub struct Update {
    // Both bounds are 0-based and inclusive.
    pub left: usize,
    pub right: usize,
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    pub len: usize,
    pub updates: Vec<Update>,
}

struct Tokens<'a> {
    inner: core::str::SplitAsciiWhitespace<'a>,
}

impl Tokens<'_> {
    fn next<T: FromStr<Err = ParseIntError>>(&mut self, field: Field) -> Result<T, InputError> {
        let token = self.inner.next().ok_or(InputError::MissingToken { field })?;
        token.parse().map_err(|source| InputError::InvalidInteger {
            field,
            token: token.to_string(),
            source,
        })
    }

    // Converts a 1-based bound to 0-based.
    fn next_index(&mut self, field: Field) -> Result<usize, InputError> {
        let index: usize = self.next(field)?;
        index.checked_sub(1).ok_or(InputError::ZeroIndex { field })
    }
}

/// Parses `X Y` followed by `Y` triples `left right value` with 1-based inclusive bounds.
///
/// Bounds are only checked against zero here; checking them against `X` is left to the consumer.
pub fn parse_problem(input: &str) -> Result<Problem, InputError> {
    let mut tokens = Tokens {
        inner: input.split_ascii_whitespace(),
    };

    let len: usize = tokens.next(Field::Len)?;
    if len == 0 {
        return Err(InputError::EmptyArray);
    }
    let n_updates: usize = tokens.next(Field::UpdateCount)?;

    // Don't trust the count for preallocation.
    let mut updates = Vec::with_capacity(n_updates.min(input.len() / 6 + 1));
    for i in 1..=n_updates {
        let left = tokens.next_index(Field::Left(i))?;
        let right = tokens.next_index(Field::Right(i))?;
        let value = tokens.next(Field::Value(i))?;
        updates.push(Update { left, right, value });
    }

    let trailing = tokens.inner.count();
    if trailing > 0 {
        warn!(trailing, "ignoring tokens after the last update");
    }

    debug!(len, updates = updates.len(), "parsed problem");
    Ok(Problem { len, updates })
}
