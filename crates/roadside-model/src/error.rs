// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::index::CityIndex;
use thiserror::Error;

/// The input does not describe a road: missing or malformed header values,
/// malformed records, or too few records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The stream ended before a header value was found.
    #[error("unexpected end of input while looking for the {expected}")]
    UnexpectedEof { expected: &'static str },

    /// A token that should be a decimal integer is not one.
    #[error("could not parse token '{token}' as the {field}")]
    InvalidInteger { token: String, field: &'static str },

    /// The road length lies outside the configured bounds.
    #[error("road length {length} is outside [{min}, {max}]")]
    LengthOutOfBounds { length: i64, min: i64, max: i64 },

    /// The declared city count lies outside the configured bounds.
    #[error("city count {count} is outside [{min}, {max}]")]
    CityCountOutOfBounds { count: i64, min: usize, max: usize },

    /// A record holds a position but no city name.
    #[error("record at position {position} has no city name")]
    MissingName { position: i64 },

    /// Fewer records than declared were available.
    #[error("expected {declared} city records but found only {found}")]
    MissingRecords { declared: usize, found: usize },
}

/// A well-formed record breaks a road invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    /// The position is not strictly between `0` and the road length.
    #[error("position {position} is outside the open interval (0, {length})")]
    PositionOutOfRange { position: i64, length: i64 },

    /// Another city already occupies the position.
    #[error("position {position} is already taken by {first}")]
    DuplicatePosition { position: i64, first: CityIndex },

    /// The city name is empty after trimming and truncation.
    #[error("city at position {position} has an empty name")]
    EmptyName { position: i64 },

    /// More cities were added than the road declares.
    #[error("road already holds all {declared} declared cities")]
    CapacityExceeded { declared: usize },
}

/// The error type for road loading.
#[derive(Debug, Error)]
pub enum RoadLoaderError {
    /// The source could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is malformed. `line` is the 1-based line where it was detected.
    #[error("format error on line {line}: {source}")]
    Format {
        line: usize,
        #[source]
        source: FormatError,
    },

    /// A record violates a road invariant.
    #[error("constraint violation on line {line}: {source}")]
    Constraint {
        line: usize,
        #[source]
        source: ConstraintError,
    },
}

impl RoadLoaderError {
    #[inline]
    pub(crate) fn format(line: usize, source: FormatError) -> Self {
        Self::Format { line, source }
    }

    #[inline]
    pub(crate) fn constraint(line: usize, source: ConstraintError) -> Self {
        Self::Constraint { line, source }
    }

    /// Returns the line the error was detected on, if it came from the content.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Io(_) => None,
            Self::Format { line, .. } | Self::Constraint { line, .. } => Some(*line),
        }
    }

    /// Returns the format error, if this is one.
    pub fn as_format(&self) -> Option<&FormatError> {
        match self {
            Self::Format { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Returns the constraint error, if this is one.
    pub fn as_constraint(&self) -> Option<&ConstraintError> {
        match self {
            Self::Constraint { source, .. } => Some(source),
            _ => None,
        }
    }
}
