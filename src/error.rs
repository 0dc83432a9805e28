//! Error types and position tracking for the tokenizer
//!
//! Scanning itself never fails: malformed input (an unterminated quoted
//! string or block comment) is consumed to the end of the buffer. The only
//! fallible step is loading bytes into a [`Tokenizer`](crate::Tokenizer),
//! which is reported through [`LoadError`].

use std::fmt;
use std::io;
use thiserror::Error;

/// Represents a position in the loaded buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Line number (1-based)
    pub line: usize,
    /// Byte offset from the start of the buffer (0-based)
    pub offset: usize,
}

impl Position {
    /// Creates a new position at the start of input
    pub fn new() -> Self {
        Self { line: 1, offset: 0 }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} (byte {})", self.line, self.offset)
    }
}

/// Byte range of a scanned token, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start of the token
    pub start: Position,
    /// End of the token (exclusive)
    pub end: Position,
}

impl Span {
    /// Creates a new span from start and end positions
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Returns the length of the span in bytes
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    /// Returns true if the span is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(
                f,
                "line {} (bytes {}..{})",
                self.start.line, self.start.offset, self.end.offset
            )
        } else {
            write!(f, "{} to {}", self.start, self.end)
        }
    }
}

/// Errors raised while loading a byte source into a tokenizer
#[derive(Debug, Error)]
pub enum LoadError {
    /// The underlying file or reader could not be opened or read
    #[error("unable to read {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },

    /// A raw memory source was given a zero length
    #[error("length not specified")]
    LengthNotSpecified,

    /// A raw memory source claims more bytes than the slice holds
    #[error("length {length} exceeds the {available} bytes available")]
    LengthOutOfBounds { length: usize, available: usize },

    /// The requested offset lies past the end of the source
    #[error("offset {offset} is past the end of {name} ({size} bytes)")]
    OffsetOutOfRange {
        name: String,
        offset: u64,
        size: u64,
    },
}

impl LoadError {
    pub(crate) fn io(name: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            name: name.into(),
            source,
        }
    }
}
