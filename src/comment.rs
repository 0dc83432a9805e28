//! Comment recognition and skipping
//!
//! Three independent rules can be enabled when a tokenizer is built:
//!
//! - C-style: `// line` and `/* block */`
//! - hash-style: `## line`
//! - semicolon-style: `; line`
//!
//! A `//` immediately followed by `$` is not a comment, so text such as
//! `//$Name` survives as ordinary token text. Comments that run off the end
//! of the buffer are consumed quietly.

use crate::classify::is_line_end;
use crate::cursor::Cursor;
use serde::{Deserialize, Serialize};

/// Which comment rules are active, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentMode {
    /// Skip `//` line comments and `/* */` block comments
    #[serde(rename = "enable_c_comments")]
    pub c_comments: bool,
    /// Skip `##` line comments
    #[serde(rename = "enable_hash_comments")]
    pub hash_comments: bool,
    /// Skip `;` line comments
    #[serde(rename = "enable_semicolon_comments")]
    pub semicolon_comments: bool,
}

impl CommentMode {
    /// Creates a mode with every rule disabled
    pub const fn none() -> Self {
        Self {
            c_comments: false,
            hash_comments: false,
            semicolon_comments: false,
        }
    }

    /// Creates a mode with every rule enabled
    pub const fn all() -> Self {
        Self {
            c_comments: true,
            hash_comments: true,
            semicolon_comments: true,
        }
    }

    /// Enables or disables `//` and `/* */` comments
    pub const fn with_c_comments(mut self, enabled: bool) -> Self {
        self.c_comments = enabled;
        self
    }

    /// Enables or disables `##` comments
    pub const fn with_hash_comments(mut self, enabled: bool) -> Self {
        self.hash_comments = enabled;
        self
    }

    /// Enables or disables `;` comments
    pub const fn with_semicolon_comments(mut self, enabled: bool) -> Self {
        self.semicolon_comments = enabled;
        self
    }

    /// Returns the kind of comment starting at the cursor, if any
    pub fn detect(&self, cursor: &Cursor) -> Option<CommentKind> {
        if self.c_comments {
            if cursor.starts_with(b"//") && cursor.peek_at(2) != Some(b'$') {
                return Some(CommentKind::DoubleSlash);
            }
            if cursor.starts_with(b"/*") {
                return Some(CommentKind::Block);
            }
        }

        if self.hash_comments && cursor.starts_with(b"##") {
            return Some(CommentKind::DoubleHash);
        }

        if self.semicolon_comments && cursor.starts_with(b";") {
            return Some(CommentKind::Semicolon);
        }

        None
    }
}

impl Default for CommentMode {
    /// C-style comments only
    fn default() -> Self {
        Self::none().with_c_comments(true)
    }
}

/// Type of comment found at the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// `//` up to the end of the line
    DoubleSlash,
    /// `/*` up to the next `*/`
    Block,
    /// `##` up to the end of the line
    DoubleHash,
    /// `;` up to the end of the line
    Semicolon,
}

impl CommentKind {
    /// Moves the cursor past a comment of this kind
    pub fn skip(self, cursor: &mut Cursor) {
        match self {
            CommentKind::Block => skip_block_comment(cursor),
            _ => skip_line_comment(cursor),
        }
    }
}

/// Skips to just past the next newline or carriage return
pub fn skip_line_comment(cursor: &mut Cursor) {
    while let Some(byte) = cursor.current() {
        if is_line_end(byte) {
            break;
        }
        if !cursor.advance() {
            return;
        }
    }

    // Skip the line ending too
    cursor.advance();
}

/// Skips a `/* ... */` comment starting at the cursor, including the `*/`
///
/// The search for `*/` begins at the opener itself, so `/*/` is a complete
/// comment.
pub fn skip_block_comment(cursor: &mut Cursor) {
    while !cursor.starts_with(b"*/") {
        if !cursor.advance() {
            return;
        }
    }

    // Skip the '*/'
    cursor.advance();
    cursor.advance();
}
