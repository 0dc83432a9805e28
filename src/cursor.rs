//! Owned input buffer and the cursor that walks it
//!
//! Every higher level operation (whitespace skipping, comment skipping,
//! token scanning) is built from [`Cursor::advance`], which moves one byte
//! at a time and counts newlines as it leaves them.

use crate::error::Position;

/// Saved cursor state for backtracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorSnapshot {
    position: usize,
    line: usize,
    token_start: usize,
    token_end: usize,
}

/// Cursor over an owned byte buffer
///
/// Invariants: `position <= len`, `token_start <= token_end <= len`,
/// `line >= 1`.
#[derive(Debug, Clone)]
pub struct Cursor {
    /// Bytes loaded from the source; fixed once loaded
    buffer: Box<[u8]>,
    /// Current byte offset into the buffer
    position: usize,
    /// Current line number (1-based)
    line: usize,
    /// Start offset of the most recently scanned token
    token_start: usize,
    /// End offset (exclusive) of the most recently scanned token
    token_end: usize,
}

impl Cursor {
    /// Creates a cursor at the start of `buffer`
    pub fn new(buffer: impl Into<Box<[u8]>>) -> Self {
        Self {
            buffer: buffer.into(),
            position: 0,
            line: 1,
            token_start: 0,
            token_end: 0,
        }
    }

    /// Creates a cursor over an empty buffer
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Creates a snapshot of the current state for backtracking
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            token_start: self.token_start,
            token_end: self.token_end,
        }
    }

    /// Restores the state from a snapshot taken on this buffer
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.token_start = snapshot.token_start;
        self.token_end = snapshot.token_end;
    }

    /// Returns the loaded bytes
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Returns the buffer size in bytes
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the buffer holds no bytes
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the current byte offset
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the current line number (1-based)
    #[inline(always)]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the current line and offset
    pub fn current_position(&self) -> Position {
        Position {
            line: self.line,
            offset: self.position,
        }
    }

    /// Returns the start offset of the last scanned token
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Returns the end offset (exclusive) of the last scanned token
    pub fn token_end(&self) -> usize {
        self.token_end
    }

    /// Returns true once the cursor has run off the end of the buffer
    #[inline(always)]
    pub fn at_end(&self) -> bool {
        self.position >= self.buffer.len()
    }

    /// Returns the byte under the cursor
    #[inline(always)]
    pub fn current(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Returns the byte `offset` bytes past the cursor
    #[inline(always)]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.buffer.get(self.position + offset).copied()
    }

    /// Checks if the bytes under the cursor start with `prefix`
    #[inline(always)]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.buffer
            .get(self.position..)
            .is_some_and(|rest| rest.starts_with(prefix))
    }

    /// Moves one byte forward
    ///
    /// Returns false when there is no more input; the cursor is then parked
    /// at the end of the buffer. Leaving a `\n` increments the line.
    #[inline(always)]
    pub fn advance(&mut self) -> bool {
        if self.position + 1 >= self.buffer.len() {
            self.position = self.buffer.len();
            return false;
        }

        if self.buffer[self.position] == b'\n' {
            self.line += 1;
        }

        self.position += 1;
        self.token_end += 1;
        true
    }

    /// Marks the cursor position as the start of a new token
    pub fn begin_token(&mut self) {
        self.token_start = self.position;
        self.token_end = self.position;
    }

    /// Marks the end (exclusive) of the current token
    pub fn end_token(&mut self, end: usize) {
        self.token_end = end.clamp(self.token_start, self.buffer.len());
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_creation() {
        let cursor = Cursor::new(b"abc".to_vec());
        assert_eq!(cursor.len(), 3);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.token_start(), 0);
        assert_eq!(cursor.token_end(), 0);
        assert_eq!(cursor.current(), Some(b'a'));
        assert!(!cursor.at_end());
    }

    #[test]
    fn test_advance_to_end() {
        let mut cursor = Cursor::new(b"ab".to_vec());
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Some(b'b'));

        // Leaving the last byte reports no more input
        assert!(!cursor.advance());
        assert_eq!(cursor.position(), 2);
        assert!(cursor.at_end());
        assert_eq!(cursor.current(), None);

        // Stays parked at the end
        assert!(!cursor.advance());
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_line_tracking() {
        let mut cursor = Cursor::new(b"a\nb\n\nc".to_vec());
        let mut lines = Vec::new();
        loop {
            lines.push((cursor.current(), cursor.line()));
            if !cursor.advance() {
                break;
            }
        }
        assert_eq!(
            lines,
            vec![
                (Some(b'a'), 1),
                (Some(b'\n'), 1),
                (Some(b'b'), 2),
                (Some(b'\n'), 2),
                (Some(b'\n'), 3),
                (Some(b'c'), 4),
            ]
        );
    }

    #[test]
    fn test_trailing_newline_not_counted() {
        let mut cursor = Cursor::new(b"a\n".to_vec());
        assert!(cursor.advance());
        assert!(!cursor.advance());
        assert_eq!(cursor.line(), 1);
    }

    #[test]
    fn test_empty_buffer() {
        let mut cursor = Cursor::empty();
        assert!(cursor.is_empty());
        assert!(cursor.at_end());
        assert_eq!(cursor.current(), None);
        assert!(!cursor.advance());
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
    }

    #[test]
    fn test_peek_and_starts_with() {
        let mut cursor = Cursor::new(b"x/*y".to_vec());
        assert_eq!(cursor.peek_at(1), Some(b'/'));
        assert_eq!(cursor.peek_at(4), None);
        assert!(!cursor.starts_with(b"/*"));
        cursor.advance();
        assert!(cursor.starts_with(b"/*"));
        assert!(cursor.starts_with(b"/*y"));
        assert!(!cursor.starts_with(b"/*yz"));
    }

    #[test]
    fn test_token_span_tracks_advance() {
        let mut cursor = Cursor::new(b"  word ".to_vec());
        cursor.advance();
        cursor.advance();
        cursor.begin_token();
        assert_eq!(cursor.token_start(), 2);
        for _ in 0..4 {
            cursor.advance();
        }
        assert_eq!(cursor.token_end(), 6);
        cursor.end_token(cursor.position());
        assert_eq!(cursor.token_end(), 6);
    }

    #[test]
    fn test_end_token_clamped() {
        let mut cursor = Cursor::new(b"ab".to_vec());
        cursor.begin_token();
        cursor.end_token(10);
        assert_eq!(cursor.token_end(), 2);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut cursor = Cursor::new(b"one\ntwo".to_vec());
        let snapshot = cursor.snapshot();
        for _ in 0..5 {
            cursor.advance();
        }
        assert_eq!(cursor.line(), 2);

        cursor.restore(snapshot);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.token_end(), 0);
        assert_eq!(cursor.current_position(), Position::new());
    }
}
