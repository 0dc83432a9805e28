//! The tokenizer: one scan loop over an owned buffer
//!
//! Each call to [`Tokenizer::get_token`] skips whitespace and enabled
//! comments, then returns one of:
//!
//! - a single special character (`=`, `{`, `;` ...),
//! - the verbatim contents of a `"quoted"` literal,
//! - a plain word running up to whitespace or a special character,
//! - an empty string once the input is exhausted.
//!
//! No state other than the cursor survives between calls.

use crate::classify::{SpecialSet, is_whitespace};
use crate::comment::CommentMode;
use crate::convert::{parse_bool, parse_float, parse_integer};
use crate::cursor::Cursor;
use crate::error::{LoadError, Position, Span};
use crate::source::{ByteSource, FileRegion, RawBytes, ReaderSource, TextRegion};
use std::io::Read;
use std::iter::FusedIterator;
use std::path::Path;

/// Source name reported before anything is loaded
const UNNAMED_SOURCE: &str = "nothing";

/// A scanned token with its location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text; quotes are stripped from quoted literals
    pub text: String,
    /// True if the token was a `"quoted"` literal
    pub quoted: bool,
    /// Location of the token in the buffer, quotes included
    pub span: Span,
}

impl Token {
    fn end(position: Position) -> Self {
        Self {
            text: String::new(),
            quoted: false,
            span: Span::new(position, position),
        }
    }

    /// Returns true for the empty token returned at end of input
    ///
    /// An empty quoted literal (`""`) is not the end.
    pub fn is_end(&self) -> bool {
        self.text.is_empty() && !self.quoted
    }

    /// Returns the token text
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Cursor-driven tokenizer over a loaded byte buffer
///
/// # Examples
///
/// ```
/// use asset_tokenizer::Tokenizer;
///
/// let mut tz = Tokenizer::default();
/// tz.open_string("Texture WALL01 = \"brick wall\"; // trim", 0, 0, "TEXTURES")?;
///
/// assert_eq!(tz.get_token(), "Texture");
/// assert_eq!(tz.peek_token(), "WALL01");
/// assert!(tz.check_token("WALL01"));
/// assert_eq!(tz.get_token(), "=");
/// assert_eq!(tz.get_token(), "brick wall");
/// assert!(tz.is_quoted());
/// assert_eq!(tz.get_token(), ";");
/// assert_eq!(tz.get_token(), "");
/// # Ok::<(), asset_tokenizer::LoadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Loaded bytes and scan position
    cursor: Cursor,
    /// Comment rules, fixed at construction
    comments: CommentMode,
    /// Characters that always form their own token
    special: SpecialSet,
    /// Log every token returned
    debug: bool,
    /// Whether the last token returned was a quoted literal
    quoted: bool,
    /// Diagnostic name of the loaded source
    name: String,
}

impl Tokenizer {
    /// Creates a tokenizer with the given comment rules and no input
    pub fn new(comments: CommentMode) -> Self {
        Self {
            cursor: Cursor::empty(),
            comments,
            special: SpecialSet::default(),
            debug: false,
            quoted: false,
            name: UNNAMED_SOURCE.to_string(),
        }
    }

    /// Loads `source`, replacing any previously loaded input
    ///
    /// On failure the previous input and scan position are kept and the
    /// error is logged.
    pub fn open<S: ByteSource>(&mut self, source: S, name: &str) -> Result<(), LoadError> {
        let bytes = match source.read_bytes(name) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(source = name, error = %err, "unable to load tokenizer input");
                return Err(err);
            }
        };

        tracing::debug!(source = name, size = bytes.len(), "loaded tokenizer input");
        self.cursor = Cursor::new(bytes);
        self.quoted = false;
        self.name = name.to_string();
        Ok(())
    }

    /// Loads `length` bytes of a file starting at `offset`
    ///
    /// A zero length, or one running past the end of the file, reads to
    /// the end. The path is used as the source name.
    pub fn open_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        offset: u64,
        length: u64,
    ) -> Result<(), LoadError> {
        let name = path.as_ref().display().to_string();
        self.open(FileRegion::new(path, offset, length), &name)
    }

    /// Loads `length` bytes of `text` starting at `offset`
    ///
    /// Same clamping as [`open_file`](Self::open_file).
    pub fn open_string(
        &mut self,
        text: &str,
        offset: usize,
        length: usize,
        name: &str,
    ) -> Result<(), LoadError> {
        self.open(TextRegion::new(text, offset, length), name)
    }

    /// Loads the first `length` bytes of `bytes`; `length` must be non-zero
    pub fn open_mem(&mut self, bytes: &[u8], length: usize, name: &str) -> Result<(), LoadError> {
        self.open(RawBytes::new(bytes, length), name)
    }

    /// Loads everything `reader` yields
    pub fn open_reader<R: Read>(&mut self, reader: R, name: &str) -> Result<(), LoadError> {
        self.open(ReaderSource(reader), name)
    }

    /// Replaces the special character set
    pub fn set_special(&mut self, chars: &str) {
        self.special = SpecialSet::new(chars);
    }

    /// Returns the special character set
    pub fn special_characters(&self) -> &SpecialSet {
        &self.special
    }

    /// Enables or disables logging of every token returned
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Returns true if token echo is enabled
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Returns the comment rules this tokenizer was built with
    pub fn comment_mode(&self) -> CommentMode {
        self.comments
    }

    /// Returns the diagnostic name of the loaded source
    pub fn source_name(&self) -> &str {
        &self.name
    }

    /// Returns the current line number (1-based)
    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    /// Returns the current byte offset
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the loaded buffer size in bytes
    pub fn size(&self) -> usize {
        self.cursor.len()
    }

    /// Returns the start offset of the last token scanned
    pub fn token_start(&self) -> usize {
        self.cursor.token_start()
    }

    /// Returns the end offset (exclusive) of the last token scanned
    pub fn token_end(&self) -> usize {
        self.cursor.token_end()
    }

    /// Returns true if the last token returned was a quoted literal
    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Returns true once the whole buffer has been consumed
    pub fn at_end(&self) -> bool {
        self.cursor.at_end()
    }

    /// Returns the next token's text, or an empty string at end of input
    pub fn get_token(&mut self) -> String {
        self.next_token().text
    }

    /// Returns the next token with its location
    pub fn next_token(&mut self) -> Token {
        let token = self.scan();

        if self.debug && !token.is_end() {
            tracing::info!(
                source = %self.name,
                line = token.span.start.line,
                quoted = token.quoted,
                "{}",
                token.text
            );
        }

        token
    }

    /// Returns the next token's text without moving past it
    pub fn peek_token(&mut self) -> String {
        let snapshot = self.cursor.snapshot();
        let quoted = self.quoted;

        let token = self.scan();

        self.cursor.restore(snapshot);
        self.quoted = quoted;
        token.text
    }

    /// Reads the next token and checks if it is exactly `expected`
    ///
    /// The comparison is case-sensitive.
    pub fn check_token(&mut self, expected: &str) -> bool {
        self.get_token() == expected
    }

    /// Reads the next token as an integer (0 if not numeric)
    pub fn get_integer(&mut self) -> i32 {
        parse_integer(&self.get_token())
    }

    /// Reads the next token as a single precision float (0.0 if not numeric)
    pub fn get_float(&mut self) -> f32 {
        parse_float(&self.get_token()) as f32
    }

    /// Reads the next token as a double precision float (0.0 if not numeric)
    pub fn get_double(&mut self) -> f64 {
        parse_float(&self.get_token())
    }

    /// Reads the next token as a boolean
    ///
    /// `no`, `false` (any case) and anything whose integer value is zero
    /// are false; everything else is true.
    pub fn get_bool(&mut self) -> bool {
        parse_bool(&self.get_token())
    }

    /// Iterates over the remaining tokens
    pub fn tokens(&mut self) -> Tokens<'_> {
        Tokens { tokenizer: self }
    }

    /// Scans one token
    fn scan(&mut self) -> Token {
        self.quoted = false;

        if !self.skip_to_token() {
            return Token::end(self.cursor.current_position());
        }

        let start = self.cursor.current_position();
        self.cursor.begin_token();

        let Some(first) = self.cursor.current() else {
            return Token::end(start);
        };

        let text = if self.special.contains(first) {
            self.cursor.advance();
            self.cursor.end_token(start.offset + 1);
            char::from(first).to_string()
        } else if first == b'"' {
            self.quoted = true;
            let text = self.scan_quoted(start.offset);
            self.cursor.end_token(self.cursor.position());
            text
        } else {
            let text = self.scan_plain(start.offset);
            self.cursor.end_token(self.cursor.position());
            text
        };

        let end = Position {
            line: self.cursor.line(),
            offset: self.cursor.token_end(),
        };

        Token {
            text,
            quoted: self.quoted,
            span: Span::new(start, end),
        }
    }

    /// Skips whitespace and comments until a token starts
    ///
    /// Returns false if the input runs out first.
    fn skip_to_token(&mut self) -> bool {
        loop {
            while self.cursor.current().is_some_and(is_whitespace) {
                if !self.cursor.advance() {
                    return false;
                }
            }

            match self.comments.detect(&self.cursor) {
                Some(kind) => kind.skip(&mut self.cursor),
                None => return !self.cursor.at_end(),
            }
        }
    }

    /// Reads a quoted literal whose opening quote is at `start`
    ///
    /// Everything up to the closing quote is taken verbatim. An unterminated
    /// literal runs to the end of input.
    fn scan_quoted(&mut self, start: usize) -> String {
        // Skip opening "
        self.cursor.advance();

        while self.cursor.current().is_some_and(|byte| byte != b'"') {
            if !self.cursor.advance() {
                break;
            }
        }
        let end = self.cursor.position();

        // Skip closing "
        if self.cursor.current() == Some(b'"') {
            self.cursor.advance();
        }

        self.text_between(start + 1, end)
    }

    /// Reads a plain word starting at `start`
    ///
    /// Stops before whitespace or a special character, leaving it for the
    /// next call.
    fn scan_plain(&mut self, start: usize) -> String {
        while let Some(byte) = self.cursor.current() {
            if is_whitespace(byte) || self.special.contains(byte) {
                break;
            }
            if !self.cursor.advance() {
                break;
            }
        }

        self.text_between(start, self.cursor.position())
    }

    fn text_between(&self, start: usize, end: usize) -> String {
        let bytes = self.cursor.buffer().get(start..end).unwrap_or_default();
        String::from_utf8_lossy(bytes).into_owned()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(CommentMode::default())
    }
}

/// Iterator over the remaining tokens of a [`Tokenizer`]
#[derive(Debug)]
pub struct Tokens<'t> {
    tokenizer: &'t mut Tokenizer,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.tokenizer.next_token();
        (!token.is_end()).then_some(token)
    }
}

impl FusedIterator for Tokens<'_> {}
