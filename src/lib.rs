//! # Asset Tokenizer
//!
//! A small, cursor-driven tokenizer for game asset definitions and
//! resource-script style configuration text.
//!
//! ## Overview
//!
//! The tokenizer loads a region of a file, string or memory buffer into an
//! owned byte buffer, then hands out one token per call. What it does not
//! do is interpret the tokens: building structures out of the stream is left
//! to the caller.
//!
//! ## Key Features
//!
//! - **Special characters**: `;,:|={}/` (configurable) are always tokens of
//!   their own, so `key=value` reads as `key`, `=`, `value`
//! - **Quoted literals**: `"a b c"` is one token, taken verbatim
//! - **Comment rules**: C-style (`//`, `/* */`), hash (`##`) and semicolon
//!   (`;`) comments, each enabled independently
//! - **Typed readers**: integers, floats and booleans with forgiving parsing
//! - **Fail-quiet scanning**: unterminated strings and comments run to the
//!   end of input instead of raising errors
//!
//! ## Basic Usage
//!
//! ```rust
//! use asset_tokenizer::{CommentMode, Tokenizer};
//!
//! let text = r#"
//!     // Door definition
//!     door BIGDOOR1 { width = 128; height = 72.5; locked = no }
//! "#;
//!
//! let mut tz = Tokenizer::new(CommentMode::default());
//! tz.open_string(text, 0, 0, "DOORS")?;
//!
//! assert!(tz.check_token("door"));
//! assert_eq!(tz.get_token(), "BIGDOOR1");
//! assert!(tz.check_token("{"));
//!
//! assert_eq!(tz.get_token(), "width");
//! assert!(tz.check_token("="));
//! assert_eq!(tz.get_integer(), 128);
//! assert!(tz.check_token(";"));
//!
//! assert_eq!(tz.get_token(), "height");
//! assert!(tz.check_token("="));
//! assert_eq!(tz.get_float(), 72.5);
//! assert!(tz.check_token(";"));
//!
//! assert_eq!(tz.get_token(), "locked");
//! assert!(tz.check_token("="));
//! assert!(!tz.get_bool());
//! assert!(tz.check_token("}"));
//! assert_eq!(tz.get_token(), "");
//! # Ok::<(), asset_tokenizer::LoadError>(())
//! ```
//!
//! ## Loading Input
//!
//! Every load replaces the previous buffer and resets the line count:
//!
//! ```rust,no_run
//! use asset_tokenizer::Tokenizer;
//!
//! let mut tz = Tokenizer::default();
//!
//! // 512 bytes of a wad file starting at byte 1024
//! tz.open_file("doom2.wad", 1024, 512)?;
//!
//! // A whole lump already in memory; the length is required
//! let lump = std::fs::read("ANIMDEFS.txt")?;
//! tz.open_mem(&lump, lump.len(), "ANIMDEFS")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Loading fails only when the bytes cannot be obtained; the failure is
//! returned as a [`LoadError`] and logged.
//!
//! ## Logging
//!
//! Diagnostics go through [`tracing`]. Load failures are logged at `warn`,
//! successful loads at `debug`, and with [`Tokenizer::set_debug`] every
//! token returned is echoed at `info`.

pub mod classify;
pub mod comment;
pub mod convert;
pub mod cursor;
pub mod error;
pub mod source;
pub mod tokenizer;

// Re-export main types
pub use classify::{DEFAULT_SPECIALS, SpecialSet};
pub use comment::{CommentKind, CommentMode};
pub use error::{LoadError, Position, Span};
pub use source::{ByteSource, FileRegion, RawBytes, ReaderSource, TextRegion};
pub use tokenizer::{Token, Tokenizer, Tokens};
