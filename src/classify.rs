//! Byte classification used by the scanner
//!
//! Only ASCII is classified: whitespace is the fixed set of newline,
//! carriage return, space and tab, and special characters come from a
//! per-tokenizer [`SpecialSet`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Special characters used when none are configured
pub const DEFAULT_SPECIALS: &str = ";,:|={}/";

/// Checks if a byte is whitespace (newline, carriage return, space or tab)
#[inline(always)]
pub const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b'\n' | b'\r' | b' ' | b'\t')
}

/// Checks if a byte ends a line comment
#[inline(always)]
pub const fn is_line_end(byte: u8) -> bool {
    matches!(byte, b'\n' | b'\r')
}

/// Set of characters that always form a token of their own
///
/// Membership is all that matters; order and duplicates in the source
/// string are not preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SpecialSet(SmallVec<[u8; 16]>);

impl SpecialSet {
    /// Builds a set from the ASCII characters of `chars`
    ///
    /// Non-ASCII characters are ignored since the scanner works on bytes.
    pub fn new(chars: &str) -> Self {
        let mut set = SmallVec::new();
        for byte in chars.bytes().filter(u8::is_ascii) {
            if !set.contains(&byte) {
                set.push(byte);
            }
        }
        Self(set)
    }

    /// Creates a set with no special characters
    pub fn empty() -> Self {
        Self(SmallVec::new())
    }

    /// Checks if a byte is a special character
    #[inline(always)]
    pub fn contains(&self, byte: u8) -> bool {
        self.0.contains(&byte)
    }

    /// Returns the number of special characters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no special characters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the special characters as a string
    pub fn as_str(&self) -> &str {
        // only ASCII bytes are ever inserted
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl Default for SpecialSet {
    fn default() -> Self {
        Self::new(DEFAULT_SPECIALS)
    }
}

impl From<&str> for SpecialSet {
    fn from(chars: &str) -> Self {
        Self::new(chars)
    }
}

impl From<String> for SpecialSet {
    fn from(chars: String) -> Self {
        Self::new(&chars)
    }
}

impl From<SpecialSet> for String {
    fn from(set: SpecialSet) -> Self {
        set.as_str().to_owned()
    }
}

impl fmt::Display for SpecialSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_classification() {
        for byte in [b'\n', b'\r', b' ', b'\t'] {
            assert!(is_whitespace(byte), "{byte:#04x} should be whitespace");
        }
        for byte in [b'a', b'0', b'"', b';', 0x0b, 0x0c, 0x00] {
            assert!(!is_whitespace(byte), "{byte:#04x} should not be whitespace");
        }
    }

    #[test]
    fn test_line_end_classification() {
        assert!(is_line_end(b'\n'));
        assert!(is_line_end(b'\r'));
        assert!(!is_line_end(b' '));
        assert!(!is_line_end(b'\t'));
    }

    #[test]
    fn test_default_specials() {
        let set = SpecialSet::default();
        for byte in DEFAULT_SPECIALS.bytes() {
            assert!(set.contains(byte));
        }
        assert!(!set.contains(b'"'));
        assert!(!set.contains(b'#'));
        assert!(!set.contains(b'a'));
        assert_eq!(set.len(), 8);
        assert_eq!(set.as_str(), DEFAULT_SPECIALS);
    }

    #[test]
    fn test_custom_specials_deduplicated() {
        let set = SpecialSet::new("{}{}()");
        assert_eq!(set.as_str(), "{}()");
        assert!(set.contains(b'('));
        assert!(!set.contains(b'='));
    }

    #[test]
    fn test_non_ascii_specials_ignored() {
        let set = SpecialSet::new("=é");
        assert_eq!(set.len(), 1);
        assert!(set.contains(b'='));
    }

    #[test]
    fn test_empty_specials() {
        let set = SpecialSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains(b';'));
        assert!(SpecialSet::new("").is_empty());
    }

    #[test]
    fn test_special_set_serde() {
        let set: SpecialSet = serde_json::from_str(r#""={}=""#).unwrap();
        assert_eq!(set.as_str(), "={}");
        assert_eq!(serde_json::to_string(&set).unwrap(), r#""={}""#);
    }
}
