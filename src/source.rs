//! Byte sources a tokenizer can be loaded from
//!
//! Every source resolves to one owned byte buffer. Files and strings take
//! an `offset` and `length`; a zero length, or one running past the end,
//! means "to the end". Raw memory has no end marker of its own, so its
//! length is mandatory.

use crate::error::LoadError;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Something that can be read into a tokenizer's buffer
pub trait ByteSource {
    /// Reads the selected bytes into an owned buffer
    ///
    /// `name` is only used to label errors.
    fn read_bytes(self, name: &str) -> Result<Vec<u8>, LoadError>;
}

/// Resolves `offset`/`length` against a source of `size` bytes
///
/// Returns the number of bytes to read starting at `offset`.
pub fn clamp_region(name: &str, size: u64, offset: u64, length: u64) -> Result<u64, LoadError> {
    if offset > size {
        return Err(LoadError::OffsetOutOfRange {
            name: name.to_string(),
            offset,
            size,
        });
    }

    let available = size - offset;
    if length == 0 || length > available {
        Ok(available)
    } else {
        Ok(length)
    }
}

/// A region of a file on disk
#[derive(Debug, Clone)]
pub struct FileRegion<P> {
    path: P,
    offset: u64,
    length: u64,
}

impl<P: AsRef<Path>> FileRegion<P> {
    /// Selects `length` bytes starting at `offset` (0 means to the end)
    pub fn new(path: P, offset: u64, length: u64) -> Self {
        Self {
            path,
            offset,
            length,
        }
    }

    /// Selects the whole file
    pub fn whole(path: P) -> Self {
        Self::new(path, 0, 0)
    }

    /// Returns the file path
    pub fn path(&self) -> &Path {
        self.path.as_ref()
    }
}

impl<P: AsRef<Path>> ByteSource for FileRegion<P> {
    fn read_bytes(self, name: &str) -> Result<Vec<u8>, LoadError> {
        let mut file = File::open(self.path()).map_err(|e| LoadError::io(name, e))?;
        let size = file.metadata().map_err(|e| LoadError::io(name, e))?.len();
        let length = clamp_region(name, size, self.offset, self.length)?;

        file.seek(SeekFrom::Start(self.offset))
            .map_err(|e| LoadError::io(name, e))?;

        let mut bytes = Vec::with_capacity(usize::try_from(length).unwrap_or(0));
        file.take(length)
            .read_to_end(&mut bytes)
            .map_err(|e| LoadError::io(name, e))?;
        Ok(bytes)
    }
}

/// A region of an in-memory string
#[derive(Debug, Clone, Copy)]
pub struct TextRegion<'a> {
    text: &'a str,
    offset: usize,
    length: usize,
}

impl<'a> TextRegion<'a> {
    /// Selects `length` bytes starting at `offset` (0 means to the end)
    pub fn new(text: &'a str, offset: usize, length: usize) -> Self {
        Self {
            text,
            offset,
            length,
        }
    }

    /// Selects the whole string
    pub fn whole(text: &'a str) -> Self {
        Self::new(text, 0, 0)
    }
}

impl ByteSource for TextRegion<'_> {
    fn read_bytes(self, name: &str) -> Result<Vec<u8>, LoadError> {
        let bytes = self.text.as_bytes();
        let length = clamp_region(
            name,
            bytes.len() as u64,
            self.offset as u64,
            self.length as u64,
        )? as usize;
        Ok(bytes[self.offset..self.offset + length].to_vec())
    }
}

/// A raw memory slice with an explicit length
#[derive(Debug, Clone, Copy)]
pub struct RawBytes<'a> {
    bytes: &'a [u8],
    length: usize,
}

impl<'a> RawBytes<'a> {
    /// Selects the first `length` bytes of `bytes`; `length` must be non-zero
    pub fn new(bytes: &'a [u8], length: usize) -> Self {
        Self { bytes, length }
    }
}

impl ByteSource for RawBytes<'_> {
    fn read_bytes(self, _name: &str) -> Result<Vec<u8>, LoadError> {
        if self.length == 0 {
            return Err(LoadError::LengthNotSpecified);
        }

        self.bytes
            .get(..self.length)
            .map(<[u8]>::to_vec)
            .ok_or(LoadError::LengthOutOfBounds {
                length: self.length,
                available: self.bytes.len(),
            })
    }
}

/// Everything a reader yields until end of stream
#[derive(Debug)]
pub struct ReaderSource<R>(pub R);

impl<R: Read> ByteSource for ReaderSource<R> {
    fn read_bytes(mut self, name: &str) -> Result<Vec<u8>, LoadError> {
        let mut bytes = Vec::new();
        self.0
            .read_to_end(&mut bytes)
            .map_err(|e| LoadError::io(name, e))?;
        Ok(bytes)
    }
}

/// An already owned buffer, taken as is
impl ByteSource for Vec<u8> {
    fn read_bytes(self, _name: &str) -> Result<Vec<u8>, LoadError> {
        Ok(self)
    }
}
