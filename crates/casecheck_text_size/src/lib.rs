//! Byte offsets and ranges into UTF-8 source text.
//!
//! Offsets are stored as `u32`; Java sources larger than 4GiB are not
//! supported.

use std::fmt;
use std::ops::Index;

/// A byte offset into a source file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextSize {
    raw: u32,
}

impl TextSize {
    pub const fn new(raw: u32) -> Self {
        Self { raw }
    }

    pub const fn to_usize(self) -> usize {
        self.raw as usize
    }
}

impl From<u32> for TextSize {
    fn from(raw: u32) -> Self {
        Self::new(raw)
    }
}

impl TryFrom<usize> for TextSize {
    type Error = std::num::TryFromIntError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        u32::try_from(value).map(Self::new)
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.fmt(f)
    }
}

/// A half-open byte range `[start, end)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: TextSize,
    end: TextSize,
}

impl TextRange {
    /// Creates a new range.
    ///
    /// # Panics
    ///
    /// Panics if `end < start`.
    pub fn new(start: TextSize, end: TextSize) -> Self {
        assert!(start <= end, "invalid text range: {start}..{end}");
        Self { start, end }
    }

    pub const fn start(self) -> TextSize {
        self.start
    }

    pub const fn end(self) -> TextSize {
        self.end
    }
}

impl Index<TextRange> for str {
    type Output = str;

    fn index(&self, range: TextRange) -> &str {
        &self[range.start().to_usize()..range.end().to_usize()]
    }
}
