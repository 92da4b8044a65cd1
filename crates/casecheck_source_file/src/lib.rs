//! Line/column lookup for source text.

use std::fmt;
use std::num::NonZeroUsize;

use casecheck_text_size::TextSize;

/// A 1-based line or column number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OneIndexed(NonZeroUsize);

impl OneIndexed {
    pub const MIN: Self = Self(NonZeroUsize::MIN);

    /// Converts a 0-based index into a 1-based one.
    pub const fn from_zero_indexed(value: usize) -> Self {
        match NonZeroUsize::new(value.saturating_add(1)) {
            Some(value) => Self(value),
            None => Self::MIN,
        }
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }

    pub const fn to_zero_indexed(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for OneIndexed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A 1-based line and character column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub line: OneIndexed,
    pub column: OneIndexed,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Byte offsets of the start of every line in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    pub fn from_source_text(text: &str) -> Self {
        let mut line_starts = vec![TextSize::default()];
        for newline in memchr::memchr_iter(b'\n', text.as_bytes()) {
            // Offsets past u32::MAX cannot be represented; stop indexing there.
            let Ok(start) = TextSize::try_from(newline + 1) else {
                break;
            };
            line_starts.push(start);
        }
        Self { line_starts }
    }

    /// The 1-based line containing `offset`.
    pub fn line_index(&self, offset: TextSize) -> OneIndexed {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(next) => next - 1,
        };
        OneIndexed::from_zero_indexed(line)
    }

    pub fn line_start(&self, line: OneIndexed) -> TextSize {
        self.line_starts
            .get(line.to_zero_indexed())
            .copied()
            .unwrap_or_else(|| self.line_starts[self.line_starts.len() - 1])
    }

    /// Line and character column of `offset` within `content`.
    ///
    /// Columns count Unicode scalar values, so a tab or a multi-byte
    /// character each advance the column by one.
    pub fn line_column(&self, offset: TextSize, content: &str) -> SourceLocation {
        let line = self.line_index(offset);
        let start = self.line_start(line).to_usize();
        let end = offset.to_usize().min(content.len());
        let column = content
            .get(start..end)
            .map_or(end.saturating_sub(start), |prefix| prefix.chars().count());

        SourceLocation {
            line,
            column: OneIndexed::from_zero_indexed(column),
        }
    }
}

/// Source text paired with its line index.
#[derive(Debug, Clone, Copy)]
pub struct SourceCode<'src, 'index> {
    text: &'src str,
    index: &'index LineIndex,
}

impl<'src, 'index> SourceCode<'src, 'index> {
    pub fn new(text: &'src str, index: &'index LineIndex) -> Self {
        Self { text, index }
    }

    pub fn line_column(&self, offset: TextSize) -> SourceLocation {
        self.index.line_column(offset, self.text)
    }
}
