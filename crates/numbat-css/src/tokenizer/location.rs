//! Mapping from code-unit offsets to line/column positions.
//!
//! Tokens carry raw offsets; diagnostics want lines and columns. The index
//! is built once per buffer and answers lookups in O(log lines). Newline
//! recognition matches the tokenizer's: LF, CR, FF, with CRLF counted as a
//! single line break.

use serde::Serialize;

use super::char_code::is_newline;
use super::scan::newline_length;

/// A resolved position: the original code-unit offset plus its 1-based line
/// and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    /// The code-unit offset this location was resolved from.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column in code units.
    pub column: usize,
}

/// Precomputed line-start index over one code-unit buffer.
#[derive(Debug, Clone)]
pub struct OffsetToLocation {
    /// Offsets at which each line begins; always starts with 0.
    line_starts: Vec<usize>,
}

impl OffsetToLocation {
    /// Build the index by scanning `source` once.
    #[must_use]
    pub fn new(source: &[u16]) -> Self {
        let mut line_starts = vec![0];
        let mut offset = 0;

        while offset < source.len() {
            let code = source[offset];
            if is_newline(code) {
                offset += newline_length(source, offset, code);
                line_starts.push(offset);
            } else {
                offset += 1;
            }
        }

        Self { line_starts }
    }

    /// Resolve a code-unit offset to its line and column.
    ///
    /// Offsets past the end of the buffer resolve against the last line.
    #[must_use]
    pub fn location(&self, offset: usize) -> SourceLocation {
        let line_index = match self.line_starts.binary_search(&offset) {
            Ok(index) => index,
            Err(index) => index - 1,
        };

        SourceLocation {
            offset,
            line: line_index + 1,
            column: offset - self.line_starts[line_index] + 1,
        }
    }

    /// Number of lines the buffer holds (at least 1, even when empty).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
