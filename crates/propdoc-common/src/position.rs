//! Line/column positions derived from byte offsets.
//!
//! Spans travel through the pipeline as byte offsets; a `LineMap` converts
//! them to 1-based line/column pairs at the reporting boundary.

use serde::Serialize;

/// A 1-based line/column source position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// Precomputed newline offsets for one source text.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Byte offset of the first character of each line.
    line_starts: Vec<u32>,
}

impl LineMap {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i as u32 + 1);
            }
        }
        LineMap { line_starts }
    }

    /// Convert a byte offset to a 1-based line/column position.
    ///
    /// Offsets past the end of the text clamp to the last line.
    pub fn position(&self, offset: u32) -> Position {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        };
        let line_start = self.line_starts[line_idx];
        Position {
            line: line_idx as u32 + 1,
            column: offset.saturating_sub(line_start) + 1,
        }
    }
}
