//! Source spans as half-open byte-offset ranges.
//!
//! All positions handed over by the front end are byte offsets into the
//! module's source text; a `Span` is `[pos, end)`.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[pos, end)` into a module's source text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start position (byte offset)
    pub pos: u32,
    /// End position (byte offset, exclusive)
    pub end: u32,
}

impl Span {
    pub fn new(pos: u32, end: u32) -> Self {
        Span { pos, end }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.pos)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.pos
    }

    /// Whether `offset` falls inside this span.
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.pos && offset < self.end
    }

    /// Slice the source text covered by this span.
    ///
    /// Returns an empty string when the span is out of bounds rather than
    /// panicking; the front end owns position validity.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        let start = self.pos as usize;
        let end = self.end as usize;
        if end <= source.len() && start < end {
            &source[start..end]
        } else {
            ""
        }
    }
}
