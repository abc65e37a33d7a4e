//! Comment block model and doc-comment text utilities.
//!
//! Comments are not part of the statement tree; the front end hands them
//! over pre-segmented into discrete blocks, each flagged as either a
//! documentation-style block (`/** ... */`) or a plain comment. This module
//! models those blocks and strips doc-block delimiters and gutters.

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// One discrete comment block in a module's source text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentBlock {
    /// Location of the block including its delimiters.
    pub span: Span,
    /// Whether this is a documentation-style block (`/** ... */`) eligible
    /// for attachment, as opposed to a plain `//` or `/* ... */` comment.
    pub doc_style: bool,
}

impl CommentBlock {
    pub fn new(span: Span, doc_style: bool) -> Self {
        CommentBlock { span, doc_style }
    }

    /// Get the raw block text (delimiters included) from source.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}

/// Extract the content of a doc block without its delimiters.
///
/// Strips the `/**` and `*/` markers and the leading `*` gutter from each
/// line, then trims surrounding whitespace. Non-doc text passes through
/// unchanged.
pub fn doc_block_content(text: &str) -> String {
    let inner = if let Some(stripped) = text.strip_prefix("/**") {
        stripped.strip_suffix("*/").unwrap_or(stripped)
    } else {
        return text.to_string();
    };

    let joined = inner
        .lines()
        .map(|line| {
            let trimmed = line.trim_start();
            if let Some(rest) = trimmed.strip_prefix('*') {
                rest.strip_prefix(' ').unwrap_or(rest)
            } else {
                trimmed
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    // Extra stars in a `**/` closer belong to the delimiter, not the text.
    joined.trim().trim_end_matches('*').trim_end().to_string()
}

/// Count newlines in a gap of source text, stopping early once `limit` is
/// exceeded.
pub fn newlines_in_gap(gap: &str, limit: usize) -> usize {
    let mut count = 0usize;
    for byte in gap.as_bytes() {
        if *byte == b'\n' {
            count += 1;
            if count > limit {
                break;
            }
        }
    }
    count
}
