//! Documentation assembler.
//!
//! Attaches the nearest preceding documentation comment to component
//! declarations and prop members, parses doc blocks into summary + tags,
//! and assembles the final per-component metadata record.
//!
//! Attachment policy: only the single comment block directly adjacent to a
//! declaration is considered. The gap between block end and declaration
//! start must be pure whitespace (any intervening token breaks attachment)
//! and may span at most one blank line. When doc blocks are stacked, only
//! the lowest one attaches; the rest are discarded for that declaration.
//! Plain comments never attach.

use propdoc_common::comments::{doc_block_content, newlines_in_gap};
use propdoc_common::{CommentBlock, limits};

use propdoc_model::{SourceModule, TypeResolutionService};

use crate::describe::describe;
use crate::metadata::{ComponentMetadata, DocBlock, DocTag, PropField};
use crate::resolve::ResolvedInterface;
use crate::scan::ComponentCandidate;

/// Find the documentation block adjacent to the declaration starting at
/// `pos`, if any.
pub fn leading_doc_block(module: &SourceModule, pos: u32) -> Option<&CommentBlock> {
    let idx = module.comments.partition_point(|c| c.span.end <= pos);
    if idx == 0 {
        return None;
    }
    let block = &module.comments[idx - 1];

    let gap = &module.text[block.span.end as usize..pos as usize];
    if !gap.chars().all(char::is_whitespace) {
        // Some token sits between the block and the declaration.
        return None;
    }
    if newlines_in_gap(gap, limits::MAX_DOC_GAP_NEWLINES) > limits::MAX_DOC_GAP_NEWLINES {
        return None;
    }
    if !block.doc_style {
        return None;
    }
    Some(block)
}

/// Attach and parse the doc block for the declaration starting at `pos`.
pub fn attach_doc(module: &SourceModule, pos: u32) -> Option<DocBlock> {
    let block = leading_doc_block(module, pos)?;
    Some(parse_doc_block(block.text(&module.text)))
}

/// Parse a raw doc block into summary text and ordered tags.
///
/// Text before the first `@tag` line is the summary. A tag's text starts
/// after its name and continues across following lines until the next tag.
pub fn parse_doc_block(text: &str) -> DocBlock {
    let content = doc_block_content(text);
    let mut summary_lines: Vec<&str> = Vec::new();
    let mut tags: Vec<DocTag> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix('@') {
            let (name, tag_text) = match rest.split_once(char::is_whitespace) {
                Some((name, tail)) => (name, tail.trim()),
                None => (rest, ""),
            };
            tags.push(DocTag {
                name: name.to_string(),
                text: tag_text.to_string(),
            });
        } else if let Some(current) = tags.last_mut() {
            if !trimmed.is_empty() {
                if !current.text.is_empty() {
                    current.text.push('\n');
                }
                current.text.push_str(trimmed);
            }
        } else {
            summary_lines.push(line);
        }
    }

    DocBlock {
        summary: summary_lines.join("\n").trim().to_string(),
        tags,
    }
}

/// Assemble the final metadata record for one resolved candidate.
pub fn assemble<H: TypeResolutionService + ?Sized>(
    module: &SourceModule,
    host: &H,
    candidate: &ComponentCandidate,
    resolved: &ResolvedInterface,
) -> ComponentMetadata {
    let doc = attach_doc(module, candidate.statement_span.pos);
    let props = resolved
        .fields
        .iter()
        .map(|field| {
            let (ty, required) = describe(host, field);
            PropField {
                name: field.name.clone(),
                ty,
                required,
                doc: attach_doc(module, field.span.pos),
            }
        })
        .collect();
    ComponentMetadata {
        name: candidate.name.clone(),
        doc,
        props,
    }
}
