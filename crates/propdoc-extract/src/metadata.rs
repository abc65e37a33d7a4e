//! Output metadata records.
//!
//! The terminal artifact of a pass: per-component records with the flattened
//! prop list. Serialization shape matches the external boundary —
//! `truncatedText` and `doc` are omitted entirely when absent rather than
//! serialized as null.

use serde::Serialize;

use crate::error::ExtractError;

/// Canonical renderings of one prop's type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    /// Fully expanded rendering (truncation disabled).
    pub text: String,
    /// The service's default rendering, present only when it actually
    /// differs from `text`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated_text: Option<String>,
}

/// One `@tag` of a documentation block, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocTag {
    pub name: String,
    pub text: String,
}

/// Parsed documentation comment: summary text plus ordered tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocBlock {
    pub summary: String,
    pub tags: Vec<DocTag>,
}

/// One flattened, resolved prop of a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<DocBlock>,
}

/// Terminal per-component record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentMetadata {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<DocBlock>,
    /// Props in resolved order: own members first, then inherited.
    pub props: Vec<PropField>,
}

/// Outcome for one component candidate. A failed candidate never suppresses
/// metadata extraction for its siblings.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentEntry {
    Resolved(ComponentMetadata),
    Failed { name: String, error: ExtractError },
}

impl ComponentEntry {
    pub fn name(&self) -> &str {
        match self {
            ComponentEntry::Resolved(meta) => &meta.name,
            ComponentEntry::Failed { name, .. } => name,
        }
    }

    pub fn metadata(&self) -> Option<&ComponentMetadata> {
        match self {
            ComponentEntry::Resolved(meta) => Some(meta),
            ComponentEntry::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&ExtractError> {
        match self {
            ComponentEntry::Resolved(_) => None,
            ComponentEntry::Failed { error, .. } => Some(error),
        }
    }
}

/// All component outcomes for one module, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleReport {
    pub file_name: String,
    pub components: Vec<ComponentEntry>,
}
