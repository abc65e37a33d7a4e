//! Typed extraction errors.
//!
//! Every failure mode of the pipeline is a structured value carrying the
//! offending declaration's span; nothing is logged-and-skipped. All errors
//! are non-retryable structural errors, reported per component candidate so
//! one candidate's failure never aborts its siblings (the module driver owns
//! that isolation).

use std::fmt;

use propdoc_common::{LineMap, Span};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// An import clause is structurally inconsistent (the grammar requires
    /// a named-import list the front end could not recover).
    MalformedImport { span: Span },
    /// A component type annotation has other than exactly one type argument.
    UnexpectedTypeArity { found: usize, span: Span },
    /// The props type reference does not resolve to any declared symbol.
    UnresolvedPropsSymbol { name: String, span: Span },
    /// The resolved props symbol is not (purely) a structural interface.
    NonInterfaceType { name: String, span: Span },
    /// The heritage walk revisited a symbol already on the active
    /// resolution path.
    CyclicInheritance { name: String, span: Span },
    /// The heritage walk exceeded the configured recursion-depth bound.
    ResolutionDepthExceeded { depth: u32, span: Span },
}

impl ExtractError {
    /// Location of the offending declaration or reference.
    pub fn span(&self) -> Span {
        match self {
            ExtractError::MalformedImport { span }
            | ExtractError::UnexpectedTypeArity { span, .. }
            | ExtractError::UnresolvedPropsSymbol { span, .. }
            | ExtractError::NonInterfaceType { span, .. }
            | ExtractError::CyclicInheritance { span, .. }
            | ExtractError::ResolutionDepthExceeded { span, .. } => *span,
        }
    }

    /// Render `line:column: message` against the module's line map.
    pub fn message_at(&self, line_map: &LineMap) -> String {
        let position = line_map.position(self.span().pos);
        format!("{}:{}: {self}", position.line, position.column)
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::MalformedImport { .. } => {
                write!(f, "import clause is structurally malformed")
            }
            ExtractError::UnexpectedTypeArity { found, .. } => {
                write!(
                    f,
                    "component type annotation has {found} type arguments, expected exactly 1"
                )
            }
            ExtractError::UnresolvedPropsSymbol { name, .. } => {
                write!(
                    f,
                    "props type reference '{name}' does not resolve to any declared symbol"
                )
            }
            ExtractError::NonInterfaceType { name, .. } => {
                write!(f, "props type '{name}' is not an interface declaration")
            }
            ExtractError::CyclicInheritance { name, .. } => {
                write!(f, "inheritance cycle detected while resolving '{name}'")
            }
            ExtractError::ResolutionDepthExceeded { depth, .. } => {
                write!(f, "heritage resolution exceeded depth bound at depth {depth}")
            }
        }
    }
}

impl std::error::Error for ExtractError {}
