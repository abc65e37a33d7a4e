//! Statement tree for one parsed module.
//!
//! A `SourceModule` is the read-only view of one file the front end hands to
//! the extractor: the raw text, the ordered top-level statements, an arena of
//! interface declarations (addressed by `InterfaceId` so merged fragments are
//! cheap to revisit), and the module's comment blocks sorted by position.
//! Nothing in here is mutated after construction; every entity lives for one
//! analysis pass.

use propdoc_common::{CommentBlock, Span};

use crate::resolver::{InterfaceId, TypeId};

/// One parsed source file.
#[derive(Debug, Clone)]
pub struct SourceModule {
    pub file_name: String,
    /// Full source text; spans index into this.
    pub text: String,
    /// Top-level statements in declaration order.
    pub statements: Vec<Statement>,
    /// Interface declaration arena. `Statement::Interface` and symbol
    /// declarations refer into this by `InterfaceId`.
    pub interfaces: Vec<InterfaceDecl>,
    /// Comment blocks sorted by start position.
    pub comments: Vec<CommentBlock>,
}

impl SourceModule {
    pub fn interface(&self, id: InterfaceId) -> &InterfaceDecl {
        &self.interfaces[id.index()]
    }
}

/// A top-level statement. Only the statement kinds the extractor consumes
/// are modeled; everything else collapses to `Other`.
#[derive(Debug, Clone)]
pub enum Statement {
    Import(ImportDecl),
    Var(VarStatement),
    Interface(InterfaceId),
    Other { span: Span },
}

/// `import ... from 'specifier';`
#[derive(Debug, Clone)]
pub struct ImportDecl {
    pub module_specifier: String,
    pub bindings: ImportBindings,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportBindings {
    /// `import 'mod';` — side effect only, binds nothing.
    None,
    /// `import * as NS from 'mod';`
    Namespace { alias: String },
    /// `import { a, b as c } from 'mod';`
    Named { specifiers: Vec<ImportSpecifier> },
    /// A named-import clause the grammar requires but the front end could
    /// not recover structurally (error node in the parse).
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpecifier {
    /// Name the symbol is bound to in this module.
    pub local: String,
    /// Original exported name when the import renames (`{ SFC as Eff }`
    /// has `local: "Eff"`, `external: Some("SFC")`).
    pub external: Option<String>,
}

impl ImportSpecifier {
    pub fn plain(local: impl Into<String>) -> Self {
        ImportSpecifier {
            local: local.into(),
            external: None,
        }
    }

    pub fn renamed(local: impl Into<String>, external: impl Into<String>) -> Self {
        ImportSpecifier {
            local: local.into(),
            external: Some(external.into()),
        }
    }

    /// The name the symbol was exported under in the source module.
    pub fn external_name(&self) -> &str {
        self.external.as_deref().unwrap_or(&self.local)
    }
}

/// `export const a: T = ..., b = ...;`
#[derive(Debug, Clone)]
pub struct VarStatement {
    pub exported: bool,
    pub declarations: Vec<VarDecl>,
    /// Span of the whole statement, including the `export` modifier. Doc
    /// comments attach at this statement's start.
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct VarDecl {
    pub name: String,
    pub annotation: Option<TypeAnnotation>,
    pub span: Span,
}

/// The declared type of a variable. The extractor only inspects reference
/// annotations; structurally different annotations (literals, unions,
/// functions) collapse to `Other`.
#[derive(Debug, Clone)]
pub enum TypeAnnotation {
    Ref(TypeRefNode),
    Other { span: Span },
}

/// A (possibly qualified) type reference with ordered type arguments,
/// e.g. `React.SFC<ButtonProps>`. Argument arity is plain data here; the
/// scanner validates it.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRefNode {
    /// Left side of a qualified name (`React` in `React.SFC`).
    pub qualifier: Option<String>,
    pub name: String,
    pub type_args: Vec<TypeRefNode>,
    pub span: Span,
}

impl TypeRefNode {
    pub fn plain(name: impl Into<String>) -> Self {
        TypeRefNode {
            qualifier: None,
            name: name.into(),
            type_args: Vec::new(),
            span: Span::default(),
        }
    }

    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        TypeRefNode {
            qualifier: Some(qualifier.into()),
            name: name.into(),
            type_args: Vec::new(),
            span: Span::default(),
        }
    }

    pub fn with_args(mut self, args: Vec<TypeRefNode>) -> Self {
        self.type_args = args;
        self
    }

    /// `React.SFC` for qualified refs, `ButtonProps` for plain ones.
    pub fn qualified_name(&self) -> String {
        match &self.qualifier {
            Some(q) => format!("{q}.{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Source rendering of the reference including its arguments.
    pub fn render(&self) -> String {
        let mut out = self.qualified_name();
        if !self.type_args.is_empty() {
            out.push('<');
            for (i, arg) in self.type_args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&arg.render());
            }
            out.push('>');
        }
        out
    }
}

/// One partial declaration of a named interface. Declaration merging means
/// a symbol may own several of these fragments; the resolver walks them in
/// source order.
#[derive(Debug, Clone)]
pub struct InterfaceDecl {
    pub name: String,
    pub exported: bool,
    /// Members in declaration order within this fragment.
    pub members: Vec<Member>,
    /// `extends` heritage references, in clause order.
    pub extends: Vec<TypeRefNode>,
    pub span: Span,
}

/// One property signature of an interface fragment.
#[derive(Debug, Clone)]
pub struct Member {
    pub name: String,
    pub ty: TypeId,
    /// Whether the member carries its own `?` optionality marker.
    pub optional: bool,
    /// Span of the member declaration; field docs attach at its start.
    pub span: Span,
}
