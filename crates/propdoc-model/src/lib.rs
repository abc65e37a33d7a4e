//! Semantic-model boundary for the propdoc extractor.
//!
//! The extractor does not parse source text; a compiler front end hands it a
//! `SourceModule` (ordered top-level statements with spans, pre-segmented
//! comment blocks) together with a `TypeResolutionService` (symbol lookup,
//! declaration classification, type rendering). This crate defines that
//! boundary plus an in-memory reference host used by tests.

pub mod module;
pub use module::{
    ImportBindings, ImportDecl, ImportSpecifier, InterfaceDecl, Member, SourceModule, Statement,
    TypeAnnotation, TypeRefNode, VarDecl, VarStatement,
};

pub mod resolver;
pub use resolver::{DeclKind, Declaration, InterfaceId, SymbolId, TypeId, TypeResolutionService};

pub mod host;
pub use host::{MemoryHost, ModuleBuilder};
