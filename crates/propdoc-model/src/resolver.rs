//! Type-resolution service boundary.
//!
//! The front end owns the symbol table and the type graph; the extractor
//! only needs four capabilities from it: resolve a type reference to a
//! symbol, enumerate a symbol's declaration sites (declaration merging gives
//! one symbol several), classify those sites as structural interfaces or
//! not, and render member types to text in default and no-truncation forms.
//!
//! The service must support concurrent reads: batch analysis runs modules in
//! parallel against one shared, immutable service (hence the `Sync` bound).

use propdoc_common::Span;

use crate::module::TypeRefNode;

/// Identity of a named symbol in the resolution service.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub u32);

impl SymbolId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identity of a member type in the resolution service.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeId(pub u32);

impl TypeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index into a module's interface-declaration arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InterfaceId(pub u32);

impl InterfaceId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One declaration site of a symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclKind,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeclKind {
    /// A structural interface fragment, addressed in the module's arena.
    Interface(InterfaceId),
    TypeAlias,
    Class,
    /// A built-in primitive type name (`string`, `number`, ...).
    Primitive,
}

impl Declaration {
    pub fn is_interface(&self) -> bool {
        matches!(self.kind, DeclKind::Interface(_))
    }
}

/// Read-only type-resolution service supplied by the front end.
pub trait TypeResolutionService: Sync {
    /// Resolve a type reference to the symbol it names, if any.
    fn resolve_type_ref(&self, type_ref: &TypeRefNode) -> Option<SymbolId>;

    /// The symbol's declared name.
    fn symbol_name(&self, symbol: SymbolId) -> &str;

    /// All declaration sites merged under this symbol, in source encounter
    /// order.
    fn declarations(&self, symbol: SymbolId) -> &[Declaration];

    /// Default rendering of a type (the service may abbreviate long types).
    fn type_text(&self, ty: TypeId) -> &str;

    /// Fully expanded rendering with truncation disabled.
    fn type_text_expanded(&self, ty: TypeId) -> &str;
}
