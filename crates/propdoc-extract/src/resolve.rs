//! Interface resolver.
//!
//! Resolves a props type reference to its named interface symbol, merges all
//! partial declarations of that symbol (declaration merging), and flattens
//! the `extends` graph into one ordered, de-duplicated field list.
//!
//! Ordering and shadowing rules:
//! - Own members come first, in fragment order then member order; a name
//!   repeated across fragments at the same level keeps the latest
//!   occurrence (and its position).
//! - Inherited members follow, heritage-clause order, depth-first; a name
//!   already present never gets overridden by an inherited member.
//! - The walk carries the active resolution path; revisiting a symbol on
//!   the path is `CyclicInheritance`. A diamond (the same base reachable
//!   twice off-path) is not a cycle and contributes nothing new.
//! - Only `extends` contributes fields. There is no `implements` walk: an
//!   implementing type's own members are already captured by the fragment
//!   merge, and re-deriving from the implemented type would double-count.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::trace;

use propdoc_common::Span;
use propdoc_model::{
    DeclKind, InterfaceId, SourceModule, SymbolId, TypeId, TypeRefNode, TypeResolutionService,
};

use crate::error::ExtractError;
use crate::options::ExtractOptions;

/// One flattened field of a resolved props interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    pub name: String,
    pub ty: TypeId,
    /// The member's own `?` optionality marker.
    pub optional: bool,
    /// Span of the originating member declaration; field docs attach here.
    pub span: Span,
}

/// A fully resolved props interface: the symbol plus its flattened,
/// de-duplicated, ordered field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInterface {
    pub symbol: SymbolId,
    pub fields: Vec<ResolvedField>,
}

/// Cycle-safe resolution over one module's interface graph.
pub struct Resolver<'a, H: TypeResolutionService + ?Sized> {
    module: &'a SourceModule,
    host: &'a H,
    max_depth: u32,
    /// Symbols on the active recursion path, for cycle reporting order.
    path: SmallVec<[SymbolId; 8]>,
    on_path: FxHashSet<SymbolId>,
}

impl<'a, H: TypeResolutionService + ?Sized> Resolver<'a, H> {
    pub fn new(module: &'a SourceModule, host: &'a H, options: &ExtractOptions) -> Self {
        Resolver {
            module,
            host,
            max_depth: options.max_heritage_depth,
            path: SmallVec::new(),
            on_path: FxHashSet::default(),
        }
    }

    /// Resolve `props_ref` into its flattened field list.
    pub fn resolve(&mut self, props_ref: &TypeRefNode) -> Result<ResolvedInterface, ExtractError> {
        let (symbol, fields) = self.resolve_fields(props_ref, 0)?;
        trace!(
            symbol = %self.host.symbol_name(symbol),
            fields = fields.len(),
            "resolved props interface"
        );
        Ok(ResolvedInterface {
            symbol,
            fields: fields.into_values().collect(),
        })
    }

    /// Resolve one type reference to its symbol and that symbol's complete
    /// field set (own merge plus inherited), keyed and ordered by name
    /// occurrence.
    fn resolve_fields(
        &mut self,
        type_ref: &TypeRefNode,
        depth: u32,
    ) -> Result<(SymbolId, IndexMap<String, ResolvedField>), ExtractError> {
        if depth > self.max_depth {
            return Err(ExtractError::ResolutionDepthExceeded {
                depth,
                span: type_ref.span,
            });
        }

        let symbol = self.host.resolve_type_ref(type_ref).ok_or_else(|| {
            ExtractError::UnresolvedPropsSymbol {
                name: type_ref.qualified_name(),
                span: type_ref.span,
            }
        })?;

        let declarations = self.host.declarations(symbol);
        if declarations.is_empty() || declarations.iter().any(|d| !d.is_interface()) {
            return Err(ExtractError::NonInterfaceType {
                name: self.host.symbol_name(symbol).to_string(),
                span: type_ref.span,
            });
        }

        if self.on_path.contains(&symbol) {
            trace!(path = ?self.path, revisited = ?symbol, "heritage walk revisited active symbol");
            return Err(ExtractError::CyclicInheritance {
                name: self.host.symbol_name(symbol).to_string(),
                span: type_ref.span,
            });
        }

        // All declaration sites sharing this symbol, in source order.
        let fragments: SmallVec<[InterfaceId; 4]> = declarations
            .iter()
            .filter_map(|d| match d.kind {
                DeclKind::Interface(id) => Some(id),
                _ => None,
            })
            .collect();

        // Own-member merge: walk fragments in order; a repeated name drops
        // the earlier entry so the survivor sits at the latest occurrence.
        let mut fields: IndexMap<String, ResolvedField> = IndexMap::new();
        for &id in &fragments {
            for member in &self.module.interface(id).members {
                fields.shift_remove(&member.name);
                fields.insert(
                    member.name.clone(),
                    ResolvedField {
                        name: member.name.clone(),
                        ty: member.ty,
                        optional: member.optional,
                        span: member.span,
                    },
                );
            }
        }

        // Heritage walk: depth-first, clause order, with this symbol on the
        // active path. Inherited fields never displace ones already present.
        self.path.push(symbol);
        self.on_path.insert(symbol);
        let walked = self.walk_heritage(&fragments, &mut fields, depth);
        self.on_path.remove(&symbol);
        self.path.pop();
        walked?;

        Ok((symbol, fields))
    }

    fn walk_heritage(
        &mut self,
        fragments: &[InterfaceId],
        fields: &mut IndexMap<String, ResolvedField>,
        depth: u32,
    ) -> Result<(), ExtractError> {
        for &id in fragments {
            // Clone keeps the borrow of the module's arena out of the
            // recursive call.
            let heritage: Vec<TypeRefNode> = self.module.interface(id).extends.clone();
            for base_ref in &heritage {
                let (_, inherited) = self.resolve_fields(base_ref, depth + 1)?;
                for (name, field) in inherited {
                    fields.entry(name).or_insert(field);
                }
            }
        }
        Ok(())
    }
}
