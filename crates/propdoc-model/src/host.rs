//! In-memory reference host.
//!
//! `MemoryHost` implements `TypeResolutionService` over hand-registered
//! symbols and type renderings, and `ModuleBuilder` assembles a
//! `SourceModule` together with its host. The builder synthesizes the
//! module's source text as statements are added, so comment adjacency and
//! error locations work on real byte offsets without a parser in the loop.
//! Tests use this pair as the front end; production callers plug in a real
//! compiler host behind the same trait.

use propdoc_common::{CommentBlock, Span};
use rustc_hash::FxHashMap;

use crate::module::{
    ImportBindings, ImportDecl, ImportSpecifier, InterfaceDecl, Member, SourceModule, Statement,
    TypeAnnotation, TypeRefNode, VarDecl, VarStatement,
};
use crate::resolver::{
    DeclKind, Declaration, InterfaceId, SymbolId, TypeId, TypeResolutionService,
};

/// Built-in type names registered by every builder so a props argument
/// naming one resolves to a symbol that is not an interface.
const PRIMITIVE_NAMES: &[&str] = &["string", "number", "boolean", "object", "symbol", "bigint"];

#[derive(Debug, Clone)]
struct SymbolEntry {
    name: String,
    declarations: Vec<Declaration>,
}

#[derive(Debug, Clone)]
struct TypeEntry {
    /// Default rendering (what the service would print, possibly shortened).
    display: String,
    /// No-truncation rendering.
    expanded: String,
}

/// Symbol table and type renderings for one module, readable concurrently.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    symbols: Vec<SymbolEntry>,
    by_name: FxHashMap<String, SymbolId>,
    types: Vec<TypeEntry>,
}

impl MemoryHost {
    fn intern_symbol(&mut self, name: &str) -> SymbolId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(SymbolEntry {
            name: name.to_string(),
            declarations: Vec::new(),
        });
        self.by_name.insert(name.to_string(), id);
        id
    }

    fn add_declaration(&mut self, name: &str, declaration: Declaration) -> SymbolId {
        let id = self.intern_symbol(name);
        self.symbols[id.index()].declarations.push(declaration);
        id
    }

    fn add_type(&mut self, display: &str, expanded: &str) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(TypeEntry {
            display: display.to_string(),
            expanded: expanded.to_string(),
        });
        id
    }

    fn display_of(&self, ty: TypeId) -> &str {
        &self.types[ty.index()].display
    }
}

impl TypeResolutionService for MemoryHost {
    fn resolve_type_ref(&self, type_ref: &TypeRefNode) -> Option<SymbolId> {
        // Qualified references name namespace members the module-local
        // table does not track; only plain names resolve here.
        if type_ref.qualifier.is_some() {
            return None;
        }
        self.by_name.get(&type_ref.name).copied()
    }

    fn symbol_name(&self, symbol: SymbolId) -> &str {
        &self.symbols[symbol.index()].name
    }

    fn declarations(&self, symbol: SymbolId) -> &[Declaration] {
        &self.symbols[symbol.index()].declarations
    }

    fn type_text(&self, ty: TypeId) -> &str {
        &self.types[ty.index()].display
    }

    fn type_text_expanded(&self, ty: TypeId) -> &str {
        &self.types[ty.index()].expanded
    }
}

/// Builds a `SourceModule` plus its `MemoryHost`, synthesizing source text
/// as it goes.
pub struct ModuleBuilder {
    file_name: String,
    text: String,
    statements: Vec<Statement>,
    interfaces: Vec<InterfaceDecl>,
    comments: Vec<CommentBlock>,
    host: MemoryHost,
}

impl ModuleBuilder {
    pub fn new(file_name: &str) -> Self {
        let mut host = MemoryHost::default();
        for prim in PRIMITIVE_NAMES {
            host.add_declaration(
                prim,
                Declaration {
                    kind: DeclKind::Primitive,
                    span: Span::default(),
                },
            );
        }
        ModuleBuilder {
            file_name: file_name.to_string(),
            text: String::new(),
            statements: Vec::new(),
            interfaces: Vec::new(),
            comments: Vec::new(),
            host,
        }
    }

    /// Register a type whose default and expanded renderings agree.
    pub fn ty(&mut self, text: &str) -> TypeId {
        self.host.add_type(text, text)
    }

    /// Register a type whose default rendering is abbreviated relative to
    /// the no-truncation form.
    pub fn ty_with_expansion(&mut self, display: &str, expanded: &str) -> TypeId {
        self.host.add_type(display, expanded)
    }

    // Text assembly -------------------------------------------------------

    /// Append `s` followed by a newline; the returned span covers `s` only.
    fn line(&mut self, s: &str) -> Span {
        let pos = self.text.len() as u32;
        self.text.push_str(s);
        let end = self.text.len() as u32;
        self.text.push('\n');
        Span::new(pos, end)
    }

    pub fn blank_line(&mut self) {
        self.text.push('\n');
    }

    fn push_doc_block(&mut self, body: &str, indent: &str) {
        self.text.push_str(indent);
        let rendered = if body.contains('\n') {
            let mut s = String::from("/**\n");
            for l in body.lines() {
                s.push_str(indent);
                s.push_str(" * ");
                s.push_str(l);
                s.push('\n');
            }
            s.push_str(indent);
            s.push_str(" */");
            s
        } else {
            format!("/** {body} */")
        };
        let span = self.line(&rendered);
        self.comments.push(CommentBlock::new(span, true));
    }

    fn push_line_comment(&mut self, text: &str, indent: &str) {
        self.text.push_str(indent);
        let span = self.line(&format!("// {text}"));
        self.comments.push(CommentBlock::new(span, false));
    }

    /// A documentation-style block (`/** ... */`) at the top level.
    pub fn doc_comment(&mut self, body: &str) {
        self.push_doc_block(body, "");
    }

    /// A plain `//` comment at the top level; never attaches as doc.
    pub fn line_comment(&mut self, text: &str) {
        self.push_line_comment(text, "");
    }

    /// An arbitrary statement the extractor does not model.
    pub fn statement_other(&mut self, code: &str) {
        let span = self.line(code);
        self.statements.push(Statement::Other { span });
    }

    // Imports -------------------------------------------------------------

    pub fn import_namespace(&mut self, module: &str, alias: &str) {
        let span = self.line(&format!("import * as {alias} from '{module}';"));
        self.statements.push(Statement::Import(ImportDecl {
            module_specifier: module.to_string(),
            bindings: ImportBindings::Namespace {
                alias: alias.to_string(),
            },
            span,
        }));
    }

    /// Named imports as `(local, external)` pairs; `external` is set when
    /// the import renames (`("Eff", Some("SFC"))` models `{ SFC as Eff }`).
    pub fn import_named(&mut self, module: &str, specifiers: &[(&str, Option<&str>)]) {
        let rendered: Vec<String> = specifiers
            .iter()
            .map(|(local, external)| match external {
                Some(ext) => format!("{ext} as {local}"),
                None => (*local).to_string(),
            })
            .collect();
        let span = self.line(&format!(
            "import {{ {} }} from '{module}';",
            rendered.join(", ")
        ));
        let specifiers = specifiers
            .iter()
            .map(|(local, external)| match external {
                Some(ext) => ImportSpecifier::renamed(*local, *ext),
                None => ImportSpecifier::plain(*local),
            })
            .collect();
        self.statements.push(Statement::Import(ImportDecl {
            module_specifier: module.to_string(),
            bindings: ImportBindings::Named { specifiers },
            span,
        }));
    }

    pub fn import_side_effect(&mut self, module: &str) {
        let span = self.line(&format!("import '{module}';"));
        self.statements.push(Statement::Import(ImportDecl {
            module_specifier: module.to_string(),
            bindings: ImportBindings::None,
            span,
        }));
    }

    /// An import whose named clause the front end flagged as structurally
    /// missing (error node in the parse).
    pub fn import_named_malformed(&mut self, module: &str) {
        let span = self.line(&format!("import {{}} from '{module}';"));
        self.statements.push(Statement::Import(ImportDecl {
            module_specifier: module.to_string(),
            bindings: ImportBindings::Malformed,
            span,
        }));
    }

    // Type declarations ---------------------------------------------------

    /// Start an interface fragment; call `finish()` on the returned builder.
    pub fn interface(&mut self, name: &str) -> InterfaceBuilder<'_> {
        InterfaceBuilder {
            builder: self,
            name: name.to_string(),
            extends: Vec::new(),
            ops: Vec::new(),
        }
    }

    /// `export type Name = ...;` — resolves to a non-interface symbol.
    pub fn type_alias(&mut self, name: &str, ty: TypeId) {
        let display = self.host.display_of(ty).to_string();
        let span = self.line(&format!("export type {name} = {display};"));
        self.host.add_declaration(
            name,
            Declaration {
                kind: DeclKind::TypeAlias,
                span,
            },
        );
        self.statements.push(Statement::Other { span });
    }

    /// `export class Name {}` — resolves to a non-interface symbol.
    pub fn class_decl(&mut self, name: &str) {
        let span = self.line(&format!("export class {name} {{}}"));
        self.host.add_declaration(
            name,
            Declaration {
                kind: DeclKind::Class,
                span,
            },
        );
        self.statements.push(Statement::Other { span });
    }

    // Variable statements -------------------------------------------------

    fn const_statement(&mut self, name: &str, annotation: Option<TypeAnnotation>, exported: bool) {
        let keyword = if exported {
            "export const"
        } else {
            "const"
        };
        let start = self.text.len() as u32;
        let (line, ann) = match annotation {
            Some(TypeAnnotation::Ref(mut r)) => {
                let rendered = r.render();
                let prefix_len = (keyword.len() + 1 + name.len() + 2) as u32;
                let ann_pos = start + prefix_len;
                let ann_span = Span::new(ann_pos, ann_pos + rendered.len() as u32);
                assign_default_spans(&mut r, ann_span);
                (
                    format!("{keyword} {name}: {rendered} = (props) => null;"),
                    Some(TypeAnnotation::Ref(r)),
                )
            }
            Some(TypeAnnotation::Other { .. }) => {
                let prefix_len = (keyword.len() + 1 + name.len() + 2) as u32;
                let ann_pos = start + prefix_len;
                let rendered = "() => void";
                (
                    format!("{keyword} {name}: {rendered} = () => {{}};"),
                    Some(TypeAnnotation::Other {
                        span: Span::new(ann_pos, ann_pos + rendered.len() as u32),
                    }),
                )
            }
            None => (format!("{keyword} {name} = null;"), None),
        };
        let stmt_span = self.line(&line);
        let decl_pos = start + (keyword.len() + 1) as u32;
        self.statements.push(Statement::Var(VarStatement {
            exported,
            span: stmt_span,
            declarations: vec![VarDecl {
                name: name.to_string(),
                annotation: ann,
                span: Span::new(decl_pos, stmt_span.end),
            }],
        }));
    }

    /// `export const name: <annotation> = (props) => null;`
    pub fn export_const(&mut self, name: &str, annotation: TypeRefNode) {
        self.const_statement(name, Some(TypeAnnotation::Ref(annotation)), true);
    }

    /// An exported const with a non-reference annotation.
    pub fn export_const_other(&mut self, name: &str) {
        self.const_statement(
            name,
            Some(TypeAnnotation::Other {
                span: Span::default(),
            }),
            true,
        );
    }

    /// An exported const with no annotation at all.
    pub fn export_const_untyped(&mut self, name: &str) {
        self.const_statement(name, None, true);
    }

    /// A non-exported const; the scanner skips it.
    pub fn const_local(&mut self, name: &str, annotation: TypeRefNode) {
        self.const_statement(name, Some(TypeAnnotation::Ref(annotation)), false);
    }

    pub fn finish(self) -> (SourceModule, MemoryHost) {
        (
            SourceModule {
                file_name: self.file_name,
                text: self.text,
                statements: self.statements,
                interfaces: self.interfaces,
                comments: self.comments,
            },
            self.host,
        )
    }
}

fn assign_default_spans(r: &mut TypeRefNode, span: Span) {
    if r.span == Span::default() {
        r.span = span;
    }
    for arg in &mut r.type_args {
        assign_default_spans(arg, span);
    }
}

enum MemberOp {
    Doc(String),
    LineComment(String),
    Blank,
    Member {
        name: String,
        ty: TypeId,
        optional: bool,
    },
}

/// Accumulates one interface fragment, then writes its text and registers
/// the declaration under the (possibly already merged) symbol.
pub struct InterfaceBuilder<'a> {
    builder: &'a mut ModuleBuilder,
    name: String,
    extends: Vec<TypeRefNode>,
    ops: Vec<MemberOp>,
}

impl<'a> InterfaceBuilder<'a> {
    pub fn extends(mut self, name: &str) -> Self {
        self.extends.push(TypeRefNode::plain(name));
        self
    }

    pub fn extends_ref(mut self, type_ref: TypeRefNode) -> Self {
        self.extends.push(type_ref);
        self
    }

    pub fn member(mut self, name: &str, ty: TypeId, optional: bool) -> Self {
        self.ops.push(MemberOp::Member {
            name: name.to_string(),
            ty,
            optional,
        });
        self
    }

    /// Doc block attached above whatever member is added next.
    pub fn doc(mut self, body: &str) -> Self {
        self.ops.push(MemberOp::Doc(body.to_string()));
        self
    }

    /// Plain comment above the next member; never attaches.
    pub fn line_comment(mut self, text: &str) -> Self {
        self.ops.push(MemberOp::LineComment(text.to_string()));
        self
    }

    pub fn blank_line(mut self) -> Self {
        self.ops.push(MemberOp::Blank);
        self
    }

    pub fn finish(self) -> InterfaceId {
        let b = self.builder;
        let start = b.text.len() as u32;

        let mut header = format!("export interface {}", self.name);
        if !self.extends.is_empty() {
            header.push_str(" extends ");
            let rendered: Vec<String> = self.extends.iter().map(|r| r.render()).collect();
            header.push_str(&rendered.join(", "));
        }
        header.push_str(" {");
        let header_span = b.line(&header);

        let mut extends = self.extends;
        for r in &mut extends {
            assign_default_spans(r, header_span);
        }

        let mut members = Vec::new();
        for op in self.ops {
            match op {
                MemberOp::Doc(body) => b.push_doc_block(&body, "    "),
                MemberOp::LineComment(text) => b.push_line_comment(&text, "    "),
                MemberOp::Blank => b.blank_line(),
                MemberOp::Member {
                    name,
                    ty,
                    optional,
                } => {
                    b.text.push_str("    ");
                    let display = b.host.display_of(ty).to_string();
                    let marker = if optional { "?" } else { "" };
                    let span = b.line(&format!("{name}{marker}: {display};"));
                    members.push(Member {
                        name,
                        ty,
                        optional,
                        span,
                    });
                }
            }
        }

        let close_span = b.line("}");
        let span = Span::new(start, close_span.end);

        let id = InterfaceId(b.interfaces.len() as u32);
        b.interfaces.push(InterfaceDecl {
            name: self.name.clone(),
            exported: true,
            members,
            extends,
            span,
        });
        b.statements.push(Statement::Interface(id));
        b.host.add_declaration(
            &self.name,
            Declaration {
                kind: DeclKind::Interface(id),
                span,
            },
        );
        id
    }
}
