//! Declaration scanner.
//!
//! Walks top-level exported variable statements and filters to bindings
//! whose declared type matches one of the framework's component types via
//! the binding table. Non-matching declarations are skipped silently (most
//! declarations are not components); a matching reference with the wrong
//! type-argument arity is rejected for that candidate only.

use propdoc_common::Span;
use tracing::trace;

use propdoc_model::{SourceModule, Statement, TypeAnnotation, TypeRefNode};

use crate::classify::BindingTable;
use crate::error::ExtractError;
use crate::options::ExtractOptions;

/// An exported binding whose declared type matched the component shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentCandidate {
    pub name: String,
    /// Span of the whole variable statement (including `export`); the
    /// component's doc comment attaches at its start.
    pub statement_span: Span,
    /// Span of the declaration itself, for error reporting.
    pub span: Span,
    /// The single props type argument, still unresolved.
    pub props_ref: TypeRefNode,
}

/// Scanner verdict for one declaration that matched the component shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    Candidate(ComponentCandidate),
    /// Matched the component type but failed structural validation
    /// (currently only type-argument arity).
    Rejected { name: String, error: ExtractError },
}

/// Scan the module for component candidates, in declaration order.
pub fn scan(
    module: &SourceModule,
    table: &BindingTable,
    options: &ExtractOptions,
) -> Vec<ScanOutcome> {
    let mut outcomes = Vec::new();
    if table.is_empty() {
        return outcomes;
    }
    for stmt in &module.statements {
        let Statement::Var(var) = stmt else {
            continue;
        };
        if !var.exported {
            continue;
        }
        for decl in &var.declarations {
            let Some(TypeAnnotation::Ref(type_ref)) = &decl.annotation else {
                continue;
            };
            if !table.matches_component_type(
                type_ref.qualifier.as_deref(),
                &type_ref.name,
                options,
            ) {
                continue;
            }
            if type_ref.type_args.len() != 1 {
                outcomes.push(ScanOutcome::Rejected {
                    name: decl.name.clone(),
                    error: ExtractError::UnexpectedTypeArity {
                        found: type_ref.type_args.len(),
                        span: type_ref.span,
                    },
                });
                continue;
            }
            trace!(
                component = %decl.name,
                props = %type_ref.type_args[0].qualified_name(),
                "matched component candidate"
            );
            outcomes.push(ScanOutcome::Candidate(ComponentCandidate {
                name: decl.name.clone(),
                statement_span: var.span,
                span: decl.span,
                props_ref: type_ref.type_args[0].clone(),
            }));
        }
    }
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use propdoc_model::ModuleBuilder;

    fn sfc_ref(props: &str) -> TypeRefNode {
        TypeRefNode::qualified("React", "SFC").with_args(vec![TypeRefNode::plain(props)])
    }

    #[test]
    fn module_without_framework_import_yields_no_candidates() {
        let mut b = ModuleBuilder::new("a.tsx");
        b.export_const("Button", sfc_ref("ButtonProps"));
        let (module, _) = b.finish();
        let options = ExtractOptions::default();
        let table = classify(&module, &options).unwrap();
        assert!(scan(&module, &table, &options).is_empty());
    }

    #[test]
    fn matching_declaration_becomes_candidate() {
        let mut b = ModuleBuilder::new("a.tsx");
        b.import_namespace("react", "React");
        b.export_const("Button", sfc_ref("ButtonProps"));
        let (module, _) = b.finish();
        let options = ExtractOptions::default();
        let table = classify(&module, &options).unwrap();
        let outcomes = scan(&module, &table, &options);
        assert_eq!(outcomes.len(), 1);
        let ScanOutcome::Candidate(c) = &outcomes[0] else {
            panic!("expected candidate, got {outcomes:?}");
        };
        assert_eq!(c.name, "Button");
        assert_eq!(c.props_ref.name, "ButtonProps");
    }

    #[test]
    fn non_exported_and_differently_typed_declarations_are_skipped() {
        let mut b = ModuleBuilder::new("a.tsx");
        b.import_namespace("react", "React");
        b.const_local("Hidden", sfc_ref("ButtonProps"));
        b.export_const_untyped("plain");
        b.export_const_other("handler");
        b.export_const("Other", TypeRefNode::qualified("React", "Component"));
        let (module, _) = b.finish();
        let options = ExtractOptions::default();
        let table = classify(&module, &options).unwrap();
        assert!(scan(&module, &table, &options).is_empty());
    }

    #[test]
    fn wrong_arity_is_rejected_per_candidate() {
        let mut b = ModuleBuilder::new("a.tsx");
        b.import_namespace("react", "React");
        b.export_const("Bare", TypeRefNode::qualified("React", "SFC"));
        b.export_const(
            "Two",
            TypeRefNode::qualified("React", "SFC").with_args(vec![
                TypeRefNode::plain("A"),
                TypeRefNode::plain("B"),
            ]),
        );
        b.export_const("Good", sfc_ref("P"));
        let (module, _) = b.finish();
        let options = ExtractOptions::default();
        let table = classify(&module, &options).unwrap();
        let outcomes = scan(&module, &table, &options);
        assert_eq!(outcomes.len(), 3);
        assert!(matches!(
            &outcomes[0],
            ScanOutcome::Rejected {
                name,
                error: ExtractError::UnexpectedTypeArity { found: 0, .. }
            } if name == "Bare"
        ));
        assert!(matches!(
            &outcomes[1],
            ScanOutcome::Rejected {
                error: ExtractError::UnexpectedTypeArity { found: 2, .. },
                ..
            }
        ));
        assert!(matches!(&outcomes[2], ScanOutcome::Candidate(_)));
    }

    #[test]
    fn renamed_named_import_matches_local_name() {
        let mut b = ModuleBuilder::new("a.tsx");
        b.import_named("react", &[("Eff", Some("SFC"))]);
        b.export_const(
            "Button",
            TypeRefNode::plain("Eff").with_args(vec![TypeRefNode::plain("P")]),
        );
        let (module, _) = b.finish();
        let options = ExtractOptions::default();
        let table = classify(&module, &options).unwrap();
        let outcomes = scan(&module, &table, &options);
        assert_eq!(outcomes.len(), 1);
        assert!(matches!(&outcomes[0], ScanOutcome::Candidate(c) if c.name == "Button"));
    }
}
