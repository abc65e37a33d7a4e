//! End-to-end extraction over modules shaped like the docgen fixtures:
//! a namespace React import, a merged props interface, an `extends` chain,
//! and stacked/tagged doc comments.

mod common;

use propdoc_extract::{
    ComponentEntry, ExtractError, ExtractOptions, extract_module,
};
use propdoc_model::{MemoryHost, ModuleBuilder, SourceModule, TypeRefNode};

fn sfc_ref(props: &str) -> TypeRefNode {
    TypeRefNode::qualified("React", "SFC").with_args(vec![TypeRefNode::plain(props)])
}

/// Rebuild of the `sfc.tsx` fixture: `ButtonProps` declared twice,
/// `ExtendTest extends ButtonProps`, and three components with different
/// doc-comment arrangements.
fn sfc_fixture() -> (SourceModule, MemoryHost) {
    let mut b = ModuleBuilder::new("sfc.tsx");
    b.import_namespace("react", "React");
    b.blank_line();

    let string_ty = b.ty("string");
    let size_ty = b.ty("'large' | 'small' | number");
    let merged_ty = b.ty_with_expansion(
        "Partial<{ foo: \"bar\"; fizz: \"bizz\"; }>",
        "{ foo?: \"bar\"; fizz?: \"bizz\"; }",
    );

    b.interface("ButtonProps")
        .doc("The color of the `Button`'s Text.")
        .member("color", string_ty, false)
        .doc("Name of the size prop.")
        .member("size", size_ty, false)
        .finish();
    b.interface("ButtonProps")
        .line_comment("single line comment")
        .member("merged", merged_ty, false)
        .finish();
    b.interface("ExtendTest")
        .extends("ButtonProps")
        .member("str", string_ty, false)
        .finish();
    b.blank_line();

    b.doc_comment("Doc comment on component.");
    b.export_const("Button", sfc_ref("ExtendTest"));
    b.blank_line();

    b.line_comment("single line comment");
    b.doc_comment("Another JSDoc");
    b.doc_comment("Doc comment on component.\n\nAnd another line");
    b.export_const("Button2", sfc_ref("ButtonProps"));
    b.blank_line();

    b.doc_comment("Some text\n@export\n@type {React.SFC<ButtonProps>}\n@author rozzzly\nfoobar");
    b.export_const("Button3", sfc_ref("ButtonProps"));

    b.finish()
}

#[test]
fn extracts_all_components_in_declaration_order() {
    common::init_tracing();
    let (module, host) = sfc_fixture();
    let report = extract_module(&module, &host, &ExtractOptions::default()).unwrap();

    let names: Vec<&str> = report.components.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Button", "Button2", "Button3"]);
    assert!(report.components.iter().all(|c| c.error().is_none()));
}

#[test]
fn own_fields_precede_inherited_and_docs_attach_per_member() {
    let (module, host) = sfc_fixture();
    let report = extract_module(&module, &host, &ExtractOptions::default()).unwrap();

    let button = report.components[0].metadata().expect("Button resolves");
    assert_eq!(
        button.doc.as_ref().map(|d| d.summary.as_str()),
        Some("Doc comment on component.")
    );

    let names: Vec<&str> = button.props.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["str", "color", "size", "merged"]);
    assert!(button.props.iter().all(|p| p.required));

    let color = &button.props[1];
    assert_eq!(
        color.doc.as_ref().map(|d| d.summary.as_str()),
        Some("The color of the `Button`'s Text.")
    );
    // A plain `//` comment above `merged` must not attach.
    assert_eq!(button.props[3].doc, None);
}

#[test]
fn stacked_doc_blocks_attach_only_the_adjacent_one() {
    let (module, host) = sfc_fixture();
    let report = extract_module(&module, &host, &ExtractOptions::default()).unwrap();

    let button2 = report.components[1].metadata().expect("Button2 resolves");
    let doc = button2.doc.as_ref().expect("doc attaches");
    assert_eq!(doc.summary, "Doc comment on component.\n\nAnd another line");
    assert!(doc.tags.is_empty());
}

#[test]
fn doc_tags_are_parsed_in_order() {
    let (module, host) = sfc_fixture();
    let report = extract_module(&module, &host, &ExtractOptions::default()).unwrap();

    let button3 = report.components[2].metadata().expect("Button3 resolves");
    let doc = button3.doc.as_ref().expect("doc attaches");
    assert_eq!(doc.summary, "Some text");
    let tags: Vec<(&str, &str)> = doc
        .tags
        .iter()
        .map(|t| (t.name.as_str(), t.text.as_str()))
        .collect();
    assert_eq!(
        tags,
        vec![
            ("export", ""),
            ("type", "{React.SFC<ButtonProps>}"),
            ("author", "rozzzly\nfoobar"),
        ]
    );
}

#[test]
fn serialized_shape_matches_output_boundary() {
    let (module, host) = sfc_fixture();
    let report = extract_module(&module, &host, &ExtractOptions::default()).unwrap();
    let button = report.components[0].metadata().unwrap();

    let value = serde_json::to_value(button).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Button",
            "doc": { "summary": "Doc comment on component.", "tags": [] },
            "props": [
                {
                    "name": "str",
                    "type": { "text": "string" },
                    "required": true
                },
                {
                    "name": "color",
                    "type": { "text": "string" },
                    "required": true,
                    "doc": { "summary": "The color of the `Button`'s Text.", "tags": [] }
                },
                {
                    "name": "size",
                    "type": { "text": "'large' | 'small' | number" },
                    "required": true,
                    "doc": { "summary": "Name of the size prop.", "tags": [] }
                },
                {
                    "name": "merged",
                    "type": {
                        "text": "{ foo?: \"bar\"; fizz?: \"bizz\"; }",
                        "truncatedText": "Partial<{ foo: \"bar\"; fizz: \"bizz\"; }>"
                    },
                    "required": true
                }
            ]
        })
    );
}

#[test]
fn module_without_framework_import_reports_no_components() {
    let mut b = ModuleBuilder::new("plain.tsx");
    let ty = b.ty("string");
    b.interface("ButtonProps").member("color", ty, false).finish();
    b.export_const("Button", sfc_ref("ButtonProps"));
    let (module, host) = b.finish();

    let report = extract_module(&module, &host, &ExtractOptions::default()).unwrap();
    assert!(report.components.is_empty());
}

#[test]
fn malformed_framework_import_fails_the_module() {
    let mut b = ModuleBuilder::new("broken.tsx");
    b.import_named_malformed("react");
    let (module, host) = b.finish();

    let err = extract_module(&module, &host, &ExtractOptions::default()).unwrap_err();
    assert!(matches!(err, ExtractError::MalformedImport { .. }));
}

#[test]
fn one_failing_candidate_does_not_abort_its_siblings() {
    let mut b = ModuleBuilder::new("mixed.tsx");
    b.import_namespace("react", "React");
    let ty = b.ty("string");
    b.interface("GoodProps").member("ok", ty, false).finish();
    b.export_const("Broken", sfc_ref("MissingProps"));
    b.export_const(
        "NoArgs",
        TypeRefNode::qualified("React", "SFC"),
    );
    b.export_const("Good", sfc_ref("GoodProps"));
    let (module, host) = b.finish();

    let report = extract_module(&module, &host, &ExtractOptions::default()).unwrap();
    assert_eq!(report.components.len(), 3);

    let ComponentEntry::Failed { name, error } = &report.components[0] else {
        panic!("expected failure for Broken");
    };
    assert_eq!(name, "Broken");
    assert!(matches!(
        error,
        ExtractError::UnresolvedPropsSymbol { name, .. } if name == "MissingProps"
    ));

    assert!(matches!(
        report.components[1].error(),
        Some(ExtractError::UnexpectedTypeArity { found: 0, .. })
    ));

    let good = report.components[2].metadata().expect("Good resolves");
    assert_eq!(good.props.len(), 1);
    assert_eq!(good.props[0].name, "ok");
}

#[test]
fn error_location_points_at_the_offending_reference() {
    let mut b = ModuleBuilder::new("loc.tsx");
    b.import_namespace("react", "React");
    b.export_const("Broken", sfc_ref("MissingProps"));
    let (module, host) = b.finish();

    let report = extract_module(&module, &host, &ExtractOptions::default()).unwrap();
    let error = report.components[0].error().expect("Broken fails");
    let span = error.span();
    assert_eq!(span.text(&module.text), "React.SFC<MissingProps>");
}
