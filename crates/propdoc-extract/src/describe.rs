//! Type-descriptor builder.
//!
//! Computes the canonical type-text renderings and the required flag for a
//! resolved field. `text` is always the fully expanded rendering; the
//! service's default rendering rides along as `truncated_text` only when it
//! actually differs, so the two are never reported as distinct values that
//! are the same string.

use propdoc_model::TypeResolutionService;

use crate::metadata::TypeDescriptor;
use crate::resolve::ResolvedField;

/// Describe one resolved field: its type renderings and required flag.
///
/// `required` is the negation of the member's own optionality marker,
/// evaluated per member, never per resolved type.
pub fn describe<H: TypeResolutionService + ?Sized>(
    host: &H,
    field: &ResolvedField,
) -> (TypeDescriptor, bool) {
    let expanded = host.type_text_expanded(field.ty);
    let display = host.type_text(field.ty);
    let truncated_text = if display != expanded {
        Some(display.to_string())
    } else {
        None
    };
    (
        TypeDescriptor {
            text: expanded.to_string(),
            truncated_text,
        },
        !field.optional,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use propdoc_common::Span;
    use propdoc_model::ModuleBuilder;

    fn field(name: &str, ty: propdoc_model::TypeId, optional: bool) -> ResolvedField {
        ResolvedField {
            name: name.to_string(),
            ty,
            optional,
            span: Span::default(),
        }
    }

    #[test]
    fn identical_renderings_omit_truncated_text() {
        let mut b = ModuleBuilder::new("d.tsx");
        let ty = b.ty("string");
        let (_, host) = b.finish();
        let (descriptor, required) = describe(&host, &field("color", ty, false));
        assert_eq!(descriptor.text, "string");
        assert_eq!(descriptor.truncated_text, None);
        assert!(required);
    }

    #[test]
    fn divergent_renderings_keep_both() {
        let mut b = ModuleBuilder::new("d.tsx");
        let ty = b.ty_with_expansion(
            "{ foo: \"bar\"; ... }",
            "{ foo: \"bar\"; fizz: \"bizz\"; }",
        );
        let (_, host) = b.finish();
        let (descriptor, _) = describe(&host, &field("merged", ty, false));
        assert_eq!(descriptor.text, "{ foo: \"bar\"; fizz: \"bizz\"; }");
        assert_eq!(
            descriptor.truncated_text.as_deref(),
            Some("{ foo: \"bar\"; ... }")
        );
    }

    #[test]
    fn optional_marker_negates_required() {
        let mut b = ModuleBuilder::new("d.tsx");
        let ty = b.ty("number");
        let (_, host) = b.finish();
        let (_, required) = describe(&host, &field("size", ty, true));
        assert!(!required);
    }
}
