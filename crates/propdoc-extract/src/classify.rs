//! Import classifier.
//!
//! Determines whether and how the framework namespace is bound in a module,
//! producing the binding table the scanner checks component type references
//! against. Multiple qualifying import statements are preserved as separate
//! bindings; membership tests consult the whole table, so there is no merge
//! step here.

use tracing::debug;

use propdoc_model::{ImportBindings, ImportSpecifier, SourceModule, Statement};

use crate::error::ExtractError;
use crate::options::ExtractOptions;

/// One framework binding contributed by one import statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameworkBinding {
    /// `import * as React from 'react'` — component types are referenced
    /// as `<alias>.<TypeName>`.
    Namespace { alias: String },
    /// `import { SFC, FC as Eff } from 'react'` — component types are
    /// referenced by local name, possibly renamed.
    Named { entries: Vec<ImportSpecifier> },
}

/// All framework bindings of one module, in import order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingTable {
    pub bindings: Vec<FrameworkBinding>,
}

impl BindingTable {
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Whether `qualifier`/`name` as written in a type reference denotes
    /// one of the framework's component types, accounting for renames.
    pub fn matches_component_type(
        &self,
        qualifier: Option<&str>,
        name: &str,
        options: &ExtractOptions,
    ) -> bool {
        self.bindings.iter().any(|binding| match binding {
            FrameworkBinding::Namespace { alias } => {
                qualifier == Some(alias.as_str()) && options.is_component_type_name(name)
            }
            FrameworkBinding::Named { entries } => {
                qualifier.is_none()
                    && entries.iter().any(|entry| {
                        entry.local == name
                            && options.is_component_type_name(entry.external_name())
                    })
            }
        })
    }
}

/// Scan the module's top-level imports for framework bindings.
///
/// Imports of other modules and side-effect-only framework imports
/// contribute nothing. A structurally missing named-import clause is a
/// `MalformedImport` — never a silent skip. An empty table is not an error;
/// the scanner then yields zero candidates.
pub fn classify(
    module: &SourceModule,
    options: &ExtractOptions,
) -> Result<BindingTable, ExtractError> {
    let mut table = BindingTable::default();
    for stmt in &module.statements {
        let Statement::Import(import) = stmt else {
            continue;
        };
        if import.module_specifier != options.framework_module {
            continue;
        }
        match &import.bindings {
            ImportBindings::Namespace { alias } => {
                table.bindings.push(FrameworkBinding::Namespace {
                    alias: alias.clone(),
                });
            }
            ImportBindings::Named { specifiers } => {
                table.bindings.push(FrameworkBinding::Named {
                    entries: specifiers.clone(),
                });
            }
            ImportBindings::None => {}
            ImportBindings::Malformed => {
                return Err(ExtractError::MalformedImport { span: import.span });
            }
        }
    }
    debug!(
        module = %module.file_name,
        bindings = table.bindings.len(),
        "classified framework imports"
    );
    Ok(table)
}
