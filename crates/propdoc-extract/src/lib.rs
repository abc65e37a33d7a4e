//! Structured documentation metadata for TSX function components.
//!
//! Given a semantic model of one source file (statement tree plus
//! type-resolution service, both supplied by a front end behind the
//! `propdoc-model` boundary), this crate recognizes exported function
//! component bindings, resolves each component's declared props interface
//! through declaration merging and `extends` chains into one flattened
//! field list, and attaches the adjacent documentation comment to every
//! declaration and field.
//!
//! Pipeline, leaves first:
//! 1. `classify` — framework import bindings
//! 2. `scan` — exported component candidates
//! 3. `resolve` — merged, flattened, cycle-checked props interface
//! 4. `describe` — type renderings and required flags
//! 5. `doc` — doc attachment and final assembly
//!
//! `extract_module` wires the phases for one module; `batch` runs many
//! modules in parallel against a shared read-only host.

pub mod batch;
pub mod classify;
pub mod describe;
pub mod doc;
pub mod error;
pub mod metadata;
pub mod options;
pub mod resolve;
pub mod scan;

pub use batch::{BatchEntry, extract_batch};
pub use classify::{BindingTable, FrameworkBinding, classify};
pub use describe::describe;
pub use error::ExtractError;
pub use metadata::{
    ComponentEntry, ComponentMetadata, DocBlock, DocTag, ModuleReport, PropField, TypeDescriptor,
};
pub use options::ExtractOptions;
pub use resolve::{ResolvedField, ResolvedInterface, Resolver};
pub use scan::{ComponentCandidate, ScanOutcome, scan};

use propdoc_common::LineMap;
use propdoc_model::{SourceModule, TypeResolutionService};
use tracing::debug;

/// Run the full pipeline over one module.
///
/// A classifier failure (malformed framework import) fails the whole
/// module. Candidate-level failures are isolated: each becomes a
/// `ComponentEntry::Failed` while sibling components still produce
/// metadata. There is no silent partial result for a single component.
pub fn extract_module<H: TypeResolutionService + ?Sized>(
    module: &SourceModule,
    host: &H,
    options: &ExtractOptions,
) -> Result<ModuleReport, ExtractError> {
    let table = classify::classify(module, options)?;
    let outcomes = scan::scan(module, &table, options);

    let mut components = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome {
            ScanOutcome::Candidate(candidate) => {
                let mut resolver = Resolver::new(module, host, options);
                match resolver.resolve(&candidate.props_ref) {
                    Ok(resolved) => {
                        components.push(ComponentEntry::Resolved(doc::assemble(
                            module, host, &candidate, &resolved,
                        )));
                    }
                    Err(error) => {
                        components.push(ComponentEntry::Failed {
                            name: candidate.name,
                            error,
                        });
                    }
                }
            }
            ScanOutcome::Rejected { name, error } => {
                components.push(ComponentEntry::Failed { name, error });
            }
        }
    }

    let failed = components.iter().filter(|c| c.error().is_some()).count();
    if failed > 0 {
        let line_map = LineMap::new(&module.text);
        for entry in &components {
            if let Some(error) = entry.error() {
                debug!(
                    module = %module.file_name,
                    component = %entry.name(),
                    "candidate failed: {}",
                    error.message_at(&line_map)
                );
            }
        }
    }
    debug!(
        module = %module.file_name,
        components = components.len(),
        failed,
        "module extraction finished"
    );
    Ok(ModuleReport {
        file_name: module.file_name.clone(),
        components,
    })
}
