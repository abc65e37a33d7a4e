//! Parallel batch driver.
//!
//! Module analyses are independent: they share only the read-only
//! resolution service, so a batch fans out across rayon's pool. One
//! module's failure never aborts the rest. Cancellation is cooperative and
//! lands between modules, never mid-module; the per-module resolution is
//! cycle- and depth-bounded, so it always terminates on its own.

use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use tracing::debug;

use propdoc_model::{SourceModule, TypeResolutionService};

use crate::error::ExtractError;
use crate::metadata::ModuleReport;
use crate::options::ExtractOptions;
use crate::extract_module;

/// Outcome of one batch slot.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchEntry {
    Completed(Result<ModuleReport, ExtractError>),
    /// The cancel flag was set before this module started.
    Cancelled,
}

impl BatchEntry {
    pub fn report(&self) -> Option<&ModuleReport> {
        match self {
            BatchEntry::Completed(Ok(report)) => Some(report),
            _ => None,
        }
    }
}

/// Extract metadata from every `(module, host)` job in parallel.
///
/// Results come back in job order regardless of scheduling. Jobs observed
/// after `cancel` is set report `Cancelled` and do no work.
pub fn extract_batch<H: TypeResolutionService + ?Sized>(
    jobs: &[(&SourceModule, &H)],
    options: &ExtractOptions,
    cancel: &AtomicBool,
) -> Vec<BatchEntry> {
    let entries: Vec<BatchEntry> = jobs
        .par_iter()
        .map(|(module, host)| {
            if cancel.load(Ordering::Relaxed) {
                return BatchEntry::Cancelled;
            }
            BatchEntry::Completed(extract_module(module, *host, options))
        })
        .collect();
    debug!(
        jobs = jobs.len(),
        cancelled = entries.iter().filter(|e| matches!(e, BatchEntry::Cancelled)).count(),
        "batch extraction finished"
    );
    entries
}
