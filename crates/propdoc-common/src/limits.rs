//! Centralized limits and thresholds for the extractor.
//!
//! Shared constants for recursion depths and adjacency rules used across the
//! pipeline. Centralizing them prevents duplicate definitions with
//! inconsistent values and documents the rationale for each limit.

/// Maximum depth of the heritage (`extends`) resolution walk.
///
/// Cycle detection already guarantees termination, but a pathological
/// acyclic chain (`I0 extends I1 extends I2 ...`) can still be arbitrarily
/// deep. Past this depth the resolver fails with `ResolutionDepthExceeded`
/// instead of recursing further. Real-world prop interfaces rarely inherit
/// more than a handful of levels.
pub const MAX_HERITAGE_DEPTH: u32 = 64;

/// Maximum number of newlines permitted between a documentation comment
/// block and the declaration it attaches to.
///
/// A doc block on the line directly above its declaration is separated by
/// one newline; one intervening blank line makes two. Anything wider is not
/// adjacent and the block is discarded.
pub const MAX_DOC_GAP_NEWLINES: usize = 2;
