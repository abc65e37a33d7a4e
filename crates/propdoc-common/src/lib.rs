//! Common types and utilities for the propdoc extractor.
//!
//! This crate provides foundational types used across all propdoc crates:
//! - Source spans (`Span`)
//! - Position/line-map types for source locations
//! - Comment block model and JSDoc text utilities
//! - Centralized limits and thresholds

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Position/LineMap types for line/column source locations
pub mod position;
pub use position::{LineMap, Position};

// Centralized limits and thresholds
pub mod limits;

// Comment block model and doc-comment text utilities
pub mod comments;
pub use comments::CommentBlock;
