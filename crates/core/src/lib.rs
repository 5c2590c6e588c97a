//! gadget-core
//!
//! Core library for turning raw static-analysis output into a clean,
//! deduplicated, labeled dataset for a vulnerability-classification model.
//!
//! This crate defines the record types, the text transforms (slicing,
//! comment stripping, indentation normalization, label-leak masking), the
//! dedup index, and the pipeline stages that aggregate gadgets per analysis
//! target and assemble the final train/test split.
//!
//! The goal is to keep all substantive logic here so it is fully testable
//! and reusable from multiple frontends (CLI, batch drivers, etc.). The
//! external analysis engine and the code formatter are reached only through
//! narrow trait boundaries, so the pipeline core never depends directly on
//! process invocation.

pub mod dedup;
pub mod engine;
pub mod format;
pub mod model;
pub mod pipeline;
pub mod slice;
pub mod text;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
