//! Pipeline stages consuming analysis records and producing dataset files.
//!
//! Stages, in data-flow order:
//! - [`aggregate`]: raw records for one target -> per-file corpus shard;
//! - [`dataset`]: all shards -> shuffled, deduplicated train/test split;
//! - [`inference`]: raw records for one target -> flat unlabeled JSONL;
//! - [`stats`]: shards -> post-dedup label distribution report.
//!
//! All stages are single-threaded, synchronous, and stream their input one
//! line at a time. Each run owns its output files exclusively; concurrent
//! runs against the same output path are undefined.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::format::CodeFormatter;
use crate::slice::slice_lines;
use crate::text::strip_comments;

pub mod aggregate;
pub mod dataset;
pub mod inference;
pub mod stats;

/// Error type for pipeline stage failures.
///
/// Per-record problems (malformed lines, missing source files, formatter
/// hiccups) are recovered inline and surface only in summaries; these
/// variants cover the hard failures that abort a stage.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to read analysis results at {path}: {source}")]
    ReadInput { path: PathBuf, source: io::Error },
    #[error("Failed to write output at {path}: {source}")]
    WriteOutput { path: PathBuf, source: io::Error },
    #[error("Failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Resolves a candidate's source path against the analysis target.
///
/// When the target is itself a file, every candidate refers to it; when it
/// is a directory, the candidate's (relative) file name is joined onto it.
pub fn resolve_source_path(target: &Path, candidate_file: &str) -> PathBuf {
    if target.is_file() {
        target.to_path_buf()
    } else {
        target.join(candidate_file)
    }
}

/// Runs the canonicalization chain on one candidate: slice the requested
/// lines, strip comments, normalize indentation.
pub fn canonical_slice(
    source_path: &Path,
    line_numbers: &[u64],
    formatter: &dyn CodeFormatter,
) -> String {
    let sliced = slice_lines(source_path, line_numbers);
    let stripped = strip_comments(&sliced);
    formatter.format(&stripped)
}
