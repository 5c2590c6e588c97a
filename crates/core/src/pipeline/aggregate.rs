//! Gadget aggregation: one batch of raw analysis records for one target.

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::warn;

use crate::dedup::DedupIndex;
use crate::format::CodeFormatter;
use crate::model::{FileRecord, Gadget, RawCandidate};
use crate::pipeline::{canonical_slice, resolve_source_path, PipelineError};
use crate::text::Masker;

/// Counters reported after one aggregation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AggregateSummary {
    /// Gadgets written out.
    pub gadgets: usize,
    /// Distinct source files the gadgets were sliced from.
    pub files: usize,
    /// Candidates whose resolved source path did not exist.
    pub skipped_missing: usize,
    /// Input lines that failed to decode.
    pub malformed: usize,
    /// Candidates dropped by the batch-local dedup index.
    pub duplicates: usize,
}

/// Consumes the record file at `result_file`, slices and canonicalizes each
/// candidate, groups gadgets by resolved source file, and appends one JSON
/// line per file to `output_path`.
///
/// The output is opened in append mode; truncating the shard at the start
/// of a fresh run is the caller's responsibility. Dedup here is
/// batch-local: a fresh index keyed on the masked canonical text, so
/// identical gadgets from *different* targets survive into their own shards
/// (the dataset assembler dedups corpus-wide later). One bad record never
/// aborts the batch.
pub fn aggregate(
    result_file: &Path,
    target: &Path,
    output_path: &Path,
    formatter: &dyn CodeFormatter,
    masker: &dyn Masker,
) -> Result<AggregateSummary, PipelineError> {
    let file = File::open(result_file)
        .map_err(|source| PipelineError::ReadInput { path: result_file.to_path_buf(), source })?;
    let reader = BufReader::new(file);

    // FilePath -> gadgets; BTreeMap keeps shard line order deterministic.
    let mut files_map: BTreeMap<PathBuf, Vec<Gadget>> = BTreeMap::new();
    let mut index = DedupIndex::new();
    let mut summary = AggregateSummary::default();
    let mut count = 0usize;

    for line in reader.lines() {
        let line = line
            .map_err(|source| PipelineError::ReadInput { path: result_file.to_path_buf(), source })?;
        if line.trim().is_empty() {
            continue;
        }
        let candidate: RawCandidate = match serde_json::from_str(&line) {
            Ok(candidate) => candidate,
            Err(err) => {
                warn!("skipping malformed analysis record: {err}");
                summary.malformed += 1;
                continue;
            }
        };
        if candidate.lines.is_empty() {
            continue;
        }
        let label = match candidate.label {
            Some(label) => label,
            None => {
                warn!("skipping unlabeled candidate from method {}", candidate.method);
                summary.malformed += 1;
                continue;
            }
        };

        let source_path = resolve_source_path(target, &candidate.file);
        if !source_path.exists() {
            summary.skipped_missing += 1;
            continue;
        }

        let code = canonical_slice(&source_path, &candidate.lines, formatter);
        if code.trim().is_empty() {
            // Slicing failed or every requested line was out of range.
            continue;
        }
        if !index.insert(&masker.mask(&code)) {
            summary.duplicates += 1;
            continue;
        }

        let gadget = Gadget {
            gadget_id: format!("{}_{}", candidate.method, count),
            label,
            code_sliced: code,
            raw_lines: candidate.lines,
        };
        files_map.entry(source_path).or_default().push(gadget);

        count += 1;
        if count % 100 == 0 {
            print!("\r[*] Processed {count} gadgets...");
            io::stdout().flush().ok();
        }
    }

    let mut out = OpenOptions::new()
        .create(true)
        .append(true)
        .open(output_path)
        .map_err(|source| PipelineError::WriteOutput { path: output_path.to_path_buf(), source })?;

    summary.files = files_map.len();
    for (file_path, gadgets) in files_map {
        let record = FileRecord { file_path: file_path.display().to_string(), gadgets };
        let json = serde_json::to_string(&record)?;
        writeln!(out, "{json}").map_err(|source| PipelineError::WriteOutput {
            path: output_path.to_path_buf(),
            source,
        })?;
    }

    summary.gadgets = count;
    Ok(summary)
}
