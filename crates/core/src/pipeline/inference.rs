//! Inference assembly: raw records -> flat unlabeled JSONL for a trained model.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use log::warn;

use crate::format::CodeFormatter;
use crate::model::{RawCandidate, TrainingRecord, INFERENCE_INSTRUCTION};
use crate::pipeline::{canonical_slice, resolve_source_path, PipelineError};

/// Runs the resolve/slice/strip/normalize pipeline over the record file and
/// writes one flat record per gadget to `output_path` with `output: ""`.
///
/// Unlike training aggregation there is no masking (the input is real code
/// to be judged, not training data that could leak its label), no dedup
/// (every candidate must be scored), and no per-file grouping. Returns the
/// number of records written.
pub fn assemble_inference(
    result_file: &Path,
    target: &Path,
    output_path: &Path,
    formatter: &dyn CodeFormatter,
) -> Result<usize, PipelineError> {
    let file = File::open(result_file)
        .map_err(|source| PipelineError::ReadInput { path: result_file.to_path_buf(), source })?;
    let reader = BufReader::new(file);

    let mut out = File::create(output_path)
        .map_err(|source| PipelineError::WriteOutput { path: output_path.to_path_buf(), source })?;

    let mut written = 0usize;
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
                continue;
            }
        };
        if candidate.lines.is_empty() {
            continue;
        }
        let source_path = resolve_source_path(target, &candidate.file);
        if !source_path.exists() {
            continue;
        }

        let code = canonical_slice(&source_path, &candidate.lines, formatter);
        if code.trim().is_empty() {
            continue;
        }

        let record = TrainingRecord {
            instruction: INFERENCE_INSTRUCTION.to_string(),
            input: code,
            output: String::new(),
        };
        let json = serde_json::to_string(&record)?;
        writeln!(out, "{json}").map_err(|source| PipelineError::WriteOutput {
            path: output_path.to_path_buf(),
            source,
        })?;
        written += 1;
    }

    Ok(written)
}
