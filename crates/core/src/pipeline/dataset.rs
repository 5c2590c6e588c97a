//! Dataset assembly: corpus shards -> shuffled train/test split.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::warn;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::dedup::DedupIndex;
use crate::model::{verdict, FileRecord, TrainingRecord, TRAINING_INSTRUCTION};
use crate::pipeline::PipelineError;
use crate::text::Masker;

/// Lists the `.jsonl` corpus shards in `dir`, sorted by path.
///
/// Sorting matters: directory iteration order is OS-dependent, and the
/// split must be byte-identical across runs for the same inputs and seed.
pub fn find_shards(dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    let entries = fs::read_dir(dir)
        .map_err(|source| PipelineError::ReadInput { path: dir.to_path_buf(), source })?;
    let mut shards = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|source| PipelineError::ReadInput { path: dir.to_path_buf(), source })?;
        let path = entry.path();
        if path.extension().map(|ext| ext == "jsonl").unwrap_or(false) {
            shards.push(path);
        }
    }
    shards.sort();
    Ok(shards)
}

/// Reads every shard, flattens all gadgets, masks them, drops corpus-wide
/// duplicates, shuffles with `seed`, and splits at
/// `floor(len * train_ratio)`.
///
/// Deduplication here uses a fresh corpus-wide index, independent of any
/// batch-local dedup performed when the shards were written: identical
/// gadgets extracted from different targets are allowed in their shards but
/// only the first survives assembly. Fully reproducible: same shards and
/// seed produce identical record sequences.
pub fn assemble(
    shards: &[PathBuf],
    train_ratio: f64,
    seed: u64,
    masker: &dyn Masker,
) -> Result<(Vec<TrainingRecord>, Vec<TrainingRecord>), PipelineError> {
    let mut all = Vec::new();
    let mut index = DedupIndex::new();

    for shard in shards {
        let file = File::open(shard)
            .map_err(|source| PipelineError::ReadInput { path: shard.clone(), source })?;
        for line in BufReader::new(file).lines() {
            let line = line
                .map_err(|source| PipelineError::ReadInput { path: shard.clone(), source })?;
            if line.trim().is_empty() {
                continue;
            }
            let record: FileRecord = match serde_json::from_str(&line) {
                Ok(record) => record,
                Err(err) => {
                    warn!("skipping malformed shard line in {}: {err}", shard.display());
                    continue;
                }
            };
            for gadget in record.gadgets {
                if gadget.code_sliced.is_empty() {
                    continue;
                }
                let masked = masker.mask(&gadget.code_sliced);
                if !index.insert(&masked) {
                    continue;
                }
                all.push(TrainingRecord {
                    instruction: TRAINING_INSTRUCTION.to_string(),
                    input: masked,
                    output: verdict(gadget.label).to_string(),
                });
            }
        }
    }

    let mut rng = StdRng::seed_from_u64(seed);
    all.shuffle(&mut rng);

    let split_idx = (all.len() as f64 * train_ratio).floor() as usize;
    let test = all.split_off(split_idx);
    Ok((all, test))
}

/// Writes records to `path` as one JSON object per line, truncating any
/// previous content.
pub fn write_jsonl(path: &Path, records: &[TrainingRecord]) -> Result<(), PipelineError> {
    let mut out = File::create(path)
        .map_err(|source| PipelineError::WriteOutput { path: path.to_path_buf(), source })?;
    for record in records {
        let json = serde_json::to_string(record)?;
        writeln!(out, "{json}").map_err(|source| PipelineError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
