//! Post-dedup label distribution across corpus shards.
//!
//! Answers "how balanced is the corpus actually" by replaying the same
//! mask + corpus-wide dedup the dataset assembler applies, then bucketing
//! surviving gadgets by the target the shard was built from.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::warn;
use serde::Serialize;

use crate::dedup::DedupIndex;
use crate::model::FileRecord;
use crate::pipeline::PipelineError;
use crate::text::Masker;

/// Per-target counts of gadgets surviving mask + dedup.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct BucketStats {
    pub total: usize,
    pub vuln: usize,
    pub safe: usize,
}

/// Distribution of unique gadgets across analysis targets.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionReport {
    pub buckets: BTreeMap<String, BucketStats>,
}

impl DistributionReport {
    pub fn grand_total(&self) -> BucketStats {
        let mut grand = BucketStats::default();
        for stats in self.buckets.values() {
            grand.total += stats.total;
            grand.vuln += stats.vuln;
            grand.safe += stats.safe;
        }
        grand
    }

    /// Renders the report as a plain-text table.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{:=<60}", "");
        let _ = writeln!(
            out,
            "{:<12} | {:<8} | {:<10} | {:<10} | {:<8}",
            "Target", "Total", "Vuln (1)", "Safe (0)", "Vuln %"
        );
        let _ = writeln!(out, "{:-<60}", "");
        for (name, stats) in &self.buckets {
            let _ = writeln!(
                out,
                "{:<12} | {:<8} | {:<10} | {:<10} | {:.1}%",
                name,
                stats.total,
                stats.vuln,
                stats.safe,
                percent(stats.vuln, stats.total)
            );
        }
        let _ = writeln!(out, "{:-<60}", "");
        let grand = self.grand_total();
        let _ = writeln!(
            out,
            "{:<12} | {:<8} | {:<10} | {:<10} | {:.1}%",
            "GRAND",
            grand.total,
            grand.vuln,
            grand.safe,
            percent(grand.vuln, grand.total)
        );
        let _ = writeln!(out, "{:=<60}", "");
        out
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total > 0 {
        part as f64 / total as f64 * 100.0
    } else {
        0.0
    }
}

/// Derives the bucket name from a shard file name (`gadgets_<target>.jsonl`).
fn bucket_name(shard: &Path) -> String {
    shard
        .file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.strip_prefix("gadgets_"))
        .unwrap_or("unknown")
        .to_string()
}

/// Scans the shards and builds the distribution report.
///
/// Mask + dedup mirror the dataset assembler, so the counts reflect what
/// assembly would actually keep.
pub fn analyze_distribution(
    shards: &[PathBuf],
    masker: &dyn Masker,
) -> Result<DistributionReport, PipelineError> {
    let mut report = DistributionReport::default();
    let mut index = DedupIndex::new();

    for shard in shards {
        let bucket = bucket_name(shard);
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
                if !index.insert(&masker.mask(&gadget.code_sliced)) {
                    continue;
                }
                let stats = report.buckets.entry(bucket.clone()).or_default();
                stats.total += 1;
                if gadget.label == 1 {
                    stats.vuln += 1;
                } else {
                    stats.safe += 1;
                }
            }
        }
    }

    Ok(report)
}
