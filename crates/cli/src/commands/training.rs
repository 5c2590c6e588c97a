use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use gadget_core::pipeline::aggregate::aggregate;
use gadget_core::text::LeakMasker;
use vulnslice::{canonicalize_or_current, shard_file_name};

use crate::commands::{resolve_engine_output, select_formatter};

/// Run the full training extraction for one target: engine -> aggregate ->
/// per-target corpus shard.
pub fn generate_training_command(
    target: &str,
    results_dir: &str,
    engine_output: Option<String>,
    engine_script: &str,
    no_format: bool,
) -> Result<()> {
    let target_path = canonicalize_or_current(target)?;
    if !target_path.exists() {
        return Err(anyhow!("Target not found: {}", target_path.display()));
    }

    let results_dir = Path::new(results_dir);
    fs::create_dir_all(results_dir)
        .with_context(|| format!("Failed to create results dir: {}", results_dir.display()))?;
    let shard_path = results_dir.join(shard_file_name(&target_path));
    println!("[*] Results will be saved to: {}", shard_path.display());

    // Cleanup previous run for this specific target; the aggregator itself
    // appends, so truncation happens exactly once per run.
    if shard_path.exists() {
        fs::remove_file(&shard_path).with_context(|| {
            format!("Failed to remove previous shard: {}", shard_path.display())
        })?;
    }

    let started_at = Utc::now();
    let result_file = resolve_engine_output(&target_path, engine_output, engine_script)
        .context("Analysis engine invocation failed")?;
    println!("[*] Processing batch results from {}...", result_file.display());

    let formatter = select_formatter(no_format);
    let masker = LeakMasker;
    let summary = aggregate(&result_file, &target_path, &shard_path, formatter.as_ref(), &masker)
        .with_context(|| format!("Failed to aggregate gadgets for {}", target_path.display()))?;

    println!(
        "\n[+] Done! Processed {} gadgets across {} files. Saved to {}",
        summary.gadgets,
        summary.files,
        shard_path.display()
    );
    if summary.malformed > 0 {
        println!("[!] Skipped {} malformed record lines.", summary.malformed);
    }
    if summary.skipped_missing > 0 {
        println!("[!] Skipped {} candidates with missing source files.", summary.skipped_missing);
    }
    if summary.duplicates > 0 {
        println!("[*] Dropped {} duplicate gadgets (batch-local).", summary.duplicates);
    }
    println!(
        "[*] Run: started {}, finished {}.",
        started_at.to_rfc3339(),
        Utc::now().to_rfc3339()
    );

    Ok(())
}
