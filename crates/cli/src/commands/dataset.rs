use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use gadget_core::pipeline::dataset::{assemble, find_shards, write_jsonl};
use gadget_core::text::LeakMasker;

/// Assemble all corpus shards into train.jsonl / test.jsonl.
pub fn prepare_dataset_command(
    input_dir: &str,
    output_dir: &str,
    train_ratio: f64,
    seed: u64,
) -> Result<()> {
    if !(0.0..=1.0).contains(&train_ratio) {
        return Err(anyhow!("--train-ratio must be within [0.0, 1.0], got {train_ratio}"));
    }

    let input_dir = Path::new(input_dir);
    let shards = find_shards(input_dir)
        .with_context(|| format!("Failed to list shards in {}", input_dir.display()))?;
    println!("[*] Found {} gadget files.", shards.len());

    let masker = LeakMasker;
    let (train, test) =
        assemble(&shards, train_ratio, seed, &masker).context("Failed to assemble dataset")?;
    println!("[*] Total gadgets collected: {}", train.len() + test.len());

    let output_dir = Path::new(output_dir);
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output dir: {}", output_dir.display()))?;
    let train_path = output_dir.join("train.jsonl");
    let test_path = output_dir.join("test.jsonl");

    write_jsonl(&train_path, &train)
        .with_context(|| format!("Failed to write {}", train_path.display()))?;
    write_jsonl(&test_path, &test)
        .with_context(|| format!("Failed to write {}", test_path.display()))?;

    println!("[*] Dataset Export Complete:");
    println!("    - Train: {} items -> {}", train.len(), train_path.display());
    println!("    - Test:  {} items  -> {}", test.len(), test_path.display());

    Ok(())
}
