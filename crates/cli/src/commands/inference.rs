use std::path::Path;

use anyhow::{anyhow, Context, Result};
use gadget_core::pipeline::inference::assemble_inference;
use vulnslice::canonicalize_or_current;

use crate::commands::{resolve_engine_output, select_formatter};

/// Run the extraction pipeline for one target and emit unlabeled,
/// inference-ready records.
pub fn generate_inference_command(
    target: &str,
    output: &str,
    engine_output: Option<String>,
    engine_script: &str,
    no_format: bool,
) -> Result<()> {
    let target_path = canonicalize_or_current(target)?;
    if !target_path.exists() {
        return Err(anyhow!("Target not found: {}", target_path.display()));
    }

    println!("[*] Starting Inference Extraction for: {}", target_path.display());
    let result_file = resolve_engine_output(&target_path, engine_output, engine_script)
        .context("Analysis engine invocation failed")?;

    let output_path = Path::new(output);
    println!("[*] Processing gadgets into {}...", output_path.display());

    let formatter = select_formatter(no_format);
    let written = assemble_inference(&result_file, &target_path, output_path, formatter.as_ref())
        .with_context(|| format!("Failed to write inference records to {}", output_path.display()))?;

    println!("[*] Success! {written} gadgets ready for inference.");
    println!("    -> Output File: {}", output_path.display());

    Ok(())
}
