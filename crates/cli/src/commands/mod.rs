//! One module per CLI subcommand, plus shared helpers.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use gadget_core::engine::{AnalysisEngine, JoernEngine};
use gadget_core::format::{CodeFormatter, IndentFormatter, PassthroughFormatter};

pub mod dataset;
pub mod inference;
pub mod stats;
pub mod training;

/// Select the formatter for a run.
pub fn select_formatter(no_format: bool) -> Box<dyn CodeFormatter> {
    if no_format {
        Box::new(PassthroughFormatter)
    } else {
        Box::new(IndentFormatter)
    }
}

/// Obtain the engine record file for a target: either a pre-existing file
/// passed on the command line, or a fresh engine invocation.
///
/// Engine failure (non-zero exit) is fatal for the target; the error
/// propagates and the process exits non-zero.
pub fn resolve_engine_output(
    target: &std::path::Path,
    engine_output: Option<String>,
    engine_script: &str,
) -> Result<PathBuf> {
    match engine_output {
        Some(path) => {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(anyhow!("Engine output file not found: {}", path.display()));
            }
            Ok(path)
        }
        None => {
            let engine = JoernEngine::new(engine_script);
            println!("[*] Analyzing: {} (engine: {})...", target.display(), engine.name());
            Ok(engine.run(target)?)
        }
    }
}
