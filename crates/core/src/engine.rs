//! Analysis-engine boundary.
//!
//! The static-analysis engine is an opaque oracle: given a target path it
//! produces a file of JSON records (`file`, `lines`, `label`, `method`),
//! one per vulnerability candidate. The pipeline only needs the path to
//! that record file, so the trait boundary is exactly that narrow.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Analysis target not found at {0}")]
    MissingTarget(PathBuf),
    #[error("Analysis engine error: {0}")]
    Engine(String),
    #[error("Analysis engine produced no output at {0}")]
    NoOutput(PathBuf),
}

/// Trait implemented by analysis engines (e.g. Joern).
///
/// Invocation is synchronous; the pipeline suspends until the engine
/// returns. No timeout is defined at this layer, so an unresponsive engine
/// hangs the run.
pub trait AnalysisEngine {
    /// Runs the engine against `target` (a file or directory) and returns
    /// the path of the record file it produced.
    fn run(&self, target: &Path) -> Result<PathBuf, EngineError>;
    fn name(&self) -> &'static str;
}

/// Joern-backed engine that shells out with a query script extracting
/// per-method candidate line sets.
pub struct JoernEngine {
    script_path: PathBuf,
}

impl JoernEngine {
    pub fn new(script_path: impl Into<PathBuf>) -> Self {
        Self { script_path: script_path.into() }
    }
}

impl AnalysisEngine for JoernEngine {
    fn run(&self, target: &Path) -> Result<PathBuf, EngineError> {
        if !target.exists() {
            return Err(EngineError::MissingTarget(target.to_path_buf()));
        }

        // Allow tests to feed a prebuilt record file via env to avoid
        // needing Joern installed.
        if let Some(fake) = std::env::var_os("VS_JOERN_FAKE_OUTPUT") {
            let path = PathBuf::from(fake);
            if !path.exists() {
                return Err(EngineError::NoOutput(path));
            }
            return Ok(path);
        }

        // The record file lands next to the target so both sides of any
        // path-namespace translation can reach it.
        let out_file = target
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("batch_gadgets.json");

        let status = Command::new(resolve_joern_path())
            .arg("--script")
            .arg(&self.script_path)
            .arg("--param")
            .arg(format!("inputPath={}", target.display()))
            .arg("--param")
            .arg(format!("outFile={}", out_file.display()))
            .status()
            .map_err(|e| EngineError::Engine(format!("failed to spawn joern: {e}")))?;

        if !status.success() {
            return Err(EngineError::Engine(format!("joern exited with {status}")));
        }
        if !out_file.exists() {
            return Err(EngineError::NoOutput(out_file));
        }
        Ok(out_file)
    }

    fn name(&self) -> &'static str {
        "joern"
    }
}

fn resolve_joern_path() -> PathBuf {
    std::env::var_os("JOERN_BIN").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("joern"))
}
