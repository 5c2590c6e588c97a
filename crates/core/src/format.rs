//! Indentation normalization via an external line-oriented C formatter.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use log::warn;

/// Capability boundary for the formatting step.
///
/// Formatting is a best-effort cosmetic step, not a correctness-bearing one:
/// implementations must never raise and never drop data.
pub trait CodeFormatter {
    fn format(&self, code: &str) -> String;
}

/// GNU `indent` over stdin/stdout, configured for K&R style, 4-space
/// indent, no tabs.
///
/// Any spawn failure or non-zero exit falls back to returning the input
/// unchanged. The tool path defaults to `indent` and can be overridden with
/// the `INDENT_BIN` environment variable.
#[derive(Debug, Default)]
pub struct IndentFormatter;

impl IndentFormatter {
    fn run_indent(&self, code: &str) -> Result<String, String> {
        let mut child = Command::new(resolve_indent_path())
            .args(["-st", "-kr", "-i4", "-nut"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| format!("failed to spawn indent: {e}"))?;

        child
            .stdin
            .take()
            .ok_or_else(|| "indent stdin unavailable".to_string())?
            .write_all(code.as_bytes())
            .map_err(|e| format!("failed to write to indent: {e}"))?;

        let output =
            child.wait_with_output().map_err(|e| format!("failed to wait for indent: {e}"))?;
        if !output.status.success() {
            return Err(format!("indent exited with {}", output.status));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl CodeFormatter for IndentFormatter {
    fn format(&self, code: &str) -> String {
        // Empty/whitespace-only input short-circuits; no point spawning.
        if code.trim().is_empty() {
            return code.to_string();
        }
        match self.run_indent(code) {
            Ok(formatted) => formatted,
            Err(err) => {
                warn!("formatter fallback, returning unformatted code: {err}");
                code.to_string()
            }
        }
    }
}

/// Identity formatter for tests and `--no-format` runs.
#[derive(Debug, Default)]
pub struct PassthroughFormatter;

impl CodeFormatter for PassthroughFormatter {
    fn format(&self, code: &str) -> String {
        code.to_string()
    }
}

fn resolve_indent_path() -> PathBuf {
    std::env::var_os("INDENT_BIN").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("indent"))
}
