//! Extraction of physical source lines by 1-indexed line number.

use std::fs;
use std::path::Path;

use log::warn;

/// Extracts the requested physical lines from the file at `path`.
///
/// Line numbers are 1-indexed. Out-of-range numbers are silently skipped.
/// Each included line is trimmed of leading/trailing whitespace; lines are
/// joined with `\n` in the order given by `line_numbers` (the caller sorts
/// if it wants ascending order -- the slicer does not re-sort, so control
/// flow ordering chosen upstream is preserved).
///
/// Fails softly: if the file cannot be read, logs a warning and returns an
/// empty string. Source corpora are not guaranteed to be valid UTF-8, so
/// the file content is decoded lossily.
pub fn slice_lines(path: &Path, line_numbers: &[u64]) -> String {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("failed to read source file {}: {err}", path.display());
            return String::new();
        }
    };
    let content = String::from_utf8_lossy(&bytes);
    let all_lines: Vec<&str> = content.lines().collect();

    let mut gadget_lines = Vec::new();
    for &ln in line_numbers {
        if ln >= 1 && (ln as usize) <= all_lines.len() {
            gadget_lines.push(all_lines[ln as usize - 1].trim());
        }
    }

    gadget_lines.join("\n")
}
