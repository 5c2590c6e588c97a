use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Canonicalize the given path if possible, falling back to joining it onto
/// the current working directory.
pub fn canonicalize_or_current(path: &str) -> Result<PathBuf> {
    let path = Path::new(path);
    if path == Path::new(".") {
        Ok(env::current_dir().context("Failed to get current directory")?)
    } else {
        // Try to canonicalize; if it fails (e.g., path does not yet exist),
        // join it with the current dir to get an absolute path.
        match path.canonicalize() {
            Ok(p) => Ok(p),
            Err(_) => {
                let cwd = env::current_dir().context("Failed to get current directory")?;
                Ok(cwd.join(path))
            }
        }
    }
}

/// Infer a short name for an analysis target from its path.
///
/// Handles paths with a trailing slash by falling back to the parent's file
/// name; if nothing usable remains (e.g. `/`), returns `target`.
pub fn infer_target_name(target: &Path) -> String {
    target
        .file_name()
        .or_else(|| target.parent().and_then(|p| p.file_name()))
        .and_then(|os_str| os_str.to_str())
        .unwrap_or("target")
        .to_string()
}

/// Shard file name for one analysis target: `gadgets_<target>.jsonl`.
pub fn shard_file_name(target: &Path) -> String {
    format!("gadgets_{}.jsonl", infer_target_name(target))
}
