//! Record types flowing through the pipeline.
//!
//! Lifecycle: `RawCandidate` (one line of analysis-engine output) becomes a
//! `Gadget` (a labeled code slice), gadgets are grouped into `FileRecord`s
//! (one JSONL line per source file in a corpus shard), and at assembly time
//! each surviving gadget is converted into a `TrainingRecord` (the unit of
//! the final dataset). No record is ever mutated after it is written.

use serde::{Deserialize, Serialize};

/// Task description attached to every training record.
pub const TRAINING_INSTRUCTION: &str = "You are a secure code analysis assistant. \
Analyze the following C/C++ code snippet for Stack-Based Buffer Overflow. \
Respond with 'Vulnerable' if the code contains a buffer overflow, or 'Safe' if it is secure.";

/// Task description attached to inference records (names the CWE explicitly).
pub const INFERENCE_INSTRUCTION: &str = "You are a secure code analysis assistant. \
Analyze the following C/C++ code snippet for Stack-Based Buffer Overflow (CWE-121). \
Respond with 'Vulnerable' if the code contains a buffer overflow, or 'Safe' if it is secure.";

/// One record of raw analysis-engine output, before slicing.
///
/// `file` and `method` are required; a line missing either fails to decode
/// and is counted as malformed at the consuming stage. `lines` defaults to
/// empty (such candidates are skipped, not errors) and `label` is absent for
/// inference runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCandidate {
    pub file: String,
    #[serde(default)]
    pub lines: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<u8>,
    pub method: String,
}

/// One labeled code slice, the atomic unit of the dataset.
///
/// Immutable once created; owned by exactly one `FileRecord`. The dedup key
/// (masked `code_sliced`) is deliberately *not* stored here; each consuming
/// stage derives it on demand, which keeps dedup scope a property of the
/// stage rather than of the gadget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gadget {
    pub gadget_id: String,
    pub label: u8,
    pub code_sliced: String,
    pub raw_lines: Vec<u64>,
}

/// All gadgets sliced from one resolved source file.
///
/// One `FileRecord` is emitted as one line of a corpus shard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub file_path: String,
    pub gadgets: Vec<Gadget>,
}

/// One instruction-tuning record of the final dataset.
///
/// `output` is `"Vulnerable"`/`"Safe"` for training data and the empty
/// string for inference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingRecord {
    pub instruction: String,
    pub input: String,
    pub output: String,
}

/// Maps a numeric label to the expected model output text.
pub fn verdict(label: u8) -> &'static str {
    if label == 1 {
        "Vulnerable"
    } else {
        "Safe"
    }
}
