//! Content-addressed duplicate detection for masked gadget text.

use std::collections::HashSet;

use sha2::{Digest, Sha256};

/// A set of canonical (masked) code strings used to drop exact duplicates.
///
/// Scope is bound to one run of a consuming stage: the aggregator holds a
/// fresh index per invocation (batch-local), the dataset assembler holds a
/// fresh index for the whole corpus. Nothing persists across runs.
///
/// Keys are stored as SHA-256 digests rather than full strings, which keeps
/// the dominant memory cost at 32 bytes per unique gadget even for
/// multi-million-gadget corpora. Matching stays exact: two keys collide only
/// when byte-identical (no fuzzy matching).
#[derive(Debug, Default)]
pub struct DedupIndex {
    seen: HashSet<[u8; 32]>,
}

impl DedupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `key`, returning `true` if it was not previously present.
    ///
    /// First-seen wins: callers drop the gadget when this returns `false`.
    pub fn insert(&mut self, key: &str) -> bool {
        self.seen.insert(digest(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.seen.contains(&digest(key))
    }

    /// Number of unique keys recorded so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

fn digest(key: &str) -> [u8; 32] {
    Sha256::digest(key.as_bytes()).into()
}
