//! Label-leak masking.
//!
//! Benchmark corpora such as Juliet encode the ground truth in identifier
//! names (`badSink`, `goodG2B`, `dataBadBuffer`). Left in place, those names
//! let a model solve the classification task by pattern-matching identifiers
//! instead of reasoning about the code. The masker substitutes them with
//! neutral tokens, applied identically regardless of true label.

use once_cell::sync::Lazy;
use regex::Regex;

/// Pluggable masking strategy.
///
/// The regex substitution below is substring-based and can over-match (e.g.
/// "goods" in unrelated code). Keeping the capability behind a trait lets a
/// token-aware identifier renamer replace it without touching callers.
pub trait Masker {
    fn mask(&self, code: &str) -> String;
}

static DATA_BAD_BUFFER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)dataBadBuffer").expect("valid pattern"));
static DATA_GOOD_BUFFER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)dataGoodBuffer").expect("valid pattern"));
static BAD_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w*[Bb]ad\w*\b").expect("valid pattern"));
static GOOD_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w*[Gg]ood\w*\b").expect("valid pattern"));

/// Regex-driven masker for Juliet-style naming conventions.
///
/// Rules apply in a fixed order, each as a whole-text pass:
/// 1. `dataBadBuffer` (case-insensitive, substring) -> `entity_1`
/// 2. `dataGoodBuffer` (case-insensitive, substring) -> `entity_2`
/// 3. any remaining word-bounded identifier containing "bad" -> `func_danger`
/// 4. any remaining word-bounded identifier containing "good" -> `func_safe`
///
/// The replacement tokens contain neither "bad" nor "good", so a second
/// application is a no-op: `mask(mask(x)) == mask(x)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeakMasker;

impl Masker for LeakMasker {
    fn mask(&self, code: &str) -> String {
        let masked = DATA_BAD_BUFFER.replace_all(code, "entity_1");
        let masked = DATA_GOOD_BUFFER.replace_all(&masked, "entity_2");
        let masked = BAD_IDENTIFIER.replace_all(&masked, "func_danger");
        let masked = GOOD_IDENTIFIER.replace_all(&masked, "func_safe");
        masked.into_owned()
    }
}
