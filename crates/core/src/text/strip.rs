//! Comment stripping with string/char-literal awareness.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// One alternation covering comments *and* literals, scanned left to right.
///
/// Matching literals as first-class alternatives is what keeps a `"//"` or
/// `"/*"` inside a string from being misread as a comment start: once the
/// scan enters a literal, the whole literal is consumed as a single match.
/// The literal alternatives are escape-aware (`\"` does not terminate a
/// string). The trailing `/\*.*\z` alternative consumes an unterminated
/// block comment to end of input.
static COMMENT_OR_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?ms)//.*?$|/\*.*?\*/|/\*.*\z|'(?:\\.|[^\\'])*'|"(?:\\.|[^\\"])*""#)
        .expect("comment/literal pattern is valid")
});

/// Removes `//...` and `/* ... */` comments from `text`, leaving string and
/// character literal contents untouched.
///
/// Comment spans are replaced by a single space so adjacent tokens are not
/// accidentally joined; literal spans are copied verbatim.
pub fn strip_comments(text: &str) -> String {
    COMMENT_OR_LITERAL
        .replace_all(text, |caps: &Captures| {
            let matched = &caps[0];
            if matched.starts_with('/') {
                " ".to_string()
            } else {
                matched.to_string()
            }
        })
        .into_owned()
}
