//! Pure text transforms applied to sliced code.
//!
//! Two transforms live here:
//! - comment stripping (`strip`), which removes `//` and `/* */` comments
//!   without touching string or character literals;
//! - label-leak masking (`mask`), which replaces identifier patterns that
//!   would let a model infer the ground-truth label from naming alone.

pub mod mask;
pub mod strip;

pub use mask::{LeakMasker, Masker};
pub use strip::strip_comments;
