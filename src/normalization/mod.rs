//! Normalization of hand-entered catalog labels into stable join keys.
pub mod platform;

pub use platform::{normalize, split_tokens, tokenize};
