//! Whitespace-only word splitting

use crate::error::Result;
use crate::words::WordTokenizer;

/// Splits on Unicode whitespace only
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WordTokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<String> {
        Ok(text.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}
