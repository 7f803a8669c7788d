//! Word tokenizers applied to the text leaves of a fragment

pub mod script;
pub mod whitespace;

pub use script::ScriptTokenizer;
pub use whitespace::WhitespaceTokenizer;

use crate::error::Result;

/// Splits plain text (no markup) into tokens joined by single spaces.
///
/// Implementations must be stateless so one instance can serve concurrent
/// callers. An error fails only the text node being rendered.
pub trait WordTokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<String>;
}

impl<F> WordTokenizer for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn tokenize(&self, text: &str) -> Result<String> {
        self(text)
    }
}
