//! markseg - structure-preserving tokenizer for markup-bearing sentences
//!
//! A sentence may freely mix text and inline tags. markseg wraps it in a
//! synthetic root, parses it, word-segments every text node and writes the
//! tags back with their names and attributes unchanged. The assembled
//! string is then normalized: spaces collapse, `$ ` becomes `$`, and
//! `anon ` becomes `anon`.
//!
//! # Quick Start
//!
//! ```
//! use markseg::tokenize_sentence;
//! # fn main() -> Result<(), markseg::Error> {
//! let tokens = tokenize_sentence("私は<set name=\"topic\">猫</set>が好き")?;
//! assert_eq!(tokens, "私 は <set name=\"topic\">猫</set> が 好 き");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod config;
pub use config::TokenizerConfig;

pub mod markup;
pub use markup::{parse_fragment, Content, Document, Element};

pub mod words;
pub use words::{ScriptTokenizer, WhitespaceTokenizer, WordTokenizer};

pub mod eval;
pub use eval::Evaluator;

pub mod normalize;
pub use normalize::normalize;

pub mod tokenizer;
pub use tokenizer::{tokenize_sentence_with, Tokenizer};

/// Tokenize a sentence with the script-boundary tokenizer and default
/// configuration
pub fn tokenize_sentence(sentence: &str) -> Result<String> {
    tokenize_sentence_with(sentence, &ScriptTokenizer, &TokenizerConfig::default())
}
