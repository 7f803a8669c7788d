//! Sentence-level driver: parse, evaluate, strip, normalize

use tracing::{debug, error, instrument, trace};

use crate::config::TokenizerConfig;
use crate::error::Result;
use crate::eval::Evaluator;
use crate::markup::{parse_fragment, Document};
use crate::normalize::{normalize, strip_wrapper};
use crate::words::{ScriptTokenizer, WordTokenizer};

/// Tokenize the text of `sentence` with `tokenizer`, keeping its markup.
///
/// Parse failures are returned to the caller. A text node the tokenizer
/// rejects is replaced by `config.error_marker` and the rest of the
/// sentence is still rendered.
#[instrument(level = "debug", skip(tokenizer, config))]
pub fn tokenize_sentence_with<T: WordTokenizer + ?Sized>(
    sentence: &str,
    tokenizer: &T,
    config: &TokenizerConfig,
) -> Result<String> {
    config.validate()?;

    let document = parse_fragment(sentence, config).inspect_err(|err| {
        error!(error = %err, "cannot parse sentence");
    })?;

    let rendered = Evaluator::new(tokenizer, config).render(&document);
    debug!(rendered = %rendered, "rendered sentence");

    let result = normalize(strip_wrapper(&rendered, &config.wrapper_tag));
    trace!(sentence, result = %result, "tokenized sentence");
    Ok(result)
}

/// Word tokenizer and configuration bundled for repeated use
#[derive(Debug, Clone, Default)]
pub struct Tokenizer<T = ScriptTokenizer> {
    words: T,
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: WordTokenizer> Tokenizer<T> {
    pub fn with_words(words: T) -> Self {
        Self {
            words,
            config: TokenizerConfig::default(),
        }
    }

    /// Replace the configuration, rejecting invalid settings
    pub fn with_config(mut self, config: TokenizerConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    pub fn words(&self) -> &T {
        &self.words
    }

    pub fn tokenize_sentence(&self, sentence: &str) -> Result<String> {
        tokenize_sentence_with(sentence, &self.words, &self.config)
    }

    /// Parse `sentence` without rendering it
    pub fn parse(&self, sentence: &str) -> Result<Document> {
        parse_fragment(sentence, &self.config)
    }
}
