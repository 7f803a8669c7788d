//! Markup fragments: wrapping, parsing and the tree model

pub mod cursor;
pub mod model;
pub mod parser;

pub use model::{Content, Document, Element};
pub use parser::{is_valid_name, Parser};

use tracing::debug;

use crate::config::TokenizerConfig;
use crate::error::{Error, ErrorKind, Result, Span};

/// Enclose `fragment` in the synthetic wrapper element
pub fn wrap(fragment: &str, wrapper_tag: &str) -> String {
    format!("<{wrapper_tag}>{fragment}</{wrapper_tag}>")
}

/// Parse a fragment that may mix free text and inline tags.
///
/// The fragment is wrapped in `config.wrapper_tag` so the result always has a
/// single root. Size is checked against the wrapped input.
pub fn parse_fragment(fragment: &str, config: &TokenizerConfig) -> Result<Document> {
    let wrapped = wrap(fragment, &config.wrapper_tag);
    debug!(wrapped = %wrapped, "parsing fragment");

    if wrapped.len() > config.max_size {
        return Err(Error::new(
            ErrorKind::MaxSizeExceeded {
                max: config.max_size,
            },
            Span::empty(),
        ));
    }

    Parser::new(wrapped.as_bytes())
        .with_max_depth(config.max_depth)
        .parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("a <b/>", "sentence"), "<sentence>a <b/></sentence>");
    }

    #[test]
    fn test_parse_fragment_roots_at_wrapper() -> Result<()> {
        let doc = parse_fragment("hi <set name=\"x\">there</set>", &TokenizerConfig::default())?;
        assert_eq!(doc.root.name, "sentence");
        assert_eq!(doc.root.children.len(), 2);
        Ok(())
    }

    #[test]
    fn test_parse_empty_fragment() -> Result<()> {
        let doc = parse_fragment("", &TokenizerConfig::default())?;
        assert!(doc.root.children.is_empty());
        Ok(())
    }

    #[test]
    fn test_fragment_closing_the_wrapper_is_malformed() {
        let result = parse_fragment("a</sentence><sentence>b", &TokenizerConfig::default());
        assert_eq!(
            result.err().map(|e| e.kind().clone()),
            Some(ErrorKind::MalformedFragment)
        );
    }

    #[test]
    fn test_size_limit_counts_wrapper() {
        let config = TokenizerConfig::default().with_max_size(25);
        // "<sentence>" + "</sentence>" is 21 bytes
        assert!(parse_fragment("abcd", &config).is_ok());
        assert_eq!(
            parse_fragment("abcde", &config).err().map(|e| e.kind().clone()),
            Some(ErrorKind::MaxSizeExceeded { max: 25 })
        );
    }
}
