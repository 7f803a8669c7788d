//! Tree evaluation: tokenize text leaves, re-emit markup around them

use tracing::{debug, warn};

use crate::config::TokenizerConfig;
use crate::error::{Error, Result};
use crate::markup::{Content, Document, Element};
use crate::words::WordTokenizer;

/// Renders a parsed fragment back to markup with its text tokenized
#[derive(Debug)]
pub struct Evaluator<'a, T: ?Sized> {
    tokenizer: &'a T,
    config: &'a TokenizerConfig,
}

impl<'a, T: WordTokenizer + ?Sized> Evaluator<'a, T> {
    pub const fn new(tokenizer: &'a T, config: &'a TokenizerConfig) -> Self {
        Self { tokenizer, config }
    }

    /// Render the whole document; the wrapper element itself emits no tag
    pub fn render(&self, document: &Document) -> String {
        self.evaluate_element(&document.root)
            .unwrap_or_else(|err| self.substitute(&document.root, &err))
    }

    /// Render one node.
    ///
    /// Text goes through the word tokenizer. Elements named like the
    /// wrapper contribute only their content; every other element is
    /// reconstructed with its name and attributes.
    pub fn evaluate(&self, node: &Content) -> Result<String> {
        match node {
            Content::Text(text) => {
                debug!(text = %text, "tokenizing text node");
                self.tokenizer.tokenize(text).map_err(|err| {
                    Error::node_evaluation(format!("cannot tokenize {text:?}: {}", err.message()))
                })
            }
            Content::Element(element) => self.evaluate_element(element),
        }
    }

    fn evaluate_element(&self, element: &Element) -> Result<String> {
        debug!(name = %element.name, "evaluating element");
        let content = self.evaluate_children(element);
        if element.name == self.config.wrapper_tag {
            Ok(content)
        } else {
            Ok(reconstruct(element, &content))
        }
    }

    /// Concatenate the rendered children in document order. A child that
    /// fails is replaced by the configured error marker.
    pub fn evaluate_children(&self, element: &Element) -> String {
        let mut result = String::new();
        for child in &element.children {
            match self.evaluate(child) {
                Ok(rendered) => result.push_str(&rendered),
                Err(err) => result.push_str(&self.substitute(element, &err)),
            }
        }
        result
    }

    fn substitute(&self, parent: &Element, err: &Error) -> String {
        warn!(parent = %parent.name, error = %err, "subtree replaced by error marker");
        self.config.error_marker.clone()
    }
}

/// Re-emit `element` around already rendered `content`, padded with one
/// space on each side. Attribute values are written as they were decoded.
pub fn reconstruct(element: &Element, content: &str) -> String {
    let name = &element.name;
    let mut attributes = String::new();
    for (key, value) in &element.attributes {
        attributes.push(' ');
        attributes.push_str(key);
        attributes.push_str("=\"");
        attributes.push_str(value);
        attributes.push('"');
    }

    if content.is_empty() {
        format!(" <{name}{attributes}/> ")
    } else {
        format!(" <{name}{attributes}>{content}</{name}> ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse_fragment;
    use crate::words::WhitespaceTokenizer;

    fn render_with<T: WordTokenizer + ?Sized>(tokenizer: &T, fragment: &str) -> Result<String> {
        let config = TokenizerConfig::default();
        let document = parse_fragment(fragment, &config)?;
        Ok(Evaluator::new(tokenizer, &config).render(&document))
    }

    #[test]
    fn test_reconstruct_empty_element() {
        let element = Element::new("b");
        assert_eq!(reconstruct(&element, ""), " <b/> ");
    }

    #[test]
    fn test_reconstruct_with_attributes() {
        let element = Element::new("set")
            .with_attribute("name", "topic")
            .with_attribute("value", "a < b");
        assert_eq!(
            reconstruct(&element, "x"),
            " <set name=\"topic\" value=\"a < b\">x</set> "
        );
    }

    #[test]
    fn test_wrapper_is_transparent() -> Result<()> {
        assert_eq!(render_with(&WhitespaceTokenizer, "hello   world")?, "hello world");
        assert_eq!(render_with(&WhitespaceTokenizer, "")?, "");
        Ok(())
    }

    #[test]
    fn test_nested_elements() -> Result<()> {
        let rendered = render_with(&WhitespaceTokenizer, "a <b>c <i>d  e</i></b><br/>")?;
        assert_eq!(rendered, "a <b>c <i>d e</i> </b>  <br/> ");
        Ok(())
    }

    #[test]
    fn test_inner_wrapper_named_element_is_transparent() -> Result<()> {
        let rendered = render_with(&WhitespaceTokenizer, "x <sentence>y</sentence>")?;
        assert_eq!(rendered, "xy");
        Ok(())
    }

    #[test]
    fn test_failing_text_is_replaced_by_marker() -> Result<()> {
        let picky = |text: &str| -> Result<String> {
            if text.contains("bad") {
                Err(Error::node_evaluation("unknown word"))
            } else {
                WhitespaceTokenizer.tokenize(text)
            }
        };
        let rendered = render_with(&picky, "ok <b>bad</b> <i>fine</i>")?;
        assert_eq!(rendered, "ok <b>JP Morph Error</b>  <i>fine</i> ");
        Ok(())
    }

    #[test]
    fn test_custom_marker() -> Result<()> {
        let config = TokenizerConfig::default().with_error_marker("?");
        let document = parse_fragment("<b>x</b>", &config)?;
        let failing = |_: &str| -> Result<String> { Err(Error::node_evaluation("down")) };
        assert_eq!(Evaluator::new(&failing, &config).render(&document), " <b>?</b> ");
        Ok(())
    }
}
