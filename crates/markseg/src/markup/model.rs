//! Markup tree model

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parsed fragment, rooted at the synthetic wrapper element
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Document {
    pub root: Element,
}

/// Markup element with attributes kept in source order
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Content>,
}

/// Markup content node
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Content {
    Element(Element),
    Text(String),
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<Content>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }
}

impl From<Element> for Content {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_attribute_order() {
        let element = Element::new("set")
            .with_attribute("name", "topic")
            .with_attribute("value", "weather")
            .with_child(Content::text("rain"));

        let keys: Vec<&str> = element.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "value"]);
        assert_eq!(element.children.first().and_then(Content::as_text), Some("rain"));
    }

    #[test]
    fn test_content_accessors() {
        let content = Content::from(Element::new("br"));
        assert_eq!(content.as_element().map(|e| e.name.as_str()), Some("br"));
        assert_eq!(content.as_text(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_tree() -> Result<(), serde_json::Error> {
        let element = Element::new("b")
            .with_attribute("id", "1")
            .with_child(Content::text("hi"));
        let json = serde_json::to_string(&Content::from(element))?;
        assert_eq!(
            json,
            r#"{"element":{"name":"b","attributes":{"id":"1"},"children":[{"text":"hi"}]}}"#
        );
        Ok(())
    }
}
