//! HTML element tree
//!
//! This module defines the nodes produced by the markdown compiler.
//! A tree is built bottom-up in one pass and rendered once.

use indexmap::IndexMap;

/// Ordered attribute map. Iteration order is serialization order.
pub type Attributes = IndexMap<String, String>;

/// A node of the HTML output tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Node without children. An untagged leaf renders as its raw text.
    Leaf {
        tag: Option<String>,
        text: String,
        attributes: Attributes,
    },

    /// Tagged node owning an ordered list of children
    Container {
        tag: String,
        children: Vec<Element>,
        attributes: Attributes,
    },
}

impl Element {
    /// Create an untagged text leaf
    pub fn text(text: impl Into<String>) -> Self {
        Element::Leaf {
            tag: None,
            text: text.into(),
            attributes: Attributes::new(),
        }
    }

    /// Create a tagged leaf
    pub fn leaf(tag: &str, text: impl Into<String>) -> Self {
        Element::Leaf {
            tag: Some(tag.to_string()),
            text: text.into(),
            attributes: Attributes::new(),
        }
    }

    /// Create a container with the given children
    pub fn container(tag: &str, children: Vec<Element>) -> Self {
        Element::Container {
            tag: tag.to_string(),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Add an attribute, builder style
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set an attribute. An existing key keeps its position.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attributes_mut().insert(name.to_string(), value.into());
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes().get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Element::Leaf { attributes, .. } | Element::Container { attributes, .. } => attributes,
        }
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            Element::Leaf { attributes, .. } | Element::Container { attributes, .. } => attributes,
        }
    }

    /// Get the tag name, `None` for untagged leaves
    pub fn tag(&self) -> Option<&str> {
        match self {
            Element::Leaf { tag, .. } => tag.as_deref(),
            Element::Container { tag, .. } => Some(tag.as_str()),
        }
    }

    /// Child nodes; always empty for leaves
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Leaf { .. } => &[],
            Element::Container { children, .. } => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Element::Leaf { .. })
    }

    /// Get all text from this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            Element::Leaf { text, .. } => text.clone(),
            Element::Container { children, .. } => {
                children.iter().map(Element::text_content).collect()
            }
        }
    }

    /// Serialize this element and its descendants to HTML
    pub fn render(&self) -> crate::Result<String> {
        crate::render::render(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_text() {
        let node = Element::text("Hello World");
        assert!(node.is_leaf());
        assert_eq!(node.tag(), None);
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_create_container() {
        let node = Element::container("div", vec![Element::text("a"), Element::leaf("b", "c")]);
        assert!(!node.is_leaf());
        assert_eq!(node.tag(), Some("div"));
        assert_eq!(node.children().len(), 2);
    }

    #[test]
    fn test_attributes_keep_insertion_order() {
        let node = Element::leaf("img", "")
            .with_attr("src", "cat.png")
            .with_attr("alt", "A cat");
        let keys: Vec<&str> = node.attributes().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["src", "alt"]);
        assert_eq!(node.attr("src"), Some("cat.png"));
        assert_eq!(node.attr("title"), None);
    }

    #[test]
    fn test_set_attr_overwrites_in_place() {
        let mut node = Element::container("div", vec![Element::text("x")])
            .with_attr("class", "a")
            .with_attr("id", "main");
        node.set_attr("class", "b");
        let pairs: Vec<(&str, &str)> = node
            .attributes()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(pairs, vec![("class", "b"), ("id", "main")]);
    }

    #[test]
    fn test_text_content() {
        let span = Element::container("span", vec![Element::text("World")]);
        let div = Element::container("div", vec![Element::text("Hello "), span]);
        assert_eq!(div.text_content(), "Hello World");
    }

    #[test]
    fn test_leaf_has_no_children() {
        assert!(Element::leaf("b", "bold").children().is_empty());
    }
}
