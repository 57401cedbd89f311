//! Typed markup tree.
//!
//! The page as plain data: elements carrying a [`Tag`], a list of CSS class
//! names and children, or literal text. The outline, the JSON dump and the
//! region reader work on this tree. Trees carry no handlers, ids or other
//! runtime state, so equal trees always serialize to equal bytes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Element tags used by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Generic block container.
    Div,
    /// Page or section header.
    Header,
    /// Top-level heading.
    H1,
    /// Third-level heading.
    H3,
    /// Paragraph.
    P,
    /// Push button.
    Button,
}

impl Tag {
    /// Returns the lowercase HTML tag name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Header => "header",
            Self::H1 => "h1",
            Self::H3 => "h3",
            Self::P => "p",
            Self::Button => "button",
        }
    }

    /// Whether a host would let the user activate elements with this tag.
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        matches!(self, Self::Button)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the markup tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    /// An element with a tag, classes and children.
    Element(Element),
    /// Literal text.
    Text(String),
}

/// An element node.
///
/// Class names are never empty and never contain whitespace, whether the
/// element was built or deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawElement")]
pub struct Element {
    /// Element tag.
    pub tag: Tag,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    classes: Vec<String>,
    /// Child nodes, in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an empty element.
    #[must_use]
    pub const fn new(tag: Tag) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends one or more whitespace-separated class names.
    #[must_use]
    pub fn class(mut self, names: &str) -> Self {
        self.classes.extend(names.split_whitespace().map(str::to_owned));
        self
    }

    /// CSS class names, in source order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Appends a child node.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Appends a text child.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Whether the element carries the given class.
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Concatenated text of every text node below this element.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(Node::as_element)
    }
}

/// Wire form of [`Element`]; class names are normalized on the way in.
#[derive(Deserialize)]
struct RawElement {
    tag: Tag,
    #[serde(default)]
    classes: Vec<String>,
    #[serde(default)]
    children: Vec<Node>,
}

impl From<RawElement> for Element {
    fn from(raw: RawElement) -> Self {
        let element = raw
            .classes
            .iter()
            .fold(Self::new(raw.tag), |element, names| element.class(names));
        Self {
            children: raw.children,
            ..element
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl Node {
    /// Creates a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns the element if this node is one.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Iterates over this node and every node below it, in pre-order.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Iterates over every element in the tree, in pre-order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.descendants().filter_map(Self::as_element)
    }

    /// Every element with the given tag, in document order.
    #[must_use]
    pub fn find_by_tag(&self, tag: Tag) -> Vec<&Element> {
        self.elements().filter(|e| e.tag == tag).collect()
    }

    /// Every element carrying the given class, in document order.
    #[must_use]
    pub fn find_by_class(&self, name: &str) -> Vec<&Element> {
        self.elements().filter(|e| e.has_class(name)).collect()
    }

    /// Concatenated text of every text node in the tree, in document order.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    /// Number of element nodes in the tree.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements().count()
    }

    /// Maximum nesting depth. A lone text node or empty element has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Text(_) => 1,
            Self::Element(element) => {
                1 + element.children.iter().map(Self::depth).max().unwrap_or(0)
            }
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// Pre-order iterator over a tree, see [`Node::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Node::Element(element) = node {
            self.stack.extend(element.children.iter().rev());
        }
        Some(node)
    }
}
