//! Generic document tree produced by parsing.

/// An untyped document node.
///
/// Nodes are transient: they exist between parsing and translation and are
/// consumed by the translator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenericNode {
    /// Literal text, as decoded by the parser
    Text(String),

    /// An element with its raw attributes in document order
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
        children: Vec<GenericNode>,
    },
}

impl GenericNode {
    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create an element node.
    pub fn element(
        tag: impl Into<String>,
        attributes: Vec<(String, String)>,
        children: Vec<GenericNode>,
    ) -> Self {
        Self::Element {
            tag: tag.into(),
            attributes,
            children,
        }
    }

    /// Tag name, or `None` for text.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Element { tag, .. } => Some(tag),
        }
    }

    /// Child nodes (always empty for text).
    pub fn children(&self) -> &[GenericNode] {
        match self {
            Self::Text(_) => &[],
            Self::Element { children, .. } => children,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Self::node_count).sum::<usize>()
    }
}
