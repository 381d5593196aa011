//! Typed element tree.

use serde::Serialize;

use crate::rules::Tag;
use crate::style::StyleRecord;

/// A typed element node: tag-specific properties plus ordered children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Node<P> {
    pub props: P,
    pub children: Vec<Element>,
}

impl<P> Node<P> {
    pub fn new(props: P, children: Vec<Element>) -> Self {
        Self { props, children }
    }
}

/// Properties of an `<a>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnchorProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Properties of a `<div>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DivProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

/// Properties of a `<span>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpanProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleRecord>,
}

/// A translated UI element.
///
/// The set of variants is closed: one per supported tag, plus text leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Text(String),
    Paragraph(Node<()>),
    H1(Node<()>),
    H3(Node<()>),
    Code(Node<()>),
    Strong(Node<()>),
    Em(Node<()>),
    Anchor(Node<AnchorProps>),
    Div(Node<DivProps>),
    Span(Node<SpanProps>),
    Br(Node<()>),
}

impl Element {
    /// Create a text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn paragraph(children: Vec<Element>) -> Self {
        Self::Paragraph(Node::new((), children))
    }

    pub fn h1(children: Vec<Element>) -> Self {
        Self::H1(Node::new((), children))
    }

    pub fn h3(children: Vec<Element>) -> Self {
        Self::H3(Node::new((), children))
    }

    pub fn code(children: Vec<Element>) -> Self {
        Self::Code(Node::new((), children))
    }

    pub fn strong(children: Vec<Element>) -> Self {
        Self::Strong(Node::new((), children))
    }

    pub fn em(children: Vec<Element>) -> Self {
        Self::Em(Node::new((), children))
    }

    pub fn anchor(props: AnchorProps, children: Vec<Element>) -> Self {
        Self::Anchor(Node::new(props, children))
    }

    pub fn div(props: DivProps, children: Vec<Element>) -> Self {
        Self::Div(Node::new(props, children))
    }

    pub fn span(props: SpanProps, children: Vec<Element>) -> Self {
        Self::Span(Node::new(props, children))
    }

    pub fn br() -> Self {
        Self::Br(Node::default())
    }

    /// The element's tag, or `None` for a text leaf.
    pub fn tag(&self) -> Option<Tag> {
        let tag = match self {
            Self::Text(_) => return None,
            Self::Paragraph(_) => Tag::P,
            Self::H1(_) => Tag::H1,
            Self::H3(_) => Tag::H3,
            Self::Code(_) => Tag::Code,
            Self::Strong(_) => Tag::Strong,
            Self::Em(_) => Tag::Em,
            Self::Anchor(_) => Tag::A,
            Self::Div(_) => Tag::Div,
            Self::Span(_) => Tag::Span,
            Self::Br(_) => Tag::Br,
        };
        Some(tag)
    }

    /// Child elements (always empty for text).
    pub fn children(&self) -> &[Element] {
        match self {
            Self::Text(_) => &[],
            Self::Paragraph(node)
            | Self::H1(node)
            | Self::H3(node)
            | Self::Code(node)
            | Self::Strong(node)
            | Self::Em(node)
            | Self::Br(node) => &node.children,
            Self::Anchor(node) => &node.children,
            Self::Div(node) => &node.children,
            Self::Span(node) => &node.children,
        }
    }

    /// Text content if this is a text leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Self::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_tags_and_children() {
        let element = Element::paragraph(vec![
            Element::text("a"),
            Element::code(vec![Element::text("b")]),
        ]);

        assert_eq!(element.tag(), Some(Tag::P));
        assert_eq!(element.children().len(), 2);
        assert_eq!(element.children()[0].as_text(), Some("a"));
        assert_eq!(element.node_count(), 4);
    }

    #[test]
    fn text_leaf_has_no_tag() {
        let element = Element::text("hi");

        assert_eq!(element.tag(), None);
        assert!(element.children().is_empty());
    }

    #[test]
    fn serializes_props_without_empty_fields() {
        let element = Element::span(
            SpanProps {
                class_name: None,
                style: Some(StyleRecord {
                    font_size: Some("12px".to_string()),
                    font_style: None,
                }),
            },
            vec![Element::text("x")],
        );

        let json = serde_json::to_value(&element).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "span": {
                    "props": { "style": { "font_size": "12px" } },
                    "children": [{ "text": "x" }]
                }
            })
        );
    }
}
