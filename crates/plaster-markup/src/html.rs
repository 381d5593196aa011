//! HTML fragment parser.

use html5ever::tendril::TendrilSink;
use html5ever::{local_name, namespace_url, ns, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::node::GenericNode;
use crate::traits::MarkupParser;

/// Errors that can occur when parsing an HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read HTML fragment: {0}")]
    Read(String),

    #[error("Unsupported {kind} node in HTML fragment")]
    UnsupportedNode { kind: &'static str },
}

/// Parse an HTML fragment into its top-level sibling nodes.
///
/// The fragment is parsed as if it were the content of a `<div>`, so several
/// sibling roots are allowed. Only element and text nodes are accepted;
/// comments, doctypes and processing instructions fail the whole parse.
pub fn parse_fragment(source: &str) -> Result<Vec<GenericNode>, ParseError> {
    let context = QualName::new(None, ns!(html), local_name!("div"));

    let dom = html5ever::parse_fragment(RcDom::default(), ParseOpts::default(), context, vec![])
        .from_utf8()
        .read_from(&mut source.as_bytes())
        .map_err(|e| ParseError::Read(e.to_string()))?;

    if !dom.errors.is_empty() {
        tracing::debug!(
            errors = dom.errors.len(),
            "HTML parser recovered from malformed markup"
        );
    }

    // Fragment content hangs off a synthetic <html> root
    let root = dom.document.children.borrow().first().cloned();
    let Some(root) = root else {
        return Ok(Vec::new());
    };

    let children = root.children.borrow();
    children.iter().map(convert_node).collect()
}

/// Convert a DOM node (and its subtree) into a generic node.
fn convert_node(handle: &Handle) -> Result<GenericNode, ParseError> {
    match &handle.data {
        NodeData::Text { contents } => Ok(GenericNode::Text(contents.borrow().to_string())),

        NodeData::Element { name, attrs, .. } => {
            let attributes = attrs
                .borrow()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect();

            let children = handle
                .children
                .borrow()
                .iter()
                .map(convert_node)
                .collect::<Result<Vec<_>, _>>()?;

            Ok(GenericNode::Element {
                tag: name.local.to_string(),
                attributes,
                children,
            })
        }

        NodeData::Comment { .. } => Err(ParseError::UnsupportedNode { kind: "comment" }),
        NodeData::Doctype { .. } => Err(ParseError::UnsupportedNode { kind: "doctype" }),
        NodeData::ProcessingInstruction { .. } => Err(ParseError::UnsupportedNode {
            kind: "processing instruction",
        }),
        NodeData::Document => Err(ParseError::UnsupportedNode { kind: "document" }),
    }
}

/// html5ever-backed fragment parser.
#[derive(Debug, Default, Clone, Copy)]
pub struct Html5everParser;

impl Html5everParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }
}

impl MarkupParser for Html5everParser {
    fn name(&self) -> &'static str {
        "html5ever"
    }

    fn parse_fragment(&self, source: &str) -> Result<Vec<GenericNode>, ParseError> {
        parse_fragment(source)
    }
}
