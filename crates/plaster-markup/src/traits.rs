//! Trait definitions for the parsing collaborators.

use crate::html::ParseError;
use crate::markdown::MarkdownError;
use crate::node::GenericNode;

/// Parses an HTML fragment into generic nodes.
pub trait MarkupParser: Send + Sync {
    /// Parser identifier (e.g., "html5ever")
    fn name(&self) -> &'static str;

    /// Parse `source` and return its top-level sibling nodes in order.
    fn parse_fragment(&self, source: &str) -> Result<Vec<GenericNode>, ParseError>;
}

/// Converts Markdown into HTML.
pub trait MarkdownConverter: Send + Sync {
    /// Converter identifier (e.g., "pulldown-cmark")
    fn name(&self) -> &'static str;

    /// Render `markdown` as an HTML string.
    fn to_html(&self, markdown: &str) -> Result<String, MarkdownError>;
}
