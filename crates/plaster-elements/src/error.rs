//! Translation errors.

use plaster_markup::{MarkdownError, ParseError};

use crate::style::StyleError;

/// Errors that can occur while translating markup into elements.
///
/// Every error aborts the whole translation; no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Markdown(#[from] MarkdownError),

    #[error("Unsupported element <{tag}>")]
    UnsupportedTag { tag: String },

    #[error("Unsupported attribute {attribute:?} on <{tag}>")]
    UnsupportedAttribute { tag: String, attribute: String },

    #[error("Unsupported style on <{tag}>: {error}")]
    UnsupportedStyle {
        tag: String,
        #[source]
        error: StyleError,
    },

    #[error("Expected a single root element from {markup:?}, got {found}")]
    Cardinality { markup: String, found: usize },
}
