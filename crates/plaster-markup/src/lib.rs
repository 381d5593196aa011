//! Markup front-end for plaster.
//!
//! This crate turns literal HTML fragments into a generic document tree and
//! converts Markdown into HTML. It knows nothing about typed elements; that is
//! the job of `plaster-elements`.

pub mod html;
pub mod markdown;
pub mod node;
pub mod traits;

pub use html::{parse_fragment, Html5everParser, ParseError};
pub use markdown::{markdown_to_html, CmarkConverter, MarkdownError, MarkdownOptions};
pub use node::GenericNode;
pub use traits::{MarkdownConverter, MarkupParser};
