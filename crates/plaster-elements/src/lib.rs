//! Typed element trees from literal HTML and Markdown.
//!
//! Markup is parsed by `plaster-markup`, validated tag by tag against a
//! closed rule table, and built into immutable [`Element`] values. Repeated
//! translations of the same source are served from a [`TranslationCache`].

pub mod cache;
pub mod element;
pub mod error;
pub mod render;
pub mod rules;
pub mod style;
pub mod translate;
pub mod translator;

pub use cache::{Fragment, TranslationCache};
pub use element::{AnchorProps, DivProps, Element, Node, SpanProps};
pub use error::TranslateError;
pub use render::{render_html, render_tree};
pub use rules::{AttributeRule, Attributes, RuleError, RuleTable, Slot, Tag, TranslationRule};
pub use style::{parse_style, StyleError, StyleRecord};
pub use translate::{translate, translate_all, translate_with};
pub use translator::Translator;
