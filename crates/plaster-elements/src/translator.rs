//! Translation entry points.

use std::sync::Arc;

use plaster_markup::{CmarkConverter, Html5everParser, MarkdownConverter, MarkupParser};

use crate::cache::{Fragment, TranslationCache};
use crate::element::Element;
use crate::error::TranslateError;
use crate::rules::RuleTable;
use crate::translate::translate_with;

/// Translates HTML and Markdown source into typed elements.
///
/// A translator owns its parser, Markdown converter and a handle to a
/// [`TranslationCache`]. Several translators may share one cache.
pub struct Translator {
    parser: Box<dyn MarkupParser>,
    converter: Box<dyn MarkdownConverter>,
    rules: &'static RuleTable,
    cache: Arc<TranslationCache>,
}

impl Translator {
    /// Create a translator with the default parser, converter and a fresh cache.
    pub fn new() -> Self {
        Self {
            parser: Box::new(Html5everParser::new()),
            converter: Box::new(CmarkConverter::default()),
            rules: RuleTable::global(),
            cache: Arc::new(TranslationCache::new()),
        }
    }

    /// Use a different HTML parser.
    pub fn with_parser(mut self, parser: impl MarkupParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Use a different Markdown converter.
    pub fn with_converter(mut self, converter: impl MarkdownConverter + 'static) -> Self {
        self.converter = Box::new(converter);
        self
    }

    /// Use a shared cache.
    pub fn with_cache(mut self, cache: Arc<TranslationCache>) -> Self {
        self.cache = cache;
        self
    }

    /// The cache backing this translator.
    pub fn cache(&self) -> &Arc<TranslationCache> {
        &self.cache
    }

    /// Translate an HTML fragment into its top-level elements.
    ///
    /// Results are cached by trimmed source; a cache hit neither parses nor
    /// validates again.
    pub fn translate_html(&self, source: &str) -> Result<Fragment, TranslateError> {
        self.cache
            .get_or_translate(source, |markup| self.parse_and_translate(markup))
    }

    /// Translate an HTML fragment that must contain exactly one root.
    pub fn translate_html_single(&self, source: &str) -> Result<Element, TranslateError> {
        self.cache
            .get_or_translate_single(source, |markup| self.parse_and_translate(markup))
    }

    /// Convert Markdown to HTML and translate the result.
    ///
    /// The generated HTML goes through [`translate_html`](Self::translate_html),
    /// so it is cached and validated like any other fragment.
    pub fn translate_markdown(&self, source: &str) -> Result<Fragment, TranslateError> {
        let html = self.converter.to_html(source)?;
        tracing::debug!(
            converter = self.converter.name(),
            bytes = html.len(),
            "converted markdown"
        );
        self.translate_html(&html)
    }

    fn parse_and_translate(&self, markup: &str) -> Result<Vec<Element>, TranslateError> {
        let nodes = self.parser.parse_fragment(markup)?;
        tracing::debug!(
            parser = self.parser.name(),
            roots = nodes.len(),
            "parsed fragment"
        );

        nodes
            .into_iter()
            .map(|node| translate_with(self.rules, node))
            .collect()
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("parser", &self.parser.name())
            .field("converter", &self.converter.name())
            .field("cached", &self.cache.len())
            .finish()
    }
}
