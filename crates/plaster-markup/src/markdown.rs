//! Markdown to HTML conversion.

use pulldown_cmark::{html, Options, Parser};
use serde::Deserialize;

use crate::traits::MarkdownConverter;

/// Markdown extensions to enable.
///
/// Everything is off by default, giving plain CommonMark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MarkdownOptions {
    /// GitHub-style tables
    pub tables: bool,

    /// `~~strikethrough~~`
    pub strikethrough: bool,

    /// Curly quotes, dashes and ellipses
    pub smart_punctuation: bool,
}

impl MarkdownOptions {
    fn to_cmark(self) -> Options {
        let mut options = Options::empty();
        if self.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if self.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.smart_punctuation {
            options.insert(Options::ENABLE_SMART_PUNCTUATION);
        }
        options
    }
}

/// Errors that can occur when converting Markdown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("Failed to render Markdown as HTML: {0}")]
    Render(String),
}

/// Convert a Markdown document to an HTML string.
pub fn markdown_to_html(source: &str, options: MarkdownOptions) -> Result<String, MarkdownError> {
    let parser = Parser::new_ext(source, options.to_cmark());

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::write_html_fmt(&mut out, parser).map_err(|e| MarkdownError::Render(e.to_string()))?;

    Ok(out)
}

/// pulldown-cmark backed converter.
#[derive(Debug, Default, Clone, Copy)]
pub struct CmarkConverter {
    options: MarkdownOptions,
}

impl CmarkConverter {
    /// Create a converter with the given extensions.
    pub fn new(options: MarkdownOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> MarkdownOptions {
        self.options
    }
}

impl MarkdownConverter for CmarkConverter {
    fn name(&self) -> &'static str {
        "pulldown-cmark"
    }

    fn to_html(&self, markdown: &str) -> Result<String, MarkdownError> {
        markdown_to_html(markdown, self.options)
    }
}
