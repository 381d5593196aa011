//! Inline `style` attribute parsing.

use serde::Serialize;

/// Typed inline style.
///
/// Only a fixed set of properties is known. A record is either fully parsed
/// or not produced at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
}

impl StyleRecord {
    /// Check whether no property is set.
    pub fn is_empty(&self) -> bool {
        self.font_size.is_none() && self.font_style.is_none()
    }

    /// Render back to a declaration list, e.g. `font-size: 12px; font-style: italic`.
    pub fn to_css(&self) -> String {
        let mut declarations = Vec::new();
        if let Some(size) = &self.font_size {
            declarations.push(format!("font-size: {size}"));
        }
        if let Some(style) = &self.font_style {
            declarations.push(format!("font-style: {style}"));
        }
        declarations.join("; ")
    }
}

/// Errors that can occur when parsing a style attribute.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("Invalid declaration {declaration:?} in style {value:?}")]
    MalformedDeclaration { declaration: String, value: String },

    #[error("Unknown style property {property:?} in style {value:?}")]
    UnknownProperty { property: String, value: String },
}

/// Parse an inline style value such as `font-size: 12px; font-style: italic`.
///
/// Empty declarations are ignored. Any declaration that is not exactly one
/// `key: value` pair, or whose key is not a known property, fails the whole
/// parse.
pub fn parse_style(value: &str) -> Result<StyleRecord, StyleError> {
    let mut style = StyleRecord::default();

    for declaration in value.split(';') {
        if declaration.trim().is_empty() {
            continue;
        }

        let mut parts = declaration.split(':');
        let (Some(key), Some(val), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(StyleError::MalformedDeclaration {
                declaration: declaration.trim().to_string(),
                value: value.to_string(),
            });
        };

        let key = key.trim();
        let val = val.trim().trim_matches(|c| c == '"' || c == '\'');

        match key {
            "font-size" => style.font_size = Some(val.to_string()),
            "font-style" => style.font_style = Some(val.to_string()),
            _ => {
                return Err(StyleError::UnknownProperty {
                    property: key.to_string(),
                    value: value.to_string(),
                })
            }
        }
    }

    Ok(style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_known_properties() {
        let style = parse_style("font-size: 12px; font-style: italic").unwrap();

        assert_eq!(
            style,
            StyleRecord {
                font_size: Some("12px".to_string()),
                font_style: Some("italic".to_string()),
            }
        );
    }

    #[test]
    fn trims_whitespace_and_quotes() {
        let style = parse_style("  font-style :  \"oblique\"  ").unwrap();

        assert_eq!(style.font_style, Some("oblique".to_string()));
        assert_eq!(style.font_size, None);
    }

    #[test]
    fn ignores_empty_declarations() {
        let style = parse_style("font-size: 1em;;").unwrap();

        assert_eq!(style.font_size, Some("1em".to_string()));
        assert!(parse_style("").unwrap().is_empty());
    }

    #[test]
    fn later_declaration_wins() {
        let style = parse_style("font-size: 1em; font-size: 2em").unwrap();

        assert_eq!(style.font_size, Some("2em".to_string()));
    }

    #[test]
    fn rejects_declaration_without_colon() {
        let result = parse_style("font-size 12px");

        assert_eq!(
            result,
            Err(StyleError::MalformedDeclaration {
                declaration: "font-size 12px".to_string(),
                value: "font-size 12px".to_string(),
            })
        );
    }

    #[test]
    fn rejects_declaration_with_extra_colon() {
        let result = parse_style("font-size: 12px: 14px");

        assert!(matches!(
            result,
            Err(StyleError::MalformedDeclaration { .. })
        ));
    }

    #[test]
    fn unknown_property_fails_whole_parse() {
        let result = parse_style("font-size: 12px; color: red");

        assert_eq!(
            result,
            Err(StyleError::UnknownProperty {
                property: "color".to_string(),
                value: "font-size: 12px; color: red".to_string(),
            })
        );
    }

    #[test]
    fn renders_back_to_css() {
        let style = parse_style("font-style: italic; font-size: 9pt").unwrap();

        assert_eq!(style.to_css(), "font-size: 9pt; font-style: italic");
    }
}
