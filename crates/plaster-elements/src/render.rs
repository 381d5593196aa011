//! Rendering element trees back to text.

use std::fmt::Write;

use crate::element::Element;

/// Render elements as HTML.
///
/// Attributes are written in a fixed per-tag order and text is escaped, so
/// translating the output again yields an equal tree.
pub fn render_html(elements: &[Element]) -> String {
    let mut out = String::new();
    for element in elements {
        write_html(&mut out, element);
    }
    out
}

fn write_html(out: &mut String, element: &Element) {
    let mut attrs: Vec<(&str, String)> = Vec::new();

    match element {
        Element::Text(text) => {
            out.push_str(&escape_text(text));
            return;
        }
        Element::Anchor(node) => {
            if let Some(href) = &node.props.href {
                attrs.push(("href", href.clone()));
            }
            if let Some(target) = &node.props.target {
                attrs.push(("target", target.clone()));
            }
        }
        Element::Div(node) => {
            if let Some(class_name) = &node.props.class_name {
                attrs.push(("class", class_name.clone()));
            }
        }
        Element::Span(node) => {
            if let Some(class_name) = &node.props.class_name {
                attrs.push(("class", class_name.clone()));
            }
            if let Some(style) = &node.props.style {
                attrs.push(("style", style.to_css()));
            }
        }
        _ => {}
    }

    let Some(tag) = element.tag() else {
        return;
    };

    out.push('<');
    out.push_str(tag.as_str());
    for (key, value) in &attrs {
        let _ = write!(out, r#" {key}="{}""#, escape_attr(value));
    }
    out.push('>');

    if matches!(element, Element::Br(_)) {
        return;
    }

    for child in element.children() {
        write_html(out, child);
    }

    out.push_str("</");
    out.push_str(tag.as_str());
    out.push('>');
}

/// Render elements as an indented outline, one node per line.
pub fn render_tree(elements: &[Element]) -> String {
    let mut out = String::new();
    for element in elements {
        write_tree(&mut out, element, 0);
    }
    out
}

fn write_tree(out: &mut String, element: &Element, depth: usize) {
    let indent = "  ".repeat(depth);

    match element {
        Element::Text(text) => {
            let _ = writeln!(out, "{indent}{text:?}");
        }
        _ => {
            let label = element.tag().map(|t| t.as_str()).unwrap_or_default();
            let mut line = format!("{indent}<{label}>");

            match element {
                Element::Anchor(node) => {
                    if let Some(href) = &node.props.href {
                        let _ = write!(line, " href={href:?}");
                    }
                    if let Some(target) = &node.props.target {
                        let _ = write!(line, " target={target:?}");
                    }
                }
                Element::Div(node) => {
                    if let Some(class_name) = &node.props.class_name {
                        let _ = write!(line, " class={class_name:?}");
                    }
                }
                Element::Span(node) => {
                    if let Some(class_name) = &node.props.class_name {
                        let _ = write!(line, " class={class_name:?}");
                    }
                    if let Some(style) = &node.props.style {
                        let _ = write!(line, " style={:?}", style.to_css());
                    }
                }
                _ => {}
            }

            out.push_str(&line);
            out.push('\n');

            for child in element.children() {
                write_tree(out, child, depth + 1);
            }
        }
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{AnchorProps, SpanProps};
    use crate::style::StyleRecord;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Element> {
        vec![
            Element::paragraph(vec![
                Element::text("a < b & "),
                Element::anchor(
                    AnchorProps {
                        href: Some("/q?x=1&y=\"2\"".to_string()),
                        target: None,
                    },
                    vec![Element::text("link")],
                ),
                Element::br(),
            ]),
            Element::span(
                SpanProps {
                    class_name: None,
                    style: Some(StyleRecord {
                        font_size: Some("12px".to_string()),
                        font_style: Some("italic".to_string()),
                    }),
                },
                vec![Element::text("x")],
            ),
        ]
    }

    #[test]
    fn renders_html() {
        assert_eq!(
            render_html(&sample()),
            r#"<p>a &lt; b &amp; <a href="/q?x=1&amp;y=&quot;2&quot;">link</a><br></p><span style="font-size: 12px; font-style: italic">x</span>"#
        );
    }

    #[test]
    fn renders_tree() {
        assert_eq!(
            render_tree(&sample()),
            concat!(
                "<p>\n",
                "  \"a < b & \"\n",
                "  <a> href=\"/q?x=1&y=\\\"2\\\"\"\n",
                "    \"link\"\n",
                "  <br>\n",
                "<span> style=\"font-size: 12px; font-style: italic\"\n",
                "  \"x\"\n",
            )
        );
    }
}
