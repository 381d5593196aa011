//! Generic node to typed element translation.

use plaster_markup::GenericNode;

use crate::element::Element;
use crate::error::TranslateError;
use crate::rules::{Attributes, RuleTable, Slot, TranslationRule};
use crate::style::parse_style;

/// Translate a generic node tree using the standard rule table.
pub fn translate(node: GenericNode) -> Result<Element, TranslateError> {
    translate_with(RuleTable::global(), node)
}

/// Translate a sequence of sibling nodes, in order, using the standard rules.
pub fn translate_all(nodes: Vec<GenericNode>) -> Result<Vec<Element>, TranslateError> {
    nodes.into_iter().map(translate).collect()
}

/// Translate a generic node tree against a specific rule table.
///
/// Attributes are validated in document order before any child is visited,
/// and the first failure aborts the whole subtree.
pub fn translate_with(rules: &RuleTable, node: GenericNode) -> Result<Element, TranslateError> {
    match node {
        GenericNode::Text(text) => Ok(Element::Text(text)),

        GenericNode::Element {
            tag,
            attributes,
            children,
        } => {
            let rule = rules
                .get(&tag)
                .ok_or_else(|| TranslateError::UnsupportedTag { tag: tag.clone() })?;

            let attrs = collect_attributes(rule, attributes)?;

            let children = children
                .into_iter()
                .map(|child| translate_with(rules, child))
                .collect::<Result<Vec<_>, _>>()?;

            tracing::trace!(tag = %tag, children = children.len(), "translated element");

            Ok((rule.construct)(attrs, children))
        }
    }
}

/// Validate raw attributes against a rule's schema and convert them.
fn collect_attributes(
    rule: &TranslationRule,
    attributes: Vec<(String, String)>,
) -> Result<Attributes, TranslateError> {
    let mut attrs = Attributes::default();

    for (key, value) in attributes {
        let Some(slot) = rule.slot_for(&key) else {
            return Err(TranslateError::UnsupportedAttribute {
                tag: rule.tag.as_str().to_string(),
                attribute: key,
            });
        };

        match slot {
            Slot::ClassName => attrs.class_name = Some(value),
            Slot::Href => attrs.href = Some(value),
            Slot::Target => attrs.target = Some(value),
            Slot::Style => {
                let style =
                    parse_style(&value).map_err(|error| TranslateError::UnsupportedStyle {
                        tag: rule.tag.as_str().to_string(),
                        error,
                    })?;
                attrs.style = Some(style);
            }
        }
    }

    Ok(attrs)
}
