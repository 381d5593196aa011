//! Translation rules for the supported tag vocabulary.
//!
//! Each supported tag has exactly one [`TranslationRule`] describing which
//! attributes it accepts, where each attribute lands, and how to build the
//! typed [`Element`]. Rules live in a [`RuleTable`] built once per process.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::element::{AnchorProps, DivProps, Element, Node, SpanProps};
use crate::style::StyleRecord;

/// A supported tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    P,
    H1,
    H3,
    Code,
    Strong,
    Em,
    A,
    Div,
    Span,
    Br,
}

impl Tag {
    /// Every supported tag.
    pub const ALL: [Tag; 10] = [
        Tag::P,
        Tag::H1,
        Tag::H3,
        Tag::Code,
        Tag::Strong,
        Tag::Em,
        Tag::A,
        Tag::Div,
        Tag::Span,
        Tag::Br,
    ];

    /// HTML tag name.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::P => "p",
            Tag::H1 => "h1",
            Tag::H3 => "h3",
            Tag::Code => "code",
            Tag::Strong => "strong",
            Tag::Em => "em",
            Tag::A => "a",
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::Br => "br",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an accepted attribute's value is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    ClassName,
    Href,
    Target,
    /// Parsed with [`crate::style::parse_style`]
    Style,
}

/// An accepted attribute key and its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeRule {
    pub key: &'static str,
    pub slot: Slot,
}

/// Attribute values collected for one element, before projection onto the
/// tag's properties record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pub class_name: Option<String>,
    pub href: Option<String>,
    pub target: Option<String>,
    pub style: Option<StyleRecord>,
}

/// Per-tag translation metadata.
#[derive(Debug, Clone, Copy)]
pub struct TranslationRule {
    pub tag: Tag,

    /// Accepted attribute keys; anything else is rejected
    pub attributes: &'static [AttributeRule],

    /// Typed constructor
    pub construct: fn(Attributes, Vec<Element>) -> Element,
}

impl TranslationRule {
    /// Destination slot for an attribute key, if the key is accepted.
    pub fn slot_for(&self, key: &str) -> Option<Slot> {
        self.attributes
            .iter()
            .find(|rule| rule.key == key)
            .map(|rule| rule.slot)
    }
}

const NO_ATTRIBUTES: &[AttributeRule] = &[];

const ANCHOR_ATTRIBUTES: &[AttributeRule] = &[
    AttributeRule {
        key: "href",
        slot: Slot::Href,
    },
    AttributeRule {
        key: "target",
        slot: Slot::Target,
    },
];

// `className` reaches us lower-cased by the HTML parser
const DIV_ATTRIBUTES: &[AttributeRule] = &[
    AttributeRule {
        key: "classname",
        slot: Slot::ClassName,
    },
    AttributeRule {
        key: "class",
        slot: Slot::ClassName,
    },
];

const SPAN_ATTRIBUTES: &[AttributeRule] = &[
    AttributeRule {
        key: "classname",
        slot: Slot::ClassName,
    },
    AttributeRule {
        key: "class",
        slot: Slot::ClassName,
    },
    AttributeRule {
        key: "style",
        slot: Slot::Style,
    },
];

const STANDARD_RULES: [TranslationRule; 10] = [
    TranslationRule {
        tag: Tag::P,
        attributes: NO_ATTRIBUTES,
        construct: |_, children| Element::paragraph(children),
    },
    TranslationRule {
        tag: Tag::H1,
        attributes: NO_ATTRIBUTES,
        construct: |_, children| Element::h1(children),
    },
    TranslationRule {
        tag: Tag::H3,
        attributes: NO_ATTRIBUTES,
        construct: |_, children| Element::h3(children),
    },
    TranslationRule {
        tag: Tag::Code,
        attributes: NO_ATTRIBUTES,
        construct: |_, children| Element::code(children),
    },
    TranslationRule {
        tag: Tag::Strong,
        attributes: NO_ATTRIBUTES,
        construct: |_, children| Element::strong(children),
    },
    TranslationRule {
        tag: Tag::Em,
        attributes: NO_ATTRIBUTES,
        construct: |_, children| Element::em(children),
    },
    TranslationRule {
        tag: Tag::A,
        attributes: ANCHOR_ATTRIBUTES,
        construct: |attrs, children| {
            Element::anchor(
                AnchorProps {
                    href: attrs.href,
                    target: attrs.target,
                },
                children,
            )
        },
    },
    TranslationRule {
        tag: Tag::Div,
        attributes: DIV_ATTRIBUTES,
        construct: |attrs, children| {
            Element::div(
                DivProps {
                    class_name: attrs.class_name,
                },
                children,
            )
        },
    },
    TranslationRule {
        tag: Tag::Span,
        attributes: SPAN_ATTRIBUTES,
        construct: |attrs, children| {
            Element::span(
                SpanProps {
                    class_name: attrs.class_name,
                    style: attrs.style,
                },
                children,
            )
        },
    },
    TranslationRule {
        tag: Tag::Br,
        attributes: NO_ATTRIBUTES,
        construct: |_, children| Element::Br(Node::new((), children)),
    },
];

static STANDARD: LazyLock<RuleTable> = LazyLock::new(RuleTable::standard);

/// Lookup table from tag name to rule.
#[derive(Debug, Default)]
pub struct RuleTable {
    rules: HashMap<&'static str, TranslationRule>,
}

impl RuleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table covering the full supported vocabulary.
    pub fn standard() -> Self {
        let mut table = Self::new();
        for rule in STANDARD_RULES {
            table.register(rule);
        }
        table
    }

    /// The process-wide standard table.
    pub fn global() -> &'static RuleTable {
        &STANDARD
    }

    /// Add a rule, replacing any previous rule for the same tag.
    pub fn register(&mut self, rule: TranslationRule) {
        self.rules.insert(rule.tag.as_str(), rule);
    }

    /// Look up the rule for a tag name.
    pub fn get(&self, tag: &str) -> Option<&TranslationRule> {
        self.rules.get(tag)
    }

    /// Check if a tag name has a rule.
    pub fn contains(&self, tag: &str) -> bool {
        self.rules.contains_key(tag)
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check that every supported tag has a rule.
    pub fn verify(&self) -> Result<(), RuleError> {
        for tag in Tag::ALL {
            if !self.contains(tag.as_str()) {
                return Err(RuleError::MissingRule(tag));
            }
        }
        Ok(())
    }
}

/// Errors found when verifying a rule table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("No translation rule registered for <{0}>")]
    MissingRule(Tag),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_is_complete() {
        let table = RuleTable::standard();

        assert_eq!(table.len(), Tag::ALL.len());
        assert_eq!(table.verify(), Ok(()));
        assert_eq!(RuleTable::global().verify(), Ok(()));
    }

    #[test]
    fn detects_missing_rules() {
        let mut table = RuleTable::new();
        table.register(STANDARD_RULES[0]);

        assert_eq!(table.verify(), Err(RuleError::MissingRule(Tag::H1)));
    }

    #[test]
    fn rules_are_keyed_by_their_tag_name() {
        let table = RuleTable::standard();

        for tag in Tag::ALL {
            let rule = table.get(tag.as_str()).unwrap();
            assert_eq!(rule.tag, tag);
        }
        assert!(table.get("foo").is_none());
    }

    #[test]
    fn attribute_schemas_match_vocabulary() {
        let table = RuleTable::standard();

        let anchor = table.get("a").unwrap();
        assert_eq!(anchor.slot_for("href"), Some(Slot::Href));
        assert_eq!(anchor.slot_for("target"), Some(Slot::Target));
        assert_eq!(anchor.slot_for("classname"), None);

        let span = table.get("span").unwrap();
        assert_eq!(span.slot_for("style"), Some(Slot::Style));
        assert_eq!(span.slot_for("class"), Some(Slot::ClassName));

        let div = table.get("div").unwrap();
        assert_eq!(div.slot_for("style"), None);

        for tag in ["p", "h1", "h3", "code", "strong", "em", "br"] {
            assert!(table.get(tag).unwrap().attributes.is_empty(), "{tag}");
        }
    }

    #[test]
    fn constructors_build_matching_variants() {
        let table = RuleTable::standard();

        for tag in Tag::ALL {
            let rule = table.get(tag.as_str()).unwrap();
            let element = (rule.construct)(Attributes::default(), vec![]);
            assert_eq!(element.tag(), Some(tag));
        }
    }
}
