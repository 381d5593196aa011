//! Supported vocabulary listing.

use plaster_elements::{RuleTable, Tag};

/// Run the tags command.
pub fn run() {
    print!("{}", vocabulary(RuleTable::global()));
}

/// One line per supported tag with its accepted attributes.
fn vocabulary(rules: &RuleTable) -> String {
    let mut out = String::new();
    for tag in Tag::ALL {
        let Some(rule) = rules.get(tag.as_str()) else {
            continue;
        };
        let keys: Vec<_> = rule.attributes.iter().map(|a| a.key).collect();
        if keys.is_empty() {
            out.push_str(&format!("<{tag}>\n"));
        } else {
            out.push_str(&format!("<{tag}> {}\n", keys.join(", ")));
        }
    }
    out
}
