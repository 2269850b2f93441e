// Inline CSS for a position map, so render functions can drop it straight
// into a `style` attribute.

use crate::model::{StyleMap, StyleValue};
use crate::util::MAIN_KEY;

const LENGTHS: &[&str] = &["left", "right", "top", "bottom", "width", "height"];

fn property(key: &str) -> &str {
    match key {
        "x" => "left",
        "y" => "top",
        other => other,
    }
}

fn css_value(property: &str, value: &StyleValue) -> Option<String> {
    match value {
        StyleValue::Number(n) if LENGTHS.contains(&property) => Some(format!("{n}px")),
        StyleValue::Number(n) => Some(n.to_string()),
        StyleValue::Text(text) => Some(text.clone()),
        StyleValue::Map(descriptor) => {
            let main = descriptor.get(MAIN_KEY)?.as_number()?;
            let unit = match descriptor.get("unit") {
                Some(StyleValue::Text(unit)) => unit.as_str(),
                _ => "px",
            };
            Some(format!("{main}{unit}"))
        }
        StyleValue::List(_) => None,
    }
}

/// Renders the top-level entries of `map`; lists, nested layout blocks and
/// the pass-through `dx`/`dy` entries are skipped.
pub fn style_attribute(map: &StyleMap) -> String {
    map.iter()
        .filter(|(key, _)| !matches!(key.as_str(), "dx" | "dy" | MAIN_KEY))
        .filter_map(|(key, v)| {
            let property = property(key);
            Some(format!("{property}:{};", css_value(property, v)?))
        })
        .collect::<Vec<_>>()
        .join(" ")
}
