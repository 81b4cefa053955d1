//! Style derivation.
//!
//! Flattens a node's semantic attributes into the visual-style record a
//! renderer consumes. Pure derivation; the node is never modified.

use node::{Node, NodeType};
use serde::Serialize;
use std::collections::BTreeMap;

/// A single style value: pixel-like numbers stay numeric, everything else
/// is a CSS string
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f32),
    Text(String),
}

/// Flat record of camelCase style keys, ordered for stable output
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComputedStyle(BTreeMap<String, StyleValue>);

impl ComputedStyle {
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn set_number(&mut self, key: &str, value: f32) {
        self.0.insert(key.to_string(), StyleValue::Number(value));
    }

    fn set_text(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), StyleValue::Text(value.into()));
    }

    fn set_text_if_absent(&mut self, key: &str, value: &str) {
        if !self.contains(key) {
            self.set_text(key, value);
        }
    }
}

/// Derive the visual style for a node.
///
/// Always positions absolutely from the node's geometry. Containers with
/// text default to a centered flex layout unless `display` is set;
/// Container, Button and Image nodes get a default corner rounding when
/// none is specified; Containers get a default inner spacing. The node's
/// style-overrides bag merges last and wins.
pub fn node_to_style(node: &Node) -> ComputedStyle {
    let mut style = ComputedStyle::default();
    style.set_text("position", "absolute");
    style.set_number("left", node.x);
    style.set_number("top", node.y);
    style.set_number("width", node.width);
    style.set_number("height", node.height);
    style.set_text("boxSizing", "border-box");

    copy_attrs(node, &mut style);

    if node.node_type == NodeType::Container {
        if node.text.as_deref().is_some_and(|text| !text.is_empty()) {
            style.set_text_if_absent("display", "flex");
            style.set_text_if_absent("alignItems", "center");
            style.set_text_if_absent("justifyContent", "center");
        }
        if !style.contains("padding") {
            style.set_number("padding", DEFAULT_PADDING);
        }
    }

    if matches!(
        node.node_type,
        NodeType::Container | NodeType::Button | NodeType::Image
    ) && !style.contains("borderRadius")
    {
        style.set_number("borderRadius", DEFAULT_CORNER_RADIUS);
    }

    // Overrides win over everything computed above.
    for (key, value) in &node.styles {
        style.set_text(&camel_case(key), value.clone());
    }

    style
}

const DEFAULT_CORNER_RADIUS: f32 = 8.0;
const DEFAULT_PADDING: f32 = 8.0;

fn copy_attrs(node: &Node, style: &mut ComputedStyle) {
    let pairs = [
        ("display", &node.display),
        ("zIndex", &node.z_index),
        ("margin", &node.margin),
        ("padding", &node.padding),
        ("border", &node.border),
        ("borderRadius", &node.border_radius),
        ("background", &node.background),
        ("color", &node.color),
        ("fontSize", &node.font_size),
        ("fontFamily", &node.font_family),
        ("fontWeight", &node.font_weight),
        ("textAlign", &node.text_align),
    ];
    for (key, value) in pairs {
        if let Some(value) = value {
            style.set_text(key, value.clone());
        }
    }
}

/// kebab-case CSS key to the camelCase spelling the style record uses
fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
