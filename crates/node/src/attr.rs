//! Known-attribute classification.
//!
//! The inspector edits properties by CSS key. A key either names one of the
//! node's typed attribute fields or it is free-form and belongs in the
//! `styles` override bag. Classification is a pure parse of the key, so the
//! dispatch is decided by the type system rather than a runtime key-set
//! membership check.

use crate::Node;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// The closed set of CSS-style keys backed by named fields on [`Node`]
///
/// Spelled kebab-case on the wire (`border-radius`, `z-index`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum KnownAttr {
    Display,
    Position,
    ZIndex,
    Margin,
    Padding,
    Border,
    BorderRadius,
    Background,
    Color,
    FontSize,
    FontFamily,
    FontWeight,
    TextAlign,
    Text,
}

impl KnownAttr {
    /// Classify a property key, `None` for keys outside the known set
    pub fn classify(key: &str) -> Option<KnownAttr> {
        KnownAttr::from_str(key).ok()
    }
}

impl Node {
    /// Set a property by CSS key, routing known keys to their fields and
    /// everything else into the style-overrides bag
    pub fn set_attr(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match KnownAttr::classify(key) {
            Some(attr) => *self.known_slot_mut(attr) = Some(value),
            None => {
                self.styles.insert(key.to_string(), value);
            }
        }
    }

    /// Remove a property by CSS key
    pub fn clear_attr(&mut self, key: &str) {
        match KnownAttr::classify(key) {
            Some(attr) => *self.known_slot_mut(attr) = None,
            None => {
                self.styles.remove(key);
            }
        }
    }

    /// Read a property by CSS key through the same dispatch as [`Node::set_attr`]
    pub fn attr(&self, key: &str) -> Option<&str> {
        match KnownAttr::classify(key) {
            Some(attr) => self.known_slot(attr).as_deref(),
            None => self.styles.get(key).map(String::as_str),
        }
    }

    fn known_slot(&self, attr: KnownAttr) -> &Option<String> {
        match attr {
            KnownAttr::Display => &self.display,
            KnownAttr::Position => &self.position,
            KnownAttr::ZIndex => &self.z_index,
            KnownAttr::Margin => &self.margin,
            KnownAttr::Padding => &self.padding,
            KnownAttr::Border => &self.border,
            KnownAttr::BorderRadius => &self.border_radius,
            KnownAttr::Background => &self.background,
            KnownAttr::Color => &self.color,
            KnownAttr::FontSize => &self.font_size,
            KnownAttr::FontFamily => &self.font_family,
            KnownAttr::FontWeight => &self.font_weight,
            KnownAttr::TextAlign => &self.text_align,
            KnownAttr::Text => &self.text,
        }
    }

    fn known_slot_mut(&mut self, attr: KnownAttr) -> &mut Option<String> {
        match attr {
            KnownAttr::Display => &mut self.display,
            KnownAttr::Position => &mut self.position,
            KnownAttr::ZIndex => &mut self.z_index,
            KnownAttr::Margin => &mut self.margin,
            KnownAttr::Padding => &mut self.padding,
            KnownAttr::Border => &mut self.border,
            KnownAttr::BorderRadius => &mut self.border_radius,
            KnownAttr::Background => &mut self.background,
            KnownAttr::Color => &mut self.color,
            KnownAttr::FontSize => &mut self.font_size,
            KnownAttr::FontFamily => &mut self.font_family,
            KnownAttr::FontWeight => &mut self.font_weight,
            KnownAttr::TextAlign => &mut self.text_align,
            KnownAttr::Text => &mut self.text,
        }
    }
}
