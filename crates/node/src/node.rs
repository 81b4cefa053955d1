//! # Node System
//!
//! Defines the core data model for visual elements in a Trellis document.
//! A document is an ordered sequence of root nodes, each owning its
//! children exclusively. Children are stored behind [`Rc`] so that the
//! immutable-update operation in `node_tree` can share unmodified subtrees
//! by pointer while copying only the path to a changed node.
//!
//! Nodes are treated as copy-on-write values: callers must never mutate a
//! node reachable from a shared tree in place. All mutation goes through
//! `node_tree::update_node_by_id`, which hands the updater a private draft.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::rc::Rc;
use strum::Display;

/// Types of nodes that can appear in a document
///
/// The set is closed; anything box-like that can hold children is a
/// `Container`. The `Ord` impl (declaration order) gives structure
/// signatures a stable sort key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
    JsonSchema,
)]
pub enum NodeType {
    /// A box that can contain other nodes
    Container,
    /// An image placeholder
    Image,
    /// A text input field
    Input,
    /// A clickable button
    Button,
}

/// A visual element in the document tree
///
/// Identity is the string `id`, which callers must keep unique across the
/// whole tree; lookups return the first match in pre-order. Geometry is
/// absolute (`x`, `y`, `width`, `height` with width and height positive).
/// The optional attributes mirror the CSS-ish properties the inspector
/// edits; anything outside that known set lands in the `styles` bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,

    // Layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<String>,

    // Box model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,

    // Visual
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,

    // Content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Ordered children, owned exclusively by this node
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Rc<Node>>,

    /// Style overrides for keys outside the known attribute set
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: BTreeMap<String, String>,
}

impl Node {
    /// Create a node at the origin with unit size and no attributes
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type,
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
            display: None,
            position: None,
            z_index: None,
            margin: None,
            padding: None,
            border: None,
            border_radius: None,
            background: None,
            color: None,
            font_size: None,
            font_family: None,
            font_weight: None,
            text_align: None,
            text: None,
            children: Vec::new(),
            styles: BTreeMap::new(),
        }
    }

    /// Set position and dimensions
    pub fn with_rect(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_border(mut self, border: impl Into<String>) -> Self {
        self.border = Some(border.into());
        self
    }

    /// Replace this node's children, wrapping each in an [`Rc`]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children.into_iter().map(Rc::new).collect();
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
