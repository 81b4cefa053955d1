//! Node data model for Trellis.
//!
//! This crate provides the document tree: visual nodes with geometry,
//! presentational attributes, an open style-overrides bag, and ordered
//! children. Nodes carry no parent back-reference; hierarchy operations
//! live in the `node_tree` crate.

pub mod attr;
pub mod fixtures;
mod node;

pub use attr::KnownAttr;
pub use node::{Node, NodeType};
