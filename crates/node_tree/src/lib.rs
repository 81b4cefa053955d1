//! # Node Tree Engine
//!
//! Pure operations over a Trellis document tree, consumed by whatever
//! presents the document (tree outline, canvas, inspector):
//!
//! - **Traversal** ([`traverse`]): pre-order walk with transient parent
//!   linkage.
//! - **Lookup** ([`find_node_by_id`]): first pre-order match by id.
//! - **Immutable update** ([`update_node_by_id`]): path-copying mutation
//!   that shares untouched subtrees by pointer.
//! - **Structural labeling** ([`compute_component_labels`]): groups
//!   structurally repeated subtrees into `C1, C2, ...` badges.
//! - **Style derivation** ([`node_to_style`]): flattens a node into the
//!   visual-style record a renderer consumes.
//!
//! Everything here is synchronous and side-effect free. Well-formed input
//! (acyclic, unique ids) is a caller responsibility; a missing id is an
//! absence, never an error.

mod labels;
mod style;
mod traverse;
mod update;

pub use labels::{compute_component_labels, LABEL_PREFIX, LABEL_START};
pub use style::{node_to_style, ComputedStyle, StyleValue};
pub use traverse::{find_node_by_id, traverse};
pub use update::update_node_by_id;
