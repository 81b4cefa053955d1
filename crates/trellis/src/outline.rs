//! Tree outline rendering.
//!
//! Text analog of the hierarchy pane: one line per node, indented by
//! depth, with the component badge appended for grouped nodes.

use node::Node;
use node_tree::traverse;
use std::collections::HashMap;
use std::fmt::Write;
use std::rc::Rc;

const INDENT: &str = "  ";

/// Render the document as an indented outline.
///
/// Depth is reconstructed from the parent ids the traversal hands out, so
/// the outline stays in document order.
pub fn render_outline(doc: &[Rc<Node>], labels: Option<&HashMap<String, String>>) -> String {
    let mut depths: HashMap<&str, usize> = HashMap::new();
    let mut out = String::new();

    traverse(doc, &mut |node, parent_id| {
        let depth = parent_id
            .and_then(|id| depths.get(id))
            .map_or(0, |d| d + 1);
        depths.insert(node.id.as_str(), depth);

        let badge = labels
            .and_then(|labels| labels.get(&node.id))
            .map(|label| format!(" [{label}]"))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{}{} <{}> #{}{}",
            INDENT.repeat(depth),
            node.name,
            node.node_type,
            node.id,
            badge
        );
    });

    out
}
