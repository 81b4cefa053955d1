//! Pre-order traversal and id lookup.

use node::Node;
use std::rc::Rc;

/// Walk the tree in pre-order, left-to-right among siblings, invoking the
/// visitor once per node with the parent's id (`None` for roots).
///
/// Parent linkage is reconstructed transiently during the walk and passed
/// as a parameter; it is never stored on the node. The tree is assumed
/// acyclic and finite — this is not re-checked at runtime.
pub fn traverse<'a, F>(nodes: &'a [Rc<Node>], visit: &mut F)
where
    F: FnMut(&'a Node, Option<&'a str>),
{
    walk(nodes, None, visit);
}

fn walk<'a, F>(nodes: &'a [Rc<Node>], parent_id: Option<&'a str>, visit: &mut F)
where
    F: FnMut(&'a Node, Option<&'a str>),
{
    for node in nodes {
        visit(node, parent_id);
        if node.has_children() {
            walk(&node.children, Some(node.id.as_str()), visit);
        }
    }
}

/// Find the first node in pre-order whose id matches, or `None`.
///
/// O(n) over the whole tree. The returned reference points into the
/// existing tree; mutate only through `update_node_by_id`.
pub fn find_node_by_id<'a>(nodes: &'a [Rc<Node>], id: &str) -> Option<&'a Node> {
    let mut found: Option<&Node> = None;
    traverse(nodes, &mut |node, _| {
        if found.is_none() && node.id == id {
            found = Some(node);
        }
    });
    found
}
