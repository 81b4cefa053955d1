//! Immutable, path-copying update.

use node::Node;
use std::rc::Rc;

/// Return a new root sequence in which the node with `id` has been replaced
/// by `updater`'s result, copying only the path from the roots down to that
/// node.
///
/// The updater receives a shallow draft of the matched node (its `children`
/// vector is cloned but grandchild subtrees stay shared), so it may mutate
/// the draft freely, including replacing `children` — the engine does not
/// descend into a matched node, so an updater-supplied child list wins.
/// Subtrees containing no match are returned as the same `Rc`
/// (`Rc::ptr_eq` holds). If `id` does not exist, the result is value-equal
/// to the input. At most one node is logically changed per call.
pub fn update_node_by_id<F>(nodes: &[Rc<Node>], id: &str, updater: F) -> Vec<Rc<Node>>
where
    F: Fn(Node) -> Node,
{
    update_inner(nodes, id, &updater)
}

fn update_inner<F>(nodes: &[Rc<Node>], id: &str, updater: &F) -> Vec<Rc<Node>>
where
    F: Fn(Node) -> Node,
{
    nodes
        .iter()
        .map(|node| {
            if node.id == id {
                return Rc::new(updater(Node::clone(node)));
            }
            if !node.has_children() {
                return Rc::clone(node);
            }

            let children = update_inner(&node.children, id, updater);
            let untouched = children
                .iter()
                .zip(&node.children)
                .all(|(new, old)| Rc::ptr_eq(new, old));
            if untouched {
                Rc::clone(node)
            } else {
                let mut copy = Node::clone(node);
                copy.children = children;
                Rc::new(copy)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::find_node_by_id;
    use node::{fixtures::sample_document, Node, NodeType};

    #[test]
    fn test_update_node_by_id() {
        let doc = sample_document();
        let updated = update_node_by_id(&doc, "btn-1", |mut draft| {
            draft.background = Some("#ff0000".to_string());
            draft
        });

        let btn = find_node_by_id(&updated, "btn-1").unwrap();
        assert_eq!(btn.background.as_deref(), Some("#ff0000"));
        // Input tree is untouched
        let original = find_node_by_id(&doc, "btn-1").unwrap();
        assert_eq!(original.background.as_deref(), Some("#0ea5e9"));
    }

    #[test]
    fn test_update_does_not_modify_other_nodes() {
        let doc = sample_document();
        let before = find_node_by_id(&doc, "btn-1").unwrap().clone();

        let updated = update_node_by_id(&doc, "text-1", |mut draft| {
            draft.text = Some("Updated Text".to_string());
            draft
        });

        let btn = find_node_by_id(&updated, "btn-1").unwrap();
        assert_eq!(*btn, before);
    }

    #[test]
    fn test_update_shares_untouched_subtrees() {
        let doc = sample_document();
        let updated = update_node_by_id(&doc, "btn-1", |mut draft| {
            draft.background = Some("#ff0000".to_string());
            draft
        });

        // img-1 sits next to the changed node; its Rc is reused verbatim.
        let img_before = find_node_by_id(&doc, "img-1").unwrap();
        let img_after = find_node_by_id(&updated, "img-1").unwrap();
        assert!(std::ptr::eq(img_before, img_after));

        // The whole node-4 subtree is off the update path and stays shared.
        let root_before = &doc[0];
        let root_after = &updated[0];
        assert!(!Rc::ptr_eq(root_before, root_after));
        assert!(Rc::ptr_eq(&root_before.children[3], &root_after.children[3]));
    }

    #[test]
    fn test_update_miss_is_value_equal_noop() {
        let doc = sample_document();
        let updated = update_node_by_id(&doc, "non-existent", |mut draft| {
            draft.background = Some("#000".to_string());
            draft
        });
        assert_eq!(updated, doc);
    }

    #[test]
    fn test_updater_replacing_children_takes_precedence() {
        let doc = sample_document();
        let updated = update_node_by_id(&doc, "node-3", |draft| {
            draft.with_children(vec![Node::new("new-leaf", "New Leaf", NodeType::Input)])
        });

        let node_3 = find_node_by_id(&updated, "node-3").unwrap();
        assert_eq!(node_3.children.len(), 1);
        assert_eq!(node_3.children[0].id, "new-leaf");
        assert!(find_node_by_id(&updated, "btn-1").is_none());
    }
}
