//! Structural component labeling.
//!
//! Detects structurally repeated subtrees — candidate reusable components —
//! and assigns each group a shared badge. Two nodes belong to the same group
//! when they sit at the same depth and have the same structure signature:
//! their own type plus the per-type counts of their immediate children
//! (sibling order is irrelevant; type and count are not). The root level is
//! never labeled and neither are leaves.

use node::{Node, NodeType};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

/// Prefix for component badges (`C1`, `C2`, ...)
pub const LABEL_PREFIX: &str = "C";
/// First counter value handed out per invocation
pub const LABEL_START: usize = 1;

/// Compute the component badge for every grouped node, keyed by node id.
///
/// Selection policy:
/// - depth 0 (the root sequence) is never labeled; evaluation starts at the
///   roots' children
/// - every node at depth >= 1 with at least one child joins the group for
///   its `(depth, signature)` pair; identical signatures at different depths
///   are different groups
/// - every group, singletons included, gets the next sequential label —
///   depths in increasing order, groups within a depth in the order their
///   signature first appears in document order
/// - leaves never appear in the map
///
/// The counter lives inside this call, so the result is deterministic for a
/// fixed tree. Never fails; an all-leaf tree yields an empty map.
pub fn compute_component_labels(nodes: &[Rc<Node>]) -> HashMap<String, String> {
    let mut levels: Vec<Vec<&Node>> = Vec::new();
    collect_levels(nodes, 0, &mut levels);

    let mut labels = HashMap::new();
    let mut counter = LABEL_START;
    for level in levels.iter().skip(1) {
        // Signature -> label, scoped to this depth only.
        let mut groups: HashMap<String, String> = HashMap::new();
        for node in level {
            if !node.has_children() {
                continue;
            }
            let label = groups
                .entry(structure_signature(node))
                .or_insert_with(|| {
                    let label = format!("{LABEL_PREFIX}{counter}");
                    counter += 1;
                    label
                })
                .clone();
            labels.insert(node.id.clone(), label);
        }
    }
    labels
}

/// Bucket nodes by depth, preserving document order within each level
fn collect_levels<'a>(nodes: &'a [Rc<Node>], depth: usize, levels: &mut Vec<Vec<&'a Node>>) {
    if levels.len() == depth {
        levels.push(Vec::new());
    }
    for node in nodes {
        levels[depth].push(node);
        if node.has_children() {
            collect_levels(&node.children, depth + 1, levels);
        }
    }
}

/// Signature of a node's immediate structure: its own type plus sorted
/// per-type child counts, e.g. `Container[Buttonx1+Imagex2]`
fn structure_signature(node: &Node) -> String {
    let mut counts: BTreeMap<NodeType, usize> = BTreeMap::new();
    for child in &node.children {
        *counts.entry(child.node_type).or_insert(0) += 1;
    }
    let parts: Vec<String> = counts
        .iter()
        .map(|(node_type, count)| format!("{node_type}x{count}"))
        .collect();
    format!("{}[{}]", node.node_type, parts.join("+"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use node::fixtures::sample_document;
    use node::NodeType::{Button, Container, Image, Input};

    fn leaf(id: &str, node_type: node::NodeType) -> Node {
        Node::new(id, id, node_type)
    }

    #[test]
    fn test_repeated_groups_share_a_label() {
        // root -> [ text leaf, groupA(Button, Image), groupB(Button, Image) ]
        let doc = vec![Rc::new(
            Node::new("root", "Root", Container).with_children(vec![
                leaf("text", Container),
                Node::new("group-a", "Group A", Container)
                    .with_children(vec![leaf("a-btn", Button), leaf("a-img", Image)]),
                Node::new("group-b", "Group B", Container)
                    .with_children(vec![leaf("b-img", Image), leaf("b-btn", Button)]),
            ]),
        )];

        let labels = compute_component_labels(&doc);
        assert!(labels.get("root").is_none());
        assert!(labels.get("text").is_none());
        assert!(labels.get("a-btn").is_none());
        assert!(labels.get("a-img").is_none());
        // Sibling order differs between the groups; the signature ignores it.
        assert_eq!(labels.get("group-a"), Some(&"C1".to_string()));
        assert_eq!(labels.get("group-b"), Some(&"C1".to_string()));
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn test_root_level_is_never_labeled() {
        let doc = vec![
            Rc::new(Node::new("r1", "R1", Container).with_children(vec![leaf("c1", Button)])),
            Rc::new(Node::new("r2", "R2", Container).with_children(vec![leaf("c2", Button)])),
        ];
        let labels = compute_component_labels(&doc);
        assert!(labels.get("r1").is_none());
        assert!(labels.get("r2").is_none());
        assert!(labels.is_empty());
    }

    #[test]
    fn test_leaves_are_never_labeled() {
        let doc = sample_document();
        let labels = compute_component_labels(&doc);
        for id in ["text-1", "text-2", "btn-1", "img-1", "btn-2", "img-2"] {
            assert!(labels.get(id).is_none(), "leaf {id} must not be labeled");
        }
    }

    #[test]
    fn test_sample_document_groups_the_repeated_containers() {
        let doc = sample_document();
        let labels = compute_component_labels(&doc);

        // root-1 is depth 0; node-3 and node-4 are the only labeled nodes
        // and share one badge.
        assert!(labels.get("root-1").is_none());
        assert_eq!(labels.get("node-3"), Some(&"C1".to_string()));
        assert_eq!(labels.get("node-4"), Some(&"C1".to_string()));
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn test_same_signature_at_different_depths_gets_different_labels() {
        // Both "outer" (depth 1) and "inner" (depth 2) are Container[Buttonx1].
        let doc = vec![Rc::new(Node::new("root", "Root", Container).with_children(vec![
            Node::new("outer", "Outer", Container).with_children(vec![
                Node::new("inner", "Inner", Container).with_children(vec![leaf("btn", Button)]),
            ]),
        ]))];

        let labels = compute_component_labels(&doc);
        let outer = labels.get("outer").unwrap();
        let inner = labels.get("inner").unwrap();
        assert_ne!(outer, inner);
    }

    #[test]
    fn test_type_counts_distinguish_signatures() {
        let doc = vec![Rc::new(Node::new("root", "Root", Container).with_children(vec![
            Node::new("one-input", "One", Container).with_children(vec![leaf("i1", Input)]),
            Node::new("two-inputs", "Two", Container)
                .with_children(vec![leaf("i2", Input), leaf("i3", Input)]),
        ]))];

        let labels = compute_component_labels(&doc);
        assert_ne!(labels.get("one-input"), labels.get("two-inputs"));
    }

    #[test]
    fn test_label_order_follows_depth_then_discovery() {
        let doc = vec![Rc::new(Node::new("root", "Root", Container).with_children(vec![
            Node::new("first", "First", Container).with_children(vec![
                // Deeper than "second", so its group is numbered later even
                // though it appears earlier in pre-order.
                Node::new("deep", "Deep", Container).with_children(vec![leaf("d", Image)]),
            ]),
            Node::new("second", "Second", Container).with_children(vec![leaf("s", Button)]),
        ]))];

        let labels = compute_component_labels(&doc);
        assert_eq!(labels.get("first"), Some(&"C1".to_string()));
        assert_eq!(labels.get("second"), Some(&"C2".to_string()));
        assert_eq!(labels.get("deep"), Some(&"C3".to_string()));
    }

    #[test]
    fn test_nested_repeats_are_found_below_grouped_ancestors() {
        let doc = sample_document();
        let labels = compute_component_labels(&doc);
        // node-3 grouped with node-4 does not stop evaluation of their
        // children; the children here are leaves, so nothing deeper appears.
        assert_eq!(labels.len(), 2);

        // Now nest a repeated pair one level deeper on each side.
        let deeper = update_fixture_with_nested_groups();
        let labels = compute_component_labels(&deeper);
        assert_eq!(labels.get("wrap-1"), labels.get("wrap-2"));
        assert!(labels.get("wrap-1").is_some());
    }

    fn update_fixture_with_nested_groups() -> Vec<Rc<Node>> {
        let doc = sample_document();
        let doc = crate::update_node_by_id(&doc, "node-3", |draft| {
            draft.with_children(vec![Node::new("wrap-1", "Wrap 1", Container)
                .with_children(vec![leaf("w1-btn", Button)])])
        });
        crate::update_node_by_id(&doc, "node-4", |draft| {
            draft.with_children(vec![Node::new("wrap-2", "Wrap 2", Container)
                .with_children(vec![leaf("w2-btn", Button)])])
        })
    }

    #[test]
    fn test_all_leaf_tree_yields_empty_map() {
        let doc = vec![Rc::new(leaf("a", Button)), Rc::new(leaf("b", Image))];
        assert!(compute_component_labels(&doc).is_empty());
    }

    #[test]
    fn test_deterministic_across_invocations() {
        let doc = sample_document();
        assert_eq!(
            compute_component_labels(&doc),
            compute_component_labels(&doc)
        );
    }
}
