//! Built-in sample document.
//!
//! One root container holding two text leaves and two structurally
//! identical groups, each a container with a Button and an Image child.
//! Used as the default document for the CLI and as a shared fixture in
//! tests; the repeated groups are what the component-labeling pass is
//! expected to pair up.

use crate::{Node, NodeType};
use std::rc::Rc;

/// The default document: `root-1` with two text leaves and the repeated
/// `node-3` / `node-4` groups
pub fn sample_document() -> Vec<Rc<Node>> {
    vec![Rc::new(
        Node::new("root-1", "Root", NodeType::Container)
            .with_rect(20.0, 20.0, 760.0, 800.0)
            .with_background("#ffffff")
            .with_border("1px solid #ddd")
            .with_children(vec![
                Node::new("text-1", "Text 1", NodeType::Container)
                    .with_rect(40.0, 40.0, 100.0, 24.0)
                    .with_text("Text 1"),
                Node::new("text-2", "Text 2", NodeType::Container)
                    .with_rect(40.0, 100.0, 440.0, 90.0)
                    .with_background("#f4c23a")
                    .with_text("Text 2"),
                Node::new("node-3", "Node 3", NodeType::Container)
                    .with_rect(40.0, 220.0, 560.0, 160.0)
                    .with_background("#16a34a")
                    .with_children(vec![
                        Node::new("btn-1", "Button 1", NodeType::Button)
                            .with_rect(90.0, 20.0, 180.0, 44.0)
                            .with_background("#0ea5e9")
                            .with_color("#fff")
                            .with_text("Button 1"),
                        Node::new("img-1", "Image 1", NodeType::Image)
                            .with_rect(90.0, 80.0, 180.0, 60.0)
                            .with_background("#e9d5ff")
                            .with_text("Image 1"),
                    ]),
                Node::new("node-4", "Node 4", NodeType::Container)
                    .with_rect(40.0, 420.0, 560.0, 160.0)
                    .with_background("#16a34a")
                    .with_children(vec![
                        Node::new("btn-2", "Button 2", NodeType::Button)
                            .with_rect(90.0, 20.0, 180.0, 44.0)
                            .with_background("#0ea5e9")
                            .with_color("#fff")
                            .with_text("Button 2"),
                        Node::new("img-2", "Image 2", NodeType::Image)
                            .with_rect(90.0, 80.0, 180.0, 60.0)
                            .with_background("#e9d5ff")
                            .with_text("Image 2"),
                    ]),
            ]),
    )]
}
