//! Plain-text outline of a markup tree.
//!
//! One line per node, indented two spaces per level. Elements are written
//! in selector form (`div.card`), text nodes as quoted strings.

use crate::markup::Node;

/// Renders the outline of a tree, ending with a newline.
#[must_use]
pub fn render_outline(node: &Node) -> String {
    let mut out = String::new();
    write_line(&mut out, node, 0);
    out
}

fn write_line(out: &mut String, node: &Node, level: usize) {
    for _ in 0..level {
        out.push_str("  ");
    }
    match node {
        Node::Text(text) => {
            out.push_str(&format!("{text:?}"));
            out.push('\n');
        }
        Node::Element(element) => {
            out.push_str(element.tag.as_str());
            for class in element.classes() {
                out.push('.');
                out.push_str(class);
            }
            out.push('\n');
            for child in &element.children {
                write_line(out, child, level + 1);
            }
        }
    }
}
