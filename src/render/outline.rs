//! Plain-text outline of a rendered tree.
//!
//! One line per node, indented two spaces per level:
//!
//! ```text
//! Alert variant="destructive"
//!   AlertTitle "Error"
//!   Stack []
//!   Button onClick=<handler save>
//!   Placeholder(unknown-component Frobnicator)
//! ```
//!
//! Properties are printed in declaration order with JSON values. Literal text
//! follows the properties as a quoted string; an explicitly empty child list
//! is shown as `[]` and absent children as nothing.

use std::fmt::Write;

use crate::component::PropValue;
use crate::tree::{ChildSlot, NodeId, RenderNode, RenderTree};

/// Render the whole tree as an outline. Empty if the tree has no root.
pub fn outline(tree: &RenderTree) -> String {
    let mut out = String::new();
    if let Some(root) = tree.root() {
        write_node(tree, root, 0, &mut out);
    }
    out
}

fn write_node(tree: &RenderTree, id: NodeId, depth: usize, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(&label(node));
    match &node.children {
        ChildSlot::Text(text) => {
            out.push(' ');
            out.push_str(&quote(text));
        }
        ChildSlot::Many(ids) if ids.is_empty() => out.push_str(" []"),
        _ => {}
    }
    out.push('\n');
    for &child in node.children.ids() {
        write_node(tree, child, depth + 1, out);
    }
}

fn label(node: &RenderNode) -> String {
    if let Some(placeholder) = node.placeholder() {
        return match &placeholder.type_name {
            Some(kind) => format!("Placeholder({} {kind})", placeholder.reason),
            None => format!("Placeholder({})", placeholder.reason),
        };
    }
    let mut line = node.component_type().to_owned();
    for (name, value) in node.props.iter() {
        match value {
            PropValue::Value(value) => {
                let _ = write!(line, " {name}={value}");
            }
            PropValue::Handler(handler) if handler.is_noop() => {
                let _ = write!(line, " {name}=<noop {}>", handler.name());
            }
            PropValue::Handler(handler) => {
                let _ = write!(line, " {name}=<handler {}>", handler.name());
            }
        }
    }
    line
}

fn quote(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}
