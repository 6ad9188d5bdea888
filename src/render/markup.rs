//! HTML-like markup for a rendered tree.
//!
//! Each node becomes its component's host element, tagged with
//! `data-component`. Component attributes come first, then the forwarded
//! `id`, `className` (as `class`) and string `style` properties. Handlers are
//! never serialized. Text is escaped.

use crate::component::PropValue;
use crate::tree::{ChildSlot, NodeId, RenderNode, RenderTree};

/// Render the whole tree as markup. Empty if the tree has no root.
pub fn markup(tree: &RenderTree) -> String {
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
    let indent = "  ".repeat(depth);
    let tag = node.component.element();

    out.push_str(&indent);
    out.push('<');
    out.push_str(tag);
    for (name, value) in attributes(node) {
        out.push(' ');
        out.push_str(&name);
        if !value.is_empty() {
            out.push_str("=\"");
            out.push_str(&escape_attr(&value));
            out.push('"');
        }
    }
    out.push('>');

    match &node.children {
        ChildSlot::Absent => {}
        ChildSlot::Text(text) => out.push_str(&escape_text(text)),
        ChildSlot::Many(ids) if ids.is_empty() => {}
        ChildSlot::Single(_) | ChildSlot::Many(_) => {
            out.push('\n');
            for &child in node.children.ids() {
                write_node(tree, child, depth + 1, out);
            }
            out.push_str(&indent);
        }
    }

    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

fn attributes(node: &RenderNode) -> Vec<(String, String)> {
    let mut attrs = vec![("data-component".to_owned(), node.component_type().to_owned())];
    attrs.extend(node.component.attributes());
    for (prop, attr) in [("id", "id"), ("className", "class"), ("style", "style")] {
        if let Some(PropValue::Value(serde_json::Value::String(value))) = node.props.get(prop) {
            attrs.push((attr.to_owned(), value.clone()));
        }
    }
    attrs
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
