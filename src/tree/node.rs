//! Node types: NodeId, RenderNode, ChildSlot.

use slotmap::new_key_type;

use crate::component::{Component, PlaceholderReason, Placeholder, Props};
use crate::spec::SpecPath;

new_key_type! {
    /// Unique identifier for a rendered node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Resolved children of a rendered node.
///
/// Mirrors the shape of the specification: a single child is stored as
/// `Single`, never as a one-element `Many`, and an explicitly empty list
/// stays distinct from absent children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChildSlot {
    #[default]
    Absent,
    Text(String),
    Single(NodeId),
    Many(Vec<NodeId>),
}

impl ChildSlot {
    /// Children-count probe: `None` when absent, else the number of node
    /// children (literal text counts as zero).
    pub fn count(&self) -> Option<usize> {
        match self {
            Self::Absent => None,
            Self::Text(_) => Some(0),
            Self::Single(_) => Some(1),
            Self::Many(ids) => Some(ids.len()),
        }
    }

    /// Literal text content, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Node children in order.
    pub fn ids(&self) -> &[NodeId] {
        match self {
            Self::Single(id) => std::slice::from_ref(id),
            Self::Many(ids) => ids,
            Self::Absent | Self::Text(_) => &[],
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// A mounted component instance in the output tree.
#[derive(Debug)]
pub struct RenderNode {
    /// The constructed component.
    pub component: Box<dyn Component>,
    /// Properties forwarded to the component after sanitizing and binding.
    pub props: Props,
    /// Where in the specification this node came from.
    pub path: SpecPath,
    /// Resolved children.
    pub children: ChildSlot,
}

impl RenderNode {
    pub fn new(component: Box<dyn Component>, props: Props, path: SpecPath) -> Self {
        Self {
            component,
            props,
            path,
            children: ChildSlot::Absent,
        }
    }

    /// Set the children (builder).
    pub fn with_children(mut self, children: ChildSlot) -> Self {
        self.children = children;
        self
    }

    /// The component's type name.
    pub fn component_type(&self) -> &str {
        self.component.component_type()
    }

    /// Downcast the component to a concrete type.
    pub fn downcast<T: 'static>(&self) -> Option<&T> {
        self.component.as_any().downcast_ref::<T>()
    }

    /// The placeholder, if this node failed to resolve or construct.
    pub fn placeholder(&self) -> Option<&Placeholder> {
        self.downcast::<Placeholder>()
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder().is_some()
    }

    /// Reason for the placeholder, if any.
    pub fn placeholder_reason(&self) -> Option<PlaceholderReason> {
        self.placeholder().map(|p| p.reason)
    }
}
