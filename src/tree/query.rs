//! Tree queries: by component type, placeholders, generic predicate.
//!
//! Results come back in pre-order from the root, so they follow the order of
//! the specification rather than arena insertion order.

use super::node::{NodeId, RenderNode};
use super::tree::RenderTree;

impl RenderTree {
    /// Find all nodes whose component type matches.
    pub fn query_by_type(&self, component_type: &str) -> Vec<NodeId> {
        self.query_all(|node| node.component_type() == component_type)
    }

    /// Find all placeholder nodes.
    pub fn placeholders(&self) -> Vec<NodeId> {
        self.query_all(RenderNode::is_placeholder)
    }

    /// Find the first node with the given `id` property.
    pub fn query_by_id(&self, id: &str) -> Option<NodeId> {
        self.walk().into_iter().find(|&node_id| {
            self.get(node_id)
                .and_then(|node| node.props.str("id").ok().flatten())
                == Some(id)
        })
    }

    /// Find all nodes matching an arbitrary predicate.
    pub fn query_all(&self, predicate: impl Fn(&RenderNode) -> bool) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|&id| self.get(id).is_some_and(&predicate))
            .collect()
    }
}
