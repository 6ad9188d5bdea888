//! Output tree: insert, walk, ancestry.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{ChildSlot, NodeId, RenderNode};

/// The rendered component tree, backed by a slotmap arena.
///
/// The renderer builds the tree bottom-up: children are inserted before the
/// node that owns them, and inserting the owner records the parent links.
pub struct RenderTree {
    pub(crate) nodes: SlotMap<NodeId, RenderNode>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
}

impl RenderTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            parent: SecondaryMap::new(),
            root: None,
        }
    }

    /// Insert a node whose children are already in the tree.
    ///
    /// # Panics
    ///
    /// Panics (debug) if a child id does not exist or already has a parent.
    pub fn insert(&mut self, node: RenderNode) -> NodeId {
        let children: Vec<NodeId> = node.children.ids().to_vec();
        let id = self.nodes.insert(node);
        for child in children {
            debug_assert!(self.nodes.contains_key(child), "child node does not exist");
            debug_assert!(!self.parent.contains_key(child), "child already has a parent");
            self.parent.insert(child, id);
        }
        id
    }

    /// Remove a node and all its descendants.
    ///
    /// Returns the removed node, or `None` if it didn't exist.
    pub fn remove(&mut self, id: NodeId) -> Option<RenderNode> {
        if !self.nodes.contains_key(id) {
            return None;
        }
        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(parent) = self.nodes.get_mut(parent_id) {
                detach(&mut parent.children, id);
            }
        }
        if self.root == Some(id) {
            self.root = None;
        }

        let mut to_remove = vec![id];
        let mut removed = None;
        while let Some(current) = to_remove.pop() {
            self.parent.remove(current);
            if let Some(node) = self.nodes.remove(current) {
                to_remove.extend_from_slice(node.children.ids());
                if current == id {
                    removed = Some(node);
                }
            }
        }
        removed
    }

    /// Mark a node as the root of the tree.
    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    /// The root node, if set.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The root node's data.
    pub fn root_node(&self) -> Option<&RenderNode> {
        self.root.and_then(|id| self.nodes.get(id))
    }

    /// Immutable access to a node.
    pub fn get(&self, id: NodeId) -> Option<&RenderNode> {
        self.nodes.get(id)
    }

    /// The child slot of a node. Absent for unknown ids.
    pub fn children(&self, id: NodeId) -> &ChildSlot {
        const ABSENT: &ChildSlot = &ChildSlot::Absent;
        self.nodes.get(id).map(|n| &n.children).unwrap_or(ABSENT)
    }

    /// Node children of a node, in order.
    pub fn child_ids(&self, id: NodeId) -> &[NodeId] {
        self.children(id).ids()
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Walk from `id` up to the root, collecting ancestor node ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent and ends at the root.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the tree contains a node with the given id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            for &child in self.child_ids(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// Pre-order traversal of the whole tree. Empty if no root is set.
    pub fn walk(&self) -> Vec<NodeId> {
        self.root
            .map(|root| self.walk_depth_first(root))
            .unwrap_or_default()
    }
}

/// Drop `id` from a parent's child slot.
fn detach(slot: &mut ChildSlot, id: NodeId) {
    if matches!(slot, ChildSlot::Single(child) if *child == id) {
        *slot = ChildSlot::Absent;
    } else if let ChildSlot::Many(ids) = slot {
        ids.retain(|&child| child != id);
    }
}

impl Default for RenderTree {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RenderTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderTree")
            .field("len", &self.len())
            .field("root", &self.root)
            .finish()
    }
}
