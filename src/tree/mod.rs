//! Output tree: slotmap-backed arena of mounted component instances.

pub mod node;
#[allow(clippy::module_inception)]
pub mod tree;
pub mod query;

pub use node::{ChildSlot, NodeId, RenderNode};
pub use tree::RenderTree;
