mod node;
pub use node::{Node, NodeId};

mod node_list;
pub(crate) use node_list::NodeList;

slotmap::new_key_type! {
    /// Handle of a [`Node`] inside the arena of a single search.
    pub struct NodeKey;
}
