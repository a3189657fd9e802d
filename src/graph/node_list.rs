use slotmap::SlotMap;

use super::{Node, NodeKey};
use crate::{Cost, Grid, Heuristic, Point};

/// The arena holding every Node of one search.
///
/// Nodes refer to their predecessor by [`NodeKey`]. A key is only removed while nothing
/// refers to it, so following parents always ends at the start.
#[derive(Clone, Debug)]
pub struct NodeList {
    nodes: SlotMap<NodeKey, Node>,
    neighbors: Vec<Node>,
}

impl NodeList {
    pub fn with_capacity(size_hint: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(size_hint),
            neighbors: Vec::with_capacity(4),
        }
    }

    #[allow(unused)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Adds a Node that has no predecessor inside of this arena.
    pub fn add_root(&mut self, node: Node) -> NodeKey {
        debug_assert!(node.parent().is_none(), "a root can't have a parent");
        self.nodes.insert(node)
    }

    /// Evaluates a Node against its own predecessor.
    #[track_caller]
    pub fn evaluate(&mut self, key: NodeKey, target: Point, heuristic: Heuristic, factor: Cost) {
        let parent = self[key].parent().map(|parent| self[parent]);
        self[key].evaluate_weighted(parent.as_ref(), target, heuristic, factor);
    }

    /// Generates the neighbors of `key` and stores them in the arena.
    ///
    /// The keys of the new Nodes are written to `out` in generation order.
    #[track_caller]
    pub fn expand(&mut self, key: NodeKey, grid: &Grid, out: &mut Vec<NodeKey>) {
        out.clear();
        self.neighbors.clear();
        self.nodes[key].generate_neighbors(key, grid, &mut self.neighbors);
        for node in self.neighbors.drain(..) {
            out.push(self.nodes.insert(node));
        }
    }

    /// Removes a Node that turned out to be useless.
    ///
    /// Only leaves may be discarded: no other Node may have `key` as its parent.
    #[track_caller]
    pub fn discard(&mut self, key: NodeKey) {
        self.nodes.remove(key).expect("discarded a Node that doesn't exist");
    }

    /// Follows the parents of `key` back to the start.
    ///
    /// The result starts with the position of `key` and ends with the root.
    #[track_caller]
    pub fn trace_back(&self, key: NodeKey) -> Vec<Point> {
        let mut steps = vec![self[key].pos()];
        let mut current = self[key].parent();
        while let Some(id) = current {
            steps.push(self[id].pos());
            current = self[id].parent();
        }
        steps
    }
}

use std::ops::{Index, IndexMut};
impl Index<NodeKey> for NodeList {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeKey) -> &Node {
        &self.nodes[index]
    }
}
impl IndexMut<NodeKey> for NodeList {
    #[track_caller]
    fn index_mut(&mut self, index: NodeKey) -> &mut Node {
        &mut self.nodes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_and_trace_back() {
        let grid = Grid::new(3, 3);
        let mut nodes = NodeList::with_capacity(16);
        let mut keys = vec![];

        let root = nodes.add_root(Node::new(0, 0));
        nodes.expand(root, &grid, &mut keys);
        assert_eq!(keys.len(), 2);
        assert_eq!(nodes[keys[0]].pos(), (1, 0));

        let first = keys[0];
        nodes.expand(first, &grid, &mut keys);
        assert_eq!(nodes.len(), 1 + 2 + 3);

        let below = *keys
            .iter()
            .find(|&&key| nodes[key].pos() == (1, 1))
            .unwrap();
        assert_eq!(nodes.trace_back(below), vec![(1, 1), (1, 0), (0, 0)]);
        assert_eq!(nodes.trace_back(root), vec![(0, 0)]);
    }

    #[test]
    fn evaluate_uses_parent() {
        let grid = Grid::new(4, 1);
        let mut nodes = NodeList::with_capacity(8);
        let mut keys = vec![];

        let root = nodes.add_root(Node::new(0, 0));
        nodes.evaluate(root, (3, 0), Heuristic::Manhattan, 1.0);
        assert_eq!(nodes[root].cost(), 3.0);

        nodes.expand(root, &grid, &mut keys);
        let next = keys[0];
        nodes.evaluate(next, (3, 0), Heuristic::Manhattan, 1.0);
        assert_eq!(nodes[next].walked(), 1.0);
        assert_eq!(nodes[next].cost(), 3.0);
    }

    #[test]
    fn discard() {
        let grid = Grid::new(2, 1);
        let mut nodes = NodeList::with_capacity(4);
        let mut keys = vec![];

        let root = nodes.add_root(Node::new(0, 0));
        nodes.expand(root, &grid, &mut keys);
        nodes.discard(keys[0]);

        assert_eq!(nodes.len(), 1);
    }
}
