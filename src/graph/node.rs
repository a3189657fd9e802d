use super::NodeKey;
use crate::{Cost, Grid, Heuristic, Point};

use std::fmt;

/// The cost of moving from a cell to one of its four neighbors
const STEP_COST: Cost = 1.0;

/// The identity of a cell, shared by every [`Node`] that represents it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Point);

impl NodeId {
    /// The cell this identity refers to
    pub fn pos(self) -> Point {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.0 .0, self.0 .1)
    }
}

/// A cell visited during a search.
///
/// A Node remembers the cost of the walk that led to it and, once
/// [evaluated](Node::evaluate), its estimated total cost through that walk to the target.
/// Several Nodes can exist for the same cell; they share a [`NodeId`].
#[derive(Clone, Copy, Debug)]
pub struct Node {
    pos: Point,
    parent: Option<NodeKey>,
    walked: Cost,
    cost: Cost,
}

impl Node {
    /// Creates an unevaluated Node without predecessor at `(x, y)`
    pub fn new(x: usize, y: usize) -> Node {
        Node {
            pos: (x, y),
            parent: None,
            walked: Cost::INFINITY,
            cost: Cost::INFINITY,
        }
    }

    fn with_parent(pos: Point, parent: NodeKey) -> Node {
        Node {
            parent: Some(parent),
            ..Node::new(pos.0, pos.1)
        }
    }

    /// The position `(x, y)` of this Node
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// The identity of this Node's cell
    pub fn id(&self) -> NodeId {
        NodeId(self.pos)
    }

    /// The estimated total cost `g + h`, or infinity if the Node was never evaluated
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The cost `g` of the walk from the start to this Node, or infinity if never evaluated
    pub fn walked(&self) -> Cost {
        self.walked
    }

    /// Returns true once [`evaluate`](Node::evaluate) was called
    pub fn is_evaluated(&self) -> bool {
        self.cost != Cost::INFINITY
    }

    pub(crate) fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Computes `cost = g + h`.
    ///
    /// `g` is one step more than the walked cost of `predecessor` if it is given and evaluated,
    /// otherwise `0`. `h` is `heuristic` applied to this Node and `target`.
    ///
    /// The caller supplies `predecessor`; it is not checked against the Node this one was
    /// generated from. During a search the engine always passes the generating Node.
    ///
    /// Evaluating again against the same target and heuristic yields the same cost.
    ///
    /// ## Examples
    /// ```
    /// use grid_astar::{Heuristic, Node};
    ///
    /// let target = Node::new(3, 4);
    /// let mut start = Node::new(0, 0);
    /// assert!(!start.is_evaluated());
    ///
    /// start.evaluate(None, &target, Heuristic::Euclidean);
    /// assert_eq!(start.cost(), 5.0);
    ///
    /// let mut next = Node::new(1, 0);
    /// next.evaluate(Some(&start), &target, Heuristic::Manhattan);
    /// assert_eq!(next.walked(), 1.0);
    /// assert_eq!(next.cost(), 1.0 + 6.0);
    /// ```
    pub fn evaluate(&mut self, predecessor: Option<&Node>, target: &Node, heuristic: Heuristic) {
        self.evaluate_weighted(predecessor, target.pos, heuristic, 1.0);
    }

    pub(crate) fn evaluate_weighted(
        &mut self,
        predecessor: Option<&Node>,
        target: Point,
        heuristic: Heuristic,
        factor: Cost,
    ) {
        self.walked = match predecessor {
            Some(prev) if prev.is_evaluated() => prev.walked + STEP_COST,
            _ => 0.0,
        };
        self.cost = self.walked + factor * heuristic.distance(self.pos, target);
    }

    /// Pushes the free neighbors of this Node into `out`, in the order left, right, up, down.
    ///
    /// Every generated Node has `key` (the handle of `self`) as its parent. Cells outside of
    /// `grid` and walls are skipped. A Node standing on a wall (or outside of the Grid) has
    /// no neighbors: it may end a walk, but never continue one.
    pub(crate) fn generate_neighbors(&self, key: NodeKey, grid: &Grid, out: &mut Vec<Node>) {
        if !grid.is_free(self.pos) {
            return;
        }
        let (x, y) = self.pos;
        let candidates = [
            x.checked_sub(1).map(|x| (x, y)),
            x.checked_add(1).map(|x| (x, y)),
            y.checked_sub(1).map(|y| (x, y)),
            y.checked_add(1).map(|y| (x, y)),
        ];
        out.extend(
            candidates
                .into_iter()
                .flatten()
                .filter(|&pos| grid.is_free(pos))
                .map(|pos| Node::with_parent(pos, key)),
        );
    }
}

impl From<Point> for Node {
    fn from((x, y): Point) -> Node {
        Node::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors_of(pos: Point, grid: &Grid) -> Vec<Point> {
        let mut out = vec![];
        Node::from(pos).generate_neighbors(NodeKey::default(), grid, &mut out);
        out.iter().map(Node::pos).collect()
    }

    #[test]
    fn identity() {
        let a = Node::new(2, 5);
        let mut b = Node::new(2, 5);
        b.evaluate(None, &Node::new(0, 0), Heuristic::Manhattan);

        assert_eq!(a.id(), b.id());
        assert_ne!(a.id(), Node::new(5, 2).id());
        assert_eq!(a.id().to_string(), "2_5");
        assert_eq!(a.id().pos(), (2, 5));
    }

    #[test]
    fn unevaluated() {
        let node = Node::new(1, 1);
        assert!(!node.is_evaluated());
        assert_eq!(node.cost(), Cost::INFINITY);
        assert_eq!(node.walked(), Cost::INFINITY);
    }

    #[test]
    fn evaluate_is_idempotent() {
        let target = Node::new(4, 1);
        let mut start = Node::new(0, 0);
        start.evaluate(None, &target, Heuristic::Manhattan);

        let mut node = Node::new(0, 1);
        node.evaluate(Some(&start), &target, Heuristic::Manhattan);
        let first = node.cost();
        node.evaluate(Some(&start), &target, Heuristic::Manhattan);

        assert_eq!(first, 5.0);
        assert_eq!(node.cost(), first);
    }

    #[test]
    fn unevaluated_predecessor_counts_as_start() {
        let target = Node::new(2, 0);
        let mut node = Node::new(1, 0);
        node.evaluate(Some(&Node::new(0, 0)), &target, Heuristic::Manhattan);

        assert_eq!(node.walked(), 0.0);
        assert_eq!(node.cost(), 1.0);
    }

    #[test]
    fn caller_supplies_predecessor() {
        let target = Node::new(0, 0);
        let mut far = Node::new(9, 9);
        far.evaluate(None, &Node::new(0, 9), Heuristic::Manhattan);
        far.walked = 4.0;

        // the predecessor doesn't have to be a neighbor
        let mut node = Node::new(1, 0);
        node.evaluate(Some(&far), &target, Heuristic::Manhattan);
        assert_eq!(node.walked(), 5.0);
        assert_eq!(node.cost(), 6.0);
    }

    #[test]
    fn weighted() {
        let mut node = Node::new(0, 0);
        node.evaluate_weighted(None, (3, 0), Heuristic::Manhattan, 2.0);
        assert_eq!(node.cost(), 6.0);
    }

    #[test]
    fn neighbor_order() {
        let grid = Grid::new(3, 3);
        assert_eq!(neighbors_of((1, 1), &grid), vec![(0, 1), (2, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn neighbors_skip_bounds_and_walls() {
        let grid = Grid::from_rows(&[[0, 1, 0], [0, 0, 0], [1, 0, 0]]).unwrap();

        assert_eq!(neighbors_of((0, 0), &grid), vec![(0, 1)]);
        assert_eq!(neighbors_of((2, 2), &grid), vec![(1, 2), (2, 1)]);
        assert_eq!(neighbors_of((0, 1), &grid), vec![(1, 1), (0, 0)]);
    }

    #[test]
    fn walls_have_no_neighbors() {
        let grid = Grid::from_rows(&[[0, 1, 0], [0, 0, 0]]).unwrap();

        assert!(neighbors_of((1, 0), &grid).is_empty());
        assert!(neighbors_of((7, 7), &grid).is_empty());
    }

    #[test]
    fn neighbors_point_back() {
        let grid = Grid::new(2, 2);
        let mut keys = slotmap::SlotMap::<NodeKey, ()>::with_key();
        let key = keys.insert(());

        let mut out = vec![];
        Node::new(0, 0).generate_neighbors(key, &grid, &mut out);

        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|node| node.parent() == Some(key)));
        assert!(out.iter().all(|node| !node.is_evaluated()));
    }
}
