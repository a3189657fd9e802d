use crate::graph::{NodeId, NodeKey};
use crate::Cost;

use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Where the best known Node of an identity currently lives
#[derive(Clone, Copy, Debug, PartialEq)]
enum Membership {
    Open { cost: Cost, node: NodeKey },
    Closed { cost: Cost, node: NodeKey },
}

/// What [`Frontier::offer`] did with a Node
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Offer {
    /// The identity was unknown and is now open
    Inserted,
    /// The identity was open with a higher cost and now refers to the offered Node
    Replaced,
    /// The identity was closed with a higher cost and is open again
    Reopened,
    /// The identity is already known at an equal or lower cost
    Discarded,
}

#[derive(Clone, Copy, Debug)]
struct Element {
    cost: Cost,
    seq: u64,
    node: NodeKey,
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Element {}
impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: the cheapest and then the oldest Element has to compare greatest
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// The open and closed set of a search.
///
/// Every identity is either open, closed or unknown. The heap may still hold Elements of Nodes
/// that were replaced in the meantime, those are skipped when popping.
#[derive(Debug)]
pub struct Frontier {
    heap: BinaryHeap<Element>,
    index: HashMap<NodeId, Membership>,
    next_seq: u64,
}

impl Frontier {
    pub fn with_capacity(size_hint: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(size_hint / 2),
            index: HashMap::with_capacity(size_hint),
            next_seq: 0,
        }
    }

    fn push(&mut self, id: NodeId, cost: Cost, node: NodeKey) {
        self.index.insert(id, Membership::Open { cost, node });
        self.heap.push(Element {
            cost,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
    }

    /// Makes the Node `node` of identity `id` the open candidate for that identity, unless a
    /// Node of the same identity is open or closed with a cost that is at most `cost`.
    pub fn offer(&mut self, id: NodeId, cost: Cost, node: NodeKey) -> Offer {
        let offer = match self.index.get(&id) {
            Some(Membership::Closed { cost: prev, .. }) if *prev > cost => Offer::Reopened,
            Some(Membership::Closed { .. }) => Offer::Discarded,
            None => Offer::Inserted,
            Some(Membership::Open { cost: prev, .. }) if cost < *prev => Offer::Replaced,
            Some(Membership::Open { .. }) => Offer::Discarded,
        };
        if offer != Offer::Discarded {
            self.push(id, cost, node);
        }
        offer
    }

    /// Removes the cheapest open Node and returns it.
    ///
    /// Its identity is unknown until it is [closed](Frontier::close).
    pub fn pop(&mut self, id_of: impl Fn(NodeKey) -> NodeId) -> Option<NodeKey> {
        while let Some(Element { node, .. }) = self.heap.pop() {
            let entry = match self.index.entry(id_of(node)) {
                Entry::Occupied(entry) => entry,
                Entry::Vacant(_) => continue,
            };
            let membership = *entry.get();
            match membership {
                Membership::Open { node: current, .. } if current == node => {
                    entry.remove();
                    return Some(node);
                }
                _ => continue,
            }
        }
        None
    }

    /// Marks a popped Node as finalized for its identity.
    pub fn close(&mut self, id: NodeId, cost: Cost, node: NodeKey) {
        debug_assert!(
            !matches!(self.index.get(&id), Some(Membership::Open { .. })),
            "closed {} while it was still open",
            id
        );
        self.index.insert(id, Membership::Closed { cost, node });
    }

    #[cfg(test)]
    pub fn is_closed(&self, id: NodeId) -> bool {
        matches!(self.index.get(&id), Some(Membership::Closed { .. }))
    }

    #[cfg(test)]
    pub fn is_open(&self, id: NodeId) -> bool {
        matches!(self.index.get(&id), Some(Membership::Open { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Node;
    use slotmap::SlotMap;

    struct Fixture {
        keys: SlotMap<NodeKey, NodeId>,
        frontier: Frontier,
    }

    impl Fixture {
        fn new() -> Self {
            Fixture {
                keys: SlotMap::with_key(),
                frontier: Frontier::with_capacity(8),
            }
        }

        fn offer(&mut self, pos: (usize, usize), cost: Cost) -> (NodeKey, Offer) {
            let id = Node::new(pos.0, pos.1).id();
            let key = self.keys.insert(id);
            (key, self.frontier.offer(id, cost, key))
        }

        fn pop(&mut self) -> Option<NodeKey> {
            let keys = &self.keys;
            self.frontier.pop(|key| keys[key])
        }
    }

    #[test]
    fn pops_cheapest_first() {
        let mut f = Fixture::new();
        let (a, _) = f.offer((0, 0), 5.0);
        let (b, _) = f.offer((1, 0), 2.0);
        let (c, _) = f.offer((2, 0), 3.5);

        assert_eq!(f.pop(), Some(b));
        assert_eq!(f.pop(), Some(c));
        assert_eq!(f.pop(), Some(a));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut f = Fixture::new();
        let keys: Vec<_> = (0..5).map(|x| f.offer((x, 0), 1.0).0).collect();

        for key in keys {
            assert_eq!(f.pop(), Some(key));
        }
    }

    #[test]
    fn cheaper_open_node_replaces() {
        let mut f = Fixture::new();
        let (expensive, offer) = f.offer((3, 3), 9.0);
        assert_eq!(offer, Offer::Inserted);

        let (same, offer) = f.offer((3, 3), 9.0);
        assert_eq!(offer, Offer::Discarded);

        let (cheap, offer) = f.offer((3, 3), 4.0);
        assert_eq!(offer, Offer::Replaced);

        assert_ne!(expensive, cheap);
        assert_ne!(same, cheap);
        assert_eq!(f.pop(), Some(cheap));
        // the stale Element of `expensive` is skipped
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn cheaper_closed_node_reopens() {
        let mut f = Fixture::new();
        let id = Node::new(1, 1).id();

        let (first, _) = f.offer((1, 1), 7.0);
        assert_eq!(f.pop(), Some(first));
        assert!(!f.frontier.is_open(id) && !f.frontier.is_closed(id));

        f.frontier.close(id, 7.0, first);
        assert!(f.frontier.is_closed(id));

        assert_eq!(f.offer((1, 1), 7.0).1, Offer::Discarded);
        assert_eq!(f.offer((1, 1), 8.0).1, Offer::Discarded);
        assert!(f.frontier.is_closed(id));

        let (second, offer) = f.offer((1, 1), 5.0);
        assert_eq!(offer, Offer::Reopened);
        assert!(f.frontier.is_open(id));
        assert_eq!(f.pop(), Some(second));
    }

    #[test]
    fn identities_are_independent() {
        let mut f = Fixture::new();
        assert_eq!(f.offer((0, 1), 3.0).1, Offer::Inserted);
        assert_eq!(f.offer((1, 0), 3.0).1, Offer::Inserted);
        assert_eq!(f.offer((1, 0), 1.0).1, Offer::Replaced);
        assert_eq!(f.offer((0, 1), 4.0).1, Offer::Discarded);
    }
}
