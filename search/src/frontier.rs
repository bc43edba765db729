//! Frontier disciplines for the search loop.
//!
//! One frontier type, three removal orders. The discipline is fixed when
//! the frontier is constructed; the search loop drives every discipline
//! through the same add/remove surface and never branches on it.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::hash::Hash;

use crate::node::NodeId;

/// Ordering key for the greedy discipline: lowest priority first, ties
/// broken by insertion order so equal-priority nodes leave in the order
/// they arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GreedyKey {
    priority: u64,
    seq: u64,
}

impl PartialOrd for GreedyKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GreedyKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

/// A greedy-discipline entry.
///
/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to pop
/// the lowest priority first. Comparisons look at the key only; the state
/// rides along for membership bookkeeping.
#[derive(Debug)]
struct GreedyEntry<S> {
    key: Reverse<GreedyKey>,
    node: NodeId,
    state: S,
}

impl<S> PartialEq for GreedyEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S> Eq for GreedyEntry<S> {}

impl<S> PartialOrd for GreedyEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for GreedyEntry<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

enum Store<S> {
    Stack(Vec<(NodeId, S)>),
    Queue(VecDeque<(NodeId, S)>),
    Greedy(BinaryHeap<GreedyEntry<S>>),
}

/// The frontier: generated-but-not-yet-expanded nodes.
///
/// Maintains:
/// - the discipline's backing store (`Vec`, `VecDeque`, or `BinaryHeap`)
/// - a `HashSet` of member states for O(1) duplicate checks
/// - a high-water mark of frontier size for reporting
pub struct Frontier<S> {
    store: Store<S>,
    members: HashSet<S>,
    next_seq: u64,
    high_water: u64,
}

impl<S: Clone + Eq + Hash> Frontier<S> {
    /// LIFO discipline: the most recently added node is removed first.
    #[must_use]
    pub fn stack() -> Self {
        Self::with_store(Store::Stack(Vec::new()))
    }

    /// FIFO discipline: the least recently added node is removed first.
    #[must_use]
    pub fn queue() -> Self {
        Self::with_store(Store::Queue(VecDeque::new()))
    }

    /// Priority discipline: the lowest-priority node is removed first,
    /// insertion order breaking ties.
    #[must_use]
    pub fn greedy() -> Self {
        Self::with_store(Store::Greedy(BinaryHeap::new()))
    }

    fn with_store(store: Store<S>) -> Self {
        Self {
            store,
            members: HashSet::new(),
            next_seq: 0,
            high_water: 0,
        }
    }

    /// Add a node to the frontier.
    ///
    /// `priority` orders the greedy discipline and is ignored by the stack
    /// and queue disciplines. The caller suppresses duplicates before
    /// adding; a state may not be in the frontier twice.
    pub fn add(&mut self, node: NodeId, state: S, priority: u64) {
        debug_assert!(
            !self.members.contains(&state),
            "duplicate state added to frontier"
        );
        self.members.insert(state.clone());
        match &mut self.store {
            Store::Stack(entries) => entries.push((node, state)),
            Store::Queue(entries) => entries.push_back((node, state)),
            Store::Greedy(heap) => {
                let key = GreedyKey {
                    priority,
                    seq: self.next_seq,
                };
                heap.push(GreedyEntry {
                    key: Reverse(key),
                    node,
                    state,
                });
            }
        }
        self.next_seq += 1;
        let size = self.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Remove the next node per this frontier's discipline.
    ///
    /// # Panics
    ///
    /// Panics if the frontier is empty. An empty frontier is a normal
    /// search outcome, but removing from one is a caller bug; the search
    /// loop checks `is_empty` first.
    pub fn remove(&mut self) -> NodeId {
        let popped = match &mut self.store {
            Store::Stack(entries) => entries.pop(),
            Store::Queue(entries) => entries.pop_front(),
            Store::Greedy(heap) => heap.pop().map(|entry| (entry.node, entry.state)),
        };
        let Some((node, state)) = popped else {
            panic!("remove from empty frontier");
        };
        self.members.remove(&state);
        node
    }

    /// Whether a node holding `state` is currently in the frontier.
    #[must_use]
    pub fn contains_state(&self, state: &S) -> bool {
        self.members.contains(state)
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.store {
            Store::Stack(entries) => entries.len(),
            Store::Queue(entries) => entries.len(),
            Store::Greedy(heap) => heap.len(),
        }
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
