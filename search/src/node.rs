//! Search nodes, the arena that owns them, and path reconstruction.

use std::ops::Index;

/// Stable index of a node within its [`NodeArena`].
///
/// Ids are only meaningful for the arena that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Link from a child node to the parent that generated it.
#[derive(Debug, Clone)]
pub struct Origin<A> {
    /// The node this one was generated from.
    pub parent: NodeId,
    /// The action that produced this node from its parent.
    pub action: A,
}

/// An immutable search node.
///
/// `origin` is `None` exactly for the root, so a root carrying an action or
/// a child missing one cannot be represented.
#[derive(Debug, Clone)]
pub struct Node<S, A> {
    /// Full state at this node.
    pub state: S,
    /// Parent link and producing action (`None` for the root).
    pub origin: Option<Origin<A>>,
    /// Cumulative path cost from the source (+1 per step).
    pub cost_from_source: u64,
}

/// One step of a reconstructed path: the action taken and the state it
/// entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<S, A> {
    /// The action applied to the previous state.
    pub action: A,
    /// The state the action entered.
    pub state: S,
}

/// Arena owning every node created during one search.
///
/// Parent links are arena indices, so the node tree needs no shared
/// ownership and the parent chain cannot cycle: a parent always exists
/// before any of its children.
pub struct NodeArena<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S: Clone, A: Clone> NodeArena<S, A> {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Number of nodes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert the root node: no origin, cost zero.
    pub fn push_root(&mut self, state: S) -> NodeId {
        self.push(Node {
            state,
            origin: None,
            cost_from_source: 0,
        })
    }

    /// Insert a child of `parent` reached by `action`, one unit step
    /// deeper than its parent.
    pub fn push_child(&mut self, parent: NodeId, action: A, state: S) -> NodeId {
        let cost_from_source = self.nodes[parent.0].cost_from_source + 1;
        self.push(Node {
            state,
            origin: Some(Origin { parent, action }),
            cost_from_source,
        })
    }

    fn push(&mut self, node: Node<S, A>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Reconstruct the path from the root to `goal`.
    ///
    /// Walks origin links back to the root, then reverses once. The root
    /// contributes no step, so the returned length equals the goal node's
    /// `cost_from_source`.
    #[must_use]
    pub fn path_to(&self, goal: NodeId) -> Vec<Step<S, A>> {
        let mut steps = Vec::new();
        let mut cursor = &self.nodes[goal.0];
        while let Some(origin) = &cursor.origin {
            steps.push(Step {
                action: origin.action.clone(),
                state: cursor.state.clone(),
            });
            cursor = &self.nodes[origin.parent.0];
        }
        steps.reverse();
        steps
    }
}

impl<S: Clone, A: Clone> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Index<NodeId> for NodeArena<S, A> {
    type Output = Node<S, A>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}
