//! Environment contract trait.

use std::hash::Hash;

/// Trait for environments that support search.
///
/// An environment fixes a source state, a target condition, and the moves
/// available from each state. The solver holds the environment as
/// `&dyn Environment` and drives it only through this surface, so any grid,
/// graph, or puzzle with `Clone + Eq + Hash` states can plug in.
///
/// # Contract
///
/// - `actions` must be deterministic and side-effect-free: same state,
///   same environment configuration, same actions in the same order.
///   Implementations should omit actions that would be blocked (a wall, a
///   board edge) rather than return self-transitions.
/// - `transition` must be a pure function of `(state, action)` while a
///   search is running.
/// - `cost_to_target` is the optional heuristic. If it returns `Some` for
///   the source it must return `Some` for every reachable state. The
///   estimate should never exceed the true remaining cost, and for A*
///   optimality it must not drop by more than one across a single step.
pub trait Environment {
    /// Snapshot of one position in the environment.
    type State: Clone + Eq + Hash;
    /// A move between states, kept only to report the path taken.
    type Action: Clone;

    /// The state the search starts from.
    fn source(&self) -> Self::State;

    /// All actions available from `state`, in a stable order.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by taking `action` from `state`.
    fn transition(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Whether `state` satisfies the target condition.
    fn is_target(&self, state: &Self::State) -> bool;

    /// Estimated cost from `state` to the target, if this environment has
    /// a heuristic. Defaults to `None` (no heuristic).
    fn cost_to_target(&self, _state: &Self::State) -> Option<u64> {
        None
    }
}
