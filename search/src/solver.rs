//! Solve entry point and expansion loop.

use std::collections::HashSet;
use std::hash::Hash;

use crate::algorithm::Algorithm;
use crate::environment::Environment;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::node::{NodeArena, Step};
use crate::policy::SearchPolicy;
use crate::report::{SearchReport, SearchStats, Termination};

/// Search driver bound to one environment.
///
/// The solver borrows the environment immutably and owns all mutable
/// search state (arena, frontier, explored set) per [`Solver::solve`]
/// call, so one environment value can back any number of solves and
/// repeated solves are independent.
pub struct Solver<'a, S, A> {
    env: &'a dyn Environment<State = S, Action = A>,
    policy: SearchPolicy,
}

impl<'a, S, A> Solver<'a, S, A>
where
    S: Clone + Eq + Hash,
    A: Clone,
{
    /// Create a solver with the default (unbounded) policy.
    #[must_use]
    pub fn new(env: &'a dyn Environment<State = S, Action = A>) -> Self {
        Self {
            env,
            policy: SearchPolicy::default(),
        }
    }

    /// Create a solver with an explicit policy.
    #[must_use]
    pub fn with_policy(
        env: &'a dyn Environment<State = S, Action = A>,
        policy: SearchPolicy,
    ) -> Self {
        Self { env, policy }
    }

    /// Run one search with the given algorithm.
    ///
    /// All runtime outcomes (target reached, frontier exhausted, budget
    /// exceeded, cancelled) return `Ok` with the outcome recorded in
    /// `stats.termination`; "no path" is `Ok` with `path: None`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::HeuristicUnavailable`] when `algorithm` is
    /// heuristic-guided and the environment's `cost_to_target` returns
    /// `None` for the source state. No search steps are taken.
    ///
    /// # Panics
    ///
    /// Panics if `cost_to_target` returns `Some` for the source but `None`
    /// for a state reached later. That is an environment contract
    /// violation, not a runtime condition.
    pub fn solve(&self, algorithm: Algorithm) -> Result<SearchReport<S, A>, SearchError> {
        let source = self.env.source();

        if algorithm.uses_heuristic() && self.env.cost_to_target(&source).is_none() {
            return Err(SearchError::HeuristicUnavailable { algorithm });
        }

        if self.env.is_target(&source) {
            return Ok(SearchReport {
                algorithm,
                path: Some(Vec::new()),
                explored: Vec::new(),
                stats: SearchStats {
                    expanded: 0,
                    generated: 0,
                    duplicates_suppressed: 0,
                    frontier_high_water: 0,
                    termination: Termination::TargetReached,
                },
            });
        }

        // The algorithms differ only here: the removal discipline and the
        // priority assigned to each generated node. The loop below never
        // branches on the algorithm.
        let mut frontier = match algorithm {
            Algorithm::Dfs => Frontier::stack(),
            Algorithm::Bfs => Frontier::queue(),
            Algorithm::GreedyBfs | Algorithm::AStar => Frontier::greedy(),
        };
        let priority: Box<dyn Fn(&S, u64) -> u64 + '_> = match algorithm {
            Algorithm::Dfs | Algorithm::Bfs => Box::new(|_, _| 0),
            Algorithm::GreedyBfs => Box::new(|state, _| self.estimate(state)),
            Algorithm::AStar => Box::new(|state, cost_from_source| {
                self.estimate(state).saturating_add(cost_from_source)
            }),
        };

        let mut arena: NodeArena<S, A> = NodeArena::new();
        let mut explored: HashSet<S> = HashSet::new();
        let mut explored_order: Vec<S> = Vec::new();
        let mut expanded: u64 = 0;
        let mut generated: u64 = 0;
        let mut duplicates_suppressed: u64 = 0;
        let mut path: Option<Vec<Step<S, A>>> = None;

        let root_priority = priority(&source, 0);
        let root = arena.push_root(source.clone());
        frontier.add(root, source, root_priority);

        let termination = 'search: loop {
            if frontier.is_empty() {
                break Termination::FrontierExhausted;
            }
            if let Some(budget) = self.policy.max_expansions {
                if expanded >= budget {
                    break Termination::BudgetExceeded;
                }
            }
            if let Some(token) = &self.policy.cancel {
                if token.is_cancelled() {
                    break Termination::Cancelled;
                }
            }

            let current = frontier.remove();
            let current_state = arena[current].state.clone();

            for action in self.env.actions(&current_state) {
                let successor = self.env.transition(&current_state, &action);
                if frontier.contains_state(&successor) || explored.contains(&successor) {
                    duplicates_suppressed += 1;
                    continue;
                }
                let child = arena.push_child(current, action, successor.clone());
                generated += 1;
                if self.env.is_target(&successor) {
                    path = Some(arena.path_to(child));
                    break 'search Termination::TargetReached;
                }
                let child_priority = priority(&successor, arena[child].cost_from_source);
                frontier.add(child, successor, child_priority);
            }

            // A self-looping transition can re-reach a state mid-expansion;
            // the ordered list stays duplicate-free.
            if explored.insert(current_state.clone()) {
                explored_order.push(current_state);
            }
            expanded += 1;
        };

        Ok(SearchReport {
            algorithm,
            path,
            explored: explored_order,
            stats: SearchStats {
                expanded,
                generated,
                duplicates_suppressed,
                frontier_high_water: frontier.high_water(),
                termination,
            },
        })
    }

    fn estimate(&self, state: &S) -> u64 {
        let Some(estimate) = self.env.cost_to_target(state) else {
            panic!("cost_to_target returned None for a reachable state");
        };
        estimate
    }
}
