//! Structured result of one solve call.
//!
//! Every runtime outcome produces a report; [`SearchStats::termination`]
//! says how the run stopped. "No path" is a report with `path: None`,
//! never an error.

use crate::algorithm::Algorithm;
use crate::node::Step;

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A generated node passed the target test.
    TargetReached,
    /// The frontier emptied without reaching the target: no path exists.
    FrontierExhausted,
    /// The policy's expansion budget was hit.
    BudgetExceeded,
    /// The policy's cancellation token was triggered.
    Cancelled,
}

impl Termination {
    /// Stable token used in JSON output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TargetReached => "target_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::BudgetExceeded => "budget_exceeded",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate counters for one solve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes removed from the frontier and fully expanded.
    pub expanded: u64,
    /// Nodes created during expansion (the root is not counted).
    pub generated: u64,
    /// Successors dropped because their state was already in the frontier
    /// or the explored set.
    pub duplicates_suppressed: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
    /// Why the loop stopped.
    pub termination: Termination,
}

impl SearchStats {
    /// Convert to a `serde_json::Value` with stable keys.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "duplicates_suppressed": self.duplicates_suppressed,
            "expanded": self.expanded,
            "frontier_high_water": self.frontier_high_water,
            "generated": self.generated,
            "termination": self.termination.as_str(),
        })
    }
}

/// Result of a solve call.
///
/// Check [`SearchReport::is_solved`] or inspect `stats.termination` to
/// determine the outcome; `path` is `Some` exactly when the target was
/// reached.
#[derive(Debug, Clone)]
pub struct SearchReport<S, A> {
    /// The algorithm that produced this report.
    pub algorithm: Algorithm,
    /// Steps from the state after the source to the target, in traversal
    /// order. `Some(vec![])` means the source already satisfied the target;
    /// `None` means the run stopped without reaching it.
    pub path: Option<Vec<Step<S, A>>>,
    /// States fully expanded, in expansion order, without duplicates.
    pub explored: Vec<S>,
    /// Run counters and termination reason.
    pub stats: SearchStats,
}

impl<S, A> SearchReport<S, A> {
    /// Returns `true` if the search stopped because the target was reached.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.stats.termination == Termination::TargetReached
    }

    /// Path length in steps, if a path was found.
    #[must_use]
    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }
}
