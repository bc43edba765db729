//! Search strategy selector.

use std::fmt;
use std::str::FromStr;

/// The four search strategies.
///
/// Strategy selection only decides the frontier removal discipline and the
/// priority assigned to each generated node; the expansion loop in
/// [`crate::solver::Solver::solve`] is otherwise identical for all four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Depth-first: most recently generated node expands next.
    Dfs,
    /// Breadth-first: oldest generated node expands next.
    Bfs,
    /// Greedy best-first: lowest heuristic estimate expands next.
    GreedyBfs,
    /// A*: lowest estimate plus cost from the source expands next.
    AStar,
}

impl Algorithm {
    /// Every algorithm, in a stable order.
    pub const ALL: [Self; 4] = [Self::Dfs, Self::Bfs, Self::GreedyBfs, Self::AStar];

    /// Whether this algorithm evaluates the environment heuristic.
    ///
    /// Heuristic-guided algorithms fail pre-flight against an environment
    /// whose `cost_to_target` returns `None` for the source; the uninformed
    /// algorithms never call it.
    #[must_use]
    pub fn uses_heuristic(self) -> bool {
        matches!(self, Self::GreedyBfs | Self::AStar)
    }

    /// Stable token used on the command line and in JSON output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dfs => "dfs",
            Self::Bfs => "bfs",
            Self::GreedyBfs => "greedy",
            Self::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure to parse an [`Algorithm`] token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    token: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm `{}` (expected dfs, bfs, greedy, or astar)",
            self.token
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dfs" => Ok(Self::Dfs),
            "bfs" => Ok(Self::Bfs),
            "greedy" | "greedy_bfs" => Ok(Self::GreedyBfs),
            "astar" | "a_star" => Ok(Self::AStar),
            _ => Err(ParseAlgorithmError {
                token: s.to_string(),
            }),
        }
    }
}
