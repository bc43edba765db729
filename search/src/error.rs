//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime outcomes
//! (target reached, frontier exhausted, budget exceeded, cancelled) are
//! expressed via [`crate::report::Termination`] and always produce a
//! [`crate::report::SearchReport`].

use crate::algorithm::Algorithm;

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before the first expansion. No
/// `SearchReport` is produced because no search steps were taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// A heuristic-guided algorithm was requested but the environment's
    /// `cost_to_target` returned `None` for the source state.
    HeuristicUnavailable { algorithm: Algorithm },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HeuristicUnavailable { algorithm } => {
                write!(
                    f,
                    "{algorithm} requires a heuristic but the environment provides none"
                )
            }
        }
    }
}

impl std::error::Error for SearchError {}
