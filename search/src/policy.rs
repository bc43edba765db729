//! Search policy types.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Optional limits applied to one solve call.
///
/// The default policy imposes nothing: the search runs until the target is
/// found or the frontier is exhausted.
#[derive(Debug, Clone, Default)]
pub struct SearchPolicy {
    /// Hard cap on node expansions. `None` leaves the search unbounded.
    pub max_expansions: Option<u64>,
    /// Cooperative cancellation handle, checked once per loop iteration.
    pub cancel: Option<CancelToken>,
}

/// Clonable cancellation flag shared with whoever may cancel the search.
///
/// Cancellation is cooperative: the solver checks the flag between
/// expansions and stops with [`crate::report::Termination::Cancelled`]
/// rather than unwinding. All clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create an untriggered token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
