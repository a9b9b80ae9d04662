/*!
 * Login Counter
 * Shared ticket dispenser handing out login indices to workers
 */

use std::sync::atomic::{AtomicUsize, Ordering};

/// Atomic counter owned by a harness run and lent to its workers
///
/// Tickets start at 1 and are unique across all workers of a run.
#[derive(Debug, Default)]
pub struct LoginCounter {
    issued: AtomicUsize,
}

impl LoginCounter {
    pub const fn new() -> Self {
        Self {
            issued: AtomicUsize::new(0),
        }
    }

    /// Claim the next login index
    #[inline]
    pub fn claim(&self) -> usize {
        self.issued.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Tickets handed out so far, including ones past the run's limit
    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.issued.store(0, Ordering::Relaxed);
    }
}
