//! Process-scoped construction counter.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counts constructions of a record type.
///
/// Owned by whatever scope drives the demo (usually `main`) and handed to
/// constructors by reference. Clones share the same count, and the count
/// only ever increases.
#[derive(Debug, Clone, Default)]
pub struct InstanceCounter {
    count: Arc<AtomicU64>,
}

impl InstanceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a non-zero value (e.g. when resuming a tally).
    pub fn starting_at(initial: u64) -> Self {
        Self {
            count: Arc::new(AtomicU64::new(initial)),
        }
    }

    /// Record one construction and return the new total.
    pub fn increment(&self) -> u64 {
        let next = self.count.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::trace!(count = next, "instance counter incremented");
        next
    }

    /// Current number of recorded constructions.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}
