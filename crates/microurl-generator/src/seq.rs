use crate::IdGenerator;
use microurl_core::{GeneratorError, UrlId};
use std::sync::atomic::{AtomicU64, Ordering};

/// A sequential identifier generator backed by an atomic counter.
///
/// This is the default generator. It ignores the URL, so the same URL
/// shortened twice gets two identifiers. It is unique within a single
/// instance; separate instances should be given disjoint offsets.
///
/// The counter never wraps and `u64::MAX` itself is never issued: once
/// `u64::MAX - 1` has been handed out every further call fails with
/// [`GeneratorError::Exhausted`].
#[derive(Debug, Default)]
pub struct SeqGenerator {
    start: u64,
    next: AtomicU64,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            next: AtomicU64::new(self.next.load(Ordering::SeqCst)),
        }
    }
}

impl SeqGenerator {
    /// Creates a generator whose first identifier is 0.
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Creates a generator starting from a specific counter value.
    ///
    /// Useful for resuming from a known state or splitting the identifier
    /// space between instances.
    pub fn with_offset(offset: u64) -> Self {
        Self {
            start: offset,
            next: AtomicU64::new(offset),
        }
    }
}

impl IdGenerator for SeqGenerator {
    fn generate(&self, _url: &str) -> Result<UrlId, GeneratorError> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .map(UrlId::new)
            .map_err(|current| {
                tracing::warn!(next = current, "sequential generator exhausted");
                // nothing was issued if the counter never moved past its start
                let last = (current > self.start).then(|| UrlId::new(current - 1));
                GeneratorError::Exhausted { last }
            })
    }
}
