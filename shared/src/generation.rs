//! Stale-response guard for asynchronous loads.
//!
//! A view starts a load with [`LoadGeneration::begin`] and keeps the ticket
//! with the in-flight request. When the view unmounts or its sheet changes
//! it calls [`LoadGeneration::cancel`]. A ticket is only current while no
//! newer load has begun and no cancel has happened since it was issued, so a
//! late response can be discarded deterministically.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct LoadGeneration {
    counter: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct LoadTicket {
    issued: u64,
    counter: Arc<AtomicU64>,
}

impl LoadGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, invalidating every ticket issued before.
    pub fn begin(&self) -> LoadTicket {
        let issued = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        LoadTicket {
            issued,
            counter: Arc::clone(&self.counter),
        }
    }

    /// Invalidate every outstanding ticket without starting a new load.
    pub fn cancel(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }
}

impl LoadTicket {
    pub fn is_current(&self) -> bool {
        self.counter.load(Ordering::SeqCst) == self.issued
    }
}

impl PartialEq for LoadGeneration {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.counter, &other.counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ticket_is_current() {
        let generation = LoadGeneration::new();
        let ticket = generation.begin();
        assert!(ticket.is_current());
    }

    #[test]
    fn test_newer_load_invalidates_older_ticket() {
        let generation = LoadGeneration::new();
        let first = generation.begin();
        let second = generation.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_cancel_invalidates_outstanding_ticket() {
        let generation = LoadGeneration::new();
        let ticket = generation.begin();
        generation.cancel();
        assert!(!ticket.is_current());

        // a load begun after the cancel is live again
        assert!(generation.begin().is_current());
    }

    #[test]
    fn test_clones_share_the_counter() {
        let generation = LoadGeneration::new();
        let handle = generation.clone();
        let ticket = generation.begin();
        handle.cancel();
        assert!(!ticket.is_current());
        assert_eq!(generation, handle);
        assert_ne!(generation, LoadGeneration::new());
    }
}
