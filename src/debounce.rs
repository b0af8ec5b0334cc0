//! A small generic debounce helper.
//!
//! Kept as its own focused module, one thing done well, the same way
//! `logger.rs` in the wider lineage of this crate does one thing.
//!
//! The engine has no background timer of its own — writes are
//! fire-and-forget with bounded latency, driven by whatever cooperative
//! loop the embedder runs. Debouncing is therefore expressed as deadline
//! arithmetic the embedder drives by calling [`Debouncer::poll`] with its
//! own clock reading, rather than by spawning a timer thread — this keeps
//! the engine runtime-agnostic (no `tokio` dependency is pulled in just for
//! a sleep).

/// Debounces a stream of values down to "the latest one, at most once per
/// `window_ms` of quiet".
///
/// Every [`Debouncer::schedule`] call resets the deadline. The caller is
/// responsible for periodically calling [`Debouncer::poll`] (or flushing on
/// destruction via [`Debouncer::flush`]) — the debouncer itself never wakes
/// anything up.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window_ms: u64,
    pending: Option<T>,
    due_at_ms: u64,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiet window, in milliseconds.
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            pending: None,
            due_at_ms: 0,
        }
    }

    /// Queue `value` for a debounced write, resetting the deadline to
    /// `now_ms + window_ms`.
    pub fn schedule(&mut self, value: T, now_ms: u64) {
        self.pending = Some(value);
        self.due_at_ms = now_ms.saturating_add(self.window_ms);
    }

    /// If a value is pending and its deadline has passed, take and return
    /// it. Otherwise leaves the pending value queued and returns `None`.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        if self.pending.is_some() && now_ms >= self.due_at_ms {
            self.pending.take()
        } else {
            None
        }
    }

    /// Unconditionally take and return the pending value, regardless of
    /// its deadline.
    ///
    /// Used on destruction: one final synchronous
    /// flush is attempted best-effort, ignoring the debounce window.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Whether a write is currently queued.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Discard any pending write without returning it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_before_deadline_returns_none() {
        let mut debouncer = Debouncer::new(1000);
        debouncer.schedule("a", 0);
        assert_eq!(debouncer.poll(999), None);
        assert!(debouncer.is_pending());
    }

    #[test]
    fn poll_at_or_after_deadline_returns_value_once() {
        let mut debouncer = Debouncer::new(1000);
        debouncer.schedule("a", 0);
        assert_eq!(debouncer.poll(1000), Some("a"));
        assert_eq!(debouncer.poll(2000), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn schedule_resets_the_deadline() {
        let mut debouncer = Debouncer::new(1000);
        debouncer.schedule("a", 0);
        debouncer.schedule("b", 500);
        assert_eq!(debouncer.poll(1000), None); // deadline moved to 1500
        assert_eq!(debouncer.poll(1500), Some("b"));
    }

    #[test]
    fn flush_returns_pending_regardless_of_deadline() {
        let mut debouncer = Debouncer::new(1000);
        debouncer.schedule("a", 0);
        assert_eq!(debouncer.flush(), Some("a"));
        assert_eq!(debouncer.flush(), None);
    }
}
