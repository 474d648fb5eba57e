#![forbid(unsafe_code)]

//! Deferred side effects, run after the visual tree commits.
//!
//! Widgets stay pure during render. When a widget needs an imperative
//! action (moving focus, for instance) it compares its watched inputs with
//! [`EffectDeps`] and, on change, schedules a closure on the host's
//! [`EffectQueue`]. The host calls [`EffectQueue::flush`] once the frame is
//! committed.
//!
//! # Invariants
//!
//! 1. Effects run in schedule order, each at most once.
//! 2. Scheduling under a key that already has a pending effect supersedes
//!    it: the stale closure is dropped unrun and the fresh one is queued
//!    last.
//! 3. [`EffectDeps::changed`] reports `true` on the first observation and
//!    afterwards only when the watched value differs from the last one.

use std::fmt;

/// Memo of the last watched inputs of one effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectDeps<T> {
    last: Option<T>,
}

impl<T: PartialEq> EffectDeps<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Record `next` and report whether the effect must run.
    pub fn changed(&mut self, next: T) -> bool {
        if self.last.as_ref() == Some(&next) {
            return false;
        }
        self.last = Some(next);
        true
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.last.as_ref()
    }

    /// Forget the memo; the next observation runs the effect again.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

type PendingEffect<C> = Box<dyn FnOnce(&C)>;

/// Queue of pending effects keyed by owner, run against a context `C`.
pub struct EffectQueue<K, C> {
    pending: Vec<(K, PendingEffect<C>)>,
    superseded: u64,
    executed: u64,
}

impl<K: Eq + Copy + fmt::Debug, C> EffectQueue<K, C> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            superseded: 0,
            executed: 0,
        }
    }

    /// Queue `effect` for `key`, superseding any effect still pending for it.
    pub fn schedule(&mut self, key: K, effect: impl FnOnce(&C) + 'static) {
        if let Some(pos) = self.pending.iter().position(|(k, _)| *k == key) {
            drop(self.pending.remove(pos));
            self.superseded += 1;
            tracing::trace!(?key, "pending effect superseded");
        }
        self.pending.push((key, Box::new(effect)));
    }

    /// Drop the pending effect for `key`, if any (e.g. on unmount).
    pub fn discard(&mut self, key: K) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(k, _)| *k != key);
        before != self.pending.len()
    }

    #[must_use]
    pub fn is_pending(&self, key: K) -> bool {
        self.pending.iter().any(|(k, _)| *k == key)
    }

    /// Run every pending effect in order. Effects scheduled while flushing
    /// wait for the next flush. Returns how many ran.
    pub fn flush(&mut self, ctx: &C) -> usize {
        let batch = std::mem::take(&mut self.pending);
        let count = batch.len();
        for (key, effect) in batch {
            tracing::trace!(?key, "running effect");
            effect(ctx);
        }
        self.executed += count as u64;
        if count > 0 {
            tracing::debug!(count, "effects flushed");
        }
        count
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Total effects dropped by supersede since creation.
    #[must_use]
    pub fn superseded(&self) -> u64 {
        self.superseded
    }

    /// Total effects run since creation.
    #[must_use]
    pub fn executed(&self) -> u64 {
        self.executed
    }
}

impl<K: Eq + Copy + fmt::Debug, C> Default for EffectQueue<K, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, C> fmt::Debug for EffectQueue<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectQueue")
            .field(
                "pending",
                &self.pending.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            )
            .field("superseded", &self.superseded)
            .field("executed", &self.executed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tracing_test::traced_test;

    type Log = RefCell<Vec<&'static str>>;

    #[test]
    fn deps_first_observation_runs() {
        let mut deps = EffectDeps::new();
        assert!(deps.changed((true, false)));
        assert!(!deps.changed((true, false)));
        assert!(deps.changed((false, false)));
        assert_eq!(deps.last(), Some(&(false, false)));
    }

    #[test]
    fn deps_reset_reruns() {
        let mut deps = EffectDeps::new();
        assert!(deps.changed(1));
        deps.reset();
        assert!(deps.changed(1));
    }

    #[test]
    fn flush_runs_in_order() {
        let mut queue: EffectQueue<u32, Log> = EffectQueue::new();
        queue.schedule(1, |log| log.borrow_mut().push("one"));
        queue.schedule(2, |log| log.borrow_mut().push("two"));
        let log = RefCell::new(Vec::new());
        assert_eq!(queue.flush(&log), 2);
        assert_eq!(*log.borrow(), vec!["one", "two"]);
        assert!(queue.is_empty());
        assert_eq!(queue.executed(), 2);
    }

    #[test]
    #[traced_test]
    fn reschedule_supersedes_stale_effect() {
        let mut queue: EffectQueue<u32, Log> = EffectQueue::new();
        queue.schedule(1, |log| log.borrow_mut().push("stale"));
        queue.schedule(2, |log| log.borrow_mut().push("other"));
        queue.schedule(1, |log| log.borrow_mut().push("fresh"));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.superseded(), 1);

        let log = RefCell::new(Vec::new());
        queue.flush(&log);
        assert_eq!(*log.borrow(), vec!["other", "fresh"]);
        assert!(logs_contain("pending effect superseded"));
    }

    #[test]
    fn superseded_effect_is_released_immediately() {
        let captured = std::rc::Rc::new(());
        let mut queue: EffectQueue<u32, Log> = EffectQueue::new();
        let held = std::rc::Rc::clone(&captured);
        queue.schedule(1, move |log| {
            let _ = &held;
            log.borrow_mut().push("stale");
        });
        assert_eq!(std::rc::Rc::strong_count(&captured), 2);

        queue.schedule(1, |log| log.borrow_mut().push("fresh"));
        assert_eq!(std::rc::Rc::strong_count(&captured), 1);

        let log = RefCell::new(Vec::new());
        queue.flush(&log);
        assert_eq!(*log.borrow(), vec!["fresh"]);
    }

    #[test]
    fn discard_drops_pending() {
        let mut queue: EffectQueue<u32, Log> = EffectQueue::new();
        queue.schedule(9, |log| log.borrow_mut().push("never"));
        assert!(queue.is_pending(9));
        assert!(queue.discard(9));
        assert!(!queue.discard(9));
        let log = RefCell::new(Vec::new());
        assert_eq!(queue.flush(&log), 0);
        assert!(log.borrow().is_empty());
    }
}
