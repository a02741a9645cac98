// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed one-shot deadlines.

use core::borrow::Borrow;
use core::hash::Hash;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::Millis;

/// A registry of one-shot deadlines keyed by `K`.
///
/// Each key has at most one pending deadline. Due keys are handed back by
/// [`TimerSet::drain_due`] in deadline order and are removed as they are
/// returned.
#[derive(Clone, Debug)]
pub struct TimerSet<K> {
    deadlines: HashMap<K, Millis>,
}

impl<K: Eq + Hash> TimerSet<K> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            deadlines: HashMap::new(),
        }
    }

    /// Schedule `key` to fire `delay` milliseconds after `now`.
    ///
    /// Any deadline already pending for `key` is replaced.
    pub fn schedule(&mut self, key: K, now: Millis, delay: Millis) {
        self.deadlines.insert(key, now.saturating_add(delay));
    }

    /// Cancel the pending deadline for `key`.
    ///
    /// Returns `true` if one was pending.
    pub fn cancel<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.deadlines.remove(key).is_some()
    }

    /// Cancel everything. Returns how many deadlines were dropped.
    pub fn clear(&mut self) -> usize {
        let n = self.deadlines.len();
        self.deadlines.clear();
        n
    }

    /// Whether `key` has a pending deadline.
    pub fn is_pending<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.deadlines.contains_key(key)
    }

    /// The pending deadline for `key`, if any.
    pub fn deadline<Q>(&self, key: &Q) -> Option<Millis>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.deadlines.get(key).copied()
    }

    /// The earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.deadlines.values().copied().min()
    }

    /// Number of pending deadlines.
    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }

    /// Remove and return every key whose deadline is at or before `now`,
    /// earliest first.
    pub fn drain_due(&mut self, now: Millis) -> SmallVec<[K; 4]> {
        let mut due: SmallVec<[(Millis, K); 4]> = self
            .deadlines
            .extract_if(|_, deadline| *deadline <= now)
            .map(|(key, deadline)| (deadline, key))
            .collect();
        due.sort_by_key(|(deadline, _)| *deadline);
        due.into_iter().map(|(_, key)| key).collect()
    }
}

impl<K: Eq + Hash> Default for TimerSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_at_the_deadline_not_before() {
        let mut timers: TimerSet<u32> = TimerSet::new();
        timers.schedule(1, 1000, 150);

        assert!(timers.drain_due(1149).is_empty());
        assert_eq!(timers.drain_due(1150).as_slice(), [1]);
        assert!(timers.is_empty(), "fired timers are removed");
    }

    #[test]
    fn rescheduling_replaces_the_deadline() {
        let mut timers: TimerSet<u32> = TimerSet::new();
        timers.schedule(7, 0, 100);
        timers.schedule(7, 80, 100);

        assert_eq!(timers.len(), 1);
        assert!(timers.drain_due(100).is_empty());
        assert_eq!(timers.drain_due(180).as_slice(), [7]);
    }

    #[test]
    fn cancel_and_clear() {
        let mut timers: TimerSet<alloc::string::String> = TimerSet::new();
        timers.schedule("a".into(), 0, 10);
        timers.schedule("b".into(), 0, 10);
        timers.schedule("c".into(), 0, 10);

        assert!(timers.cancel("a"), "borrowed lookup works");
        assert!(!timers.cancel("a"), "second cancel is a no-op");
        assert!(timers.is_pending("b"));
        assert_eq!(timers.clear(), 2);
        assert!(timers.drain_due(1_000).is_empty());
    }

    #[test]
    fn due_keys_come_back_earliest_first() {
        let mut timers: TimerSet<u32> = TimerSet::new();
        timers.schedule(3, 0, 30);
        timers.schedule(1, 0, 10);
        timers.schedule(2, 0, 20);
        timers.schedule(9, 0, 500);

        assert_eq!(timers.next_deadline(), Some(10));
        assert_eq!(timers.drain_due(30).as_slice(), [1, 2, 3]);
        assert_eq!(timers.next_deadline(), Some(500));
        assert_eq!(timers.deadline(&9), Some(500));
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let mut timers: TimerSet<u32> = TimerSet::new();
        timers.schedule(1, Millis::MAX - 5, 100);
        assert_eq!(timers.next_deadline(), Some(Millis::MAX));
    }
}
