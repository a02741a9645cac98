// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debounce.

use crate::Millis;

/// Delivers the most recent value once no new value has arrived for `delay`
/// milliseconds.
///
/// Each [`Debounce::push`] restarts the window. A value is delivered at most
/// once: [`Debounce::poll`] hands it out and leaves the slot empty.
#[derive(Clone, Debug)]
pub struct Debounce<T> {
    delay: Millis,
    pending: Option<Pending<T>>,
}

#[derive(Clone, Debug)]
struct Pending<T> {
    value: T,
    due: Millis,
}

impl<T> Debounce<T> {
    /// Create an empty debounce with the given quiet window.
    pub fn new(delay: Millis) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// The quiet window in milliseconds.
    pub fn delay(&self) -> Millis {
        self.delay
    }

    /// Change the quiet window. A pending value keeps its current deadline.
    pub fn set_delay(&mut self, delay: Millis) {
        self.delay = delay;
    }

    /// Replace the pending value and restart the window at `now`.
    pub fn push(&mut self, value: T, now: Millis) {
        self.pending = Some(Pending {
            value,
            due: now.saturating_add(self.delay),
        });
    }

    /// Restart the window of a pending value at `now`, keeping the value.
    ///
    /// Does nothing when no value is pending.
    pub fn restart(&mut self, now: Millis) {
        if let Some(pending) = &mut self.pending {
            pending.due = now.saturating_add(self.delay);
        }
    }

    /// Take the pending value if its window has elapsed.
    pub fn poll(&mut self, now: Millis) -> Option<T> {
        if self.pending.as_ref()?.due > now {
            return None;
        }
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value without delivering it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// When the pending value becomes due.
    pub fn deadline(&self) -> Option<Millis> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Whether a value is waiting.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The value waiting to be delivered.
    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.value)
    }
}
