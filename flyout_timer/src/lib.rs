// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flyout Timer: timers that never touch a clock.
//!
//! Interaction state machines need a little asynchrony: a submenu closes a
//! moment after the pointer leaves, a search query commits once typing pauses.
//! This crate expresses those as plain deadlines against host-supplied
//! timestamps (milliseconds from any monotonic origin). The host feeds the
//! current time in, polls for due work, and asks for the next deadline to
//! schedule its own wakeup. Nothing runs in the background, so nothing can
//! fire after its owner is gone.
//!
//! - [`TimerSet`]: at most one pending deadline per key. Rescheduling a key
//!   replaces its deadline; cancelling removes it.
//! - [`Debounce`]: a single trailing-edge slot. Every push restarts the
//!   window, and only the last value is delivered.
//!
//! ```rust
//! use flyout_timer::{Debounce, TimerSet};
//!
//! let mut timers: TimerSet<&str> = TimerSet::new();
//! timers.schedule("tools", 1_000, 150);
//! assert!(timers.drain_due(1_100).is_empty());
//! assert_eq!(timers.drain_due(1_150).as_slice(), ["tools"]);
//!
//! let mut query = Debounce::new(300);
//! query.push("a", 0);
//! query.push("ab", 200);
//! assert_eq!(query.poll(400), None);
//! assert_eq!(query.poll(500), Some("ab"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod debounce;
mod timer_set;

pub use debounce::Debounce;
pub use timer_set::TimerSet;

/// Milliseconds on the host's monotonic clock.
pub type Millis = u64;
