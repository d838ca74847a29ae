// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-slot, cancellable deadlines.
//!
//! Time is a host-supplied monotonic clock in milliseconds. The crate never
//! reads a clock itself; hosts pass `now` into every call that can schedule or
//! fire, which keeps tests deterministic.
//!
//! ```
//! use understory_menu_aim::timer::Timer;
//!
//! let mut t = Timer::new();
//! assert_eq!(t.schedule(0, 300, 'a'), None);
//! // Rescheduling replaces the pending payload.
//! assert_eq!(t.schedule(100, 300, 'b'), Some('a'));
//! assert_eq!(t.take_due(300), None);
//! assert_eq!(t.take_due(400), Some('b'));
//! assert!(!t.is_pending());
//! ```

#[derive(Clone, Debug, PartialEq, Eq)]
struct Pending<T> {
    due: u64,
    payload: T,
}

/// A timer with room for exactly one pending payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timer<T> {
    pending: Option<Pending<T>>,
}

impl<T> Default for Timer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timer<T> {
    /// Create an idle timer.
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule `payload` to come due `delay` ms after `now`.
    ///
    /// Any previously pending payload is cancelled and returned.
    pub fn schedule(&mut self, now: u64, delay: u64, payload: T) -> Option<T> {
        let previous = self.cancel();
        self.pending = Some(Pending {
            due: now.saturating_add(delay),
            payload,
        });
        previous
    }

    /// Cancel the pending payload, returning it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.payload)
    }

    /// Returns `true` if a payload is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending payload.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// The pending payload, if any.
    pub fn payload(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.payload)
    }

    /// Take the pending payload if its deadline is at or before `now`.
    pub fn take_due(&mut self, now: u64) -> Option<T> {
        if self.pending.as_ref()?.due <= now {
            self.cancel()
        } else {
            None
        }
    }
}
