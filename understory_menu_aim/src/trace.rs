// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer trace: the last few pointer positions, shared across menus.
//!
//! ## Usage
//!
//! 1) Create one [`TraceService`] per event loop and hand a clone to every
//!    [`MenuAim`](crate::controller::MenuAim) you build.
//! 2) Feed every native pointer move into [`TraceService::record`] before
//!    delivering row enter/leave notifications for the same event.
//! 3) Use the return values of [`TraceService::acquire`] / [`TraceService::release`]
//!    to register and deregister your single pointer-move listener.
//!
//! ```
//! use kurbo::Point;
//! use understory_menu_aim::trace::TraceService;
//!
//! let trace = TraceService::new();
//! // Nothing is recorded until a menu holds a lease.
//! trace.record(Point::new(1.0, 1.0));
//! assert!(trace.snapshot().is_empty());
//!
//! assert!(trace.acquire(), "first lease starts tracking");
//! for x in 0..5 {
//!     trace.record(Point::new(f64::from(x), 0.0));
//! }
//! let snap = trace.snapshot();
//! assert_eq!(snap.len(), 3);
//! assert_eq!(snap.oldest(), Some(Point::new(2.0, 0.0)));
//! assert_eq!(snap.latest(), Some(Point::new(4.0, 0.0)));
//! assert!(trace.release(), "last lease stops tracking");
//! ```

use alloc::rc::Rc;
use core::cell::RefCell;

use kurbo::Point;

use crate::types::TRACE_LEN;

/// The last [`TRACE_LEN`] pointer positions, oldest to newest.
#[derive(Copy, Clone, Debug)]
pub struct MouseTrace {
    samples: [Point; TRACE_LEN],
    len: usize,
}

// Slots past `len` hold evicted or cleared samples and never take part.
impl PartialEq for MouseTrace {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Default for MouseTrace {
    fn default() -> Self {
        Self::new()
    }
}

impl MouseTrace {
    /// Create an empty trace.
    pub const fn new() -> Self {
        Self {
            samples: [Point::ORIGIN; TRACE_LEN],
            len: 0,
        }
    }

    /// Append a sample, evicting the oldest one when full.
    pub fn record(&mut self, sample: Point) {
        if self.len == TRACE_LEN {
            self.samples.rotate_left(1);
            self.samples[TRACE_LEN - 1] = sample;
        } else {
            self.samples[self.len] = sample;
            self.len += 1;
        }
    }

    /// Most recent sample.
    pub fn latest(&self) -> Option<Point> {
        self.as_slice().last().copied()
    }

    /// Oldest retained sample, used as the "previous" location.
    pub fn oldest(&self) -> Option<Point> {
        self.as_slice().first().copied()
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no sample has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Retained samples, oldest first.
    pub fn as_slice(&self) -> &[Point] {
        &self.samples[..self.len]
    }

    /// Iterate over retained samples, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.as_slice().iter().copied()
    }

    /// Drop every sample.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

#[derive(Debug, Default)]
struct Shared {
    trace: MouseTrace,
    leases: usize,
}

/// A reference-counted pointer trace shared by every menu on one event loop.
///
/// Cloning the service produces another handle to the same trace. Each
/// attached [`MenuAim`](crate::controller::MenuAim) holds one lease; samples
/// are only recorded while at least one lease is outstanding.
///
/// The service is `!Send`. Pointer moves, row notifications and timer polls
/// must all run on the same loop.
#[derive(Clone, Debug, Default)]
pub struct TraceService {
    shared: Rc<RefCell<Shared>>,
}

impl TraceService {
    /// Create a service with no leases and an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a lease. Returns `true` if this lease started tracking.
    pub fn acquire(&self) -> bool {
        let mut shared = self.shared.borrow_mut();
        shared.leases += 1;
        let first = shared.leases == 1;
        if first {
            tracing::debug!("pointer tracking started");
        }
        first
    }

    /// Give a lease back. Returns `true` if this release stopped tracking.
    ///
    /// Releasing without an outstanding lease does nothing and returns `false`.
    pub fn release(&self) -> bool {
        let mut shared = self.shared.borrow_mut();
        if shared.leases == 0 {
            return false;
        }
        shared.leases -= 1;
        let last = shared.leases == 0;
        if last {
            shared.trace.clear();
            tracing::debug!("pointer tracking stopped");
        }
        last
    }

    /// Number of outstanding leases.
    pub fn leases(&self) -> usize {
        self.shared.borrow().leases
    }

    /// Returns `true` while at least one lease is outstanding.
    pub fn is_tracking(&self) -> bool {
        self.leases() > 0
    }

    /// Record a pointer position in document space. Ignored while not tracking.
    pub fn record(&self, sample: Point) {
        let mut shared = self.shared.borrow_mut();
        if shared.leases > 0 {
            shared.trace.record(sample);
        }
    }

    /// Copy of the current trace.
    pub fn snapshot(&self) -> MouseTrace {
        self.shared.borrow().trace
    }
}
