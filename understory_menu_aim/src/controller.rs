// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-menu row activation state machine.
//!
//! ## Overview
//!
//! [`MenuAim`] tracks which row of a menu is active, holds back activation
//! while the pointer looks like it is heading into the open submenu, and
//! reports every transition to a [`MenuHandler`].
//!
//! Row transitions: idle → entered → (delaying ⇄ re-check) → activated →
//! deactivated. Menu-wide exit is tracked on its own: open → exit pending →
//! closed.
//!
//! ## Host responsibilities
//!
//! - Record pointer moves in the shared [`TraceService`] before delivering row
//!   notifications for the same native event.
//! - Forward row enter/leave/click and menu leave notifications, either through
//!   the `on_*` methods or [`MenuAim::handle`].
//! - Call [`MenuAim::poll_timers`] at or after [`MenuAim::next_deadline`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_menu_aim::controller::{MenuAim, MenuHandler};
//! use understory_menu_aim::trace::TraceService;
//! use understory_menu_aim::types::MenuAimOptions;
//!
//! #[derive(Default)]
//! struct Open(Vec<u32>);
//! impl MenuHandler<u32> for Open {
//!     fn activate(&mut self, row: &u32) -> Option<u32> {
//!         self.0.push(*row);
//!         None
//!     }
//! }
//!
//! let trace = TraceService::new();
//! let menu = Rect::from_origin_size((0.0, 0.0), (100.0, 20.0));
//! let mut aim: MenuAim<u32, Rect, Open> =
//!     MenuAim::new(&trace, menu, Open::default(), MenuAimOptions::default()).unwrap();
//!
//! trace.record(Point::new(10.0, 5.0));
//! aim.on_row_pointer_enter(1, 0);
//! assert_eq!(aim.active_row(), Some(&1));
//!
//! // Heading down-right into the submenu of row 1 while crossing row 2.
//! trace.record(Point::new(50.0, 10.0));
//! trace.record(Point::new(90.0, 40.0));
//! aim.on_row_pointer_enter(2, 10);
//! assert_eq!(aim.active_row(), Some(&1));
//! assert_eq!(aim.next_deadline(), Some(310));
//!
//! // The pointer stopped; the re-check activates row 2.
//! aim.poll_timers(310);
//! assert_eq!(aim.active_row(), Some(&2));
//! assert_eq!(aim.handler().0, [1, 2]);
//! ```

use core::fmt::Debug;

use kurbo::{Point, Rect};

use crate::decider::decide;
use crate::timer::Timer;
use crate::trace::TraceService;
use crate::types::{Decision, MenuAimOptions, OptionsError};

/// Geometry and row membership supplied by the host on demand.
///
/// Queried fresh on every decision; implementations should not cache layout.
pub trait MenuGeometry<R> {
    /// Document-space bounds of the menu (bounding box plus scroll offset).
    fn menu_rect(&self) -> Rect;

    /// Whether `row` is still one of this menu's submenu rows.
    ///
    /// Defaults to `true`, i.e. every row counts.
    fn is_submenu_row(&self, row: &R) -> bool {
        let _ = row;
        true
    }
}

/// A fixed menu rectangle in which every row is a submenu row.
impl<R> MenuGeometry<R> for Rect {
    fn menu_rect(&self) -> Rect {
        *self
    }
}

/// Callbacks invoked on row and menu transitions.
///
/// Every method defaults to a no-op. Callbacks run synchronously inside the
/// [`MenuAim`] call that triggered them; a panicking callback propagates.
pub trait MenuHandler<R> {
    /// The pointer entered `row`.
    fn enter(&mut self, _row: &R) {}

    /// The pointer left `row`. The row stays active.
    fn exit(&mut self, _row: &R) {}

    /// `row` became active.
    ///
    /// Return `Some(other)` to store `other` as the active row instead.
    fn activate(&mut self, _row: &R) -> Option<R> {
        None
    }

    /// `row` is no longer active.
    fn deactivate(&mut self, _row: &R) {}

    /// The pointer left the menu (after any exit delay).
    ///
    /// Return `true` to deactivate the active row; `false` keeps it active.
    fn exit_menu(&mut self) -> bool {
        false
    }

    /// `row` was clicked.
    fn click_row(&mut self, _row: &R) {}
}

/// A handler that ignores every transition.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopHandler;

impl<R> MenuHandler<R> for NoopHandler {}

/// A native notification translated for [`MenuAim::handle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEvent<R> {
    /// The pointer entered a row.
    RowEnter(R),
    /// The pointer left a row.
    RowLeave(R),
    /// A row was clicked.
    RowClick(R),
    /// The pointer left the menu.
    MenuLeave,
}

/// Row activation controller for one menu.
///
/// ## Usage
///
/// - Build with [`MenuAim::new`]; this attaches the controller and takes a
///   lease on the shared [`TraceService`].
/// - Forward notifications with the `on_*` methods or [`MenuAim::handle`].
/// - Drive timers with [`MenuAim::poll_timers`].
/// - Call [`MenuAim::detach`] when the menu is disposed.
///
/// At most one activation re-check and one menu exit are pending at a time;
/// scheduling either replaces its predecessor.
pub struct MenuAim<R, G, H = NoopHandler> {
    options: MenuAimOptions,
    trace: TraceService,
    geometry: G,
    handler: H,
    active_row: Option<R>,
    activation: Timer<R>,
    exit: Timer<()>,
    last_delay_loc: Option<Point>,
    attached: bool,
}

impl<R: Debug, G, H> Debug for MenuAim<R, G, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MenuAim")
            .field("options", &self.options)
            .field("active_row", &self.active_row)
            .field("activation", &self.activation)
            .field("exit", &self.exit)
            .field("last_delay_loc", &self.last_delay_loc)
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}

impl<R, G, H> MenuAim<R, G, H>
where
    R: Clone + PartialEq + Debug,
    G: MenuGeometry<R>,
    H: MenuHandler<R>,
{
    /// Validate `options` and build an attached controller.
    pub fn new(
        trace: &TraceService,
        geometry: G,
        handler: H,
        options: MenuAimOptions,
    ) -> Result<Self, OptionsError> {
        options.validate()?;
        let mut aim = Self {
            options,
            trace: trace.clone(),
            geometry,
            handler,
            active_row: None,
            activation: Timer::new(),
            exit: Timer::new(),
            last_delay_loc: None,
            attached: false,
        };
        aim.attach();
        Ok(aim)
    }

    /// Attach the controller, taking a trace lease. No-op if already attached.
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        self.trace.acquire();
        self.attached = true;
        tracing::debug!(is_root = self.options.is_root, "menu attached");
    }

    /// Detach the controller: cancel timers, forget the active row and give
    /// the trace lease back. Repeated calls are no-ops.
    ///
    /// No callbacks are invoked.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.activation.cancel();
        self.exit.cancel();
        self.last_delay_loc = None;
        self.active_row = None;
        self.trace.release();
        self.attached = false;
        tracing::debug!("menu detached");
    }

    /// Returns `true` between [`attach`](Self::attach) and [`detach`](Self::detach).
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Dispatch a translated notification to the matching `on_*` method.
    pub fn handle(&mut self, event: MenuEvent<R>, now: u64) {
        match event {
            MenuEvent::RowEnter(row) => self.on_row_pointer_enter(row, now),
            MenuEvent::RowLeave(row) => self.on_row_pointer_leave(&row),
            MenuEvent::RowClick(row) => self.on_row_click(row),
            MenuEvent::MenuLeave => self.on_menu_pointer_leave(now),
        }
    }

    /// The pointer entered `row` at `now`.
    ///
    /// Cancels any pending exit and activation re-check, reports
    /// [`MenuHandler::enter`], then [`possibly_activate`](Self::possibly_activate)s the row.
    pub fn on_row_pointer_enter(&mut self, row: R, now: u64) {
        if !self.attached {
            return;
        }
        self.exit.cancel();
        self.activation.cancel();
        self.handler.enter(&row);
        self.possibly_activate(row, now);
    }

    /// The pointer left `row`. Only [`MenuHandler::exit`] is reported.
    pub fn on_row_pointer_leave(&mut self, row: &R) {
        if !self.attached {
            return;
        }
        self.handler.exit(row);
    }

    /// `row` was clicked: activate it if needed, then report [`MenuHandler::click_row`].
    pub fn on_row_click(&mut self, row: R) {
        if !self.attached {
            return;
        }
        if self.active_row.as_ref() != Some(&row) {
            self.activate(row.clone());
        }
        self.handler.click_row(&row);
    }

    /// The pointer left the menu at `now`.
    ///
    /// Ignored unless the menu is root. Cancels a pending activation re-check,
    /// then either schedules the exit after the configured delay or commits it.
    pub fn on_menu_pointer_leave(&mut self, now: u64) {
        if !self.attached {
            return;
        }
        if !self.options.is_root {
            tracing::trace!("menu leave ignored on nested menu");
            return;
        }
        self.activation.cancel();
        match self.options.exit_delay {
            Some(delay) => {
                self.exit.schedule(now, delay, ());
                tracing::debug!(delay_ms = delay, "menu exit scheduled");
            }
            None => self.commit_exit(),
        }
    }

    /// Activate `row` now, or schedule a re-check if the pointer is heading
    /// into the open submenu.
    pub fn possibly_activate(&mut self, row: R, now: u64) {
        if !self.attached {
            return;
        }
        match self.activation_decision() {
            Decision::ActivateNow => self.activate(row),
            Decision::Delay(delay) => {
                tracing::debug!(?row, delay_ms = delay, "row activation delayed");
                self.activation.schedule(now, delay, row);
            }
        }
    }

    fn activation_decision(&mut self) -> Decision {
        let has_active_submenu = self
            .active_row
            .as_ref()
            .is_some_and(|row| self.geometry.is_submenu_row(row));
        let trace = self.trace.snapshot();
        decide(
            has_active_submenu,
            self.geometry.menu_rect(),
            self.options.tolerance,
            self.options.direction,
            &trace,
            &mut self.last_delay_loc,
        )
    }

    /// Make `row` the active row.
    ///
    /// No-op if it already is. Otherwise the previous row is deactivated first;
    /// the handler may substitute the stored row through its return value.
    pub fn activate(&mut self, row: R) {
        if self.active_row.as_ref() == Some(&row) {
            return;
        }
        if let Some(previous) = self.active_row.take() {
            self.handler.deactivate(&previous);
        }
        let stored = self.handler.activate(&row).unwrap_or(row);
        tracing::debug!(row = ?stored, "row activated");
        self.active_row = Some(stored);
    }

    /// Close the menu now: clear both timers and ask [`MenuHandler::exit_menu`]
    /// whether to deactivate the active row.
    pub fn commit_exit(&mut self) {
        self.activation.cancel();
        self.exit.cancel();
        if self.handler.exit_menu() {
            if let Some(row) = self.active_row.take() {
                self.handler.deactivate(&row);
            }
            tracing::debug!("menu exited");
        } else {
            tracing::debug!(row = ?self.active_row, "menu exited, active row kept");
        }
    }

    /// Programmatic close: cancel a pending exit delay and commit the exit.
    pub fn force_exit(&mut self) {
        self.exit.cancel();
        self.commit_exit();
    }

    /// Set the active row without reporting any transition, and clear both
    /// timers. For hosts whose row set changed underneath the menu.
    pub fn set_active_row(&mut self, row: R) {
        self.active_row = Some(row);
        self.activation.cancel();
        self.exit.cancel();
    }

    /// Deactivate the active row, if any, and forget it.
    pub fn deactivate_row(&mut self) {
        if let Some(row) = self.active_row.take() {
            self.handler.deactivate(&row);
        }
    }

    /// Fire every timer due at or before `now`, earliest deadline first.
    ///
    /// A fired re-check that delays again is rescheduled relative to `now`.
    /// Both timers can be pending at once when [`possibly_activate`](Self::possibly_activate)
    /// is called during an exit delay; ties go to the exit.
    pub fn poll_timers(&mut self, now: u64) {
        if !self.attached {
            return;
        }
        loop {
            let exit_due = self.exit.deadline().filter(|&due| due <= now);
            let activation_due = self.activation.deadline().filter(|&due| due <= now);
            match (exit_due, activation_due) {
                (None, None) => break,
                (Some(exit), Some(activation)) if activation < exit => self.fire_activation(now),
                (Some(_), _) => {
                    tracing::trace!("exit delay elapsed");
                    self.exit.cancel();
                    self.commit_exit();
                }
                (None, Some(_)) => self.fire_activation(now),
            }
        }
    }

    fn fire_activation(&mut self, now: u64) {
        if let Some(row) = self.activation.take_due(now) {
            tracing::trace!(?row, "re-checking delayed row");
            self.possibly_activate(row, now);
        }
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.activation.deadline(), self.exit.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Currently active row.
    pub fn active_row(&self) -> Option<&R> {
        self.active_row.as_ref()
    }

    /// Row awaiting a delayed activation re-check.
    pub fn pending_row(&self) -> Option<&R> {
        self.activation.payload()
    }

    /// Returns `true` while an activation re-check is pending.
    pub fn is_delaying(&self) -> bool {
        self.activation.is_pending()
    }

    /// Returns `true` while a delayed menu exit is pending.
    pub fn is_exit_pending(&self) -> bool {
        self.exit.is_pending()
    }

    /// Options frozen at construction.
    pub fn options(&self) -> &MenuAimOptions {
        &self.options
    }

    /// The handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// The geometry source.
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Mutable access to the geometry source.
    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }
}
