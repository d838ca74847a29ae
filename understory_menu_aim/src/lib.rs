// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_menu_aim --heading-base-level=0

//! Understory Menu Aim: intent-aware hover activation for nested dropdown menus.
//!
//! ## Overview
//!
//! Moving the pointer diagonally from an active row toward its open submenu
//! crosses sibling rows. Activating each sibling on hover would close the
//! submenu before the pointer reaches it. This crate watches the pointer's
//! trajectory and delays activation of a newly hovered row while the pointer
//! is converging on the open submenu.
//!
//! It does not render menus, locate rows, or read a clock. Feed it pointer
//! positions, menu bounds and row notifications, and it tells a
//! [`MenuHandler`](crate::controller::MenuHandler) when rows activate and
//! deactivate.
//!
//! ## Pieces
//!
//! - [`trace`]: the last three pointer positions, shared by every menu on an
//!   event loop through a leased [`TraceService`](crate::trace::TraceService).
//! - [`geometry`]: tolerance-expanded menu corners and slopes.
//! - [`decider`]: the activate-now-or-delay heuristic.
//! - [`timer`]: single-slot cancellable deadlines.
//! - [`controller`]: [`MenuAim`](crate::controller::MenuAim), the per-menu state machine.
//! - [`types`]: directions, decisions and options.
//!
//! ## Workflow
//!
//! 1) Create one [`TraceService`](crate::trace::TraceService) and build a
//!    [`MenuAim`](crate::controller::MenuAim) per menu. The first lease tells
//!    you to start listening for pointer moves.
//! 2) On every pointer move, convert to document space
//!    ([`geometry::document_point`]) and call
//!    [`TraceService::record`](crate::trace::TraceService::record).
//! 3) Forward row enter/leave/click and menu leave notifications with a
//!    millisecond timestamp.
//! 4) Call [`MenuAim::poll_timers`](crate::controller::MenuAim::poll_timers)
//!    when [`MenuAim::next_deadline`](crate::controller::MenuAim::next_deadline) passes.
//! 5) [`MenuAim::detach`](crate::controller::MenuAim::detach) when the menu goes away.
//!    The last release tells you to stop listening.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_menu_aim::controller::{MenuAim, NoopHandler};
//! use understory_menu_aim::trace::TraceService;
//! use understory_menu_aim::types::{Direction, MenuAimOptions};
//!
//! let trace = TraceService::new();
//! let menu = Rect::from_origin_size((0.0, 0.0), (100.0, 20.0));
//! let options = MenuAimOptions::default()
//!     .with_direction(Direction::Right)
//!     .with_exit_delay(Some(200));
//! let mut aim: MenuAim<u32, Rect> = MenuAim::new(&trace, menu, NoopHandler, options).unwrap();
//! assert!(trace.is_tracking());
//!
//! aim.on_row_pointer_enter(1, 0);
//! aim.on_menu_pointer_leave(50);
//! assert_eq!(aim.next_deadline(), Some(250));
//! aim.poll_timers(250);
//! assert!(!aim.is_exit_pending());
//!
//! aim.detach();
//! assert!(!trace.is_tracking());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod controller;
pub mod decider;
pub mod geometry;
pub mod timer;
pub mod trace;
pub mod types;
