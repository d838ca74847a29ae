// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Activation-delay heuristic.
//!
//! ## Overview
//!
//! When a submenu is already open and the pointer crosses a sibling row on its
//! way into that submenu, activating the sibling would snap the submenu shut.
//! [`decide`] compares the pointer's bearing toward two reference corners of
//! the menu bounds (see [`Direction::reference_corners`]) at the oldest and
//! latest trace samples. If both bearings are tightening at once the pointer is
//! heading into the submenu and activation is held back for
//! [`ACTIVATION_DELAY_MS`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_menu_aim::decider::decide;
//! use understory_menu_aim::trace::MouseTrace;
//! use understory_menu_aim::types::{Decision, Direction};
//!
//! let menu = Rect::from_origin_size((0.0, 0.0), (100.0, 20.0));
//! let mut trace = MouseTrace::new();
//! trace.record(Point::new(50.0, 10.0));
//! trace.record(Point::new(90.0, 40.0));
//!
//! let mut last_delay = None;
//! let first = decide(true, menu, 75.0, Direction::Right, &trace, &mut last_delay);
//! assert_eq!(first, Decision::Delay(300));
//!
//! // The pointer has not moved since: stop waiting.
//! let second = decide(true, menu, 75.0, Direction::Right, &trace, &mut last_delay);
//! assert_eq!(second, Decision::ActivateNow);
//! ```

use kurbo::{Point, Rect};

use crate::geometry::{Corners, slope};
use crate::trace::MouseTrace;
use crate::types::{ACTIVATION_DELAY_MS, Decision, Direction};

/// Decide whether a newly hovered row should be activated now or re-checked later.
///
/// - `has_active_submenu`: a row is active and is still one of the menu's submenu rows.
/// - `menu_rect`: current document-space bounds of the menu.
/// - `tolerance`: vertical padding applied to `menu_rect`.
/// - `last_delay_loc`: pointer location at the previous delay; updated in place.
///
/// Any missing input fails open to [`Decision::ActivateNow`].
pub fn decide(
    has_active_submenu: bool,
    menu_rect: Rect,
    tolerance: f64,
    direction: Direction,
    trace: &MouseTrace,
    last_delay_loc: &mut Option<Point>,
) -> Decision {
    if !has_active_submenu {
        return Decision::ActivateNow;
    }

    let Some(loc) = trace.latest() else {
        return Decision::ActivateNow;
    };
    let prev_loc = trace.oldest().unwrap_or(loc);

    let corners = Corners::new(menu_rect, tolerance);
    if !corners.contains(prev_loc) {
        // Pointer was outside the menu entirely; nothing to protect.
        return Decision::ActivateNow;
    }

    if *last_delay_loc == Some(loc) {
        // Stationary since the last delay.
        return Decision::ActivateNow;
    }

    let (decreasing_corner, increasing_corner) = direction.reference_corners(&corners);
    let decreasing_slope = slope(loc, decreasing_corner);
    let increasing_slope = slope(loc, increasing_corner);
    let prev_decreasing_slope = slope(prev_loc, decreasing_corner);
    let prev_increasing_slope = slope(prev_loc, increasing_corner);

    if decreasing_slope < prev_decreasing_slope && increasing_slope > prev_increasing_slope {
        *last_delay_loc = Some(loc);
        return Decision::Delay(ACTIVATION_DELAY_MS);
    }

    *last_delay_loc = None;
    Decision::ActivateNow
}
