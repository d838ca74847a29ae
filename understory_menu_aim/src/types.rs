// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: submenu direction, activation decisions, and options.
//!
//! ## Overview
//!
//! These types describe how a menu is configured and what the
//! [decider](crate::decider) tells the [controller](crate::controller).

/// Number of pointer samples retained by a [`MouseTrace`](crate::trace::MouseTrace).
pub const TRACE_LEN: usize = 3;

/// Delay, in milliseconds, before re-checking a row whose activation was held back.
pub const ACTIVATION_DELAY_MS: u64 = 300;

/// Default pixel padding added above and below the menu bounds.
pub const DEFAULT_TOLERANCE: f64 = 75.0;

/// Side of the main menu on which submenus open.
///
/// Selects which two corners of the menu bounds are used as the
/// decreasing/increasing references; see [`Direction::reference_corners`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Direction {
    /// Submenu opens to the left of the menu.
    Left,
    /// Submenu opens to the right of the menu.
    #[default]
    Right,
    /// Submenu opens above the menu.
    Above,
    /// Submenu opens below the menu.
    Below,
}

/// Outcome of [`decide`](crate::decider::decide).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Decision {
    /// Activate the hovered row right away.
    ActivateNow,
    /// Hold activation back and check again after this many milliseconds.
    Delay(u64),
}

impl Decision {
    /// Returns `true` for [`Decision::ActivateNow`].
    pub fn is_activate_now(self) -> bool {
        matches!(self, Self::ActivateNow)
    }

    /// Delay in milliseconds; `0` for [`Decision::ActivateNow`].
    pub fn delay_ms(self) -> u64 {
        match self {
            Self::ActivateNow => 0,
            Self::Delay(ms) => ms,
        }
    }
}

/// Rejected [`MenuAimOptions`].
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum OptionsError {
    /// Tolerance was negative, infinite, or NaN.
    #[error("tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
    /// An exit delay of zero milliseconds; use `None` to exit synchronously.
    #[error("exit delay must be greater than zero; use `None` for an immediate exit")]
    ZeroExitDelay,
}

/// Behavior of a single menu, frozen when a [`MenuAim`](crate::controller::MenuAim) is built.
///
/// Callbacks are not part of the options; they are supplied through a
/// [`MenuHandler`](crate::controller::MenuHandler).
///
/// ```
/// use understory_menu_aim::types::{Direction, MenuAimOptions};
///
/// let opts = MenuAimOptions::default()
///     .with_direction(Direction::Below)
///     .with_exit_delay(Some(250));
/// assert_eq!(opts.tolerance, 75.0);
/// assert!(opts.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MenuAimOptions {
    /// Side on which submenus open.
    pub direction: Direction,
    /// Pixel padding added above and below the menu bounds. Bigger is more forgiving.
    pub tolerance: f64,
    /// Milliseconds to wait after the pointer leaves the menu before exiting; `None` exits at once.
    pub exit_delay: Option<u64>,
    /// Whether this menu owns the menu-wide pointer-leave handling.
    ///
    /// Nested menus set this to `false`; their root hides them.
    pub is_root: bool,
}

impl Default for MenuAimOptions {
    fn default() -> Self {
        Self {
            direction: Direction::Right,
            tolerance: DEFAULT_TOLERANCE,
            exit_delay: None,
            is_root: true,
        }
    }
}

impl MenuAimOptions {
    /// Set the submenu direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the tolerance in pixels.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the exit delay in milliseconds.
    pub fn with_exit_delay(mut self, exit_delay: Option<u64>) -> Self {
        self.exit_delay = exit_delay;
        self
    }

    /// Mark the menu as root (or nested).
    pub fn with_root(mut self, is_root: bool) -> Self {
        self.is_root = is_root;
        self
    }

    /// Check the options for values the decision engine cannot use.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(OptionsError::InvalidTolerance(self.tolerance));
        }
        if self.exit_delay == Some(0) {
            return Err(OptionsError::ZeroExitDelay);
        }
        Ok(())
    }
}
