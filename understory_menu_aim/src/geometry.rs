// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slope geometry over the tolerance-expanded menu bounds.
//!
//! All values are in document space: viewport coordinates plus the scroll
//! offset. Use [`document_rect`] and [`document_point`] to convert.
//!
//! Because the y axis grows downward, a pointer moving toward a submenu that
//! opens on the right sees its slope to the upper-right corner *decrease* and
//! its slope to the lower-right corner *increase*.

use kurbo::{Point, Rect, Vec2};

use crate::types::Direction;

/// Corners of a menu's bounds, expanded vertically by a tolerance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Corners {
    /// `(x0, y0 - tolerance)`.
    pub upper_left: Point,
    /// `(x1, y0 - tolerance)`.
    pub upper_right: Point,
    /// `(x0, y1 + tolerance)`.
    pub lower_left: Point,
    /// `(x1, y1 + tolerance)`.
    pub lower_right: Point,
}

impl Corners {
    /// Compute the corners of `rect` with `tolerance` added above and below.
    ///
    /// `rect` is normalized first, so flipped bounds give the same corners.
    pub fn new(rect: Rect, tolerance: f64) -> Self {
        let rect = rect.abs();
        let top = rect.y0 - tolerance;
        let bottom = rect.y1 + tolerance;
        Self {
            upper_left: Point::new(rect.x0, top),
            upper_right: Point::new(rect.x1, top),
            lower_left: Point::new(rect.x0, bottom),
            lower_right: Point::new(rect.x1, bottom),
        }
    }

    /// The expanded bounds as a rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.upper_left, self.lower_right)
    }

    /// Inclusive containment test against the expanded bounds.
    ///
    /// Unlike [`Rect::contains`], points on the right and bottom edges count as inside.
    pub fn contains(&self, p: Point) -> bool {
        !(p.x < self.upper_left.x
            || p.x > self.lower_right.x
            || p.y < self.upper_left.y
            || p.y > self.lower_right.y)
    }
}

impl Direction {
    /// The `(decreasing, increasing)` reference corners for this direction.
    ///
    /// | direction | decreasing | increasing |
    /// |---|---|---|
    /// | right | upper right | lower right |
    /// | left | lower left | upper left |
    /// | below | lower right | lower left |
    /// | above | upper left | upper right |
    pub fn reference_corners(self, corners: &Corners) -> (Point, Point) {
        match self {
            Self::Right => (corners.upper_right, corners.lower_right),
            Self::Left => (corners.lower_left, corners.upper_left),
            Self::Below => (corners.lower_right, corners.lower_left),
            Self::Above => (corners.upper_left, corners.upper_right),
        }
    }
}

/// Slope of the line from `a` to `b`.
///
/// When `a.x == b.x` the result is `±inf` (or `NaN` if the points coincide).
/// Callers compare it with the usual IEEE rules: infinities order normally and
/// any comparison against `NaN` is false.
pub fn slope(a: Point, b: Point) -> f64 {
    (b.y - a.y) / (b.x - a.x)
}

/// Convert viewport-relative element bounds to document space.
pub fn document_rect(viewport_bounds: Rect, scroll: Vec2) -> Rect {
    viewport_bounds + scroll
}

/// Convert a viewport-relative pointer position to document space.
pub fn document_point(viewport_point: Point, scroll: Vec2) -> Point {
    viewport_point + scroll
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Rect {
        Rect::from_origin_size((0.0, 0.0), (100.0, 20.0))
    }

    #[test]
    fn corners_expand_vertically_only() {
        let c = Corners::new(menu(), 75.0);
        assert_eq!(c.upper_left, Point::new(0.0, -75.0));
        assert_eq!(c.upper_right, Point::new(100.0, -75.0));
        assert_eq!(c.lower_left, Point::new(0.0, 95.0));
        assert_eq!(c.lower_right, Point::new(100.0, 95.0));
        assert_eq!(c.bounds(), Rect::new(0.0, -75.0, 100.0, 95.0));
    }

    #[test]
    fn flipped_rect_gives_same_corners() {
        let flipped = Rect::new(100.0, 20.0, 0.0, 0.0);
        let c = Corners::new(flipped, 75.0);
        assert_eq!(c, Corners::new(menu(), 75.0));
        assert!(c.contains(Point::new(50.0, 10.0)));
    }

    #[test]
    fn contains_is_inclusive() {
        let c = Corners::new(menu(), 75.0);
        assert!(c.contains(Point::new(0.0, -75.0)));
        assert!(c.contains(Point::new(100.0, 95.0)));
        assert!(c.contains(Point::new(50.0, 10.0)));
        assert!(!c.contains(Point::new(100.5, 10.0)));
        assert!(!c.contains(Point::new(50.0, -75.5)));
        assert!(!c.contains(Point::new(-0.1, 10.0)));
    }

    #[test]
    fn reference_corners_per_direction() {
        let c = Corners::new(menu(), 10.0);
        assert_eq!(
            Direction::Right.reference_corners(&c),
            (c.upper_right, c.lower_right)
        );
        assert_eq!(
            Direction::Left.reference_corners(&c),
            (c.lower_left, c.upper_left)
        );
        assert_eq!(
            Direction::Below.reference_corners(&c),
            (c.lower_right, c.lower_left)
        );
        assert_eq!(
            Direction::Above.reference_corners(&c),
            (c.upper_left, c.upper_right)
        );
    }

    #[test]
    fn slope_basic() {
        assert_eq!(slope(Point::new(0.0, 0.0), Point::new(2.0, 4.0)), 2.0);
        assert_eq!(slope(Point::new(90.0, 40.0), Point::new(100.0, -75.0)), -11.5);
    }

    // Vertical alignment must not panic; it yields infinities or NaN.
    #[test]
    fn slope_degenerate_is_non_finite() {
        let down = slope(Point::new(5.0, 0.0), Point::new(5.0, 10.0));
        let up = slope(Point::new(5.0, 0.0), Point::new(5.0, -10.0));
        let same = slope(Point::new(5.0, 5.0), Point::new(5.0, 5.0));
        assert_eq!(down, f64::INFINITY);
        assert_eq!(up, f64::NEG_INFINITY);
        assert!(same.is_nan());
        assert_eq!(same.partial_cmp(&0.0), None, "NaN is unordered");
    }

    #[test]
    fn document_space_adds_scroll() {
        let scroll = Vec2::new(0.0, 300.0);
        assert_eq!(
            document_rect(Rect::new(10.0, 20.0, 110.0, 40.0), scroll),
            Rect::new(10.0, 320.0, 110.0, 340.0)
        );
        assert_eq!(
            document_point(Point::new(5.0, 5.0), scroll),
            Point::new(5.0, 305.0)
        );
    }
}
