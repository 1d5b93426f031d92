// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Capabilities consumed by the rectangle set operations.
//!
//! Inputs only need [`Bounds`]; outputs only need [`SetBounds`]. Arithmetic
//! on bounds wraps on `i32` overflow instead of panicking.

/// Read-only access to an axis-aligned integer rectangle's extents.
///
/// `max_*` is exclusive: a rectangle at `x = 0` with width `10` has
/// `min_x() == 0` and `max_x() == 10`.
pub trait Bounds {
    /// Smallest x coordinate.
    fn min_x(&self) -> i32;

    /// Smallest y coordinate.
    fn min_y(&self) -> i32;

    /// `min_x() + width`.
    fn max_x(&self) -> i32;

    /// `min_y() + height`.
    fn max_y(&self) -> i32;

    /// Horizontal extent. Negative for the empty result of a disjoint
    /// intersection.
    fn width(&self) -> i32 {
        self.max_x().wrapping_sub(self.min_x())
    }

    /// Vertical extent. Negative for the empty result of a disjoint
    /// intersection.
    fn height(&self) -> i32 {
        self.max_y().wrapping_sub(self.min_y())
    }

    /// `true` when the rectangle covers no area (either extent `<= 0`).
    fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Whether the point lies inside, with inclusive min and exclusive max
    /// edges.
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x() && y >= self.min_y() && x < self.max_x() && y < self.max_y()
    }

    /// Whether the two rectangles share any area. Empty rectangles intersect
    /// nothing.
    fn intersects(&self, other: &impl Bounds) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }
}

/// Write access used by the set operations to emit a result.
pub trait SetBounds {
    /// Replaces the origin and extents. Implementations must accept negative
    /// extents unchanged.
    fn set_bounds(&mut self, x: i32, y: i32, width: i32, height: i32);
}

impl<T: Bounds + ?Sized> Bounds for &T {
    fn min_x(&self) -> i32 {
        (**self).min_x()
    }

    fn min_y(&self) -> i32 {
        (**self).min_y()
    }

    fn max_x(&self) -> i32 {
        (**self).max_x()
    }

    fn max_y(&self) -> i32 {
        (**self).max_y()
    }
}
