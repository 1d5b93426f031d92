// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use crate::{rects, Bounds, SetBounds};

/// Axis-aligned integer rectangle: origin plus extents.
///
/// Extents are normally non-negative. A negative `width` or `height` is the
/// way [`rects::intersect`] reports that two rectangles do not overlap, so
/// values are stored exactly as written and never clamped.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Rect {
    /// Creates a rectangle from origin and extents.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Moves the origin, keeping extents.
    pub fn set_location(&mut self, x: i32, y: i32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Replaces the extents, keeping the origin.
    pub fn set_size(&mut self, width: i32, height: i32) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Offsets the origin by `(dx, dy)`.
    pub fn translate(&mut self, dx: i32, dy: i32) -> &mut Self {
        self.x = self.x.wrapping_add(dx);
        self.y = self.y.wrapping_add(dy);
        self
    }

    /// Overlap of `self` and `other`. See [`rects::intersect`] for the
    /// negative-extent convention on disjoint inputs.
    #[must_use]
    pub fn intersection(&self, other: &impl Bounds) -> Self {
        let mut out = Self::default();
        rects::intersect(self, other, &mut out);
        out
    }

    /// Smallest rectangle covering both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &impl Bounds) -> Self {
        let mut out = Self::default();
        rects::union(self, other, &mut out);
        out
    }
}

impl Bounds for Rect {
    fn min_x(&self) -> i32 {
        self.x
    }

    fn min_y(&self) -> i32 {
        self.y
    }

    fn max_x(&self) -> i32 {
        self.x.wrapping_add(self.width)
    }

    fn max_y(&self) -> i32 {
        self.y.wrapping_add(self.height)
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }
}

impl SetBounds for Rect {
    fn set_bounds(&mut self, x: i32, y: i32, width: i32, height: i32) {
        *self = Self::new(x, y, width, height);
    }
}

/// X11 geometry form, `WxH+X+Y`.
impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}{:+}{:+}", self.width, self.height, self.x, self.y)
    }
}
