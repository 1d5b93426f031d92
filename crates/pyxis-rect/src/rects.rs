// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Set operations on pairs of axis-aligned rectangles.
//!
//! Both functions are O(1), read their inputs through [`Bounds`], and write
//! the result through [`SetBounds`] without looking at the destination's
//! previous contents. Inputs are not validated.

use tracing::trace;

use crate::{Bounds, SetBounds};

/// Writes the overlap of `a` and `b` into `dst`.
///
/// The result spans `[max(min), min(max)]` on each axis.
///
/// # Empty result
/// When the inputs do not overlap on an axis, the corresponding extent is
/// **negative** (or zero for rectangles that only touch). That negative
/// extent is the only "no intersection" signal; nothing is clamped. Test
/// the outcome with [`Bounds::is_empty`] before using it as a region.
///
/// ```
/// use pyxis_rect::{rects, Bounds, Rect};
///
/// let mut dst = Rect::default();
/// rects::intersect(&Rect::new(0, 0, 5, 5), &Rect::new(10, 10, 5, 5), &mut dst);
/// assert_eq!(dst, Rect::new(10, 10, -5, -5));
/// assert!(dst.is_empty());
/// ```
pub fn intersect(a: &impl Bounds, b: &impl Bounds, dst: &mut impl SetBounds) {
    let x1 = a.min_x().max(b.min_x());
    let y1 = a.min_y().max(b.min_y());
    let x2 = a.max_x().min(b.max_x());
    let y2 = a.max_y().min(b.max_y());
    let (w, h) = (x2.wrapping_sub(x1), y2.wrapping_sub(y1));
    if w <= 0 || h <= 0 {
        trace!(x1, y1, w, h, "rect intersection is empty");
    }
    dst.set_bounds(x1, y1, w, h);
}

/// Writes the smallest rectangle covering both `a` and `b` into `dst`.
///
/// The result spans `[min(min), max(max)]` on each axis. Empty inputs are not
/// skipped; their bounds participate like any other.
pub fn union(a: &impl Bounds, b: &impl Bounds, dst: &mut impl SetBounds) {
    let x1 = a.min_x().min(b.min_x());
    let y1 = a.min_y().min(b.min_y());
    let x2 = a.max_x().max(b.max_x());
    let y2 = a.max_y().max(b.max_y());
    dst.set_bounds(x1, y1, x2.wrapping_sub(x1), y2.wrapping_sub(y1));
}
