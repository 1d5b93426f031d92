// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Integer rectangles for Pyxis.

This crate provides:
- Bounds capabilities (`Bounds` for reading, `SetBounds` for writing).
- A concrete caller-owned rectangle (`Rect`).
- Stateless set operations (`rects::intersect`, `rects::union`) that write
  into a caller-supplied destination.

Design notes:
- A disjoint intersection yields negative width/height. That is the only
  empty-result signal; check `Bounds::is_empty` before treating a result as
  a region.
- Independent of `pyxis-math`; rectangles and vectors share no types.
"]

mod bounds;
mod rect;
pub mod rects;

pub use bounds::{Bounds, SetBounds};
pub use rect::Rect;
