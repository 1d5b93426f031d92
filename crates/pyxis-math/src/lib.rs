// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Vector core for Pyxis.

This crate provides:
- A read-only capability trait (`Xyz`) for any 3-component `f32` vector.
- Derived arithmetic over that capability (`Vec3Ops`): dot/cross/triple
  products, norms, distances, interpolation, scaling, component export.
- A concrete mutable vector (`Vec3`) that doubles as the output sink.

Design notes:
- Each vector-valued operation has an `*_into` form writing into a
  caller-supplied `Vec3`; the plain form is a wrapper around it.
- Degenerate inputs are not errors. Zero-length normalisation and angles
  yield NaN per IEEE-754; only component indexing is validated.
- Float32 throughout; `sqrt`/`acos` go through `libm` for platform-stable
  rounding.
"]

mod error;
mod ops;
mod vec3;
mod xyz;

pub use error::{MathError, MathResult};
pub use ops::Vec3Ops;
pub use vec3::Vec3;
pub use xyz::Xyz;

/// Absolute tolerance used by the approximate helpers (`Vec3::approx_eq`,
/// `Vec3::is_zero_approx`). Exact operations never consult it.
pub const EPSILON: f32 = 1e-6;

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// NaN inputs are returned unchanged.
///
/// # Errors
/// [`MathError::InvalidRange`] if `min > max` or either bound is NaN.
pub fn clamp(value: f32, min: f32, max: f32) -> MathResult<f32> {
    if min <= max {
        Ok(value.clamp(min, max))
    } else {
        Err(MathError::InvalidRange { min, max })
    }
}

/// Commonly used imports.
pub mod prelude {
    pub use crate::{Vec3, Vec3Ops, Xyz};
}
