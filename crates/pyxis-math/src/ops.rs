// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Derived vector arithmetic over the [`Xyz`] capability.
//!
//! Every vector-valued operation comes in two forms:
//! - `op_into(.., result)` writes into a caller-owned [`Vec3`] and returns it,
//!   so chains of operations never allocate or copy through temporaries.
//! - `op(..)` is sugar that writes into a fresh [`Vec3`].
//!
//! Inputs are never mutated. Results follow IEEE-754 `f32` semantics: NaN and
//! infinities propagate and degenerate inputs are not guarded against.

use tracing::debug;

use crate::{MathError, MathResult, Vec3, Xyz};

/// Arithmetic, metric and export operations available on every [`Xyz`] type.
///
/// Blanket-implemented; bring it into scope with `use pyxis_math::Vec3Ops`.
pub trait Vec3Ops: Xyz {
    /// Returns component `idx` (`0 → x`, `1 → y`, `2 → z`).
    ///
    /// # Errors
    /// [`MathError::IndexOutOfBounds`] for any other index.
    fn get(&self, idx: usize) -> MathResult<f32> {
        match idx {
            0 => Ok(self.x()),
            1 => Ok(self.y()),
            2 => Ok(self.z()),
            index => {
                debug!(index, "rejected vec3 component access");
                Err(MathError::IndexOutOfBounds { index })
            }
        }
    }

    /// Returns the components as an `[x, y, z]` array.
    fn to_array(&self) -> [f32; 3] {
        [self.x(), self.y(), self.z()]
    }

    /// Writes the components into `values` in `(x, y, z)` order.
    fn get_into(&self, values: &mut [f32; 3]) {
        values[0] = self.x();
        values[1] = self.y();
        values[2] = self.z();
    }

    /// Appends `x`, `y`, `z` to a growable scalar buffer and returns it.
    fn get_buf<'a, E: Extend<f32>>(&self, buf: &'a mut E) -> &'a mut E {
        buf.extend([self.x(), self.y(), self.z()]);
        buf
    }

    /// Dot product.
    fn dot(&self, other: &impl Xyz) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Cross product `self × other`.
    fn cross(&self, other: &impl Xyz) -> Vec3 {
        let mut result = Vec3::ZERO;
        self.cross_into(other, &mut result);
        result
    }

    /// Cross product written into `result`.
    fn cross_into<'r>(&self, other: &impl Xyz, result: &'r mut Vec3) -> &'r mut Vec3 {
        let (x, y, z) = (self.x(), self.y(), self.z());
        let (ox, oy, oz) = (other.x(), other.y(), other.z());
        result.set(y * oz - z * oy, z * ox - x * oz, x * oy - y * ox)
    }

    /// Scalar triple product `self · (b × c)`: the signed volume of the
    /// parallelepiped spanned by the three vectors.
    ///
    /// Evaluated as the expanded determinant rather than through
    /// [`Vec3Ops::cross`] so no intermediate vector is formed.
    fn triple(&self, b: &impl Xyz, c: &impl Xyz) -> f32 {
        let (bx, by, bz) = (b.x(), b.y(), b.z());
        let (cx, cy, cz) = (c.x(), c.y(), c.z());
        self.x() * (by * cz - bz * cy)
            + self.y() * (bz * cx - bx * cz)
            + self.z() * (bx * cy - by * cx)
    }

    /// Componentwise negation.
    fn negate(&self) -> Vec3 {
        let mut result = Vec3::ZERO;
        self.negate_into(&mut result);
        result
    }

    /// Componentwise negation written into `result`.
    fn negate_into<'r>(&self, result: &'r mut Vec3) -> &'r mut Vec3 {
        result.set(-self.x(), -self.y(), -self.z())
    }

    /// Unit vector in the direction of `self`.
    ///
    /// Computed as `self * (1 / length)`. A zero-length vector yields NaN
    /// components; check [`Vec3Ops::length_squared`] first if that matters.
    fn normalize(&self) -> Vec3 {
        let mut result = Vec3::ZERO;
        self.normalize_into(&mut result);
        result
    }

    /// Normalisation written into `result`.
    fn normalize_into<'r>(&self, result: &'r mut Vec3) -> &'r mut Vec3 {
        self.mult_into(1.0 / self.length(), result)
    }

    /// Angle between `self` and `other` in radians, within `[0, π]`.
    ///
    /// The cosine ratio is clamped to `[-1, 1]` so rounding on nearly
    /// parallel inputs cannot push `acos` out of its domain. Returns NaN when
    /// either vector has zero length.
    fn angle(&self, other: &impl Xyz) -> f32 {
        let denom = self.length() * other.length();
        let cos = self.dot(other) / denom;
        // NaN passes through `clamp` untouched.
        libm::acosf(cos.clamp(-1.0, 1.0))
    }

    /// Euclidean length.
    fn length(&self) -> f32 {
        libm::sqrtf(self.length_squared())
    }

    /// Squared Euclidean length; avoids the square root for comparisons.
    fn length_squared(&self) -> f32 {
        let (x, y, z) = (self.x(), self.y(), self.z());
        x * x + y * y + z * z
    }

    /// Euclidean distance to `other`.
    fn distance(&self, other: &impl Xyz) -> f32 {
        libm::sqrtf(self.distance_squared(other))
    }

    /// Squared Euclidean distance to `other`.
    fn distance_squared(&self, other: &impl Xyz) -> f32 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        let dz = self.z() - other.z();
        dx * dx + dy * dy + dz * dz
    }

    /// Manhattan (L1) distance to `other`.
    fn manhattan_distance(&self, other: &impl Xyz) -> f32 {
        (self.x() - other.x()).abs() + (self.y() - other.y()).abs() + (self.z() - other.z()).abs()
    }

    /// Scales every component by `v`.
    fn mult(&self, v: f32) -> Vec3 {
        let mut result = Vec3::ZERO;
        self.mult_into(v, &mut result);
        result
    }

    /// Scalar multiplication written into `result`.
    fn mult_into<'r>(&self, v: f32, result: &'r mut Vec3) -> &'r mut Vec3 {
        result.set(self.x() * v, self.y() * v, self.z() * v)
    }

    /// Componentwise product with `other`.
    fn mult_vec(&self, other: &impl Xyz) -> Vec3 {
        let mut result = Vec3::ZERO;
        self.mult_vec_into(other, &mut result);
        result
    }

    /// Componentwise product written into `result`.
    fn mult_vec_into<'r>(&self, other: &impl Xyz, result: &'r mut Vec3) -> &'r mut Vec3 {
        result.set(self.x() * other.x(), self.y() * other.y(), self.z() * other.z())
    }

    /// Sum `self + other`.
    fn add(&self, other: &impl Xyz) -> Vec3 {
        let mut result = Vec3::ZERO;
        self.add_into(other, &mut result);
        result
    }

    /// Sum written into `result`.
    fn add_into<'r>(&self, other: &impl Xyz, result: &'r mut Vec3) -> &'r mut Vec3 {
        self.add_xyz_into(other.x(), other.y(), other.z(), result)
    }

    /// Sum with explicit components.
    fn add_xyz(&self, x: f32, y: f32, z: f32) -> Vec3 {
        let mut result = Vec3::ZERO;
        self.add_xyz_into(x, y, z, &mut result);
        result
    }

    /// Sum with explicit components written into `result`.
    fn add_xyz_into<'r>(&self, x: f32, y: f32, z: f32, result: &'r mut Vec3) -> &'r mut Vec3 {
        result.set(self.x() + x, self.y() + y, self.z() + z)
    }

    /// Difference `self - other`.
    fn subtract(&self, other: &impl Xyz) -> Vec3 {
        let mut result = Vec3::ZERO;
        self.subtract_into(other, &mut result);
        result
    }

    /// Difference written into `result`.
    fn subtract_into<'r>(&self, other: &impl Xyz, result: &'r mut Vec3) -> &'r mut Vec3 {
        self.add_xyz_into(-other.x(), -other.y(), -other.z(), result)
    }

    /// Returns `self + other * v`.
    fn add_scaled(&self, other: &impl Xyz, v: f32) -> Vec3 {
        let mut result = Vec3::ZERO;
        self.add_scaled_into(other, v, &mut result);
        result
    }

    /// `self + other * v` written into `result`.
    fn add_scaled_into<'r>(
        &self,
        other: &impl Xyz,
        v: f32,
        result: &'r mut Vec3,
    ) -> &'r mut Vec3 {
        result.set(
            self.x() + other.x() * v,
            self.y() + other.y() * v,
            self.z() + other.z() * v,
        )
    }

    /// Linear interpolation `self + t * (other - self)`.
    ///
    /// `t` is not clamped: values outside `[0, 1]` extrapolate along the line.
    fn lerp(&self, other: &impl Xyz, t: f32) -> Vec3 {
        let mut result = Vec3::ZERO;
        self.lerp_into(other, t, &mut result);
        result
    }

    /// Interpolation written into `result`.
    fn lerp_into<'r>(&self, other: &impl Xyz, t: f32, result: &'r mut Vec3) -> &'r mut Vec3 {
        let (x, y, z) = (self.x(), self.y(), self.z());
        result.set(
            x + t * (other.x() - x),
            y + t * (other.y() - y),
            z + t * (other.z() - z),
        )
    }

    /// Bitwise component equality with any other vector representation.
    ///
    /// No tolerance is applied: `0.0` and `-0.0` differ, identical NaN
    /// payloads match. This is the relation behind `Vec3`'s `Eq`.
    fn bits_eq(&self, other: &impl Xyz) -> bool {
        self.x().to_bits() == other.x().to_bits()
            && self.y().to_bits() == other.y().to_bits()
            && self.z().to_bits() == other.z().to_bits()
    }

    /// XOR of the three components' raw bit patterns.
    ///
    /// Vectors that are [`Vec3Ops::bits_eq`] always share a hash code.
    fn hash_code(&self) -> i32 {
        (self.x().to_bits() ^ self.y().to_bits() ^ self.z().to_bits()) as i32
    }
}

impl<T: Xyz + ?Sized> Vec3Ops for T {}
