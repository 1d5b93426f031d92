// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops;

use bytemuck::{Pod, Zeroable};
use tracing::debug;

use crate::{MathError, MathResult, Vec3Ops, Xyz, EPSILON};

/// Mutable 3D vector of `f32` components.
///
/// * Serves both as an operand (through [`Xyz`]) and as the output sink of
///   the `*_into` operations in [`Vec3Ops`].
/// * `#[repr(C)]` and [`Pod`]: a `&[Vec3]` can be viewed as a flat `&[f32]`
///   in `(x, y, z)` order with [`bytemuck::cast_slice`].
/// * Equality is bitwise per component (see [`Vec3Ops::bits_eq`]), so `Vec3`
///   is `Eq + Hash` and usable as a map key.
#[repr(C)]
#[derive(Copy, Clone, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vec3 {
    data: [f32; 3],
}

const _: () = assert!(core::mem::size_of::<Vec3>() == 12);

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// All components set to one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Copies the components of any [`Xyz`] value.
    pub fn from_xyz(v: &impl Xyz) -> Self {
        Self::new(v.x(), v.y(), v.z())
    }

    pub(crate) fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// Overwrites all three components and returns `self` for chaining.
    pub fn set(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.data = [x, y, z];
        self
    }

    /// Copies the components of `other` into `self`.
    pub fn set_from(&mut self, other: &impl Xyz) -> &mut Self {
        self.set(other.x(), other.y(), other.z())
    }

    /// Copies the first three values of `values`.
    ///
    /// # Errors
    /// [`MathError::SliceTooShort`] if `values` holds fewer than three
    /// elements; `self` is left untouched.
    pub fn set_from_slice(&mut self, values: &[f32]) -> MathResult<&mut Self> {
        match values {
            [x, y, z, ..] => Ok(self.set(*x, *y, *z)),
            _ => {
                debug!(len = values.len(), "rejected short vec3 slice");
                Err(MathError::SliceTooShort { len: values.len() })
            }
        }
    }

    /// Sets component `idx` (`0 → x`, `1 → y`, `2 → z`).
    ///
    /// # Errors
    /// [`MathError::IndexOutOfBounds`] for any other index.
    pub fn set_component(&mut self, idx: usize, value: f32) -> MathResult<&mut Self> {
        match self.data.get_mut(idx) {
            Some(slot) => {
                *slot = value;
                Ok(self)
            }
            None => {
                debug!(index = idx, "rejected vec3 component write");
                Err(MathError::IndexOutOfBounds { index: idx })
            }
        }
    }

    /// Sets the x component.
    pub fn set_x(&mut self, x: f32) -> &mut Self {
        self.data[0] = x;
        self
    }

    /// Sets the y component.
    pub fn set_y(&mut self, y: f32) -> &mut Self {
        self.data[1] = y;
        self
    }

    /// Sets the z component.
    pub fn set_z(&mut self, z: f32) -> &mut Self {
        self.data[2] = z;
        self
    }

    /// Negates in place.
    pub fn negate_local(&mut self) -> &mut Self {
        let v = *self;
        v.negate_into(self)
    }

    /// Normalises in place. Zero-length vectors become NaN, as with
    /// [`Vec3Ops::normalize`].
    pub fn normalize_local(&mut self) -> &mut Self {
        let v = *self;
        v.normalize_into(self)
    }

    /// Scales in place.
    pub fn mult_local(&mut self, v: f32) -> &mut Self {
        let s = *self;
        s.mult_into(v, self)
    }

    /// Adds `other` in place.
    pub fn add_local(&mut self, other: &impl Xyz) -> &mut Self {
        let s = *self;
        s.add_into(other, self)
    }

    /// Subtracts `other` in place.
    pub fn subtract_local(&mut self, other: &impl Xyz) -> &mut Self {
        let s = *self;
        s.subtract_into(other, self)
    }

    /// Replaces `self` with `self × other`.
    pub fn cross_local(&mut self, other: &impl Xyz) -> &mut Self {
        let s = *self;
        s.cross_into(other, self)
    }

    /// Interpolates towards `other` in place.
    pub fn lerp_local(&mut self, other: &impl Xyz, t: f32) -> &mut Self {
        let s = *self;
        s.lerp_into(other, t, self)
    }

    /// `true` when every component is within [`EPSILON`] of zero.
    pub fn is_zero_approx(&self) -> bool {
        self.data.iter().all(|c| c.abs() <= EPSILON)
    }

    /// Componentwise comparison with an absolute tolerance of [`EPSILON`].
    ///
    /// Unlike `==` this treats `0.0` and `-0.0` as equal and never matches NaN.
    pub fn approx_eq(&self, other: &impl Xyz) -> bool {
        (self.x() - other.x()).abs() <= EPSILON
            && (self.y() - other.y()).abs() <= EPSILON
            && (self.z() - other.z()).abs() <= EPSILON
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<(f32, f32, f32)> for Vec3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

impl PartialEq for Vec3 {
    fn eq(&self, other: &Self) -> bool {
        self.bits_eq(other)
    }
}

impl Eq for Vec3 {}

impl Hash for Vec3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Renders as `[x, y, z]`.
impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?}, {:?}]", self.x(), self.y(), self.z())
    }
}

impl fmt::Debug for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vec3")
            .field(&self.x())
            .field(&self.y())
            .field(&self.z())
            .finish()
    }
}

impl ops::Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vec3Ops::add(&self, &rhs)
    }
}

impl ops::Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(&rhs)
    }
}

impl ops::Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.mult(rhs)
    }
}

impl ops::Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.mult(self)
    }
}

impl ops::Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        self.add_local(&rhs);
    }
}

impl ops::SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.subtract_local(&rhs);
    }
}

impl ops::MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        self.mult_local(rhs);
    }
}
