// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Read-only capability shared by every 3-component vector representation.
//!
//! The derived arithmetic in [`crate::Vec3Ops`] depends on nothing but these
//! three accessors, so plain arrays, tuples, borrowed vectors and [`crate::Vec3`]
//! can be mixed freely as operands.

use crate::Vec3;

/// Read access to the `x`, `y` and `z` components of a vector.
pub trait Xyz {
    /// The x component.
    fn x(&self) -> f32;

    /// The y component.
    fn y(&self) -> f32;

    /// The z component.
    fn z(&self) -> f32;
}

impl Xyz for Vec3 {
    #[inline]
    fn x(&self) -> f32 {
        self.component(0)
    }

    #[inline]
    fn y(&self) -> f32 {
        self.component(1)
    }

    #[inline]
    fn z(&self) -> f32 {
        self.component(2)
    }
}

impl Xyz for [f32; 3] {
    #[inline]
    fn x(&self) -> f32 {
        self[0]
    }

    #[inline]
    fn y(&self) -> f32 {
        self[1]
    }

    #[inline]
    fn z(&self) -> f32 {
        self[2]
    }
}

impl Xyz for (f32, f32, f32) {
    #[inline]
    fn x(&self) -> f32 {
        self.0
    }

    #[inline]
    fn y(&self) -> f32 {
        self.1
    }

    #[inline]
    fn z(&self) -> f32 {
        self.2
    }
}

impl<T: Xyz + ?Sized> Xyz for &T {
    #[inline]
    fn x(&self) -> f32 {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> f32 {
        (**self).y()
    }

    #[inline]
    fn z(&self) -> f32 {
        (**self).z()
    }
}

impl<T: Xyz + ?Sized> Xyz for &mut T {
    #[inline]
    fn x(&self) -> f32 {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> f32 {
        (**self).y()
    }

    #[inline]
    fn z(&self) -> f32 {
        (**self).z()
    }
}
