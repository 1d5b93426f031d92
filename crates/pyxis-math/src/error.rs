// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Error taxonomy for the vector core.
//!
//! Only component addressing and clamp ranges are validated. Numerical
//! degeneracy (zero-length normalisation, undefined angles) is reported
//! through IEEE-754 special values instead of errors.

/// Errors raised by validated vector accessors.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MathError {
    /// A component index outside `0..3` was requested.
    #[error("[VEC3_INDEX_OUT_OF_BOUNDS] component index {index} is not in 0..3")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
    },
    /// A slice used to populate a vector held fewer than three values.
    #[error("[VEC3_SLICE_TOO_SHORT] need 3 components, slice has {len}")]
    SliceTooShort {
        /// Length of the rejected slice.
        len: usize,
    },
    /// A clamp range whose lower bound exceeds its upper bound.
    #[error("[CLAMP_INVALID_RANGE] min {min} > max {max}")]
    InvalidRange {
        /// Requested lower bound.
        min: f32,
        /// Requested upper bound.
        max: f32,
    },
}

/// Result alias for fallible vector accessors.
pub type MathResult<T> = Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_offending_index() {
        let err = MathError::IndexOutOfBounds { index: 7 };
        let msg = err.to_string();
        assert!(msg.contains("VEC3_INDEX_OUT_OF_BOUNDS"));
        assert!(msg.contains('7'));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<MathError>();
    }
}
