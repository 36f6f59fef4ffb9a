// src/numerics/types/traits.rs
// Scalar bounds shared by the numerics types.

use num_traits::{Float, Num, NumAssign, NumCast};

/// Length below which `normalized` gives up and returns the zero vector.
pub const NORMALIZE_EPSILON: f64 = 1e-8;

/// Scalar is the element bound of every `Vector`.
///
/// Any copyable numeric type with the usual arithmetic and compound
/// assignment operators qualifies, integers included. `zero()` and `one()`
/// come from `num_traits`.
pub trait Scalar: Copy + PartialOrd + Num + NumAssign {}

impl<T> Scalar for T where T: Copy + PartialOrd + Num + NumAssign {}

/// Real is a floating point `Scalar`, required wherever a square root is taken.
pub trait Real: Scalar + Float {
    /// Threshold used by normalization, converted to `Self`.
    ///
    /// Falls back to the machine epsilon for types that cannot represent
    /// `NORMALIZE_EPSILON`.
    fn normalize_epsilon() -> Self {
        <Self as NumCast>::from(NORMALIZE_EPSILON).unwrap_or_else(Self::epsilon)
    }
}

impl<T> Real for T where T: Scalar + Float {}
