//! Convenience re-exports for glob imports.

pub use crate::numerics::types::error::DimensionMismatch;
pub use crate::numerics::types::traits::{Real, Scalar, NORMALIZE_EPSILON};
pub use crate::numerics::types::vector::{cross, dot, Vector, Vector2, Vector3, Vector4};
