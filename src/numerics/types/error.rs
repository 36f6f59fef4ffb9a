// src/numerics/types/error.rs

use thiserror::Error;

/// Returned by the checked slice conversion when the slice length is not
/// the vector dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} components, found {found}")]
pub struct DimensionMismatch {
    pub expected: usize,
    pub found: usize,
}
