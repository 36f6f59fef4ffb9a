//! Generic fixed-size numeric vectors for geometry and linear algebra.
//!
//! ```
//! use tinygeo::prelude::*;
//!
//! let right = Vector3::<f32>::new([1.0, 0.0, 0.0]);
//! let forward = Vector3::<f32>::new([0.0, 1.0, 0.0]);
//! assert_eq!(cross(&right, &forward), Vector3::<f32>::new([0.0, 0.0, 1.0]));
//! assert_eq!(right.to_string(), "[1, 0, 0]");
//! ```
//!
//! Dimension misuse is a build error. `cross` only exists for 3D vectors:
//!
//! ```compile_fail
//! use tinygeo::prelude::*;
//!
//! let a = Vector2::<f32>::new([1.0, 2.0]);
//! let _ = a.cross(&a);
//! ```
//!
//! and the named accessors need enough components:
//!
//! ```compile_fail
//! use tinygeo::prelude::*;
//!
//! let a = Vector2::<f32>::new([1.0, 2.0]);
//! let _ = a.z();
//! ```

pub mod numerics;
pub mod prelude;

pub use numerics::types::error::DimensionMismatch;
pub use numerics::types::traits::{Real, Scalar};
pub use numerics::types::vector::{cross, dot, Vector, Vector2, Vector3, Vector4};
