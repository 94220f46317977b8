//! Vector, rotation-basis and 4x4 transform primitives.

/// Orthonormal rotation basis with Euler angle extraction.
pub mod basis;
/// View, model and projection transforms.
pub mod transform;
/// Direction helpers and world axes for `glam::Vec3`.
pub mod vector;

pub use basis::RotationBasis;
pub use transform::{
    DepthRange, MatrixLayout, PerspectiveParams, Transform, MATRIX_CONVENTION,
};
