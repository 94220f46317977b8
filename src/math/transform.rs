//! 4x4 view, model and projection transforms.
//!
//! # Matrix convention
//!
//! Every [`Transform`] uses column vectors (`v' = M * v`) and is stored
//! column-major, which is [`MATRIX_CONVENTION`]. The translation of a view
//! or model transform therefore lives in the fourth column, and
//! [`Transform::to_cols_array`] yields exactly what `glUniformMatrix4fv`
//! expects with `transpose = false` (and what WGSL/GLSL `mat4x4<f32>`
//! uniforms expect). `get(row, col)` indexes the mathematical matrix,
//! independent of storage.

use std::ops::Mul;

use glam::{Mat4, Vec3, Vec4};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::basis::RotationBasis;
use crate::error::CameraError;

/// Storage order for flattened matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixLayout {
    /// Columns stored one after another (OpenGL, WGSL, glam).
    ColumnMajor,
    /// Rows stored one after another.
    RowMajor,
}

/// The layout produced by [`Transform::to_cols_array`] and assumed by
/// [`CameraUniform`](crate::camera::core::CameraUniform).
pub const MATRIX_CONVENTION: MatrixLayout = MatrixLayout::ColumnMajor;

/// Clip-space depth range targeted by a projection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DepthRange {
    /// OpenGL: near maps to -1, far to 1.
    #[default]
    NegativeOneToOne,
    /// wgpu / Vulkan / Direct3D: near maps to 0, far to 1.
    ZeroToOne,
}

/// Symmetric perspective frustum parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveParams {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl PerspectiveParams {
    /// Check that the parameters describe a real frustum.
    pub fn validate(&self) -> Result<(), CameraError> {
        let Self {
            fovy,
            aspect,
            znear,
            zfar,
        } = *self;
        if ![fovy, aspect, znear, zfar].iter().all(|v| v.is_finite()) {
            return Err(CameraError::frustum("parameters must be finite"));
        }
        if znear <= 0.0 {
            return Err(CameraError::frustum(format!(
                "near plane must be positive, got {znear}"
            )));
        }
        if zfar <= znear {
            return Err(CameraError::frustum(format!(
                "far plane ({zfar}) must lie beyond near plane ({znear})"
            )));
        }
        if aspect <= 0.0 {
            return Err(CameraError::frustum(format!(
                "aspect ratio must be positive, got {aspect}"
            )));
        }
        if fovy <= 0.0 || fovy >= 180.0 {
            return Err(CameraError::frustum(format!(
                "field of view must be in (0, 180) degrees, got {fovy}"
            )));
        }
        Ok(())
    }
}

/// A 4x4 homogeneous transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Mat4,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        matrix: Mat4::IDENTITY,
    };

    /// Wrap an existing glam matrix.
    #[must_use]
    pub const fn from_mat4(matrix: Mat4) -> Self {
        Self { matrix }
    }

    /// Right-handed perspective projection (camera looks down -Z).
    ///
    /// For [`DepthRange::NegativeOneToOne`] the depth row is
    /// `[2][2] = (far + near) / (near - far)` and
    /// `[2][3] = 2 * far * near / (near - far)`, with `[3][2] = -1`.
    pub fn perspective(
        params: PerspectiveParams,
        depth_range: DepthRange,
    ) -> Result<Self, CameraError> {
        params.validate()?;
        let fovy = params.fovy.to_radians();
        let matrix = match depth_range {
            DepthRange::NegativeOneToOne => Mat4::perspective_rh_gl(
                fovy,
                params.aspect,
                params.znear,
                params.zfar,
            ),
            DepthRange::ZeroToOne => Mat4::perspective_rh(
                fovy,
                params.aspect,
                params.znear,
                params.zfar,
            ),
        };
        Ok(Self { matrix })
    }

    /// World-to-camera transform for a camera with orientation `basis`
    /// standing at `position`.
    ///
    /// The basis axes form the rows of the upper 3x3 block; the fourth
    /// column holds the position expressed along those axes, negated.
    #[must_use]
    pub fn view(basis: &RotationBasis, position: Vec3) -> Self {
        let RotationBasis { x, y, z } = *basis;
        Self {
            matrix: Mat4::from_cols(
                Vec4::new(x.x, y.x, z.x, 0.0),
                Vec4::new(x.y, y.y, z.y, 0.0),
                Vec4::new(x.z, y.z, z.z, 0.0),
                Vec4::new(-x.dot(position), -y.dot(position), -z.dot(position), 1.0),
            ),
        }
    }

    /// Object-to-world transform: the basis axes as columns, translated to
    /// `position`. Inverse of [`view`](Self::view) for the same inputs.
    #[must_use]
    pub fn model(basis: &RotationBasis, position: Vec3) -> Self {
        Self {
            matrix: Mat4::from_cols(
                basis.x.extend(0.0),
                basis.y.extend(0.0),
                basis.z.extend(0.0),
                position.extend(1.0),
            ),
        }
    }

    /// The underlying glam matrix.
    #[must_use]
    pub const fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Entry at mathematical `row`, `col`, or `None` outside 0..4.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= 4 || col >= 4 {
            return None;
        }
        self.to_cols_array().get(col * 4 + row).copied()
    }

    /// The 16 entries in [`MATRIX_CONVENTION`] order, ready for upload.
    #[must_use]
    pub fn to_cols_array(&self) -> [f32; 16] {
        self.matrix.to_cols_array()
    }

    /// The entries as four columns of four.
    #[must_use]
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        self.matrix.to_cols_array_2d()
    }

    /// The 16 entries in the requested storage order.
    #[must_use]
    pub fn to_array(&self, layout: MatrixLayout) -> [f32; 16] {
        match layout {
            MatrixLayout::ColumnMajor => self.matrix.to_cols_array(),
            MatrixLayout::RowMajor => self.matrix.transpose().to_cols_array(),
        }
    }

    /// Apply the transform to a point (w = 1) without perspective divide.
    #[must_use]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.matrix.transform_point3(point)
    }

    /// Apply the transform to a point and divide by w (clip to NDC).
    #[must_use]
    pub fn project_point(&self, point: Vec3) -> Vec3 {
        self.matrix.project_point3(point)
    }
}

impl Mul for Transform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            matrix: self.matrix * rhs.matrix,
        }
    }
}
