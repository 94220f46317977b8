//! View frustum for culling
//!
//! Extracts frustum planes from the camera's view-projection matrix and
//! provides intersection tests for points and spheres.

use glam::{Mat4, Vec3, Vec4};

use crate::math::DepthRange;

/// A plane in 3D space, represented as (normal.x, normal.y, normal.z, distance)
/// where the plane equation is: ax + by + cz + d = 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance from origin (`n · p + d = 0`).
    pub distance: f32,
}

impl Plane {
    /// Normalize homogeneous plane coefficients. A zero normal yields a
    /// plane that every point lies on.
    #[must_use]
    pub fn from_coefficients(coefficients: Vec4) -> Self {
        let normal = coefficients.truncate();
        let len = normal.length();
        if len > 0.0 {
            Self {
                normal: normal / len,
                distance: coefficients.w / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Signed distance from point to plane (positive = in front, negative =
    /// behind)
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// View frustum consisting of 6 planes
#[derive(Debug, Clone, PartialEq)]
pub struct Frustum {
    /// Six clipping planes: left, right, bottom, top, near, far.
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract inward-facing planes from a view-projection matrix
    /// (Gribb/Hartmann).
    ///
    /// Only the near plane depends on the clip-space depth range: GL clips
    /// at `z >= -w`, wgpu at `z >= 0`.
    #[must_use]
    pub fn from_view_projection(vp: Mat4, depth_range: DepthRange) -> Self {
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        let near = match depth_range {
            DepthRange::NegativeOneToOne => row3 + row2,
            DepthRange::ZeroToOne => row2,
        };

        Self {
            planes: [
                Plane::from_coefficients(row3 + row0),
                Plane::from_coefficients(row3 - row0),
                Plane::from_coefficients(row3 + row1),
                Plane::from_coefficients(row3 - row1),
                Plane::from_coefficients(near),
                Plane::from_coefficients(row3 - row2),
            ],
        }
    }

    /// Test if a point is inside the frustum
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= 0.0)
    }

    /// Test if a sphere intersects or is inside the frustum
    #[inline]
    #[must_use]
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(center) >= -radius)
    }

    /// Test if a sphere is completely inside the frustum (not just
    /// intersecting)
    #[inline]
    #[must_use]
    pub fn contains_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(center) >= radius)
    }
}
