//! Orthonormal rotation basis stored as three axis vectors.
//!
//! The axes follow the camera convention used across the crate: X points
//! right, Y points up and Z points *back*, so an unrotated frame looks down
//! world -Z. The basis is the source of truth for orientation; heading,
//! pitch and roll are always read back from it.

use glam::{Mat3, Vec3};

use super::vector::{self, WORLD_X, WORLD_Y, WORLD_Z};
use crate::error::CameraError;

/// Axis length/orthogonality error accepted by [`RotationBasis::is_orthonormal`]
/// callers that have just orthonormalized.
pub const ORTHONORMAL_TOLERANCE: f32 = 1e-5;

/// Three mutually orthogonal unit axes forming a right-handed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationBasis {
    /// Right axis.
    pub x: Vec3,
    /// Up axis.
    pub y: Vec3,
    /// Back axis (opposite of the view direction).
    pub z: Vec3,
}

impl Default for RotationBasis {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl RotationBasis {
    /// The world frame.
    pub const IDENTITY: Self = Self {
        x: WORLD_X,
        y: WORLD_Y,
        z: WORLD_Z,
    };

    /// Build a basis from explicit axes. The axes are taken as given; call
    /// [`orthonormalize`](Self::orthonormalize) if they may have drifted.
    #[must_use]
    pub const fn from_axes(x: Vec3, y: Vec3, z: Vec3) -> Self {
        Self { x, y, z }
    }

    /// Replace all three axes.
    pub fn set_axes(&mut self, x: Vec3, y: Vec3, z: Vec3) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Rotation by `degrees` about `axis` (right-handed, Rodrigues).
    ///
    /// The result is meant as a transient operator for
    /// [`apply_to`](Self::apply_to), not as a camera orientation.
    pub fn from_axis_angle(
        axis: Vec3,
        degrees: f32,
    ) -> Result<Self, CameraError> {
        let axis = vector::normalize(axis, "rotation axis")?;
        if !degrees.is_finite() {
            return Err(CameraError::InvalidOrientation {
                context: "non-finite rotation angle",
            });
        }
        let m = Mat3::from_axis_angle(axis, degrees.to_radians());
        Ok(Self::from_axes(m.x_axis, m.y_axis, m.z_axis))
    }

    /// Frame for an eye at `eye` looking at `target`, with `up` as the
    /// approximate up direction.
    ///
    /// Fails when `eye == target` or when `up` is parallel to the view
    /// direction, since neither leaves a usable frame.
    pub fn look_at(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
    ) -> Result<Self, CameraError> {
        let z = vector::normalize(eye - target, "look-at direction")?;
        let x = vector::normalize(up.cross(z), "look-at up vector")?;
        let y = z.cross(x);
        Ok(Self { x, y, z })
    }

    /// Express `v` (given in this frame's coordinates) in the parent frame.
    #[inline]
    #[must_use]
    pub fn apply_to(&self, v: Vec3) -> Vec3 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Restore unit length and mutual orthogonality.
    ///
    /// Z is only normalized, so the view direction survives unchanged. X is
    /// rebuilt from the existing Y (keeping roll continuous), then Y from Z
    /// and X.
    pub fn orthonormalize(&mut self) -> Result<(), CameraError> {
        if !(self.x.is_finite() && self.y.is_finite() && self.z.is_finite()) {
            return Err(CameraError::InvalidOrientation {
                context: "non-finite axis",
            });
        }
        let z = vector::normalize(self.z, "basis Z axis")
            .map_err(|_| collapsed())?;
        let x = vector::normalize(self.y.cross(z), "basis X axis")
            .map_err(|_| collapsed())?;
        let y = vector::normalize(z.cross(x), "basis Y axis")
            .map_err(|_| collapsed())?;
        *self = Self { x, y, z };
        Ok(())
    }

    /// Whether every axis is unit length and all pairs are orthogonal within
    /// `tolerance`.
    #[must_use]
    pub fn is_orthonormal(&self, tolerance: f32) -> bool {
        vector::is_unit(self.x, tolerance)
            && vector::is_unit(self.y, tolerance)
            && vector::is_unit(self.z, tolerance)
            && self.x.dot(self.y).abs() <= tolerance
            && self.y.dot(self.z).abs() <= tolerance
            && self.x.dot(self.z).abs() <= tolerance
    }

    /// Direction the frame looks along (-Z).
    #[inline]
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        vector::invert(self.z)
    }

    /// Yaw about world Y in degrees: 0 when facing -Z, positive turning left.
    ///
    /// Read from the right axis, which heading-then-roll-then-pitch
    /// composition keeps on the horizontal heading circle. This stays
    /// defined when the view direction is vertical.
    #[must_use]
    pub fn heading(&self) -> f32 {
        (-self.x.z).atan2(self.x.x).to_degrees()
    }

    /// Elevation of the view direction in degrees, positive looking up.
    ///
    /// The horizontal term takes the sign of the up axis's Y component, so a
    /// frame rotated past straight up reads above 90.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        let horizontal = self.z.x.hypot(self.z.z) * self.y.y.signum();
        (-self.z.y).atan2(horizontal).to_degrees()
    }

    /// Tilt of the right axis out of the horizontal plane in degrees.
    #[must_use]
    pub fn roll(&self) -> f32 {
        self.x.y.atan2(self.x.x.hypot(self.x.z)).to_degrees()
    }

    /// The basis as a matrix whose columns are the axes.
    #[must_use]
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_cols(self.x, self.y, self.z)
    }
}

fn collapsed() -> CameraError {
    CameraError::InvalidOrientation {
        context: "basis axes collapsed during orthonormalization",
    }
}
