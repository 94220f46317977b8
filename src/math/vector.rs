//! 3D vector helpers on top of [`glam::Vec3`].
//!
//! glam already covers component-wise arithmetic, `cross` and `dot`. This
//! module adds the world axes and the zero-length policy used everywhere a
//! vector has to act as a direction: normalizing a degenerate vector is an
//! error, never a silent fallback.

use glam::Vec3;

use crate::error::CameraError;

/// World right axis.
pub const WORLD_X: Vec3 = Vec3::X;
/// World up axis.
pub const WORLD_Y: Vec3 = Vec3::Y;
/// World back axis (a camera with identity orientation looks down -Z).
pub const WORLD_Z: Vec3 = Vec3::Z;

/// Vectors shorter than this cannot be used as directions.
pub const DEGENERATE_LENGTH: f32 = 1e-6;

/// Offset `v` by `(dx, dy, dz)`.
#[inline]
#[must_use]
pub fn add(v: Vec3, dx: f32, dy: f32, dz: f32) -> Vec3 {
    v + Vec3::new(dx, dy, dz)
}

/// `v + direction * scale`.
#[inline]
#[must_use]
pub fn add_scaled(v: Vec3, direction: Vec3, scale: f32) -> Vec3 {
    v + direction * scale
}

/// Reverse the direction of `v`.
#[inline]
#[must_use]
pub fn invert(v: Vec3) -> Vec3 {
    -v
}

/// Unit vector pointing along `v`.
///
/// Fails with [`CameraError::DegenerateVector`] when `v` is non-finite or
/// shorter than [`DEGENERATE_LENGTH`]. `context` names what the vector was
/// meant to be and ends up in the error message.
pub fn normalize(v: Vec3, context: &'static str) -> Result<Vec3, CameraError> {
    if !v.is_finite() {
        return Err(CameraError::DegenerateVector { context });
    }
    let length = v.length();
    if length < DEGENERATE_LENGTH {
        return Err(CameraError::DegenerateVector { context });
    }
    Ok(v / length)
}

/// Whether `v` has unit length within `tolerance`.
#[inline]
#[must_use]
pub fn is_unit(v: Vec3, tolerance: f32) -> bool {
    (v.length() - 1.0).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_add_scaled() {
        let v = add(Vec3::new(1.0, 2.0, 3.0), 1.0, -2.0, 0.5);
        assert_eq!(v, Vec3::new(2.0, 0.0, 3.5));

        let v = add_scaled(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0), 4.0);
        assert_eq!(v, Vec3::new(0.0, 4.0, 0.0));
    }

    #[test]
    fn test_normalize_scales_to_unit_length() {
        let n = normalize(Vec3::new(3.0, 0.0, 4.0), "test").unwrap();
        assert!((n - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-6);
        assert!(is_unit(n, 1e-6));
    }

    #[test]
    fn test_normalize_rejects_zero_and_nan() {
        assert!(matches!(
            normalize(Vec3::ZERO, "zero"),
            Err(CameraError::DegenerateVector { context: "zero" })
        ));
        assert!(normalize(Vec3::new(f32::NAN, 1.0, 0.0), "nan").is_err());
        assert!(normalize(Vec3::splat(1e-8), "tiny").is_err());
    }

    #[test]
    fn test_invert() {
        assert_eq!(invert(WORLD_Z), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_world_axes_are_right_handed() {
        assert_eq!(WORLD_X.cross(WORLD_Y), WORLD_Z);
        assert_eq!(WORLD_X.dot(WORLD_Y), 0.0);
    }
}
