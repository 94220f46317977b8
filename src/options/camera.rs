use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CameraError;
use crate::math::vector::WORLD_Y;
use crate::math::{DepthRange, PerspectiveParams, RotationBasis};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, control and start-pose parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Viewport aspect ratio (width / height). Replaced on window resize.
    #[schemars(skip)]
    pub aspect: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Clip-space depth convention of the projection.
    #[schemars(skip)]
    pub depth_range: DepthRange,
    /// Translation speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub move_speed: f32,
    /// Mouse look sensitivity in degrees per mouse count.
    #[schemars(title = "Look Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub look_speed: f32,
    /// Arrow-key look rate in degrees per second.
    #[schemars(title = "Key Look Speed", range(min = 10.0, max = 180.0), extend("step" = 5.0))]
    pub key_look_speed: f32,
    /// Roll rate in degrees per second.
    #[schemars(title = "Roll Speed", range(min = 5.0, max = 180.0), extend("step" = 5.0))]
    pub roll_speed: f32,
    /// Negate vertical look input.
    #[schemars(title = "Invert Pitch")]
    pub invert_pitch: bool,
    /// Initial eye position.
    #[schemars(skip)]
    pub start_position: [f32; 3],
    /// Initial look-at target.
    #[schemars(skip)]
    pub start_target: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 70.0,
            aspect: 16.0 / 9.0,
            znear: 0.05,
            zfar: 256.0,
            depth_range: DepthRange::NegativeOneToOne,
            move_speed: 9.0,
            look_speed: 0.08,
            key_look_speed: 60.0,
            roll_speed: 45.0,
            invert_pitch: false,
            start_position: [0.0, 0.0, 5.0],
            start_target: [0.0, 0.0, 0.0],
        }
    }
}

impl CameraOptions {
    /// Projection parameters described by these options.
    #[must_use]
    pub fn perspective(&self) -> PerspectiveParams {
        PerspectiveParams {
            fovy: self.fovy,
            aspect: self.aspect,
            znear: self.znear,
            zfar: self.zfar,
        }
    }

    /// Check the projection parameters and that the start pose yields an
    /// upright frame. A start position equal to the target, or straight
    /// above or below it, has no usable heading.
    pub fn validate(&self) -> Result<(), CameraError> {
        self.perspective().validate()?;
        let eye = Vec3::from_array(self.start_position);
        let target = Vec3::from_array(self.start_target);
        if eye == target {
            return Err(CameraError::DegenerateVector {
                context: "start position equals start target",
            });
        }
        let _ = RotationBasis::look_at(eye, target, WORLD_Y).map_err(|_| {
            CameraError::DegenerateVector {
                context: "start view direction is vertical",
            }
        })?;
        Ok(())
    }
}
