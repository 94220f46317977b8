use glam::Vec3;

use crate::camera::core::Camera;
use crate::error::CameraError;
use crate::input::{FrameInput, KeyAction};
use crate::math::vector::WORLD_Y;
use crate::options::CameraOptions;

/// Roll within ±this many degrees counts as level.
pub const LEVEL_ROLL_EPSILON: f32 = 0.05;

/// First-person fly controls: maps one frame of input onto a [`Camera`].
///
/// The controller owns no camera state of its own besides the speeds, the
/// home pose for [`KeyAction::ResetView`] and whether the level-roll assist
/// is running.
#[derive(Debug, Clone)]
pub struct FlyController {
    /// Translation speed in world units per second.
    pub move_speed: f32,
    /// Mouse look sensitivity in degrees per mouse count.
    pub look_speed: f32,
    /// Arrow-key look rate in degrees per second.
    pub key_look_speed: f32,
    /// Roll rate in degrees per second.
    pub roll_speed: f32,
    home_position: Vec3,
    home_target: Vec3,
    leveling_roll: bool,
}

impl Default for FlyController {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default())
    }
}

impl FlyController {
    /// Controller with speeds and home pose taken from `options`.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            move_speed: options.move_speed,
            look_speed: options.look_speed,
            key_look_speed: options.key_look_speed,
            roll_speed: options.roll_speed,
            home_position: Vec3::from_array(options.start_position),
            home_target: Vec3::from_array(options.start_target),
            leveling_roll: false,
        }
    }

    /// Push changed options to the controller and the camera. The camera
    /// keeps its pose and current aspect ratio.
    pub fn apply_options(
        &mut self,
        camera: &mut Camera,
        options: &CameraOptions,
    ) -> Result<(), CameraError> {
        camera.set_depth_range(options.depth_range)?;
        camera.set_perspective_projection(
            options.fovy,
            camera.perspective().aspect,
            options.znear,
            options.zfar,
        )?;
        camera.set_invert_pitch(options.invert_pitch);
        *self = Self {
            leveling_roll: self.leveling_roll,
            ..Self::from_options(options)
        };
        Ok(())
    }

    /// Whether the level-roll assist is still running.
    #[must_use]
    pub fn is_leveling_roll(&self) -> bool {
        self.leveling_roll
    }

    /// Window resized. A zero height (minimized window) is ignored.
    pub fn resize(
        &self,
        camera: &mut Camera,
        width: u32,
        height: u32,
    ) -> Result<(), CameraError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        camera.set_aspect(width as f32 / height as f32)
    }

    /// Apply one frame of input spanning `dt` seconds, then commit the view
    /// matrix.
    pub fn update(
        &mut self,
        camera: &mut Camera,
        input: &FrameInput,
        dt: f32,
    ) -> Result<(), CameraError> {
        if input.was_pressed(KeyAction::ResetView) {
            log::debug!("resetting camera to home pose");
            camera.look_at(self.home_position, self.home_target, WORLD_Y)?;
            self.leveling_roll = false;
        }

        self.apply_movement(camera, input, dt)?;
        self.apply_rotation(camera, input, dt)?;
        camera.update_view_matrix();
        Ok(())
    }

    fn apply_movement(
        &self,
        camera: &mut Camera,
        input: &FrameInput,
        dt: f32,
    ) -> Result<(), CameraError> {
        let direction = Vec3::new(
            axis(input, KeyAction::StrafeRight, KeyAction::StrafeLeft),
            axis(input, KeyAction::MoveUp, KeyAction::MoveDown),
            axis(input, KeyAction::MoveBackward, KeyAction::MoveForward),
        );
        if direction == Vec3::ZERO {
            return Ok(());
        }

        // Diagonal movement is no faster than straight movement.
        let step = direction.normalize() * (self.move_speed * dt);
        if step.x != 0.0 || step.z != 0.0 {
            camera.move_forward(step.x, 0.0, step.z)?;
        }
        camera.move_by(0.0, step.y, 0.0);
        Ok(())
    }

    fn apply_rotation(
        &mut self,
        camera: &mut Camera,
        input: &FrameInput,
        dt: f32,
    ) -> Result<(), CameraError> {
        let key_rate = self.key_look_speed * dt;
        let roll_rate = self.roll_speed * dt;

        // Screen y grows downward: moving the mouse up looks up.
        let pitch = axis(input, KeyAction::PitchUp, KeyAction::PitchDown)
            * key_rate
            - input.mouse_delta.y * self.look_speed;
        let heading = axis(input, KeyAction::TurnLeft, KeyAction::TurnRight)
            * key_rate
            - input.mouse_delta.x * self.look_speed;
        let mut roll =
            axis(input, KeyAction::RollLeft, KeyAction::RollRight) * roll_rate;

        if input.is_held(KeyAction::LevelRoll) {
            self.leveling_roll = true;
        }
        if self.leveling_roll {
            let current = camera.roll();
            if current.abs() <= LEVEL_ROLL_EPSILON {
                self.leveling_roll = false;
            } else {
                roll -= current.signum() * roll_rate.min(current.abs());
            }
        }

        if pitch != 0.0 || heading != 0.0 || roll != 0.0 {
            camera.rotate(pitch, heading, roll)?;
        }
        Ok(())
    }
}

/// +1 if only `positive` is held, -1 if only `negative` is, else 0.
fn axis(input: &FrameInput, positive: KeyAction, negative: KeyAction) -> f32 {
    match (input.is_held(positive), input.is_held(negative)) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}
