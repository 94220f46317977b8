use glam::Vec3;

use super::frustum::Frustum;
use crate::error::CameraError;
use crate::math::vector::{self, WORLD_X, WORLD_Y, WORLD_Z};
use crate::math::basis::ORTHONORMAL_TOLERANCE;
use crate::math::{DepthRange, PerspectiveParams, RotationBasis, Transform};
use crate::options::CameraOptions;

/// Accumulated pitch is held within ±this many degrees.
pub const MAX_SAFE_PITCH: f32 = 90.0;
/// Accumulated roll is held within ±this many degrees.
pub const MAX_SAFE_ROLL: f32 = 30.0;
/// Above this |view direction · world up| the view counts as vertical and
/// strafing derives its frame from the right axis instead of the view
/// direction.
pub const PARALLEL_DOT_TOLERANCE: f32 = 0.9999;

/// Pitch stops this many degrees short of tipping the up axis below the
/// horizon.
const UPRIGHT_MARGIN: f32 = 1e-3;

const DEFAULT_PERSPECTIVE: PerspectiveParams = PerspectiveParams {
    fovy: 70.0,
    aspect: 1.0,
    znear: 0.05,
    zfar: 256.0,
};

/// Free-flying perspective camera.
///
/// Orientation lives in an orthonormal [`RotationBasis`]; heading, pitch and
/// roll are re-read from it after every orientation change and never drift
/// from it. The view transform is only rebuilt by
/// [`update_view_matrix`](Self::update_view_matrix), so several
/// `rotate`/`move_*` calls can be batched per frame.
#[derive(Debug, Clone)]
pub struct Camera {
    rotation: RotationBasis,
    /// Frame used for the last `move_forward`, decoupled from pitch.
    movement: RotationBasis,
    position: Vec3,
    heading: f32,
    pitch: f32,
    roll: f32,
    invert_pitch: bool,
    depth_range: DepthRange,
    perspective: PerspectiveParams,
    view: Transform,
    /// Eye position as of the last view commit.
    view_position: Vec3,
    /// View direction as of the last view commit.
    view_forward: Vec3,
    projection: Transform,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Camera at the origin looking down -Z with a 70° / 1:1 GL projection.
    #[must_use]
    pub fn new() -> Self {
        let depth_range = DepthRange::default();
        let projection =
            Transform::perspective(DEFAULT_PERSPECTIVE, depth_range)
                .unwrap_or_default();
        Self {
            rotation: RotationBasis::IDENTITY,
            movement: RotationBasis::IDENTITY,
            position: Vec3::ZERO,
            heading: 0.0,
            pitch: 0.0,
            roll: 0.0,
            invert_pitch: false,
            depth_range,
            perspective: DEFAULT_PERSPECTIVE,
            view: Transform::IDENTITY,
            view_position: Vec3::ZERO,
            view_forward: Vec3::NEG_Z,
            projection,
        }
    }

    /// Build a camera from configured projection, controls and start pose.
    /// The view matrix is committed before returning.
    pub fn from_options(options: &CameraOptions) -> Result<Self, CameraError> {
        let mut camera = Self::new();
        camera.invert_pitch = options.invert_pitch;
        camera.depth_range = options.depth_range;
        camera.set_perspective_projection(
            options.fovy,
            options.aspect,
            options.znear,
            options.zfar,
        )?;
        camera.look_at(
            Vec3::from_array(options.start_position),
            Vec3::from_array(options.start_target),
            WORLD_Y,
        )?;
        camera.update_view_matrix();
        Ok(camera)
    }

    // ── Orientation ────────────────────────────────────────────────────

    /// Place the camera at `eye` looking at `target`.
    ///
    /// This is an authoritative reset: the resulting angles are not
    /// clamped. An `up` hint that leaves the frame upside down is rejected
    /// with [`CameraError::InvalidOrientation`].
    pub fn look_at(
        &mut self,
        eye: Vec3,
        target: Vec3,
        up: Vec3,
    ) -> Result<(), CameraError> {
        let basis = RotationBasis::look_at(eye, target, up)?;
        ensure_upright(&basis)?;
        self.rotation = basis;
        self.position = eye;
        self.recompute_angles();
        Ok(())
    }

    /// Rotate by incremental angles in degrees.
    ///
    /// Heading turns about world Y, roll about the camera's (post-heading)
    /// back axis, pitch about its (post-heading, post-roll) right axis.
    /// Pitch and roll deltas are shortened so the accumulated angles land
    /// on ±[`MAX_SAFE_PITCH`] / ±[`MAX_SAFE_ROLL`] instead of passing them.
    /// The limit is soft: angles are re-read from the orthonormalized basis
    /// afterwards and may sit a hair beyond it.
    ///
    /// While rolled, pitching about the tilted right axis tops out below
    /// 90° of elevation. Pitch is additionally shortened there so an
    /// upright camera never tips its up axis below the horizon.
    ///
    /// On error the camera is left unchanged.
    pub fn rotate(
        &mut self,
        pitch: f32,
        heading: f32,
        roll: f32,
    ) -> Result<(), CameraError> {
        let pitch = if self.invert_pitch { -pitch } else { pitch };
        let pitch = soft_clamp(self.pitch, pitch, MAX_SAFE_PITCH);
        let roll = soft_clamp(self.roll, roll, MAX_SAFE_ROLL);

        let upright = self.rotation.y.y >= -ORTHONORMAL_TOLERANCE;
        let mut basis = self.rotation;
        if heading != 0.0 {
            let turn = RotationBasis::from_axis_angle(WORLD_Y, heading)?;
            basis.z = turn.apply_to(basis.z);
            basis.x = turn.apply_to(basis.x);
        }
        if roll != 0.0 {
            let tilt = RotationBasis::from_axis_angle(basis.z, roll)?;
            basis.y = tilt.apply_to(basis.y);
            basis.x = tilt.apply_to(basis.x);
        }
        // Also runs on a zero pitch when the roll step left the frame at or
        // below the horizon.
        let pitch = if upright
            && (pitch != 0.0 || basis.y.y < ORTHONORMAL_TOLERANCE)
        {
            keep_upright(&basis, pitch)
        } else {
            pitch
        };
        if pitch != 0.0 {
            let nod = RotationBasis::from_axis_angle(basis.x, pitch)?;
            basis.y = nod.apply_to(basis.y);
            basis.z = nod.apply_to(basis.z);
        }
        basis.orthonormalize()?;

        self.rotation = basis;
        self.recompute_angles();
        Ok(())
    }

    /// Return to the world frame (looking down -Z, level).
    pub fn reset_rotation(&mut self) -> Result<(), CameraError> {
        self.set_axes(WORLD_X, WORLD_Y, WORLD_Z)
    }

    /// Replace the orientation with explicit axes, then re-orthonormalize.
    /// Axes describing an upside-down frame are rejected. On error the
    /// camera is left unchanged.
    pub fn set_axes(
        &mut self,
        x: Vec3,
        y: Vec3,
        z: Vec3,
    ) -> Result<(), CameraError> {
        let mut basis = RotationBasis::from_axes(x, y, z);
        basis.orthonormalize()?;
        ensure_upright(&basis)?;
        self.rotation = basis;
        self.recompute_angles();
        Ok(())
    }

    /// Orthonormalize the rotation basis and re-derive the angles from it.
    pub fn update_rotation_matrix(&mut self) -> Result<(), CameraError> {
        self.rotation.orthonormalize()?;
        self.recompute_angles();
        Ok(())
    }

    fn recompute_angles(&mut self) {
        self.heading = self.rotation.heading();
        self.pitch = self.rotation.pitch();
        self.roll = self.rotation.roll();
    }

    // ── Translation ────────────────────────────────────────────────────

    /// Translate along the world axes, ignoring orientation.
    pub fn move_by(&mut self, dx: f32, dy: f32, dz: f32) {
        self.position = vector::add(self.position, dx, dy, dz);
    }

    /// Translate relative to the horizontal view direction.
    ///
    /// `dx` moves right, `dy` up and `dz` back, in a movement frame that
    /// shares the camera's heading but not its pitch, so a negative `dz`
    /// walks forward at the same speed whether looking level or down.
    pub fn move_forward(
        &mut self,
        dx: f32,
        dy: f32,
        dz: f32,
    ) -> Result<(), CameraError> {
        let frame = self.movement_frame()?;
        let mut position = self.position;
        position = vector::add_scaled(position, frame.x, dx);
        position = vector::add_scaled(position, frame.y, dy);
        position = vector::add_scaled(position, frame.z, dz);
        self.movement = frame;
        self.position = position;
        Ok(())
    }

    /// Build the strafing frame, switching reference vector near the poles.
    ///
    /// With the view nearly parallel to world up, flattening the view
    /// direction leaves a vector too short to normalize, so the back axis
    /// comes from the right axis crossed with world up instead.
    fn movement_frame(&self) -> Result<RotationBasis, CameraError> {
        let forward = self.rotation.forward();
        let zdotup = forward.dot(WORLD_Y);

        let back = if zdotup.abs() > PARALLEL_DOT_TOLERANCE {
            vector::normalize(
                self.rotation.x.cross(WORLD_Y),
                "movement axis from right vector",
            )?
        } else {
            vector::normalize(
                Vec3::new(-forward.x, 0.0, -forward.z),
                "flattened view direction",
            )?
        };
        let right = vector::normalize(WORLD_Y.cross(back), "movement right")?;
        let up = back.cross(right);
        Ok(RotationBasis::from_axes(right, up, back))
    }

    // ── Projection and view ────────────────────────────────────────────

    /// Store projection parameters and rebuild the projection transform.
    /// Invalid parameters leave the previous projection in place.
    pub fn set_perspective_projection(
        &mut self,
        fovy: f32,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) -> Result<(), CameraError> {
        let params = PerspectiveParams {
            fovy,
            aspect,
            znear,
            zfar,
        };
        self.projection = Transform::perspective(params, self.depth_range)?;
        self.perspective = params;
        Ok(())
    }

    /// Rebuild the projection for a new aspect ratio (window resize).
    pub fn set_aspect(&mut self, aspect: f32) -> Result<(), CameraError> {
        let PerspectiveParams {
            fovy, znear, zfar, ..
        } = self.perspective;
        self.set_perspective_projection(fovy, aspect, znear, zfar)
    }

    /// Switch clip-space depth convention and rebuild the projection.
    pub fn set_depth_range(
        &mut self,
        depth_range: DepthRange,
    ) -> Result<(), CameraError> {
        self.projection = Transform::perspective(self.perspective, depth_range)?;
        self.depth_range = depth_range;
        Ok(())
    }

    /// Commit the current orientation and position to the view transform.
    pub fn update_view_matrix(&mut self) {
        self.view = Transform::view(&self.rotation, self.position);
        self.view_position = self.position;
        self.view_forward = self.rotation.forward();
    }

    // ── Accessors ──────────────────────────────────────────────────────

    /// Heading in degrees (0 facing -Z, positive turning left).
    #[must_use]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Pitch in degrees (positive looking up).
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Roll in degrees.
    #[must_use]
    pub fn roll(&self) -> f32 {
        self.roll
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit view direction in world space.
    #[must_use]
    pub fn view_direction(&self) -> Vec3 {
        self.rotation.forward()
    }

    /// Current orientation.
    #[must_use]
    pub fn rotation_basis(&self) -> RotationBasis {
        self.rotation
    }

    /// Frame used by the most recent [`move_forward`](Self::move_forward).
    #[must_use]
    pub fn movement_basis(&self) -> RotationBasis {
        self.movement
    }

    /// Whether pitch input is negated.
    #[must_use]
    pub fn invert_pitch(&self) -> bool {
        self.invert_pitch
    }

    /// Negate (or stop negating) pitch input.
    pub fn set_invert_pitch(&mut self, invert: bool) {
        self.invert_pitch = invert;
    }

    /// Clip-space depth convention of the projection.
    #[must_use]
    pub fn depth_range(&self) -> DepthRange {
        self.depth_range
    }

    /// Stored projection parameters.
    #[must_use]
    pub fn perspective(&self) -> PerspectiveParams {
        self.perspective
    }

    /// View transform as of the last
    /// [`update_view_matrix`](Self::update_view_matrix).
    #[must_use]
    pub fn view_matrix(&self) -> Transform {
        self.view
    }

    /// Projection transform.
    #[must_use]
    pub fn projection_matrix(&self) -> Transform {
        self.projection
    }

    /// `projection * view`.
    #[must_use]
    pub fn view_projection(&self) -> Transform {
        self.projection * self.view
    }

    /// Clipping planes of the committed view and projection.
    #[must_use]
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(
            self.view_projection().matrix(),
            self.depth_range,
        )
    }

    /// GPU-ready snapshot of the committed matrices.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update_from(self);
        uniform
    }
}

/// Reject frames whose up axis points below the horizon. Their angle
/// readings wrap to ±180 and the pitch clamp would snap them.
fn ensure_upright(basis: &RotationBasis) -> Result<(), CameraError> {
    if basis.y.y < -ORTHONORMAL_TOLERANCE {
        return Err(CameraError::InvalidOrientation {
            context: "up axis points below the horizon",
        });
    }
    Ok(())
}

/// Shrink a pitch `delta` so the up axis keeps a non-negative world Y.
///
/// Pitching by `t` about the right axis leaves
/// `y.y(t) = r * cos(t - phi)` with `phi = atan2(z.y, y.y)`, so the
/// allowed deltas are `phi ± 90°`.
fn keep_upright(basis: &RotationBasis, delta: f32) -> f32 {
    let phi = basis.z.y.atan2(basis.y.y).to_degrees();
    let half = 90.0 - UPRIGHT_MARGIN;
    let applied = delta.clamp(phi - half, phi + half);
    if applied != delta {
        log::debug!("pitch delta {delta} shortened to {applied} to stay upright");
    }
    applied
}

/// Shrink `delta` so that `total + delta` stays within ±`limit`.
fn soft_clamp(total: f32, delta: f32, limit: f32) -> f32 {
    let target = total + delta;
    let applied = if target > limit {
        limit - total
    } else if target < -limit {
        -limit - total
    } else {
        return delta;
    };
    log::debug!("clamped rotation delta {delta} to {applied} (limit ±{limit})");
    applied
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the camera matrices (column-major).
pub struct CameraUniform {
    /// World-to-camera matrix.
    pub view: [[f32; 4]; 4],
    /// Projection matrix.
    pub projection: [[f32; 4]; 4],
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        let identity = Transform::IDENTITY.to_cols_array_2d();
        Self {
            view: identity,
            projection: identity,
            view_proj: identity,
            position: [0.0; 3],
            aspect: DEFAULT_PERSPECTIVE.aspect,
            forward: [0.0, 0.0, -1.0],
            fovy: DEFAULT_PERSPECTIVE.fovy,
        }
    }

    /// Update uniform fields from the given camera's committed state.
    /// Position and forward are the ones the view matrix was built from.
    pub fn update_from(&mut self, camera: &Camera) {
        self.view = camera.view.to_cols_array_2d();
        self.projection = camera.projection.to_cols_array_2d();
        self.view_proj = camera.view_projection().to_cols_array_2d();
        self.position = camera.view_position.to_array();
        self.forward = camera.view_forward.to_array();
        self.aspect = camera.perspective.aspect;
        self.fovy = camera.perspective.fovy;
    }

    /// Raw bytes for a buffer write.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    fn assert_orthonormal(camera: &Camera) {
        let RotationBasis { x, y, z } = camera.rotation_basis();
        for axis in [x, y, z] {
            assert!((axis.length() - 1.0).abs() < TOLERANCE, "|{axis}| != 1");
        }
        assert!(x.dot(y).abs() < TOLERANCE);
        assert!(y.dot(z).abs() < TOLERANCE);
        assert!(x.dot(z).abs() < TOLERANCE);
    }

    fn assert_angles_mirror_basis(camera: &Camera) {
        let basis = camera.rotation_basis();
        assert_eq!(camera.heading(), basis.heading());
        assert_eq!(camera.pitch(), basis.pitch());
        assert_eq!(camera.roll(), basis.roll());
    }

    #[test]
    fn test_rotate_keeps_basis_orthonormal() {
        let mut camera = Camera::new();
        for i in 0..500 {
            let t = i as f32;
            camera
                .rotate(
                    (t * 0.37).sin() * 25.0,
                    (t * 0.11).cos() * 40.0,
                    (t * 0.73).sin() * 12.0,
                )
                .unwrap();
            assert_orthonormal(&camera);
            assert_angles_mirror_basis(&camera);
        }
    }

    #[test]
    fn test_pitch_clamps_at_ninety() {
        let mut camera = Camera::new();
        for _ in 0..100 {
            camera.rotate(10.0, 0.0, 0.0).unwrap();
            assert!(camera.pitch() <= MAX_SAFE_PITCH + 1e-3);
        }
        assert!((camera.pitch() - MAX_SAFE_PITCH).abs() < 1e-2);
        // Still looking straight up, not flipped over.
        assert!((camera.view_direction().y - 1.0).abs() < 1e-4);

        for _ in 0..100 {
            camera.rotate(-10.0, 0.0, 0.0).unwrap();
            assert!(camera.pitch() >= -MAX_SAFE_PITCH - 1e-3);
        }
        assert!((camera.pitch() + MAX_SAFE_PITCH).abs() < 1e-2);
    }

    #[test]
    fn test_partial_pitch_applied_up_to_limit() {
        let mut camera = Camera::new();
        camera.rotate(85.0, 0.0, 0.0).unwrap();
        camera.rotate(20.0, 0.0, 0.0).unwrap();
        assert!((camera.pitch() - 90.0).abs() < 1e-2);
    }

    #[test]
    fn test_roll_clamps_at_thirty() {
        let mut camera = Camera::new();
        for _ in 0..100 {
            camera.rotate(0.0, 0.0, 10.0).unwrap();
            assert!(camera.roll() <= MAX_SAFE_ROLL + 1e-3);
        }
        assert!((camera.roll() - MAX_SAFE_ROLL).abs() < 1e-3);

        for _ in 0..100 {
            camera.rotate(0.0, 0.0, -10.0).unwrap();
            assert!(camera.roll() >= -MAX_SAFE_ROLL - 1e-3);
        }
        assert!((camera.roll() + MAX_SAFE_ROLL).abs() < 1e-3);
    }

    #[test]
    fn test_pitch_while_rolled_never_flips() {
        let mut camera = Camera::new();
        camera.rotate(0.0, 0.0, 30.0).unwrap();
        for step in [10.0, -10.0] {
            for _ in 0..100 {
                camera.rotate(step, 0.0, 0.0).unwrap();
                assert!(camera.pitch().abs() <= MAX_SAFE_PITCH + 1e-3);
                assert!(camera.rotation_basis().y.y >= 0.0);
            }
        }
        // Roll is untouched by pitching.
        assert!((camera.roll() - 30.0).abs() < 1e-2);
    }

    #[test]
    fn test_mixed_rotation_stays_within_limits() {
        let mut camera = Camera::new();
        for i in 0..400 {
            let sign = if (i / 25) % 2 == 0 { 1.0 } else { -1.0 };
            camera.rotate(10.0 * sign, 37.0, 7.0 * sign).unwrap();
            assert!(camera.rotation_basis().y.y >= 0.0);
            assert!(camera.pitch().abs() <= MAX_SAFE_PITCH + 1e-3);
            assert!(camera.roll().abs() <= MAX_SAFE_ROLL + 1e-3);
            assert_orthonormal(&camera);
        }
    }

    #[test]
    fn test_heading_is_unbounded_and_wraps() {
        let mut camera = Camera::new();
        camera.rotate(0.0, 90.0, 0.0).unwrap();
        assert!((camera.heading() - 90.0).abs() < 1e-3);
        // Turning left from -Z faces -X.
        assert!((camera.view_direction() - Vec3::NEG_X).length() < 1e-5);

        camera.rotate(0.0, 135.0, 0.0).unwrap();
        assert!((camera.heading() + 135.0).abs() < 1e-3);
    }

    #[test]
    fn test_invert_pitch_negates_input() {
        let mut camera = Camera::new();
        camera.set_invert_pitch(true);
        camera.rotate(15.0, 0.0, 0.0).unwrap();
        assert!((camera.pitch() + 15.0).abs() < 1e-3);
    }

    #[test]
    fn test_rotate_with_nan_leaves_camera_unchanged() {
        let mut camera = Camera::new();
        camera.rotate(10.0, 20.0, 5.0).unwrap();
        let before = camera.rotation_basis();
        assert!(camera.rotate(f32::NAN, 0.0, 0.0).is_err());
        assert_eq!(camera.rotation_basis(), before);
        assert_angles_mirror_basis(&camera);
    }

    #[test]
    fn test_look_at_from_positive_z_faces_origin() {
        let mut camera = Camera::new();
        camera
            .look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, WORLD_Y)
            .unwrap();
        assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 5.0));
        assert!(camera.heading().abs() < 1e-3);
        assert!(camera.pitch().abs() < 1e-3);
        assert!(camera.roll().abs() < 1e-3);
        assert!((camera.view_direction() - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_look_at_reports_elevation() {
        let mut camera = Camera::new();
        camera
            .look_at(Vec3::new(0.0, 5.0, 5.0), Vec3::ZERO, WORLD_Y)
            .unwrap();
        assert!((camera.pitch() + 45.0).abs() < 1e-3);
    }

    #[test]
    fn test_look_at_rejects_upside_down_frame() {
        let mut camera = Camera::new();
        camera.rotate(5.0, 10.0, 0.0).unwrap();
        let before = camera.rotation_basis();
        assert!(matches!(
            camera.look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, -WORLD_Y),
            Err(CameraError::InvalidOrientation { .. })
        ));
        assert_eq!(camera.rotation_basis(), before);
        assert_eq!(camera.position(), Vec3::ZERO);

        assert!(camera.set_axes(WORLD_X, -WORLD_Y, -WORLD_Z).is_err());
        assert_eq!(camera.rotation_basis(), before);
    }

    #[test]
    fn test_look_at_rejects_coincident_eye_and_target() {
        let mut camera = Camera::new();
        let eye = Vec3::new(1.0, 1.0, 1.0);
        assert!(matches!(
            camera.look_at(eye, eye, WORLD_Y),
            Err(CameraError::DegenerateVector { .. })
        ));
        assert_eq!(camera.position(), Vec3::ZERO);
    }

    #[test]
    fn test_move_by_ignores_orientation() {
        let mut camera = Camera::new();
        camera.rotate(-45.0, 30.0, 0.0).unwrap();
        camera.move_by(0.0, 2.0, 0.0);
        assert_eq!(camera.position(), Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_move_forward_turns_around_with_heading() {
        let mut camera = Camera::new();
        camera.move_forward(0.0, 0.0, -1.0).unwrap();
        let z_after_first = camera.position().z;
        assert!(z_after_first < 0.0);

        camera.rotate(0.0, 180.0, 0.0).unwrap();
        camera.move_forward(0.0, 0.0, -1.0).unwrap();
        assert!(camera.position().z > z_after_first);
        assert!(camera.position().z.abs() < 1e-4);
    }

    #[test]
    fn test_move_forward_ignores_pitch() {
        let mut camera = Camera::new();
        camera.rotate(-60.0, 0.0, 0.0).unwrap();
        camera.move_forward(0.0, 0.0, -2.0).unwrap();
        let p = camera.position();
        assert!(p.y.abs() < 1e-5);
        assert!((p.z + 2.0).abs() < 1e-5);

        camera.move_forward(1.0, 0.0, 0.0).unwrap();
        assert!((camera.position().x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_move_forward_looking_straight_up() {
        let mut camera = Camera::new();
        camera.look_at(Vec3::ZERO, WORLD_Y, WORLD_Z).unwrap();
        assert!((camera.view_direction().dot(WORLD_Y) - 1.0).abs() < 1e-6);

        camera.move_forward(0.0, 0.0, 1.0).unwrap();
        let m = camera.movement_basis();
        for axis in [m.x, m.y, m.z] {
            assert!(axis.is_finite());
            assert!((axis.length() - 1.0).abs() < 1e-5);
        }
        assert!(camera.position().is_finite());
        assert!((camera.position().length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_move_forward_at_pitch_limit_keeps_heading_direction() {
        let mut camera = Camera::new();
        camera.rotate(0.0, 90.0, 0.0).unwrap();
        for _ in 0..20 {
            camera.rotate(10.0, 0.0, 0.0).unwrap();
        }
        camera.move_forward(0.0, 0.0, -1.0).unwrap();
        // Facing -X before looking up, so forward is still -X.
        assert!((camera.position() - Vec3::NEG_X).length() < 1e-3);
    }

    #[test]
    fn test_view_matrix_waits_for_commit() {
        let mut camera = Camera::new();
        camera.update_view_matrix();
        let committed = camera.view_matrix();

        camera.move_by(1.0, 2.0, 3.0);
        camera.rotate(5.0, 5.0, 0.0).unwrap();
        assert_eq!(camera.view_matrix(), committed);

        camera.update_view_matrix();
        assert_ne!(camera.view_matrix(), committed);
        let eye = camera.view_matrix().transform_point(camera.position());
        assert!(eye.length() < 1e-5);
    }

    #[test]
    fn test_set_perspective_projection_entries() {
        let mut camera = Camera::new();
        camera.set_perspective_projection(70.0, 1.0, 0.1, 100.0).unwrap();
        let p = camera.projection_matrix();
        let (near, far) = (0.1_f32, 100.0_f32);
        assert!((p.get(2, 2).unwrap() - (far + near) / (near - far)).abs() < 1e-5);
        assert!(
            (p.get(2, 3).unwrap() - 2.0 * far * near / (near - far)).abs() < 1e-5
        );
    }

    #[test]
    fn test_bad_projection_keeps_previous() {
        let mut camera = Camera::new();
        camera.set_perspective_projection(60.0, 1.5, 0.1, 10.0).unwrap();
        let before = camera.projection_matrix();

        assert!(matches!(
            camera.set_perspective_projection(60.0, 1.5, 0.0, 10.0),
            Err(CameraError::InvalidFrustum { .. })
        ));
        assert!(camera.set_aspect(-1.0).is_err());
        assert_eq!(camera.projection_matrix(), before);
        assert_eq!(camera.perspective().aspect, 1.5);
    }

    #[test]
    fn test_set_aspect_keeps_other_parameters() {
        let mut camera = Camera::new();
        camera.set_perspective_projection(50.0, 1.0, 0.2, 20.0).unwrap();
        camera.set_aspect(2.0).unwrap();
        let params = camera.perspective();
        assert_eq!(params.fovy, 50.0);
        assert_eq!(params.aspect, 2.0);
        assert_eq!(params.znear, 0.2);
        assert_eq!(params.zfar, 20.0);
    }

    #[test]
    fn test_reset_rotation_returns_to_world_frame() {
        let mut camera = Camera::new();
        camera.rotate(30.0, 60.0, 10.0).unwrap();
        camera.reset_rotation().unwrap();
        assert_eq!(camera.rotation_basis(), RotationBasis::IDENTITY);
        assert_eq!(camera.heading(), 0.0);
    }

    #[test]
    fn test_set_axes_orthonormalizes_and_rejects_collapse() {
        let mut camera = Camera::new();
        camera
            .set_axes(
                Vec3::new(1.1, 0.0, 0.0),
                Vec3::new(0.0, 0.9, 0.1),
                Vec3::new(0.0, 0.0, 1.2),
            )
            .unwrap();
        assert_orthonormal(&camera);

        let before = camera.rotation_basis();
        assert!(camera.set_axes(WORLD_X, WORLD_Z, WORLD_Z).is_err());
        assert_eq!(camera.rotation_basis(), before);
    }

    #[test]
    fn test_from_options_commits_start_pose() {
        let options = CameraOptions::default();
        let camera = Camera::from_options(&options).unwrap();
        assert_eq!(camera.position(), Vec3::from_array(options.start_position));
        let eye = camera
            .view_matrix()
            .transform_point(Vec3::from_array(options.start_position));
        assert!(eye.length() < 1e-5);
        assert_eq!(camera.perspective().fovy, options.fovy);
    }

    #[test]
    fn test_uniform_mirrors_committed_state() {
        let mut camera = Camera::new();
        camera.move_by(1.0, 2.0, 3.0);
        camera.update_view_matrix();

        // Uncommitted changes stay out of the uniform.
        camera.move_by(3.0, 0.0, 0.0);
        camera.rotate(0.0, 90.0, 0.0).unwrap();
        let uniform = camera.uniform();
        assert_eq!(uniform.position, [1.0, 2.0, 3.0]);
        assert_eq!(uniform.forward, [0.0, 0.0, -1.0]);
        assert_eq!(uniform.view, camera.view_matrix().to_cols_array_2d());
        assert_eq!(
            uniform.view_proj,
            camera.view_projection().to_cols_array_2d()
        );
        assert_eq!(uniform.as_bytes().len(), size_of::<CameraUniform>());
    }
}
