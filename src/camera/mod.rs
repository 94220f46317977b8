//! Camera system for free-flying 3D viewing.
//!
//! Provides the orientation/transform bookkeeping of a first-person camera,
//! fly controls driven by per-frame input, and frustum culling.

/// First-person fly controller mapping frame input onto the camera.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// View frustum extraction and intersection tests.
pub mod frustum;

pub use controller::FlyController;
pub use self::core::{
    Camera, CameraUniform, MAX_SAFE_PITCH, MAX_SAFE_ROLL, PARALLEL_DOT_TOLERANCE,
};
pub use frustum::{Frustum, Plane};
