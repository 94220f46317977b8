// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math compares floats against exact constants and casts freely
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

//! Free-flying 3D camera built on glam.
//!
//! Flycam keeps an orthonormal orientation basis, turns incremental
//! rotation and translation input into FPS-style camera motion, and derives
//! the view and projection matrices a renderer uploads each frame. Window
//! creation, input polling and GPU upload stay with the caller.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - orientation, position and transform bookkeeping
//! - [`camera::FlyController`] - maps one frame of input onto the camera
//! - [`input::InputProcessor`] - folds raw window events into
//!   [`input::FrameInput`] snapshots
//! - [`options::Options`] - TOML-backed configuration (projection, speeds,
//!   key bindings)
//!
//! # Frame protocol
//!
//! Rotation and translation calls only touch the orientation basis and the
//! position. The view matrix is rebuilt by an explicit
//! [`camera::Camera::update_view_matrix`] commit, so any number of
//! `rotate`/`move_*` calls can be batched before a single rebuild:
//!
//! ```
//! use flycam::camera::Camera;
//! use flycam::math::vector::WORLD_Y;
//! use glam::Vec3;
//!
//! # fn main() -> Result<(), flycam::CameraError> {
//! let mut camera = Camera::new();
//! camera.set_perspective_projection(70.0, 16.0 / 9.0, 0.05, 256.0)?;
//! camera.look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, WORLD_Y)?;
//!
//! camera.rotate(2.0, -5.0, 0.0)?;
//! camera.move_forward(0.0, 0.0, -0.15)?;
//! camera.update_view_matrix();
//!
//! let view: [f32; 16] = camera.view_matrix().to_cols_array();
//! let projection: [f32; 16] = camera.projection_matrix().to_cols_array();
//! # let _ = (view, projection);
//! # Ok(())
//! # }
//! ```
//!
//! The camera is single-threaded state with no interior locking. Matrices
//! are handed out by value, so a reader never sees a half-built transform.

pub mod camera;
pub mod error;
pub mod input;
pub mod math;
pub mod options;
pub mod util;

pub use error::CameraError;
