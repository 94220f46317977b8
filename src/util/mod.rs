//! Shared utilities.
//!
//! Frame timing for turning wall-clock time into per-frame camera deltas.

/// Frame pacing and delta-time measurement.
pub mod frame_timing;

pub use frame_timing::FrameTiming;
