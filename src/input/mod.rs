//! Input handling: event types, key actions, and the input processor that
//! folds raw window events into per-frame camera input.

/// Platform-agnostic input events.
pub mod event;
/// Bindable camera actions.
pub mod keyboard;
/// Mouse position tracking.
pub(crate) mod mouse;
/// Converts raw events into frame snapshots.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use processor::{FrameInput, InputProcessor};
