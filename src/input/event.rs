/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor), which
/// folds them into one [`FrameInput`](super::FrameInput) per frame.
///
/// # Example
///
/// ```
/// use flycam::input::{InputEvent, InputProcessor, KeyAction};
///
/// let mut input = InputProcessor::new();
/// let _ = input.handle_event(&InputEvent::key("KeyW", true));
/// let _ = input.handle_event(&InputEvent::MouseMotion { dx: 4.0, dy: -2.0 });
///
/// let frame = input.take_frame();
/// assert!(frame.is_held(KeyAction::MoveForward));
/// assert_eq!(frame.mouse_delta.x, 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Physical key pressed or released.
    Key {
        /// Key code string in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"Space"`, `"ArrowUp"`).
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Relative mouse motion (grabbed cursor).
    MouseMotion {
        /// Horizontal motion in mouse counts, positive to the right.
        dx: f32,
        /// Vertical motion in mouse counts, positive downward.
        dy: f32,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// The window lost keyboard focus; every held key counts as released.
    FocusLost,
}

impl InputEvent {
    /// Shorthand for [`InputEvent::Key`].
    #[must_use]
    pub fn key(key: impl Into<String>, pressed: bool) -> Self {
        Self::Key {
            key: key.into(),
            pressed,
        }
    }
}
