//! Folds raw platform events into per-frame camera input.
//!
//! The `InputProcessor` owns all transient input state (held actions, mouse
//! tracking) and the key-binding map. It is the only thing that sits between
//! raw window events and the [`FlyController`](crate::camera::FlyController).

use std::collections::HashSet;

use glam::Vec2;

use super::event::InputEvent;
use super::keyboard::KeyAction;
use super::mouse::MouseTracker;
use crate::options::KeybindingOptions;

/// One frame's worth of camera input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Actions whose key is currently down.
    pub held: HashSet<KeyAction>,
    /// Actions whose key went down since the previous frame.
    pub pressed: HashSet<KeyAction>,
    /// Mouse motion since the previous frame, in mouse counts
    /// (x right, y down).
    pub mouse_delta: Vec2,
}

impl FrameInput {
    /// Input with the given actions held and no mouse motion.
    #[must_use]
    pub fn holding(actions: &[KeyAction]) -> Self {
        Self {
            held: actions.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Whether `action` is held this frame.
    #[must_use]
    pub fn is_held(&self, action: KeyAction) -> bool {
        self.held.contains(&action)
    }

    /// Whether `action` was pressed since the previous frame.
    #[must_use]
    pub fn was_pressed(&self, action: KeyAction) -> bool {
        self.pressed.contains(&action)
    }

    /// Whether the frame carries no input at all.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.held.is_empty()
            && self.pressed.is_empty()
            && self.mouse_delta == Vec2::ZERO
    }
}

/// Converts raw window events into [`FrameInput`] snapshots.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// input_processor.handle_event(&event);
///
/// // Once per frame:
/// let frame = input_processor.take_frame();
/// controller.update(&mut camera, &frame, dt)?;
/// ```
pub struct InputProcessor {
    /// Mouse tracking.
    mouse: MouseTracker,
    /// Actions whose key is down.
    held: HashSet<KeyAction>,
    /// Actions pressed since the last `take_frame`.
    pressed: HashSet<KeyAction>,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            mouse: MouseTracker::new(),
            held: HashSet::new(),
            pressed: HashSet::new(),
            key_bindings,
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings. Held actions are released so a rebinding
    /// cannot leave an action stuck down.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
        self.held.clear();
    }

    /// Whether `action` is currently held.
    #[must_use]
    pub fn is_held(&self, action: KeyAction) -> bool {
        self.held.contains(&action)
    }

    /// Process a raw input event. Returns `true` if the event affected
    /// camera input.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key { key, pressed } => self.handle_key(key, *pressed),
            InputEvent::MouseMotion { dx, dy } => {
                self.mouse.handle_motion(*dx, *dy);
                true
            }
            InputEvent::CursorMoved { x, y } => {
                self.mouse.handle_cursor_moved(*x, *y);
                true
            }
            InputEvent::FocusLost => {
                self.held.clear();
                self.mouse.reset();
                true
            }
        }
    }

    fn handle_key(&mut self, key: &str, pressed: bool) -> bool {
        let Some(action) = self.key_bindings.lookup(key) else {
            return false;
        };
        if pressed {
            // Auto-repeat presses of a held key are not new presses.
            if self.held.insert(action) {
                let _ = self.pressed.insert(action);
            }
        } else {
            let _ = self.held.remove(&action);
        }
        true
    }

    /// Snapshot this frame's input and start accumulating the next one.
    /// Held keys carry over; presses and mouse motion do not.
    pub fn take_frame(&mut self) -> FrameInput {
        FrameInput {
            held: self.held.clone(),
            pressed: std::mem::take(&mut self.pressed),
            mouse_delta: self.mouse.take_delta(),
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
