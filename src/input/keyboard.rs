use serde::{Deserialize, Serialize};

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// level_roll = "KeyC"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Walk along the horizontal view direction.
    MoveForward,
    /// Walk against the horizontal view direction.
    MoveBackward,
    /// Strafe left.
    StrafeLeft,
    /// Strafe right.
    StrafeRight,
    /// Rise along world up.
    MoveUp,
    /// Sink along world down.
    MoveDown,
    /// Look up.
    PitchUp,
    /// Look down.
    PitchDown,
    /// Turn left about world up.
    TurnLeft,
    /// Turn right about world up.
    TurnRight,
    /// Tilt counter-clockwise.
    RollLeft,
    /// Tilt clockwise.
    RollRight,
    /// Bring roll back to level.
    LevelRoll,
    /// Return to the start pose.
    ResetView,
}

impl KeyAction {
    /// Every action, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::MoveForward,
        Self::MoveBackward,
        Self::StrafeLeft,
        Self::StrafeRight,
        Self::MoveUp,
        Self::MoveDown,
        Self::PitchUp,
        Self::PitchDown,
        Self::TurnLeft,
        Self::TurnRight,
        Self::RollLeft,
        Self::RollRight,
        Self::LevelRoll,
        Self::ResetView,
    ];
}
