use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "KeybindingTable")]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// Bindings read from TOML override the defaults action by action, so a
/// preset only needs to list the keys it changes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `MoveForward` → `"KeyW"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

/// On-disk shape of [`KeybindingOptions`].
#[derive(Deserialize, Default)]
#[serde(default)]
struct KeybindingTable {
    bindings: HashMap<KeyAction, String>,
}

impl From<KeybindingTable> for KeybindingOptions {
    fn from(table: KeybindingTable) -> Self {
        let mut opts = Self::default();
        // Apply in a fixed order so conflicting entries resolve the same way
        // every load.
        for action in KeyAction::ALL {
            if let Some(key) = table.bindings.get(&action) {
                opts.bind(action, key.clone());
            }
        }
        opts
    }
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::MoveForward, "KeyW".into()),
            (KeyAction::MoveBackward, "KeyS".into()),
            (KeyAction::StrafeLeft, "KeyA".into()),
            (KeyAction::StrafeRight, "KeyD".into()),
            (KeyAction::MoveUp, "Space".into()),
            (KeyAction::MoveDown, "ShiftLeft".into()),
            (KeyAction::PitchUp, "ArrowUp".into()),
            (KeyAction::PitchDown, "ArrowDown".into()),
            (KeyAction::TurnLeft, "ArrowLeft".into()),
            (KeyAction::TurnRight, "ArrowRight".into()),
            (KeyAction::RollLeft, "KeyQ".into()),
            (KeyAction::RollRight, "KeyE".into()),
            (KeyAction::LevelRoll, "KeyC".into()),
            (KeyAction::ResetView, "KeyR".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    ///
    /// If two actions share a key, the one declared first in [`KeyAction`]
    /// wins.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for action in KeyAction::ALL {
            if let Some(key) = self.bindings.get(&action) {
                let _ = self.key_to_action.entry(key.clone()).or_insert(action);
            }
        }
    }

    /// Bind `action` to `key`, unbinding whatever action held that key.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let key = key.into();
        self.bindings.retain(|bound, k| *bound == action || *k != key);
        let _ = self.bindings.insert(action, key);
        self.rebuild_reverse_map();
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }

    /// Key bound to `action`, if any.
    #[must_use]
    pub fn key_for(&self, action: KeyAction) -> Option<&str> {
        self.bindings.get(&action).map(String::as_str)
    }
}
