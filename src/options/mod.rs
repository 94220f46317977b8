//! Centralized camera options with TOML preset support.
//!
//! All tweakable settings (projection, movement and look speeds, start pose,
//! keybindings) are consolidated here. Options serialize to/from TOML so a
//! flight setup can be stored next to the scene it belongs to.

mod camera;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CameraError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Camera projection, control and start-pose parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// The JSON schema, pretty-printed.
    pub fn json_schema_string() -> Result<String, CameraError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| CameraError::OptionsParse(e.to_string()))
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, CameraError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| CameraError::OptionsParse(e.to_string()))?;
        options.camera.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CameraError> {
        let content = std::fs::read_to_string(path).map_err(CameraError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CameraError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CameraError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CameraError::Io)?;
        }
        std::fs::write(path, content).map_err(CameraError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;
    use crate::math::DepthRange;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
fovy = 90.0
depth_range = "zero_to_one"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.camera.fovy, 90.0);
        assert_eq!(opts.camera.depth_range, DepthRange::ZeroToOne);
        // Everything else should be default
        assert_eq!(opts.camera.move_speed, 9.0);
        assert_eq!(opts.camera.start_position, [0.0, 0.0, 5.0]);
        assert_eq!(opts.keybindings, KeybindingOptions::default());
    }

    #[test]
    fn invalid_projection_is_rejected() {
        let err = Options::from_toml("[camera]\nznear = -1.0\n").unwrap_err();
        assert!(matches!(err, CameraError::InvalidFrustum { .. }));

        let err = Options::from_toml("[camera]\nfovy = \"wide\"\n").unwrap_err();
        assert!(matches!(err, CameraError::OptionsParse(_)));
    }

    #[test]
    fn vertical_start_pose_is_rejected() {
        let toml_str = r#"
[camera]
start_position = [0.0, 5.0, 0.0]
start_target = [0.0, 0.0, 0.0]
"#;
        let err = Options::from_toml(toml_str).unwrap_err();
        assert!(matches!(
            err,
            CameraError::DegenerateVector {
                context: "start view direction is vertical"
            }
        ));

        let err = Options::from_toml(
            "[camera]\nstart_position = [1.0, 1.0, 1.0]\nstart_target = [1.0, 1.0, 1.0]\n",
        )
        .unwrap_err();
        assert!(matches!(err, CameraError::DegenerateVector { .. }));

        // Looking down at an angle is fine.
        let opts = Options::from_toml(
            "[camera]\nstart_position = [0.0, 5.0, 5.0]\n",
        )
        .unwrap();
        assert!(crate::camera::Camera::from_options(&opts.camera).is_ok());
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(KeyAction::MoveForward));
        assert_eq!(opts.keybindings.lookup("KeyC"), Some(KeyAction::LevelRoll));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("flycam-options-{}", std::process::id()));
        let path = dir.join("nested").join("preset.toml");

        let mut opts = Options::default();
        opts.camera.invert_pitch = true;
        opts.camera.move_speed = 3.5;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Options::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, CameraError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        // Skipped sections should be absent
        assert!(!props.contains_key("keybindings"));

        // Camera should have exposed fields but not skipped ones
        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("move_speed").is_some());
        assert!(camera.get("invert_pitch").is_some());
        assert!(camera.get("znear").is_none());
        assert!(camera.get("start_position").is_none());

        assert!(Options::json_schema_string().unwrap().contains("Move Speed"));
    }
}
