//! Headless fly-through.
//!
//! Replays a scripted sequence of input frames against a camera and prints
//! the resulting pose and matrices. Useful for checking option presets and
//! control tuning without a window.
//!
//! ```text
//! flycam [OPTIONS_TOML] [SCRIPT_TOML]
//! flycam --schema
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::process::ExitCode;

use flycam::camera::{Camera, FlyController};
use flycam::input::{FrameInput, KeyAction};
use flycam::options::Options;
use flycam::util::FrameTiming;
use flycam::CameraError;
use glam::Vec2;
use serde::Deserialize;

/// Walk forward, look around, bank, then level out and go home.
const DEMO_SCRIPT: &str = r#"
[[frames]]
held = ["move_forward"]
repeat = 60

[[frames]]
mouse = [12.0, -4.0]
repeat = 30

[[frames]]
held = ["strafe_right", "move_up"]
repeat = 30

[[frames]]
held = ["roll_left"]
repeat = 20

[[frames]]
held = ["level_roll"]

[[frames]]
repeat = 60

[[frames]]
pressed = ["reset_view"]
"#;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Script {
    frames: Vec<ScriptFrame>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ScriptFrame {
    /// Seconds covered by the frame.
    dt: f32,
    held: Vec<KeyAction>,
    pressed: Vec<KeyAction>,
    /// Mouse counts, x right, y down.
    mouse: [f32; 2],
    repeat: u32,
}

impl Default for ScriptFrame {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            held: Vec::new(),
            pressed: Vec::new(),
            mouse: [0.0, 0.0],
            repeat: 1,
        }
    }
}

impl ScriptFrame {
    fn input(&self) -> FrameInput {
        FrameInput {
            held: self.held.iter().copied().collect(),
            pressed: self.pressed.iter().copied().collect(),
            mouse_delta: Vec2::from_array(self.mouse),
        }
    }
}

fn load_script(path: Option<&Path>) -> Result<Script, CameraError> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEMO_SCRIPT.to_owned(),
    };
    let script: Script = toml::from_str(&content)
        .map_err(|e| CameraError::OptionsParse(e.to_string()))?;
    if let Some(i) = script
        .frames
        .iter()
        .position(|f| !(f.dt.is_finite() && f.dt >= 0.0))
    {
        return Err(CameraError::OptionsParse(format!(
            "frame {i}: dt must be a non-negative number of seconds"
        )));
    }
    Ok(script)
}

fn run(
    options_path: Option<&Path>,
    script_path: Option<&Path>,
) -> Result<Camera, CameraError> {
    let options = match options_path {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let script = load_script(script_path)?;

    let mut camera = Camera::from_options(&options.camera)?;
    let mut controller = FlyController::from_options(&options.camera);
    let mut timing = FrameTiming::new(0);

    let mut frame_count = 0_u32;
    for frame in &script.frames {
        let first = frame.input();
        // Presses belong to the first repetition only.
        let repeated = FrameInput {
            pressed: HashSet::new(),
            ..first.clone()
        };
        for i in 0..frame.repeat {
            let input = if i == 0 { &first } else { &repeated };
            let dt = timing.record(web_time::Duration::from_secs_f32(frame.dt));
            controller.update(&mut camera, input, dt)?;
            frame_count += 1;
            log::debug!(
                "frame {frame_count}: position {:?} heading {:.2} pitch {:.2} roll {:.2}",
                camera.position(),
                camera.heading(),
                camera.pitch(),
                camera.roll(),
            );
        }
    }

    log::info!(
        "replayed {frame_count} frames ({:.1} simulated fps)",
        timing.fps()
    );
    Ok(camera)
}

#[allow(clippy::print_stdout)]
fn report(camera: &Camera) {
    println!("position   {:?}", camera.position().to_array());
    println!(
        "angles     heading {:.3} pitch {:.3} roll {:.3}",
        camera.heading(),
        camera.pitch(),
        camera.roll()
    );
    println!("direction  {:?}", camera.view_direction().to_array());
    println!("view       {:?}", camera.view_matrix().to_cols_array());
    println!("projection {:?}", camera.projection_matrix().to_cols_array());
}

#[allow(clippy::print_stdout)]
fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("--schema") {
        return match Options::json_schema_string() {
            Ok(schema) => {
                println!("{schema}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    let options_path = args.first().map(Path::new);
    let script_path = args.get(1).map(Path::new);
    match run(options_path, script_path) {
        Ok(camera) => {
            report(&camera);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("flycam: {e}");
            ExitCode::FAILURE
        }
    }
}
