//! Haunted house binary
//!
//! Runs the scene headless for a bounded number of frames. Point
//! `RUST_LOG=info` at it to watch the scene census and shutdown log.

use haunted_house::{HauntedHouseApp, SceneConfig};
use scene_engine::config::Config;
use scene_engine::render::HeadlessRenderer;
use scene_engine::{Engine, EngineConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    scene_engine::foundation::logging::init();

    let scene_config = SceneConfig::load_or_default("haunted_house.toml")?;
    let engine_config = EngineConfig {
        max_frames: Some(scene_config.max_frames),
        // Headless runs are not vsynced, so step a nominal 60 Hz frame.
        fixed_step: Some(1.0 / 60.0),
    };

    let mut app = HauntedHouseApp::new(scene_config);
    Engine::run(engine_config, Box::new(HeadlessRenderer::new()), &mut app)?;
    Ok(())
}
