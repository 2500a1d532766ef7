//! Application wiring
//!
//! Connects the scene builder and the ghost animator to the engine loop:
//! the scene is built once in `initialize`, and each frame only the three
//! ghost light positions change.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use scene_engine::prelude::*;

use crate::builder::{self, SceneHandles};
use crate::config::SceneConfig;
use crate::ghosts::GhostRig;

/// The haunted house application
pub struct HauntedHouseApp {
    config: SceneConfig,
    handles: Option<SceneHandles>,
    rig: Option<GhostRig>,
}

impl HauntedHouseApp {
    /// Create the application with the given scene configuration
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            handles: None,
            rig: None,
        }
    }

    /// Keys of the built scene parts, once `initialize` has run
    pub fn handles(&self) -> Option<SceneHandles> {
        self.handles
    }
}

impl Application for HauntedHouseApp {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let handles = builder::build_scene(&mut engine.scene, &self.config, &mut rng)?;
        engine.fog = builder::fog();

        log::info!(
            "built haunted house: {} nodes, {} graves, seed {:?}",
            engine.scene.len(),
            self.config.grave_count,
            self.config.seed
        );

        self.rig = Some(GhostRig::new(handles.ghosts));
        self.handles = Some(handles);
        Ok(())
    }

    fn update(
        &mut self,
        engine: &mut Engine,
        elapsed: f32,
        _delta_time: f32,
    ) -> Result<(), AppError> {
        if let Some(rig) = &self.rig {
            rig.animate(&mut engine.scene, elapsed)?;
        }
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        log::info!("stopping after {} frames", engine.frame_count());
    }
}
