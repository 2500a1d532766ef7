//! Scene configuration
//!
//! Tunables for the procedural parts of the scene. Defaults reproduce the
//! authored layout; a config file only needs to override what it changes.

use scene_engine::config::{Config, Deserialize, Serialize};

/// Haunted house scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of graves to scatter around the house
    pub grave_count: u32,

    /// Minimum horizontal distance of a grave from the origin
    ///
    /// Keeps the graveyard clear of the house footprint.
    pub grave_radius_min: f32,

    /// Width of the radius band graves are placed in
    pub grave_radius_span: f32,

    /// Full width of the random tilt range per axis, in radians
    ///
    /// Each grave draws its Y and Z tilt from
    /// `(-grave_tilt / 2, grave_tilt / 2)`. Purely cosmetic.
    pub grave_tilt: f32,

    /// Side length of the square ground plane
    pub ground_size: f32,

    /// Seed for grave placement; `None` gives a fresh layout every run
    pub seed: Option<u64>,

    /// Frame budget for headless runs
    pub max_frames: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grave_count: 50,
            grave_radius_min: 3.1,
            grave_radius_span: 6.0,
            grave_tilt: 0.3,
            ground_size: 20.0,
            seed: None,
            max_frames: 600,
        }
    }
}

impl Config for SceneConfig {}

impl SceneConfig {
    /// Largest horizontal grave distance this configuration can produce
    pub fn grave_radius_max(&self) -> f32 {
        self.grave_radius_min + self.grave_radius_span
    }
}
