//! Application trait and lifecycle management

use thiserror::Error;

use crate::engine::Engine;
use crate::scene::SceneError;

/// Application lifecycle trait
///
/// Implement this trait to drive a scene with the engine loop.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once before the first frame. Build the scene graph here.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every frame before rendering.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `elapsed` - Seconds since the animation loop began (never decreases)
    /// * `delta_time` - Seconds since the previous frame
    fn update(&mut self, engine: &mut Engine, elapsed: f32, delta_time: f32)
        -> Result<(), AppError>;

    /// Cleanup the application
    ///
    /// Called once when the loop ends.
    fn cleanup(&mut self, _engine: &mut Engine) {}
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Scene graph error propagated to application level
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),
}
