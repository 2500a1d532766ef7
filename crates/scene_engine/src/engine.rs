//! Core engine implementation

use thiserror::Error;

use crate::application::{AppError, Application};
use crate::foundation::time::FrameClock;
use crate::render::{Fog, RenderError, Renderer};
use crate::scene::SceneGraph;

/// Engine configuration
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Stop after this many frames; `None` runs until the host stops the loop
    pub max_frames: Option<u64>,

    /// Advance the clock by a fixed step instead of wall-clock time
    pub fixed_step: Option<f32>,
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Application callback failed
    #[error("Application error: {0}")]
    Application(#[from] AppError),

    /// Renderer rejected a frame
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Main engine struct
///
/// Owns the scene graph, the animation clock, and the host renderer, and
/// runs the cooperative single-threaded frame loop: clock update, then
/// application update, then render. All scene mutation happens
/// synchronously inside the loop, so no locking is needed.
pub struct Engine {
    /// The scene graph built by the application
    pub scene: SceneGraph,

    /// Scene fog, pass-through for the renderer
    pub fog: Fog,

    /// Frame timing
    clock: FrameClock,

    /// Host renderer
    renderer: Box<dyn Renderer>,

    /// Engine configuration
    config: EngineConfig,

    /// Whether the loop should keep running
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig, renderer: Box<dyn Renderer>) -> Self {
        let clock = match config.fixed_step {
            Some(step) => FrameClock::fixed_step(step),
            None => FrameClock::new(),
        };
        Self {
            scene: SceneGraph::new(),
            fog: Fog::default(),
            clock,
            renderer,
            config,
            running: true,
        }
    }

    /// Run the engine main loop with the given application
    pub fn run<T: Application>(
        config: EngineConfig,
        renderer: Box<dyn Renderer>,
        app: &mut T,
    ) -> Result<(), EngineError> {
        let mut engine = Self::new(config, renderer);

        log::info!("Initializing scene...");
        app.initialize(&mut engine)?;

        log::info!("Starting main loop...");
        while engine.running {
            engine.step(app)?;
        }

        app.cleanup(&mut engine);
        log::info!("Engine shutdown complete");
        Ok(())
    }

    /// Advance one frame: clock, application update, render
    pub fn step<T: Application>(&mut self, app: &mut T) -> Result<(), EngineError> {
        self.clock.update();
        let elapsed = self.clock.elapsed();
        let delta_time = self.clock.delta_time();

        app.update(self, elapsed, delta_time)?;
        self.render()?;

        if let Some(max_frames) = self.config.max_frames {
            if self.clock.frame_count() >= max_frames {
                self.running = false;
            }
        }
        Ok(())
    }

    /// Render the current frame
    fn render(&mut self) -> Result<(), EngineError> {
        self.renderer.render(&self.scene, &self.fog)?;
        Ok(())
    }

    /// Request that the loop stop after the current frame
    pub fn request_stop(&mut self) {
        self.running = false;
    }

    /// Seconds elapsed since the loop started
    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    /// Number of completed frames
    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count()
    }
}
