//! # Scene Engine
//!
//! A small retained-mode scene-graph engine for declarative 3D scenes.
//!
//! ## Features
//!
//! - **Retained scene graph**: groups, meshes, and lights with stable keys
//! - **Declarative render data**: geometry descriptors and materials consumed
//!   by a pluggable host renderer
//! - **Frame-driven loop**: cooperative single-threaded tick with a
//!   monotonically increasing animation clock
//! - **Config and logging plumbing**: TOML/RON configuration, `env_logger`
//!
//! The engine owns the scene description; drawing, texture loading, and
//! windowing belong to the host renderer behind the [`render::Renderer`]
//! trait.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         let root = engine.scene.root();
//!         engine.scene.attach(root, Node::group("world"))?;
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, _engine: &mut Engine, _elapsed: f32, _delta: f32) -> Result<(), AppError> {
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default();
//!     let renderer = Box::new(scene_engine::render::HeadlessRenderer::new());
//!     Engine::run(config, renderer, &mut MyApp)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod render;
pub mod scene;

mod application;
mod engine;

pub use application::{AppError, Application};
pub use engine::{Engine, EngineConfig, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        application::{AppError, Application},
        config::Config,
        engine::{Engine, EngineConfig, EngineError},
        foundation::{
            math::{Transform, Vec3},
            time::FrameClock,
        },
        render::{Fog, Geometry, Material, Renderer, TextureSet},
        scene::{Color, Light, Node, NodeKey, NodeKind, SceneError, SceneGraph, ShadowSettings},
    };
}
