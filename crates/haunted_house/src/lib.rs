//! Haunted house scene
//!
//! A static night scene: a textured house with a glowing door light, a
//! graveyard of fifty procedurally scattered graves, a grass plane, and
//! three ghost point lights drifting along parametric paths. Built on the
//! retained-mode scene graph from `scene_engine`; drawing belongs to the
//! host renderer.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod app;
pub mod builder;
pub mod config;
pub mod ghosts;

pub use app::HauntedHouseApp;
pub use config::SceneConfig;
