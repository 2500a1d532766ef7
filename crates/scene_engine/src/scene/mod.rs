//! Retained-mode scene graph
//!
//! A scene is a tree of typed nodes: groups (containers), meshes
//! (geometry + material), and lights. Nodes carry a local transform and
//! shadow pass-through flags; the host renderer consumes the tree for
//! draw-call generation and shadow mapping.
//!
//! ## Architecture
//!
//! ```text
//! Scene Builder (application)
//!      ↓ attach / setters
//! SceneGraph (this module)
//!      ↓ visit
//! Renderer (host collaborator)
//! ```

mod light;
mod node;
mod scene_graph;

pub use light::{Color, Light, ShadowSettings};
pub use node::{Node, NodeKey, NodeKind};
pub use scene_graph::{Result as SceneResult, SceneError, SceneGraph};
