//! Host renderer boundary
//!
//! The engine hands the scene graph to a [`Renderer`] once per frame and
//! otherwise knows nothing about drawing. [`HeadlessRenderer`] is the
//! built-in implementation for tests and windowless runs: it traverses
//! the graph and records frame statistics instead of issuing draw calls.

use thiserror::Error;

use crate::scene::{Color, SceneGraph};

/// Distance fog over the whole scene, pass-through for the host renderer
///
/// The fog color doubles as the clear color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    /// Fog color
    pub color: Color,
    /// Distance at which fog starts
    pub near: f32,
    /// Distance at which fog fully obscures
    pub far: f32,
}

impl Default for Fog {
    fn default() -> Self {
        Self {
            color: Color::new(0.0, 0.0, 0.0),
            near: 1.0,
            far: 1000.0,
        }
    }
}

/// Renderer errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// The rendering backend rejected the frame
    #[error("render backend error: {0}")]
    Backend(String),
}

/// The host rendering collaborator
///
/// Implementations receive the full scene description each frame and own
/// everything from draw-call generation to shadow mapping.
pub trait Renderer {
    /// Render one frame of the given scene
    fn render(&mut self, scene: &SceneGraph, fog: &Fog) -> Result<(), RenderError>;
}

/// Per-frame scene statistics collected by the headless renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Total nodes visited
    pub nodes: usize,
    /// Drawable meshes visited
    pub meshes: usize,
    /// Light sources visited
    pub lights: usize,
    /// Nodes flagged as shadow casters
    pub shadow_casters: usize,
}

/// A renderer that draws nothing
///
/// Traverses the scene exactly like a real backend would and keeps the
/// statistics of the last frame, which tests assert against.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u64,
    last_stats: FrameStats,
}

impl HeadlessRenderer {
    /// Create a new headless renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the most recently rendered frame
    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    /// Number of frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for HeadlessRenderer {
    fn render(&mut self, scene: &SceneGraph, _fog: &Fog) -> Result<(), RenderError> {
        let mut stats = FrameStats::default();
        scene.visit(|_, node, _| {
            stats.nodes += 1;
            if node.is_mesh() {
                stats.meshes += 1;
            }
            if node.is_light() {
                stats.lights += 1;
            }
            if node.cast_shadow {
                stats.shadow_casters += 1;
            }
        });

        self.frames += 1;
        self.last_stats = stats;
        if self.frames == 1 {
            log::info!(
                "scene: {} nodes, {} meshes, {} lights, {} shadow casters",
                stats.nodes,
                stats.meshes,
                stats.lights,
                stats.shadow_casters
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Geometry, Material};
    use crate::scene::{Light, Node};

    #[test]
    fn test_headless_renderer_counts_node_kinds() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        graph
            .attach(
                root,
                Node::mesh("floor", Geometry::plane(20.0, 20.0), Material::new()),
            )
            .unwrap();
        graph
            .attach(root, Node::light("fill", Light::ambient(Color::white(), 0.3)))
            .unwrap();
        let caster = Node::mesh("grave", Geometry::cuboid(0.6, 0.8, 0.2), Material::new())
            .casting_shadow();
        graph.attach(root, caster).unwrap();

        let mut renderer = HeadlessRenderer::new();
        renderer.render(&graph, &Fog::default()).unwrap();

        let stats = renderer.last_stats();
        assert_eq!(stats.nodes, 4); // root included
        assert_eq!(stats.meshes, 2);
        assert_eq!(stats.lights, 1);
        assert_eq!(stats.shadow_casters, 1);
        assert_eq!(renderer.frames(), 1);
    }
}
