//! Scene node representation
//!
//! Nodes are pure data: a local transform, a typed payload, and shadow
//! pass-through flags. Hierarchy bookkeeping (parent and children) is
//! owned by the [`SceneGraph`](super::SceneGraph); nodes are built
//! detached and attached under a parent key.

use slotmap::new_key_type;

use crate::foundation::math::{Transform, Vec3};
use crate::render::{Geometry, Material};
use crate::scene::Light;

new_key_type! {
    /// Stable key identifying a node in a scene graph
    ///
    /// Keys remain valid for the lifetime of the graph; scenes are built
    /// once and never torn down.
    pub struct NodeKey;
}

/// Typed payload of a scene node
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Container node with no drawable content of its own
    Group,

    /// Drawable mesh
    Mesh {
        /// Geometry descriptor (tessellated by the host renderer)
        geometry: Geometry,
        /// Surface material
        material: Material,
    },

    /// Light source positioned by the node's transform
    Light(Light),
}

/// A node in the scene graph
#[derive(Debug, Clone)]
pub struct Node {
    /// Debug name, used in logs and render stats
    pub name: String,

    /// Local transform relative to the parent node
    pub transform: Transform,

    /// Node payload
    pub kind: NodeKind,

    /// Whether the host shadow subsystem should treat this node as an occluder
    pub cast_shadow: bool,

    /// Whether the host shadow subsystem should project shadows onto this node
    pub receive_shadow: bool,
}

impl Node {
    fn new(name: &str, kind: NodeKind) -> Self {
        Self {
            name: name.to_string(),
            transform: Transform::identity(),
            kind,
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    /// Create a detached group node
    pub fn group(name: &str) -> Self {
        Self::new(name, NodeKind::Group)
    }

    /// Create a detached mesh node
    pub fn mesh(name: &str, geometry: Geometry, material: Material) -> Self {
        Self::new(name, NodeKind::Mesh { geometry, material })
    }

    /// Create a detached light node
    pub fn light(name: &str, light: Light) -> Self {
        Self::new(name, NodeKind::Light(light))
    }

    /// Set the local position
    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.position = Vec3::new(x, y, z);
        self
    }

    /// Set the local rotation from per-axis Euler angles in radians
    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.rotation = Transform::euler(x, y, z);
        self
    }

    /// Set a uniform local scale
    pub fn scaled(mut self, factor: f32) -> Self {
        self.transform.scale = Vec3::new(factor, factor, factor);
        self
    }

    /// Mark the node as a shadow caster
    pub fn casting_shadow(mut self) -> Self {
        self.cast_shadow = true;
        self
    }

    /// Mark the node as a shadow receiver
    pub fn receiving_shadow(mut self) -> Self {
        self.receive_shadow = true;
        self
    }

    /// Get the local position
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Whether this node is a light
    pub fn is_light(&self) -> bool {
        matches!(self.kind, NodeKind::Light(_))
    }

    /// Whether this node is a drawable mesh
    pub fn is_mesh(&self) -> bool {
        matches!(self.kind, NodeKind::Mesh { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Color;

    #[test]
    fn test_builder_sets_transform_and_flags() {
        let node = Node::mesh("walls", Geometry::cube(1.0), Material::new())
            .at(0.0, 1.24, 0.0)
            .casting_shadow();

        assert_eq!(node.name, "walls");
        assert!(node.is_mesh());
        assert!(node.cast_shadow);
        assert!(!node.receive_shadow);
        assert!((node.position().y - 1.24).abs() < 1e-6);
    }

    #[test]
    fn test_light_node_has_no_shadow_flags_by_default() {
        let node = Node::light("fill", Light::ambient(Color::white(), 0.3));
        assert!(node.is_light());
        assert!(!node.cast_shadow);
    }

    #[test]
    fn test_uniform_scale() {
        let node = Node::group("bush").scaled(0.25);
        assert_eq!(node.transform.scale, Vec3::new(0.25, 0.25, 0.25));
    }
}
