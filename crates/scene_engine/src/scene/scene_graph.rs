//! Scene graph container
//!
//! Stores nodes in a slot map for O(1) access through stable keys and
//! maintains the parent/child hierarchy. All mutation of node transforms
//! goes through setters on the graph so that animation code never holds
//! aliased references into renderer-visible structures.

use slotmap::SlotMap;
use thiserror::Error;

use crate::foundation::math::{Mat4, Transform, Vec3};
use crate::scene::{Node, NodeKey, NodeKind};

/// Scene graph errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// A node key did not resolve to a live node
    #[error("invalid node key: {0}")]
    InvalidNode(String),
}

/// Convenience result alias for scene operations
pub type Result<T> = std::result::Result<T, SceneError>;

/// A tree of typed scene nodes rooted at a single group
///
/// The root group is created with the graph and has no parent. Nodes are
/// attached once and never removed; there is no scene teardown.
#[derive(Debug)]
pub struct SceneGraph {
    nodes: SlotMap<NodeKey, Node>,
    children: slotmap::SecondaryMap<NodeKey, Vec<NodeKey>>,
    parents: slotmap::SecondaryMap<NodeKey, NodeKey>,
    root: NodeKey,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    /// Create a new graph containing only the root group
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let mut children = slotmap::SecondaryMap::new();
        let root = nodes.insert(Node::group("root"));
        children.insert(root, Vec::new());
        Self {
            nodes,
            children,
            parents: slotmap::SecondaryMap::new(),
            root,
        }
    }

    /// Get the root group key
    pub fn root(&self) -> NodeKey {
        self.root
    }

    /// Attach a detached node under `parent`, returning its key
    ///
    /// Fails if `parent` does not identify a live node.
    pub fn attach(&mut self, parent: NodeKey, node: Node) -> Result<NodeKey> {
        if !self.nodes.contains_key(parent) {
            return Err(SceneError::InvalidNode(format!("{parent:?}")));
        }
        let key = self.nodes.insert(node);
        self.children.insert(key, Vec::new());
        self.parents.insert(key, parent);
        self.children[parent].push(key);
        Ok(key)
    }

    /// Attach a new group node under `parent`
    pub fn add_group(&mut self, parent: NodeKey, name: &str) -> Result<NodeKey> {
        self.attach(parent, Node::group(name))
    }

    /// Borrow a node
    pub fn node(&self, key: NodeKey) -> Result<&Node> {
        self.nodes
            .get(key)
            .ok_or_else(|| SceneError::InvalidNode(format!("{key:?}")))
    }

    /// Mutably borrow a node
    pub fn node_mut(&mut self, key: NodeKey) -> Result<&mut Node> {
        self.nodes
            .get_mut(key)
            .ok_or_else(|| SceneError::InvalidNode(format!("{key:?}")))
    }

    /// Set a node's local position
    pub fn set_position(&mut self, key: NodeKey, position: Vec3) -> Result<()> {
        self.node_mut(key)?.transform.position = position;
        Ok(())
    }

    /// Set a node's local rotation from per-axis Euler angles in radians
    pub fn set_rotation(&mut self, key: NodeKey, x: f32, y: f32, z: f32) -> Result<()> {
        self.node_mut(key)?.transform.rotation = Transform::euler(x, y, z);
        Ok(())
    }

    /// Set a node's local scale
    pub fn set_scale(&mut self, key: NodeKey, scale: Vec3) -> Result<()> {
        self.node_mut(key)?.transform.scale = scale;
        Ok(())
    }

    /// Get a node's local position
    pub fn position(&self, key: NodeKey) -> Result<Vec3> {
        Ok(self.node(key)?.transform.position)
    }

    /// Get the keys of a node's direct children
    pub fn children(&self, key: NodeKey) -> Result<&[NodeKey]> {
        if !self.nodes.contains_key(key) {
            return Err(SceneError::InvalidNode(format!("{key:?}")));
        }
        Ok(self.children.get(key).map_or(&[], Vec::as_slice))
    }

    /// Compute a node's world transform by walking the parent chain
    pub fn world_transform(&self, key: NodeKey) -> Result<Mat4> {
        let mut transform = self.node(key)?.transform.clone();
        let mut current = key;
        while let Some(&parent) = self.parents.get(current) {
            transform = self.nodes[parent].transform.combine(&transform);
            current = parent;
        }
        Ok(transform.to_matrix())
    }

    /// Total number of nodes, including the root
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph contains only the root
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Iterate over all node keys in storage order
    pub fn keys(&self) -> impl Iterator<Item = NodeKey> + '_ {
        self.nodes.keys()
    }

    /// Depth-first traversal from the root
    ///
    /// The callback receives each node's key, the node, and its depth
    /// (root = 0). Children are visited in attachment order.
    pub fn visit<F>(&self, mut callback: F)
    where
        F: FnMut(NodeKey, &Node, usize),
    {
        self.visit_from(self.root, 0, &mut callback);
    }

    fn visit_from<F>(&self, key: NodeKey, depth: usize, callback: &mut F)
    where
        F: FnMut(NodeKey, &Node, usize),
    {
        callback(key, &self.nodes[key], depth);
        if let Some(child_keys) = self.children.get(key) {
            for &child in child_keys {
                self.visit_from(child, depth + 1, callback);
            }
        }
    }

    /// Count drawable meshes in the graph
    pub fn mesh_count(&self) -> usize {
        self.nodes.values().filter(|n| n.is_mesh()).count()
    }

    /// Count light sources in the graph
    pub fn light_count(&self) -> usize {
        self.nodes.values().filter(|n| n.is_light()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Geometry, Material};
    use approx::assert_relative_eq;

    #[test]
    fn test_new_graph_has_only_root() {
        let graph = SceneGraph::new();
        assert_eq!(graph.len(), 1);
        assert!(graph.is_empty());
        assert!(graph.children(graph.root()).unwrap().is_empty());
    }

    #[test]
    fn test_attach_builds_hierarchy() {
        let mut graph = SceneGraph::new();
        let house = graph.add_group(graph.root(), "house").unwrap();
        let walls = graph
            .attach(house, Node::mesh("walls", Geometry::cube(4.0), Material::new()))
            .unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.children(graph.root()).unwrap(), &[house]);
        assert_eq!(graph.children(house).unwrap(), &[walls]);
        assert_eq!(graph.mesh_count(), 1);
    }

    #[test]
    fn test_null_parent_key_is_rejected() {
        let mut graph = SceneGraph::new();
        // The null key never resolves; nodes are never removed, so this is
        // the only kind of dangling key a caller can hold.
        let result = graph.attach(NodeKey::default(), Node::group("orphan"));
        assert!(matches!(result, Err(SceneError::InvalidNode(_))));
        assert!(graph.node(NodeKey::default()).is_err());
        assert!(graph.set_position(NodeKey::default(), Vec3::zeros()).is_err());
    }

    #[test]
    fn test_setters_mutate_transform() {
        let mut graph = SceneGraph::new();
        let key = graph.add_group(graph.root(), "ghost").unwrap();
        graph.set_position(key, Vec3::new(0.0, 0.0, 4.0)).unwrap();
        graph.set_rotation(key, 0.0, 0.1, -0.1).unwrap();
        graph.set_scale(key, Vec3::new(2.0, 2.0, 2.0)).unwrap();

        assert_relative_eq!(graph.position(key).unwrap().z, 4.0);
        let node = graph.node(key).unwrap();
        let (_, y, z) = node.transform.euler_angles();
        assert_relative_eq!(y, 0.1, epsilon = 1e-5);
        assert_relative_eq!(z, -0.1, epsilon = 1e-5);
        assert_relative_eq!(node.transform.scale.x, 2.0);
    }

    #[test]
    fn test_keys_cover_every_node() {
        let mut graph = SceneGraph::new();
        graph.add_group(graph.root(), "a").unwrap();
        graph.add_group(graph.root(), "b").unwrap();
        assert_eq!(graph.keys().count(), graph.len());
        assert!(graph.keys().all(|key| graph.node(key).is_ok()));
    }

    #[test]
    fn test_world_transform_composes_parent_chain() {
        let mut graph = SceneGraph::new();
        let house = graph.add_group(graph.root(), "house").unwrap();
        graph.set_position(house, Vec3::new(0.0, 0.0, 2.0)).unwrap();
        let light = graph
            .attach(house, Node::group("door-light").at(0.0, 2.2, 0.7))
            .unwrap();

        let world = graph.world_transform(light).unwrap();
        assert_relative_eq!(world.m14, 0.0, epsilon = 1e-6);
        assert_relative_eq!(world.m24, 2.2, epsilon = 1e-6);
        assert_relative_eq!(world.m34, 2.7, epsilon = 1e-6);
    }

    #[test]
    fn test_visit_reports_depth_in_attachment_order() {
        let mut graph = SceneGraph::new();
        let group = graph.add_group(graph.root(), "graveyard").unwrap();
        graph.add_group(group, "grave-0").unwrap();
        graph.add_group(group, "grave-1").unwrap();

        let mut names = Vec::new();
        graph.visit(|_, node, depth| names.push((node.name.clone(), depth)));
        assert_eq!(
            names,
            vec![
                ("root".to_string(), 0),
                ("graveyard".to_string(), 1),
                ("grave-0".to_string(), 2),
                ("grave-1".to_string(), 2),
            ]
        );
    }
}
