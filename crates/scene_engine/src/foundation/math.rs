//! Math utilities and types
//!
//! Provides the fundamental math types used throughout the scene graph.
//! Coordinates are Y-up right-handed.

pub use nalgebra::{Matrix4, Unit, UnitQuaternion, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Quaternion type for rotations
pub type Quat = UnitQuaternion<f32>;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a rotation from per-axis Euler angles in radians
    ///
    /// Scene content is authored as per-axis tilts, so this is the main
    /// way rotations enter the graph.
    pub fn euler(x: f32, y: f32, z: f32) -> Quat {
        Quat::from_euler_angles(x, y, z)
    }

    /// Recover per-axis Euler angles (x, y, z) in radians
    pub fn euler_angles(&self) -> (f32, f32, f32) {
        self.rotation.euler_angles()
    }

    /// Convert to a transformation matrix (TRS order)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Combine this transform with a child transform
    pub fn combine(&self, other: &Transform) -> Transform {
        Transform {
            position: self.position + self.rotation * self.scale.component_mul(&other.position),
            rotation: self.rotation * other.rotation,
            scale: self.scale.component_mul(&other.scale),
        }
    }
}
