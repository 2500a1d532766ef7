//! Geometry descriptors
//!
//! Parametric shapes in node-local units. The host renderer owns vertex
//! generation; the engine only records dimensions.

/// A parametric geometry descriptor
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Axis-aligned box centered on the node origin
    Box {
        /// Extent along X
        width: f32,
        /// Extent along Y
        height: f32,
        /// Extent along Z
        depth: f32,
    },

    /// Flat rectangle in the node's XY plane
    Plane {
        /// Extent along X
        width: f32,
        /// Extent along Y
        height: f32,
    },

    /// Sphere centered on the node origin
    Sphere {
        /// Sphere radius
        radius: f32,
        /// Tessellation hint for the host renderer
        segments: u32,
    },

    /// Cone with its base in the node's XZ plane
    Cone {
        /// Base radius
        radius: f32,
        /// Height along Y
        height: f32,
        /// Radial segment count; 4 gives a pyramid
        segments: u32,
    },
}

impl Geometry {
    /// Create a box descriptor
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Self::Box {
            width,
            height,
            depth,
        }
    }

    /// Create a box descriptor with equal sides
    pub fn cube(size: f32) -> Self {
        Self::cuboid(size, size, size)
    }

    /// Create a plane descriptor
    pub fn plane(width: f32, height: f32) -> Self {
        Self::Plane { width, height }
    }

    /// Create a sphere descriptor
    pub fn sphere(radius: f32, segments: u32) -> Self {
        Self::Sphere { radius, segments }
    }

    /// Create a cone descriptor
    pub fn cone(radius: f32, height: f32, segments: u32) -> Self {
        Self::Cone {
            radius,
            height,
            segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_has_equal_sides() {
        let Geometry::Box {
            width,
            height,
            depth,
        } = Geometry::cube(2.5)
        else {
            panic!("expected a box");
        };
        assert_eq!(width, 2.5);
        assert_eq!(height, 2.5);
        assert_eq!(depth, 2.5);
    }

    #[test]
    fn test_pyramid_is_a_four_segment_cone() {
        let roof = Geometry::cone(3.5, 1.0, 4);
        assert_eq!(
            roof,
            Geometry::Cone {
                radius: 3.5,
                height: 1.0,
                segments: 4
            }
        );
    }
}
