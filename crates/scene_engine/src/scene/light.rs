//! Light sources and colors
//!
//! Pure data descriptions of the three supported light kinds. Shadow
//! parameters are pass-through for the host shadow-mapping subsystem;
//! nothing here computes shadows.

/// Linear RGB color with components in the 0.0 to 1.0 range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
}

impl Color {
    /// Create a color from individual components
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value
    ///
    /// Scene content is authored in hex, e.g. `Color::from_hex(0xb9d5ff)`
    /// for the moonlight tint.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Pure white
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

/// Shadow-map parameters forwarded to the host shadow subsystem
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSettings {
    /// Shadow map resolution (square, in texels)
    pub map_size: u32,

    /// Far plane of the shadow camera
    pub far: f32,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            map_size: 256,
            far: 7.0,
        }
    }
}

/// A light source in the scene
///
/// Positions come from the owning scene node, not the light itself, so a
/// light moves by mutating its node's transform like any other node.
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    /// Uniform fill light with no position or direction
    Ambient {
        /// Light color
        color: Color,
        /// Intensity multiplier (0.0 = off)
        intensity: f32,
    },

    /// Parallel-ray light (like moonlight); direction is toward the origin
    /// from the owning node's position
    Directional {
        /// Light color
        color: Color,
        /// Intensity multiplier
        intensity: f32,
        /// Shadow parameters for the host subsystem
        shadow: ShadowSettings,
    },

    /// Light radiating in all directions from the owning node's position
    Point {
        /// Light color
        color: Color,
        /// Intensity multiplier
        intensity: f32,
        /// Falloff distance beyond which the light has no effect
        range: f32,
        /// Shadow parameters for the host subsystem
        shadow: ShadowSettings,
    },
}

impl Light {
    /// Create an ambient fill light
    pub fn ambient(color: Color, intensity: f32) -> Self {
        Self::Ambient { color, intensity }
    }

    /// Create a directional light with default shadow settings
    pub fn directional(color: Color, intensity: f32) -> Self {
        Self::Directional {
            color,
            intensity,
            shadow: ShadowSettings::default(),
        }
    }

    /// Create a point light with default shadow settings
    pub fn point(color: Color, intensity: f32, range: f32) -> Self {
        Self::Point {
            color,
            intensity,
            range,
            shadow: ShadowSettings::default(),
        }
    }

    /// Get the light color
    pub fn color(&self) -> Color {
        match self {
            Self::Ambient { color, .. }
            | Self::Directional { color, .. }
            | Self::Point { color, .. } => *color,
        }
    }

    /// Get the intensity multiplier
    pub fn intensity(&self) -> f32 {
        match self {
            Self::Ambient { intensity, .. }
            | Self::Directional { intensity, .. }
            | Self::Point { intensity, .. } => *intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex(0xff7d46);
        assert!((color.r - 1.0).abs() < EPSILON);
        assert!((color.g - 125.0 / 255.0).abs() < EPSILON);
        assert!((color.b - 70.0 / 255.0).abs() < EPSILON);
    }

    #[test]
    fn test_from_hex_extremes() {
        assert_eq!(Color::from_hex(0xffffff), Color::white());
        assert_eq!(Color::from_hex(0x000000), Color::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_point_light_parameters() {
        let light = Light::point(Color::from_hex(0xff00ff), 2.0, 3.0);
        assert!((light.intensity() - 2.0).abs() < EPSILON);
        assert!((light.color().g - 0.0).abs() < EPSILON);
        match light {
            Light::Point { range, shadow, .. } => {
                assert!((range - 3.0).abs() < EPSILON);
                assert_eq!(shadow.map_size, 256);
                assert!((shadow.far - 7.0).abs() < EPSILON);
            }
            _ => panic!("expected a point light"),
        }
    }
}
