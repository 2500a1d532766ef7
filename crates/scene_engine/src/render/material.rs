//! Surface materials
//!
//! Materials are declarative: a base color plus optional texture path
//! references the host renderer resolves at load time. No image decoding
//! happens here.

use crate::scene::Color;

/// Texture coordinate wrap behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Clamp coordinates to the edge texel
    #[default]
    Clamp,
    /// Tile the texture
    Repeat,
}

/// Texture map path references for one material
///
/// Each entry is a path the host renderer loads; `None` means the map is
/// unused. UV repeat and wrapping apply to every map in the set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextureSet {
    /// Base color map
    pub color: Option<String>,
    /// Alpha cutout map
    pub alpha: Option<String>,
    /// Ambient occlusion map
    pub ambient_occlusion: Option<String>,
    /// Tangent-space normal map
    pub normal: Option<String>,
    /// Height/displacement map
    pub displacement: Option<String>,
    /// Metalness map
    pub metalness: Option<String>,
    /// Roughness map
    pub roughness: Option<String>,
    /// UV repeat factors
    pub repeat: (f32, f32),
    /// Wrap mode for both axes
    pub wrap: WrapMode,
}

impl TextureSet {
    /// Create a texture set rooted at `dir`, filling the standard map
    /// slots from conventional file names (`color.jpg`, `normal.jpg`, …)
    pub fn from_dir(dir: &str) -> Self {
        Self {
            color: Some(format!("{dir}/color.jpg")),
            ambient_occlusion: Some(format!("{dir}/ambientOcclusion.jpg")),
            normal: Some(format!("{dir}/normal.jpg")),
            roughness: Some(format!("{dir}/roughness.jpg")),
            repeat: (1.0, 1.0),
            ..Default::default()
        }
    }

    /// Add an alpha cutout map
    pub fn with_alpha(mut self, path: &str) -> Self {
        self.alpha = Some(path.to_string());
        self
    }

    /// Add a displacement map
    pub fn with_displacement(mut self, path: &str) -> Self {
        self.displacement = Some(path.to_string());
        self
    }

    /// Add a metalness map
    pub fn with_metalness(mut self, path: &str) -> Self {
        self.metalness = Some(path.to_string());
        self
    }

    /// Tile every map `x` by `y` times across the surface
    pub fn repeated(mut self, x: f32, y: f32) -> Self {
        self.repeat = (x, y);
        self.wrap = WrapMode::Repeat;
        self
    }
}

/// A surface material
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Base color, multiplied with the color map if present
    pub base_color: Color,

    /// Optional texture maps
    pub textures: Option<TextureSet>,

    /// Scale applied to the displacement map
    pub displacement_scale: f32,

    /// Whether the material uses alpha blending
    pub transparent: bool,

    /// Whether both faces are drawn
    pub double_sided: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self::new()
    }
}

impl Material {
    /// Create an opaque white material with no textures
    pub fn new() -> Self {
        Self {
            base_color: Color::white(),
            textures: None,
            displacement_scale: 0.0,
            transparent: false,
            double_sided: false,
        }
    }

    /// Set the base color
    pub fn with_color(mut self, color: Color) -> Self {
        self.base_color = color;
        self
    }

    /// Attach a texture set
    pub fn with_textures(mut self, textures: TextureSet) -> Self {
        self.textures = Some(textures);
        self
    }

    /// Set the displacement scale
    pub fn with_displacement_scale(mut self, scale: f32) -> Self {
        self.displacement_scale = scale;
        self
    }

    /// Enable alpha blending
    pub fn transparent(mut self) -> Self {
        self.transparent = true;
        self
    }

    /// Draw both faces
    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }
}
