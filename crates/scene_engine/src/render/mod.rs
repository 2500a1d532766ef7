//! Declarative render data and the host-renderer boundary
//!
//! The engine describes what to draw; an external renderer decides how.
//! Geometry descriptors and materials are pass-through data — no
//! tessellation, texture loading, or shading happens in this crate.

mod geometry;
mod material;
mod renderer;

pub use geometry::Geometry;
pub use material::{Material, TextureSet, WrapMode};
pub use renderer::{Fog, FrameStats, HeadlessRenderer, RenderError, Renderer};
