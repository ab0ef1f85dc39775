//! Material definitions.

use glam::{Vec3, Vec4};

use crate::ShaderHandle;

/// Mutable shading parameters, shareable between meshes.
///
/// A material may be referenced by any number of meshes; mutating a shared
/// material is immediately visible to every mesh referencing it (there is no
/// copy-on-write).
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Base color (albedo)
    pub base_color: Vec4,
    /// Metallic factor (0.0 = dielectric, 1.0 = metal)
    pub metallic: f32,
    /// Roughness factor (0.0 = smooth, 1.0 = rough)
    pub roughness: f32,
    /// Ambient occlusion factor
    pub ao: f32,
    /// Emissive color
    pub emissive: Vec4,
    /// Optional shader override; meshes using this material bypass the
    /// camera's shader when set
    pub shader: Option<ShaderHandle>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            metallic: 0.0,
            roughness: 0.5,
            ao: 1.0,
            emissive: Vec4::ZERO,
            shader: None,
        }
    }
}

impl Material {
    /// Create a material with the given base color.
    pub fn with_base_color(base_color: Vec4) -> Self {
        Self {
            base_color,
            ..Self::default()
        }
    }

    /// Create a material with the given shader override.
    pub fn with_shader(shader: ShaderHandle) -> Self {
        Self {
            shader: Some(shader),
            ..Self::default()
        }
    }

    /// Set the RGB part of the base color, keeping alpha.
    pub fn set_color(&mut self, color: Vec3) {
        self.base_color = color.extend(self.base_color.w);
    }

    /// The RGB part of the base color.
    pub fn color(&self) -> Vec3 {
        self.base_color.truncate()
    }
}
