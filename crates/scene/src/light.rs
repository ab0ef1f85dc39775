//! Light payloads.
//!
//! Lights carry only color/intensity/shape parameters; position and
//! orientation come from the owning node, like every other payload. No
//! lighting math happens in this core: the structs exist so light nodes
//! participate in transform resolution and can be handed to a renderer.

use glam::Vec3;

/// A directional light (sun-like); direction is the owning node's forward
/// axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    /// Light color
    pub color: Vec3,
    /// Light intensity
    pub intensity: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            intensity: 1.0,
        }
    }
}

/// A point light (omnidirectional).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    /// Light color
    pub color: Vec3,
    /// Light intensity
    pub intensity: f32,
    /// Attenuation radius
    pub radius: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            intensity: 1.0,
            radius: 10.0,
        }
    }
}

/// A spot light (cone-shaped); the cone opens along the owning node's
/// forward axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    /// Light color
    pub color: Vec3,
    /// Light intensity
    pub intensity: f32,
    /// Inner cone angle cosine
    pub inner_cutoff: f32,
    /// Outer cone angle cosine
    pub outer_cutoff: f32,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            intensity: 1.0,
            inner_cutoff: 0.9, // ~25 degrees
            outer_cutoff: 0.8, // ~37 degrees
        }
    }
}

/// Light payload variants for scene nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Directional(DirectionalLight),
    Point(PointLight),
    Spot(SpotLight),
}
