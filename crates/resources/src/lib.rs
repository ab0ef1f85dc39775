//! Shared rendering resources.
//!
//! This crate provides the data meshes are built from:
//! - Immutable vertex/index geometry
//! - Mutable, shareable materials
//! - Opaque shader handles
//! - Analytic shape generators

pub mod geometry;
pub mod material;
pub mod shader;
pub mod shapes;

pub use geometry::{Geometry, Vertex};
pub use material::Material;
pub use shader::ShaderHandle;
