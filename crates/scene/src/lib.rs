//! Scene graph and components.
//!
//! This crate provides retained scene management:
//! - Transform hierarchy with dirty-flag world-matrix resolution
//! - Node tree with mesh/camera/light payloads
//! - Shared geometry and material storage
//! - Camera projection and view math
//!
//! The graph is single-threaded: mutation, resolution, and rendering happen
//! on one logical thread, and callers needing multi-threaded updates must
//! serialize access externally.

pub mod camera;
pub mod light;
pub mod node;
pub mod scene;
pub mod transform;

pub use camera::{Camera, Projection};
pub use light::{DirectionalLight, Light, PointLight, SpotLight};
pub use node::{Mesh, NodeId, Payload, SceneNode};
pub use scene::{GeometryId, MaterialId, Scene};
pub use transform::Transform;
