//! Render pass over a resolved scene.
//!
//! This crate turns a [`Scene`](arbor_scene::Scene) and a camera node into
//! an ordered sequence of draw commands. It makes no graphics-API calls;
//! the rasterizer collaborator consumes the commands.

mod pass;

pub use pass::{DrawCommand, Frame, RenderPass};
