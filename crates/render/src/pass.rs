//! Draw-command emission for one scene/camera pair.

use arbor_core::Result;
use arbor_resources::ShaderHandle;
use arbor_scene::{GeometryId, MaterialId, NodeId, Payload, Scene};
use glam::Mat4;
use tracing::trace;

/// A resolved draw command: world transform plus the shared geometry and
/// material it should be drawn with.
///
/// The rasterizer collaborator consumes these in order, binding shaders,
/// uploading matrices, and issuing the actual draw calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    /// World matrix of the mesh node, as of this frame's resolve.
    pub world_matrix: Mat4,
    /// Immutable vertex/index data.
    pub geometry: GeometryId,
    /// Shading parameters; may be shared with other commands.
    pub material: MaterialId,
}

/// Per-frame output of a render pass.
#[derive(Debug)]
pub struct Frame<'a> {
    /// View matrix: inverse of the camera node's world matrix.
    pub view: Mat4,
    /// Projection matrix from the camera's frustum parameters.
    pub projection: Mat4,
    /// Camera shader for meshes whose material has no override.
    pub shader: Option<ShaderHandle>,
    /// Draw commands in mesh insertion order.
    pub commands: &'a [DrawCommand],
}

/// Emits the ordered draw-command sequence for one scene/camera pair.
///
/// The pass iterates the scene's flat mesh index rather than walking the
/// tree, and performs no culling, sorting, or batching; those belong to the
/// rasterizer collaborator. The internal command buffer is reused across
/// frames.
#[derive(Debug, Default)]
pub struct RenderPass {
    commands: Vec<DrawCommand>,
}

impl RenderPass {
    /// Create a render pass with an empty command buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the scene, then emit one command per attached mesh node in
    /// insertion order.
    ///
    /// Resolving internally means the pass can never observe world matrices
    /// that are stale with respect to earlier mutation; the frame driver
    /// does not need its own resolve call.
    ///
    /// Fails with [`arbor_core::Error::Camera`] if `camera` does not carry a
    /// camera payload.
    pub fn run<'a>(&'a mut self, scene: &mut Scene, camera: NodeId) -> Result<Frame<'a>> {
        // reject a non-camera target before touching the scene
        scene.camera(camera)?;
        scene.resolve();

        let cam = scene.camera(camera)?;
        let projection = cam.projection_matrix();
        let shader = cam.shader();
        let view = scene.view_matrix(camera)?;

        self.commands.clear();
        for id in scene.mesh_nodes() {
            let node = scene.node(id)?;
            if let Payload::Mesh(mesh) = node.payload() {
                self.commands.push(DrawCommand {
                    world_matrix: node.world_matrix(),
                    geometry: mesh.geometry,
                    material: mesh.material,
                });
            }
        }

        trace!(commands = self.commands.len(), "render pass emitted");
        Ok(Frame {
            view,
            projection,
            shader,
            commands: &self.commands,
        })
    }
}
