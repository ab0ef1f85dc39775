//! Scene nodes and their payloads.

use generational_arena::Index;
use glam::Mat4;

use crate::camera::Camera;
use crate::light::Light;
use crate::scene::{GeometryId, MaterialId};
use crate::transform::Transform;

/// Stable handle to a node owned by a [`Scene`](crate::Scene).
///
/// Handles are generational: after a node is destroyed, lookups through its
/// old handle fail instead of aliasing a newer node. This gives parent
/// back-references and user-held ids weak-reference semantics without
/// reference counting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) Index);

/// Drawable payload pairing one shared geometry with one material.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mesh {
    /// Immutable vertex/index data, shared read-only.
    pub geometry: GeometryId,
    /// Shading parameters; may be shared with other meshes, in which case
    /// mutation through the scene is visible to all of them.
    pub material: MaterialId,
}

impl Mesh {
    /// Pair a geometry with a material.
    pub const fn new(geometry: GeometryId, material: MaterialId) -> Self {
        Self { geometry, material }
    }
}

/// What a node carries besides its transform.
///
/// Nodes are structurally identical regardless of payload: a camera node and
/// a mesh node attach, detach, and resolve transforms the same way.
#[derive(Debug, Default)]
pub enum Payload {
    /// Pure grouping node.
    #[default]
    Empty,
    /// A drawable mesh; indexed by the scene for the render pass.
    Mesh(Mesh),
    /// A camera; placement comes from the owning node's transform.
    Camera(Camera),
    /// A light; placement and orientation come from the owning node.
    Light(Light),
}

impl Payload {
    /// Shorthand for a mesh payload.
    pub const fn mesh(geometry: GeometryId, material: MaterialId) -> Self {
        Payload::Mesh(Mesh::new(geometry, material))
    }

    /// Whether this payload is a mesh (and thus belongs in the mesh index).
    pub const fn is_mesh(&self) -> bool {
        matches!(self, Payload::Mesh(_))
    }
}

/// One node of the scene tree.
///
/// Nodes own their children exclusively (the graph is a tree, never a DAG)
/// and keep a weak back-reference to their parent. All structural mutation
/// goes through [`Scene`](crate::Scene) methods so the scene's mesh index
/// and tree invariants stay consistent.
#[derive(Debug)]
pub struct SceneNode {
    pub(crate) parent: Option<NodeId>,
    /// Children in insertion order; traversal and re-attachment keep this
    /// order stable.
    pub(crate) children: Vec<NodeId>,
    pub(crate) transform: Transform,
    pub(crate) payload: Payload,
    /// World matrix as of the last resolve.
    pub(crate) world: Mat4,
}

impl SceneNode {
    pub(crate) fn new(payload: Payload) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            transform: Transform::default(),
            payload,
            world: Mat4::IDENTITY,
        }
    }

    /// The node's local transform.
    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Mutable access to the local transform; mutations mark the node dirty
    /// for the next resolve.
    #[inline]
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// The node's payload.
    #[inline]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// The parent handle, or `None` for the root and detached nodes.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child handles in insertion order.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The world matrix computed by the last [`Scene::resolve`].
    ///
    /// Identity until the node has been resolved at least once; stale for
    /// nodes detached from the root (the render pass skips those).
    ///
    /// [`Scene::resolve`]: crate::Scene::resolve
    #[inline]
    pub fn world_matrix(&self) -> Mat4 {
        self.world
    }

    /// The camera payload, if this node carries one.
    pub fn camera(&self) -> Option<&Camera> {
        match &self.payload {
            Payload::Camera(camera) => Some(camera),
            _ => None,
        }
    }

    /// Mutable camera payload, if this node carries one.
    pub fn camera_mut(&mut self) -> Option<&mut Camera> {
        match &mut self.payload {
            Payload::Camera(camera) => Some(camera),
            _ => None,
        }
    }
}
