//! The retained scene: node tree, shared resources, and world-matrix
//! resolution.

use arbor_core::{Error, Result};
use arbor_resources::{Geometry, Material};
use generational_arena::{Arena, Index};
use glam::{Mat4, Quat, Vec3};
use tracing::{debug, trace};

use crate::camera::Camera;
use crate::node::{NodeId, Payload, SceneNode};

/// Handle to a geometry owned by a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GeometryId(pub(crate) Index);

/// Handle to a material owned by a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialId(pub(crate) Index);

/// Root container for a node tree and the resources its meshes share.
///
/// The scene owns every node in a generational arena, with one implicit
/// root created up front. Structural mutation (create/attach/detach/destroy)
/// and payload changes go through the scene so the flat mesh index stays in
/// sync incrementally; the tree is never re-scanned per frame.
///
/// The scene graph is not thread-safe: all mutation, [`resolve`](Scene::resolve),
/// and rendering are expected to happen on one logical thread, and callers
/// that update from several threads must serialize access externally (for
/// example a mutation queue drained before each frame's resolve).
pub struct Scene {
    nodes: Arena<SceneNode>,
    root: NodeId,
    geometries: Arena<Geometry>,
    materials: Arena<Material>,
    /// All nodes carrying a mesh payload, in insertion order.
    mesh_index: Vec<NodeId>,
}

impl Scene {
    /// Create an empty scene with its implicit root node.
    pub fn new() -> Self {
        let mut nodes = Arena::new();
        let root = NodeId(nodes.insert(SceneNode::new(Payload::Empty)));
        Self {
            nodes,
            root,
            geometries: Arena::new(),
            materials: Arena::new(),
            mesh_index: Vec::new(),
        }
    }

    /// The implicit root node.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Borrow a node.
    pub fn node(&self, id: NodeId) -> Result<&SceneNode> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| Error::InvalidHandle(format!("node {id:?} is not alive")))
    }

    /// Mutably borrow a node (for transform mutation).
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut SceneNode> {
        self.nodes
            .get_mut(id.0)
            .ok_or_else(|| Error::InvalidHandle(format!("node {id:?} is not alive")))
    }

    // ---- shared resources ----

    /// Add immutable geometry, returning its handle.
    pub fn add_geometry(&mut self, geometry: Geometry) -> GeometryId {
        GeometryId(self.geometries.insert(geometry))
    }

    /// Borrow a geometry. There is no mutable counterpart: geometry is
    /// immutable once added.
    pub fn geometry(&self, id: GeometryId) -> Result<&Geometry> {
        self.geometries
            .get(id.0)
            .ok_or_else(|| Error::InvalidHandle(format!("geometry {id:?} is not alive")))
    }

    /// Add a material, returning its handle. Materials may be shared by any
    /// number of meshes.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        MaterialId(self.materials.insert(material))
    }

    /// Borrow a material.
    pub fn material(&self, id: MaterialId) -> Result<&Material> {
        self.materials
            .get(id.0)
            .ok_or_else(|| Error::InvalidHandle(format!("material {id:?} is not alive")))
    }

    /// Mutably borrow a material. Changes are immediately visible to every
    /// mesh sharing the handle; there is no copy-on-write.
    pub fn material_mut(&mut self, id: MaterialId) -> Result<&mut Material> {
        self.materials
            .get_mut(id.0)
            .ok_or_else(|| Error::InvalidHandle(format!("material {id:?} is not alive")))
    }

    // ---- tree structure ----

    /// Create a node at the root level.
    pub fn create_node(&mut self, payload: Payload) -> NodeId {
        let root = self.root;
        self.insert_node(root, payload)
    }

    /// Create a node under an existing parent.
    pub fn create_child(&mut self, parent: NodeId, payload: Payload) -> Result<NodeId> {
        self.node(parent)?;
        Ok(self.insert_node(parent, payload))
    }

    fn insert_node(&mut self, parent: NodeId, payload: Payload) -> NodeId {
        let is_mesh = payload.is_mesh();
        let mut node = SceneNode::new(payload);
        node.parent = Some(parent);
        let id = NodeId(self.nodes.insert(node));
        if let Some(parent_node) = self.nodes.get_mut(parent.0) {
            parent_node.children.push(id);
        }
        if is_mesh {
            self.mesh_index.push(id);
        }
        debug!(?id, ?parent, "node created");
        id
    }

    /// Attach `child` under `parent`, detaching it from its current parent
    /// first. A node has at most one parent at all times.
    ///
    /// Fails with [`Error::Cycle`], leaving the tree unchanged, if `child`
    /// is `parent` itself or one of its ancestors, and with [`Error::Root`]
    /// for attempts to re-parent the implicit root. Re-attaching under the
    /// same parent moves the child to the end of the child list.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node(parent)?;
        self.node(child)?;
        if child == self.root {
            return Err(Error::Root(
                "the implicit root cannot be re-parented".to_string(),
            ));
        }
        if child == parent {
            return Err(Error::Cycle(format!(
                "cannot attach node {child:?} to itself"
            )));
        }
        if self.is_ancestor(child, parent) {
            return Err(Error::Cycle(format!(
                "node {child:?} is an ancestor of {parent:?}"
            )));
        }

        if let Some(old_parent) = self.node(child)?.parent {
            let children = &mut self.node_mut(old_parent)?.children;
            if let Some(pos) = children.iter().position(|&c| c == child) {
                children.remove(pos);
            }
        }

        self.node_mut(child)?.parent = Some(parent);
        self.node_mut(parent)?.children.push(child);
        // the cached world matrix was composed against the old parent
        self.node_mut(child)?.transform.mark_dirty();
        Ok(())
    }

    /// Detach `child` from `parent`, keeping the subtree alive for later
    /// re-attachment.
    ///
    /// Fails with [`Error::NotFound`] if `child` is not currently a direct
    /// child of `parent`. Detached subtrees keep their last resolved world
    /// matrices and are skipped by the render pass.
    pub fn detach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node(child)?;
        let children = &mut self.node_mut(parent)?.children;
        let Some(pos) = children.iter().position(|&c| c == child) else {
            return Err(Error::NotFound(format!(
                "node {child:?} is not a child of {parent:?}"
            )));
        };
        children.remove(pos);
        self.node_mut(child)?.parent = None;
        Ok(())
    }

    /// The parent of a node, or `None` for the root and detached nodes.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    /// Replace a node's payload, returning the old one.
    ///
    /// Keeps the mesh index in sync when the payload changes to or from a
    /// mesh.
    pub fn set_payload(&mut self, id: NodeId, payload: Payload) -> Result<Payload> {
        let node = self.node_mut(id)?;
        let was_mesh = node.payload.is_mesh();
        let is_mesh = payload.is_mesh();
        let old = std::mem::replace(&mut node.payload, payload);
        match (was_mesh, is_mesh) {
            (false, true) => self.mesh_index.push(id),
            (true, false) => self.mesh_index.retain(|&n| n != id),
            _ => {}
        }
        Ok(old)
    }

    /// Destroy a node and its whole subtree, freeing them from the arena.
    ///
    /// Handles into the destroyed subtree become invalid. The implicit root
    /// cannot be destroyed.
    pub fn destroy(&mut self, id: NodeId) -> Result<()> {
        if id == self.root {
            return Err(Error::Root(
                "the implicit root cannot be destroyed".to_string(),
            ));
        }
        if let Some(parent) = self.node(id)?.parent {
            if let Some(parent_node) = self.nodes.get_mut(parent.0) {
                parent_node.children.retain(|&c| c != id);
            }
        }

        let mut stack = vec![id];
        let mut freed = 0usize;
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(current.0) {
                stack.extend(node.children);
                freed += 1;
            }
        }
        let nodes = &self.nodes;
        self.mesh_index.retain(|&n| nodes.contains(n.0));
        debug!(?id, freed, "subtree destroyed");
        Ok(())
    }

    /// Whether a node is currently reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        if id == self.root {
            return true;
        }
        let mut current = self.nodes.get(id.0).and_then(|n| n.parent);
        while let Some(ancestor) = current {
            if ancestor == self.root {
                return true;
            }
            current = self.nodes.get(ancestor.0).and_then(|n| n.parent);
        }
        false
    }

    /// True if `ancestor` appears on `node`'s parent chain.
    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.nodes.get(node.0).and_then(|n| n.parent);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(id.0).and_then(|n| n.parent);
        }
        false
    }

    // ---- resolution ----

    /// Recompute world matrices for every node reachable from the root.
    ///
    /// Single top-down pass. A node's matrices are recomputed iff its own
    /// transform is dirty or an ancestor's world matrix changed in this
    /// pass; clean subtrees under unchanged parents are traversed but not
    /// recomputed, so calling this twice without intervening mutation yields
    /// bit-for-bit identical matrices.
    pub fn resolve(&mut self) {
        let mut recomputed = 0usize;
        let mut stack: Vec<(NodeId, Mat4, bool)> = vec![(self.root, Mat4::IDENTITY, false)];

        while let Some((id, parent_world, parent_changed)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(id.0) else {
                continue;
            };
            let dirty = node.transform.is_dirty();
            let local = node.transform.refresh_local();
            let changed = parent_changed || dirty;
            if changed {
                node.world = parent_world * local;
                recomputed += 1;
            }
            let world = node.world;
            for &child in &node.children {
                stack.push((child, world, changed));
            }
        }

        trace!(recomputed, "scene resolved");
    }

    // ---- cameras ----

    /// Borrow the camera payload of a node.
    pub fn camera(&self, id: NodeId) -> Result<&Camera> {
        self.node(id)?
            .camera()
            .ok_or_else(|| Error::Camera(format!("node {id:?} has no camera payload")))
    }

    /// Mutably borrow the camera payload of a node (e.g. for
    /// [`Camera::apply_shader`]).
    pub fn camera_mut(&mut self, id: NodeId) -> Result<&mut Camera> {
        self.node_mut(id)?
            .camera_mut()
            .ok_or_else(|| Error::Camera(format!("node {id:?} has no camera payload")))
    }

    /// The view matrix of a camera node: the inverse of its world matrix.
    ///
    /// Reflects the last [`resolve`](Scene::resolve); the render pass
    /// resolves before reading it.
    pub fn view_matrix(&self, camera: NodeId) -> Result<Mat4> {
        self.camera(camera)?;
        Ok(self.node(camera)?.world.inverse())
    }

    /// Rotate `node` so its forward axis (−Z) points at `target`'s current
    /// world position.
    ///
    /// The rotation is computed once from the positions at call time; if the
    /// target moves later, call again. A degenerate (near-zero) direction
    /// leaves the rotation unchanged.
    pub fn look_at(&mut self, node: NodeId, target: NodeId) -> Result<()> {
        // both world positions must be current before deriving the direction
        self.resolve();

        let eye = self.node(node)?.world.w_axis.truncate();
        let target_pos = self.node(target)?.world.w_axis.truncate();
        let direction = target_pos - eye;
        if direction.length_squared() <= f32::EPSILON {
            return Ok(());
        }

        let world_rotation = Quat::from_rotation_arc(Vec3::NEG_Z, direction.normalize());
        // the stored rotation is local: cancel the parent's world orientation
        let local_rotation = match self.node(node)?.parent {
            Some(parent) => {
                let (_, parent_rotation, _) =
                    self.node(parent)?.world.to_scale_rotation_translation();
                parent_rotation.inverse() * world_rotation
            }
            None => world_rotation,
        };
        self.node_mut(node)?.transform.set_rotation(local_rotation);
        Ok(())
    }

    // ---- drawables ----

    /// Nodes carrying mesh payloads that are currently attached to the
    /// root, in insertion order. This is the flat index the render pass
    /// iterates instead of walking the tree.
    pub fn mesh_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.mesh_index
            .iter()
            .copied()
            .filter(|&id| self.is_attached(id))
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
