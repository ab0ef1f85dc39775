//! Transform component for scene nodes.
//!
//! A [`Transform`] holds a node's position, rotation, and scale relative to
//! its parent, plus a cached local matrix guarded by a dirty flag. World
//! matrices are composed by [`Scene::resolve`](crate::Scene::resolve), which
//! recomputes a node's matrices only when the node or one of its ancestors
//! changed since the last resolve.

use glam::{Mat4, Quat, Vec3};

/// Position, rotation, and scale relative to the parent node.
///
/// Rotation is a quaternion. The local matrix composes translation, rotation,
/// and scale in T·R·S order: scale applies first, then rotation, then
/// translation.
#[derive(Clone, Debug)]
pub struct Transform {
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
    /// Cached local matrix, valid while `dirty` is false.
    local: Mat4,
    dirty: bool,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            local: Mat4::IDENTITY,
            // new transforms start dirty so the first resolve picks them up
            dirty: true,
        }
    }
}

impl Transform {
    /// Create a new transform at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transform with the given position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.set_position(position);
        self
    }

    /// Create a transform with the given rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.set_rotation(rotation);
        self
    }

    /// Create a transform with the given scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.set_scale(scale);
        self
    }

    /// Position relative to the parent.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Rotation relative to the parent.
    #[inline]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Scale relative to the parent.
    #[inline]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Set the position to an absolute value.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.dirty = true;
    }

    /// Move by a relative offset.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
        self.dirty = true;
    }

    /// Move to an absolute position, the counterpart of [`translate`].
    ///
    /// [`translate`]: Transform::translate
    pub fn move_to(&mut self, position: Vec3) {
        self.set_position(position);
    }

    /// Set the rotation to an absolute value.
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
        self.dirty = true;
    }

    /// Apply an additional rotation on top of the current one.
    pub fn rotate(&mut self, rotation: Quat) {
        self.rotation = rotation * self.rotation;
        self.dirty = true;
    }

    /// Set the scale.
    ///
    /// Zero scale on any axis is permitted and produces a degenerate matrix;
    /// what the rasterizer does with degenerate geometry is its concern.
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.dirty = true;
    }

    /// The local transformation matrix, composed in T·R·S order.
    ///
    /// Returns the cached matrix when clean; computes a fresh one without
    /// touching the cache when dirty (caching happens during resolve).
    pub fn local_matrix(&self) -> Mat4 {
        if self.dirty {
            self.compose()
        } else {
            self.local
        }
    }

    /// Whether this transform changed since the last resolve.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Force recomputation on the next resolve, e.g. after re-parenting
    /// invalidates the cached world matrix.
    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Recompute and cache the local matrix if dirty, clearing the flag.
    pub(crate) fn refresh_local(&mut self) -> Mat4 {
        if self.dirty {
            self.local = self.compose();
            self.dirty = false;
        }
        self.local
    }

    fn compose(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// The local forward direction (−Z).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// The local right direction (+X).
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// The local up direction (+Y).
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq_vec3(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_default_transform() {
        let t = Transform::default();
        assert_eq!(t.position(), Vec3::ZERO);
        assert_eq!(t.rotation(), Quat::IDENTITY);
        assert_eq!(t.scale(), Vec3::ONE);
        assert!(t.is_dirty());
        assert_eq!(t.local_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_mutators_mark_dirty() {
        let mut t = Transform::new();
        t.refresh_local();
        assert!(!t.is_dirty());

        t.set_position(Vec3::X);
        assert!(t.is_dirty());
        t.refresh_local();

        t.translate(Vec3::Y);
        assert!(t.is_dirty());
        t.refresh_local();

        t.set_rotation(Quat::from_rotation_z(1.0));
        assert!(t.is_dirty());
        t.refresh_local();

        t.set_scale(Vec3::splat(2.0));
        assert!(t.is_dirty());
    }

    #[test]
    fn test_translate_is_relative() {
        let mut t = Transform::new().with_position(Vec3::new(1.0, 0.0, 0.0));
        t.translate(Vec3::new(2.0, 3.0, 0.0));
        assert_eq!(t.position(), Vec3::new(3.0, 3.0, 0.0));

        t.move_to(Vec3::new(5.0, 5.0, 5.0));
        assert_eq!(t.position(), Vec3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn test_local_matrix_composes_trs() {
        // scale first, then rotate, then translate
        let t = Transform::new()
            .with_position(Vec3::new(1.0, 0.0, 0.0))
            .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2))
            .with_scale(Vec3::splat(2.0));

        let p = t.local_matrix().transform_point3(Vec3::X);
        // (1,0,0) -> scaled (2,0,0) -> rotated (0,0,-2) -> translated (1,0,-2)
        assert!(
            approx_eq_vec3(p, Vec3::new(1.0, 0.0, -2.0)),
            "got {:?}",
            p
        );
    }

    #[test]
    fn test_refresh_caches_matrix() {
        let mut t = Transform::new().with_position(Vec3::new(4.0, 0.0, 0.0));
        let fresh = t.local_matrix();
        let cached = t.refresh_local();
        assert_eq!(fresh, cached);
        assert!(!t.is_dirty());
        assert_eq!(t.local_matrix(), cached);
    }

    #[test]
    fn test_zero_scale_is_permitted() {
        let mut t = Transform::new().with_scale(Vec3::new(0.0, 1.0, 1.0));
        let m = t.refresh_local();
        assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
        assert_eq!(m.x_axis, glam::Vec4::ZERO);
    }

    #[test]
    fn test_rotate_composes() {
        let mut t = Transform::new();
        let quarter = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        t.rotate(quarter);
        t.rotate(quarter);
        // two quarter turns about Y send forward (-Z) to +Z
        assert!(approx_eq_vec3(t.forward(), Vec3::Z));
    }

    #[test]
    fn test_direction_vectors() {
        let t = Transform::default();
        assert_eq!(t.forward(), Vec3::NEG_Z);
        assert_eq!(t.right(), Vec3::X);
        assert_eq!(t.up(), Vec3::Y);
    }
}
