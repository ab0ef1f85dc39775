//! Camera payloads.
//!
//! A camera is an ordinary node payload: its placement comes from the owning
//! node's transform, and its view matrix is the inverse of that node's world
//! matrix (see [`Scene::view_matrix`](crate::Scene::view_matrix)). The
//! camera itself only holds projection parameters and the shader reference
//! the render pass hands to the rasterizer.

use arbor_resources::ShaderHandle;
use glam::Mat4;

/// Projection type for the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// Perspective projection
    Perspective {
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
    /// Orthographic projection
    Orthographic {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    },
}

/// Projection parameters plus the default shader for rendered meshes.
///
/// The forward axis convention is −Z: a camera node with identity rotation
/// looks down the negative Z axis.
#[derive(Clone, Debug)]
pub struct Camera {
    /// Projection settings
    pub projection: Projection,
    shader: Option<ShaderHandle>,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            projection: Projection::Perspective {
                fov_y: 45.0_f32.to_radians(),
                aspect: 16.0 / 9.0,
                near: 0.1,
                far: 1000.0,
            },
            shader: None,
        }
    }
}

impl Camera {
    /// Create a new camera with default perspective settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera with the given projection.
    pub fn with_projection(projection: Projection) -> Self {
        Self {
            projection,
            shader: None,
        }
    }

    /// Set a perspective projection.
    pub fn set_perspective(&mut self, fov_y: f32, aspect: f32, near: f32, far: f32) {
        self.projection = Projection::Perspective {
            fov_y,
            aspect,
            near,
            far,
        };
    }

    /// Set an orthographic projection.
    pub fn set_orthographic(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) {
        self.projection = Projection::Orthographic {
            left,
            right,
            bottom,
            top,
            near,
            far,
        };
    }

    /// Update the aspect ratio (perspective projections only).
    pub fn set_aspect(&mut self, aspect: f32) {
        if let Projection::Perspective {
            fov_y, near, far, ..
        } = self.projection
        {
            self.projection = Projection::Perspective {
                fov_y,
                aspect,
                near,
                far,
            };
        }
    }

    /// Associate the shader used for meshes that do not override their own.
    ///
    /// The handle is stored as-is; whether it names a valid program is the
    /// rasterizer collaborator's job to check.
    pub fn apply_shader(&mut self, shader: ShaderHandle) {
        self.shader = Some(shader);
    }

    /// The shader applied via [`apply_shader`](Camera::apply_shader), if any.
    #[inline]
    pub fn shader(&self) -> Option<ShaderHandle> {
        self.shader
    }

    /// The projection matrix (right-handed).
    ///
    /// Clip-space conventions beyond handedness (depth range, Y direction)
    /// are the rasterizer collaborator's concern.
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection {
            Projection::Perspective {
                fov_y,
                aspect,
                near,
                far,
            } => Mat4::perspective_rh(fov_y, aspect, near, far),
            Projection::Orthographic {
                left,
                right,
                bottom,
                top,
                near,
                far,
            } => Mat4::orthographic_rh(left, right, bottom, top, near, far),
        }
    }
}
