//! Opaque shader program references.

/// Opaque reference to a shader program owned by the rasterizer collaborator.
///
/// The scene graph stores and forwards these handles but never inspects or
/// validates them; resolving a handle to an actual program is the
/// collaborator's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShaderHandle(u64);

impl ShaderHandle {
    /// Wrap a raw program identifier.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw program identifier this handle wraps.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for ShaderHandle {
    fn from(raw: u64) -> Self {
        Self::new(raw)
    }
}
