//! Error types for the scene graph.

use thiserror::Error;

/// Main error type for scene graph operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Attaching a node would create a cycle in the tree
    #[error("cycle rejected: {0}")]
    Cycle(String),

    /// The node is not a direct child of the given parent
    #[error("not found: {0}")]
    NotFound(String),

    /// A handle that no longer resolves to a live node or resource
    #[error("invalid handle: {0}")]
    InvalidHandle(String),

    /// A camera operation was pointed at a node without a camera payload
    #[error("camera error: {0}")]
    Camera(String),

    /// Operation not permitted on the implicit scene root
    #[error("root node: {0}")]
    Root(String),
}

/// Result type alias using the scene graph's Error type.
pub type Result<T> = std::result::Result<T, Error>;
