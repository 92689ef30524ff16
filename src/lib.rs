pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod joints;
pub mod collision;
pub mod render;

/// Re-export common types for easier usage
pub use crate::core::{PhysicsWorld, DebugDrawConfig, FrameInfo, BodyHandle, JointHandle};
pub use crate::bodies::{Body, BodyType, RenderMetadata, RenderMetadataMap};
pub use crate::shapes::{Shape, Fixture};
pub use crate::joints::{Joint, JointKind};
pub use crate::collision::{Contact, FixtureRef, WorldManifold};
pub use crate::render::{DebugRenderer, DrawColor, PrimitiveKind, PrimitiveSink, RecordingSink, RenderStats};
pub use crate::math::{Vector2, Transform};

/// Error types for the debug renderer
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum DebugDrawError {
        /// A shape has more vertices than the scratch buffer holds
        #[error("Shape has {count} vertices, vertex buffer capacity is {capacity}")]
        VertexCapacityExceeded { count: usize, capacity: usize },

        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),
    }
}

/// Result type for debug renderer operations
pub type Result<T> = std::result::Result<T, error::DebugDrawError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
