pub mod world;
pub mod config;
pub mod storage;

pub use self::world::PhysicsWorld;
pub use self::config::{DebugDrawConfig, FrameInfo};
pub use self::storage::{BodyStorage, JointStorage, OrderedStorage, StorageHandle};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A unique identifier for a body in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BodyHandle(pub(crate) u32);

/// A unique identifier for a joint in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct JointHandle(pub(crate) u32);

impl BodyHandle {
    /// Raw id, for hosts that key their own tables by it
    pub fn id(&self) -> u32 {
        self.0
    }
}

impl JointHandle {
    pub fn id(&self) -> u32 {
        self.0
    }
}
