#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// How the simulation moves a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum BodyType {
    /// Never moves
    Static,

    /// Moved by prescribed velocity, ignores forces and collisions
    Kinematic,

    /// Fully simulated; may fall asleep when at rest
    Dynamic,
}
