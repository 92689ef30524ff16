use crate::collision::WorldManifold;
use crate::core::BodyHandle;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Identifies a fixture by its body and its index in the body's fixture list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct FixtureRef {
    pub body: BodyHandle,
    pub index: usize,
}

impl FixtureRef {
    pub fn new(body: BodyHandle, index: usize) -> Self {
        Self { body, index }
    }
}

/// A touching fixture pair and its manifold for the current frame
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Contact {
    fixture_a: FixtureRef,
    fixture_b: FixtureRef,
    manifold: WorldManifold,
}

impl Contact {
    pub fn new(fixture_a: FixtureRef, fixture_b: FixtureRef, manifold: WorldManifold) -> Self {
        Self {
            fixture_a,
            fixture_b,
            manifold,
        }
    }

    pub fn fixture_a(&self) -> FixtureRef {
        self.fixture_a
    }

    pub fn fixture_b(&self) -> FixtureRef {
        self.fixture_b
    }

    /// The world manifold computed by the simulation this frame
    pub fn world_manifold(&self) -> &WorldManifold {
        &self.manifold
    }
}
