mod contact;
mod world_manifold;

pub use self::contact::{Contact, FixtureRef};
pub use self::world_manifold::{WorldManifold, MAX_MANIFOLD_POINTS};
