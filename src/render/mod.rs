//! Debug geometry for physics worlds.
//!
//! The leaf modules are pure functions over frame state: [`geometry`] maps
//! shapes into world space, [`aabb`] bounds them, [`color`] picks a color
//! from body state, [`joint`] and [`contact`] resolve joint linkages and
//! contact points. [`DebugRenderer`] walks a [`PhysicsWorld`] once per frame
//! and feeds the results to a [`PrimitiveSink`].
//!
//! [`PhysicsWorld`]: crate::core::PhysicsWorld

pub mod aabb;
pub mod color;
pub mod contact;
pub mod geometry;
pub mod joint;
pub mod sink;
mod debug_renderer;

pub use self::color::{colorize, DrawColor};
pub use self::debug_renderer::{DebugRenderer, RenderStats};
pub use self::geometry::{Segment, ShapeGeometry, VertexBuffer, CIRCLE_SEGMENTS};
pub use self::joint::JointSegments;
pub use self::sink::{Primitive, PrimitiveKind, PrimitiveSink, RecordingSink};
