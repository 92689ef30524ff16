use crate::core::BodyHandle;
use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// The joint variants the debug renderer distinguishes
///
/// Every joint type without dedicated geometry (revolute, prismatic, weld,
/// wheel, rope, ...) is reported as `Generic`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum JointKind {
    /// Keeps two anchors at a fixed distance
    Distance,

    /// Two ropes over fixed ground pulleys
    Pulley {
        /// World-space pulley point above anchor A
        ground_anchor_a: Vector2,

        /// World-space pulley point above anchor B
        ground_anchor_b: Vector2,
    },

    /// Drags a body towards a target point
    Mouse,

    /// Any other joint type
    Generic,
}

/// Frame snapshot of a joint between two bodies
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Joint {
    kind: JointKind,

    body_a: BodyHandle,
    body_b: BodyHandle,

    /// Anchor on body A, in world space
    anchor_a: Vector2,

    /// Anchor on body B, in world space
    anchor_b: Vector2,
}

impl Joint {
    /// Creates a joint of the given kind with world-space anchors
    pub fn new(
        kind: JointKind,
        body_a: BodyHandle,
        body_b: BodyHandle,
        anchor_a: Vector2,
        anchor_b: Vector2,
    ) -> Self {
        Self {
            kind,
            body_a,
            body_b,
            anchor_a,
            anchor_b,
        }
    }

    /// Creates a distance joint
    pub fn distance(body_a: BodyHandle, body_b: BodyHandle, anchor_a: Vector2, anchor_b: Vector2) -> Self {
        Self::new(JointKind::Distance, body_a, body_b, anchor_a, anchor_b)
    }

    /// Creates a pulley joint
    pub fn pulley(
        body_a: BodyHandle,
        body_b: BodyHandle,
        ground_anchor_a: Vector2,
        ground_anchor_b: Vector2,
        anchor_a: Vector2,
        anchor_b: Vector2,
    ) -> Self {
        Self::new(
            JointKind::Pulley { ground_anchor_a, ground_anchor_b },
            body_a,
            body_b,
            anchor_a,
            anchor_b,
        )
    }

    /// Creates a mouse joint; `target` is where the mouse is, `anchor` the grabbed point
    pub fn mouse(body_a: BodyHandle, body_b: BodyHandle, target: Vector2, anchor: Vector2) -> Self {
        Self::new(JointKind::Mouse, body_a, body_b, target, anchor)
    }

    /// Creates a joint without dedicated debug geometry
    pub fn generic(body_a: BodyHandle, body_b: BodyHandle, anchor_a: Vector2, anchor_b: Vector2) -> Self {
        Self::new(JointKind::Generic, body_a, body_b, anchor_a, anchor_b)
    }

    pub fn kind(&self) -> JointKind {
        self.kind
    }

    pub fn body_a(&self) -> BodyHandle {
        self.body_a
    }

    pub fn body_b(&self) -> BodyHandle {
        self.body_b
    }

    /// Returns the bodies involved in the joint
    pub fn get_bodies(&self) -> [BodyHandle; 2] {
        [self.body_a, self.body_b]
    }

    /// Checks if the joint involves a specific body
    pub fn involves_body(&self, body: BodyHandle) -> bool {
        self.body_a == body || self.body_b == body
    }

    pub fn anchor_a(&self) -> Vector2 {
        self.anchor_a
    }

    pub fn anchor_b(&self) -> Vector2 {
        self.anchor_b
    }

    /// Updates the world-space anchors for the current frame
    pub fn set_anchors(&mut self, anchor_a: Vector2, anchor_b: Vector2) {
        self.anchor_a = anchor_a;
        self.anchor_b = anchor_b;
    }
}
