use crate::bodies::{Body, BodyType};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// An RGBA color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct DrawColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl DrawColor {
    /// Creates a new color
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for DrawColor {
    fn default() -> Self {
        CONTACT_COLOR
    }
}

impl From<DrawColor> for [f32; 4] {
    fn from(color: DrawColor) -> Self {
        color.to_array()
    }
}

/// Body is not taking part in the simulation
pub const COLOR_NOT_ACTIVE: DrawColor = DrawColor::rgb(0.5, 0.5, 0.3);

pub const COLOR_ACTIVE_STATIC: DrawColor = DrawColor::rgb(0.5, 0.9, 0.5);

pub const COLOR_ACTIVE_KINEMATIC: DrawColor = DrawColor::rgb(0.5, 0.5, 0.9);

pub const COLOR_ACTIVE_DYNAMIC_SLEEPING: DrawColor = DrawColor::rgb(0.6, 0.6, 0.6);

pub const COLOR_ACTIVE_DYNAMIC_AWAKE: DrawColor = DrawColor::rgb(0.9, 0.7, 0.7);

/// All joint linkages
pub const JOINT_COLOR: DrawColor = DrawColor::rgb(0.5, 0.8, 0.8);

/// All fixture bounding boxes
pub const AABB_COLOR: DrawColor = DrawColor::rgb(1.0, 0.0, 1.0);

/// Contact points use the sink's default white
pub const CONTACT_COLOR: DrawColor = DrawColor::rgb(1.0, 1.0, 1.0);

/// Picks the outline color for a body from its current state
///
/// The first matching rule wins: inactive, then static, then kinematic, then
/// dynamic split by sleep state.
pub fn colorize(active: bool, body_type: BodyType, awake: bool) -> DrawColor {
    match (active, body_type) {
        (false, _) => COLOR_NOT_ACTIVE,
        (true, BodyType::Static) => COLOR_ACTIVE_STATIC,
        (true, BodyType::Kinematic) => COLOR_ACTIVE_KINEMATIC,
        (true, BodyType::Dynamic) if !awake => COLOR_ACTIVE_DYNAMIC_SLEEPING,
        (true, BodyType::Dynamic) => COLOR_ACTIVE_DYNAMIC_AWAKE,
    }
}

impl Body {
    /// The outline color for this body this frame
    pub fn debug_color(&self) -> DrawColor {
        colorize(self.is_active(), self.get_body_type(), self.is_awake())
    }
}
