use crate::math::{Vector2, Rotation};
use nalgebra as na;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A rigid 2D transform (translation and rotation, no scale)
///
/// Maps fixture-local coordinates to world coordinates: `p' = R * p + t`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Transform {
    /// Position of the body origin in world space
    pub position: Vector2,

    /// Orientation of the body
    pub rotation: Rotation,
}

impl Transform {
    /// Creates a new transform with the given position and rotation
    #[inline]
    pub fn new(position: Vector2, rotation: Rotation) -> Self {
        Self { position, rotation }
    }

    /// Creates a new identity transform
    #[inline]
    pub fn identity() -> Self {
        Self {
            position: Vector2::zero(),
            rotation: Rotation::IDENTITY,
        }
    }

    /// Creates a new transform from just a position
    #[inline]
    pub fn from_position(position: Vector2) -> Self {
        Self {
            position,
            rotation: Rotation::IDENTITY,
        }
    }

    /// Creates a new transform from a position and an angle in radians
    #[inline]
    pub fn from_position_angle(position: Vector2, angle: f32) -> Self {
        Self {
            position,
            rotation: Rotation::from_angle(angle),
        }
    }

    /// Transforms a local point into world space
    #[inline]
    pub fn transform_point(&self, point: Vector2) -> Vector2 {
        self.rotation.rotate(point) + self.position
    }

    /// Rotates a local direction into world space (ignores translation)
    #[inline]
    pub fn transform_direction(&self, direction: Vector2) -> Vector2 {
        self.rotation.rotate(direction)
    }

    /// Convert to a nalgebra isometry
    pub fn to_nalgebra(&self) -> na::Isometry2<f32> {
        na::Isometry2::from_parts(
            na::Translation2::new(self.position.x, self.position.y),
            self.rotation.to_nalgebra(),
        )
    }

    /// Convert from a nalgebra isometry
    pub fn from_nalgebra(iso: &na::Isometry2<f32>) -> Self {
        Self {
            position: Vector2::from_nalgebra(&iso.translation.vector),
            rotation: Rotation::from_nalgebra(&iso.rotation),
        }
    }
}
