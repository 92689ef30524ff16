use crate::math::Vector2;
use nalgebra as na;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A planar rotation stored as its cosine/sine pair
///
/// Storing the pair rather than the angle keeps `rotate` free of trig calls;
/// the same pair doubles as the body's local x-axis in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Rotation {
    /// Cosine of the rotation angle
    pub cos: f32,

    /// Sine of the rotation angle
    pub sin: f32,
}

impl Rotation {
    /// The identity rotation
    pub const IDENTITY: Self = Self { cos: 1.0, sin: 0.0 };

    /// Creates a rotation from an angle in radians
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { cos, sin }
    }

    /// Returns the angle in radians, in the range [-PI, PI]
    #[inline]
    pub fn angle(&self) -> f32 {
        self.sin.atan2(self.cos)
    }

    /// Rotates a vector by this rotation
    #[inline]
    pub fn rotate(&self, v: Vector2) -> Vector2 {
        Vector2::new(
            self.cos * v.x - self.sin * v.y,
            self.sin * v.x + self.cos * v.y,
        )
    }

    /// The rotated x-axis, used for orientation markers
    #[inline]
    pub fn x_axis(&self) -> Vector2 {
        Vector2::new(self.cos, self.sin)
    }

    /// Convert to a nalgebra unit complex number
    pub fn to_nalgebra(&self) -> na::UnitComplex<f32> {
        na::UnitComplex::from_cos_sin_unchecked(self.cos, self.sin)
    }

    /// Convert from a nalgebra unit complex number
    pub fn from_nalgebra(r: &na::UnitComplex<f32>) -> Self {
        Self { cos: r.cos_angle(), sin: r.sin_angle() }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}
