mod vector;
mod transform;
mod rotation;
mod aabb;

pub use vector::Vector2;
pub use transform::Transform;
pub use rotation::Rotation;
pub use aabb::Aabb;

/// Converts degrees to radians
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}
