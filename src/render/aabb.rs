use crate::math::{Aabb, Vector2, Transform};
use crate::shapes::Shape;

/// World-space bounding box of a transformed shape
///
/// Circles are bounded exactly by their transformed center plus/minus the
/// radius. Polygons and chains use the extremes of their transformed
/// vertices. Edges have no bounding box, nor do vertex lists that are empty.
pub fn world_aabb(shape: &Shape, transform: &Transform) -> Option<Aabb> {
    match shape {
        Shape::Circle { center, radius } => Some(Aabb::from_center_half_extents(
            transform.transform_point(*center),
            Vector2::new(*radius, *radius),
        )),
        Shape::Polygon { vertices } | Shape::Chain { vertices } => {
            Aabb::from_points(vertices.iter().map(|v| transform.transform_point(*v)))
        }
        Shape::Edge { .. } => None,
    }
}

/// Corners of a shape's bounding box, counter-clockwise from the lower-left
pub fn bound(shape: &Shape, transform: &Transform) -> Option<[Vector2; 4]> {
    world_aabb(shape, transform).map(|aabb| aabb.corners())
}
