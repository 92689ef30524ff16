use std::f32::consts::PI;

use crate::error::DebugDrawError;
use crate::math::{Vector2, Transform};
use crate::shapes::Shape;
use crate::Result;

/// Number of segments used to outline a circle
pub const CIRCLE_SEGMENTS: usize = 20;

/// A world-space line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vector2,
    pub end: Vector2,
}

impl Segment {
    #[inline]
    pub fn new(start: Vector2, end: Vector2) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(&self.end)
    }
}

/// Reusable, capacity-bounded storage for transformed vertices
///
/// Owned by the renderer so repeated frames do not reallocate. Writes past
/// the capacity are rejected with [`DebugDrawError::VertexCapacityExceeded`].
#[derive(Debug, Clone)]
pub struct VertexBuffer {
    vertices: Vec<Vector2>,
    capacity: usize,
}

impl VertexBuffer {
    /// Creates a buffer holding at most `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of vertices the buffer accepts
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn as_slice(&self) -> &[Vector2] {
        &self.vertices
    }

    /// Replaces the contents with `points`, all or nothing
    pub fn fill<I>(&mut self, points: I) -> Result<&[Vector2]>
    where
        I: ExactSizeIterator<Item = Vector2>,
    {
        let count = points.len();
        if count > self.capacity {
            return Err(DebugDrawError::VertexCapacityExceeded {
                count,
                capacity: self.capacity,
            });
        }

        self.vertices.clear();
        self.vertices.extend(points);
        Ok(&self.vertices)
    }
}

/// World-space geometry of one fixture, ready for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeGeometry<'a> {
    /// A circle plus the body's x-axis for the orientation spoke
    Circle {
        center: Vector2,
        radius: f32,
        axis: Vector2,
    },

    /// An ordered vertex loop (edges, polygons and chains)
    Outline(&'a [Vector2]),
}

/// Maps a fixture shape into world space
///
/// Edges, polygons and chains come back as an [`ShapeGeometry::Outline`] that
/// borrows `buffer`; vertex order is preserved. Chains are returned exactly
/// like polygons and therefore get drawn closed.
pub fn extract<'a>(
    shape: &Shape,
    transform: &Transform,
    buffer: &'a mut VertexBuffer,
) -> Result<ShapeGeometry<'a>> {
    match shape {
        Shape::Circle { center, radius } => Ok(ShapeGeometry::Circle {
            center: transform.transform_point(*center),
            radius: *radius,
            axis: transform.rotation.x_axis(),
        }),
        Shape::Edge { vertex1, vertex2 } => {
            let points = [*vertex1, *vertex2];
            let vertices = buffer.fill(points.iter().map(|v| transform.transform_point(*v)))?;
            Ok(ShapeGeometry::Outline(vertices))
        }
        Shape::Polygon { vertices } | Shape::Chain { vertices } => {
            let vertices = buffer.fill(vertices.iter().map(|v| transform.transform_point(*v)))?;
            Ok(ShapeGeometry::Outline(vertices))
        }
    }
}

/// Evenly spaced points on a circle, counter-clockwise from angle zero
pub fn tessellate_circle(center: Vector2, radius: f32) -> [Vector2; CIRCLE_SEGMENTS] {
    let increment = 2.0 * PI / CIRCLE_SEGMENTS as f32;
    std::array::from_fn(|i| {
        let angle = increment * i as f32;
        Vector2::new(angle.cos() * radius + center.x, angle.sin() * radius + center.y)
    })
}

/// Segments tracing a closed loop through `points`
///
/// Consecutive points are joined, then the loop is closed with a segment
/// from the first point to the last. Fewer than two points yield nothing; two
/// points yield the same segment twice.
pub fn outline_segments(points: &[Vector2]) -> impl Iterator<Item = Segment> + '_ {
    let closing = match points {
        [first, .., last] => Some(Segment::new(*first, *last)),
        _ => None,
    };

    points
        .windows(2)
        .map(|pair| Segment::new(pair[0], pair[1]))
        .chain(closing)
}

/// Orientation marker from a circle's center along its body's x-axis
pub fn circle_spoke(center: Vector2, radius: f32, axis: Vector2) -> Segment {
    Segment::new(center, center + axis * radius)
}
