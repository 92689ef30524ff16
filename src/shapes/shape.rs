use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Collision geometry of a fixture, in body-local coordinates
///
/// The set of variants is closed: every consumer matches exhaustively, so a
/// new shape kind is a compile error everywhere it has to be handled.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Shape {
    /// A solid disc
    Circle {
        /// Local offset of the circle center from the body origin
        center: Vector2,

        /// Radius of the circle
        radius: f32,
    },

    /// A single line segment
    Edge {
        /// First endpoint
        vertex1: Vector2,

        /// Second endpoint
        vertex2: Vector2,
    },

    /// A convex polygon with counter-clockwise winding
    Polygon {
        /// Vertices in counter-clockwise order
        vertices: Vec<Vector2>,
    },

    /// A sequence of connected edges
    Chain {
        /// Vertices in chain order
        vertices: Vec<Vector2>,
    },
}

/// Discriminant of [`Shape`], handy for logging and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Circle,
    Edge,
    Polygon,
    Chain,
}

impl Shape {
    /// Creates a circle centered on the body origin
    pub fn circle(radius: f32) -> Self {
        Self::Circle {
            center: Vector2::zero(),
            radius: radius.max(0.0),
        }
    }

    /// Creates a circle with a local offset
    pub fn circle_at(center: Vector2, radius: f32) -> Self {
        Self::Circle {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Creates an edge between two local points
    pub fn edge(vertex1: Vector2, vertex2: Vector2) -> Self {
        Self::Edge { vertex1, vertex2 }
    }

    /// Creates a polygon from counter-clockwise vertices
    pub fn polygon(vertices: Vec<Vector2>) -> Self {
        Self::Polygon { vertices }
    }

    /// Creates an axis-aligned box polygon centered on the body origin
    pub fn box_shape(half_width: f32, half_height: f32) -> Self {
        Self::Polygon {
            vertices: vec![
                Vector2::new(-half_width, -half_height),
                Vector2::new(half_width, -half_height),
                Vector2::new(half_width, half_height),
                Vector2::new(-half_width, half_height),
            ],
        }
    }

    /// Creates a chain through the given vertices
    pub fn chain(vertices: Vec<Vector2>) -> Self {
        Self::Chain { vertices }
    }

    /// Returns the shape discriminant
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Self::Circle { .. } => ShapeType::Circle,
            Self::Edge { .. } => ShapeType::Edge,
            Self::Polygon { .. } => ShapeType::Polygon,
            Self::Chain { .. } => ShapeType::Chain,
        }
    }

    /// Number of stored vertices (a circle stores only its center)
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Circle { .. } => 1,
            Self::Edge { .. } => 2,
            Self::Polygon { vertices } | Self::Chain { vertices } => vertices.len(),
        }
    }
}

/// A shape attached to a body
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Fixture {
    shape: Shape,
}

impl Fixture {
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }

    /// Returns the fixture's shape
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape.shape_type()
    }
}

impl From<Shape> for Fixture {
    fn from(shape: Shape) -> Self {
        Self::new(shape)
    }
}
