use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Maximum number of contact points a 2D manifold can hold
pub const MAX_MANIFOLD_POINTS: usize = 2;

/// World-space contact points of a touching fixture pair for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(try_from = "RawWorldManifold"))]
pub struct WorldManifold {
    /// Contact normal, pointing from fixture A to fixture B
    pub normal: Vector2,

    points: [Vector2; MAX_MANIFOLD_POINTS],
    point_count: usize,
}

/// Unchecked wire form of [`WorldManifold`]
#[cfg(feature = "serialize")]
#[derive(Deserialize)]
struct RawWorldManifold {
    normal: Vector2,
    points: [Vector2; MAX_MANIFOLD_POINTS],
    point_count: usize,
}

#[cfg(feature = "serialize")]
impl TryFrom<RawWorldManifold> for WorldManifold {
    type Error = String;

    fn try_from(raw: RawWorldManifold) -> Result<Self, Self::Error> {
        if raw.point_count > MAX_MANIFOLD_POINTS {
            return Err(format!(
                "point_count {} exceeds the manifold maximum of {}",
                raw.point_count, MAX_MANIFOLD_POINTS
            ));
        }
        Ok(Self {
            normal: raw.normal,
            points: raw.points,
            point_count: raw.point_count,
        })
    }
}

impl WorldManifold {
    /// Creates an empty manifold
    pub fn new(normal: Vector2) -> Self {
        Self {
            normal,
            points: [Vector2::zero(); MAX_MANIFOLD_POINTS],
            point_count: 0,
        }
    }

    /// Creates a manifold holding the given points
    ///
    /// Points beyond [`MAX_MANIFOLD_POINTS`] are dropped.
    pub fn from_points(normal: Vector2, points: &[Vector2]) -> Self {
        let mut manifold = Self::new(normal);
        for &point in points {
            manifold.add_point(point);
        }
        manifold
    }

    /// Adds a contact point; returns false if the manifold is already full
    pub fn add_point(&mut self, point: Vector2) -> bool {
        if self.point_count >= MAX_MANIFOLD_POINTS {
            return false;
        }
        self.points[self.point_count] = point;
        self.point_count += 1;
        true
    }

    /// Clears all points from the manifold
    pub fn clear(&mut self) {
        self.point_count = 0;
        self.normal = Vector2::zero();
    }

    /// Number of valid contact points
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// The valid contact points
    pub fn points(&self) -> &[Vector2] {
        &self.points[..self.point_count]
    }

    /// Returns whether the manifold is empty
    pub fn is_empty(&self) -> bool {
        self.point_count == 0
    }
}
