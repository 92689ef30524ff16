mod shape;

pub use self::shape::{Shape, ShapeType, Fixture};
