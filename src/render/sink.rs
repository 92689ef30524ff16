//! The primitive submission protocol between the debug renderer and a
//! line/point backend.
//!
//! A frame is a sequence of batches. Each batch starts with
//! [`PrimitiveSink::begin`], holds primitives of a single kind, and ends with
//! [`PrimitiveSink::end`]. Colors are sticky within a batch.

use nalgebra::{Matrix4, Point3};

use crate::render::DrawColor;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Kind of primitive a batch holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum PrimitiveKind {
    Line,
    Point,
}

/// A backend that accepts batched line and point primitives
pub trait PrimitiveSink {
    /// Sets the projection applied to subsequent batches
    fn set_projection(&mut self, projection: &Matrix4<f32>);

    /// Opens a batch of the given kind
    fn begin(&mut self, kind: PrimitiveKind);

    /// Line width or point size hint for the open batch
    fn set_size(&mut self, _size: f32) {}

    /// Sets the color of subsequent primitives
    fn set_color(&mut self, color: DrawColor);

    /// Submits a line segment; only valid inside a `Line` batch
    fn line(&mut self, x1: f32, y1: f32, z1: f32, x2: f32, y2: f32, z2: f32);

    /// Submits a point; only valid inside a `Point` batch
    fn point(&mut self, x: f32, y: f32, z: f32);

    /// Closes the open batch
    fn end(&mut self);
}

/// A primitive captured by [`RecordingSink`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Line {
        start: Point3<f32>,
        end: Point3<f32>,
        color: DrawColor,
    },
    Point {
        position: Point3<f32>,
        color: DrawColor,
    },
}

impl Primitive {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Line { .. } => PrimitiveKind::Line,
            Self::Point { .. } => PrimitiveKind::Point,
        }
    }

    pub fn color(&self) -> DrawColor {
        match self {
            Self::Line { color, .. } | Self::Point { color, .. } => *color,
        }
    }
}

/// One begin/end pair seen by [`RecordingSink`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchRecord {
    pub kind: PrimitiveKind,

    /// Last size hint given while the batch was open
    pub size: Option<f32>,

    /// Index of the batch's first primitive in [`RecordingSink::primitives`]
    pub first: usize,

    pub count: usize,

    /// Whether `end` was called for this batch
    pub closed: bool,
}

/// A sink that stores everything it is given
///
/// Useful for tests and for hosts that post-process the primitives (for
/// example to rasterize them). Protocol misuse is counted rather than
/// panicking, so a test can assert it stayed at zero.
#[derive(Debug, Clone)]
pub struct RecordingSink {
    projection: Matrix4<f32>,
    color: DrawColor,
    primitives: Vec<Primitive>,
    batches: Vec<BatchRecord>,
    protocol_violations: usize,
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self {
            projection: Matrix4::identity(),
            color: DrawColor::default(),
            primitives: Vec::new(),
            batches: Vec::new(),
            protocol_violations: 0,
        }
    }
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every primitive, in submission order
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn batches(&self) -> &[BatchRecord] {
        &self.batches
    }

    /// Recorded line segments as `(start, end, color)`
    pub fn lines(&self) -> impl Iterator<Item = (Point3<f32>, Point3<f32>, DrawColor)> + '_ {
        self.primitives.iter().filter_map(|p| match *p {
            Primitive::Line { start, end, color } => Some((start, end, color)),
            Primitive::Point { .. } => None,
        })
    }

    /// Recorded points as `(position, color)`
    pub fn points(&self) -> impl Iterator<Item = (Point3<f32>, DrawColor)> + '_ {
        self.primitives.iter().filter_map(|p| match *p {
            Primitive::Point { position, color } => Some((position, color)),
            Primitive::Line { .. } => None,
        })
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    pub fn point_count(&self) -> usize {
        self.points().count()
    }

    /// The last projection set on the sink
    pub fn projection(&self) -> &Matrix4<f32> {
        &self.projection
    }

    /// Line segments mapped through the current projection
    pub fn projected_lines(&self) -> impl Iterator<Item = (Point3<f32>, Point3<f32>, DrawColor)> + '_ {
        self.lines().map(move |(start, end, color)| {
            (
                self.projection.transform_point(&start),
                self.projection.transform_point(&end),
                color,
            )
        })
    }

    /// Points mapped through the current projection
    pub fn projected_points(&self) -> impl Iterator<Item = (Point3<f32>, DrawColor)> + '_ {
        self.points()
            .map(move |(position, color)| (self.projection.transform_point(&position), color))
    }

    /// Number of calls made outside the begin/end protocol
    pub fn protocol_violations(&self) -> usize {
        self.protocol_violations
    }

    /// Forgets recorded primitives and batches, keeping the projection
    pub fn clear(&mut self) {
        self.primitives.clear();
        self.batches.clear();
        self.protocol_violations = 0;
        self.color = DrawColor::default();
    }

    fn open_batch(&mut self) -> Option<&mut BatchRecord> {
        self.batches.last_mut().filter(|b| !b.closed)
    }

    fn accept(&mut self, kind: PrimitiveKind) -> bool {
        match self.open_batch() {
            Some(batch) if batch.kind == kind => {
                batch.count += 1;
                true
            }
            _ => {
                self.protocol_violations += 1;
                log::warn!("{:?} primitive submitted outside a matching batch", kind);
                false
            }
        }
    }
}

impl PrimitiveSink for RecordingSink {
    fn set_projection(&mut self, projection: &Matrix4<f32>) {
        if self.open_batch().is_some() {
            self.protocol_violations += 1;
        }
        self.projection = *projection;
    }

    fn begin(&mut self, kind: PrimitiveKind) {
        if self.open_batch().is_some() {
            self.protocol_violations += 1;
            log::warn!("begin({:?}) while a batch is already open", kind);
        }
        self.color = DrawColor::default();
        self.batches.push(BatchRecord {
            kind,
            size: None,
            first: self.primitives.len(),
            count: 0,
            closed: false,
        });
    }

    fn set_size(&mut self, size: f32) {
        match self.open_batch() {
            Some(batch) => batch.size = Some(size),
            None => self.protocol_violations += 1,
        }
    }

    fn set_color(&mut self, color: DrawColor) {
        self.color = color;
    }

    fn line(&mut self, x1: f32, y1: f32, z1: f32, x2: f32, y2: f32, z2: f32) {
        if self.accept(PrimitiveKind::Line) {
            self.primitives.push(Primitive::Line {
                start: Point3::new(x1, y1, z1),
                end: Point3::new(x2, y2, z2),
                color: self.color,
            });
        }
    }

    fn point(&mut self, x: f32, y: f32, z: f32) {
        if self.accept(PrimitiveKind::Point) {
            self.primitives.push(Primitive::Point {
                position: Point3::new(x, y, z),
                color: self.color,
            });
        }
    }

    fn end(&mut self) {
        match self.open_batch() {
            Some(batch) => batch.closed = true,
            None => {
                self.protocol_violations += 1;
                log::warn!("end() without an open batch");
            }
        }
    }
}
