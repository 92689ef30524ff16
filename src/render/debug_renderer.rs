use nalgebra::Matrix4;

use crate::bodies::RenderMetadataMap;
use crate::error::DebugDrawError;
use crate::core::{DebugDrawConfig, FrameInfo, PhysicsWorld};
use crate::math::Vector2;
use crate::render::color::{AABB_COLOR, CONTACT_COLOR, JOINT_COLOR};
use crate::render::geometry::{self, Segment, ShapeGeometry, VertexBuffer};
use crate::render::sink::{PrimitiveKind, PrimitiveSink};
use crate::render::{aabb, contact, joint, DrawColor};
use crate::Result;

/// Counts of what one [`DebugRenderer::render`] call submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Line primitives submitted
    pub lines: usize,

    /// Point primitives submitted
    pub points: usize,

    /// Bodies that had metadata and were visited
    pub bodies: usize,

    /// Bounding boxes drawn
    pub aabbs: usize,

    pub joints: usize,

    /// Contacts that produced a point
    pub contacts: usize,

    /// Bodies, joints and contacts skipped for lack of metadata
    pub skipped: usize,

    /// Whether the contact batch was emitted
    pub contact_pass: bool,
}

/// Draws a physics world as debug lines and points
///
/// Owns the vertex scratch buffer; `render` takes `&mut self`, so one
/// renderer serves one frame at a time.
#[derive(Debug, Clone)]
pub struct DebugRenderer {
    config: DebugDrawConfig,
    vertices: VertexBuffer,
}

impl Default for DebugRenderer {
    fn default() -> Self {
        let config = DebugDrawConfig::default();
        let vertices = VertexBuffer::with_capacity(config.vertex_capacity);
        Self { config, vertices }
    }
}

impl DebugRenderer {
    /// Creates a renderer, rejecting invalid configurations
    pub fn new(config: DebugDrawConfig) -> Result<Self> {
        config.validate()?;
        let vertices = VertexBuffer::with_capacity(config.vertex_capacity);
        Ok(Self { config, vertices })
    }

    /// Creates a renderer with the given draw toggles and default tuning
    pub fn with_flags(draw_bodies: bool, draw_joints: bool, draw_aabbs: bool) -> Self {
        let config = DebugDrawConfig::new(draw_bodies, draw_joints, draw_aabbs);
        let vertices = VertexBuffer::with_capacity(config.vertex_capacity);
        Self { config, vertices }
    }

    pub fn config(&self) -> &DebugDrawConfig {
        &self.config
    }

    /// Renders one frame
    ///
    /// Lines (bodies, bounding boxes, joints) go into one batch, contact
    /// points into a second one. The line batch is always closed, even when a
    /// shape exceeds the vertex capacity; that error is returned afterwards.
    pub fn render<S>(
        &mut self,
        world: &PhysicsWorld,
        metadata: &RenderMetadataMap,
        projection: &Matrix4<f32>,
        frame: FrameInfo,
        sink: &mut S,
    ) -> Result<RenderStats>
    where
        S: PrimitiveSink + ?Sized,
    {
        let mut stats = RenderStats::default();
        sink.set_projection(projection);

        sink.begin(PrimitiveKind::Line);
        sink.set_size(self.config.line_width);
        let bodies = self.draw_bodies(world, metadata, sink, &mut stats);
        if bodies.is_ok() {
            self.draw_joints(world, metadata, sink, &mut stats);
        }
        sink.end();

        if let Err(err) = bodies {
            log::warn!("debug render aborted: {}", err);
            return Err(err);
        }

        if contact::contact_pass_enabled(frame.draw_contacts, frame.fps, self.config.contact_fps_threshold) {
            sink.begin(PrimitiveKind::Point);
            sink.set_size(self.config.point_size);
            self.draw_contacts(world, metadata, sink, &mut stats);
            sink.end();
            stats.contact_pass = true;
        } else if frame.draw_contacts {
            log::trace!(
                "contact pass skipped at {:.1} fps (threshold {:.1})",
                frame.fps,
                self.config.contact_fps_threshold
            );
        }

        log::debug!("debug render: {:?}", stats);
        Ok(stats)
    }

    fn draw_bodies<S>(
        &mut self,
        world: &PhysicsWorld,
        metadata: &RenderMetadataMap,
        sink: &mut S,
        stats: &mut RenderStats,
    ) -> Result<()>
    where
        S: PrimitiveSink + ?Sized,
    {
        if !self.config.draw_bodies && !self.config.draw_aabbs {
            return Ok(());
        }

        for (handle, body) in world.bodies() {
            let Some(z) = metadata.z_index(handle) else {
                log::trace!("body {:?} has no render metadata", handle);
                stats.skipped += 1;
                continue;
            };
            stats.bodies += 1;

            let transform = body.get_transform();
            let color = body.debug_color();

            for fixture in body.fixtures() {
                // The cap applies to the AABB pass as well
                let count = fixture.shape().vertex_count();
                if count > self.vertices.capacity() {
                    return Err(DebugDrawError::VertexCapacityExceeded {
                        count,
                        capacity: self.vertices.capacity(),
                    });
                }

                if self.config.draw_bodies {
                    match geometry::extract(fixture.shape(), &transform, &mut self.vertices)? {
                        ShapeGeometry::Circle { center, radius, axis } => {
                            stats.lines += draw_circle(sink, center, radius, axis, color, z);
                        }
                        ShapeGeometry::Outline(points) => {
                            stats.lines += draw_polygon(sink, points, color, z);
                        }
                    }
                }

                if self.config.draw_aabbs {
                    if let Some(corners) = aabb::bound(fixture.shape(), &transform) {
                        stats.lines += draw_polygon(sink, &corners, AABB_COLOR, z);
                        stats.aabbs += 1;
                    }
                }
            }
        }

        Ok(())
    }

    fn draw_joints<S>(
        &self,
        world: &PhysicsWorld,
        metadata: &RenderMetadataMap,
        sink: &mut S,
        stats: &mut RenderStats,
    ) where
        S: PrimitiveSink + ?Sized,
    {
        if !self.config.draw_joints {
            return;
        }

        for (handle, joint) in world.joints() {
            let Some(z) = metadata.z_index_with_fallback(joint.body_b(), joint.body_a()) else {
                log::trace!("joint {:?} has no body with render metadata", handle);
                stats.skipped += 1;
                continue;
            };

            let (body_a, body_b) = match (world.get_body(joint.body_a()), world.get_body(joint.body_b())) {
                (Ok(a), Ok(b)) => (a, b),
                (Err(err), _) | (_, Err(err)) => {
                    log::warn!("joint {:?} skipped: {}", handle, err);
                    continue;
                }
            };

            let segments = joint::resolve(joint, body_a.get_position(), body_b.get_position());
            for segment in &segments {
                stats.lines += draw_segment(sink, segment, JOINT_COLOR, z);
            }
            stats.joints += 1;
        }
    }

    fn draw_contacts<S>(
        &self,
        world: &PhysicsWorld,
        metadata: &RenderMetadataMap,
        sink: &mut S,
        stats: &mut RenderStats,
    ) where
        S: PrimitiveSink + ?Sized,
    {
        sink.set_color(CONTACT_COLOR);

        for c in world.contacts() {
            let (a, b) = (c.fixture_a().body, c.fixture_b().body);
            let Some(z) = metadata.z_index_with_fallback(b, a) else {
                log::trace!("contact between {:?} and {:?} has no render metadata", a, b);
                stats.skipped += 1;
                continue;
            };

            if let Err(err) = world.get_body(a).and(world.get_body(b)) {
                log::warn!("contact skipped: {}", err);
                continue;
            }

            if let Some(point) = contact::extract(c) {
                sink.point(point.x, point.y, z);
                stats.points += 1;
                stats.contacts += 1;
            }
        }
    }
}

/// Draws a closed outline; returns the number of lines submitted
fn draw_polygon<S>(sink: &mut S, points: &[Vector2], color: DrawColor, z: f32) -> usize
where
    S: PrimitiveSink + ?Sized,
{
    sink.set_color(color);
    let mut lines = 0;
    for segment in geometry::outline_segments(points) {
        submit(sink, &segment, z);
        lines += 1;
    }
    lines
}

/// Draws a tessellated circle and its orientation spoke
fn draw_circle<S>(sink: &mut S, center: Vector2, radius: f32, axis: Vector2, color: DrawColor, z: f32) -> usize
where
    S: PrimitiveSink + ?Sized,
{
    let outline = geometry::tessellate_circle(center, radius);
    let lines = draw_polygon(sink, &outline, color, z);
    submit(sink, &geometry::circle_spoke(center, radius, axis), z);
    lines + 1
}

fn draw_segment<S>(sink: &mut S, segment: &Segment, color: DrawColor, z: f32) -> usize
where
    S: PrimitiveSink + ?Sized,
{
    sink.set_color(color);
    submit(sink, segment, z);
    1
}

#[inline]
fn submit<S>(sink: &mut S, segment: &Segment, z: f32)
where
    S: PrimitiveSink + ?Sized,
{
    sink.line(segment.start.x, segment.start.y, z, segment.end.x, segment.end.y, z);
}
