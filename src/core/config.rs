use crate::error::DebugDrawError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Default capacity of the renderer's vertex scratch buffer
pub const DEFAULT_VERTEX_CAPACITY: usize = 1000;

/// Default frame rate below which contact points are not drawn
pub const DEFAULT_CONTACT_FPS_THRESHOLD: f32 = 20.0;

/// Configuration for the debug renderer, fixed at construction
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(default))]
pub struct DebugDrawConfig {
    /// Draw fixture outlines, colored by body state
    pub draw_bodies: bool,

    /// Draw joint linkages
    pub draw_joints: bool,

    /// Draw fixture bounding boxes
    pub draw_aabbs: bool,

    /// Contact points are skipped for frames measured below this rate
    pub contact_fps_threshold: f32,

    /// Maximum number of vertices a single shape may have
    pub vertex_capacity: usize,

    /// Line width hint passed to the sink for the line batch
    pub line_width: f32,

    /// Point size hint passed to the sink for the point batch
    pub point_size: f32,
}

impl Default for DebugDrawConfig {
    fn default() -> Self {
        Self {
            draw_bodies: true,
            draw_joints: true,
            draw_aabbs: false,
            contact_fps_threshold: DEFAULT_CONTACT_FPS_THRESHOLD,
            vertex_capacity: DEFAULT_VERTEX_CAPACITY,
            line_width: 3.0,
            point_size: 6.0,
        }
    }
}

impl DebugDrawConfig {
    /// Creates a configuration with the given draw toggles and default tuning
    pub fn new(draw_bodies: bool, draw_joints: bool, draw_aabbs: bool) -> Self {
        Self {
            draw_bodies,
            draw_joints,
            draw_aabbs,
            ..Self::default()
        }
    }

    pub fn with_contact_fps_threshold(mut self, threshold: f32) -> Self {
        self.contact_fps_threshold = threshold;
        self
    }

    pub fn with_vertex_capacity(mut self, capacity: usize) -> Self {
        self.vertex_capacity = capacity;
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_point_size(mut self, size: f32) -> Self {
        self.point_size = size;
        self
    }

    /// Checks the tuning values
    pub fn validate(&self) -> Result<()> {
        if self.vertex_capacity == 0 {
            return Err(DebugDrawError::InvalidParameter(
                "vertex_capacity must be at least 1".to_string(),
            ));
        }
        if !self.contact_fps_threshold.is_finite() || self.contact_fps_threshold < 0.0 {
            return Err(DebugDrawError::InvalidParameter(format!(
                "contact_fps_threshold must be finite and non-negative, got {}",
                self.contact_fps_threshold
            )));
        }
        for (name, value) in [("line_width", self.line_width), ("point_size", self.point_size)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DebugDrawError::InvalidParameter(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Per-frame inputs from the host's frame loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    /// Measured frames per second
    pub fps: f32,

    /// Whether contact points should be drawn this frame
    pub draw_contacts: bool,
}

impl FrameInfo {
    pub fn new(fps: f32, draw_contacts: bool) -> Self {
        Self { fps, draw_contacts }
    }
}
