use crate::joints::{Joint, JointKind};
use crate::math::Vector2;
use crate::render::geometry::Segment;

/// Maximum number of segments any joint resolves to
pub const MAX_JOINT_SEGMENTS: usize = 3;

/// The line segments that depict one joint, in draw order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointSegments {
    segments: [Segment; MAX_JOINT_SEGMENTS],
    len: usize,
}

impl JointSegments {
    fn one(segment: Segment) -> Self {
        let unused = Segment::new(Vector2::zero(), Vector2::zero());
        Self {
            segments: [segment, unused, unused],
            len: 1,
        }
    }

    fn three(first: Segment, second: Segment, third: Segment) -> Self {
        Self {
            segments: [first, second, third],
            len: 3,
        }
    }

    pub fn as_slice(&self) -> &[Segment] {
        &self.segments[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a JointSegments {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Resolves a joint into its debug segments
///
/// `body_a_position` and `body_b_position` are the world origins of the two
/// bodies; only the generic case draws them.
pub fn resolve(joint: &Joint, body_a_position: Vector2, body_b_position: Vector2) -> JointSegments {
    let anchor_a = joint.anchor_a();
    let anchor_b = joint.anchor_b();

    match joint.kind() {
        JointKind::Distance => JointSegments::one(Segment::new(anchor_a, anchor_b)),
        JointKind::Pulley { ground_anchor_a, ground_anchor_b } => JointSegments::three(
            Segment::new(ground_anchor_a, anchor_a),
            Segment::new(ground_anchor_b, anchor_b),
            Segment::new(ground_anchor_a, ground_anchor_b),
        ),
        // Both ends come from the joint: the mouse target and the grabbed point
        JointKind::Mouse => JointSegments::one(Segment::new(anchor_a, anchor_b)),
        JointKind::Generic => JointSegments::three(
            Segment::new(body_a_position, anchor_a),
            Segment::new(anchor_a, anchor_b),
            Segment::new(anchor_b, body_b_position),
        ),
    }
}
