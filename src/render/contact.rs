use crate::collision::Contact;
use crate::math::Vector2;

/// The contact point to draw for a contact, if any
///
/// A manifold holds up to two points; only the first is drawn.
pub fn extract(contact: &Contact) -> Option<Vector2> {
    contact.world_manifold().points().first().copied()
}

/// Whether the contact pass runs this frame
///
/// Contacts are skipped when the host did not ask for them or when the
/// measured frame rate is below `fps_threshold`.
pub fn contact_pass_enabled(draw_contacts: bool, fps: f32, fps_threshold: f32) -> bool {
    draw_contacts && fps >= fps_threshold
}
