use crate::bodies::Body;
use crate::collision::{Contact, FixtureRef};
use crate::core::{BodyHandle, JointHandle, BodyStorage, JointStorage};
use crate::joints::Joint;
use crate::shapes::Fixture;
use crate::error::DebugDrawError;
use crate::Result;

/// Per-frame snapshot of a physics world
///
/// The host (or its adapter around a physics engine) fills this each frame.
/// The debug renderer only borrows it immutably.
#[derive(Debug, Clone, Default)]
pub struct PhysicsWorld {
    /// All bodies, in world iteration order
    bodies: BodyStorage<Body>,

    /// All joints, in world iteration order
    joints: JointStorage<Joint>,

    /// Touching fixture pairs for this frame
    contacts: Vec<Contact>,
}

impl PhysicsWorld {
    /// Creates a new empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a body to the world and returns its handle
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        self.bodies.add(body)
    }

    /// Removes a body and every joint and contact that references it
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<Body> {
        self.bodies.get_checked(handle)?;

        let dangling: Vec<JointHandle> = self
            .joints
            .iter()
            .filter(|(_, joint)| joint.involves_body(handle))
            .map(|(h, _)| h)
            .collect();
        for joint in dangling {
            self.joints.remove(joint);
        }

        self.contacts
            .retain(|c| c.fixture_a().body != handle && c.fixture_b().body != handle);

        self.bodies.remove(handle).ok_or_else(|| {
            DebugDrawError::ResourceNotFound(format!("Body with handle {:?} not found", handle))
        })
    }

    /// Gets a body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&Body> {
        self.bodies.get_checked(handle)
    }

    /// Gets a mutable reference to a body by its handle
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle)
    }

    /// Looks up the fixture a contact refers to
    pub fn get_fixture(&self, fixture: FixtureRef) -> Option<&Fixture> {
        self.bodies.get(fixture.body)?.get_fixture(fixture.index)
    }

    /// Iterates bodies in world order
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.bodies.iter()
    }

    /// Adds a joint to the world and returns its handle
    pub fn add_joint(&mut self, joint: Joint) -> JointHandle {
        self.joints.add(joint)
    }

    pub fn remove_joint(&mut self, handle: JointHandle) -> Option<Joint> {
        self.joints.remove(handle)
    }

    /// Gets a joint by its handle
    pub fn get_joint(&self, handle: JointHandle) -> Result<&Joint> {
        self.joints.get_checked(handle)
    }

    /// Iterates joints in world order
    pub fn joints(&self) -> impl Iterator<Item = (JointHandle, &Joint)> + '_ {
        self.joints.iter()
    }

    /// Records a contact for this frame
    pub fn add_contact(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Drops all contacts, typically before refilling for a new frame
    pub fn clear_contacts(&mut self) {
        self.contacts.clear();
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// Removes everything from the world
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.joints.clear();
        self.contacts.clear();
    }
}
