use crate::bodies::{body_flags::BodyFlags, BodyType};
use crate::math::{Vector2, Transform};
use crate::shapes::{Fixture, Shape};

/// Frame snapshot of a rigid body as seen by the debug renderer
///
/// The host copies these values out of its simulation each frame; the
/// renderer only ever reads them.
#[derive(Debug, Clone)]
pub struct Body {
    /// The body's transform in world space
    transform: Transform,

    /// The body's type (static, kinematic, or dynamic)
    body_type: BodyType,

    /// Activity and sleep state
    flags: BodyFlags,

    /// Attached fixtures, in attachment order
    fixtures: Vec<Fixture>,
}

impl Body {
    /// Creates a new active, awake body with no fixtures
    pub fn new(transform: Transform, body_type: BodyType) -> Self {
        Self {
            transform,
            body_type,
            flags: BodyFlags::default(),
            fixtures: Vec::new(),
        }
    }

    /// Creates a new dynamic body at the given position
    pub fn new_dynamic(position: Vector2) -> Self {
        Self::new(Transform::from_position(position), BodyType::Dynamic)
    }

    /// Creates a new kinematic body at the given position
    pub fn new_kinematic(position: Vector2) -> Self {
        Self::new(Transform::from_position(position), BodyType::Kinematic)
    }

    /// Creates a new static body at the given position
    pub fn new_static(position: Vector2) -> Self {
        Self::new(Transform::from_position(position), BodyType::Static)
    }

    /// Attaches a fixture, builder style
    pub fn with_fixture(mut self, shape: Shape) -> Self {
        self.fixtures.push(Fixture::new(shape));
        self
    }

    /// Attaches a fixture
    pub fn add_fixture(&mut self, fixture: Fixture) -> usize {
        self.fixtures.push(fixture);
        self.fixtures.len() - 1
    }

    /// Returns the attached fixtures
    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    /// Returns a fixture by index
    pub fn get_fixture(&self, index: usize) -> Option<&Fixture> {
        self.fixtures.get(index)
    }

    /// Returns the body's transform
    pub fn get_transform(&self) -> Transform {
        self.transform
    }

    /// Sets the body's transform
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Returns the body's position
    pub fn get_position(&self) -> Vector2 {
        self.transform.position
    }

    pub fn get_body_type(&self) -> BodyType {
        self.body_type
    }

    pub fn set_body_type(&mut self, body_type: BodyType) {
        self.body_type = body_type;
    }

    /// Returns whether the body takes part in the simulation at all
    pub fn is_active(&self) -> bool {
        self.flags.contains(BodyFlags::ACTIVE)
    }

    /// Sets whether the body takes part in the simulation
    pub fn set_active(&mut self, active: bool) {
        self.flags.set(BodyFlags::ACTIVE, active);
    }

    /// Returns whether the body is awake
    pub fn is_awake(&self) -> bool {
        self.flags.contains(BodyFlags::AWAKE)
    }

    /// Returns whether the body is sleeping
    pub fn is_sleeping(&self) -> bool {
        !self.is_awake()
    }

    /// Puts the body to sleep
    pub fn put_to_sleep(&mut self) {
        self.flags.remove(BodyFlags::AWAKE);
    }

    /// Wakes up the body
    pub fn wake_up(&mut self) {
        self.flags.insert(BodyFlags::AWAKE);
    }

    /// Builder-style variant of [`Body::set_active`]
    pub fn with_active(mut self, active: bool) -> Self {
        self.set_active(active);
        self
    }

    /// Builder-style variant of sleep/wake
    pub fn with_awake(mut self, awake: bool) -> Self {
        self.flags.set(BodyFlags::AWAKE, awake);
        self
    }

    pub fn flags(&self) -> BodyFlags {
        self.flags
    }
}
