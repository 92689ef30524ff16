use phys_debug_draw::{
    Body, BodyType, Contact, FixtureRef, Joint, PhysicsWorld, Shape, WorldManifold,
    error::DebugDrawError,
    math::{Transform, Vector2},
    render::{
        aabb, colorize, contact,
        color::{
            COLOR_ACTIVE_DYNAMIC_AWAKE, COLOR_ACTIVE_DYNAMIC_SLEEPING, COLOR_ACTIVE_KINEMATIC,
            COLOR_ACTIVE_STATIC, COLOR_NOT_ACTIVE,
        },
        geometry::{self, ShapeGeometry, VertexBuffer, CIRCLE_SEGMENTS},
        joint,
    },
};
use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_transform(rng: &mut StdRng) -> Transform {
    Transform::from_position_angle(
        Vector2::new(rng.gen_range(-50.0f32..50.0), rng.gen_range(-50.0f32..50.0)),
        rng.gen_range(-std::f32::consts::PI..std::f32::consts::PI),
    )
}

fn random_polygon(rng: &mut StdRng) -> Vec<Vector2> {
    let count = rng.gen_range(3..9);
    (0..count)
        .map(|_| Vector2::new(rng.gen_range(-5.0f32..5.0), rng.gen_range(-5.0f32..5.0)))
        .collect()
}

#[test]
fn test_circle_extraction_and_tessellation() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut buffer = VertexBuffer::with_capacity(16);

    for _ in 0..50 {
        let transform = random_transform(&mut rng);
        let local_center = Vector2::new(rng.gen_range(-3.0f32..3.0), rng.gen_range(-3.0f32..3.0));
        let radius = rng.gen_range(0.1f32..10.0);
        let shape = Shape::circle_at(local_center, radius);

        let ShapeGeometry::Circle { center, radius: r, axis } =
            geometry::extract(&shape, &transform, &mut buffer).unwrap()
        else {
            panic!("circle extracted as outline");
        };

        let expected_center = transform.transform_point(local_center);
        assert_relative_eq!(center.x, expected_center.x, epsilon = 1e-4);
        assert_relative_eq!(center.y, expected_center.y, epsilon = 1e-4);
        assert_eq!(r, radius);
        assert_relative_eq!(axis.x, transform.rotation.cos);
        assert_relative_eq!(axis.y, transform.rotation.sin);

        let outline = geometry::tessellate_circle(center, r);
        let segments: Vec<_> = geometry::outline_segments(&outline).collect();
        assert_eq!(segments.len(), CIRCLE_SEGMENTS);
        for vertex in &outline {
            assert_relative_eq!(vertex.distance(&center), r, epsilon = 1e-3 * r.max(1.0));
        }

        let spoke = geometry::circle_spoke(center, r, axis);
        assert_eq!(spoke.start, center);
        assert_relative_eq!(spoke.end.x, center.x + axis.x * r, epsilon = 1e-4);
        assert_relative_eq!(spoke.end.y, center.y + axis.y * r, epsilon = 1e-4);
        assert_relative_eq!(spoke.length(), r, epsilon = 1e-3 * r.max(1.0));
    }
}

#[test]
fn test_edge_extraction() {
    let transform = Transform::from_position(Vector2::new(1.0, 1.0));
    let shape = Shape::edge(Vector2::new(0.0, 0.0), Vector2::new(2.0, 0.0));
    let mut buffer = VertexBuffer::with_capacity(8);

    let ShapeGeometry::Outline(points) = geometry::extract(&shape, &transform, &mut buffer).unwrap() else {
        panic!("edge extracted as circle");
    };
    assert_eq!(points, &[Vector2::new(1.0, 1.0), Vector2::new(3.0, 1.0)]);

    // The closed-outline routine traces an edge twice
    assert_eq!(geometry::outline_segments(points).count(), 2);
}

#[test]
fn test_polygon_and_chain_preserve_winding() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut buffer = VertexBuffer::with_capacity(16);

    for _ in 0..25 {
        let transform = random_transform(&mut rng);
        let vertices = random_polygon(&mut rng);

        for shape in [Shape::polygon(vertices.clone()), Shape::chain(vertices.clone())] {
            let ShapeGeometry::Outline(points) = geometry::extract(&shape, &transform, &mut buffer).unwrap() else {
                panic!("polygonal shape extracted as circle");
            };

            assert_eq!(points.len(), vertices.len());
            for (world, local) in points.iter().zip(&vertices) {
                assert_eq!(*world, transform.transform_point(*local));
            }
            assert_eq!(geometry::outline_segments(points).count(), vertices.len());
        }
    }
}

#[test]
fn test_extraction_rejects_shapes_over_capacity() {
    let mut buffer = VertexBuffer::with_capacity(4);
    let shape = Shape::chain((0..5).map(|i| Vector2::new(i as f32, 0.0)).collect());

    let err = geometry::extract(&shape, &Transform::identity(), &mut buffer).unwrap_err();
    assert!(matches!(
        err,
        DebugDrawError::VertexCapacityExceeded { count: 5, capacity: 4 }
    ));
    assert!(buffer.is_empty());

    // Exactly at capacity is fine
    let shape = Shape::polygon((0..4).map(|i| Vector2::new(i as f32, 1.0)).collect());
    assert!(geometry::extract(&shape, &Transform::identity(), &mut buffer).is_ok());
    assert_eq!(buffer.len(), 4);
}

#[test]
fn test_polygon_aabb_is_min_max_of_transformed_vertices() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..50 {
        let transform = random_transform(&mut rng);
        let vertices = random_polygon(&mut rng);
        let world: Vec<Vector2> = vertices.iter().map(|v| transform.transform_point(*v)).collect();

        let min_x = world.iter().map(|v| v.x).fold(f32::INFINITY, f32::min);
        let min_y = world.iter().map(|v| v.y).fold(f32::INFINITY, f32::min);
        let max_x = world.iter().map(|v| v.x).fold(f32::NEG_INFINITY, f32::max);
        let max_y = world.iter().map(|v| v.y).fold(f32::NEG_INFINITY, f32::max);

        for shape in [Shape::polygon(vertices.clone()), Shape::chain(vertices.clone())] {
            let corners = aabb::bound(&shape, &transform).unwrap();
            assert_eq!(corners[0], Vector2::new(min_x, min_y));
            assert_eq!(corners[1], Vector2::new(max_x, min_y));
            assert_eq!(corners[2], Vector2::new(max_x, max_y));
            assert_eq!(corners[3], Vector2::new(min_x, max_y));
        }
    }
}

#[test]
fn test_circle_aabb_is_exact() {
    let transform = Transform::from_position_angle(Vector2::new(2.0, 3.0), std::f32::consts::FRAC_PI_2);
    let shape = Shape::circle_at(Vector2::new(1.0, 0.0), 0.5);

    // Local (1, 0) rotated a quarter turn lands on (0, 1)
    let bounds = aabb::world_aabb(&shape, &transform).unwrap();
    assert_relative_eq!(bounds.min.x, 1.5, epsilon = 1e-5);
    assert_relative_eq!(bounds.min.y, 3.5, epsilon = 1e-5);
    assert_relative_eq!(bounds.max.x, 2.5, epsilon = 1e-5);
    assert_relative_eq!(bounds.max.y, 4.5, epsilon = 1e-5);

    // The tessellated outline stays inside the exact box
    let center = transform.transform_point(Vector2::new(1.0, 0.0));
    for v in geometry::tessellate_circle(center, 0.5) {
        assert!(v.x >= bounds.min.x - 1e-4 && v.x <= bounds.max.x + 1e-4);
        assert!(v.y >= bounds.min.y - 1e-4 && v.y <= bounds.max.y + 1e-4);
    }
}

#[test]
fn test_edge_has_no_aabb() {
    let shape = Shape::edge(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0));
    assert!(aabb::bound(&shape, &Transform::identity()).is_none());
    assert!(aabb::bound(&Shape::polygon(Vec::new()), &Transform::identity()).is_none());
}

#[test]
fn test_colorizer_priority() {
    use BodyType::*;

    // Inactive wins over everything
    for body_type in [Static, Kinematic, Dynamic] {
        for awake in [false, true] {
            assert_eq!(colorize(false, body_type, awake), COLOR_NOT_ACTIVE);
        }
    }

    // Static and kinematic ignore sleep state
    for awake in [false, true] {
        assert_eq!(colorize(true, Static, awake), COLOR_ACTIVE_STATIC);
        assert_eq!(colorize(true, Kinematic, awake), COLOR_ACTIVE_KINEMATIC);
    }

    assert_eq!(colorize(true, Dynamic, false), COLOR_ACTIVE_DYNAMIC_SLEEPING);
    assert_eq!(colorize(true, Dynamic, true), COLOR_ACTIVE_DYNAMIC_AWAKE);

    let palette = [
        COLOR_NOT_ACTIVE,
        COLOR_ACTIVE_STATIC,
        COLOR_ACTIVE_KINEMATIC,
        COLOR_ACTIVE_DYNAMIC_SLEEPING,
        COLOR_ACTIVE_DYNAMIC_AWAKE,
    ];
    for (i, a) in palette.iter().enumerate() {
        for b in &palette[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_body_debug_color_follows_state() {
    let body = Body::new_dynamic(Vector2::zero());
    assert_eq!(body.debug_color(), COLOR_ACTIVE_DYNAMIC_AWAKE);

    let body = body.with_awake(false);
    assert_eq!(body.debug_color(), COLOR_ACTIVE_DYNAMIC_SLEEPING);

    let body = body.with_active(false);
    assert_eq!(body.debug_color(), COLOR_NOT_ACTIVE);
}

#[test]
fn test_joint_segment_counts_and_endpoints() {
    let mut world = PhysicsWorld::new();
    let a = world.add_body(Body::new_dynamic(Vector2::new(-1.0, 0.0)));
    let b = world.add_body(Body::new_dynamic(Vector2::new(4.0, 0.0)));
    let pos_a = Vector2::new(-1.0, 0.0);
    let pos_b = Vector2::new(4.0, 0.0);
    let p1 = Vector2::new(0.0, 1.0);
    let p2 = Vector2::new(3.0, 1.0);

    let distance = joint::resolve(&Joint::distance(a, b, p1, p2), pos_a, pos_b);
    assert_eq!(distance.len(), 1);
    assert_eq!(distance.as_slice()[0].start, p1);
    assert_eq!(distance.as_slice()[0].end, p2);

    let mouse = joint::resolve(&Joint::mouse(a, b, p1, p2), pos_a, pos_b);
    assert_eq!(mouse.len(), 1);
    assert_eq!((mouse.as_slice()[0].start, mouse.as_slice()[0].end), (p1, p2));

    let generic = joint::resolve(&Joint::generic(a, b, p1, p2), pos_a, pos_b);
    let s = generic.as_slice();
    assert_eq!(s.len(), 3);
    assert_eq!((s[0].start, s[0].end), (pos_a, p1));
    assert_eq!((s[1].start, s[1].end), (p1, p2));
    assert_eq!((s[2].start, s[2].end), (p2, pos_b));
}

#[test]
fn test_pulley_joint_segments() {
    let mut world = PhysicsWorld::new();
    let a = world.add_body(Body::new_dynamic(Vector2::new(0.0, 0.0)));
    let b = world.add_body(Body::new_dynamic(Vector2::new(10.0, 0.0)));

    let pulley = Joint::pulley(
        a,
        b,
        Vector2::new(0.0, 5.0),
        Vector2::new(10.0, 5.0),
        Vector2::new(0.0, 0.0),
        Vector2::new(10.0, 0.0),
    );
    let segments = joint::resolve(&pulley, Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0));
    let s = segments.as_slice();

    assert_eq!(s.len(), 3);
    assert_eq!((s[0].start, s[0].end), (Vector2::new(0.0, 5.0), Vector2::new(0.0, 0.0)));
    assert_eq!((s[1].start, s[1].end), (Vector2::new(10.0, 5.0), Vector2::new(10.0, 0.0)));
    assert_eq!((s[2].start, s[2].end), (Vector2::new(0.0, 5.0), Vector2::new(10.0, 5.0)));
}

#[test]
fn test_contact_point_extraction() {
    let mut world = PhysicsWorld::new();
    let a = world.add_body(Body::new_static(Vector2::zero()).with_fixture(Shape::box_shape(5.0, 0.5)));
    let b = world.add_body(Body::new_dynamic(Vector2::new(0.0, 1.0)).with_fixture(Shape::circle(0.5)));
    let fa = FixtureRef::new(a, 0);
    let fb = FixtureRef::new(b, 0);
    let normal = Vector2::new(0.0, 1.0);

    let empty = Contact::new(fa, fb, WorldManifold::new(normal));
    assert_eq!(contact::extract(&empty), None);

    let one = Contact::new(fa, fb, WorldManifold::from_points(normal, &[Vector2::new(0.0, 0.5)]));
    assert_eq!(contact::extract(&one), Some(Vector2::new(0.0, 0.5)));

    let two = Contact::new(
        fa,
        fb,
        WorldManifold::from_points(normal, &[Vector2::new(-1.0, 0.5), Vector2::new(1.0, 0.5)]),
    );
    assert_eq!(contact::extract(&two), Some(Vector2::new(-1.0, 0.5)));

    assert!(world.get_fixture(fa).is_some());
    assert!(world.get_fixture(FixtureRef::new(b, 3)).is_none());
}

#[test]
fn test_manifold_holds_at_most_two_points() {
    let mut manifold = WorldManifold::new(Vector2::unit_x());
    assert!(manifold.add_point(Vector2::new(1.0, 0.0)));
    assert!(manifold.add_point(Vector2::new(2.0, 0.0)));
    assert!(!manifold.add_point(Vector2::new(3.0, 0.0)));
    assert_eq!(manifold.point_count(), 2);

    manifold.clear();
    assert!(manifold.is_empty());
}

#[test]
fn test_contact_pass_gate() {
    assert!(contact::contact_pass_enabled(true, 60.0, 20.0));
    assert!(contact::contact_pass_enabled(true, 20.0, 20.0));
    assert!(!contact::contact_pass_enabled(true, 19.9, 20.0));
    assert!(!contact::contact_pass_enabled(false, 60.0, 20.0));
    assert!(!contact::contact_pass_enabled(true, f32::NAN, 20.0));
}

#[cfg(feature = "serialize")]
#[test]
fn test_manifold_deserialization_rejects_excess_points() {
    let manifold = WorldManifold::from_points(Vector2::new(0.0, 1.0), &[Vector2::new(1.0, 2.0)]);
    let json = serde_json::to_string(&manifold).unwrap();
    let back: WorldManifold = serde_json::from_str(&json).unwrap();
    assert_eq!(back, manifold);

    let bad = r#"{"normal":{"x":0.0,"y":1.0},"points":[{"x":1.0,"y":2.0},{"x":3.0,"y":4.0}],"point_count":5}"#;
    assert!(serde_json::from_str::<WorldManifold>(bad).is_err());

    let full = r#"{"normal":{"x":0.0,"y":1.0},"points":[{"x":1.0,"y":2.0},{"x":3.0,"y":4.0}],"point_count":2}"#;
    let full: WorldManifold = serde_json::from_str(full).unwrap();
    assert_eq!(full.points().len(), 2);
}
