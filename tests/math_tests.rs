use phys_debug_draw::math::{Vector2, Rotation, Transform, Aabb};
use std::f32::consts::PI;
use approx::assert_relative_eq;

#[test]
fn test_vector2_operations() {
    let v1 = Vector2::new(1.0, 2.0);
    let v2 = Vector2::new(4.0, -5.0);

    let sum = v1 + v2;
    assert_eq!(sum, Vector2::new(5.0, -3.0));

    let diff = v2 - v1;
    assert_eq!(diff, Vector2::new(3.0, -7.0));

    let scaled = v1 * 2.0;
    assert_eq!(scaled, Vector2::new(2.0, 4.0));

    assert_eq!(v1.dot(&v2), 1.0 * 4.0 + 2.0 * -5.0);
    assert_relative_eq!(Vector2::new(3.0, 4.0).length(), 5.0);

    assert_eq!(v1.min(&v2), Vector2::new(1.0, -5.0));
    assert_eq!(v1.max(&v2), Vector2::new(4.0, 2.0));
}

#[test]
fn test_rotation_quarter_turn() {
    let r = Rotation::from_angle(PI / 2.0);
    let rotated = r.rotate(Vector2::new(1.0, 0.0));

    assert_relative_eq!(rotated, Vector2::new(0.0, 1.0), epsilon = 1e-6);
    assert_relative_eq!(r.angle(), PI / 2.0, epsilon = 1e-6);

    let axis = r.x_axis();
    assert_relative_eq!(axis.x, r.cos);
    assert_relative_eq!(axis.y, r.sin);
}

#[test]
fn test_transform_point() {
    let t = Transform::from_position_angle(Vector2::new(10.0, -2.0), PI);
    let p = t.transform_point(Vector2::new(1.0, 1.0));

    assert_relative_eq!(p.x, 9.0, epsilon = 1e-5);
    assert_relative_eq!(p.y, -3.0, epsilon = 1e-5);

    // Directions ignore translation
    let d = t.transform_direction(Vector2::new(1.0, 0.0));
    assert_relative_eq!(d.x, -1.0, epsilon = 1e-6);
    assert_relative_eq!(d.y, 0.0, epsilon = 1e-6);
}

#[test]
fn test_transform_matches_nalgebra_isometry() {
    let t = Transform::from_position_angle(Vector2::new(3.0, 4.0), 0.7);
    let iso = t.to_nalgebra();

    let local = Vector2::new(-1.5, 2.25);
    let ours = t.transform_point(local);
    let theirs = iso * local.to_point();

    assert_relative_eq!(ours.x, theirs.x, epsilon = 1e-5);
    assert_relative_eq!(ours.y, theirs.y, epsilon = 1e-5);

    let back = Transform::from_nalgebra(&iso);
    assert_relative_eq!(back.rotation.angle(), 0.7, epsilon = 1e-6);
    assert_eq!(back.position, t.position);
}

#[test]
fn test_aabb_operations() {
    let points = vec![
        Vector2::new(1.0, 3.0),
        Vector2::new(-2.0, 0.5),
        Vector2::new(4.0, -1.0),
    ];
    let aabb = Aabb::from_points(points).unwrap();

    assert_eq!(aabb.min, Vector2::new(-2.0, -1.0));
    assert_eq!(aabb.max, Vector2::new(4.0, 3.0));
    assert_eq!(aabb.center(), Vector2::new(1.0, 1.0));
    assert_eq!(aabb.extents(), Vector2::new(6.0, 4.0));
    assert!(aabb.contains_point(Vector2::new(0.0, 0.0)));
    assert!(!aabb.contains_point(Vector2::new(5.0, 0.0)));

    assert!(Aabb::from_points(Vec::<Vector2>::new()).is_none());
}

#[test]
fn test_aabb_corners_are_counter_clockwise() {
    let aabb = Aabb::new(Vector2::new(0.0, 0.0), Vector2::new(2.0, 1.0));
    let c = aabb.corners();

    assert_eq!(c[0], Vector2::new(0.0, 0.0));
    assert_eq!(c[1], Vector2::new(2.0, 0.0));
    assert_eq!(c[2], Vector2::new(2.0, 1.0));
    assert_eq!(c[3], Vector2::new(0.0, 1.0));

    // Positive signed area means counter-clockwise
    let mut area = 0.0;
    for i in 0..4 {
        let a = c[i];
        let b = c[(i + 1) % 4];
        area += a.x * b.y - b.x * a.y;
    }
    assert!(area > 0.0);
}
