use car_physics::{AABB, CollisionOracle, ObstacleSet};
use glam::Vec3;

fn unit_cube_at(min: Vec3) -> AABB {
    AABB::new(min, min + Vec3::splat(2.0))
}

#[test]
fn test_new_orders_corners() {
    let aabb = AABB::new(Vec3::new(2.0, -1.0, 3.0), Vec3::new(-2.0, 1.0, 0.0));
    assert_eq!(aabb.min, Vec3::new(-2.0, -1.0, 0.0));
    assert_eq!(aabb.max, Vec3::new(2.0, 1.0, 3.0));
}

#[test]
fn test_from_center_dims() {
    let aabb = AABB::from_center_dims(Vec3::new(0.0, 1.0, -10.0), Vec3::splat(2.0));
    assert_eq!(aabb.min, Vec3::new(-1.0, 0.0, -11.0));
    assert_eq!(aabb.max, Vec3::new(1.0, 2.0, -9.0));
    assert_eq!(aabb.center(), Vec3::new(0.0, 1.0, -10.0));
}

#[test]
fn test_overlapping_boxes_intersect() {
    let a = unit_cube_at(Vec3::ZERO);
    let b = unit_cube_at(Vec3::ONE);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn test_disjoint_boxes_do_not_intersect() {
    let a = unit_cube_at(Vec3::ZERO);
    let b = unit_cube_at(Vec3::splat(3.0));
    assert!(!a.intersects(&b));
    assert!(!b.intersects(&a));
}

#[test]
fn test_touching_faces_intersect() {
    let a = unit_cube_at(Vec3::ZERO);
    let b = AABB::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(4.0, 2.0, 2.0));
    assert!(a.intersects(&b), "Shared face counts as an intersection");
}

#[test]
fn test_separated_on_single_axis() {
    let a = unit_cube_at(Vec3::ZERO);
    let b = a.translate(Vec3::new(0.0, 0.0, 2.5));
    assert!(!a.intersects(&b), "Overlap on x and y alone is not enough");
}

#[test]
fn test_empty_obstacles_never_collide() {
    let candidate = unit_cube_at(Vec3::ZERO);
    assert!(!ObstacleSet::new().intersects(&candidate));
    let none: &[AABB] = &[];
    assert!(!none.intersects(&candidate));
}

#[test]
fn test_any_obstacle_overlap_reports_collision() {
    let obstacles = vec![unit_cube_at(Vec3::splat(10.0)), unit_cube_at(Vec3::ONE)];
    assert!(obstacles.intersects(&unit_cube_at(Vec3::ZERO)));
    assert!(!obstacles.intersects(&unit_cube_at(Vec3::splat(-5.0))));
}

#[test]
fn test_obstacle_set_push_and_remove() {
    let mut obstacles = ObstacleSet::from_boxes(
        [Vec3::new(0.0, 1.0, -10.0), Vec3::new(10.0, 1.0, 0.0)],
        Vec3::splat(2.0),
    );
    assert_eq!(obstacles.len(), 2);

    let query = AABB::from_center_dims(Vec3::new(10.0, 1.0, 0.0), Vec3::ONE);
    assert!(obstacles.intersects(&query));

    let removed = obstacles.remove(1).expect("second obstacle exists");
    assert_eq!(removed.center(), Vec3::new(10.0, 1.0, 0.0));
    assert!(!obstacles.intersects(&query));
    assert_eq!(obstacles.remove(5), None);

    let index = obstacles.push(removed);
    assert_eq!(index, 1);
    assert_eq!(obstacles.get(1), Some(&removed));
    assert!(obstacles.intersects(&query));
}
