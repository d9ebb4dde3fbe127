//! World domain: tests for obstacle bounds and grid placement.

use bevy::prelude::Vec2;

use super::{Aabb, GRID_SIZE, LevelObstacles, Obstacle, ObstacleKind};

// -----------------------------------------------------------------------------
// Bounds
// -----------------------------------------------------------------------------

#[test]
fn test_touching_boxes_do_not_overlap() {
    let a = Aabb::from_center(Vec2::new(0.0, 0.0), 10.0, 10.0);
    let b = Aabb::from_center(Vec2::new(20.0, 0.0), 10.0, 10.0);
    assert!(!a.overlaps(&b));

    let c = Aabb::from_center(Vec2::new(19.0, 0.0), 10.0, 10.0);
    assert!(a.overlaps(&c));
    assert!(c.overlaps(&a));
}

#[test]
fn test_platform_bounds_use_thickness() {
    let platform = Obstacle::platform(200.0, 520.0, 1000.0);
    let bounds = platform.bounds(12.0).unwrap();

    assert_eq!(bounds.left, -300.0);
    assert_eq!(bounds.right, 700.0);
    assert_eq!(bounds.top, 514.0);
    assert_eq!(bounds.bottom, 526.0);
}

#[test]
fn test_hazard_bounds_are_square() {
    let hazard = Obstacle::hazard(900.0, 540.0, 100.0);
    let bounds = hazard.bounds(12.0).unwrap();

    assert_eq!(bounds.right - bounds.left, 100.0);
    assert_eq!(bounds.bottom - bounds.top, 100.0);
}

#[test]
fn test_hidden_and_unrecognized_obstacles_have_no_bounds() {
    let hidden = Obstacle::blue_platform(0.0, 0.0, 300.0, false);
    assert!(hidden.bounds(12.0).is_none());

    let shown = Obstacle::blue_platform(0.0, 0.0, 300.0, true);
    assert!(shown.bounds(12.0).is_some());

    let unknown = Obstacle {
        center: Vec2::ZERO,
        kind: ObstacleKind::Unrecognized,
    };
    assert!(unknown.bounds(12.0).is_none());
}

// -----------------------------------------------------------------------------
// Placement
// -----------------------------------------------------------------------------

#[test]
fn test_default_level_layout() {
    let level = LevelObstacles::default_level();
    assert_eq!(level.len(), 4);
    assert_eq!(level.grid_size(), GRID_SIZE);
    assert!(matches!(
        level.obstacles()[3].kind,
        ObstacleKind::Hazard { size } if size == GRID_SIZE
    ));
}

#[test]
fn test_platform_snaps_to_nearest_grid_point() {
    let mut level = LevelObstacles::from_obstacles(Vec::new(), 100.0);
    let placed = level.place_platform(Vec2::new(149.0, 351.0), 300.0, false);

    assert_eq!(placed.center, Vec2::new(100.0, 400.0));
    assert_eq!(placed.kind, ObstacleKind::Platform { length: 300.0 });
    assert_eq!(level.len(), 1);
}

#[test]
fn test_blue_platform_placement_is_visible() {
    let mut level = LevelObstacles::from_obstacles(Vec::new(), 100.0);
    let placed = level.place_platform(Vec2::new(0.0, 0.0), 100.0, true);

    assert_eq!(
        placed.kind,
        ObstacleKind::BluePlatform {
            length: 100.0,
            visible: true
        }
    );
}

#[test]
fn test_hazard_snaps_to_cell_center() {
    let mut level = LevelObstacles::from_obstacles(Vec::new(), 100.0);

    let snapped = level.place_hazard(Vec2::new(149.0, -20.0), true);
    assert_eq!(snapped.center, Vec2::new(150.0, -50.0));

    let free = level.place_hazard(Vec2::new(149.0, -20.0), false);
    assert_eq!(free.center, Vec2::new(149.0, -20.0));
    assert_eq!(level.len(), 2);
}

#[test]
fn test_adjust_length_never_drops_below_one_step() {
    let level = LevelObstacles::from_obstacles(Vec::new(), 100.0);
    assert_eq!(level.adjust_length(100.0, 2), 300.0);
    assert_eq!(level.adjust_length(300.0, -1), 200.0);
    assert_eq!(level.adjust_length(100.0, -5), 100.0);
}
