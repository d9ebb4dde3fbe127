//! Content domain: tests for RON parsing and validation.

use bevy::prelude::Vec2;

use super::loader::{parse_level, parse_tuning};
use super::validation::{validate_level, validate_tuning};
use crate::movement::MovementTuning;
use crate::world::{GRID_SIZE, Obstacle, ObstacleKind};

// -----------------------------------------------------------------------------
// Tuning
// -----------------------------------------------------------------------------

#[test]
fn test_partial_tuning_keeps_defaults() {
    let tuning = parse_tuning(
        "inline",
        "(gravity: 1200.0, sprint: (up_impulse: 700.0))",
    )
    .unwrap();

    let defaults = MovementTuning::default();
    assert_eq!(tuning.gravity, 1200.0);
    assert_eq!(tuning.sprint.up_impulse, 700.0);
    assert_eq!(tuning.sprint.x_impulse, defaults.sprint.x_impulse);
    assert_eq!(tuning.max_speed_x, defaults.max_speed_x);
}

#[test]
fn test_malformed_tuning_reports_file() {
    let err = parse_tuning("tuning.ron", "(gravity: \"heavy\")").unwrap_err();
    assert_eq!(err.file, "tuning.ron");
    assert!(err.to_string().starts_with("Failed to load tuning.ron"));
}

#[test]
fn test_shipped_tuning_matches_defaults() {
    let contents = include_str!("../../assets/data/movement_tuning.ron");
    let tuning = parse_tuning("movement_tuning.ron", contents).unwrap();
    let defaults = MovementTuning::default();

    assert_eq!(tuning.gravity, defaults.gravity);
    assert_eq!(tuning.sprint, defaults.sprint);
    assert_eq!(tuning.boost, defaults.boost);
    assert!((tuning.halt_cost() - defaults.halt_cost()).abs() < 1e-6);
}

#[test]
fn test_default_tuning_is_clean() {
    assert!(validate_tuning(&MovementTuning::default()).is_empty());
}

#[test]
fn test_bad_tuning_values_are_reported() {
    let mut tuning = MovementTuning::default();
    tuning.sprint.down_ramp_ms = 0.0;
    tuning.max_up_speed = 480.0;
    tuning.jet_glide.min_mul = 1.5;

    let issues = validate_tuning(&tuning);
    let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
    assert_eq!(issues.len(), 3);
    assert!(fields.contains(&"sprint.down_ramp_ms"));
    assert!(fields.contains(&"max_up_speed"));
    assert!(fields.contains(&"jet_glide.min_mul"));
}

#[test]
fn test_zero_ramp_duration_is_floored() {
    let mut tuning = MovementTuning::default();
    tuning.sprint.down_ramp_ms = 0.0;

    let accel = tuning.down_ramp_accel();
    assert!(accel.is_finite());
    assert_eq!(accel, tuning.sprint.down_ramp_add / 0.001);
}

// -----------------------------------------------------------------------------
// Level
// -----------------------------------------------------------------------------

#[test]
fn test_level_parses_in_order() {
    let contents = include_str!("../../assets/data/level.ron");
    let obstacles = parse_level("level.ron", contents, GRID_SIZE).unwrap();

    assert_eq!(obstacles.len(), 4);
    assert_eq!(obstacles[0], Obstacle::platform(200.0, 520.0, 1000.0));
    assert_eq!(
        obstacles[1],
        Obstacle::blue_platform(700.0, 420.0, 300.0, true)
    );
    assert_eq!(obstacles[3], Obstacle::hazard(900.0, 540.0, 100.0));
}

#[test]
fn test_unknown_kind_becomes_unrecognized() {
    let contents = r#"(
        schema_version: 1,
        items: [
            (kind: Trampoline, x: 10.0, y: 20.0),
            (kind: Line, x: 0.0, y: 0.0),
        ],
    )"#;
    let obstacles = parse_level("inline", contents, GRID_SIZE).unwrap();

    assert_eq!(obstacles[0].kind, ObstacleKind::Unrecognized);
    assert_eq!(obstacles[0].center, Vec2::new(10.0, 20.0));

    let issues = validate_level(&obstacles);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field, "[0].kind");
}

#[test]
fn test_missing_extents_default_to_grid() {
    let contents = r#"(
        schema_version: 1,
        items: [
            (kind: Line, x: 0.0, y: 0.0),
            (kind: Killbrick, x: 0.0, y: 0.0, size: 0.0),
            (kind: BluePlatform, x: 0.0, y: 0.0, length: 200.0, visible: false),
        ],
    )"#;
    let obstacles = parse_level("inline", contents, 100.0).unwrap();

    assert_eq!(obstacles[0].kind, ObstacleKind::Platform { length: 100.0 });
    assert_eq!(obstacles[1].kind, ObstacleKind::Hazard { size: 100.0 });
    assert_eq!(
        obstacles[2].kind,
        ObstacleKind::BluePlatform {
            length: 200.0,
            visible: false
        }
    );
}
