//! Sanity checks for loaded tuning and level data.
//!
//! Nothing here is fatal. Issues are logged and the simulation clamps or
//! ignores the offending values at runtime.

use crate::movement::MovementTuning;
use crate::world::{Obstacle, ObstacleKind};

/// A suspicious content value with context about where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub source: &'static str,
    pub field: String,
    pub value: f32,
    pub problem: &'static str,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} field '{}' = {}: {}",
            self.source, self.field, self.value, self.problem
        )
    }
}

/// Helper macro for checking a tuning value against a predicate
macro_rules! check_value {
    ($issues:expr, $field:expr, $value:expr, $ok:expr, $problem:expr) => {
        let value: f32 = $value;
        if !($ok)(value) {
            $issues.push(ValidationIssue {
                source: "MovementTuning",
                field: $field.to_string(),
                value,
                problem: $problem,
            });
        }
    };
}

fn positive(v: f32) -> bool {
    v > 0.0
}

fn unit_interval(v: f32) -> bool {
    (0.0..=1.0).contains(&v)
}

/// Validate tuning values. Returns an empty list when everything looks sane.
pub fn validate_tuning(tuning: &MovementTuning) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_value!(issues, "stamina_max", tuning.stamina_max, positive, "must be positive");
    check_value!(issues, "player_size", tuning.player_size, positive, "must be positive");
    check_value!(issues, "max_speed_x", tuning.max_speed_x, positive, "must be positive");
    check_value!(
        issues,
        "max_down_speed",
        tuning.max_down_speed,
        positive,
        "must be positive"
    );
    check_value!(
        issues,
        "max_down_speed_fast",
        tuning.max_down_speed_fast,
        positive,
        "must be positive"
    );
    check_value!(
        issues,
        "max_up_speed",
        tuning.max_up_speed,
        |v: f32| v < 0.0,
        "must be negative (y-down)"
    );
    check_value!(
        issues,
        "max_frame_step",
        tuning.max_frame_step,
        positive,
        "must be positive or the simulation never advances"
    );
    check_value!(
        issues,
        "sprint.down_ramp_ms",
        tuning.sprint.down_ramp_ms,
        positive,
        "non-positive ramp is floored to 1ms"
    );
    check_value!(
        issues,
        "sprint.up_glide_min_mul",
        tuning.sprint.up_glide_min_mul,
        unit_interval,
        "glide floor should be within 0..=1"
    );
    check_value!(
        issues,
        "sprint.fall_ease_min_mul",
        tuning.sprint.fall_ease_min_mul,
        unit_interval,
        "ease floor should be within 0..=1"
    );
    check_value!(
        issues,
        "jet_glide.min_mul",
        tuning.jet_glide.min_mul,
        unit_interval,
        "glide floor should be within 0..=1"
    );
    check_value!(
        issues,
        "halt.cost_frac",
        tuning.halt.cost_frac,
        unit_interval,
        "halt cost is a fraction of max stamina"
    );
    check_value!(
        issues,
        "shrink_factor",
        tuning.shrink_factor,
        positive,
        "must be positive"
    );

    issues
}

/// Validate placed obstacles. Unrecognized kinds are reported, not rejected.
pub fn validate_level(obstacles: &[Obstacle]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (index, obstacle) in obstacles.iter().enumerate() {
        let label = |name: &str| format!("[{}].{}", index, name);

        if !obstacle.center.is_finite() {
            issues.push(ValidationIssue {
                source: "Level",
                field: label("center"),
                value: f32::NAN,
                problem: "non-finite position",
            });
        }
        if obstacle.kind == ObstacleKind::Unrecognized {
            issues.push(ValidationIssue {
                source: "Level",
                field: label("kind"),
                value: 0.0,
                problem: "unrecognized kind is ignored by collisions",
            });
        }
    }

    issues
}
