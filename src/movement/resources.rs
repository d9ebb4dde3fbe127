//! Movement domain: tuning, key bindings and the published player snapshot.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::ControlKey;

/// Smallest ramp duration used as a divisor, in seconds.
pub const RAMP_EPSILON_SECS: f32 = 0.001;

/// Physics constants. World space is y-down, so upward values are negative.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub gravity: f32,
    /// Gravity while diving (down held).
    pub gravity_fast: f32,
    pub jetpack_thrust: f32,
    pub max_up_speed: f32,
    pub max_down_speed: f32,
    pub max_down_speed_fast: f32,
    pub max_speed_x: f32,
    pub accel_x: f32,
    pub friction: f32,
    pub friction_air: f32,
    /// Below this speed a sign flip from friction snaps vx to zero.
    pub stop_threshold: f32,
    /// Seconds of continuous up-hold that still produce thrust.
    pub max_jet_hold: f32,
    pub player_size: f32,
    pub start_x: f32,
    pub start_y: f32,
    pub stamina_max: f32,
    pub stamina_consume_rate: f32,
    pub stamina_regen_rate: f32,
    pub platform_thickness: f32,
    pub shrink_factor: f32,
    pub max_frame_step: f32,
    pub boost: BoostTuning,
    pub sprint: SprintTuning,
    pub halt: HaltTuning,
    pub jet_glide: GlideTuning,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            gravity: 950.0,
            gravity_fast: 2000.0,
            jetpack_thrust: -1600.0,
            max_up_speed: -480.0,
            max_down_speed: 240.0,
            max_down_speed_fast: 1100.0,
            max_speed_x: 350.0,
            accel_x: 2400.0,
            friction: 900.0,
            friction_air: 220.0,
            stop_threshold: 20.0,
            max_jet_hold: 0.25,
            player_size: 40.0,
            start_x: 200.0,
            start_y: 200.0,
            stamina_max: 3.0,
            stamina_consume_rate: 1.0 / 0.9,
            stamina_regen_rate: 3.0,
            platform_thickness: 12.0,
            shrink_factor: 0.7,
            max_frame_step: crate::core::MAX_FRAME_STEP,
            boost: BoostTuning::default(),
            sprint: SprintTuning::default(),
            halt: HaltTuning::default(),
            jet_glide: GlideTuning::default(),
        }
    }
}

impl MovementTuning {
    pub fn spawn_position(&self) -> Vec2 {
        Vec2::new(self.start_x, self.start_y)
    }

    /// Flat stamina price of one halt.
    pub fn halt_cost(&self) -> f32 {
        self.stamina_max * self.halt.cost_frac
    }

    /// Length of the space-overshoot window opened by boost or an impulse.
    pub fn overshoot_window_ms(&self) -> f32 {
        self.boost.window_ms.max(self.sprint.overshoot_ms)
    }

    /// Horizontal cap multiplier while any overshoot window is open.
    pub fn x_overshoot_factor(&self) -> f32 {
        self.boost
            .overshoot
            .max(self.sprint.overshoot)
            .max(self.sprint.x_overshoot)
    }

    /// Vertical cap multiplier while the space-overshoot window is open.
    pub fn y_overshoot_factor(&self) -> f32 {
        self.boost.overshoot.max(self.sprint.overshoot)
    }

    /// Extra downward acceleration of the down-ramp, in units/s².
    pub fn down_ramp_accel(&self) -> f32 {
        let ramp_secs = (self.sprint.down_ramp_ms / 1000.0).max(RAMP_EPSILON_SECS);
        self.sprint.down_ramp_add / ramp_secs
    }
}

/// Multipliers applied while the boost key is held.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BoostTuning {
    pub accel_mul: f32,
    pub jet_mul: f32,
    pub gravity_mul: f32,
    pub diag_speed_mul: f32,
    pub up_diag_vertical_bias: f32,
    pub up_diag_horiz_bias: f32,
    pub overshoot: f32,
    pub window_ms: f32,
}

impl Default for BoostTuning {
    fn default() -> Self {
        Self {
            accel_mul: 1.5,
            jet_mul: 1.5,
            gravity_mul: 1.0,
            diag_speed_mul: 1.08,
            up_diag_vertical_bias: 1.20,
            up_diag_horiz_bias: 0.92,
            overshoot: 1.03,
            window_ms: 120.0,
        }
    }
}

/// Sprint impulse and the windows it opens.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SprintTuning {
    pub x_impulse: f32,
    pub x_air_mul: f32,
    pub x_fall_mul: f32,
    pub x_overshoot: f32,
    pub x_overshoot_ms: f32,
    pub down_ramp_ms: f32,
    pub down_ramp_add: f32,
    pub up_glide_ms: f32,
    pub up_glide_min_mul: f32,
    pub up_impulse: f32,
    pub cost: f32,
    pub overshoot: f32,
    pub overshoot_ms: f32,
    pub fall_ease_ms: f32,
    pub fall_ease_min_mul: f32,
}

impl Default for SprintTuning {
    fn default() -> Self {
        Self {
            x_impulse: 820.0,
            x_air_mul: 1.15,
            x_fall_mul: 1.35,
            x_overshoot: 1.15,
            x_overshoot_ms: 220.0,
            down_ramp_ms: 180.0,
            down_ramp_add: 360.0,
            up_glide_ms: 520.0,
            up_glide_min_mul: 0.38,
            up_impulse: 900.0,
            cost: 0.12,
            overshoot: 1.06,
            overshoot_ms: 160.0,
            fall_ease_ms: 360.0,
            fall_ease_min_mul: 0.45,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HaltTuning {
    /// Fraction of max stamina spent per halt.
    pub cost_frac: f32,
    pub duration_ms: f32,
}

impl Default for HaltTuning {
    fn default() -> Self {
        Self {
            cost_frac: 1.0 / 17.0,
            duration_ms: 50.0,
        }
    }
}

/// Gravity softening after the jetpack cuts out.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GlideTuning {
    pub duration_ms: f32,
    pub min_mul: f32,
}

impl Default for GlideTuning {
    fn default() -> Self {
        Self {
            duration_ms: 750.0,
            min_mul: 0.22,
        }
    }
}

/// Physical keys mapped onto control keys and one-shot commands.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub controls: Vec<(KeyCode, ControlKey)>,
    pub reset: KeyCode,
    pub shrink: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            controls: vec![
                (KeyCode::KeyW, ControlKey::Up),
                (KeyCode::KeyS, ControlKey::Down),
                (KeyCode::KeyA, ControlKey::Left),
                (KeyCode::KeyD, ControlKey::Right),
                (KeyCode::Space, ControlKey::Boost),
                (KeyCode::ShiftLeft, ControlKey::Halt),
                (KeyCode::ShiftRight, ControlKey::Halt),
            ],
            reset: KeyCode::KeyR,
            shrink: KeyCode::KeyE,
        }
    }
}

/// Read-only view of the player published once per frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub grounded: bool,
    pub stamina_fraction: f32,
    /// Last non-zero direction asked for.
    pub dir_x: f32,
    pub dir_y: f32,
}
