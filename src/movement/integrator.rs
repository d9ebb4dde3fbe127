//! Movement domain: per-frame velocity integration.

use crate::movement::{Intent, MovementTuning};

/// Vertical acceleration source for one frame, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalMode {
    Thrust,
    FastFall,
    Normal,
}

impl VerticalMode {
    pub fn select(thrusting: bool, fast_fall: bool) -> Self {
        if thrusting {
            VerticalMode::Thrust
        } else if fast_fall {
            VerticalMode::FastFall
        } else {
            VerticalMode::Normal
        }
    }
}

/// Gravity multipliers from the modifier stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityScale {
    pub fall_ease: f32,
    pub glide: f32,
}

impl Default for GravityScale {
    fn default() -> Self {
        Self {
            fall_ease: 1.0,
            glide: 1.0,
        }
    }
}

/// Inputs shared by both axes for one frame.
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    pub intent: &'a Intent,
    pub boost: bool,
    pub tuning: &'a MovementTuning,
    pub dt: f32,
}

/// -1, 0 or 1. Unlike `f32::signum`, zero maps to zero.
fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Clamp that never panics on an inverted range.
fn clamp_to(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

pub fn step_horizontal(ctx: &StepContext, vx: f32, grounded: bool, cap_factor: f32) -> f32 {
    let StepContext {
        intent,
        boost,
        tuning,
        dt,
    } = *ctx;

    let mut ax = if intent.left && !intent.right {
        -tuning.accel_x
    } else if intent.right && !intent.left {
        tuning.accel_x
    } else {
        let friction = if grounded {
            tuning.friction
        } else {
            tuning.friction_air
        };
        -sign(vx) * friction
    };

    if boost {
        ax *= tuning.boost.accel_mul;
    }
    if intent.diagonal() {
        ax *= tuning.boost.diag_speed_mul;
    }
    if boost && intent.diagonal() && intent.up {
        ax *= tuning.boost.up_diag_horiz_bias;
    }

    let mut next = vx + ax * dt;

    if !intent.left && !intent.right {
        let crossed_zero = sign(next) != sign(next - ax * dt);
        if crossed_zero && next.abs() < tuning.stop_threshold {
            next = 0.0;
        }
    }

    let cap = tuning.max_speed_x * cap_factor;
    clamp_to(next, -cap, cap)
}

/// Extra downward push from an open down-ramp. Grounded bodies ignore it.
pub fn apply_down_ramp(vy: f32, accel: Option<f32>, grounded: bool, dt: f32) -> f32 {
    match accel {
        Some(accel) if !grounded => vy + accel * dt,
        _ => vy,
    }
}

pub fn step_vertical(
    ctx: &StepContext,
    vy: f32,
    mode: VerticalMode,
    scale: GravityScale,
    cap_factor: f32,
) -> f32 {
    let StepContext {
        intent,
        boost,
        tuning,
        dt,
    } = *ctx;
    let boost_gravity = if boost { tuning.boost.gravity_mul } else { 1.0 };

    let next = match mode {
        VerticalMode::Thrust => {
            let mut jet_mul = if boost { tuning.boost.jet_mul } else { 1.0 };
            if boost && intent.diagonal() && intent.up {
                jet_mul *= tuning.boost.up_diag_vertical_bias;
            }
            vy + tuning.jetpack_thrust * dt * jet_mul
        }
        VerticalMode::FastFall => {
            let mut g_mul = boost_gravity * scale.fall_ease;
            if intent.diagonal() && intent.down {
                g_mul *= tuning.boost.diag_speed_mul;
            }
            vy + tuning.gravity_fast * dt * g_mul * scale.glide
        }
        VerticalMode::Normal => {
            let g_mul = boost_gravity * scale.fall_ease;
            vy + tuning.gravity * dt * g_mul * scale.glide
        }
    };

    // The down cap follows the held key, even on a thrust frame.
    let down_cap = if intent.down {
        tuning.max_down_speed_fast
    } else {
        tuning.max_down_speed
    };
    clamp_to(
        next,
        tuning.max_up_speed * cap_factor,
        down_cap * cap_factor,
    )
}
