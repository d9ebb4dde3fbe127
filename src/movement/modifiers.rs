//! Movement domain: timed modifier windows evaluated against the frame clock.
//!
//! A window never fires anything on its own. Each frame asks whether
//! `now - started_at < duration` and derives multipliers from that.

use crate::movement::MovementTuning;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModifierWindow {
    pub started_at_ms: f64,
    pub duration_ms: f64,
}

impl ModifierWindow {
    pub fn open(now_ms: f64, duration_ms: f32) -> Self {
        Self {
            started_at_ms: now_ms,
            duration_ms: f64::from(duration_ms),
        }
    }

    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.started_at_ms
    }

    pub fn is_active(&self, now_ms: f64) -> bool {
        self.elapsed_ms(now_ms) < self.duration_ms
    }

    /// Rises linearly from `min_mul` at opening to 1.0 at expiry.
    pub fn ramp(&self, now_ms: f64, min_mul: f32) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let progress = (self.elapsed_ms(now_ms) / self.duration_ms).clamp(0.0, 1.0) as f32;
        min_mul + (1.0 - min_mul) * progress
    }
}

/// Extra downward push after a downward impulse in the air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DownRamp {
    pub window: ModifierWindow,
    pub accel: f32,
}

/// Every timed modifier the controller can have open at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModifierStack {
    pub space_overshoot: Option<ModifierWindow>,
    pub x_overshoot: Option<ModifierWindow>,
    pub down_ramp: Option<DownRamp>,
    pub up_glide: Option<ModifierWindow>,
    pub jet_glide: Option<ModifierWindow>,
    pub fall_ease: Option<ModifierWindow>,
    pub halt: Option<ModifierWindow>,
}

fn active(window: &Option<ModifierWindow>, now_ms: f64) -> Option<&ModifierWindow> {
    window.as_ref().filter(|w| w.is_active(now_ms))
}

impl ModifierStack {
    pub fn halted(&self, now_ms: f64) -> bool {
        active(&self.halt, now_ms).is_some()
    }

    pub fn space_overshoot_active(&self, now_ms: f64) -> bool {
        active(&self.space_overshoot, now_ms).is_some()
    }

    pub fn x_cap_factor(&self, now_ms: f64, tuning: &MovementTuning) -> f32 {
        let open =
            self.space_overshoot_active(now_ms) || active(&self.x_overshoot, now_ms).is_some();
        if open {
            tuning.x_overshoot_factor()
        } else {
            1.0
        }
    }

    pub fn y_cap_factor(&self, now_ms: f64, tuning: &MovementTuning) -> f32 {
        if self.space_overshoot_active(now_ms) {
            tuning.y_overshoot_factor()
        } else {
            1.0
        }
    }

    pub fn down_ramp_accel(&self, now_ms: f64) -> Option<f32> {
        self.down_ramp
            .filter(|ramp| ramp.window.is_active(now_ms))
            .map(|ramp| ramp.accel)
    }

    /// Up-glide applies while still rising, jet-glide while not diving.
    /// The stronger (smaller) of the two wins.
    pub fn glide_multiplier(
        &self,
        now_ms: f64,
        vy: f32,
        fast_fall: bool,
        tuning: &MovementTuning,
    ) -> f32 {
        let mut mul: f32 = 1.0;
        if vy < 0.0 {
            if let Some(window) = active(&self.up_glide, now_ms) {
                mul = mul.min(window.ramp(now_ms, tuning.sprint.up_glide_min_mul));
            }
        }
        if !fast_fall {
            if let Some(window) = active(&self.jet_glide, now_ms) {
                mul = mul.min(window.ramp(now_ms, tuning.jet_glide.min_mul));
            }
        }
        mul
    }

    pub fn fall_ease_multiplier(&self, now_ms: f64, vy: f32, tuning: &MovementTuning) -> f32 {
        if vy <= 0.0 {
            return 1.0;
        }
        active(&self.fall_ease, now_ms)
            .map(|window| window.ramp(now_ms, tuning.sprint.fall_ease_min_mul))
            .unwrap_or(1.0)
    }

    /// Names of the windows open at `now_ms`, for diagnostics.
    pub fn active_names(&self, now_ms: f64) -> Vec<&'static str> {
        let windows = [
            ("space_overshoot", self.space_overshoot),
            ("x_overshoot", self.x_overshoot),
            ("down_ramp", self.down_ramp.map(|ramp| ramp.window)),
            ("up_glide", self.up_glide),
            ("jet_glide", self.jet_glide),
            ("fall_ease", self.fall_ease),
            ("halt", self.halt),
        ];
        windows
            .into_iter()
            .filter(|(_, window)| window.is_some_and(|w| w.is_active(now_ms)))
            .map(|(name, _)| name)
            .collect()
    }
}
