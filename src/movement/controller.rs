//! Movement domain: the per-frame movement controller.

use bevy::prelude::*;

use crate::core::FrameTime;
use crate::movement::{
    CollisionOutcome, EdgeEvent, GravityScale, HeldKeys, InputEvent, InputTracker, ModifierStack,
    ModifierWindow, MovementTuning, PlayerSnapshot, PlayerState, StepContext, VerticalMode,
    apply_down_ramp, apply_sprint_impulse, resolve_collisions, step_horizontal, step_vertical,
};
use crate::world::Obstacle;

/// What a call to [`MovementController::update`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Halt window open; physics frozen.
    Halted,
    Moved,
    /// A hazard sent the player back to spawn.
    HazardReset,
}

/// Owns the player state, modifier windows and input edges for one player.
#[derive(Component, Debug, Clone)]
pub struct MovementController {
    tuning: MovementTuning,
    state: PlayerState,
    windows: ModifierStack,
    input: InputTracker,
    pending: Vec<InputEvent>,
    jet_hold_time: f32,
    was_thrusting: bool,
    /// Y offset applied when shrinking, undone when growing back.
    shrink_offset: Option<f32>,
}

impl MovementController {
    pub fn new(tuning: MovementTuning) -> Self {
        let state = PlayerState::spawn(&tuning);
        Self::from_state(tuning, state)
    }

    /// Start from an arbitrary state, e.g. mid-air with a drained tank.
    pub fn from_state(tuning: MovementTuning, state: PlayerState) -> Self {
        Self {
            tuning,
            state,
            windows: ModifierStack::default(),
            input: InputTracker::default(),
            pending: Vec::new(),
            jet_hold_time: 0.0,
            was_thrusting: false,
            shrink_offset: None,
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn windows(&self) -> &ModifierStack {
        &self.windows
    }

    pub fn held(&self) -> &HeldKeys {
        self.input.held()
    }

    pub fn last_move_dir(&self) -> Vec2 {
        self.input.last_move_dir()
    }

    pub fn is_shrunk(&self) -> bool {
        self.shrink_offset.is_some()
    }

    /// Buffer an input event until the start of the next update.
    pub fn queue_event(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Apply one input event right away and fire whatever edge it produces.
    pub fn handle_event(&mut self, event: InputEvent, now_ms: f64) -> Option<EdgeEvent> {
        let edge = self.input.apply(event)?;
        match edge {
            EdgeEvent::Boost => {
                self.boost_pressed(now_ms);
            }
            EdgeEvent::Sprint => {
                self.sprint_impulse(now_ms);
            }
            EdgeEvent::Halt => {
                self.halt(now_ms);
            }
        }
        Some(edge)
    }

    /// Boost key press: open the overshoot window, then try an impulse.
    pub fn boost_pressed(&mut self, now_ms: f64) -> bool {
        self.windows.space_overshoot = Some(ModifierWindow::open(
            now_ms,
            self.tuning.overshoot_window_ms(),
        ));
        self.sprint_impulse(now_ms)
    }

    pub fn sprint_impulse(&mut self, now_ms: f64) -> bool {
        let intent = self.input.intent();
        apply_sprint_impulse(
            &mut self.state,
            &mut self.windows,
            &intent,
            now_ms,
            &self.tuning,
        )
    }

    /// Full stop for a short window. Refused outright if the tank cannot pay.
    pub fn halt(&mut self, now_ms: f64) -> bool {
        let cost = self.tuning.halt_cost();
        if !self.state.stamina.try_spend(cost) {
            debug!(
                "Halt refused: stamina={:.3} cost={:.3}",
                self.state.stamina.current(),
                cost
            );
            return false;
        }

        self.state.velocity = Vec2::ZERO;
        self.windows.halt = Some(ModifierWindow::open(now_ms, self.tuning.halt.duration_ms));
        debug!("Halt: stamina now {:.3}", self.state.stamina.current());
        true
    }

    pub fn reset(&mut self) {
        self.state.respawn(&self.tuning);
        info!(
            "Player reset to spawn ({}, {})",
            self.state.position.x, self.state.position.y
        );
    }

    /// Toggle the small form. The bottom edge stays where it was.
    pub fn toggle_shrink(&mut self) -> bool {
        match self.shrink_offset.take() {
            Some(offset) => {
                self.state.position.y -= offset;
                self.state.size = self.tuning.player_size;
            }
            None => {
                let old_size = self.state.size;
                self.state.size = self.tuning.player_size * self.tuning.shrink_factor;
                let offset = (old_size - self.state.size) / 2.0;
                self.state.position.y += offset;
                self.shrink_offset = Some(offset);
            }
        }
        debug!("Shrink toggled: size={}", self.state.size);
        self.is_shrunk()
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            x: self.state.position.x,
            y: self.state.position.y,
            vx: self.state.velocity.x,
            vy: self.state.velocity.y,
            size: self.state.size,
            grounded: self.state.grounded,
            stamina_fraction: self.state.stamina.fraction(),
            dir_x: self.last_move_dir().x,
            dir_y: self.last_move_dir().y,
        }
    }

    /// Advance one frame against the given obstacles.
    pub fn update(&mut self, frame: FrameTime, obstacles: &[Obstacle]) -> FrameOutcome {
        let now = frame.now_ms;
        let dt = frame.dt;

        let mut pending = std::mem::take(&mut self.pending);
        for event in pending.drain(..) {
            self.handle_event(event, now);
        }
        self.pending = pending;

        if self.state.stamina.is_empty() {
            self.windows.up_glide = None;
        }

        if self.windows.halted(now) {
            self.state.velocity = Vec2::ZERO;
            return FrameOutcome::Halted;
        }

        let tuning = &self.tuning;
        let intent = self.input.intent();
        let boost = self.input.held().boost;

        if intent.up {
            self.jet_hold_time += dt;
        } else {
            self.jet_hold_time = 0.0;
        }
        let thrusting =
            intent.up && !self.state.stamina.is_empty() && self.jet_hold_time < tuning.max_jet_hold;
        if !thrusting && self.was_thrusting {
            self.windows.jet_glide = Some(ModifierWindow::open(now, tuning.jet_glide.duration_ms));
        }

        let ctx = StepContext {
            intent: &intent,
            boost,
            tuning,
            dt,
        };

        let x_cap = self.windows.x_cap_factor(now, tuning);
        self.state.velocity.x =
            step_horizontal(&ctx, self.state.velocity.x, self.state.grounded, x_cap);

        self.state.velocity.y = apply_down_ramp(
            self.state.velocity.y,
            self.windows.down_ramp_accel(now),
            self.state.grounded,
            dt,
        );

        let fast_fall = intent.down;
        let vy = self.state.velocity.y;
        let scale = GravityScale {
            fall_ease: self.windows.fall_ease_multiplier(now, vy, tuning),
            glide: self.windows.glide_multiplier(now, vy, fast_fall, tuning),
        };

        let mode = VerticalMode::select(thrusting, fast_fall);
        if mode == VerticalMode::Thrust {
            self.state.stamina.consume(tuning.stamina_consume_rate, dt);
        }

        let y_cap = self.windows.y_cap_factor(now, tuning);
        self.state.velocity.y = step_vertical(&ctx, vy, mode, scale, y_cap);

        self.state.position += self.state.velocity * dt;

        let outcome =
            match resolve_collisions(&mut self.state, obstacles, tuning.platform_thickness) {
                CollisionOutcome::Clear => FrameOutcome::Moved,
                CollisionOutcome::HazardHit => {
                    self.state.respawn(tuning);
                    info!("Hazard contact: player reset to spawn");
                    FrameOutcome::HazardReset
                }
            };

        if self.state.grounded && !intent.up {
            self.state.stamina.regen(tuning.stamina_regen_rate, dt);
        }

        self.was_thrusting = thrusting;
        outcome
    }
}
