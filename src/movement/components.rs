//! Movement domain: player marker and kinematic state.

use bevy::prelude::*;

use crate::movement::{MovementTuning, Stamina};
use crate::world::Aabb;

#[derive(Component, Debug)]
pub struct Player;

/// Kinematic state of the orb. Position is the center, in y-down world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Diameter; the hitbox is a square of this side.
    pub size: f32,
    pub grounded: bool,
    pub stamina: Stamina,
}

impl PlayerState {
    pub fn spawn(tuning: &MovementTuning) -> Self {
        Self {
            position: tuning.spawn_position(),
            velocity: Vec2::ZERO,
            size: tuning.player_size,
            grounded: false,
            stamina: Stamina::full(tuning.stamina_max),
        }
    }

    /// Back to the spawn point at rest with a full tank. Size is kept.
    pub fn respawn(&mut self, tuning: &MovementTuning) {
        self.position = tuning.spawn_position();
        self.velocity = Vec2::ZERO;
        self.grounded = false;
        self.stamina.refill();
    }

    pub fn half_size(&self) -> f32 {
        self.size / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        let half = self.half_size();
        Aabb::from_center(self.position, half, half)
    }
}
