//! Movement domain: jetpack orb kinematics, timed modifiers and collisions.

mod collisions;
mod components;
mod controller;
mod impulse;
mod integrator;
mod intent;
mod modifiers;
mod resources;
mod stamina;
mod systems;


use bevy::prelude::*;

pub use collisions::{CollisionOutcome, resolve_collisions};
pub use components::{Player, PlayerState};
pub use controller::{FrameOutcome, MovementController};
pub use impulse::apply_sprint_impulse;
pub use integrator::{
    GravityScale, StepContext, VerticalMode, apply_down_ramp, step_horizontal, step_vertical,
};
pub use intent::{ControlKey, EdgeEvent, HeldKeys, InputEvent, InputTracker, Intent};
pub use modifiers::{DownRamp, ModifierStack, ModifierWindow};
pub use resources::{KeyBindings, MovementTuning, PlayerSnapshot};
pub use stamina::Stamina;

/// Ordering of the player frame within `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSet {
    Input,
    Step,
    Publish,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<KeyBindings>()
            .init_resource::<PlayerSnapshot>()
            .configure_sets(
                Update,
                (MovementSet::Input, MovementSet::Step, MovementSet::Publish).chain(),
            )
            .add_systems(Startup, systems::spawn_player)
            .add_systems(Update, systems::read_input.in_set(MovementSet::Input))
            .add_systems(Update, systems::step_player.in_set(MovementSet::Step))
            .add_systems(Update, systems::publish_player.in_set(MovementSet::Publish));
    }
}
