//! Movement domain: frame stepping and publishing player state.

use bevy::prelude::*;

use crate::core::FrameClock;
use crate::movement::{FrameOutcome, MovementController, MovementTuning, Player, PlayerSnapshot};
use crate::world::LevelObstacles;

pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<MovementTuning>) {
    let controller = MovementController::new(tuning.clone());
    let snapshot = controller.snapshot();
    info!(
        "Spawning player at ({}, {}) with stamina {}",
        snapshot.x,
        snapshot.y,
        controller.state().stamina.max()
    );

    commands.spawn((
        Player,
        controller,
        Transform::from_xyz(snapshot.x, -snapshot.y, 0.0),
    ));
    commands.insert_resource(snapshot);
}

pub(crate) fn step_player(
    time: Res<Time>,
    mut clock: ResMut<FrameClock>,
    level: Res<LevelObstacles>,
    mut query: Query<&mut MovementController, With<Player>>,
) {
    let frame = clock.tick(&*time);

    for mut controller in &mut query {
        if controller.update(frame, level.obstacles()) == FrameOutcome::HazardReset {
            debug!("Hazard reset at t={:.0}ms", frame.now_ms);
        }
    }
}

/// Copy controller state out to the snapshot and the render transform.
pub(crate) fn publish_player(
    mut snapshot: ResMut<PlayerSnapshot>,
    mut query: Query<(&MovementController, &mut Transform), With<Player>>,
) {
    for (controller, mut transform) in &mut query {
        *snapshot = controller.snapshot();
        // World space is y-down.
        transform.translation.x = snapshot.x;
        transform.translation.y = -snapshot.y;
    }
}
