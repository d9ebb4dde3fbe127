//! Core domain: camera setup and follow.

use bevy::prelude::*;

use crate::core::{CameraSettings, FollowCamera};
use crate::movement::{MovementTuning, PlayerSnapshot};

/// Spawn the camera already looking at the spawn point.
pub(crate) fn setup_camera(mut commands: Commands, tuning: Res<MovementTuning>) {
    let target = follow_target(tuning.spawn_position(), tuning.player_size);
    commands.spawn((
        Camera2d,
        FollowCamera,
        Transform::from_xyz(target.x, target.y, 0.0),
    ));
}

/// Linear follow toward the top of the player's hitbox.
pub(crate) fn follow_player(
    snapshot: Res<PlayerSnapshot>,
    settings: Res<CameraSettings>,
    mut cameras: Query<&mut Transform, With<FollowCamera>>,
) {
    let target = follow_target(Vec2::new(snapshot.x, snapshot.y), snapshot.size);

    for mut transform in &mut cameras {
        let current = transform.translation.truncate();
        let next = current.lerp(target, settings.follow_lerp);
        transform.translation.x = next.x;
        transform.translation.y = next.y;
    }
}

/// World space is y-down; render space flips y.
pub(crate) fn follow_target(position: Vec2, size: f32) -> Vec2 {
    Vec2::new(position.x, -(position.y - size / 2.0))
}
