//! Developer hotkeys for inspecting the player and editing the level.
//!
//! - F3: log the player snapshot as JSON
//! - F4: log the modifier windows open right now
//! - F5 / F6: drop a platform / hazard at the player, snapped to the grid
//! - `[` / `]`: shorten / lengthen the next placed platform by one grid step

use bevy::prelude::*;

use crate::movement::{MovementController, Player, PlayerSnapshot};
use crate::world::LevelObstacles;

/// Length used for the next platform placed with F5.
#[derive(Resource, Debug)]
pub struct PlacementState {
    pub platform_length: f32,
}

impl Default for PlacementState {
    fn default() -> Self {
        Self {
            platform_length: 300.0,
        }
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlacementState>().add_systems(
            Update,
            (log_snapshot, log_windows, adjust_platform_length, place_obstacles).chain(),
        );
    }
}

fn log_snapshot(keyboard: Res<ButtonInput<KeyCode>>, snapshot: Res<PlayerSnapshot>) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    match serde_json::to_string(&*snapshot) {
        Ok(json) => info!("Player: {}", json),
        Err(e) => warn!("Failed to serialize player snapshot: {}", e),
    }
}

fn log_windows(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    query: Query<&MovementController, With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F4) {
        return;
    }

    let now_ms = time.elapsed_secs_f64() * 1000.0;
    for controller in &query {
        let names = controller.windows().active_names(now_ms);
        if names.is_empty() {
            info!("No modifier windows open");
        } else {
            info!("Open windows: {}", names.join(", "));
        }
    }
}

fn adjust_platform_length(
    keyboard: Res<ButtonInput<KeyCode>>,
    level: Res<LevelObstacles>,
    mut placement: ResMut<PlacementState>,
) {
    let steps = match (
        keyboard.just_pressed(KeyCode::BracketLeft),
        keyboard.just_pressed(KeyCode::BracketRight),
    ) {
        (true, false) => -1,
        (false, true) => 1,
        _ => return,
    };

    placement.platform_length = level.adjust_length(placement.platform_length, steps);
    info!("Platform length: {}", placement.platform_length);
}

fn place_obstacles(
    keyboard: Res<ButtonInput<KeyCode>>,
    snapshot: Res<PlayerSnapshot>,
    placement: Res<PlacementState>,
    mut level: ResMut<LevelObstacles>,
) {
    let at = Vec2::new(snapshot.x, snapshot.y);

    if keyboard.just_pressed(KeyCode::F5) {
        let blue = keyboard.pressed(KeyCode::ControlLeft);
        let obstacle = level.place_platform(at, placement.platform_length, blue);
        info!("Placed platform at ({}, {})", obstacle.center.x, obstacle.center.y);
    }

    if keyboard.just_pressed(KeyCode::F6) {
        let obstacle = level.place_hazard(at, true);
        info!("Placed hazard at ({}, {})", obstacle.center.x, obstacle.center.y);
    }
}
