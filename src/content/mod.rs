//! Content domain: RON-backed tuning and level data.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use std::path::Path;

use crate::core::FrameClock;
use crate::movement::MovementTuning;
use crate::world::{GRID_SIZE, LevelObstacles};

use loader::{load_level, load_tuning};
use validation::{validate_level, validate_tuning};

const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

/// Load tuning and level from disk, falling back to built-in defaults.
fn load_content(mut commands: Commands) {
    let base = Path::new(DATA_DIR);

    let tuning = match load_tuning(&base.join("movement_tuning.ron")) {
        Ok(tuning) => tuning,
        Err(e) => {
            warn!("{}; using default movement tuning", e);
            MovementTuning::default()
        }
    };
    for issue in validate_tuning(&tuning) {
        warn!("Tuning: {}", issue);
    }

    let level = match load_level(&base.join("level.ron"), GRID_SIZE) {
        Ok(obstacles) => LevelObstacles::from_obstacles(obstacles, GRID_SIZE),
        Err(e) => {
            warn!("{}; using default level", e);
            LevelObstacles::default_level()
        }
    };
    for issue in validate_level(level.obstacles()) {
        warn!("Level: {}", issue);
    }
    if level.is_empty() {
        warn!("Level has no obstacles");
    }

    let clock = FrameClock::new(tuning.max_frame_step);
    info!(
        "Content loaded: {} obstacles (grid {}), gravity={}, stamina_max={}, max_step={}s",
        level.len(),
        level.grid_size(),
        tuning.gravity,
        tuning.stamina_max,
        clock.max_step()
    );

    commands.insert_resource(clock);
    commands.insert_resource(tuning);
    commands.insert_resource(level);
}
