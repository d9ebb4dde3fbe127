//! World domain: obstacles the player collides with.

mod obstacles;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use obstacles::{Aabb, GRID_SIZE, LevelObstacles, Obstacle, ObstacleKind};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelObstacles>();
    }
}
