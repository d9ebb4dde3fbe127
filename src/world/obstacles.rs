//! World domain: obstacle geometry and the placed-obstacle list.
//!
//! World space is y-down: `top < bottom` for every box.

use bevy::prelude::*;

/// Default placement grid in world units.
pub const GRID_SIZE: f32 = 100.0;

/// Axis-aligned box in y-down world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Aabb {
    pub fn from_center(center: Vec2, half_width: f32, half_height: f32) -> Self {
        Self {
            left: center.x - half_width,
            right: center.x + half_width,
            top: center.y - half_height,
            bottom: center.y + half_height,
        }
    }

    /// Strict overlap; touching edges do not count.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.right > other.left
            && self.left < other.right
            && self.bottom > other.top
            && self.top < other.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObstacleKind {
    /// Thin horizontal line the player can land on.
    Platform { length: f32 },
    /// Platform variant that can be hidden; hidden ones never collide.
    BluePlatform { length: f32, visible: bool },
    /// Square that resets the player on contact.
    Hazard { size: f32 },
    /// Kind the editor produced but the core does not know. Never collides.
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub center: Vec2,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn platform(x: f32, y: f32, length: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            kind: ObstacleKind::Platform { length },
        }
    }

    pub fn blue_platform(x: f32, y: f32, length: f32, visible: bool) -> Self {
        Self {
            center: Vec2::new(x, y),
            kind: ObstacleKind::BluePlatform { length, visible },
        }
    }

    pub fn hazard(x: f32, y: f32, size: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            kind: ObstacleKind::Hazard { size },
        }
    }

    /// Collision box, or `None` for kinds that never collide.
    pub fn bounds(&self, platform_thickness: f32) -> Option<Aabb> {
        match self.kind {
            ObstacleKind::Platform { length }
            | ObstacleKind::BluePlatform {
                length,
                visible: true,
            } => Some(Aabb::from_center(
                self.center,
                length / 2.0,
                platform_thickness / 2.0,
            )),
            ObstacleKind::Hazard { size } => {
                Some(Aabb::from_center(self.center, size / 2.0, size / 2.0))
            }
            ObstacleKind::BluePlatform { visible: false, .. } | ObstacleKind::Unrecognized => None,
        }
    }
}

/// Append-only obstacle list supplied by the level editor.
#[derive(Resource, Debug, Clone)]
pub struct LevelObstacles {
    obstacles: Vec<Obstacle>,
    grid_size: f32,
}

impl Default for LevelObstacles {
    fn default() -> Self {
        Self::default_level()
    }
}

impl LevelObstacles {
    pub fn from_obstacles(obstacles: Vec<Obstacle>, grid_size: f32) -> Self {
        Self {
            obstacles,
            grid_size,
        }
    }

    /// Starter layout: a long floor, a blue ledge, a high ledge and one hazard.
    pub fn default_level() -> Self {
        Self::from_obstacles(
            vec![
                Obstacle::platform(200.0, 520.0, 1000.0),
                Obstacle::blue_platform(700.0, 420.0, 300.0, true),
                Obstacle::platform(1100.0, 300.0, 600.0),
                Obstacle::hazard(900.0, 540.0, GRID_SIZE),
            ],
            GRID_SIZE,
        )
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn grid_size(&self) -> f32 {
        self.grid_size
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Place a platform centered on the grid point nearest to `at`.
    pub fn place_platform(&mut self, at: Vec2, length: f32, blue: bool) -> Obstacle {
        let center = self.snap_to_point(at);
        let obstacle = if blue {
            Obstacle::blue_platform(center.x, center.y, length, true)
        } else {
            Obstacle::platform(center.x, center.y, length)
        };
        self.push(obstacle);
        obstacle
    }

    /// Place a grid-sized hazard, optionally centered in the grid cell containing `at`.
    pub fn place_hazard(&mut self, at: Vec2, snap_to_cell: bool) -> Obstacle {
        let center = if snap_to_cell {
            self.snap_to_cell_center(at)
        } else {
            at
        };
        let obstacle = Obstacle::hazard(center.x, center.y, self.grid_size);
        self.push(obstacle);
        obstacle
    }

    /// Grow or shrink a platform length by whole grid steps, never below one step.
    pub fn adjust_length(&self, current: f32, steps: i32) -> f32 {
        (current + steps as f32 * self.grid_size).max(self.grid_size)
    }

    fn snap_to_point(&self, at: Vec2) -> Vec2 {
        let gs = self.grid_size;
        Vec2::new((at.x / gs).round() * gs, (at.y / gs).round() * gs)
    }

    fn snap_to_cell_center(&self, at: Vec2) -> Vec2 {
        let gs = self.grid_size;
        Vec2::new(
            (at.x / gs).floor() * gs + gs / 2.0,
            (at.y / gs).floor() * gs + gs / 2.0,
        )
    }
}
