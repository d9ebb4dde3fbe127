//! Data definitions for RON content files.
//!
//! These structs mirror assets/data/*.ron. Tuning deserializes straight into
//! `MovementTuning`; level files go through `ObstacleDef`.

use serde::{Deserialize, Serialize};

use crate::world::{Obstacle, ObstacleKind};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Level (level.ron)
// ============================================================================

/// Obstacle kinds as the editor writes them. Anything else is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ObstacleKindDef {
    Line,
    BluePlatform,
    Killbrick,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObstacleDef {
    pub kind: ObstacleKindDef,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub length: Option<f32>,
    #[serde(default)]
    pub size: Option<f32>,
    #[serde(default)]
    pub visible: Option<bool>,
}

impl ObstacleDef {
    /// Missing or non-positive extents fall back to one grid step.
    pub fn to_obstacle(&self, grid_size: f32) -> Obstacle {
        let extent = |value: Option<f32>| value.filter(|v| *v > 0.0).unwrap_or(grid_size);

        let kind = match self.kind {
            ObstacleKindDef::Line => ObstacleKind::Platform {
                length: extent(self.length),
            },
            ObstacleKindDef::BluePlatform => ObstacleKind::BluePlatform {
                length: extent(self.length),
                visible: self.visible.unwrap_or(true),
            },
            ObstacleKindDef::Killbrick => ObstacleKind::Hazard {
                size: extent(self.size),
            },
            ObstacleKindDef::Unknown => ObstacleKind::Unrecognized,
        };

        Obstacle {
            center: bevy::math::Vec2::new(self.x, self.y),
            kind,
        }
    }
}
