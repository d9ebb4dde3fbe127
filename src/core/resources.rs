//! Core domain: shared resources for the frame loop and camera.

use bevy::prelude::*;

/// Marker for the camera that tracks the player.
#[derive(Component, Debug)]
pub struct FollowCamera;

#[derive(Resource, Debug, Clone)]
pub struct CameraSettings {
    /// Fraction of the remaining distance covered each frame.
    pub follow_lerp: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self { follow_lerp: 0.14 }
    }
}
