//! Core domain: frame timing and camera follow.

mod clock;
mod resources;
mod systems;


use bevy::prelude::*;

pub use clock::{FrameClock, FrameTime, MAX_FRAME_STEP};
#[cfg(test)]
pub use clock::ManualTime;
pub use resources::{CameraSettings, FollowCamera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameClock>()
            .init_resource::<CameraSettings>()
            .add_systems(Startup, systems::setup_camera)
            .add_systems(PostUpdate, systems::follow_player);
    }
}
