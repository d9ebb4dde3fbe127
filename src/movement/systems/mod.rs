//! Movement domain: system modules for the player frame loop.

pub(crate) mod input;
pub(crate) mod step;

pub(crate) use input::read_input;
pub(crate) use step::{publish_player, spawn_player, step_player};
