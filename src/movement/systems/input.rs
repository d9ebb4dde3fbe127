//! Movement domain: keyboard sampling into controller events.

use bevy::prelude::*;

use crate::movement::{InputEvent, KeyBindings, MovementController, Player};

/// Turn this frame's key transitions into an ordered event list.
///
/// Releases that happened before a press go first, so a same-frame
/// release+press re-arms a latch before firing it. A key tapped and let go
/// within the frame is pressed and then released, so it never stays held.
pub(crate) fn sample_keyboard(
    keyboard: &ButtonInput<KeyCode>,
    bindings: &KeyBindings,
) -> Vec<InputEvent> {
    let mut events = Vec::new();
    let tapped = |code: KeyCode| {
        keyboard.just_pressed(code) && keyboard.just_released(code) && !keyboard.pressed(code)
    };

    for &(code, key) in &bindings.controls {
        if keyboard.just_released(code) && !tapped(code) {
            events.push(InputEvent::released(key));
        }
    }
    for &(code, key) in &bindings.controls {
        if keyboard.just_pressed(code) {
            events.push(InputEvent::pressed(key));
        }
    }
    for &(code, key) in &bindings.controls {
        if tapped(code) {
            events.push(InputEvent::released(key));
        }
    }

    events
}

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut query: Query<&mut MovementController, With<Player>>,
) {
    let events = sample_keyboard(&keyboard, &bindings);

    for mut controller in &mut query {
        for event in &events {
            controller.queue_event(*event);
        }

        if keyboard.just_pressed(bindings.reset) {
            controller.reset();
        }
        if keyboard.just_pressed(bindings.shrink) {
            controller.toggle_shrink();
        }
    }
}
