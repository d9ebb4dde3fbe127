//! Movement domain: the one-shot sprint impulse.

use bevy::prelude::*;

use crate::movement::{
    DownRamp, Intent, ModifierStack, ModifierWindow, MovementTuning, PlayerState,
};

/// Override velocity along the intent and open the impulse windows.
///
/// Returns false, touching nothing, when there is no direction or the player
/// is airborne on an empty tank without asking to go down.
pub fn apply_sprint_impulse(
    player: &mut PlayerState,
    windows: &mut ModifierStack,
    intent: &Intent,
    now_ms: f64,
    tuning: &MovementTuning,
) -> bool {
    if intent.is_zero() {
        return false;
    }

    let out_of_fuel_in_air = player.stamina.is_empty() && !player.grounded;
    if out_of_fuel_in_air && !intent.down {
        debug!("Sprint impulse rejected: no fuel in the air");
        return false;
    }

    let sprint = &tuning.sprint;
    if sprint.cost > 0.0 {
        player.stamina.consume_fixed(sprint.cost);
    }

    if intent.dir.x != 0.0 {
        let mut impulse = sprint.x_impulse;
        if !player.grounded {
            impulse *= if player.velocity.y > 0.0 {
                sprint.x_fall_mul
            } else {
                sprint.x_air_mul
            };
        }
        player.velocity.x = intent.dir.x * impulse;
        windows.x_overshoot = Some(ModifierWindow::open(now_ms, sprint.x_overshoot_ms));
    }

    if intent.up {
        if !player.stamina.is_empty() {
            player.velocity.y = -sprint.up_impulse;
            windows.up_glide = Some(ModifierWindow::open(now_ms, sprint.up_glide_ms));
        }
    } else if intent.down && !player.grounded {
        windows.down_ramp = Some(DownRamp {
            window: ModifierWindow::open(now_ms, sprint.down_ramp_ms),
            accel: tuning.down_ramp_accel(),
        });
    }

    windows.space_overshoot = Some(ModifierWindow::open(now_ms, tuning.overshoot_window_ms()));
    windows.fall_ease = Some(ModifierWindow::open(now_ms, sprint.fall_ease_ms));

    debug!(
        "Sprint impulse: dir=({:.2}, {:.2}) v=({:.1}, {:.1}) stamina={:.3}",
        intent.dir.x,
        intent.dir.y,
        player.velocity.x,
        player.velocity.y,
        player.stamina.current()
    );
    true
}
