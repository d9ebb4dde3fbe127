//! Movement domain: player-vs-world collision resolution.

use crate::movement::PlayerState;
use crate::world::{Aabb, Obstacle, ObstacleKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    Clear,
    /// A hazard was touched; the caller owns the respawn.
    HazardHit,
}

/// Resolve the player against every obstacle in list order.
///
/// Clears `grounded` first; only a landing in this pass sets it again.
/// Stops at the first hazard hit.
pub fn resolve_collisions(
    player: &mut PlayerState,
    obstacles: &[Obstacle],
    platform_thickness: f32,
) -> CollisionOutcome {
    player.grounded = false;

    for obstacle in obstacles {
        let Some(bounds) = obstacle.bounds(platform_thickness) else {
            continue;
        };

        match obstacle.kind {
            ObstacleKind::Platform { .. } | ObstacleKind::BluePlatform { .. } => {
                resolve_platform(player, &bounds);
            }
            ObstacleKind::Hazard { .. } => {
                if player.bounds().overlaps(&bounds) {
                    return CollisionOutcome::HazardHit;
                }
            }
            ObstacleKind::Unrecognized => {}
        }
    }

    CollisionOutcome::Clear
}

fn resolve_platform(player: &mut PlayerState, platform: &Aabb) {
    let body = player.bounds();
    if !body.overlaps(platform) {
        return;
    }

    let half = player.half_size();
    let vy = player.velocity.y;
    let straddles = body.top < platform.bottom && body.bottom > platform.top;

    if vy >= 0.0 && straddles {
        player.position.y = platform.top - half;
        player.velocity.y = 0.0;
        player.grounded = true;
    } else if vy < 0.0 && straddles {
        player.position.y = platform.bottom + half;
        player.velocity.y = 0.0;
    } else {
        // Shallow graze: shortest push-out, velocity untouched.
        let pen_top = platform.bottom - body.top;
        let pen_bottom = body.bottom - platform.top;
        if pen_top < pen_bottom {
            player.position.y += pen_top;
        } else {
            player.position.y -= pen_bottom;
        }
    }
}
