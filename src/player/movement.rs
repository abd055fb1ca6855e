use bevy::prelude::*;
use crate::shared::*;
use super::Arena;

/// Horizontal half-extent of the player's collision box.
const PLAYER_HALF_W: f32 = 14.0;

/// Core movement system — applies the merged control state, integrates
/// gravity, clamps to the arena bounds, and resolves the ground plane.
///
/// Runs in both the walk scene and the heart mini-game; only the [`Arena`]
/// resource differs between them.
pub fn platformer_movement(
    time: Res<Time>,
    control: Res<ControlState>,
    arena: Res<Arena>,
    mut query: Query<(&mut Transform, &mut Velocity, &mut Grounded, &mut Sprite), With<Player>>,
) {
    let Ok((mut transform, mut velocity, mut grounded, mut sprite)) = query.get_single_mut()
    else {
        return;
    };

    let dt = time.delta_secs();

    if control.left {
        velocity.0.x = -PLAYER_SPEED;
        sprite.flip_x = true;
    } else if control.right {
        velocity.0.x = PLAYER_SPEED;
        sprite.flip_x = false;
    } else {
        velocity.0.x = 0.0;
    }

    if control.action && grounded.0 {
        velocity.0.y = arena.jump_speed;
        grounded.0 = false;
    }

    velocity.0.y -= GRAVITY * dt;

    transform.translation.x += velocity.0.x * dt;
    transform.translation.y += velocity.0.y * dt;

    // World-bounds clamp, equivalent of collideWorldBounds.
    transform.translation.x = transform
        .translation
        .x
        .clamp(PLAYER_HALF_W, arena.world_width - PLAYER_HALF_W);

    // Ground plane.
    let floor = arena.standing_y();
    if transform.translation.y <= floor {
        transform.translation.y = floor;
        velocity.0.y = 0.0;
        grounded.0 = true;
    } else {
        grounded.0 = false;
    }
}
