use bevy::prelude::*;
use crate::shared::*;
use super::Arena;

/// Smoothly follow the player with the camera using a lerp, clamped to the
/// level bounds so the viewport never shows past either edge.
pub fn camera_follow_player(
    time: Res<Time>,
    arena: Res<Arena>,
    player_query: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera_query: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(player_tf) = player_query.get_single() else {
        return;
    };
    let Ok(mut cam_tf) = camera_query.get_single_mut() else {
        return;
    };

    let lerp_speed = 5.0;
    let t = (lerp_speed * time.delta_secs()).min(1.0);
    let target_x = player_tf.translation.x;
    let smooth_x = cam_tf.translation.x + (target_x - cam_tf.translation.x) * t;

    let min_x = GAME_WIDTH / 2.0;
    let max_x = (arena.world_width - GAME_WIDTH / 2.0).max(min_x);
    cam_tf.translation.x = smooth_x.clamp(min_x, max_x);
    cam_tf.translation.y = GAME_HEIGHT / 2.0;
}

/// Park the camera at screen center for single-screen scenes.
pub fn reset_camera(mut camera_query: Query<&mut Transform, With<Camera2d>>) {
    for mut cam_tf in &mut camera_query {
        cam_tf.translation.x = GAME_WIDTH / 2.0;
        cam_tf.translation.y = GAME_HEIGHT / 2.0;
    }
}
