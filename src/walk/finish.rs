//! End-of-level detection and hand-off to the heart mini-game.

use bevy::prelude::*;

use crate::player::Arena;
use crate::shared::*;
use crate::ui::{request_scene_change, PendingScene, ScreenFade};

/// The overlap rectangle at the end of the level. Half-extents in the
/// component; the direct x-threshold check below backs it up.
#[derive(Component, Debug, Clone, Copy)]
pub struct FinishZone {
    pub half_extents: Vec2,
}

pub fn spawn_finish_zone(commands: &mut Commands, arena: &Arena) {
    commands.spawn((
        FinishZone {
            half_extents: Vec2::new(FINISH_ZONE_HALF_W, FINISH_ZONE_HALF_H),
        },
        StateScoped(GameScene::Walk),
        Transform::from_xyz(FINISH_ZONE_X, arena.ground_y + 70.0, 0.0),
    ));
}

/// Two redundant guards fire the same transition: the finish-zone overlap
/// and a direct x threshold slightly before it. Either one starting the
/// fade latches via [`PendingScene`], so the transition runs exactly once.
pub fn check_finish(
    mut fade: ResMut<ScreenFade>,
    mut pending: ResMut<PendingScene>,
    mut player_query: Query<(&Transform, &mut Velocity), With<Player>>,
    zone_query: Query<(&Transform, &FinishZone), Without<Player>>,
) {
    let Ok((player_tf, mut velocity)) = player_query.get_single_mut() else {
        return;
    };
    let player_pos = player_tf.translation.truncate();

    let mut finished = player_pos.x >= FINISH_FALLBACK_X;

    if !finished {
        for (zone_tf, zone) in &zone_query {
            let delta = (player_pos - zone_tf.translation.truncate()).abs();
            if delta.x <= zone.half_extents.x && delta.y <= zone.half_extents.y {
                finished = true;
                break;
            }
        }
    }

    if finished && pending.0.is_none() {
        velocity.0 = Vec2::ZERO;
        request_scene_change(&mut fade, &mut pending, GameScene::HeartGame);
    }
}
