//! The ten pickup hearts scattered along the walk level.

use bevy::prelude::*;
use rand::Rng;

use crate::boot::GameAssets;
use crate::player::Arena;
use crate::shared::*;

/// Marker for a walk-level pickup heart.
#[derive(Component, Debug, Clone, Copy)]
pub struct WalkHeart;

/// Pickup radius, generous to match an arcade-physics overlap.
const PICKUP_RANGE: f32 = 44.0;

/// Fixed x layout along the level; heights and bob rhythm are jittered.
const HEART_XS: [f32; 10] = [
    520.0, 820.0, 1140.0, 1480.0, 1760.0, 2080.0, 2380.0, 2650.0, 2930.0, 3210.0,
];

pub fn spawn_walk_hearts(commands: &mut Commands, assets: &GameAssets, arena: &Arena) {
    let mut rng = rand::thread_rng();
    for (index, x) in HEART_XS.into_iter().enumerate() {
        let y = arena.ground_y + rng.gen_range(42.0..120.0);
        commands.spawn((
            WalkHeart,
            StateScoped(GameScene::Walk),
            Sprite::from_image(assets.heart.clone()),
            Transform::from_xyz(x, y, 7.0).with_scale(Vec3::splat(1.2)),
            Bob {
                origin_y: y,
                amplitude: rng.gen_range(12.0..22.0),
                period_secs: rng.gen_range(1.8..2.6),
                phase: index as f32 * 0.45,
            },
        ));
    }
}

/// Collect hearts the player overlaps: despawn the heart and write score
/// and hearts up by one each. The HUD picks up the change itself.
pub fn collect_walk_hearts(
    mut commands: Commands,
    mut progress: ResMut<GameProgress>,
    player_query: Query<&Transform, With<Player>>,
    heart_query: Query<(Entity, &Transform), With<WalkHeart>>,
) {
    let Ok(player_tf) = player_query.get_single() else {
        return;
    };

    for (entity, heart_tf) in &heart_query {
        let delta = heart_tf.translation.truncate() - player_tf.translation.truncate();
        if delta.x.abs() <= PICKUP_RANGE && delta.y.abs() <= PICKUP_RANGE {
            commands.entity(entity).despawn_recursive();
            let update = ProgressUpdate {
                score: Some(progress.score + 1),
                hearts_collected: Some(progress.hearts_collected + 1),
            };
            let snapshot = progress.write(update);
            info!(
                "[Walk] Heart collected — score {}, hearts {}, tier {:?}",
                snapshot.score, snapshot.hearts_collected, snapshot.reward_tier
            );
        }
    }
}
