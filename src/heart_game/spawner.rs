//! Spawning and lifetime of the drifting hearts.

use bevy::prelude::*;
use rand::Rng;

use crate::boot::GameAssets;
use crate::shared::*;

use super::MiniGame;

/// A heart drifting leftwards across the screen.
#[derive(Component, Debug, Clone, Copy)]
pub struct DriftingHeart {
    pub velocity: Vec2,
}

/// Hearts that drift off uncaught get reclaimed after this timer.
#[derive(Component, Debug)]
pub struct HeartLifetime(pub Timer);

impl Default for HeartLifetime {
    fn default() -> Self {
        Self(Timer::from_seconds(HEART_LIFETIME_SECS, TimerMode::Once))
    }
}

#[derive(Resource, Debug)]
pub struct HeartSpawnTimer(pub Timer);

impl Default for HeartSpawnTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(
            HEART_SPAWN_INTERVAL_SECS,
            TimerMode::Repeating,
        ))
    }
}

/// Spawn a new heart each interval, capped at a screen budget. Stops
/// entirely once the session has ended.
pub fn tick_spawn_timer(
    mut commands: Commands,
    time: Res<Time>,
    minigame: Res<MiniGame>,
    mut spawn_timer: ResMut<HeartSpawnTimer>,
    assets: Res<GameAssets>,
    active_query: Query<(), With<DriftingHeart>>,
) {
    if minigame.ended {
        return;
    }
    if !spawn_timer.0.tick(time.delta()).just_finished() {
        return;
    }
    if active_query.iter().count() >= HEART_MAX_ON_SCREEN {
        return;
    }

    let mut rng = rand::thread_rng();
    let x = GAME_WIDTH + rng.gen_range(20.0..120.0);
    let y = HEART_GAME_GROUND_Y + rng.gen_range(40.0..(GAME_HEIGHT - 160.0));
    let velocity = Vec2::new(-rng.gen_range(90.0..145.0), rng.gen_range(-12.0..12.0));

    commands.spawn((
        DriftingHeart { velocity },
        HeartLifetime::default(),
        StateScoped(GameScene::HeartGame),
        Sprite::from_image(assets.heart.clone()),
        Transform::from_xyz(x, y, 7.0).with_scale(Vec3::splat(1.4)),
    ));
}

pub fn drift_hearts(time: Res<Time>, mut query: Query<(&DriftingHeart, &mut Transform)>) {
    for (heart, mut transform) in &mut query {
        transform.translation.x += heart.velocity.x * time.delta_secs();
        transform.translation.y += heart.velocity.y * time.delta_secs();
    }
}

/// Reclaim hearts past their lifetime. Collection may have despawned the
/// entity this frame already, so the command fetch stays fallible.
pub fn expire_hearts(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut HeartLifetime)>,
) {
    for (entity, mut lifetime) in &mut query {
        if lifetime.0.tick(time.delta()).just_finished() {
            if let Some(mut entity_commands) = commands.get_entity(entity) {
                entity_commands.despawn_recursive();
            }
        }
    }
}
