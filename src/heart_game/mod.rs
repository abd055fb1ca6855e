//! Heart mini-game — drifting hearts spawn from the right edge; catch
//! enough and the result screen opens.
//!
//! The mini-game keeps its own counter seeded from the shared progress and
//! only writes back once, when the goal is reached.

mod spawner;

use bevy::prelude::*;

use crate::boot::{GameAssets, HEART_GAME_BACKGROUND};
use crate::player::{spawn_player, Arena};
use crate::shared::*;
use crate::ui::{request_scene_change, PendingScene, ScreenFade};

pub use spawner::{DriftingHeart, HeartLifetime, HeartSpawnTimer};

pub struct HeartGamePlugin;

impl Plugin for HeartGamePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(GameScene::HeartGame),
            (enter_heart_game, spawn_heart_game_scene).chain(),
        );
        app.add_systems(
            Update,
            (
                spawner::tick_spawn_timer,
                spawner::drift_hearts,
                spawner::expire_hearts,
                collect_drifting_hearts,
                update_counters,
            )
                .run_if(in_state(GameScene::HeartGame)),
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// RESOURCES & MARKERS
// ═══════════════════════════════════════════════════════════════════════

/// The mini-game session: local counter, goal, and the end latch.
#[derive(Resource, Debug, Clone, Copy)]
pub struct MiniGame {
    pub count: u32,
    pub goal: u32,
    pub ended: bool,
}

impl MiniGame {
    /// Counter starts at the hearts carried in; the goal sits a fixed
    /// distance above it.
    pub fn starting_from(hearts_collected: u32) -> Self {
        Self {
            count: hearts_collected,
            goal: hearts_collected + HEART_GOAL_DELTA,
            ended: false,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.goal.saturating_sub(self.count)
    }
}

#[derive(Component)]
struct CounterText;

#[derive(Component)]
struct GoalText;

// ═══════════════════════════════════════════════════════════════════════
// SETUP
// ═══════════════════════════════════════════════════════════════════════

fn enter_heart_game(mut commands: Commands, progress: Res<GameProgress>) {
    let minigame = MiniGame::starting_from(progress.hearts_collected);
    info!(
        "[HeartGame] Session start — count {}, goal {}",
        minigame.count, minigame.goal
    );
    commands.insert_resource(minigame);
    commands.insert_resource(Arena::heart_game());
    commands.insert_resource(HeartSpawnTimer::default());
}

fn spawn_heart_game_scene(
    mut commands: Commands,
    assets: Res<GameAssets>,
    arena: Res<Arena>,
    minigame: Res<MiniGame>,
) {
    commands.spawn((
        StateScoped(GameScene::HeartGame),
        Sprite {
            image: assets.background(HEART_GAME_BACKGROUND),
            custom_size: Some(Vec2::new(GAME_WIDTH, GAME_HEIGHT)),
            ..default()
        },
        Transform::from_xyz(GAME_WIDTH / 2.0, GAME_HEIGHT / 2.0, -20.0),
    ));

    spawn_player(
        &mut commands,
        &assets,
        &arena,
        GameScene::HeartGame,
        HEART_GAME_START_X,
    );

    commands.spawn((
        CounterText,
        StateScoped(GameScene::HeartGame),
        Text::new(format!("Corazones: {}", minigame.count)),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::srgb(0.97, 0.98, 0.99)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(28.0),
            left: Val::Px(34.0),
            ..default()
        },
        PickingBehavior::IGNORE,
    ));

    commands.spawn((
        GoalText,
        StateScoped(GameScene::HeartGame),
        Text::new(format!(
            "Meta: {}  |  Faltan: {}",
            minigame.goal,
            minigame.remaining()
        )),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::srgb(0.97, 0.98, 0.99)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(28.0),
            right: Val::Px(34.0),
            ..default()
        },
        PickingBehavior::IGNORE,
    ));
}

// ═══════════════════════════════════════════════════════════════════════
// COLLECTION & GOAL
// ═══════════════════════════════════════════════════════════════════════

const CATCH_RANGE: f32 = 48.0;

/// Catch overlapping hearts; on reaching the goal, latch, write the shared
/// progress once, and fade into the result screen.
pub fn collect_drifting_hearts(
    mut commands: Commands,
    mut minigame: ResMut<MiniGame>,
    mut progress: ResMut<GameProgress>,
    mut fade: ResMut<ScreenFade>,
    mut pending: ResMut<PendingScene>,
    player_query: Query<&Transform, With<Player>>,
    heart_query: Query<(Entity, &Transform), With<DriftingHeart>>,
) {
    if minigame.ended {
        return;
    }
    let Ok(player_tf) = player_query.get_single() else {
        return;
    };

    for (entity, heart_tf) in &heart_query {
        let delta = heart_tf.translation.truncate() - player_tf.translation.truncate();
        if delta.x.abs() <= CATCH_RANGE && delta.y.abs() <= CATCH_RANGE {
            commands.entity(entity).despawn_recursive();
            minigame.count += 1;

            if minigame.count >= minigame.goal {
                minigame.ended = true;
                let snapshot = progress.write(ProgressUpdate {
                    score: Some(minigame.count),
                    hearts_collected: Some(minigame.count),
                });
                info!(
                    "[HeartGame] Goal reached — hearts {}, tier {:?}",
                    snapshot.hearts_collected, snapshot.reward_tier
                );
                request_scene_change(&mut fade, &mut pending, GameScene::Result);
                return;
            }
        }
    }
}

fn update_counters(
    minigame: Res<MiniGame>,
    mut counter_query: Query<&mut Text, (With<CounterText>, Without<GoalText>)>,
    mut goal_query: Query<&mut Text, (With<GoalText>, Without<CounterText>)>,
) {
    if !minigame.is_changed() {
        return;
    }
    if let Ok(mut text) = counter_query.get_single_mut() {
        text.0 = format!("Corazones: {}", minigame.count);
    }
    if let Ok(mut text) = goal_query.get_single_mut() {
        text.0 = format!("Meta: {}  |  Faltan: {}", minigame.goal, minigame.remaining());
    }
}
