mod animation;
mod camera;
mod movement;

use bevy::prelude::*;

use crate::boot::GameAssets;
use crate::shared::*;

pub use animation::{
    animate_player_frames, WalkCycle, FRAME_IDLE, FRAME_JUMP, FRAME_WALK_A, FRAME_WALK_B,
};
pub use movement::platformer_movement;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Arena>();

        app.add_systems(
            Update,
            (
                movement::platformer_movement,
                animation::animate_player_frames,
            )
                .chain()
                .run_if(in_state(GameScene::Walk).or(in_state(GameScene::HeartGame))),
        );
        app.add_systems(
            Update,
            camera::camera_follow_player
                .after(movement::platformer_movement)
                .run_if(in_state(GameScene::Walk)),
        );

        // Fixed camera everywhere else.
        app.add_systems(OnEnter(GameScene::Boot), camera::reset_camera);
        app.add_systems(OnEnter(GameScene::HeartGame), camera::reset_camera);
        app.add_systems(OnEnter(GameScene::Result), camera::reset_camera);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ARENA — per-scene physics bounds
// ═══════════════════════════════════════════════════════════════════════

/// The active scene's playfield: horizontal extent, ground plane height,
/// and jump strength. Each playable scene overwrites this on entry.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Arena {
    pub world_width: f32,
    pub ground_y: f32,
    pub jump_speed: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            ground_y: WALK_GROUND_Y,
            jump_speed: PLAYER_JUMP_SPEED,
        }
    }
}

impl Arena {
    pub fn walk() -> Self {
        Self::default()
    }

    pub fn heart_game() -> Self {
        Self {
            world_width: GAME_WIDTH,
            ground_y: HEART_GAME_GROUND_Y,
            jump_speed: PLAYER_JUMP_SPEED + HEART_GAME_JUMP_BONUS,
        }
    }

    /// World y of the player's center when standing.
    pub fn standing_y(&self) -> f32 {
        self.ground_y + PLAYER_HALF_H
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SPAWNING
// ═══════════════════════════════════════════════════════════════════════

/// Spawn the player sprite at `x`, standing on the arena's ground plane,
/// scoped to `scene`.
pub fn spawn_player(
    commands: &mut Commands,
    assets: &GameAssets,
    arena: &Arena,
    scene: GameScene,
    x: f32,
) -> Entity {
    commands
        .spawn((
            Player,
            StateScoped(scene),
            Sprite {
                image: assets.player.clone(),
                texture_atlas: Some(TextureAtlas {
                    layout: assets.player_layout.clone(),
                    index: animation::FRAME_IDLE,
                }),
                custom_size: Some(Vec2::splat(96.0)),
                ..default()
            },
            Transform::from_xyz(x, arena.standing_y(), 10.0),
            Velocity(Vec2::ZERO),
            Grounded(true),
            animation::WalkCycle::default(),
        ))
        .id()
}
