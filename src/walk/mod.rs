//! Walk scene — the side-scrolling stroll across the camp: four background
//! segments, ten pickup hearts, narrative message triggers, and the finish
//! zone that hands over to the heart mini-game.

mod finish;
mod hearts;
mod messages;

use bevy::prelude::*;

use crate::boot::{GameAssets, WALK_BACKGROUNDS};
use crate::data::MessageScript;
use crate::player::{spawn_player, Arena};
use crate::shared::*;

pub use finish::{check_finish, FinishZone};
pub use hearts::{collect_walk_hearts, WalkHeart};
pub use messages::scan_message_triggers;

pub struct WalkPlugin;

impl Plugin for WalkPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(GameScene::Walk),
            (enter_walk_scene, spawn_walk_scene).chain(),
        );
        app.add_systems(
            Update,
            (
                hearts::collect_walk_hearts,
                messages::scan_message_triggers,
                finish::check_finish,
            )
                .run_if(in_state(GameScene::Walk)),
        );
    }
}

/// Fresh-session state: arena bounds and one-shot message flags.
fn enter_walk_scene(mut commands: Commands, mut script: ResMut<MessageScript>) {
    commands.insert_resource(Arena::walk());
    script.reset();
    info!("[Walk] Session start; message triggers reset");
}

fn spawn_walk_scene(
    mut commands: Commands,
    assets: Res<GameAssets>,
    arena: Res<Arena>,
    walk_start: Res<WalkStart>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    // Background segments, left to right.
    for (index, key) in WALK_BACKGROUNDS.into_iter().enumerate() {
        let x = index as f32 * ZONE_WIDTH + ZONE_WIDTH / 2.0;
        commands.spawn((
            StateScoped(GameScene::Walk),
            Sprite {
                image: assets.background(key),
                custom_size: Some(Vec2::new(ZONE_WIDTH, GAME_HEIGHT)),
                ..default()
            },
            Transform::from_xyz(x, GAME_HEIGHT / 2.0, -20.0),
        ));
    }

    spawn_player(
        &mut commands,
        &assets,
        &arena,
        GameScene::Walk,
        walk_start.x,
    );

    hearts::spawn_walk_hearts(&mut commands, &assets, &arena);
    finish::spawn_finish_zone(&mut commands, &arena);

    // Snap the camera onto the start position; the follow system takes it
    // from here.
    if let Ok(mut cam_tf) = camera_query.get_single_mut() {
        let min_x = GAME_WIDTH / 2.0;
        let max_x = arena.world_width - GAME_WIDTH / 2.0;
        cam_tf.translation.x = walk_start.x.clamp(min_x, max_x);
        cam_tf.translation.y = GAME_HEIGHT / 2.0;
    }

    info!("[Walk] Player starts at x={}", walk_start.x);
}
