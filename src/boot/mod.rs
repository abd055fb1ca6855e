//! Boot scene — queues asset loads, generates the UI textures, shows the
//! intro banner, and advances to the walk scene after a fixed delay.

pub mod assets;
pub mod textures;

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;
use crate::ui::{request_scene_change, PendingScene, ScreenFade};

pub use assets::{AssetKey, GameAssets, HEART_GAME_BACKGROUND, RESULT_BACKGROUND, WALK_BACKGROUNDS};

pub struct BootPlugin;

impl Plugin for BootPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(GameScene::Boot),
            (assets::load_game_assets, spawn_intro_banner).chain(),
        );
        app.add_systems(Update, tick_intro.run_if(in_state(GameScene::Boot)));
    }
}

/// Countdown until the intro banner gives way to the walk scene.
#[derive(Resource)]
pub struct IntroTimer(pub Timer);

fn spawn_intro_banner(mut commands: Commands, assets: Res<GameAssets>) {
    commands.insert_resource(IntroTimer(Timer::from_seconds(
        INTRO_BANNER_SECS,
        TimerMode::Once,
    )));

    // Centered panel with the title and a hint line.
    commands
        .spawn((
            StateScoped(GameScene::Boot),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            PickingBehavior::IGNORE,
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        row_gap: Val::Px(14.0),
                        padding: UiRect::axes(Val::Px(46.0), Val::Px(30.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.008, 0.024, 0.09, 0.85)),
                    PickingBehavior::IGNORE,
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new("Snoopy tiene una mision para ti"),
                        TextFont {
                            font_size: 34.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.97, 0.98, 0.99)),
                        PickingBehavior::IGNORE,
                    ));
                    panel.spawn((
                        Text::new("Camina hasta el final del campamento y atrapa corazones."),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.75, 0.86, 0.99)),
                        PickingBehavior::IGNORE,
                    ));
                });
        });

    spawn_intro_hearts(&mut commands, &assets);
}

/// Decorative bobbing hearts around the banner.
fn spawn_intro_hearts(commands: &mut Commands, assets: &GameAssets) {
    let center = Vec2::new(GAME_WIDTH / 2.0, GAME_HEIGHT / 2.0 + 8.0);
    let offsets = [
        Vec2::new(-250.0, 74.0),
        Vec2::new(-190.0, 118.0),
        Vec2::new(-118.0, 90.0),
        Vec2::new(128.0, 92.0),
        Vec2::new(200.0, 126.0),
        Vec2::new(260.0, 72.0),
    ];

    let mut rng = rand::thread_rng();
    for (i, offset) in offsets.into_iter().enumerate() {
        let position = center + offset;
        let scale = rng.gen_range(1.1..1.6);
        commands.spawn((
            StateScoped(GameScene::Boot),
            Sprite::from_image(assets.heart.clone()),
            Transform::from_xyz(position.x, position.y, 5.0).with_scale(Vec3::splat(scale)),
            Bob {
                origin_y: position.y,
                amplitude: rng.gen_range(10.0..22.0),
                period_secs: rng.gen_range(1.7..2.6),
                phase: i as f32 * 0.6,
            },
        ));
    }
}

pub fn tick_intro(
    time: Res<Time>,
    mut intro: ResMut<IntroTimer>,
    mut fade: ResMut<ScreenFade>,
    mut pending: ResMut<PendingScene>,
) {
    intro.0.tick(time.delta());
    if intro.0.just_finished() {
        request_scene_change(&mut fade, &mut pending, GameScene::Walk);
    }
}
