mod shared;
mod input;
mod boot;
mod player;
mod walk;
mod heart_game;
mod result;
mod ui;
mod data;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use shared::*;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Heartwalk".into(),
                        resolution: WindowResolution::new(GAME_WIDTH, GAME_HEIGHT),
                        present_mode: PresentMode::AutoVsync,
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        // Game scene
        .init_state::<GameScene>()
        .enable_state_scoped_entities::<GameScene>()
        // Shared resources
        .init_resource::<GameProgress>()
        .init_resource::<WalkStart>()
        .init_resource::<ControlState>()
        .init_resource::<TouchControlState>()
        // Events
        .add_event::<BannerMessageEvent>()
        // Domain plugins
        .add_plugins(input::InputPlugin)
        .add_plugins(boot::BootPlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(walk::WalkPlugin)
        .add_plugins(heart_game::HeartGamePlugin)
        .add_plugins(result::ResultPlugin)
        .add_plugins(ui::UiPlugin)
        // Data loading
        .add_plugins(data::DataPlugin)
        // Camera
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_xyz(GAME_WIDTH / 2.0, GAME_HEIGHT / 2.0, 0.0),
    ));
}
