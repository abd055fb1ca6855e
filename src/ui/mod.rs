pub mod banner;
pub mod fx;
pub mod hud;
pub mod touch;
pub mod transitions;

use bevy::prelude::*;
use crate::shared::*;

pub use transitions::{request_scene_change, PendingScene, ScreenFade};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScreenFade>();
        app.init_resource::<PendingScene>();
        app.init_resource::<banner::BannerHideTimer>();

        app.add_systems(
            Startup,
            (transitions::spawn_fade_overlay, banner::spawn_message_banner),
        );

        app.add_systems(
            Update,
            (transitions::update_fade, fx::animate_bobbing),
        );

        // Hearts HUD + narrative banner live in the walk scene.
        app.add_systems(OnEnter(GameScene::Walk), hud::spawn_hearts_hud);
        app.add_systems(
            Update,
            (
                hud::update_hearts_hud,
                banner::handle_banner_events,
                banner::update_banner_timer,
            )
                .run_if(in_state(GameScene::Walk)),
        );
        app.add_systems(OnExit(GameScene::Walk), banner::clear_banner);

        // Touch buttons in both playable scenes.
        app.add_systems(OnEnter(GameScene::Walk), touch::spawn_walk_touch_controls);
        app.add_systems(
            OnEnter(GameScene::HeartGame),
            touch::spawn_heart_game_touch_controls,
        );
        app.add_systems(OnExit(GameScene::Walk), touch::release_all_touch_buttons);
        app.add_systems(
            OnExit(GameScene::HeartGame),
            touch::release_all_touch_buttons,
        );
    }
}
