//! On-screen touch controls: left/right movement buttons bottom-left, the
//! action (jump) button bottom-right.
//!
//! Pointer observers write straight into [`TouchControlState`]; `Up` and
//! `Out` both release, so dragging a thumb off a button never leaves it
//! stuck pressed.

use bevy::prelude::*;
use crate::boot::GameAssets;
use crate::shared::*;

const BUTTON_PX: f32 = 88.0;
const BUTTON_BOTTOM: f32 = 34.0;
const IDLE_TINT: Color = Color::srgba(1.0, 1.0, 1.0, 0.9);
const PRESSED_TINT: Color = Color::srgba(0.86, 0.92, 0.99, 1.0);

/// Which control a button drives.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchButton {
    Left,
    Right,
    Action,
}

/// Spawns the three buttons, scoped to `scene` so they despawn with it.
pub fn spawn_touch_controls(commands: &mut Commands, assets: &GameAssets, scene: GameScene) {
    let specs = [
        (TouchButton::Left, assets.btn_left.clone(), Val::Px(46.0), Val::Auto),
        (TouchButton::Right, assets.btn_right.clone(), Val::Px(148.0), Val::Auto),
        (TouchButton::Action, assets.btn_action.clone(), Val::Auto, Val::Px(46.0)),
    ];

    for (button, image, left, right) in specs {
        commands
            .spawn((
                button,
                StateScoped(scene),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(BUTTON_BOTTOM),
                    left,
                    right,
                    width: Val::Px(BUTTON_PX),
                    height: Val::Px(BUTTON_PX),
                    ..default()
                },
                ImageNode {
                    image,
                    color: IDLE_TINT,
                    ..default()
                },
                GlobalZIndex(60),
            ))
            .observe(on_button_down)
            .observe(on_button_up)
            .observe(on_button_out);
    }
}

pub fn spawn_walk_touch_controls(mut commands: Commands, assets: Res<GameAssets>) {
    spawn_touch_controls(&mut commands, &assets, GameScene::Walk);
}

pub fn spawn_heart_game_touch_controls(mut commands: Commands, assets: Res<GameAssets>) {
    spawn_touch_controls(&mut commands, &assets, GameScene::HeartGame);
}

fn set_flag(touch: &mut TouchControlState, button: TouchButton, pressed: bool) {
    match button {
        TouchButton::Left => touch.left = pressed,
        TouchButton::Right => touch.right = pressed,
        TouchButton::Action => touch.action = pressed,
    }
}

fn on_button_down(
    trigger: Trigger<Pointer<Down>>,
    mut touch: ResMut<TouchControlState>,
    mut query: Query<(&TouchButton, &mut ImageNode)>,
) {
    if let Ok((button, mut image)) = query.get_mut(trigger.entity()) {
        set_flag(&mut touch, *button, true);
        image.color = PRESSED_TINT;
    }
}

fn on_button_up(
    trigger: Trigger<Pointer<Up>>,
    mut touch: ResMut<TouchControlState>,
    mut query: Query<(&TouchButton, &mut ImageNode)>,
) {
    if let Ok((button, mut image)) = query.get_mut(trigger.entity()) {
        set_flag(&mut touch, *button, false);
        image.color = IDLE_TINT;
    }
}

fn on_button_out(
    trigger: Trigger<Pointer<Out>>,
    mut touch: ResMut<TouchControlState>,
    mut query: Query<(&TouchButton, &mut ImageNode)>,
) {
    if let Ok((button, mut image)) = query.get_mut(trigger.entity()) {
        set_flag(&mut touch, *button, false);
        image.color = IDLE_TINT;
    }
}

/// Scene teardown can outrun a pointer release; zero the whole record so no
/// phantom press follows the player into the next scene.
pub fn release_all_touch_buttons(mut touch: ResMut<TouchControlState>) {
    *touch = TouchControlState::default();
}
