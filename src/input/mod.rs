use bevy::prelude::*;
use crate::shared::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlState>();
        app.init_resource::<TouchControlState>();
        app.add_systems(PreUpdate, merge_control_state);
    }
}

/// The single point where hardware input becomes game actions: keyboard
/// state and the on-screen touch buttons are OR-ed into one left/right/
/// action tri-boolean per frame.
///
/// Keyboard action is edge-triggered (just pressed) so a held key jumps
/// once per landing; the touch action button is level-triggered, matching
/// how a thumb rests on it.
pub fn merge_control_state(
    keys: Res<ButtonInput<KeyCode>>,
    touch: Res<TouchControlState>,
    mut control: ResMut<ControlState>,
) {
    control.left = keys.pressed(KeyCode::ArrowLeft) || keys.pressed(KeyCode::KeyA) || touch.left;
    control.right = keys.pressed(KeyCode::ArrowRight) || keys.pressed(KeyCode::KeyD) || touch.right;
    control.action = keys.just_pressed(KeyCode::ArrowUp)
        || keys.just_pressed(KeyCode::Space)
        || touch.action;
}
