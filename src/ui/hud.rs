//! Hearts counter, top-right of the walk scene.
//!
//! The heart mini-game draws its own score/goal lines (they track the local
//! counter, not `GameProgress`), so this HUD lives only in the walk scene.

use bevy::prelude::*;
use crate::shared::*;

#[derive(Component)]
pub struct HeartsHudText;

pub fn spawn_hearts_hud(mut commands: Commands, progress: Res<GameProgress>) {
    commands.spawn((
        HeartsHudText,
        StateScoped(GameScene::Walk),
        Text::new(format!("Corazones: {}", progress.hearts_collected)),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(Color::srgb(0.97, 0.98, 0.99)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(28.0),
            right: Val::Px(36.0),
            ..default()
        },
        PickingBehavior::IGNORE,
    ));
}

/// Refresh the counter whenever progress changes.
pub fn update_hearts_hud(
    progress: Res<GameProgress>,
    mut query: Query<&mut Text, With<HeartsHudText>>,
) {
    if !progress.is_changed() {
        return;
    }
    for mut text in &mut query {
        text.0 = format!("Corazones: {}", progress.hearts_collected);
    }
}
