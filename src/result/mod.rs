//! Result scene — the reward-redemption screen shown after the heart
//! mini-game: final count, unlock tier, and the redeemable reward cards.

use bevy::prelude::*;
use rand::Rng;

use crate::boot::{GameAssets, RESULT_BACKGROUND};
use crate::data::RewardCatalog;
use crate::shared::*;
use crate::ui::{request_scene_change, PendingScene, ScreenFade};

pub struct ResultPlugin;

impl Plugin for ResultPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedReward>();
        app.add_systems(OnEnter(GameScene::Result), spawn_result_scene);
        app.add_systems(
            Update,
            highlight_selected_card.run_if(in_state(GameScene::Result)),
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// MARKERS & RESOURCES
// ═══════════════════════════════════════════════════════════════════════

/// Index of the currently chosen reward card, within the unlocked list.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectedReward(pub usize);

#[derive(Component, Debug, Clone, Copy)]
struct RewardCard {
    index: usize,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
enum ResultButton {
    Replay,
    Exit,
}

const PANEL_BG: Color = Color::srgba(0.07, 0.09, 0.14, 0.92);
const CARD_BG: Color = Color::srgba(0.16, 0.19, 0.27, 0.95);
const CARD_SELECTED_BG: Color = Color::srgba(0.42, 0.23, 0.33, 0.98);
const BUTTON_BG: Color = Color::srgba(0.22, 0.27, 0.38, 0.95);
const TEXT_BRIGHT: Color = Color::srgb(0.97, 0.98, 0.99);
const TEXT_SOFT: Color = Color::srgb(0.78, 0.82, 0.88);
const TEXT_ACCENT: Color = Color::srgb(0.99, 0.72, 0.82);

// ═══════════════════════════════════════════════════════════════════════
// SETUP
// ═══════════════════════════════════════════════════════════════════════

fn spawn_result_scene(
    mut commands: Commands,
    assets: Res<GameAssets>,
    progress: Res<GameProgress>,
    catalog: Res<RewardCatalog>,
    mut selected: ResMut<SelectedReward>,
) {
    selected.0 = 0;

    commands.spawn((
        StateScoped(GameScene::Result),
        Sprite {
            image: assets.background(RESULT_BACKGROUND),
            custom_size: Some(Vec2::new(GAME_WIDTH, GAME_HEIGHT)),
            ..default()
        },
        Transform::from_xyz(GAME_WIDTH / 2.0, GAME_HEIGHT / 2.0, -20.0),
    ));

    spawn_result_hearts(&mut commands, &assets);

    let unlocked = catalog.unlocked(progress.hearts_collected);
    info!(
        "[Result] Showing {} rewards — hearts {}, tier {:?}",
        unlocked.len(),
        progress.hearts_collected,
        progress.reward_tier
    );

    commands
        .spawn((
            StateScoped(GameScene::Result),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            PickingBehavior::IGNORE,
        ))
        .with_children(|root| {
            root.spawn((
                Node {
                    width: Val::Px(620.0),
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(10.0),
                    padding: UiRect::all(Val::Px(26.0)),
                    ..default()
                },
                BackgroundColor(PANEL_BG),
                BorderRadius::all(Val::Px(14.0)),
            ))
            .with_children(|panel| {
                panel.spawn((
                    Text::new("Canje de premios"),
                    TextFont {
                        font_size: 34.0,
                        ..default()
                    },
                    TextColor(TEXT_BRIGHT),
                ));
                panel.spawn((
                    Text::new(format!(
                        "Corazones atrapados: {}",
                        progress.hearts_collected
                    )),
                    TextFont {
                        font_size: 22.0,
                        ..default()
                    },
                    TextColor(TEXT_ACCENT),
                ));
                panel.spawn((
                    Text::new(progress.reward_tier.unlock_message()),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(TEXT_SOFT),
                ));
                panel.spawn((
                    Text::new("Toca un premio para elegirlo."),
                    TextFont {
                        font_size: 17.0,
                        ..default()
                    },
                    TextColor(TEXT_SOFT),
                ));

                for (index, reward) in unlocked.iter().enumerate() {
                    let bg = if index == 0 { CARD_SELECTED_BG } else { CARD_BG };
                    panel
                        .spawn((
                            RewardCard { index },
                            Node {
                                width: Val::Percent(100.0),
                                padding: UiRect::axes(Val::Px(18.0), Val::Px(12.0)),
                                justify_content: JustifyContent::Center,
                                ..default()
                            },
                            BackgroundColor(bg),
                            BorderRadius::all(Val::Px(10.0)),
                        ))
                        .observe(on_card_clicked)
                        .with_children(|card| {
                            card.spawn((
                                Text::new(reward.clone()),
                                TextFont {
                                    font_size: 18.0,
                                    ..default()
                                },
                                TextColor(TEXT_BRIGHT),
                                PickingBehavior::IGNORE,
                            ));
                        });
                }

                panel
                    .spawn((
                        Node {
                            width: Val::Percent(100.0),
                            justify_content: JustifyContent::Center,
                            column_gap: Val::Px(18.0),
                            margin: UiRect::top(Val::Px(10.0)),
                            ..default()
                        },
                        PickingBehavior::IGNORE,
                    ))
                    .with_children(|row| {
                        for (button, label) in
                            [(ResultButton::Replay, "Repetir"), (ResultButton::Exit, "Salir")]
                        {
                            row.spawn((
                                button,
                                Node {
                                    padding: UiRect::axes(Val::Px(30.0), Val::Px(12.0)),
                                    ..default()
                                },
                                BackgroundColor(BUTTON_BG),
                                BorderRadius::all(Val::Px(10.0)),
                            ))
                            .observe(on_result_button)
                            .with_children(|b| {
                                b.spawn((
                                    Text::new(label),
                                    TextFont {
                                        font_size: 20.0,
                                        ..default()
                                    },
                                    TextColor(TEXT_BRIGHT),
                                    PickingBehavior::IGNORE,
                                ));
                            });
                        }
                    });
            });
        });
}

/// Where the decorative hearts sit relative to screen center, flanking the
/// panel and floating above it.
const RESULT_HEART_OFFSETS: [Vec2; 9] = [
    Vec2::new(-388.0, 152.0),
    Vec2::new(-346.0, -36.0),
    Vec2::new(-396.0, -178.0),
    Vec2::new(-128.0, 226.0),
    Vec2::new(4.0, 230.0),
    Vec2::new(142.0, 224.0),
    Vec2::new(372.0, 160.0),
    Vec2::new(352.0, -28.0),
    Vec2::new(390.0, -172.0),
];

/// Decorative bobbing hearts framing the panel.
fn spawn_result_hearts(commands: &mut Commands, assets: &GameAssets) {
    let center = Vec2::new(GAME_WIDTH / 2.0, GAME_HEIGHT / 2.0);
    let mut rng = rand::thread_rng();
    for (i, offset) in RESULT_HEART_OFFSETS.into_iter().enumerate() {
        let position = center + offset;
        let scale = rng.gen_range(1.0..1.5);
        commands.spawn((
            StateScoped(GameScene::Result),
            Sprite::from_image(assets.heart.clone()),
            Transform::from_xyz(position.x, position.y, 5.0).with_scale(Vec3::splat(scale)),
            Bob {
                origin_y: position.y,
                amplitude: rng.gen_range(8.0..18.0),
                period_secs: rng.gen_range(1.8..2.8),
                phase: i as f32 * 0.7,
            },
        ));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INTERACTION
// ═══════════════════════════════════════════════════════════════════════

fn on_card_clicked(
    trigger: Trigger<Pointer<Click>>,
    mut selected: ResMut<SelectedReward>,
    card_query: Query<&RewardCard>,
) {
    if let Ok(card) = card_query.get(trigger.entity()) {
        selected.0 = card.index;
        info!("[Result] Reward card {} selected", card.index);
    }
}

fn highlight_selected_card(
    selected: Res<SelectedReward>,
    mut card_query: Query<(&RewardCard, &mut BackgroundColor)>,
) {
    if !selected.is_changed() {
        return;
    }
    for (card, mut bg) in &mut card_query {
        bg.0 = if card.index == selected.0 {
            CARD_SELECTED_BG
        } else {
            CARD_BG
        };
    }
}

/// "Repetir" keeps the session's progress and restarts the walk mid-level;
/// "Salir" zeroes the progress and restarts it from the beginning.
fn on_result_button(
    trigger: Trigger<Pointer<Click>>,
    mut commands: Commands,
    mut progress: ResMut<GameProgress>,
    mut fade: ResMut<ScreenFade>,
    mut pending: ResMut<PendingScene>,
    button_query: Query<&ResultButton>,
) {
    let Ok(button) = button_query.get(trigger.entity()) else {
        return;
    };

    match button {
        ResultButton::Replay => {
            commands.insert_resource(WalkStart {
                x: WALK_REPLAY_START_X,
            });
            info!("[Result] Replay — progress kept");
        }
        ResultButton::Exit => {
            progress.reset();
            commands.insert_resource(WalkStart { x: WALK_START_X });
            info!("[Result] Exit — progress reset");
        }
    }
    request_scene_change(&mut fade, &mut pending, GameScene::Walk);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_hearts_frame_the_panel_on_screen() {
        let center = Vec2::new(GAME_WIDTH / 2.0, GAME_HEIGHT / 2.0);
        for offset in RESULT_HEART_OFFSETS {
            let position = center + offset;
            assert!(position.x >= 24.0 && position.x <= GAME_WIDTH - 24.0);
            assert!(position.y >= 24.0 && position.y <= GAME_HEIGHT - 24.0);
            // Clear of the 620px-wide panel's card column.
            assert!(offset.x.abs() >= 120.0 || offset.y >= 220.0);
        }
    }
}
