//! Transient message banner — the walk scene's narrative cue display.
//!
//! One persistent (hidden) node; each [`BannerMessageEvent`] swaps in new
//! text and restarts the hide timer, so a newer message supersedes a
//! pending hide rather than racing it.

use bevy::prelude::*;
use crate::shared::*;

/// Marker for the banner node.
#[derive(Component)]
pub struct MessageBanner;

/// Marker for the banner's text child.
#[derive(Component)]
pub struct MessageBannerText;

/// Countdown until the banner auto-hides. Replaced on every new message.
#[derive(Resource, Debug, Default)]
pub struct BannerHideTimer(pub Option<Timer>);

pub fn spawn_message_banner(mut commands: Commands) {
    commands
        .spawn((
            MessageBanner,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(64.0),
                left: Val::Percent(50.0),
                margin: UiRect {
                    left: Val::Px(-300.0),
                    ..default()
                },
                width: Val::Px(600.0),
                justify_content: JustifyContent::Center,
                padding: UiRect::axes(Val::Px(22.0), Val::Px(12.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.06, 0.09, 0.16, 0.82)),
            Visibility::Hidden,
            GlobalZIndex(50),
            PickingBehavior::IGNORE,
        ))
        .with_children(|parent| {
            parent.spawn((
                MessageBannerText,
                Text::new(""),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                PickingBehavior::IGNORE,
            ));
        });
}

/// Show incoming messages, restarting the hide countdown each time.
pub fn handle_banner_events(
    mut events: EventReader<BannerMessageEvent>,
    mut hide_timer: ResMut<BannerHideTimer>,
    mut banner_query: Query<&mut Visibility, With<MessageBanner>>,
    mut text_query: Query<&mut Text, With<MessageBannerText>>,
) {
    let Some(event) = events.read().last() else {
        return;
    };

    let Ok(mut visibility) = banner_query.get_single_mut() else {
        return;
    };
    let Ok(mut text) = text_query.get_single_mut() else {
        return;
    };

    text.0 = event.text.clone();
    *visibility = Visibility::Visible;
    hide_timer.0 = Some(Timer::from_seconds(MESSAGE_VISIBLE_SECS, TimerMode::Once));
}

/// Tick the hide countdown and hide the banner when it elapses.
pub fn update_banner_timer(
    time: Res<Time>,
    mut hide_timer: ResMut<BannerHideTimer>,
    mut banner_query: Query<&mut Visibility, With<MessageBanner>>,
) {
    let Some(timer) = hide_timer.0.as_mut() else {
        return;
    };
    timer.tick(time.delta());
    if timer.just_finished() {
        hide_timer.0 = None;
        if let Ok(mut visibility) = banner_query.get_single_mut() {
            *visibility = Visibility::Hidden;
        }
    }
}

/// Leaving the walk scene drops any pending hide countdown so a stale timer
/// never acts on the next session's banner.
pub fn clear_banner(
    mut hide_timer: ResMut<BannerHideTimer>,
    mut banner_query: Query<&mut Visibility, With<MessageBanner>>,
) {
    hide_timer.0 = None;
    if let Ok(mut visibility) = banner_query.get_single_mut() {
        *visibility = Visibility::Hidden;
    }
}
