//! Per-frame scan of the narrative message triggers.

use bevy::prelude::*;

use crate::data::MessageScript;
use crate::shared::*;

/// For every trigger not yet shown, fire it once the player's x crosses its
/// threshold. `shown` latches, so oscillating back and forth over the
/// threshold never repeats a message within a session.
pub fn scan_message_triggers(
    mut script: ResMut<MessageScript>,
    mut banner_events: EventWriter<BannerMessageEvent>,
    player_query: Query<&Transform, With<Player>>,
) {
    let Ok(player_tf) = player_query.get_single() else {
        return;
    };
    let player_x = player_tf.translation.x;

    for trigger in script.triggers.iter_mut() {
        if !trigger.shown && player_x >= trigger.x {
            trigger.shown = true;
            info!("[Walk] Message trigger {} fired at x={}", trigger.id, trigger.x);
            banner_events.send(BannerMessageEvent {
                text: trigger.text.clone(),
            });
        }
    }
}
