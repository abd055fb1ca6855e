//! The walk scene's narrative message triggers.

use bevy::prelude::*;
use crate::shared::MessageTrigger;

/// The ordered trigger list for the walk scene. The walk plugin resets
/// every `shown` flag on scene entry, so each session gets each message
/// exactly once.
#[derive(Resource, Debug, Clone, Default)]
pub struct MessageScript {
    pub triggers: Vec<MessageTrigger>,
}

impl MessageScript {
    pub fn reset(&mut self) {
        for trigger in &mut self.triggers {
            trigger.shown = false;
        }
    }
}

pub fn populate_messages(script: &mut MessageScript) {
    let defs: [(&str, f32, &str); 4] = [
        ("m1", 340.0, "Snoopy confirma: hablar contigo siempre suma puntos."),
        ("m2", 1160.0, "Advertencia: esta conversacion mejora el humor."),
        ("m3", 2060.0, "Si hoy estuvo pesado, Snoopy activa modo chill."),
        ("m4", 2860.0, "Snoopy aprueba este momento."),
    ];

    script.triggers = defs
        .into_iter()
        .map(|(id, x, text)| MessageTrigger {
            id: id.to_string(),
            x,
            text: text.to_string(),
            shown: false,
        })
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triggers_are_ordered_and_start_hidden() {
        let mut script = MessageScript::default();
        populate_messages(&mut script);
        assert_eq!(script.triggers.len(), 4);
        assert!(script.triggers.windows(2).all(|w| w[0].x < w[1].x));
        assert!(script.triggers.iter().all(|t| !t.shown));
    }

    #[test]
    fn test_reset_clears_shown_flags() {
        let mut script = MessageScript::default();
        populate_messages(&mut script);
        for trigger in &mut script.triggers {
            trigger.shown = true;
        }
        script.reset();
        assert!(script.triggers.iter().all(|t| !t.shown));
    }
}
