//! Decorative sprite motion that would be a tween in a bigger engine.

use bevy::prelude::*;
use crate::shared::*;

/// Drive [`Bob`] sprites up and down on a sine wave.
pub fn animate_bobbing(time: Res<Time>, mut query: Query<(&Bob, &mut Transform)>) {
    let t = time.elapsed_secs();
    for (bob, mut transform) in &mut query {
        let angle = t * std::f32::consts::TAU / bob.period_secs + bob.phase;
        transform.translation.y = bob.origin_y + bob.amplitude * angle.sin();
    }
}
