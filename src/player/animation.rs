//! Frame selection for the player sprite sheet.
//!
//! The sheet carries four frames: idle, two walk frames, and a jump pose.
//! Selection is a pure function of the movement state; the only clock is
//! the walk-cycle alternation timer.

use bevy::prelude::*;
use crate::shared::*;

pub const FRAME_IDLE: usize = 0;
pub const FRAME_WALK_A: usize = 1;
pub const FRAME_WALK_B: usize = 2;
pub const FRAME_JUMP: usize = 3;

/// Seconds each walk frame stays up before swapping.
const WALK_FRAME_SECS: f32 = 0.14;

/// Alternation state for the two-frame walk cycle.
#[derive(Component, Debug)]
pub struct WalkCycle {
    timer: Timer,
    second_frame: bool,
}

impl Default for WalkCycle {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(WALK_FRAME_SECS, TimerMode::Repeating),
            second_frame: false,
        }
    }
}

/// Airborne shows the jump pose; grounded shows idle, or the alternating
/// walk pair while moving.
pub fn select_frame(grounded: bool, moving: bool, second_frame: bool) -> usize {
    if !grounded {
        FRAME_JUMP
    } else if !moving {
        FRAME_IDLE
    } else if second_frame {
        FRAME_WALK_B
    } else {
        FRAME_WALK_A
    }
}

/// Drive the atlas index from velocity and ground contact. Runs after
/// movement so the frame reflects this tick's resolved state.
pub fn animate_player_frames(
    time: Res<Time>,
    mut query: Query<(&Velocity, &Grounded, &mut WalkCycle, &mut Sprite), With<Player>>,
) {
    let Ok((velocity, grounded, mut cycle, mut sprite)) = query.get_single_mut() else {
        return;
    };

    let moving = velocity.0.x.abs() > f32::EPSILON;
    if moving && grounded.0 {
        if cycle.timer.tick(time.delta()).just_finished() {
            cycle.second_frame = !cycle.second_frame;
        }
    } else {
        // Restart the cycle so a fresh walk always leads with frame A.
        cycle.timer.reset();
        cycle.second_frame = false;
    }

    if let Some(atlas) = sprite.texture_atlas.as_mut() {
        atlas.index = select_frame(grounded.0, moving, cycle.second_frame);
    }
}
