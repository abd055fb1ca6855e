//! Shared components, resources, events, and states for Heartwalk.
//!
//! This is the type contract. Every scene plugin imports from here.
//! No scene imports from any other scene directly.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// GAME SCENE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

/// The four scenes of the game, in their fixed order. `Result` loops back
/// to `Walk` (replay or exit); there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameScene {
    #[default]
    Boot,
    Walk,
    HeartGame,
    Result,
}

// ═══════════════════════════════════════════════════════════════════════
// PROGRESS — score, hearts, reward tier
// ═══════════════════════════════════════════════════════════════════════

/// Coarse classification of the cumulative score. Gates flavor text on the
/// result screen only; it does not gate which rewards are selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RewardTier {
    #[default]
    Low,
    Mid,
    High,
}

impl RewardTier {
    /// Pure, total mapping from cumulative score to tier.
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_TIER_SCORE {
            RewardTier::High
        } else if score >= MID_TIER_SCORE {
            RewardTier::Mid
        } else {
            RewardTier::Low
        }
    }

    /// Flavor line shown on the result screen.
    pub fn unlock_message(&self) -> &'static str {
        match self {
            RewardTier::High => "Nivel top desbloqueado.",
            RewardTier::Mid => "Nivel medio desbloqueado.",
            RewardTier::Low => "Nivel base desbloqueado.",
        }
    }
}

/// A partial write into [`GameProgress`]. `None` fields keep their current
/// value (shallow merge).
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressUpdate {
    pub score: Option<u32>,
    pub hearts_collected: Option<u32>,
}

/// The process-wide progress record. One instance, owned by the Bevy world,
/// handed to scene systems by the scheduler. Nothing persists across runs.
///
/// Invariant: `reward_tier` is always `RewardTier::from_score(score)` as of
/// the last write. It is never assigned independently — all mutation goes
/// through [`GameProgress::write`] or [`GameProgress::reset`].
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameProgress {
    pub score: u32,
    pub hearts_collected: u32,
    pub reward_tier: RewardTier,
}

impl GameProgress {
    /// Merge `update` into the current record, recompute the tier from the
    /// merged score, store, and return the new snapshot. Last write wins;
    /// callers are single-threaded event handlers so no ordering subtlety.
    pub fn write(&mut self, update: ProgressUpdate) -> GameProgress {
        if let Some(score) = update.score {
            self.score = score;
        }
        if let Some(hearts) = update.hearts_collected {
            self.hearts_collected = hearts;
        }
        self.reward_tier = RewardTier::from_score(self.score);
        *self
    }

    /// Zero score and hearts ("Salir" on the result screen). The tier drops
    /// to `Low` as a byproduct of the write path, not by direct assignment.
    pub fn reset(&mut self) -> GameProgress {
        self.write(ProgressUpdate {
            score: Some(0),
            hearts_collected: Some(0),
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════
// MESSAGE TRIGGERS
// ═══════════════════════════════════════════════════════════════════════

/// One-shot narrative text cue keyed to a world x position in the walk
/// scene. `shown` flips false→true exactly once per scene session; entering
/// the walk scene resets every flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageTrigger {
    pub id: String,
    pub x: f32,
    pub text: String,
    pub shown: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// INPUT
// ═══════════════════════════════════════════════════════════════════════

/// The merged left/right/action tri-boolean, recomputed every frame from
/// keyboard state OR-ed with the on-screen touch buttons. A missing input
/// source contributes all-false rather than failing.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct ControlState {
    pub left: bool,
    pub right: bool,
    pub action: bool,
}

/// The touch-button half of the merge. Pointer down sets a flag, pointer
/// up/out clears it, so a missed release never wedges a button on.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct TouchControlState {
    pub left: bool,
    pub right: bool,
    pub action: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// PLAYER
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Velocity in world px/s. Gravity is integrated into `y` by the movement
/// system; the ground plane clamps it.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Velocity(pub Vec2);

/// Whether the player's feet are on the ground plane this frame.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Grounded(pub bool);

/// Where the walk scene places the player on entry. The result screen sets
/// this before looping back (start position on exit, mid-level on replay).
#[derive(Resource, Debug, Clone, Copy)]
pub struct WalkStart {
    pub x: f32,
}

impl Default for WalkStart {
    fn default() -> Self {
        Self { x: WALK_START_X }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FX
// ═══════════════════════════════════════════════════════════════════════

/// Gentle vertical sine bob for decorative sprites (floating hearts).
#[derive(Component, Debug, Clone, Copy)]
pub struct Bob {
    pub origin_y: f32,
    pub amplitude: f32,
    pub period_secs: f32,
    pub phase: f32,
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS
// ═══════════════════════════════════════════════════════════════════════

/// Show a transient banner message (walk-scene narrative cues). A new event
/// supersedes any pending hide timer.
#[derive(Event, Debug, Clone)]
pub struct BannerMessageEvent {
    pub text: String,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const GAME_WIDTH: f32 = 960.0;
pub const GAME_HEIGHT: f32 = 540.0;

/// Arcade gravity, px/s² downward.
pub const GRAVITY: f32 = 860.0;
pub const PLAYER_SPEED: f32 = 260.0;
pub const PLAYER_JUMP_SPEED: f32 = 460.0;
/// The heart mini-game jump is a little stronger so drifting hearts stay
/// reachable.
pub const HEART_GAME_JUMP_BONUS: f32 = 110.0;
/// Half-height of the player's collision box (18×30 body at 1.5 scale).
pub const PLAYER_HALF_H: f32 = 22.0;

/// Width of one background segment of the walk level.
pub const ZONE_WIDTH: f32 = 900.0;
pub const WALK_ZONE_COUNT: usize = 4;
/// Total horizontal extent of the scrolling walk level.
pub const WORLD_WIDTH: f32 = ZONE_WIDTH * WALK_ZONE_COUNT as f32;

/// Height of the ground plane above the bottom edge, walk scene.
pub const WALK_GROUND_Y: f32 = 70.0;
/// Ground plane in the heart mini-game.
pub const HEART_GAME_GROUND_Y: f32 = 76.0;

pub const WALK_START_X: f32 = 100.0;
/// "Repetir" restarts the walk partway through the level.
pub const WALK_REPLAY_START_X: f32 = 1800.0;
pub const HEART_GAME_START_X: f32 = 130.0;

/// Center of the finish-zone overlap rectangle at the end of the walk level.
pub const FINISH_ZONE_X: f32 = WORLD_WIDTH - 120.0;
pub const FINISH_ZONE_HALF_W: f32 = 130.0;
pub const FINISH_ZONE_HALF_H: f32 = 110.0;
/// Secondary direct threshold guarding against a missed overlap event.
pub const FINISH_FALLBACK_X: f32 = WORLD_WIDTH - 180.0;

/// Seconds a banner message stays visible before auto-hiding.
pub const MESSAGE_VISIBLE_SECS: f32 = 2.2;

/// Hearts to collect in the mini-game, on top of the count at entry.
pub const HEART_GOAL_DELTA: u32 = 36;
pub const HEART_SPAWN_INTERVAL_SECS: f32 = 0.85;
pub const HEART_MAX_ON_SCREEN: usize = 12;
/// Seconds before an uncollected drifting heart despawns itself.
pub const HEART_LIFETIME_SECS: f32 = 7.0;

/// Seconds the intro banner stays up before the boot scene advances.
pub const INTRO_BANNER_SECS: f32 = 3.6;

pub const MID_TIER_SCORE: u32 = 24;
pub const HIGH_TIER_SCORE: u32 = 42;

// ═══════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════
