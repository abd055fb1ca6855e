//! Headless integration tests for Heartwalk.
//!
//! These tests exercise the game's ECS logic without a window or GPU.
//! They use Bevy's `MinimalPlugins` to tick the app, register only the
//! pure-logic systems (skipping all rendering/UI), and verify that the
//! core game loop behaves correctly.
//!
//! Run with: `cargo test --test headless`

use std::time::Duration;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use heartwalk::boot::{tick_intro, IntroTimer};
use heartwalk::data::{DataPlugin, MessageScript, RewardCatalog};
use heartwalk::heart_game::{collect_drifting_hearts, DriftingHeart, MiniGame};
use heartwalk::input::merge_control_state;
use heartwalk::player::{animate_player_frames, WalkCycle, FRAME_IDLE, FRAME_JUMP, FRAME_WALK_A, FRAME_WALK_B};
use heartwalk::shared::*;
use heartwalk::ui::banner::{
    handle_banner_events, spawn_message_banner, update_banner_timer, BannerHideTimer,
    MessageBanner,
};
use heartwalk::ui::transitions::update_fade;
use heartwalk::ui::{PendingScene, ScreenFade};
use heartwalk::walk::{check_finish, collect_walk_hearts, scan_message_triggers, WalkHeart};

// ─────────────────────────────────────────────────────────────────────────────
// Test App Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Builds a minimal Bevy app with all shared resources and events registered
/// but NO rendering, windowing, or asset loading. Systems must be added
/// per-test depending on what's being exercised.
fn build_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);

    // ── Game Scene ───────────────────────────────────────────────────────
    app.init_state::<GameScene>();
    app.enable_state_scoped_entities::<GameScene>();

    // ── Shared Resources (mirrors main.rs) ───────────────────────────────
    app.init_resource::<GameProgress>()
        .init_resource::<WalkStart>()
        .init_resource::<ControlState>()
        .init_resource::<TouchControlState>()
        .init_resource::<ScreenFade>()
        .init_resource::<PendingScene>()
        .init_resource::<RewardCatalog>()
        .init_resource::<MessageScript>();

    // ── Shared Events (mirrors main.rs) ──────────────────────────────────
    app.add_event::<BannerMessageEvent>();

    // MinimalPlugins' TimePlugin defers event cleanup until a FixedUpdate
    // runs, which never happens in these fast headless ticks; restore the
    // per-frame event update the real frame-paced app effectively gets.
    app.world_mut()
        .resource_mut::<bevy::ecs::event::EventRegistry>()
        .should_update = bevy::ecs::event::ShouldUpdateEvents::Always;

    app
}

/// Spawns a bare player entity at `(x, y)` — no sprite, no state scoping.
fn spawn_test_player(app: &mut App, x: f32, y: f32) -> Entity {
    app.world_mut()
        .spawn((
            Player,
            Transform::from_xyz(x, y, 10.0),
            Velocity(Vec2::ZERO),
            Grounded(true),
        ))
        .id()
}

fn pending_scene(app: &App) -> Option<GameScene> {
    app.world().resource::<PendingScene>().0
}

/// Advances the world clock so the next directly-run system sees `secs` as
/// its delta. Used with `run_system_once`, which skips the schedule's own
/// time update.
fn advance_clock(app: &mut App, secs: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(secs));
}

// ─────────────────────────────────────────────────────────────────────────────
// Data loading
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_data_plugin_populates_registries_on_boot() {
    let mut app = build_test_app();
    app.add_plugins(DataPlugin);

    // First update fires OnEnter for the default scene.
    app.update();

    let catalog = app.world().resource::<RewardCatalog>();
    assert_eq!(catalog.entries.len(), 6, "six rewards in the catalog");
    assert!(
        catalog.entries.windows(2).all(|w| w[0].min_hearts <= w[1].min_hearts),
        "catalog stays sorted by threshold"
    );

    let script = app.world().resource::<MessageScript>();
    assert_eq!(script.triggers.len(), 4, "four walk messages");
    assert!(script.triggers.iter().all(|t| !t.shown));
}

#[test]
fn test_unlocked_rewards_is_last_three_qualifying() {
    let mut app = build_test_app();
    app.add_plugins(DataPlugin);
    app.update();

    let catalog = app.world().resource::<RewardCatalog>();

    // Zero hearts still unlocks the free entry.
    let at_zero = catalog.unlocked(0);
    assert_eq!(
        at_zero,
        vec!["1 cumplido premium escrito solo para ti".to_string()]
    );

    // Mid-range: three entries qualify, all three shown.
    let at_thirty = catalog.unlocked(30);
    assert_eq!(at_thirty.len(), 3);
    assert_eq!(
        at_thirty.last().map(String::as_str),
        Some("Pregúntame algo que siempre hayas querido saber")
    );

    // Everything qualifies: only the top three remain visible.
    let at_sixty = catalog.unlocked(60);
    assert_eq!(
        at_sixty,
        vec![
            "Algo que quieras hacer, yo te ayudo".to_string(),
            "Tú eliges plan y yo me apunto".to_string(),
            "Detalle sorpresa".to_string(),
        ]
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Walk scene: hearts, messages, finish
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_walk_heart_collection_increments_progress() {
    let mut app = build_test_app();
    app.add_systems(Update, collect_walk_hearts);

    spawn_test_player(&mut app, 520.0, 100.0);
    app.world_mut().spawn((
        WalkHeart,
        Transform::from_xyz(530.0, 110.0, 7.0),
    ));
    // A second heart far away must survive.
    let far_heart = app
        .world_mut()
        .spawn((WalkHeart, Transform::from_xyz(2000.0, 100.0, 7.0)))
        .id();

    app.update();

    let progress = app.world().resource::<GameProgress>();
    assert_eq!(progress.score, 1);
    assert_eq!(progress.hearts_collected, 1);
    assert_eq!(progress.reward_tier, RewardTier::Low);
    assert!(app.world().get_entity(far_heart).is_ok());

    // Nothing left in range: a second tick is a no-op.
    app.update();
    assert_eq!(app.world().resource::<GameProgress>().score, 1);
}

#[test]
fn test_message_trigger_fires_once_despite_oscillation() {
    let mut app = build_test_app();
    app.add_plugins(DataPlugin);
    app.add_systems(Update, scan_message_triggers);

    let player = spawn_test_player(&mut app, 0.0, 100.0);
    app.update();
    assert!(app.world().resource::<MessageScript>().triggers.iter().all(|t| !t.shown));

    // Cross the first trigger.
    let first_x = app.world().resource::<MessageScript>().triggers[0].x;
    app.world_mut().get_mut::<Transform>(player).unwrap().translation.x = first_x + 5.0;
    app.update();
    assert!(app.world().resource::<MessageScript>().triggers[0].shown);
    let events_after_first = count_banner_events(&mut app);
    assert_eq!(events_after_first, 1);

    // Walk back before the trigger and forward again: no re-fire.
    app.world_mut().get_mut::<Transform>(player).unwrap().translation.x = first_x - 50.0;
    app.update();
    app.world_mut().get_mut::<Transform>(player).unwrap().translation.x = first_x + 5.0;
    app.update();
    assert_eq!(count_banner_events(&mut app), 0, "latched trigger stays silent");
}

fn count_banner_events(app: &mut App) -> usize {
    let events = app.world().resource::<Events<BannerMessageEvent>>();
    let mut cursor = events.get_cursor();
    cursor.read(events).count()
}

#[test]
fn test_message_script_reset_rearms_triggers() {
    let mut app = build_test_app();
    app.add_plugins(DataPlugin);
    app.update();

    let mut script = app.world_mut().resource_mut::<MessageScript>();
    for trigger in script.triggers.iter_mut() {
        trigger.shown = true;
    }
    script.reset();
    assert!(script.triggers.iter().all(|t| !t.shown));
}

#[test]
fn test_finish_fallback_threshold_requests_heart_game() {
    let mut app = build_test_app();
    app.add_systems(Update, check_finish);

    let player = spawn_test_player(&mut app, FINISH_FALLBACK_X + 1.0, 100.0);
    app.world_mut().get_mut::<Velocity>(player).unwrap().0 = Vec2::new(260.0, 0.0);

    app.update();
    assert_eq!(pending_scene(&app), Some(GameScene::HeartGame));
    assert_eq!(
        app.world().get::<Velocity>(player).unwrap().0,
        Vec2::ZERO,
        "player halts at the finish"
    );

    // Still overlapping next frame: the latch holds, no duplicate request.
    app.update();
    assert_eq!(pending_scene(&app), Some(GameScene::HeartGame));
}

#[test]
fn test_finish_not_triggered_before_threshold() {
    let mut app = build_test_app();
    app.add_systems(Update, check_finish);

    spawn_test_player(&mut app, WALK_START_X, 100.0);
    app.update();
    assert_eq!(pending_scene(&app), None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Heart mini-game
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_heart_game_catch_increments_session_count() {
    let mut app = build_test_app();
    app.add_systems(Update, collect_drifting_hearts);
    app.insert_resource(MiniGame::starting_from(4));

    spawn_test_player(&mut app, HEART_GAME_START_X, 100.0);
    app.world_mut().spawn((
        DriftingHeart {
            velocity: Vec2::new(-100.0, 0.0),
        },
        Transform::from_xyz(HEART_GAME_START_X + 10.0, 110.0, 7.0),
    ));

    app.update();

    let minigame = app.world().resource::<MiniGame>();
    assert_eq!(minigame.count, 5);
    assert!(!minigame.ended);
    assert_eq!(minigame.goal, 4 + HEART_GOAL_DELTA);
    // Shared progress is untouched until the goal is reached.
    assert_eq!(app.world().resource::<GameProgress>().hearts_collected, 0);
}

#[test]
fn test_heart_game_goal_writes_progress_and_requests_result() {
    let mut app = build_test_app();
    app.add_systems(Update, collect_drifting_hearts);

    let mut minigame = MiniGame::starting_from(10);
    minigame.count = minigame.goal - 1;
    app.insert_resource(minigame);

    spawn_test_player(&mut app, HEART_GAME_START_X, 100.0);
    app.world_mut().spawn((
        DriftingHeart {
            velocity: Vec2::new(-100.0, 0.0),
        },
        Transform::from_xyz(HEART_GAME_START_X, 100.0, 7.0),
    ));

    app.update();

    let minigame = app.world().resource::<MiniGame>();
    assert!(minigame.ended);
    assert_eq!(minigame.count, 10 + HEART_GOAL_DELTA);

    let progress = app.world().resource::<GameProgress>();
    assert_eq!(progress.score, 10 + HEART_GOAL_DELTA);
    assert_eq!(progress.hearts_collected, 10 + HEART_GOAL_DELTA);
    assert_eq!(progress.reward_tier, RewardTier::High);

    assert_eq!(pending_scene(&app), Some(GameScene::Result));
}

#[test]
fn test_heart_game_ended_session_ignores_further_catches() {
    let mut app = build_test_app();
    app.add_systems(Update, collect_drifting_hearts);

    let mut minigame = MiniGame::starting_from(0);
    minigame.count = minigame.goal;
    minigame.ended = true;
    app.insert_resource(minigame);

    spawn_test_player(&mut app, HEART_GAME_START_X, 100.0);
    app.world_mut().spawn((
        DriftingHeart {
            velocity: Vec2::new(-100.0, 0.0),
        },
        Transform::from_xyz(HEART_GAME_START_X, 100.0, 7.0),
    ));

    app.update();
    assert_eq!(app.world().resource::<MiniGame>().count, HEART_GOAL_DELTA);
}

// ─────────────────────────────────────────────────────────────────────────────
// Scene transitions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_pending_scene_latch_ignores_second_request() {
    let mut fade = ScreenFade::default();
    let mut pending = PendingScene::default();

    heartwalk::ui::request_scene_change(&mut fade, &mut pending, GameScene::HeartGame);
    heartwalk::ui::request_scene_change(&mut fade, &mut pending, GameScene::Result);

    assert_eq!(pending.0, Some(GameScene::HeartGame), "first request wins");
    assert!(fade.active);
    assert_eq!(fade.target_alpha, 1.0);
}

#[test]
fn test_fade_applies_pending_scene_when_black() {
    let mut app = build_test_app();
    app.add_systems(Update, update_fade);

    // Pretend the fade-out already completed.
    {
        let mut fade = app.world_mut().resource_mut::<ScreenFade>();
        fade.alpha = 1.0;
        fade.target_alpha = 1.0;
        fade.active = true;
    }
    app.world_mut().resource_mut::<PendingScene>().0 = Some(GameScene::Walk);

    app.update(); // applies NextState, flips target to fade back in
    app.update(); // processes the state transition

    assert_eq!(
        app.world().resource::<State<GameScene>>().get(),
        &GameScene::Walk
    );
    assert_eq!(pending_scene(&app), None, "latch released after the switch");
    assert_eq!(
        app.world().resource::<ScreenFade>().target_alpha,
        0.0,
        "fading back in"
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Progress record & input merge
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_exit_reset_drops_progress_to_defaults() {
    let mut app = build_test_app();
    {
        let mut progress = app.world_mut().resource_mut::<GameProgress>();
        progress.write(ProgressUpdate {
            score: Some(50),
            hearts_collected: Some(50),
        });
        assert_eq!(progress.reward_tier, RewardTier::High);
        progress.reset();
    }
    assert_eq!(
        *app.world().resource::<GameProgress>(),
        GameProgress::default()
    );
}

#[test]
fn test_input_merge_keyboard_and_touch() {
    let mut app = build_test_app();
    app.init_resource::<ButtonInput<KeyCode>>();
    app.add_systems(PreUpdate, merge_control_state);

    // Neither source active: everything false.
    app.update();
    let control = *app.world().resource::<ControlState>();
    assert!(!control.left && !control.right && !control.action);

    // Keyboard left + touch right merge into one record.
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowLeft);
    app.world_mut().resource_mut::<TouchControlState>().right = true;
    app.update();
    let control = *app.world().resource::<ControlState>();
    assert!(control.left, "keyboard drives left");
    assert!(control.right, "touch drives right");

    // Touch action is level-triggered.
    app.world_mut().resource_mut::<TouchControlState>().action = true;
    app.update();
    assert!(app.world().resource::<ControlState>().action);
}

// ─────────────────────────────────────────────────────────────────────────────
// Boot intro & banner timing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_intro_delay_requests_walk_transition() {
    let mut app = build_test_app();
    app.world_mut().insert_resource(IntroTimer(Timer::from_seconds(
        INTRO_BANNER_SECS,
        TimerMode::Once,
    )));

    // Part-way through the delay nothing happens.
    advance_clock(&mut app, INTRO_BANNER_SECS - 0.5);
    app.world_mut().run_system_once(tick_intro).unwrap();
    assert_eq!(pending_scene(&app), None);

    // Crossing the delay requests the walk scene.
    advance_clock(&mut app, 1.0);
    app.world_mut().run_system_once(tick_intro).unwrap();
    assert_eq!(pending_scene(&app), Some(GameScene::Walk));
    assert!(app.world().resource::<ScreenFade>().active);
}

fn banner_visibility(app: &mut App) -> Visibility {
    let mut query = app
        .world_mut()
        .query_filtered::<&Visibility, With<MessageBanner>>();
    *query.single(app.world())
}

#[test]
fn test_banner_shows_restarts_and_auto_hides() {
    let mut app = build_test_app();
    app.init_resource::<BannerHideTimer>();
    app.world_mut().run_system_once(spawn_message_banner).unwrap();
    assert_eq!(banner_visibility(&mut app), Visibility::Hidden);

    // A message shows the banner and arms the hide countdown.
    app.world_mut().send_event(BannerMessageEvent {
        text: "primera".into(),
    });
    app.world_mut().run_system_once(handle_banner_events).unwrap();
    assert_eq!(banner_visibility(&mut app), Visibility::Visible);
    assert!(app.world().resource::<BannerHideTimer>().0.is_some());

    // Partway through, a second message restarts the countdown.
    advance_clock(&mut app, 1.0);
    app.world_mut().run_system_once(update_banner_timer).unwrap();
    assert_eq!(banner_visibility(&mut app), Visibility::Visible);

    app.world_mut().send_event(BannerMessageEvent {
        text: "segunda".into(),
    });
    app.world_mut().run_system_once(handle_banner_events).unwrap();

    // 1.5s later the first message's deadline has passed, but the restarted
    // countdown keeps the banner up.
    advance_clock(&mut app, 1.5);
    app.world_mut().run_system_once(update_banner_timer).unwrap();
    assert_eq!(banner_visibility(&mut app), Visibility::Visible);

    // The restarted countdown elapses: banner hides and the timer clears.
    advance_clock(&mut app, MESSAGE_VISIBLE_SECS - 1.5 + 0.1);
    app.world_mut().run_system_once(update_banner_timer).unwrap();
    assert_eq!(banner_visibility(&mut app), Visibility::Hidden);
    assert!(app.world().resource::<BannerHideTimer>().0.is_none());
}

// ─────────────────────────────────────────────────────────────────────────────
// Player animation frames
// ─────────────────────────────────────────────────────────────────────────────

fn atlas_index(app: &App, player: Entity) -> usize {
    app.world()
        .get::<Sprite>(player)
        .unwrap()
        .texture_atlas
        .as_ref()
        .unwrap()
        .index
}

#[test]
fn test_player_frames_follow_movement_state() {
    let mut app = build_test_app();
    app.add_systems(Update, animate_player_frames);

    let player = app
        .world_mut()
        .spawn((
            Player,
            Sprite {
                texture_atlas: Some(TextureAtlas {
                    layout: Handle::default(),
                    index: FRAME_JUMP,
                }),
                ..default()
            },
            Velocity(Vec2::ZERO),
            Grounded(true),
            WalkCycle::default(),
        ))
        .id();

    // Grounded and still: idle.
    app.update();
    assert_eq!(atlas_index(&app, player), FRAME_IDLE);

    // Airborne: jump frame regardless of horizontal speed.
    app.world_mut().get_mut::<Grounded>(player).unwrap().0 = false;
    app.world_mut().get_mut::<Velocity>(player).unwrap().0 = Vec2::new(PLAYER_SPEED, 200.0);
    app.update();
    assert_eq!(atlas_index(&app, player), FRAME_JUMP);

    // Landed and moving: one of the walk pair, leading with frame A.
    app.world_mut().get_mut::<Grounded>(player).unwrap().0 = true;
    app.world_mut().get_mut::<Velocity>(player).unwrap().0 = Vec2::new(PLAYER_SPEED, 0.0);
    app.update();
    let frame = atlas_index(&app, player);
    assert!(frame == FRAME_WALK_A || frame == FRAME_WALK_B);

    // Stopping returns to idle.
    app.world_mut().get_mut::<Velocity>(player).unwrap().0 = Vec2::ZERO;
    app.update();
    assert_eq!(atlas_index(&app, player), FRAME_IDLE);
}
