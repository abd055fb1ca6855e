use bevy::prelude::*;
use crate::shared::*;

/// Marker for the screen fade overlay
#[derive(Component)]
pub struct ScreenFadeOverlay;

/// Resource that drives fade out → scene switch → fade in
#[derive(Resource)]
pub struct ScreenFade {
    /// Current opacity 0.0 (transparent) to 1.0 (opaque black)
    pub alpha: f32,
    /// Target opacity
    pub target_alpha: f32,
    /// Speed of fade (alpha units per second)
    pub speed: f32,
    /// Whether a fade is actively running
    pub active: bool,
}

impl Default for ScreenFade {
    fn default() -> Self {
        Self {
            alpha: 0.0,
            target_alpha: 0.0,
            speed: 2.5,
            active: false,
        }
    }
}

/// The scene to enter once the screen has faded to black. Scenes set this
/// through [`request_scene_change`]; while it is `Some`, further requests
/// are ignored — the transition latch.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PendingScene(pub Option<GameScene>);

/// Begin a fade-to-black that ends in `scene`. No-op if a transition is
/// already underway.
pub fn request_scene_change(
    fade: &mut ScreenFade,
    pending: &mut PendingScene,
    scene: GameScene,
) {
    if pending.0.is_some() {
        return;
    }
    pending.0 = Some(scene);
    fade.target_alpha = 1.0;
    fade.active = true;
    info!("[Scene] Transition requested → {:?}", scene);
}

/// Spawn the fade overlay (always present but invisible)
pub fn spawn_fade_overlay(mut commands: Commands) {
    commands.spawn((
        ScreenFadeOverlay,
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            position_type: PositionType::Absolute,
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.0)),
        GlobalZIndex(100), // on top of everything
        PickingBehavior::IGNORE,
    ));
}

/// Animate the fade overlay. When fully black, apply the pending scene
/// switch and fade back in.
pub fn update_fade(
    time: Res<Time>,
    mut fade: ResMut<ScreenFade>,
    mut pending: ResMut<PendingScene>,
    mut next_scene: ResMut<NextState<GameScene>>,
    mut query: Query<&mut BackgroundColor, With<ScreenFadeOverlay>>,
) {
    if !fade.active {
        return;
    }

    let dt = time.delta_secs();
    let diff = fade.target_alpha - fade.alpha;

    if diff.abs() < 0.01 {
        fade.alpha = fade.target_alpha;
        if fade.target_alpha >= 0.99 {
            // Fully black: switch scene, then reveal it.
            if let Some(scene) = pending.0.take() {
                next_scene.set(scene);
            }
            fade.target_alpha = 0.0;
        } else {
            fade.active = false;
        }
    } else {
        fade.alpha += diff.signum() * fade.speed * dt;
        fade.alpha = fade.alpha.clamp(0.0, 1.0);
    }

    for mut bg in &mut query {
        *bg = BackgroundColor(Color::srgba(0.0, 0.0, 0.0, fade.alpha));
    }
}
