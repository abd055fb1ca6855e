//! Data layer — populates the catalog registries at game startup.
//!
//! This plugin runs in OnEnter(GameScene::Boot), fills the RewardCatalog
//! and MessageScript from the hard-coded game-design data defined in
//! submodules. No other domain needs to seed these resources; scene plugins
//! can safely read them once the boot scene is active.

mod messages;
mod rewards;

use bevy::prelude::*;
use crate::shared::*;

pub use messages::MessageScript;
pub use rewards::{RewardCatalog, RewardEntry};

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RewardCatalog>();
        app.init_resource::<MessageScript>();
        app.add_systems(OnEnter(GameScene::Boot), load_all_data);
    }
}

/// Single system that populates both registries.
fn load_all_data(
    mut catalog: ResMut<RewardCatalog>,
    mut script: ResMut<MessageScript>,
) {
    rewards::populate_rewards(&mut catalog);
    info!("[Data] Rewards loaded: {}", catalog.entries.len());

    messages::populate_messages(&mut script);
    info!("[Data] Walk messages loaded: {}", script.triggers.len());
}
