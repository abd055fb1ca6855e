//! The asset-loading boundary: logical keys mapped to relative paths,
//! resolved by the Bevy asset server under its configured root.

use bevy::prelude::*;
use crate::shared::*;

/// Every externally loaded image, by logical key. The UI textures (heart,
/// touch buttons) are not listed here — they are generated at boot, see
/// [`super::textures`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKey {
    WalkCampEntrance,
    WalkCampCabins,
    WalkCampLake,
    WalkCabinInterior,
    PlayerSheet,
}

impl AssetKey {
    /// Relative path under the asset root.
    pub fn path(self) -> &'static str {
        match self {
            AssetKey::WalkCampEntrance => "backgrounds/camp-entrance.png",
            AssetKey::WalkCampCabins => "backgrounds/camp-cabins.png",
            AssetKey::WalkCampLake => "backgrounds/camp-lake.png",
            AssetKey::WalkCabinInterior => "backgrounds/camp-cabin-interior.png",
            AssetKey::PlayerSheet => "sprites/snoopy.png",
        }
    }
}

/// The walk level's background segments, left to right. The lake segment
/// repeats to pad the level to four zones, as in the level layout.
pub const WALK_BACKGROUNDS: [AssetKey; WALK_ZONE_COUNT] = [
    AssetKey::WalkCampEntrance,
    AssetKey::WalkCampCabins,
    AssetKey::WalkCampLake,
    AssetKey::WalkCampLake,
];

/// Background of the heart mini-game.
pub const HEART_GAME_BACKGROUND: AssetKey = AssetKey::WalkCampLake;
/// Background of the result screen.
pub const RESULT_BACKGROUND: AssetKey = AssetKey::WalkCabinInterior;

/// Decoded image handles indexed by key, plus the generated UI textures.
#[derive(Resource, Debug, Clone)]
pub struct GameAssets {
    pub camp_entrance: Handle<Image>,
    pub camp_cabins: Handle<Image>,
    pub camp_lake: Handle<Image>,
    pub cabin_interior: Handle<Image>,
    pub player: Handle<Image>,
    pub player_layout: Handle<TextureAtlasLayout>,
    pub heart: Handle<Image>,
    pub btn_left: Handle<Image>,
    pub btn_right: Handle<Image>,
    pub btn_action: Handle<Image>,
}

impl GameAssets {
    pub fn background(&self, key: AssetKey) -> Handle<Image> {
        match key {
            AssetKey::WalkCampEntrance => self.camp_entrance.clone(),
            AssetKey::WalkCampCabins => self.camp_cabins.clone(),
            AssetKey::WalkCampLake => self.camp_lake.clone(),
            AssetKey::WalkCabinInterior => self.cabin_interior.clone(),
            AssetKey::PlayerSheet => self.player.clone(),
        }
    }
}

/// Loads every external image and generates the UI textures. Running twice
/// is a guarded no-op (the handles already exist).
pub fn load_game_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    existing: Option<Res<GameAssets>>,
) {
    if existing.is_some() {
        return;
    }

    let assets = GameAssets {
        camp_entrance: asset_server.load(AssetKey::WalkCampEntrance.path()),
        camp_cabins: asset_server.load(AssetKey::WalkCampCabins.path()),
        camp_lake: asset_server.load(AssetKey::WalkCampLake.path()),
        cabin_interior: asset_server.load(AssetKey::WalkCabinInterior.path()),
        player: asset_server.load(AssetKey::PlayerSheet.path()),
        // 4-frame sheet: idle, two walk frames, jump.
        player_layout: layouts.add(TextureAtlasLayout::from_grid(
            UVec2::splat(64),
            4,
            1,
            None,
            None,
        )),
        heart: images.add(super::textures::heart_image()),
        btn_left: images.add(super::textures::arrow_button_image(true)),
        btn_right: images.add(super::textures::arrow_button_image(false)),
        btn_action: images.add(super::textures::action_button_image()),
    };

    info!("[Boot] Assets queued; UI textures generated");
    commands.insert_resource(assets);
}
