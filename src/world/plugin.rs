//! World plugin - level loading and spawning.

use bevy::prelude::*;

use super::level::{load_levels, CurrentLevel, LevelRegistry};
use super::spawning::setup_level;
use crate::core::GameState;

/// World plugin - loads level data and builds the level on entering the game.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelRegistry>()
            .init_resource::<CurrentLevel>()
            .add_systems(OnEnter(GameState::Loading), load_levels)
            .add_systems(OnEnter(GameState::InGame), setup_level);
    }
}
