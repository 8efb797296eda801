//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. For example,
//! enemy AI only runs while `PlayState::Running` is active.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` to read enemy and level data
/// - Enter `InGame` once data is loaded and the level is spawned
/// - `GameOver` when the player dies
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading data files
    #[default]
    Loading,
    /// Active gameplay
    InGame,
    /// Player has died
    GameOver,
}

/// Sub-states for gameplay - only active when GameState::InGame.
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum PlayState {
    /// Simulation is ticking
    #[default]
    Running,
    /// Simulation clock is frozen, the world stays visible
    Paused,
}
