//! Patrol Guard - patrolling, chasing and attacking 2D enemies in Bevy.
//!
//! # Architecture
//!
//! The heart of the crate is the enemy state machine in [`enemies::brain`].
//! It is plain simulation code: it reads positions, keeps its timed waits in
//! an [`enemies::TimerQueue`] and reports what should happen as
//! [`enemies::Intent`]s. The plugins below host it in a Bevy app:
//!
//! - **Core**: Game states, pausing, global events
//! - **Player**: Top-down movement and player configuration
//! - **Combat**: Health, player melee, damage and death handling
//! - **Enemies**: Enemy data, AI systems, animation and debug overlay
//! - **World**: Level data and spawning

pub mod combat;
pub mod core;
pub mod enemies;
pub mod player;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct PatrolGuardPlugin;

impl Plugin for PatrolGuardPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Combat systems
            .add_plugins(combat::CombatPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // World systems
            .add_plugins(world::WorldPlugin);
    }
}
