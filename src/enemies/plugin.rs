//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::ai;
use super::animation;
use super::data::{load_enemy_definitions, EnemyRegistry};
use super::debug::{self, DebugOverlay};
use super::schedule::EnemyTimers;
use crate::core::{GameState, PlayState};

/// Enemy plugin - handles enemy data, AI, animation and the debug overlay.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<EnemyRegistry>()
            .init_resource::<EnemyTimers>()
            .init_resource::<DebugOverlay>()
            // Definitions must be in place before the level spawns enemies
            .add_systems(OnEnter(GameState::Loading), load_enemy_definitions)
            // AI runs on the fixed tick: resumptions first, then evaluation,
            // then hits taken this tick
            .add_systems(
                FixedUpdate,
                (
                    ai::fire_enemy_timers,
                    ai::tick_enemy_brains,
                    ai::apply_enemy_damage,
                )
                    .chain()
                    .run_if(in_state(PlayState::Running)),
            )
            .add_systems(
                Update,
                (
                    animation::update_enemy_animators,
                    animation::tint_enemy_sprites,
                )
                    .chain()
                    .run_if(in_state(PlayState::Running)),
            )
            .add_systems(
                Update,
                (debug::toggle_debug_overlay, debug::draw_enemy_gizmos).chain(),
            );
    }
}
