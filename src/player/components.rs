//! Player-related components.

use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Configuration for player movement and melee.
#[derive(Resource)]
pub struct PlayerConfig {
    pub max_health: u32,
    /// Base movement speed in units per second
    pub move_speed: f32,
    /// Sprint speed multiplier
    pub sprint_multiplier: f32,
    pub attack_damage: u32,
    /// Melee reach in units
    pub attack_reach: f32,
    /// Seconds between swings
    pub attack_cooldown: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_health: 100,
            move_speed: 5.0,
            sprint_multiplier: 1.5,
            attack_damage: 10,
            attack_reach: 1.6,
            attack_cooldown: 0.4,
        }
    }
}
