//! Enemy-related components.

use std::time::Duration;

use bevy::prelude::*;
use serde::Deserialize;

use crate::world::DataLoadError;

/// Marker component for all enemies.
#[derive(Component)]
pub struct Enemy;

/// Enemy type identifier (matches RON file name).
#[derive(Component, Clone)]
pub struct EnemyType(pub String);

/// The entity an enemy hunts, chosen when the enemy is spawned.
///
/// Enemies spawned without one never detect anything and only patrol.
#[derive(Component, Clone, Copy, Debug)]
pub struct Target(pub Entity);

/// Enemy tuning loaded from RON data files. Missing fields fall back to
/// the defaults below.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnemyStats {
    pub move_speed: f32,
    pub waypoint_reach_distance: f32,
    /// Seconds spent standing at each reached waypoint.
    pub wait_duration: f32,
    /// Added to the enemy position when measuring distance to a waypoint.
    pub waypoint_check_offset: (f32, f32),
    pub flip_sprite: bool,
    pub detection_range: f32,
    pub attack_range: f32,
    pub attack_damage: u32,
    /// Minimum seconds between two landed attack windups.
    pub attack_cooldown: f32,
    pub max_health: u32,
    pub knockback_force: f32,
}

impl Default for EnemyStats {
    fn default() -> Self {
        Self {
            move_speed: 3.0,
            waypoint_reach_distance: 0.1,
            wait_duration: 1.0,
            waypoint_check_offset: (0.0, 0.0),
            flip_sprite: true,
            detection_range: 5.0,
            attack_range: 1.5,
            attack_damage: 10,
            attack_cooldown: 2.0,
            max_health: 30,
            knockback_force: 5.0,
        }
    }
}

impl EnemyStats {
    pub fn wait_time(&self) -> Duration {
        Duration::from_secs_f32(self.wait_duration)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_secs_f32(self.attack_cooldown)
    }

    pub fn check_offset(&self) -> Vec2 {
        Vec2::new(self.waypoint_check_offset.0, self.waypoint_check_offset.1)
    }

    /// Reject values the state machine cannot run with.
    pub fn validate(&self, name: &str) -> Result<(), DataLoadError> {
        let non_negative = [
            ("move_speed", self.move_speed),
            ("waypoint_reach_distance", self.waypoint_reach_distance),
            ("wait_duration", self.wait_duration),
            ("detection_range", self.detection_range),
            ("attack_range", self.attack_range),
            ("attack_cooldown", self.attack_cooldown),
            ("knockback_force", self.knockback_force),
        ];

        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(DataLoadError::InvalidStats {
                    name: name.to_string(),
                    details: format!("{field} must be a finite, non-negative number (got {value})"),
                });
            }
        }

        if self.max_health == 0 {
            return Err(DataLoadError::InvalidStats {
                name: name.to_string(),
                details: "max_health must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
