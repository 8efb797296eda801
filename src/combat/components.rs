//! Combat-related components.

use bevy::prelude::*;

// Re-export from core to avoid duplication
pub use crate::core::{DamageEvent, DeathEvent};

/// Component for entities that can take damage.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Health {
    pub current: u32,
    pub maximum: u32,
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    /// Subtract damage, never going below zero. Returns the damage taken.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current == 0
    }

    pub fn fraction(&self) -> f32 {
        if self.maximum == 0 {
            return 0.0;
        }
        self.current as f32 / self.maximum as f32
    }
}

/// Melee attack state for the player.
#[derive(Component, Default)]
pub struct CombatState {
    /// Seconds until the next swing is allowed
    pub attack_cooldown: f32,
}

impl CombatState {
    pub fn can_attack(&self) -> bool {
        self.attack_cooldown <= 0.0
    }
}

/// Marker component for entities that have died (prevents multiple death events).
#[derive(Component)]
pub struct Dead;
