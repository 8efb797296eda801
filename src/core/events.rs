//! Global events used for cross-system communication.
//!
//! Damage never mutates health directly: attackers send a [`DamageEvent`]
//! and whichever system owns the target's health applies it. A target that
//! has already been removed just never sees the event.

use bevy::prelude::*;

/// Sent when an entity takes damage.
#[derive(Event, Debug, Clone, Copy)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage
    pub source: Entity,
    pub amount: u32,
    /// Unit direction the hit pushes the target in
    pub knockback: Vec2,
}

/// Sent when an entity dies (health reaches 0).
#[derive(Event, Debug, Clone, Copy)]
pub struct DeathEvent {
    /// Entity that died
    pub entity: Entity,
    /// Entity that killed them (if any)
    pub killed_by: Option<Entity>,
}
