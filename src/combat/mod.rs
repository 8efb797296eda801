//! Combat module - health, player attacks and damage.

mod components;
mod plugin;
mod systems;

pub use components::*;
pub use plugin::CombatPlugin;
pub use systems::CombatSet;
