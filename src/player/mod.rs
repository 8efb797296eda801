//! Player module - player entity, health and movement.

mod components;
mod movement;
mod plugin;

pub use components::*;
pub use movement::spawn_player;
pub use plugin::PlayerPlugin;
