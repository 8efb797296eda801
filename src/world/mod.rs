//! World module - level data and spawning.

mod error;
pub mod level;
mod plugin;
mod spawning;

pub use error::DataLoadError;
pub use level::{CurrentLevel, EnemySpawn, LevelDefinition, LevelRegistry};
pub use plugin::WorldPlugin;
pub use spawning::{setup_level, spawn_level, LevelEntity};
