//! Enemies module - the enemy state machine and the systems that host it.
//!
//! `brain`, `patrol` and `schedule` are plain simulation code with no ECS
//! access; the remaining modules wire them into the app.

mod ai;
pub mod animation;
pub mod brain;
mod components;
pub mod data;
pub mod debug;
pub mod patrol;
mod plugin;
pub mod schedule;
mod spawning;

pub use animation::{AnimationState, EnemyAnimator};
pub use brain::{AiState, AnimationTrigger, AttackPhase, EnemyBrain, Intent, Senses};
pub use components::*;
pub use data::{EnemyDefinition, EnemyRegistry};
pub use patrol::{PatrolDirection, PatrolMode, PatrolRoute};
pub use plugin::EnemyPlugin;
pub use schedule::{EnemyTimers, ExpiredTimer, TimerPurpose, TimerQueue, TimerToken};
pub use spawning::spawn_enemy;
