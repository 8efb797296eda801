//! Patrol Guard - Entry Point
//!
//! Controls:
//! - WASD: Move
//! - Shift: Sprint
//! - Space: Attack
//! - F3: Toggle enemy debug overlay
//! - Escape: Pause/Unpause

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Enemy AI tick rate.
const SIMULATION_HZ: f64 = 50.0;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Patrol Guard".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        // Our game plugin
        .add_plugins(patrol_guard::PatrolGuardPlugin)

        .run();
}
