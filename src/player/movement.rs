//! Top-down player movement.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::*;
use crate::combat::{CombatState, Dead, Health};
use crate::core::PlayState;

const PLAYER_RADIUS: f32 = 0.4;

/// Configure movement systems.
pub fn setup_movement_systems(app: &mut App) {
    app.add_systems(
        Update,
        player_movement.run_if(in_state(PlayState::Running)),
    );
}

/// Spawn the player at `position` and return its entity.
pub fn spawn_player(commands: &mut Commands, config: &PlayerConfig, position: Vec2) -> Entity {
    let player = commands
        .spawn((
            Player,
            Name::new("Player"),
            Health::new(config.max_health),
            CombatState::default(),
            Sprite::from_color(Color::srgb(0.3, 0.55, 0.95), Vec2::splat(PLAYER_RADIUS * 2.0)),
            Transform::from_translation(position.extend(2.0)),
        ))
        .insert((
            RigidBody::Dynamic,
            Collider::ball(PLAYER_RADIUS),
            LockedAxes::ROTATION_LOCKED,
            GravityScale(0.0),
            Velocity::zero(),
            Damping {
                linear_damping: 6.0,
                angular_damping: 0.0,
            },
        ))
        .id();

    info!("Spawned player at ({}, {})", position.x, position.y);
    player
}

/// WASD movement, Shift to sprint.
fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<PlayerConfig>,
    mut query: Query<&mut Velocity, (With<Player>, Without<Dead>)>,
) {
    let Ok(mut velocity) = query.get_single_mut() else {
        return;
    };

    let mut direction = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        direction.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        direction.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        direction.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        direction.x += 1.0;
    }

    let speed = if keyboard.pressed(KeyCode::ShiftLeft) {
        config.move_speed * config.sprint_multiplier
    } else {
        config.move_speed
    };

    velocity.linvel = direction.normalize_or_zero() * speed;
}
