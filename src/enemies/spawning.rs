//! Enemy spawning.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::animation::EnemyAnimator;
use super::brain::EnemyBrain;
use super::components::{Enemy, EnemyType, Target};
use super::data::EnemyDefinition;
use super::patrol::PatrolRoute;

/// Spawn an enemy of `enemy_type` at `position`.
///
/// `target` is the entity the enemy hunts. Both an empty route and a
/// missing target are allowed; each is reported once here and the enemy
/// runs without that behavior for its whole life.
pub fn spawn_enemy(
    commands: &mut Commands,
    enemy_type: &str,
    definition: &EnemyDefinition,
    position: Vec2,
    route: PatrolRoute,
    target: Option<Entity>,
) -> Entity {
    if route.is_empty() {
        warn!("No waypoints set for {}", definition.name);
    }
    if target.is_none() {
        warn!(
            "{}: no player to hunt. Enemy will not detect player.",
            definition.name
        );
    }

    let (width, height) = definition.sprite.size;
    let (r, g, b) = definition.sprite.color;
    let color = Color::srgb(r, g, b);
    let brain = EnemyBrain::new(definition.stats.clone(), route, target.is_some());

    let mut enemy = commands.spawn((
        Enemy,
        EnemyType(enemy_type.to_string()),
        Name::new(definition.name.clone()),
        brain,
        EnemyAnimator::new(color),
        Sprite::from_color(color, Vec2::new(width, height)),
        Transform::from_translation(position.extend(1.0)),
    ));

    enemy.insert((
        RigidBody::Dynamic,
        Collider::ball(definition.collider.radius),
        LockedAxes::ROTATION_LOCKED,
        GravityScale(0.0),
        Velocity::zero(),
        ExternalImpulse::default(),
        Damping {
            linear_damping: definition.collider.linear_damping,
            angular_damping: 0.0,
        },
    ));

    if let Some(target) = target {
        enemy.insert(Target(target));
    }

    info!("Spawned {} at ({}, {})", definition.name, position.x, position.y);
    enemy.id()
}
