//! Enemy AI systems.
//!
//! These systems host [`EnemyBrain`] inside the ECS. Each fixed tick they
//! drain due timers, tick every brain and route damage into it, then carry
//! out the resulting intents on the physics body, sprite and animator.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::animation::EnemyAnimator;
use super::brain::{EnemyBrain, Intent, Senses};
use super::components::{Enemy, EnemyType, Target};
use super::schedule::EnemyTimers;
use crate::combat::{DamageEvent, Dead, DeathEvent};

/// Everything an enemy's intents can act on.
#[derive(SystemParam)]
pub struct EnemyActuators<'w, 's> {
    commands: Commands<'w, 's>,
    bodies: Query<
        'w,
        's,
        (
            Option<&'static mut Velocity>,
            Option<&'static mut ExternalImpulse>,
            Option<&'static mut Sprite>,
            Option<&'static mut EnemyAnimator>,
        ),
        With<Enemy>,
    >,
}

impl EnemyActuators<'_, '_> {
    /// Carry out and clear `intents` for `entity`. Returns `true` if the
    /// entity was despawned.
    pub fn apply(
        &mut self,
        entity: Entity,
        target: Option<Entity>,
        hit_direction: Vec2,
        intents: &mut Vec<Intent>,
    ) -> bool {
        let mut despawned = false;
        let Ok((mut velocity, mut impulse, mut sprite, mut animator)) = self.bodies.get_mut(entity)
        else {
            intents.clear();
            return false;
        };

        for intent in intents.drain(..) {
            match intent {
                Intent::Velocity(linvel) => {
                    if let Some(velocity) = velocity.as_mut() {
                        velocity.linvel = linvel;
                    }
                }
                Intent::Impulse(push) => {
                    if let Some(impulse) = impulse.as_mut() {
                        impulse.impulse += push;
                    }
                }
                Intent::AnimationSpeed(speed) => {
                    if let Some(animator) = animator.as_mut() {
                        animator.set_speed(speed);
                    }
                }
                Intent::Animation(trigger) => {
                    if let Some(animator) = animator.as_mut() {
                        animator.trigger(trigger);
                    }
                }
                Intent::Face { left } => {
                    if let Some(sprite) = sprite.as_mut() {
                        if sprite.flip_x != left {
                            sprite.flip_x = left;
                        }
                    }
                }
                Intent::DealDamage(amount) => {
                    // A target that no longer exists simply ignores the event.
                    if let Some(target) = target {
                        self.commands.send_event(DamageEvent {
                            target,
                            source: entity,
                            amount,
                            knockback: hit_direction,
                        });
                    }
                }
                Intent::DisableCollision => {
                    self.commands.entity(entity).insert((ColliderDisabled, Dead));
                }
                Intent::Despawn => {
                    self.commands.entity(entity).despawn_recursive();
                    despawned = true;
                }
            }
        }

        despawned
    }
}

fn sense(
    transform: &Transform,
    target: Option<&Target>,
    targets: &Query<&Transform, Without<Enemy>>,
) -> Senses {
    Senses {
        position: transform.translation.truncate(),
        target: target
            .and_then(|target| targets.get(target.0).ok())
            .map(|target| target.translation.truncate()),
    }
}

fn hit_direction(senses: &Senses) -> Vec2 {
    senses
        .target
        .map_or(Vec2::ZERO, |target| (target - senses.position).normalize_or_zero())
}

/// Resume enemies whose timers have come due.
pub fn fire_enemy_timers(
    time: Res<Time>,
    mut timers: ResMut<EnemyTimers>,
    mut brains: Query<(&mut EnemyBrain, &Transform, Option<&Target>), With<Enemy>>,
    targets: Query<&Transform, Without<Enemy>>,
    mut actuators: EnemyActuators,
) {
    let now = time.elapsed();
    let mut intents = Vec::new();

    while let Some(expired) = timers.0.pop_due(now) {
        // Entities removed some other way leave their timers behind.
        let Ok((mut brain, transform, target)) = brains.get_mut(expired.agent) else {
            continue;
        };

        let senses = sense(transform, target, &targets);
        brain.on_timer(expired, senses, &mut timers.0, &mut intents);

        let target = target.map(|target| target.0);
        if actuators.apply(expired.agent, target, hit_direction(&senses), &mut intents) {
            timers.0.forget(expired.agent);
            debug!("Removed enemy {:?}", expired.agent);
        }
    }
}

/// Run one evaluation step for every enemy.
pub fn tick_enemy_brains(
    time: Res<Time>,
    mut timers: ResMut<EnemyTimers>,
    mut brains: Query<(Entity, &mut EnemyBrain, &Transform, Option<&Target>), With<Enemy>>,
    targets: Query<&Transform, Without<Enemy>>,
    mut actuators: EnemyActuators,
) {
    let now = time.elapsed();
    let mut intents = Vec::new();

    for (entity, mut brain, transform, target) in brains.iter_mut() {
        if brain.is_dead() {
            continue;
        }

        let senses = sense(transform, target, &targets);
        brain.tick(entity, now, senses, &mut timers.0, &mut intents);

        let target = target.map(|target| target.0);
        actuators.apply(entity, target, hit_direction(&senses), &mut intents);
    }
}

/// Feed damage events aimed at enemies into their brains.
pub fn apply_enemy_damage(
    time: Res<Time>,
    mut damage_events: EventReader<DamageEvent>,
    mut timers: ResMut<EnemyTimers>,
    mut brains: Query<(&mut EnemyBrain, Option<&EnemyType>), With<Enemy>>,
    mut death_events: EventWriter<DeathEvent>,
    mut actuators: EnemyActuators,
) {
    let now = time.elapsed();
    let mut intents = Vec::new();

    for event in damage_events.read() {
        let Ok((mut brain, enemy_type)) = brains.get_mut(event.target) else {
            continue;
        };

        let applied = brain.apply_damage(
            event.target,
            event.amount,
            event.knockback,
            now,
            &mut timers.0,
            &mut intents,
        );
        if !applied {
            continue;
        }

        actuators.apply(event.target, None, Vec2::ZERO, &mut intents);

        if brain.is_dead() {
            let name = enemy_type.map_or("enemy", |t| t.0.as_str());
            info!("{} {:?} died", name, event.target);
            death_events.send(DeathEvent {
                entity: event.target,
                killed_by: Some(event.source),
            });
        }
    }
}
