//! Combat systems - player attacks, damage and death handling.

use bevy::prelude::*;

use super::components::*;
use crate::core::{GameState, PlayState};
use crate::enemies::Enemy;
use crate::player::{Player, PlayerConfig};

/// System set ordering for combat.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CombatSet {
    Input,
    Damage,
}

/// Configure combat systems.
pub fn setup_combat_systems(app: &mut App) {
    app
        .configure_sets(
            Update,
            CombatSet::Input.run_if(in_state(PlayState::Running)),
        )
        .configure_sets(
            FixedUpdate,
            CombatSet::Damage.run_if(in_state(GameState::InGame)),
        )
        .add_systems(Update, (update_cooldowns, player_attack).chain().in_set(CombatSet::Input))
        .add_systems(
            FixedUpdate,
            (apply_damage, check_deaths).chain().in_set(CombatSet::Damage),
        );
}

/// Tick down attack cooldowns.
fn update_cooldowns(time: Res<Time>, mut query: Query<&mut CombatState>) {
    for mut combat in query.iter_mut() {
        if combat.attack_cooldown > 0.0 {
            combat.attack_cooldown -= time.delta_secs();
        }
    }
}

/// Space swings at every enemy within reach.
fn player_attack(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<PlayerConfig>,
    mut player_query: Query<(Entity, &Transform, &mut CombatState), (With<Player>, Without<Dead>)>,
    enemy_query: Query<(Entity, &Transform), (With<Enemy>, Without<Dead>)>,
) {
    if !keyboard.just_pressed(KeyCode::Space) {
        return;
    }

    let Ok((player, player_transform, mut combat)) = player_query.get_single_mut() else {
        return;
    };

    if !combat.can_attack() {
        return;
    }
    combat.attack_cooldown = config.attack_cooldown;

    let origin = player_transform.translation.truncate();
    for (enemy, enemy_transform) in enemy_query.iter() {
        let offset = enemy_transform.translation.truncate() - origin;
        if offset.length() > config.attack_reach {
            continue;
        }

        commands.send_event(DamageEvent {
            target: enemy,
            source: player,
            amount: config.attack_damage,
            knockback: offset.normalize_or_zero(),
        });
    }
}

/// Apply damage to entities that track their own `Health`.
///
/// Events for entities without health (enemies keep theirs in the brain)
/// or that no longer exist are skipped.
fn apply_damage(
    mut commands: Commands,
    mut damage_events: EventReader<DamageEvent>,
    mut health_query: Query<&mut Health, Without<Dead>>,
    mut death_events: EventWriter<DeathEvent>,
) {
    for event in damage_events.read() {
        let Ok(mut health) = health_query.get_mut(event.target) else {
            continue;
        };

        // Already killed by an earlier event this tick
        if health.is_dead() {
            continue;
        }

        let taken = health.take_damage(event.amount);
        debug!(
            "{:?} took {} damage ({}/{})",
            event.target, taken, health.current, health.maximum
        );

        if health.is_dead() {
            commands.entity(event.target).insert(Dead);
            death_events.send(DeathEvent {
                entity: event.target,
                killed_by: Some(event.source),
            });
        }
    }
}

/// React to deaths.
fn check_deaths(
    mut death_events: EventReader<DeathEvent>,
    player_query: Query<Entity, With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in death_events.read() {
        if player_query.get(event.entity).is_ok() {
            info!("Player died! Transitioning to Game Over...");
            next_state.set(GameState::GameOver);
        }
        // Enemies handle their own death sequence in the AI systems
    }
}
