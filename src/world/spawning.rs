//! Level spawning: camera, player and enemies.

use bevy::prelude::*;

use super::level::{CurrentLevel, LevelDefinition, LevelRegistry};
use crate::enemies::{spawn_enemy, EnemyRegistry};
use crate::player::{spawn_player, PlayerConfig};

/// World units visible per screen pixel.
const CAMERA_SCALE: f32 = 0.02;

/// Marker for everything spawned as part of a level.
#[derive(Component)]
pub struct LevelEntity;

/// Build the current level when gameplay starts.
pub fn setup_level(
    mut commands: Commands,
    current_level: Res<CurrentLevel>,
    levels: Res<LevelRegistry>,
    enemies: Res<EnemyRegistry>,
    player_config: Res<PlayerConfig>,
) {
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        },
        LevelEntity,
    ));

    let Some(level) = levels.levels.get(&current_level.name) else {
        error!("Level '{}' not found in registry!", current_level.name);
        return;
    };

    info!("Building level: {}", level.name);
    spawn_level(&mut commands, level, &enemies, &player_config);
}

/// Spawn the player (if the level has one) and every enemy.
///
/// The player entity is handed to each enemy as its target here, so enemies
/// never search the world for something to hunt.
pub fn spawn_level(
    commands: &mut Commands,
    level: &LevelDefinition,
    enemies: &EnemyRegistry,
    player_config: &PlayerConfig,
) {
    for error in level.check_enemy_types(enemies) {
        warn!("{}", error);
    }

    let player = level.player_position().map(|position| {
        let player = spawn_player(commands, player_config, position);
        commands.entity(player).insert(LevelEntity);
        player
    });

    for spawn in &level.enemies {
        let Some(definition) = enemies.get(&spawn.enemy_type) else {
            continue;
        };

        let enemy = spawn_enemy(
            commands,
            &spawn.enemy_type,
            definition,
            spawn.position(),
            spawn.route(),
            player,
        );
        commands.entity(enemy).insert(LevelEntity);
    }
}
